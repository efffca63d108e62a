use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "devfolio",
    version,
    about = "Normalize and fetch developer portfolio site configs"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "default",
        help = "Profile name to use"
    )]
    pub profile: String,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Normalize raw portfolio data into a site config
    Build(BuildArgs),
    /// Fetch a site config, falling back to the sample
    Fetch(FetchArgs),
    /// Print the bundled sample site config
    Sample,
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    #[arg(long, short = 'i', help = "Read portfolio JSON from file (default: stdin)")]
    pub input: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    #[arg(long, help = "Portfolio id to fetch")]
    pub portfolio_id: Option<String>,
    #[arg(long, help = "Portfolio server base url")]
    pub base_url: Option<String>,
}
