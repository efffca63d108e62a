use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        profile,
        json,
        verbose: _,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(profile, json)?;

    match command {
        Command::Build(args) => commands::build::run(&ctx, args),
        Command::Fetch(args) => commands::fetch::run(&ctx, args).await,
        Command::Sample => commands::sample::run(&ctx),
    }
}
