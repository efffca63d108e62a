pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod loader;
pub mod output;
pub mod site;

use cli::Cli;
use error::AppResult;

pub use loader::fetch_site_config;
pub use site::{SiteConfig, TemplateInput, build_site_config};

pub async fn run(cli: Cli) -> AppResult<()> {
    app::run(cli).await
}
