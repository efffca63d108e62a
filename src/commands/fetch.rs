use tracing::info;

use crate::api::models::SiteConfigSource;
use crate::cli::FetchArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::loader;
use crate::output::text;

pub async fn run(ctx: &AppContext, args: FetchArgs) -> AppResult<()> {
    let client = ctx.portfolio_client(args.base_url.as_deref())?;
    let portfolio_id = args
        .portfolio_id
        .as_deref()
        .or_else(|| ctx.settings.portfolio_id());

    let loaded = loader::load_site_config(&client, portfolio_id).await;
    info!(
        profile = %ctx.profile,
        source = ?loaded.source,
        "site config loaded"
    );

    let note = match loaded.source {
        SiteConfigSource::Remote => format!("(from {})", client.base_url()),
        SiteConfigSource::Sample => "(sample site config)".to_string(),
    };
    let line = format!("{}\n{note}", text::site_summary(&loaded.site_config));
    ctx.output.emit(&line, &loaded.site_config)
}
