use crate::context::AppContext;
use crate::error::AppResult;
use crate::site;

pub fn run(ctx: &AppContext) -> AppResult<()> {
    ctx.output.emit_site_config(site::sample())
}
