use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::cli::BuildArgs;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::site::{self, TemplateInput};

pub fn run(ctx: &AppContext, args: BuildArgs) -> AppResult<()> {
    let raw = match args.input.as_deref() {
        Some(path) => read_file(path)?,
        None => read_stdin()?,
    };

    let input = parse_input(&raw)?;
    let config = site::build_site_config(&input);
    ctx.output.emit_site_config(&config)
}

fn read_file(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|err| {
        AppError::InvalidInput(format!("failed to read input file {}: {err}", path.display()))
    })
}

fn read_stdin() -> AppResult<String> {
    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw)?;
    Ok(raw)
}

fn parse_input(raw: &str) -> AppResult<TemplateInput> {
    if raw.trim().is_empty() {
        return Ok(TemplateInput::default());
    }

    serde_json::from_str(raw)
        .map_err(|err| AppError::InvalidInput(format!("portfolio input is not valid json: {err}")))
}
