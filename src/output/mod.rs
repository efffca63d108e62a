pub mod json;
pub mod text;

use serde::Serialize;

use crate::error::AppResult;
use crate::site::SiteConfig;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn emit<T: Serialize>(&self, text_line: &str, json_value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => text::print_line(text_line),
            OutputMode::Json => json::print(json_value),
        }
    }

    pub fn emit_site_config(&self, config: &SiteConfig) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => text::print_line(&text::site_summary(config)),
            OutputMode::Json => json::print(config),
        }
    }
}
