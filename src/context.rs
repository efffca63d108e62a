use tracing::debug;

use crate::api::PortfolioClient;
use crate::config::{self, AppPaths, Settings};
use crate::error::AppResult;
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub profile: String,
    pub settings: Settings,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(profile: String, json: bool) -> AppResult<Self> {
        let profile = config::resolve_profile(&profile);
        let paths = AppPaths::discover()?;
        let settings = config::load_settings(&paths, &profile)?;
        let output = Output::new(json);

        debug!(
            profile = %profile,
            config_dir = %paths.config_dir().display(),
            "loaded profile settings"
        );

        Ok(Self {
            profile,
            settings,
            output,
        })
    }

    /// Builds a client against `base_url`, or the profile's base url.
    pub fn portfolio_client(&self, base_url: Option<&str>) -> AppResult<PortfolioClient> {
        let base_url = base_url.unwrap_or_else(|| self.settings.base_url());
        PortfolioClient::new(base_url, self.settings.timeout()?)
    }
}
