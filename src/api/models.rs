use serde::Serialize;

use crate::site::SiteConfig;

/// Where a loaded site config came from.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteConfigSource {
    Remote,
    Sample,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedSiteConfig {
    pub source: SiteConfigSource,
    pub site_config: SiteConfig,
}
