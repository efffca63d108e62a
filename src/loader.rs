//! Best-effort site config retrieval.
//!
//! Any failure (transport, non-success status, unreadable body) collapses
//! into one outcome: the bundled sample config is served instead. Nothing is
//! surfaced to the caller beyond a `warn` log line.

use tracing::{debug, warn};

use crate::api::PortfolioClient;
use crate::api::models::{LoadedSiteConfig, SiteConfigSource};
use crate::site::{self, SiteConfig};

pub async fn fetch_site_config(
    client: &PortfolioClient,
    portfolio_id: Option<&str>,
) -> SiteConfig {
    load_site_config(client, portfolio_id).await.site_config
}

pub async fn load_site_config(
    client: &PortfolioClient,
    portfolio_id: Option<&str>,
) -> LoadedSiteConfig {
    let Some(portfolio_id) = portfolio_id.map(str::trim).filter(|id| !id.is_empty()) else {
        debug!("no portfolio id given; serving sample site config");
        return sample_config();
    };

    match client.get_site_config(portfolio_id).await {
        Ok(site_config) => LoadedSiteConfig {
            source: SiteConfigSource::Remote,
            site_config,
        },
        Err(err) => {
            warn!(
                portfolio_id,
                base_url = client.base_url(),
                error = %err,
                "site config unavailable; serving sample site config"
            );
            sample_config()
        }
    }
}

fn sample_config() -> LoadedSiteConfig {
    LoadedSiteConfig {
        source: SiteConfigSource::Sample,
        site_config: site::sample().clone(),
    }
}
