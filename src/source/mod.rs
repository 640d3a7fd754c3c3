// Metrics sources, selected once at startup

pub mod catalog;
pub mod random;

use crate::config::{SourceConfig, SourceKind};
use crate::models::MetricsSample;
use catalog::CatalogClient;
use std::time::Duration;

pub enum MetricsSource {
    /// Fresh random readings per call.
    Random,
    /// Readings derived from the product catalog API.
    Catalog(CatalogClient),
}

impl MetricsSource {
    pub fn from_config(config: &SourceConfig) -> anyhow::Result<Self> {
        match config.kind {
            SourceKind::Random => Ok(Self::Random),
            SourceKind::Catalog => {
                let timeout = config.timeout_secs.map(Duration::from_secs);
                Ok(Self::Catalog(CatalogClient::new(
                    config.catalog_url.clone(),
                    timeout,
                )?))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Catalog(_) => "catalog",
        }
    }

    /// Upstream URL, for sources that fetch remotely.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::Random => None,
            Self::Catalog(client) => Some(client.url()),
        }
    }

    pub async fn sample(&self) -> MetricsSample {
        match self {
            Self::Random => random::generate(),
            Self::Catalog(client) => client.fetch_metrics().await,
        }
    }
}
