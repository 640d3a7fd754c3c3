// Metrics derived from an external product catalog

use crate::models::{MetricsSample, ProductRecord};
use std::time::Duration;
use thiserror::Error;
use tracing::{instrument, warn};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("catalog request failed with status: {0}")]
    Status(reqwest::StatusCode),
    #[error("catalog payload malformed: {0}")]
    Decode(#[from] serde_json::Error),
}

pub struct CatalogClient {
    client: reqwest::Client,
    url: String,
}

impl CatalogClient {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder =
            reqwest::Client::builder().user_agent(crate::version::user_agent());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| anyhow::anyhow!("catalog http client: {}", e))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// A `null` body counts as an empty catalog.
    #[instrument(skip(self), fields(source = "catalog", operation = "fetch_products"))]
    pub async fn fetch_products(&self) -> Result<Vec<ProductRecord>, CatalogError> {
        tracing::debug!(url = %self.url, "fetching products");
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }
        let body = response.bytes().await?;
        let products: Option<Vec<ProductRecord>> = serde_json::from_slice(&body)?;
        Ok(products.unwrap_or_default())
    }

    /// Never fails: any fetch or decode error becomes [`MetricsSample::critical`].
    pub async fn fetch_metrics(&self) -> MetricsSample {
        match self.fetch_products().await {
            Ok(products) => summarize(&products),
            Err(e) => {
                warn!(error = %e, "catalog unavailable, reporting critical sample");
                MetricsSample::critical()
            }
        }
    }
}

/// cpu = mean rating x 10, network = total price / 5, disk = count x 15.
pub fn summarize(products: &[ProductRecord]) -> MetricsSample {
    if products.is_empty() {
        return MetricsSample::zero();
    }
    let count = products.len() as f64;
    let total_rating: f64 = products.iter().map(|p| p.rating.rate).sum();
    let total_price: f64 = products.iter().map(|p| p.price).sum();
    MetricsSample::from_readings(
        (total_rating / count) * 10.0,
        total_price / 5.0,
        count * 15.0,
    )
}
