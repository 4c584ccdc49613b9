use crate::domain::model::{CatalogEntry, TitleMediumResponse};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{Result, SortError};
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::{Client, StatusCode};

pub const TITLE_MEDIUM_ENDPOINT: &str = "https://cal.syoboi.jp/json.php?Req=TitleMedium";

/// `syoboi-sorting/<version> (<os>-<arch>)`, built once at startup.
pub fn user_agent() -> String {
    format!(
        "syoboi-sorting/{} ({}-{})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Client for the Syoboi Calendar `TitleMedium` listing.
pub struct SyoboiClient {
    client: Client,
    endpoint: String,
    user_agent: String,
}

impl SyoboiClient {
    pub fn new(endpoint: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            user_agent: user_agent.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CatalogSource for SyoboiClient {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>> {
        tracing::debug!("Requesting TitleMedium from: {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("TitleMedium response status: {}", status);

        if status != StatusCode::OK {
            return Err(SortError::UnexpectedStatus {
                code: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let decoded: TitleMediumResponse = serde_json::from_slice(&body)?;
        let entries = decoded.into_entries();

        tracing::info!("📺 Fetched {} titles", entries.len());
        Ok(entries)
    }
}
