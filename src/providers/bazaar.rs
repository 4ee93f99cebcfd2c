use crate::core::{FundRecord, FundRepository};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use tracing::{debug, error};

/// Client for the Bazaar mutual funds API. One request per call, no retries.
pub struct BazaarProvider {
    base_url: String,
}

impl BazaarProvider {
    pub fn new(base_url: &str) -> Self {
        BazaarProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl FundRepository for BazaarProvider {
    async fn fetch_funds(&self) -> Result<Vec<FundRecord>> {
        let url = format!("{}/api/funds", self.base_url);
        debug!("Requesting fund list from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("fundbazaar/0.1")
            .build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {url}"))?
            .error_for_status()
            .context("Fund list request returned an error status")?;

        let response_text = response
            .text()
            .await
            .context("Failed to get response text")?;

        if response_text.trim().is_empty() {
            return Err(anyhow!("Received empty response from {}", url));
        }

        let funds: Vec<FundRecord> = match serde_json::from_str(&response_text) {
            Ok(data) => data,
            Err(e) => {
                error!(
                    error = ?e,
                    response = %response_text,
                    "Failed to parse fund list response"
                );
                return Err(e).context("Failed to parse fund list response");
            }
        };

        Ok(funds)
    }
}
