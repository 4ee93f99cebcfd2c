//! Source of the fund list

use super::fund::FundRecord;
use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, error};

#[async_trait]
pub trait FundRepository: Send + Sync {
    async fn fetch_funds(&self) -> Result<Vec<FundRecord>>;
}

/// Fetches the fund list once. Any failure is logged and yields an empty list.
pub async fn load_funds(repository: &dyn FundRepository) -> Vec<FundRecord> {
    match repository.fetch_funds().await {
        Ok(funds) => {
            debug!(count = funds.len(), "Fetched mutual funds");
            funds
        }
        Err(e) => {
            error!(error = ?e, "Error fetching mutual funds");
            Vec::new()
        }
    }
}
