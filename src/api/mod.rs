pub mod odds_api;

use crate::error::FetchError;
use crate::models::OddsSnapshot;
use async_trait::async_trait;

/// Anything that can produce the odds snapshot for a date
#[async_trait]
pub trait OddsSource: Send + Sync {
    /// `date` is YYYYMMDD and has already been validated
    async fn fetch_odds(&self, date: &str) -> Result<OddsSnapshot, FetchError>;
}
