use super::OddsSource;
use crate::error::FetchError;
use crate::models::OddsSnapshot;
use async_trait::async_trait;

pub const DEFAULT_ODDS_API_URL: &str = "https://tank01-fantasy-stats.p.rapidapi.com";
const NBA_ODDS_PATH: &str = "getNBABettingOdds";

/// Connection settings for the RapidAPI odds endpoint
#[derive(Debug, Clone)]
pub struct OddsApiConfig {
    pub api_key: Option<String>,
    pub api_host: Option<String>,
    pub base_url: String,
}

impl OddsApiConfig {
    pub fn new(api_key: Option<String>, api_host: Option<String>) -> Self {
        Self {
            api_key,
            api_host,
            base_url: DEFAULT_ODDS_API_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Key and host, or `MissingCredentials` if either is absent or blank
    fn credentials(&self) -> Result<(&str, &str), FetchError> {
        let key = self.api_key.as_deref().filter(|k| !k.trim().is_empty());
        let host = self.api_host.as_deref().filter(|h| !h.trim().is_empty());
        match (key, host) {
            (Some(key), Some(host)) => Ok((key, host)),
            _ => Err(FetchError::MissingCredentials),
        }
    }
}

pub struct OddsApiClient {
    config: OddsApiConfig,
    client: reqwest::Client,
}

impl OddsApiClient {
    pub fn new(config: OddsApiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Fetch NBA betting odds for every game on a date (YYYYMMDD)
    pub async fn fetch_nba_odds(&self, date: &str) -> Result<OddsSnapshot, FetchError> {
        // Bail before touching the network when credentials are missing
        let (api_key, api_host) = self.config.credentials()?;

        let url = format!("{}/{}", self.config.base_url, NBA_ODDS_PATH);
        tracing::debug!(%url, game_date = date, "Requesting NBA odds");

        let response = self
            .client
            .get(&url)
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", api_host)
            .query(&[("gameDate", date)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        let snapshot: OddsSnapshot = serde_json::from_str(&text)?;

        if !snapshot.is_success() {
            return Err(FetchError::Provider {
                status_code: snapshot.status_code,
                message: snapshot.error.clone().unwrap_or_default(),
            });
        }

        tracing::info!(
            game_date = date,
            games = snapshot.body.len(),
            "Fetched NBA odds"
        );

        Ok(snapshot)
    }
}

#[async_trait]
impl OddsSource for OddsApiClient {
    async fn fetch_odds(&self, date: &str) -> Result<OddsSnapshot, FetchError> {
        self.fetch_nba_odds(date).await
    }
}
