use crate::api::odds_api::{OddsApiConfig, DEFAULT_ODDS_API_URL};

pub const DEFAULT_WEB_ADDR: &str = "127.0.0.1:3000";

/// Runtime settings read from the environment (and `.env`, if present)
#[derive(Debug, Clone)]
pub struct Settings {
    pub rapidapi_key: Option<String>,
    pub rapidapi_host: Option<String>,
    pub odds_api_url: String,
    pub web_addr: String,
}

impl Settings {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from any variable lookup, so tests need not touch the environment
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let settings = Self {
            rapidapi_key: lookup("RAPIDAPI_KEY"),
            rapidapi_host: lookup("RAPIDAPI_HOST"),
            odds_api_url: lookup("ODDS_API_URL").unwrap_or_else(|| DEFAULT_ODDS_API_URL.to_string()),
            web_addr: lookup("WEB_ADDR").unwrap_or_else(|| DEFAULT_WEB_ADDR.to_string()),
        };

        if settings.rapidapi_key.is_none() || settings.rapidapi_host.is_none() {
            tracing::warn!("RAPIDAPI_KEY or RAPIDAPI_HOST not set; odds fetches will fail");
        }

        settings
    }

    pub fn odds_api_config(&self) -> OddsApiConfig {
        OddsApiConfig::new(self.rapidapi_key.clone(), self.rapidapi_host.clone())
            .with_base_url(&self.odds_api_url)
    }
}
