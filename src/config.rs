use std::time::Duration;

use serde::Deserialize;

/// Client configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Recommendation backend base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Path of the top-3 endpoint under `api_url`
    #[serde(default = "default_recommendation_path")]
    pub recommendation_path: String,

    /// Upper bound on one recommendation request, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Descriptions longer than this are truncated when rendered
    #[serde(default = "default_description_max_chars")]
    pub description_max_chars: usize,
}

fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_recommendation_path() -> String {
    "/api/v1/top3".to_string()
}

// Backend search + analysis takes 30-60s
fn default_request_timeout_secs() -> u64 {
    90
}

fn default_description_max_chars() -> usize {
    240
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            recommendation_path: default_recommendation_path(),
            request_timeout_secs: default_request_timeout_secs(),
            description_max_chars: default_description_max_chars(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Full URL of the recommendation endpoint
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            self.recommendation_path.trim_start_matches('/')
        )
    }
}
