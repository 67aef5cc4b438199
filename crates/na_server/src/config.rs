use na_core::{Error, Result};

const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org/v2";
const DEFAULT_DATABASE_URL: &str = "sqlite:news_analyses.db";

/// Environment-sourced configuration. Secrets and the preference come from
/// the environment (optionally via .env); operational knobs are CLI flags.
#[derive(Debug, Clone)]
pub struct Config {
    pub user_preference: String,
    pub news_api_key: String,
    pub news_api_url: String,
    pub gemini_api_key: Option<String>,
    pub gemini_api_url: Option<String>,
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            user_preference: require("USER_PREFERENCE")?,
            news_api_key: require("NEWS_API_KEY")?,
            news_api_url: std::env::var("NEWS_API_URL")
                .unwrap_or_else(|_| DEFAULT_NEWS_API_URL.to_string()),
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            gemini_api_url: std::env::var("GEMINI_API_URL").ok(),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
        })
    }
}

fn require(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| Error::Config(format!("{} must be set in the environment", name)))
}
