use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    pub profile_path: PathBuf,
    pub diary_path: PathBuf,
}

impl PortfolioConfig {
    pub fn load() -> Result<Self, AppError> {
        // Common config handles .env and the APP__ prefix.
        let common = core_config::Config::load()?;

        Ok(PortfolioConfig {
            common,
            content: ContentConfig {
                profile_path: env_path("PROFILE_PATH", "profile.json"),
                diary_path: env_path("DIARY_PATH", "diary.json"),
            },
        })
    }
}

fn env_path(key: &str, default: &str) -> PathBuf {
    env::var(key).unwrap_or_else(|_| default.to_string()).into()
}
