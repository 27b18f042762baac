// src/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// CSS selectors used to pull listings out of the upstream page.
///
/// The upstream markup changes without notice, so the selector set is
/// configuration rather than code: adjust config.yaml, not the parser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    pub container: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub description: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            container: "div.item_recruit".to_string(),
            title: ".job_tit a".to_string(),
            company: ".area_corp .corp_name a".to_string(),
            location: ".job_condition span[class*=loc]".to_string(),
            salary: ".job_condition span.pay".to_string(),
            description: ".job_desc".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub listing_url: String,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    pub token_secret: String,
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: i64,
    #[serde(default)]
    pub selectors: SelectorConfig,
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> usize {
    20
}

fn default_token_ttl_secs() -> i64 {
    3600
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: AppConfig,
    production: AppConfig,
}

impl AppConfig {
    /// Load configuration based on environment, with env var overrides
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let mut config = Self::load_from_file(&environment)?;

        if let Ok(secret) = std::env::var("JOB_BOARD_TOKEN_SECRET") {
            config.token_secret = secret;
        }
        if let Ok(url) = std::env::var("JOB_BOARD_LISTING_URL") {
            config.listing_url = url;
        }

        Ok(config)
    }

    fn get_environment() -> String {
        std::env::var("JOB_BOARD_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file(environment: &str) -> Result<Self> {
        let config_path = PathBuf::from("config.yaml");
        if !config_path.exists() {
            anyhow::bail!("config.yaml not found in current directory. Server cannot start without configuration.");
        }

        let config_content =
            std::fs::read_to_string(&config_path).context("Failed to read config.yaml")?;

        let config_file: ConfigFile =
            serde_yaml::from_str(&config_content).context("Failed to parse config.yaml")?;

        let config = match environment {
            "production" => config_file.production,
            _ => config_file.local,
        };

        Ok(config)
    }
}
