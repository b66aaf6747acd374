use crate::error::ProbeError;
use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_LOG_DIR: &str = "Log";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; SpotyMateBotTest/1.0)";

#[derive(Parser, Debug, Default)]
#[clap(name = "spotify-api-probe", version, about)]
pub struct Cli {
    /// Optional path to a TOML configuration file
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Override the probed URL
    #[clap(long)]
    pub url: Option<String>,

    /// Override the log directory
    #[clap(long)]
    pub log_dir: Option<PathBuf>,

    /// Override the request timeout in seconds
    #[clap(long)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub url: String,
    pub log_dir: PathBuf,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ProbeError> {
        match self.log_level.to_lowercase().as_str() {
            "off" => Ok(LevelFilter::Off),
            "trace" => Ok(LevelFilter::Trace),
            "debug" => Ok(LevelFilter::Debug),
            "info" => Ok(LevelFilter::Info),
            "warn" | "warning" => Ok(LevelFilter::Warn),
            "error" => Ok(LevelFilter::Error),
            _ => Err(ProbeError::ConfigError(format!(
                "Invalid log level: {}. Valid levels are: off, trace, debug, info, warn, error",
                self.log_level
            ))),
        }
    }

    fn validate(&self) -> Result<(), ProbeError> {
        if self.url.trim().is_empty() {
            return Err(ProbeError::ConfigError("url must not be empty".into()));
        }
        if self.timeout_secs == 0 {
            return Err(ProbeError::ConfigError(
                "timeout_secs must be greater than zero".into(),
            ));
        }
        self.level_filter().map(|_| ())
    }
}

pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match cli.config {
        Some(ref path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            parse_config(&content).context("Failed to parse config file")?
        }
        None => Config::default(),
    };

    // Apply CLI overrides
    if let Some(ref url) = cli.url {
        config.url = url.clone();
    }

    if let Some(ref log_dir) = cli.log_dir {
        config.log_dir = log_dir.clone();
    }

    if let Some(timeout_secs) = cli.timeout_secs {
        config.timeout_secs = timeout_secs;
    }

    config.validate()?;
    Ok(config)
}

fn parse_config(content: &str) -> Result<Config, ProbeError> {
    Ok(toml::from_str(content)?)
}
