//! Runtime configuration.
//!
//! Layered with figment: built-in defaults, then an optional `portfolio.toml`
//! in the working directory, then `PORTFOLIO_*` environment variables.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const CONFIG_FILE: &str = "portfolio.toml";
pub const ENV_PREFIX: &str = "PORTFOLIO_";

/// Subdirectory of `static_dir` that holds uploaded avatars.
pub const UPLOAD_SUBDIR: &str = "uploads";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub listen_addr: String,
    pub database_url: String,
    pub loglevel: String,
    /// Publicly served directory; avatars are written to `<static_dir>/uploads`.
    pub static_dir: PathBuf,
    pub github_api_base: Url,
    pub github_timeout_ms: u64,
    pub max_upload_bytes: usize,
    /// Optional TOML file replacing the built-in skill icon table.
    pub skill_icons_path: Option<PathBuf>,
    pub seed_demo: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            database_url: "sqlite:portfolios.db".to_string(),
            loglevel: "info".to_string(),
            static_dir: PathBuf::from("static"),
            github_api_base: Url::parse("https://api.github.com")
                .expect("static GitHub API URL is valid"),
            github_timeout_ms: 5_000,
            max_upload_bytes: 16 * 1024 * 1024,
            skill_icons_path: None,
            seed_demo: false,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self, figment::Error> {
        figment.extract()
    }

    pub fn github_timeout(&self) -> Duration {
        Duration::from_millis(self.github_timeout_ms)
    }
}
