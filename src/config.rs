//! Configuration management for moviecli.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, io::ErrorKind, path::PathBuf, time::Duration};

use tracing::debug;

use crate::{error::ConfigError, management::FileStore};

pub const DEFAULT_TMDB_API_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

pub const TMDB_API_KEY: &str = "TMDB_API_KEY";
pub const TMDB_API_URL: &str = "TMDB_API_URL";
pub const TMDB_IMAGE_BASE_URL: &str = "TMDB_IMAGE_BASE_URL";
pub const MOVIECLI_DATA_DIR: &str = "MOVIECLI_DATA_DIR";
pub const MOVIECLI_SEARCH_TIMEOUT_SECS: &str = "MOVIECLI_SEARCH_TIMEOUT_SECS";

/// Loads environment variables from `<local data dir>/moviecli/.env`.
///
/// The directory is created if needed. A missing `.env` file is fine; the
/// process environment alone can carry the configuration. Variables already
/// set in the environment are not overridden.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/moviecli/.env`
/// - macOS: `~/Library/Application Support/moviecli/.env`
/// - Windows: `%LOCALAPPDATA%/moviecli/.env`
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("moviecli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    match dotenv::from_path(&path) {
        Ok(()) => Ok(()),
        Err(dotenv::Error::Io(e)) if e.kind() == ErrorKind::NotFound => {
            debug!("no env file at {}", path.display());
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Only search commands need it.
    pub api_key: Option<String>,
    pub api_url: String,
    pub image_base_url: String,
    /// Root of the local key-value namespace.
    pub data_dir: PathBuf,
    pub search_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.is_empty());

        let search_timeout = match get(MOVIECLI_SEARCH_TIMEOUT_SECS) {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                    var: MOVIECLI_SEARCH_TIMEOUT_SECS,
                    reason: e.to_string(),
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            api_key: get(TMDB_API_KEY),
            api_url: get(TMDB_API_URL).unwrap_or_else(|| DEFAULT_TMDB_API_URL.to_string()),
            image_base_url: get(TMDB_IMAGE_BASE_URL)
                .unwrap_or_else(|| DEFAULT_TMDB_IMAGE_BASE_URL.to_string()),
            data_dir: get(MOVIECLI_DATA_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(FileStore::default_root),
            search_timeout,
        })
    }

    /// `<api_url>/search/movie`
    pub fn search_url(&self) -> String {
        format!("{}/search/movie", self.api_url.trim_end_matches('/'))
    }

    pub fn require_api_key(&self) -> Result<String, ConfigError> {
        self.api_key.clone().ok_or(ConfigError::Missing(TMDB_API_KEY))
    }
}
