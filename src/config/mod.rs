//! Typed configuration from environment variables.
//!
//! Loads once at startup. The things and aliases themselves live in the
//! catalog file this config points at.

pub mod catalog;

pub use catalog::{AliasTable, Catalog, DEFAULT_CATALOG, Entry, ThingTable};

use crate::error::{Error, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: PathBuf,
    /// True when `catalog_path` is the default location, which is seeded
    /// with a sample catalog on first run.
    pub seed_catalog: bool,
    /// Upper bound on concurrent opens. 0 = one per available CPU.
    pub max_workers: usize,
    /// Launcher program overriding platform detection.
    pub launcher: Option<String>,
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv().ok()` before this to pick up a local `.env`.
    pub fn from_env() -> Result<Self> {
        let (catalog_path, seed_catalog) = match std::env::var_os("LAUNCHQ_CONFIG") {
            Some(path) => (PathBuf::from(path), false),
            None => (default_catalog_path()?, true),
        };

        Ok(Self {
            catalog_path,
            seed_catalog,
            max_workers: parse_var("LAUNCHQ_MAX_WORKERS")?.unwrap_or(1),
            launcher: std::env::var("LAUNCHQ_LAUNCHER")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Load the catalog this config points at.
    ///
    /// The default location is seeded on first run. An explicitly configured
    /// path that does not exist is a config error.
    pub fn load_catalog(&self) -> Result<Catalog> {
        if self.seed_catalog {
            Catalog::load_or_seed(&self.catalog_path)
        } else {
            Catalog::load(&self.catalog_path)
        }
    }
}

/// `~/.launchq/config.toml`
pub fn default_catalog_path() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".launchq").join("config.toml"))
        .ok_or_else(|| Error::Config("cannot determine home directory".to_string()))
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| Error::Config(format!("invalid {name}={raw:?}: {e}"))),
        Err(_) => Ok(None),
    }
}
