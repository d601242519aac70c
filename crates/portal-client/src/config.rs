// crates/portal-client/src/config.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the portal client.
///
/// Loaded from a TOML file when one exists, otherwise defaults. The
/// server address can be overridden on the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub poll_interval_ms: u64,
    pub state_file: PathBuf,
    #[serde(default = "default_stats")]
    pub stats: Vec<StatCardConfig>,
    #[serde(default = "default_watchlist")]
    pub watchlist: Vec<WatchedSecurity>,
}

/// One dashboard stat card the server feeds via its stat key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatCardConfig {
    pub key: String,
    pub label: String,
}

/// One security row shown on the trading page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchedSecurity {
    pub id: u32,
    pub symbol: String,
    pub name: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8069".to_string(),
            poll_interval_ms: 5000,
            state_file: PathBuf::from("portal_state.json"),
            stats: default_stats(),
            watchlist: default_watchlist(),
        }
    }
}

impl ClientConfig {
    /// Load from a TOML file, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("parse config file {}", path.display()))?;
        Ok(config)
    }
}

fn default_stats() -> Vec<StatCardConfig> {
    [
        ("volume", "Volume"),
        ("trades", "Trades"),
        ("market_cap", "Market Cap"),
        ("index", "Index"),
    ]
    .into_iter()
    .map(|(key, label)| StatCardConfig {
        key: key.to_string(),
        label: label.to_string(),
    })
    .collect()
}

fn default_watchlist() -> Vec<WatchedSecurity> {
    [
        (1, "ACME", "Acme Industries"),
        (2, "GLBX", "Globex Corporation"),
        (3, "INTR", "Initech Research"),
    ]
    .into_iter()
    .map(|(id, symbol, name)| WatchedSecurity {
        id,
        symbol: symbol.to_string(),
        name: name.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = ClientConfig::load(Path::new("no_such_portal_config.toml")).unwrap();
        assert_eq!(config.poll_interval_ms, 5000);
        assert!(!config.watchlist.is_empty());
    }

    #[test]
    fn toml_round_trip() {
        let config = ClientConfig::default();
        let raw = toml::to_string(&config).unwrap();
        let back: ClientConfig = toml::from_str(&raw).unwrap();
        assert_eq!(back.base_url, config.base_url);
        assert_eq!(back.watchlist.len(), config.watchlist.len());
    }
}
