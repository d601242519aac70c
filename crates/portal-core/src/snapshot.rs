//! Market snapshot wire types.
//!
//! One poll of `GET /market/data/update` returns the whole snapshot:
//! a mapping of stat keys to values and an ordered list of security
//! quotes. The previous snapshot is discarded wholesale; the client
//! patches whatever it already displays from the new one.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One dashboard stat (e.g. `"volume"`, `"market_cap"`).
///
/// The server pre-formats `value` for display; `change` is the percent
/// move used to pick the up/down styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    pub value: String,
    #[serde(default)]
    pub change: f64,
}

/// One security quote from the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityQuote {
    pub id: u32,
    pub symbol: String,
    pub current_price: f64,
    #[serde(default)]
    pub change_percent: f64,
}

/// The full market payload of one poll tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    #[serde(default)]
    pub stats: IndexMap<String, StatValue>,
    #[serde(default)]
    pub securities: Vec<SecurityQuote>,
}

/// Response envelope for the market data endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotEnvelope {
    pub success: bool,
    #[serde(default)]
    pub data: Option<MarketSnapshot>,
    #[serde(default)]
    pub error: Option<String>,
}

impl SnapshotEnvelope {
    /// Unwrap the snapshot, or the server-side error message when the
    /// poll was refused.
    pub fn into_snapshot(self) -> Result<MarketSnapshot, String> {
        if self.success {
            Ok(self.data.unwrap_or_default())
        } else {
            Err(self
                .error
                .unwrap_or_else(|| "market data unavailable".to_string()))
        }
    }
}
