//! Order type (Market / Limit).

use serde::{Deserialize, Serialize};

/// Order type. Market orders carry no price; limit orders require one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Market,
    Limit,
}

impl OrderType {
    /// Wire representation used in the form-encoded order body.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderType::Market => "market",
            OrderType::Limit => "limit",
        }
    }

    /// Whether the price field applies to this order type.
    pub fn has_price(self) -> bool {
        matches!(self, OrderType::Limit)
    }
}
