//! Side (Buy / Sell) for order drafts and submissions.

use serde::{Deserialize, Serialize};

/// Order side: Buy or Sell.
///
/// The order endpoint takes the lowercase wire strings `"buy"` / `"sell"`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Wire representation used in the form-encoded order body.
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }

    /// Try to parse from the wire string (lowercase only).
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "buy" => Some(Side::Buy),
            "sell" => Some(Side::Sell),
            _ => None,
        }
    }
}
