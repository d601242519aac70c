//! Order submission wire types.
//!
//! `POST /market/order/submit` takes a form-encoded body and answers
//! with a small JSON envelope. Business rejections come back as
//! `success: false` with a human-readable `error`; the client surfaces
//! that message verbatim.

use serde::{Deserialize, Serialize};

use crate::draft::OrderDraft;
use crate::order_type::OrderType;
use crate::side::Side;

/// Form-encoded body of an order submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRequest {
    pub security_id: u32,
    pub quantity: u32,
    pub price: f64,
    pub side: Side,
    pub order_type: OrderType,
}

impl OrderRequest {
    /// Package a draft for submission. Lenient like the summary: bad
    /// numeric fields become 0 and are left for the server to reject.
    pub fn from_draft(draft: &OrderDraft) -> Self {
        OrderRequest {
            security_id: draft.security_id,
            quantity: draft.quantity_value() as u32,
            price: draft.price_value(),
            side: draft.side,
            order_type: draft.order_type,
        }
    }
}

/// JSON response envelope of the order endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub redirect: Option<String>,
}
