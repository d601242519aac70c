//! Order drafts and the derived cost summary.
//!
//! A draft is the transient, unsaved state of the order form. The summary
//! is always derived fresh from the draft; nothing here caches it.

use crate::order_type::OrderType;
use crate::side::Side;

/// Commission charged on order value, as a fraction (0.1%).
pub const COMMISSION_RATE: f64 = 0.001;

/// Transient order form state.
///
/// Quantity and price are kept as the raw field strings so the form can
/// echo back exactly what was typed; numeric interpretation is lenient
/// (missing or unparseable values count as 0).
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub security_id: u32,
    pub side: Side,
    pub order_type: OrderType,
    pub quantity: String,
    pub price: String,
}

impl OrderDraft {
    pub fn new(security_id: u32) -> Self {
        OrderDraft {
            security_id,
            side: Side::Buy,
            order_type: OrderType::Limit,
            quantity: String::new(),
            price: String::new(),
        }
    }

    /// Quantity as a number; 0 when the field is empty or unparseable.
    pub fn quantity_value(&self) -> f64 {
        parse_field(&self.quantity)
    }

    /// Price as a number. Market orders contribute 0 regardless of what
    /// is left in the hidden price field.
    pub fn price_value(&self) -> f64 {
        if self.order_type.has_price() {
            parse_field(&self.price)
        } else {
            0.0
        }
    }

    /// Derive the cost summary from the current field values.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::derive(self.side, self.quantity_value(), self.price_value())
    }
}

/// Derived order cost breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderSummary {
    pub value: f64,
    pub commission: f64,
    pub total_cost: f64,
}

impl OrderSummary {
    /// `value = quantity * price`, `commission = round(value * 0.001, 2)`,
    /// total is value plus commission when buying, minus when selling.
    pub fn derive(side: Side, quantity: f64, price: f64) -> Self {
        let value = quantity * price;
        let commission = round_cents(value * COMMISSION_RATE);
        let total_cost = match side {
            Side::Buy => value + commission,
            Side::Sell => value - commission,
        };
        OrderSummary {
            value,
            commission,
            total_cost,
        }
    }
}

/// Round to two decimal places (cents).
pub fn round_cents(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn parse_field(s: &str) -> f64 {
    let v: f64 = s.trim().parse().unwrap_or(0.0);
    if v.is_finite() && v >= 0.0 {
        v
    } else {
        0.0
    }
}
