//! portal-core
//!
//! Pure portal domain logic:
//! - order side / order type
//! - order drafts and the derived cost summary
//! - market snapshot wire types
//! - order submission wire types
//! - display formatting helpers

pub mod side;
pub mod order_type;
pub mod draft;
pub mod snapshot;
pub mod order;
pub mod format;

pub use side::Side;
pub use order_type::OrderType;

pub use draft::{OrderDraft, OrderSummary, COMMISSION_RATE};
pub use snapshot::{MarketSnapshot, SecurityQuote, SnapshotEnvelope, StatValue};
pub use order::{OrderRequest, OrderResponse};
pub use format::{format_currency, format_number, format_percent, Debouncer};
