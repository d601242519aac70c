// crates/portal-client/src/components/mod.rs

pub mod sidebar;
pub mod order_entry;
pub mod ticker;
pub mod notifications;
pub mod loading;
pub mod status_bar;
pub mod help;
