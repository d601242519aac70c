// crates/portal-client/src/app.rs

use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

use crate::components::loading::{LoadingState, PanelId};
use crate::components::notifications::{NotificationCenter, Severity};
use crate::components::order_entry::OrderForm;
use crate::components::sidebar::Sidebar;
use crate::components::ticker::MarketTicker;
use crate::config::ClientConfig;
use crate::network::{Command, PortalEvent};
use crate::state::LocalStore;

/// Delay between an accepted order and following its redirect route.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

pub enum InputMode {
    Normal,
    Editing,
}

/// Top-level application state.
///
/// Each UI concern lives in its own component instance, constructed
/// once here and passed to the draw functions; there are no hidden
/// globals. The app owns the only handle to the persisted local store.
pub struct App {
    pub route: String,
    pub should_quit: bool,
    pub show_help: bool,
    pub input_mode: InputMode,
    pub terminal_width: u16,

    pub sidebar: Sidebar,
    pub notifications: NotificationCenter,
    pub loading: LoadingState,
    pub order_form: OrderForm,
    pub ticker: MarketTicker,

    /// Accepted/refused submissions shown on the Orders page, newest
    /// first.
    pub order_log: Vec<String>,

    pending_redirect: Option<(String, Instant)>,
    store: LocalStore,
    network_tx: Option<UnboundedSender<Command>>,
}

impl App {
    pub fn new(config: &ClientConfig, store: LocalStore, route: &str) -> Self {
        // The persisted collapse flag is applied before the first draw.
        let sidebar = Sidebar::new(store.sidebar_collapsed());
        // Busy until the startup poll delivers the first snapshot.
        let mut loading = LoadingState::new();
        loading.begin(PanelId::Ticker);
        App {
            route: route.to_string(),
            should_quit: false,
            show_help: false,
            input_mode: InputMode::Normal,
            terminal_width: 0,
            sidebar,
            notifications: NotificationCenter::new(),
            loading,
            order_form: OrderForm::new(config.watchlist.clone()),
            ticker: MarketTicker::new(&config.stats, &config.watchlist),
            order_log: Vec::new(),
            pending_redirect: None,
            store,
            network_tx: None,
        }
    }

    pub fn set_network_sender(&mut self, tx: UnboundedSender<Command>) {
        self.network_tx = Some(tx);
    }

    pub fn navigate(&mut self, path: &str) {
        self.route = path.to_string();
        self.sidebar.close_overlay();
    }

    /// Toggle the sidebar collapse axis and persist the new state.
    pub fn toggle_sidebar_collapsed(&mut self) {
        let collapsed = self.sidebar.toggle_collapsed();
        if let Err(e) = self.store.set_sidebar_collapsed(collapsed) {
            warn!("could not persist sidebar state: {:#}", e);
        }
    }

    pub fn on_resize(&mut self, width: u16) {
        self.terminal_width = width;
        self.sidebar.handle_resize(width);
    }

    /// Kick off an order submission. A no-op while one is in flight
    /// (the submit control is disabled).
    pub fn submit_order(&mut self) {
        let Some(req) = self.order_form.begin_submit() else {
            return;
        };
        if req.quantity == 0 {
            self.order_form.settle_submit(false);
            self.notifications
                .show("Quantity is required", Severity::Warning);
            return;
        }
        self.loading.begin(PanelId::OrderEntry);
        if let Some(tx) = &self.network_tx {
            let _ = tx.send(Command::SubmitOrder(req));
        }
    }

    /// Apply a network event to the owning component.
    pub fn handle_event(&mut self, event: PortalEvent) {
        match event {
            PortalEvent::Snapshot(snapshot) => {
                self.ticker.apply_snapshot(&snapshot);
                self.loading.end(PanelId::Ticker);
            }
            PortalEvent::OrderAccepted(resp) => {
                self.order_form.settle_submit(true);
                self.loading.end(PanelId::OrderEntry);
                let message = resp
                    .message
                    .unwrap_or_else(|| "Order placed successfully".to_string());
                self.order_log.insert(0, message.clone());
                self.notifications.show(message, Severity::Success);
                if let Some(route) = resp.redirect {
                    self.pending_redirect = Some((route, Instant::now() + REDIRECT_DELAY));
                }
            }
            PortalEvent::OrderFailed(err) => {
                self.order_form.settle_submit(false);
                self.loading.end(PanelId::OrderEntry);
                let message = err.to_string();
                self.order_log.insert(0, message.clone());
                self.notifications.show(message, Severity::Error);
            }
        }
    }

    /// Advance time-driven state: notification expiry and the
    /// post-acceptance redirect.
    pub fn tick(&mut self, now: Instant) {
        self.notifications.tick(now);
        if let Some((route, at)) = &self.pending_redirect {
            if now >= *at {
                let route = route.clone();
                self.pending_redirect = None;
                self.navigate(&route);
            }
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ClientError;
    use portal_core::{MarketSnapshot, OrderResponse, StatValue};

    fn test_app() -> App {
        let mut path = std::env::temp_dir();
        path.push(format!("portal_app_test_{}.json", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let store = LocalStore::open(path);
        App::new(&ClientConfig::default(), store, "/market/trading")
    }

    #[test]
    fn rejection_keeps_form_shows_message_and_reenables_submit() {
        let mut app = test_app();
        app.order_form.draft.quantity = "100".to_string();
        app.order_form.draft.price = "25.50".to_string();
        app.submit_order();
        assert!(app.order_form.is_submitting());
        assert!(app.loading.is_busy(PanelId::OrderEntry));

        app.handle_event(PortalEvent::OrderFailed(ClientError::Rejected(
            "Insufficient funds".to_string(),
        )));

        assert!(!app.order_form.is_submitting());
        assert!(!app.loading.is_busy(PanelId::OrderEntry));
        assert_eq!(app.order_form.draft.quantity, "100");
        assert_eq!(app.order_form.draft.price, "25.50");
        let messages: Vec<_> = app.notifications.iter().map(|n| n.message.clone()).collect();
        assert_eq!(messages, vec!["Insufficient funds".to_string()]);
    }

    #[test]
    fn acceptance_resets_form_and_schedules_redirect() {
        let mut app = test_app();
        app.order_form.draft.quantity = "10".to_string();
        app.order_form.draft.price = "120".to_string();
        app.submit_order();

        app.handle_event(PortalEvent::OrderAccepted(OrderResponse {
            success: true,
            message: Some("Order #42 placed".to_string()),
            error: None,
            redirect: Some("/market/orders".to_string()),
        }));

        assert!(app.order_form.draft.quantity.is_empty());
        assert_eq!(app.route, "/market/trading");

        // Redirect only fires after the fixed delay.
        app.tick(Instant::now());
        assert_eq!(app.route, "/market/trading");
        app.tick(Instant::now() + REDIRECT_DELAY + Duration::from_millis(10));
        assert_eq!(app.route, "/market/orders");
    }

    #[test]
    fn empty_quantity_is_refused_before_the_network() {
        let mut app = test_app();
        app.submit_order();
        assert!(!app.order_form.is_submitting());
        assert!(!app.loading.is_busy(PanelId::OrderEntry));
        assert_eq!(app.notifications.len(), 1);
    }

    #[test]
    fn snapshot_event_patches_ticker() {
        let mut app = test_app();
        let mut snapshot = MarketSnapshot::default();
        snapshot.stats.insert(
            "volume".to_string(),
            StatValue {
                value: "1,234".to_string(),
                change: 2.5,
            },
        );
        assert!(app.loading.is_busy(PanelId::Ticker));
        app.handle_event(PortalEvent::Snapshot(snapshot));
        assert_eq!(app.ticker.stat("volume").unwrap().value, "1,234");
        assert_eq!(app.ticker.tick_count, 1);
        assert!(!app.loading.is_busy(PanelId::Ticker));
    }

    #[test]
    fn navigate_closes_the_overlay() {
        let mut app = test_app();
        app.on_resize(60);
        app.sidebar.toggle_overlay();
        assert!(app.sidebar.overlay_open);
        app.navigate("/market/portfolio");
        assert!(!app.sidebar.overlay_open);
        assert_eq!(app.route, "/market/portfolio");
    }
}
