// crates/portal-client/src/components/sidebar.rs

//! Sidebar navigation.
//!
//! Two independent state axes: collapsed/expanded (persisted across
//! sessions) and overlay open/closed (only meaningful below the width
//! breakpoint, where the sidebar floats over the content instead of
//! occupying a column). Resizing to at least the breakpoint forces the
//! overlay closed.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

/// Terminal width below which the sidebar becomes an overlay.
pub const OVERLAY_BREAKPOINT: u16 = 80;

pub const EXPANDED_WIDTH: u16 = 22;
pub const COLLAPSED_WIDTH: u16 = 6;

#[derive(Debug, Clone, Copy)]
pub struct NavEntry {
    pub label: &'static str,
    pub short: &'static str,
    pub path: &'static str,
}

/// The portal navigation tree, in display order.
pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        label: "Dashboard",
        short: "D",
        path: "/market",
    },
    NavEntry {
        label: "Trading",
        short: "T",
        path: "/market/trading",
    },
    NavEntry {
        label: "Portfolio",
        short: "P",
        path: "/market/portfolio",
    },
    NavEntry {
        label: "Orders",
        short: "O",
        path: "/market/orders",
    },
];

#[derive(Debug)]
pub struct Sidebar {
    pub collapsed: bool,
    pub overlay_open: bool,
}

impl Sidebar {
    /// `collapsed` comes from the persisted store, applied before the
    /// first draw.
    pub fn new(collapsed: bool) -> Self {
        Sidebar {
            collapsed,
            overlay_open: false,
        }
    }

    /// Toggle the desktop collapse axis; the caller persists the
    /// returned value.
    pub fn toggle_collapsed(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }

    pub fn toggle_overlay(&mut self) {
        self.overlay_open = !self.overlay_open;
    }

    pub fn close_overlay(&mut self) {
        self.overlay_open = false;
    }

    /// Apply a terminal resize: at or above the breakpoint the overlay
    /// axis is forced closed.
    pub fn handle_resize(&mut self, width: u16) {
        if width >= OVERLAY_BREAKPOINT {
            self.overlay_open = false;
        }
    }

    pub fn is_overlay_mode(&self, width: u16) -> bool {
        width < OVERLAY_BREAKPOINT
    }

    /// Column width the sidebar occupies in the main layout; 0 in
    /// overlay mode (it floats instead).
    pub fn column_width(&self, terminal_width: u16) -> u16 {
        if self.is_overlay_mode(terminal_width) {
            0
        } else if self.collapsed {
            COLLAPSED_WIDTH
        } else {
            EXPANDED_WIDTH
        }
    }

    /// Index of the active nav entry for `route`: exact match first,
    /// then longest prefix; first entry wins among equal prefixes.
    pub fn active_index(route: &str) -> Option<usize> {
        if let Some(i) = NAV_ENTRIES.iter().position(|e| e.path == route) {
            return Some(i);
        }
        let mut best: Option<(usize, usize)> = None; // (index, prefix_len)
        for (i, entry) in NAV_ENTRIES.iter().enumerate() {
            if route.starts_with(entry.path) {
                let len = entry.path.len();
                if best.map_or(true, |(_, best_len)| len > best_len) {
                    best = Some((i, len));
                }
            }
        }
        best.map(|(i, _)| i)
    }
}

pub fn draw_sidebar(f: &mut Frame, area: Rect, sidebar: &Sidebar, route: &str) {
    let active = Sidebar::active_index(route);

    let items: Vec<ListItem> = NAV_ENTRIES
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let text = if sidebar.collapsed && !sidebar.overlay_open {
                entry.short.to_string()
            } else {
                format!("[{}] {}", i + 1, entry.label)
            };
            let style = if Some(i) == active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    let title = if sidebar.collapsed && !sidebar.overlay_open {
        " ≡ "
    } else {
        " Navigation "
    };
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(list, area);
}

/// Overlay rendition: floats over the left edge of the content.
pub fn draw_sidebar_overlay(f: &mut Frame, area: Rect, sidebar: &Sidebar, route: &str) {
    if !sidebar.overlay_open {
        return;
    }
    let width = EXPANDED_WIDTH.min(area.width);
    let height = (NAV_ENTRIES.len() as u16 + 2).min(area.height);
    let rect = Rect::new(area.x, area.y, width, height);
    f.render_widget(Clear, rect);
    draw_sidebar(f, rect, sidebar, route);
}
