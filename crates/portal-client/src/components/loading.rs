// crates/portal-client/src/components/loading.rs

//! Per-panel busy overlays.

use std::collections::HashSet;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Panels that can show a loading overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    OrderEntry,
    Ticker,
}

#[derive(Debug, Default)]
pub struct LoadingState {
    busy: HashSet<PanelId>,
}

impl LoadingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, panel: PanelId) {
        self.busy.insert(panel);
    }

    /// Ending a panel that is not busy is a no-op.
    pub fn end(&mut self, panel: PanelId) {
        self.busy.remove(&panel);
    }

    pub fn is_busy(&self, panel: PanelId) -> bool {
        self.busy.contains(&panel)
    }
}

/// Draw the overlay over `area` when `panel` is busy.
pub fn draw_loading(f: &mut Frame, area: Rect, loading: &LoadingState, panel: PanelId) {
    if !loading.is_busy(panel) || area.height < 3 {
        return;
    }
    let y = area.y + area.height / 2 - 1;
    let rect = Rect::new(area.x, y, area.width, 3);
    let widget = Paragraph::new("Loading...")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(Clear, rect);
    f.render_widget(widget, rect);
}
