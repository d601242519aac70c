// crates/portal-client/src/components/notifications.rs

//! Transient toast notifications.
//!
//! Notices live in one shared queue in insertion order, auto-dismiss
//! after their ttl (default 5000 ms, ttl 0 means sticky), and can be
//! dismissed early. Dismissal is idempotent. The queue is capped at
//! [`MAX_PENDING`]; past that the oldest notice is dropped.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub const DEFAULT_TTL: Duration = Duration::from_millis(5000);
pub const MAX_PENDING: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    fn color(self) -> Color {
        match self {
            Severity::Success => Color::Green,
            Severity::Error => Color::Red,
            Severity::Warning => Color::Yellow,
            Severity::Info => Color::Cyan,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Severity::Success => "OK",
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
            Severity::Info => "INFO",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub created: DateTime<Local>,
    deadline: Option<Instant>,
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
    items: VecDeque<Notice>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notice with the default ttl. Returns its id.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.show_with_ttl(message, severity, DEFAULT_TTL)
    }

    /// Append a notice. A zero ttl never auto-dismisses.
    pub fn show_with_ttl(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        ttl: Duration,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let deadline = if ttl.is_zero() {
            None
        } else {
            Some(Instant::now() + ttl)
        };
        self.items.push_back(Notice {
            id,
            message: message.into(),
            severity,
            created: Local::now(),
            deadline,
        });
        while self.items.len() > MAX_PENDING {
            self.items.pop_front();
        }
        id
    }

    /// Drop notices whose deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        self.items
            .retain(|n| n.deadline.map_or(true, |d| d > now));
    }

    /// Remove a notice by id; removing one that is already gone is a
    /// no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    /// Dismiss the newest notice, if any.
    pub fn dismiss_latest(&mut self) {
        self.items.pop_back();
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Notice> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Draw the notice stack in the top-right corner, newest at the top.
pub fn draw_notifications(f: &mut Frame, area: Rect, center: &NotificationCenter) {
    if center.is_empty() {
        return;
    }

    let width = 40.min(area.width);
    let x = area.right().saturating_sub(width);
    let mut y = area.y;

    for notice in center.iter().rev() {
        if y + 3 > area.bottom() {
            break;
        }
        let rect = Rect::new(x, y, width, 3);
        let line = Line::from(vec![
            Span::styled(
                notice.severity.label(),
                Style::default()
                    .fg(notice.severity.color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::raw(notice.message.as_str()),
        ]);
        let widget = Paragraph::new(line).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(notice.severity.color()))
                .title(format!(" {} ", notice.created.format("%H:%M:%S"))),
        );
        f.render_widget(Clear, rect);
        f.render_widget(widget, rect);
        y += 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_ttl() {
        let mut center = NotificationCenter::new();
        center.show_with_ttl("filled", Severity::Success, Duration::from_millis(100));
        assert_eq!(center.len(), 1);

        let now = Instant::now();
        center.tick(now);
        assert_eq!(center.len(), 1);

        center.tick(now + Duration::from_millis(150));
        assert!(center.is_empty());
    }

    #[test]
    fn zero_ttl_never_expires() {
        let mut center = NotificationCenter::new();
        center.show_with_ttl("sticky", Severity::Warning, Duration::ZERO);
        center.tick(Instant::now() + Duration::from_secs(3600));
        assert_eq!(center.len(), 1);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut center = NotificationCenter::new();
        let id = center.show("hello", Severity::Info);
        center.dismiss(id);
        center.dismiss(id);
        assert!(center.is_empty());
    }

    #[test]
    fn ids_are_unique_and_order_is_insertion() {
        let mut center = NotificationCenter::new();
        let a = center.show("first", Severity::Info);
        let b = center.show("second", Severity::Info);
        assert_ne!(a, b);
        let messages: Vec<_> = center.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn queue_is_capped_dropping_oldest() {
        let mut center = NotificationCenter::new();
        for i in 0..(MAX_PENDING + 5) {
            center.show_with_ttl(format!("n{}", i), Severity::Info, Duration::ZERO);
        }
        assert_eq!(center.len(), MAX_PENDING);
        assert_eq!(center.iter().next().unwrap().message, "n5");
    }
}
