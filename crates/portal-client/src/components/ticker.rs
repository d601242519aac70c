// crates/portal-client/src/components/ticker.rs

//! Polling market ticker state.
//!
//! Stat cards, security rows, and price badges are seeded once at
//! startup from the configured watchlist (the analogue of the
//! server-rendered page) and patched in place from each snapshot.
//! Snapshot entries with no matching card/row/badge are skipped; the
//! ticker never creates display entries from a poll.

use chrono::{DateTime, Local};
use indexmap::IndexMap;
use portal_core::{format_currency, format_percent, MarketSnapshot};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::config::{StatCardConfig, WatchedSecurity};

#[derive(Debug, Clone)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub change: f64,
}

#[derive(Debug, Clone)]
pub struct SecurityRow {
    pub symbol: String,
    pub name: String,
    pub price: Option<f64>,
    pub change_percent: f64,
    pub updated: Option<DateTime<Local>>,
}

#[derive(Debug, Default)]
pub struct MarketTicker {
    /// Stat cards keyed by the server's stat key.
    stats: IndexMap<String, StatCard>,
    /// Security rows keyed by security id.
    rows: IndexMap<u32, SecurityRow>,
    /// Price badges keyed by symbol.
    badges: IndexMap<String, f64>,
    pub tick_count: u64,
    pub last_tick: Option<DateTime<Local>>,
}

impl MarketTicker {
    pub fn new(stats: &[StatCardConfig], watchlist: &[WatchedSecurity]) -> Self {
        let mut ticker = MarketTicker::default();
        for stat in stats {
            ticker.stats.insert(
                stat.key.clone(),
                StatCard {
                    label: stat.label.clone(),
                    value: "-".to_string(),
                    change: 0.0,
                },
            );
        }
        for sec in watchlist {
            ticker.rows.insert(
                sec.id,
                SecurityRow {
                    symbol: sec.symbol.clone(),
                    name: sec.name.clone(),
                    price: None,
                    change_percent: 0.0,
                    updated: None,
                },
            );
            ticker.badges.insert(sec.symbol.clone(), 0.0);
        }
        ticker
    }

    /// Patch everything the snapshot covers; leave the rest untouched.
    pub fn apply_snapshot(&mut self, snapshot: &MarketSnapshot) {
        let now = Local::now();
        for (key, stat) in &snapshot.stats {
            if let Some(card) = self.stats.get_mut(key) {
                card.value = stat.value.clone();
                card.change = stat.change;
            }
        }
        for quote in &snapshot.securities {
            if let Some(row) = self.rows.get_mut(&quote.id) {
                row.price = Some(quote.current_price);
                row.change_percent = quote.change_percent;
                row.updated = Some(now);
            }
            if let Some(badge) = self.badges.get_mut(&quote.symbol) {
                *badge = quote.current_price;
            }
        }
        self.tick_count += 1;
        self.last_tick = Some(now);
    }

    pub fn stat(&self, key: &str) -> Option<&StatCard> {
        self.stats.get(key)
    }

    pub fn row(&self, id: u32) -> Option<&SecurityRow> {
        self.rows.get(&id)
    }

    /// Latest badge price for a symbol; None before the first patch.
    pub fn badge(&self, symbol: &str) -> Option<f64> {
        self.badges.get(symbol).copied().filter(|p| *p > 0.0)
    }

    pub fn stat_cards(&self) -> impl Iterator<Item = &StatCard> {
        self.stats.values()
    }

    pub fn security_rows(&self) -> impl Iterator<Item = &SecurityRow> {
        self.rows.values()
    }
}

fn change_style(change: f64) -> Style {
    if change > 0.0 {
        Style::default().fg(Color::Green)
    } else if change < 0.0 {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Stat cards laid out in one horizontal band.
pub fn draw_stat_cards(f: &mut Frame, area: Rect, ticker: &MarketTicker) {
    let cards: Vec<&StatCard> = ticker.stat_cards().collect();
    if cards.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = cards
        .iter()
        .map(|_| Constraint::Ratio(1, cards.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, chunk) in cards.iter().zip(chunks.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                card.value.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format_percent(card.change),
                change_style(card.change),
            )),
        ];
        let widget = Paragraph::new(lines).block(
            Block::default()
                .title(format!(" {} ", card.label))
                .borders(Borders::ALL),
        );
        f.render_widget(widget, *chunk);
    }
}

/// Security quote table.
pub fn draw_security_table(f: &mut Frame, area: Rect, ticker: &MarketTicker) {
    let header = Row::new(vec!["Symbol", "Name", "Price", "Change"]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = ticker
        .security_rows()
        .map(|row| {
            let price = row
                .price
                .map(format_currency)
                .unwrap_or_else(|| "-".to_string());
            Row::new(vec![
                Span::styled(
                    row.symbol.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(row.name.clone()),
                Span::raw(price),
                Span::styled(
                    format_percent(row.change_percent),
                    change_style(row.change_percent),
                ),
            ])
        })
        .collect();

    let title = match ticker.last_tick {
        Some(t) => format!(" Securities (updated {}) ", t.format("%H:%M:%S")),
        None => " Securities ".to_string(),
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Min(16),
            Constraint::Length(12),
            Constraint::Length(9),
        ],
    )
    .header(header)
    .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::{SecurityQuote, StatValue};

    fn test_ticker() -> MarketTicker {
        let stats = vec![
            StatCardConfig {
                key: "volume".to_string(),
                label: "Volume".to_string(),
            },
            StatCardConfig {
                key: "trades".to_string(),
                label: "Trades".to_string(),
            },
        ];
        let watchlist = vec![WatchedSecurity {
            id: 7,
            symbol: "ACME".to_string(),
            name: "Acme Industries".to_string(),
        }];
        MarketTicker::new(&stats, &watchlist)
    }

    #[test]
    fn snapshot_patches_only_matching_stat_card() {
        let mut ticker = test_ticker();
        let mut snapshot = MarketSnapshot::default();
        snapshot.stats.insert(
            "volume".to_string(),
            StatValue {
                value: "1,234".to_string(),
                change: 2.5,
            },
        );
        // Unknown key must be skipped silently.
        snapshot.stats.insert(
            "turnover".to_string(),
            StatValue {
                value: "9".to_string(),
                change: 0.0,
            },
        );

        ticker.apply_snapshot(&snapshot);

        let volume = ticker.stat("volume").unwrap();
        assert_eq!(volume.value, "1,234");
        assert_eq!(volume.change, 2.5);

        // The unmatched card keeps its seeded placeholder.
        let trades = ticker.stat("trades").unwrap();
        assert_eq!(trades.value, "-");
        assert!(ticker.stat("turnover").is_none());
    }

    #[test]
    fn snapshot_patches_rows_and_badges_by_identity() {
        let mut ticker = test_ticker();
        let snapshot = MarketSnapshot {
            stats: Default::default(),
            securities: vec![
                SecurityQuote {
                    id: 7,
                    symbol: "ACME".to_string(),
                    current_price: 42.5,
                    change_percent: -1.2,
                },
                // Not in the watchlist: no row may appear for it.
                SecurityQuote {
                    id: 99,
                    symbol: "XXXX".to_string(),
                    current_price: 1.0,
                    change_percent: 0.0,
                },
            ],
        };

        ticker.apply_snapshot(&snapshot);

        let row = ticker.row(7).unwrap();
        assert_eq!(row.price, Some(42.5));
        assert_eq!(row.change_percent, -1.2);
        assert!(ticker.row(99).is_none());
        assert_eq!(ticker.badge("ACME"), Some(42.5));
        assert_eq!(ticker.badge("XXXX"), None);
        assert_eq!(ticker.tick_count, 1);
    }

    #[test]
    fn later_snapshot_overwrites_wholesale() {
        let mut ticker = test_ticker();
        let mut first = MarketSnapshot::default();
        first.securities.push(SecurityQuote {
            id: 7,
            symbol: "ACME".to_string(),
            current_price: 40.0,
            change_percent: 1.0,
        });
        let mut second = first.clone();
        second.securities[0].current_price = 41.0;

        ticker.apply_snapshot(&first);
        ticker.apply_snapshot(&second);

        assert_eq!(ticker.row(7).unwrap().price, Some(41.0));
        assert_eq!(ticker.tick_count, 2);
    }
}
