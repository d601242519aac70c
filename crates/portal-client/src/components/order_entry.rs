// crates/portal-client/src/components/order_entry.rs

//! Order entry form.
//!
//! Tab-driven order type selection (Market hides the price field),
//! buy/sell side toggle, and a cost summary derived fresh from the
//! field values on every change. The submit control is disabled while
//! a submission is in flight and re-enabled on every outcome.

use portal_core::{format_currency, OrderDraft, OrderRequest, OrderType, Side};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, InputMode};
use crate::config::WatchedSecurity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Quantity,
    Price,
}

#[derive(Debug)]
pub struct OrderForm {
    pub draft: OrderDraft,
    pub securities: Vec<WatchedSecurity>,
    pub selected: usize,
    pub focus: FormField,
    submitting: bool,
}

impl OrderForm {
    pub fn new(securities: Vec<WatchedSecurity>) -> Self {
        let security_id = securities.first().map(|s| s.id).unwrap_or(0);
        OrderForm {
            draft: OrderDraft::new(security_id),
            securities,
            selected: 0,
            focus: FormField::Quantity,
            submitting: false,
        }
    }

    pub fn selected_security(&self) -> Option<&WatchedSecurity> {
        self.securities.get(self.selected)
    }

    pub fn select_next_security(&mut self) {
        if self.securities.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.securities.len();
        self.draft.security_id = self.securities[self.selected].id;
    }

    /// Activate an order type tab. Switching to Market moves focus off
    /// the now-hidden price field.
    pub fn switch_order_type(&mut self, order_type: OrderType) {
        self.draft.order_type = order_type;
        if !order_type.has_price() && self.focus == FormField::Price {
            self.focus = FormField::Quantity;
        }
    }

    pub fn set_side(&mut self, side: Side) {
        self.draft.side = side;
    }

    /// Cycle field focus, skipping the price field for market orders.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormField::Quantity if self.draft.order_type.has_price() => FormField::Price,
            _ => FormField::Quantity,
        };
    }

    pub fn input_char(&mut self, c: char) {
        if !c.is_ascii_digit() && c != '.' {
            return;
        }
        self.focused_field_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_field_mut().pop();
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Quantity => &mut self.draft.quantity,
            FormField::Price => &mut self.draft.price,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Package the draft for submission and disable the submit control.
    /// Returns None while a previous submission is still in flight.
    pub fn begin_submit(&mut self) -> Option<OrderRequest> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(OrderRequest::from_draft(&self.draft))
    }

    /// Re-enable the submit control; on acceptance the form resets to
    /// its defaults, on rejection or failure it stays populated.
    pub fn settle_submit(&mut self, accepted: bool) {
        self.submitting = false;
        if accepted {
            let security_id = self.draft.security_id;
            self.draft = OrderDraft::new(security_id);
            self.focus = FormField::Quantity;
        }
    }
}

pub fn draw_order_entry(f: &mut Frame, area: Rect, app: &App) {
    let form = &app.order_form;
    let block = Block::default().title(" Order Entry ").borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Security + badge
            Constraint::Length(2), // Order type tabs
            Constraint::Length(2), // Side
            Constraint::Length(2), // Quantity
            Constraint::Length(2), // Price
            Constraint::Min(4),    // Summary
            Constraint::Length(1), // Actions
        ])
        .split(inner);

    let editing = matches!(app.input_mode, InputMode::Editing);

    // Security line with the live price badge, when one has arrived.
    let security_line = match form.selected_security() {
        Some(sec) => {
            let badge = app
                .ticker
                .badge(&sec.symbol)
                .map(format_currency)
                .unwrap_or_else(|| "-".to_string());
            Line::from(vec![
                Span::raw("Security: "),
                Span::styled(
                    sec.symbol.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" {} ", badge)),
                Span::styled("[c] next", Style::default().fg(Color::Gray)),
            ])
        }
        None => Line::from(Span::styled(
            "No securities configured",
            Style::default().fg(Color::Red),
        )),
    };
    f.render_widget(Paragraph::new(security_line), chunks[0]);

    // Order type tabs: exactly one active.
    let tab = |label: &'static str, active: bool| {
        if active {
            Span::styled(
                label,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(label, Style::default().fg(Color::Gray))
        }
    };
    let is_market = form.draft.order_type == OrderType::Market;
    let type_line = Line::from(vec![
        Span::raw("Type: "),
        tab(" [m] Market ", is_market),
        Span::raw(" "),
        tab(" [l] Limit ", !is_market),
    ]);
    f.render_widget(Paragraph::new(type_line), chunks[1]);

    let side_line = match form.draft.side {
        Side::Buy => Line::from(vec![
            Span::raw("Side: "),
            Span::styled(
                "BUY",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  [b]/[s] switch", Style::default().fg(Color::Gray)),
        ]),
        Side::Sell => Line::from(vec![
            Span::raw("Side: "),
            Span::styled(
                "SELL",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  [b]/[s] switch", Style::default().fg(Color::Gray)),
        ]),
    };
    f.render_widget(Paragraph::new(side_line), chunks[2]);

    let field_line = |label: &str, value: &str, focused: bool| {
        let mut spans = vec![
            Span::raw(format!("{}: ", label)),
            Span::styled(value.to_string(), Style::default().fg(Color::Cyan)),
        ];
        if focused && editing {
            spans.push(Span::styled(
                "_",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        Line::from(spans)
    };

    f.render_widget(
        Paragraph::new(field_line(
            "Quantity",
            &form.draft.quantity,
            form.focus == FormField::Quantity,
        )),
        chunks[3],
    );

    // Market orders hide the price field.
    if form.draft.order_type.has_price() {
        f.render_widget(
            Paragraph::new(field_line(
                "Price",
                &form.draft.price,
                form.focus == FormField::Price,
            )),
            chunks[4],
        );
    }

    let summary = form.draft.summary();
    let summary_lines = vec![
        Line::from(format!("Value:      {}", format_currency(summary.value))),
        Line::from(format!(
            "Commission: {}",
            format_currency(summary.commission)
        )),
        Line::from(vec![
            Span::raw("Total:      "),
            Span::styled(
                format_currency(summary.total_cost),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    let summary_widget = Paragraph::new(summary_lines)
        .block(Block::default().title("Summary").borders(Borders::TOP));
    f.render_widget(summary_widget, chunks[5]);

    let actions = if form.is_submitting() {
        Span::styled("Submitting...", Style::default().fg(Color::Yellow))
    } else if editing {
        Span::styled(
            "[Enter] Done  [Esc] Cancel  [Tab] Field",
            Style::default().fg(Color::Gray),
        )
    } else {
        Span::styled(
            "[i] Edit  [Enter] Place Order",
            Style::default().fg(Color::Gray),
        )
    };
    f.render_widget(
        Paragraph::new(Line::from(actions)).alignment(Alignment::Center),
        chunks[6],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_form() -> OrderForm {
        OrderForm::new(vec![
            WatchedSecurity {
                id: 7,
                symbol: "ACME".to_string(),
                name: "Acme Industries".to_string(),
            },
            WatchedSecurity {
                id: 8,
                symbol: "GLBX".to_string(),
                name: "Globex Corporation".to_string(),
            },
        ])
    }

    #[test]
    fn market_tab_hides_price_and_recomputes() {
        let mut form = test_form();
        form.draft.quantity = "10".to_string();
        form.draft.price = "50".to_string();
        assert_eq!(form.draft.summary().value, 500.0);

        form.switch_order_type(OrderType::Market);
        assert!(!form.draft.order_type.has_price());
        assert_eq!(form.draft.summary().value, 0.0);

        form.switch_order_type(OrderType::Limit);
        assert_eq!(form.draft.summary().value, 500.0);
    }

    #[test]
    fn market_switch_moves_focus_off_price() {
        let mut form = test_form();
        form.focus_next();
        assert_eq!(form.focus, FormField::Price);
        form.switch_order_type(OrderType::Market);
        assert_eq!(form.focus, FormField::Quantity);
        // With price hidden, focus cycling stays on quantity.
        form.focus_next();
        assert_eq!(form.focus, FormField::Quantity);
    }

    #[test]
    fn typing_is_restricted_to_numeric_input() {
        let mut form = test_form();
        form.input_char('1');
        form.input_char('x');
        form.input_char('2');
        form.input_char('.');
        assert_eq!(form.draft.quantity, "12.");
        form.backspace();
        assert_eq!(form.draft.quantity, "12");
    }

    #[test]
    fn submit_control_disabled_while_in_flight() {
        let mut form = test_form();
        form.draft.quantity = "100".to_string();
        form.draft.price = "25.50".to_string();

        let req = form.begin_submit().expect("first submit goes through");
        assert_eq!(req.security_id, 7);
        assert_eq!(req.quantity, 100);
        assert_eq!(req.price, 25.5);
        assert!(form.is_submitting());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn rejection_keeps_form_populated_and_reenables_submit() {
        let mut form = test_form();
        form.draft.quantity = "100".to_string();
        form.draft.price = "25.50".to_string();
        form.begin_submit().unwrap();

        form.settle_submit(false);
        assert!(!form.is_submitting());
        assert_eq!(form.draft.quantity, "100");
        assert_eq!(form.draft.price, "25.50");
    }

    #[test]
    fn acceptance_resets_form_to_defaults() {
        let mut form = test_form();
        form.set_side(Side::Sell);
        form.draft.quantity = "100".to_string();
        form.draft.price = "25.50".to_string();
        form.begin_submit().unwrap();

        form.settle_submit(true);
        assert!(!form.is_submitting());
        assert!(form.draft.quantity.is_empty());
        assert!(form.draft.price.is_empty());
        assert_eq!(form.draft.side, Side::Buy);
        assert_eq!(form.draft.security_id, 7);
    }

    #[test]
    fn security_cycling_updates_draft_identity() {
        let mut form = test_form();
        form.select_next_security();
        assert_eq!(form.draft.security_id, 8);
        form.select_next_security();
        assert_eq!(form.draft.security_id, 7);
    }
}
