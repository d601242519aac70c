// crates/portal-client/src/components/help.rs

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn draw_help(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Keys",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  1-4        jump to Dashboard / Trading / Portfolio / Orders"),
        Line::from("  n          collapse or expand the sidebar"),
        Line::from("  o          open/close the sidebar overlay (narrow terminals)"),
        Line::from("  b / s      buy / sell side"),
        Line::from("  m / l      market / limit order type"),
        Line::from("  c          next security"),
        Line::from("  Tab        switch quantity/price field"),
        Line::from("  i          edit the focused field"),
        Line::from("  Enter      place the order (Trading page)"),
        Line::from("  d          dismiss the newest notification"),
        Line::from("  F1 / ?     toggle this help"),
        Line::from("  q          quit"),
    ];

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(Clear, area);
    f.render_widget(widget, area);
}
