// crates/portal-client/src/components/status_bar.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, InputMode};
use crate::components::order_entry::FormField;

pub fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let (msg, style) = match app.input_mode {
        InputMode::Normal => {
            let shortcuts = vec![
                Span::styled(
                    "[1-4]",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Nav "),
                Span::styled("[b]", Style::default().fg(Color::Green)),
                Span::raw("uy "),
                Span::styled("[s]", Style::default().fg(Color::Red)),
                Span::raw("ell "),
                Span::styled("[m]", Style::default().fg(Color::Yellow)),
                Span::raw("arket "),
                Span::styled("[l]", Style::default().fg(Color::Blue)),
                Span::raw("imit "),
                Span::styled("[i]", Style::default().fg(Color::Cyan)),
                Span::raw("Edit "),
                Span::styled("[n]", Style::default().fg(Color::Magenta)),
                Span::raw("Sidebar "),
                Span::styled("[d]", Style::default().fg(Color::Gray)),
                Span::raw("ismiss "),
                Span::styled("[q]", Style::default().fg(Color::Gray)),
                Span::raw("uit"),
            ];
            (Line::from(shortcuts), Style::default())
        }
        InputMode::Editing => {
            let field = match app.order_form.focus {
                FormField::Quantity => "quantity",
                FormField::Price => "price",
            };
            let input = vec![
                Span::raw(format!("Editing {}: ", field)),
                Span::styled(
                    "_",
                    Style::default().add_modifier(Modifier::SLOW_BLINK),
                ),
                Span::raw(" [Enter] Done [Esc] Cancel [Tab] Field"),
            ];
            (Line::from(input), Style::default().fg(Color::Yellow))
        }
    };

    let status_block = Block::default().borders(Borders::ALL).border_style(style);

    let paragraph = Paragraph::new(msg)
        .block(status_block)
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}
