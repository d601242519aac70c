// crates/portal-client/src/ui.rs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::components::{
    help::draw_help,
    loading::{draw_loading, PanelId},
    notifications::draw_notifications,
    order_entry::draw_order_entry,
    sidebar::{draw_sidebar, draw_sidebar_overlay},
    status_bar::draw_status_bar,
    ticker::{draw_stat_cards, draw_security_table},
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    draw_header(f, chunks[0], app);
    draw_main_content(f, chunks[1], app);
    draw_status_bar(f, chunks[2], app);

    // Floating layers, bottom to top.
    draw_sidebar_overlay(f, chunks[1], &app.sidebar, &app.route);
    draw_notifications(f, chunks[1], &app.notifications);
    if app.show_help {
        draw_help(f, centered_rect(60, 70, f.size()));
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let left_text = vec![
        Span::styled(
            "Market Portal",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(&app.route, Style::default().fg(Color::Gray)),
    ];
    let left = Paragraph::new(Line::from(left_text)).block(Block::default().borders(Borders::ALL));
    f.render_widget(left, header_chunks[0]);

    let center_text = match app.ticker.last_tick {
        Some(t) => format!(
            "Ticks: {} | Last update: {}",
            app.ticker.tick_count,
            t.format("%H:%M:%S")
        ),
        None => "Waiting for market data...".to_string(),
    };
    let center = Paragraph::new(center_text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(center, header_chunks[1]);

    let right = Paragraph::new("[F1]Help [1-4]Nav [o]Menu")
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(right, header_chunks[2]);
}

fn draw_main_content(f: &mut Frame, area: Rect, app: &App) {
    let sidebar_width = app.sidebar.column_width(area.width);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(20)])
        .split(area);

    if sidebar_width > 0 {
        draw_sidebar(f, chunks[0], &app.sidebar, &app.route);
    }
    let content = chunks[1];

    match app.route.as_str() {
        "/market/trading" => draw_trading_page(f, content, app),
        "/market/orders" => draw_orders_page(f, content, app),
        "/market/portfolio" => draw_security_table(f, content, &app.ticker),
        _ => draw_dashboard_page(f, content, app),
    }
}

fn draw_dashboard_page(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(area);

    draw_stat_cards(f, chunks[0], &app.ticker);
    draw_security_table(f, chunks[1], &app.ticker);
    draw_loading(f, chunks[1], &app.loading, PanelId::Ticker);
}

fn draw_trading_page(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(42), Constraint::Min(20)])
        .split(area);

    draw_order_entry(f, chunks[0], app);
    draw_loading(f, chunks[0], &app.loading, PanelId::OrderEntry);
    draw_security_table(f, chunks[1], &app.ticker);
}

fn draw_orders_page(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = if app.order_log.is_empty() {
        vec![ListItem::new(Span::styled(
            "No submissions this session",
            Style::default().fg(Color::Gray),
        ))]
    } else {
        app.order_log
            .iter()
            .map(|entry| ListItem::new(entry.as_str()))
            .collect()
    };
    let list = List::new(items).block(
        Block::default()
            .title(" Session Orders ")
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
