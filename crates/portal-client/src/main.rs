// crates/portal-client/src/main.rs

mod app;
mod components;
mod config;
mod errors;
mod network;
mod state;
mod ui;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use portal_core::{Debouncer, OrderType, Side};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use tokio::sync::mpsc;
use tracing::info;

use crate::app::{App, InputMode};
use crate::components::sidebar::NAV_ENTRIES;
use crate::config::ClientConfig;
use crate::network::{Command, PortalConnection, PortalEvent};
use crate::state::LocalStore;

#[derive(Parser)]
#[clap(name = "portal-client")]
#[clap(about = "Terminal client for the market portal")]
struct Cli {
    /// Portal base URL
    #[clap(short, long)]
    server: Option<String>,

    /// Config file (TOML)
    #[clap(short, long, default_value = "portal.toml")]
    config: PathBuf,

    /// Starting route
    #[clap(short, long, default_value = "/market")]
    route: String,

    /// Enable debug logging
    #[clap(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.debug {
        tracing_subscriber::fmt::init();
    }

    let mut config = ClientConfig::load(&cli.config)?;
    if let Some(server) = &cli.server {
        config.base_url = server.clone();
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Persisted state is read before the first draw.
    let store = LocalStore::open(config.state_file.clone());
    let app = App::new(&config, store, &cli.route);
    let res = run_app(&mut terminal, app, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    config: &ClientConfig,
) -> Result<()> {
    // Channels between the UI loop and the network task.
    let (tx_to_network, rx_from_app) = mpsc::unbounded_channel::<Command>();
    let (tx_to_app, mut rx_from_network) = mpsc::unbounded_channel::<PortalEvent>();

    app.set_network_sender(tx_to_network);
    app.on_resize(terminal.size()?.width);

    let connection = PortalConnection::new(
        &config.base_url,
        Duration::from_millis(config.poll_interval_ms),
        tx_to_app,
    )?;

    info!("Connecting to {}...", config.base_url);
    let network_handle = tokio::spawn(async move {
        connection.run(rx_from_app).await;
    });

    // Resize storms are coalesced; the pending width is applied on the
    // next ready window so the final size is never lost.
    let mut resize_debounce = Debouncer::new(Duration::from_millis(200));
    let mut pending_resize: Option<u16> = None;

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => match app.input_mode {
                    InputMode::Normal => handle_normal_key(&mut app, key.code),
                    InputMode::Editing => handle_editing_key(&mut app, key.code),
                },
                Event::Resize(width, _) => {
                    pending_resize = Some(width);
                }
                _ => {}
            }
        }

        if let Some(width) = pending_resize {
            if resize_debounce.ready(Instant::now()) {
                app.on_resize(width);
                pending_resize = None;
            }
        }

        while let Ok(event) = rx_from_network.try_recv() {
            app.handle_event(event);
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    // Stop scheduling polls; in-flight requests are dropped with the task.
    network_handle.abort();
    Ok(())
}

fn handle_normal_key(app: &mut App, code: KeyCode) {
    // Any key that is not the overlay toggle itself acts as an
    // outside click and closes the open overlay.
    let closes_overlay = !matches!(code, KeyCode::Char('o') | KeyCode::Char('O'));

    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
        }
        KeyCode::F(1) | KeyCode::Char('?') => {
            app.toggle_help();
        }
        KeyCode::Esc => {
            app.show_help = false;
        }

        // Navigation
        KeyCode::Char(c @ '1'..='4') => {
            let index = (c as usize) - ('1' as usize);
            if let Some(entry) = NAV_ENTRIES.get(index) {
                app.navigate(entry.path);
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.toggle_sidebar_collapsed();
        }
        KeyCode::Char('o') | KeyCode::Char('O') => {
            if app.sidebar.is_overlay_mode(app.terminal_width) {
                app.sidebar.toggle_overlay();
            }
        }

        // Order form hotkeys
        KeyCode::Char('b') | KeyCode::Char('B') => {
            app.order_form.set_side(Side::Buy);
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.order_form.set_side(Side::Sell);
        }
        KeyCode::Char('m') | KeyCode::Char('M') => {
            app.order_form.switch_order_type(OrderType::Market);
        }
        KeyCode::Char('l') | KeyCode::Char('L') => {
            app.order_form.switch_order_type(OrderType::Limit);
        }
        KeyCode::Char('c') | KeyCode::Char('C') => {
            app.order_form.select_next_security();
        }
        KeyCode::Tab => {
            app.order_form.focus_next();
        }
        KeyCode::Char('i') | KeyCode::Char('I') => {
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Enter => {
            app.submit_order();
        }

        KeyCode::Char('d') | KeyCode::Char('D') => {
            app.notifications.dismiss_latest();
        }

        _ => {}
    }

    if closes_overlay && app.sidebar.overlay_open {
        app.sidebar.close_overlay();
    }
}

fn handle_editing_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Enter | KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Tab => {
            app.order_form.focus_next();
        }
        KeyCode::Backspace => {
            app.order_form.backspace();
        }
        KeyCode::Char(c) => {
            app.order_form.input_char(c);
        }
        _ => {}
    }
}
