mod app;
mod calendar;
mod cards;
mod config;
mod data;
mod gesture;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use config::Config;
use ui::HitMap;

#[derive(Parser, Debug)]
#[command(name = "stride")]
#[command(about = "Terminal fitness dashboard - step cards, nutrition and profile at a glance")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(long, default_value = "~/.config/stride/config.toml")]
    config: String,

    /// Theme preset override ("dark" or "light")
    #[arg(long)]
    theme: Option<String>,

    /// Disable mouse capture (keyboard only)
    #[arg(long)]
    no_mouse: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stride=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    // Load config; CLI flags win over the file
    let mut config = Config::load(&cli.config)?;
    if let Some(theme) = cli.theme {
        config.appearance.theme = theme;
    }
    if cli.no_mouse {
        config.behavior.mouse = false;
    }
    let mouse_enabled = config.behavior.mouse;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config);

    // Run main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let mut events = EventStream::new();
    let tick_rate = Duration::from_millis(app.config().behavior.tick_rate_ms.max(10));
    let mut ticker = tokio::time::interval(tick_rate);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // Hit map of the frame currently on screen; mouse events resolve
    // against what the user actually saw
    let mut hits = HitMap::new();

    loop {
        if app.take_dirty() {
            terminal.draw(|f| {
                hits = ui::draw(f, app);
            })?;
        }

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(event)) => handle_event(app, &hits, event),
                    Some(Err(err)) => return Err(err).context("Event stream failed"),
                    None => return Ok(()),
                }
            }
            _ = ticker.tick() => {
                app.on_tick(Instant::now());
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

fn handle_event(app: &mut App, hits: &HitMap, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
        Event::Mouse(mouse) => {
            let target = hits.hit(mouse.column, mouse.row);
            app.handle_mouse(mouse.kind, target, Instant::now());
        }
        Event::Resize(_, _) => app.request_redraw(),
        _ => {}
    }
}
