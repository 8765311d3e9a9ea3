use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use serde_json::Value;
use std::io::stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use selectfield::app::App;
use selectfield::config::Config;
use selectfield::log;
use selectfield::tui::{self, PresentationStyle};

/// Redraw interval while the label animates.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Redraw interval when nothing moves.
const IDLE_INTERVAL: Duration = Duration::from_millis(80);

const USAGE: &str = "Usage: selectfield [--style sheet|dropdown] [--items <file.json>] [--value <json>] [--disabled]";

/// Parse `--value`; anything that is not JSON is taken as a plain string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut style_override: Option<PresentationStyle> = None;
    let mut items_path: Option<PathBuf> = None;
    let mut value: Option<Value> = None;
    let mut disabled = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--style" | "-s" => {
                match args.get(i + 1).map(|s| s.as_str()) {
                    Some(raw) => match PresentationStyle::parse(raw) {
                        Some(style) => style_override = Some(style),
                        None => eprintln!("Warning: unknown style '{}', using config", raw),
                    },
                    None => eprintln!("Warning: --style requires an argument"),
                }
                i += 2;
                continue;
            }
            "--items" | "-i" => {
                match args.get(i + 1) {
                    Some(path) => items_path = Some(PathBuf::from(path)),
                    None => eprintln!("Warning: --items requires a path argument"),
                }
                i += 2;
                continue;
            }
            "--value" | "-v" => {
                match args.get(i + 1) {
                    Some(raw) => value = Some(parse_value(raw)),
                    None => eprintln!("Warning: --value requires an argument"),
                }
                i += 2;
                continue;
            }
            "--disabled" => disabled = true,
            "--help" | "-h" => {
                println!("{}", USAGE);
                return Ok(());
            }
            arg => {
                eprintln!("Warning: ignoring unknown argument '{}'", arg);
            }
        }
        i += 1;
    }

    let items = match items_path {
        Some(path) => Some(Config::items_from_file(&path)?),
        None => None,
    };
    let config = Config::load().with_overrides(style_override, items, disabled);
    log::log(&format!("Config: style={} disabled={}", config.style().as_str(), config.disabled));

    // Build before touching the terminal so config errors print normally
    let mut app = App::new(&config, value)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Event stream for keyboard and mouse
    let mut event_stream = EventStream::new();

    loop {
        // Render
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        if app.should_quit {
            return Ok(());
        }

        let wait = if app.select.is_animating() {
            FRAME_INTERVAL
        } else {
            IDLE_INTERVAL
        };

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        let action = app.handle_key(key);
                        app.dispatch(action, Instant::now());
                    }
                    Some(Ok(Event::Mouse(mouse))) => {
                        let action = app.handle_mouse(mouse);
                        app.dispatch(action, Instant::now());
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }

            // Timeout to keep animations moving
            _ = tokio::time::sleep(wait) => {}
        }

        app.tick(Instant::now());
    }
}
