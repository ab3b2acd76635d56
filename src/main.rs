mod app;
mod components;
mod config;
mod error;
mod fs;
mod handler;
mod nav;
mod preview_content;
mod theme;
mod tui;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use crossterm::event::{self, Event};

use crate::app::App;
use crate::config::{AppConfig, ThemeConfig};
use crate::tui::{install_panic_hook, Tui};

/// A terminal-based directory browser TUI.
#[derive(Parser, Debug)]
#[command(name = "file_browser_tui", version, about)]
struct Cli {
    /// Directory to browse (defaults to the configured start path, then ".")
    path: Option<PathBuf>,

    /// Explicit config file, overriding the default locations
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Color scheme: "dark", "light", or "custom"
    #[arg(long, value_name = "SCHEME")]
    theme: Option<String>,
}

fn main() -> error::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = AppConfig {
        theme: ThemeConfig {
            scheme: cli.theme.clone(),
            custom: None,
        },
        ..Default::default()
    };
    let config = AppConfig::load(cli.config.as_deref(), Some(&cli_overrides));
    let theme = theme::resolve_theme(&config.theme);

    let start = cli
        .path
        .clone()
        .or_else(|| config.start_path().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));
    let start = start
        .canonicalize()
        .map_err(|_| error::AppError::InvalidPath(format!("{} does not exist", start.display())))?;

    // Build the app before touching the terminal, so a start directory that
    // cannot be listed fails with a plain error message instead of inside
    // raw mode.
    let mut app = App::new(&start, theme, config.show_controls())?;

    install_panic_hook();
    let mut tui = Tui::new()?;
    let result = run(&mut tui, &mut app);
    let restored = tui.restore();
    result.and(restored)
}

/// Draw, block on the next input event, dispatch; repeat until quit.
///
/// Resize needs no handler of its own: `event::read` returns on the resize
/// event and the next frame recomputes the page size from the new layout.
fn run(tui: &mut Tui, app: &mut App) -> error::Result<()> {
    loop {
        tui.terminal_mut().draw(|frame| ui::render(app, frame))?;

        if let Event::Key(key) = event::read()? {
            handler::handle_key_event(app, key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
