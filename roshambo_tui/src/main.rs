//! Terminal UI for roshambo.

#![warn(missing_docs)]

mod app;
mod cli;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tokio::time::{Duration, sleep};
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;
use cli::Cli;
use roshambo::{RandomChooser, Session, TomlSettingsStore};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!(settings = %cli.settings.display(), "Starting roshambo TUI");

    let chooser = match cli.seed {
        Some(seed) => RandomChooser::seeded(seed),
        None => RandomChooser::new(),
    };
    let store = TomlSettingsStore::new(&cli.settings);
    let session = match cli.theme {
        Some(theme) => Session::with_theme(Box::new(chooser), Box::new(store), theme),
        None => Session::new(Box::new(chooser), Box::new(store)),
    };
    let app = App::new(session, Duration::from_millis(cli.delay_ms));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

/// Cooperative event loop: draw, advance the animation, poll for keys.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Resolve the pending round once its delay elapses.
        app.tick();

        if event::poll(std::time::Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    info!("Quitting");
                    return Ok(());
                }
                code => app.handle_key(code),
            }
        }

        sleep(Duration::from_millis(10)).await;
    }
}
