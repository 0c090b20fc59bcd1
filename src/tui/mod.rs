//! Terminal UI for PRS Extreme.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use prs_rules::{MoveSource, RoundEngine, Scoreboard};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tokio::time::{Duration, sleep};
use tracing::{error, info, instrument};

use crate::GameConfig;
use crate::logging::init_file_logging;

/// Runs the game in the terminal until the player quits.
pub async fn run_tui(config: GameConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    init_file_logging(&config)?;

    info!(
        seed = ?config.seed(),
        max_rounds = ?config.max_rounds(),
        log_filter = %config.log_filter(),
        "Starting PRS Extreme TUI"
    );

    let engine = match *config.seed() {
        Some(seed) => RoundEngine::seeded(seed),
        None => RoundEngine::from_entropy(),
    };
    let app = App::new(engine, *config.max_rounds());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    let board = finish_session(res)?;
    println!(
        "Player: {}  Tied: {}  Computer: {}  Rounds: {}  Computer Lied: {}",
        board.player, board.tied, board.computer, board.rounds, board.computer_lied
    );
    Ok(())
}

/// Logs how the session ended. A loop error is passed on so the process
/// exits with a failure once the terminal has been restored.
fn finish_session<S: MoveSource>(res: Result<App<S>>) -> Result<Scoreboard> {
    match res {
        Ok(app) => {
            let board = app.engine().scoreboard();
            info!(
                rounds = board.rounds,
                player = board.player,
                computer = board.computer,
                tied = board.tied,
                lied = board.computer_lied,
                "Session ended"
            );
            Ok(board)
        }
        Err(err) => {
            error!(error = ?err, "Game loop error");
            Err(err)
        }
    }
}

/// Draw/poll loop. Returns the app so the caller can report the final score.
#[instrument(skip_all)]
async fn run_app<B, S>(terminal: &mut Terminal<B>, mut app: App<S>) -> Result<App<S>>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    S: MoveSource,
{
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Poll for input with short timeout to keep the loop responsive.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }

            if app.handle_key(key.code) == AppAction::Quit {
                return Ok(app);
            }
        }

        sleep(Duration::from_millis(10)).await;
    }
}
