//! Terminal client for interactive play.

mod ui;

use crate::controller::{GameController, SubmitOutcome};
use crate::game::{self, GuessResult, ScoreError, SessionState};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Everything the renderer needs for one frame.
pub(crate) struct App {
    /// Guesses scored so far.
    pub history: Vec<GuessResult>,
    /// Derived session state.
    pub state: SessionState,
    /// Letters typed into the pending row.
    pub input: String,
    /// Length of the secret word.
    pub word_length: usize,
    /// Total rows on the board.
    pub max_attempts: usize,
    /// One-line status message.
    pub status: String,
    /// Share grid shown once the game is over.
    pub summary: Option<String>,
    /// True while a submission is awaiting the dictionary.
    pub checking: bool,
}

impl App {
    fn from_controller(controller: &GameController) -> Self {
        let session = controller.session();
        let state = session.state();
        let summary = state
            .is_terminal()
            .then(|| game::share_text(&session));
        Self {
            history: session.history().to_vec(),
            state,
            input: String::new(),
            word_length: session.config().word_length(),
            max_attempts: *session.config().max_attempts(),
            status: match state {
                SessionState::Won => "You got it! Press 'r' to replay, 'q' to quit.".to_string(),
                SessionState::Lost => "Out of guesses. Press 'r' to replay, 'q' to quit.".to_string(),
                _ => "Type a word and press Enter.".to_string(),
            },
            summary,
            checking: false,
        }
    }

    /// Re-reads session data after a submission landed or a reset.
    fn refresh(&mut self, controller: &GameController) {
        let next = Self::from_controller(controller);
        self.history = next.history;
        self.state = next.state;
        self.summary = next.summary;
        self.word_length = next.word_length;
        self.max_attempts = next.max_attempts;
    }
}

/// Runs the interactive terminal game until the player quits.
pub async fn run_play(controller: Arc<GameController>) -> Result<()> {
    // Log to a file so tracing output does not tear the board.
    let log_file = std::fs::File::create("wordgrid_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting wordgrid TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, controller).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref err) = result {
        eprintln!("Error: {err:?}");
    }
    result
}

/// Event loop: keyboard in, submission outcomes back over a channel.
async fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    controller: Arc<GameController>,
) -> Result<()> {
    let (outcome_tx, mut outcome_rx) =
        mpsc::unbounded_channel::<Result<SubmitOutcome, ScoreError>>();
    let mut app = App::from_controller(&controller);

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Apply any submission that resolved since the last frame.
        while let Ok(outcome) = outcome_rx.try_recv() {
            app.checking = false;
            match outcome {
                Ok(SubmitOutcome::Applied { state, .. }) => {
                    debug!(state = %state, "Submission applied");
                    app.input.clear();
                    app.refresh(&controller);
                    app.status = match state {
                        SessionState::Won => {
                            "You got it! Press 'r' to replay, 'q' to quit.".to_string()
                        }
                        SessionState::Lost => {
                            "Out of guesses. Press 'r' to replay, 'q' to quit.".to_string()
                        }
                        _ => "Keep going.".to_string(),
                    };
                }
                Ok(SubmitOutcome::NotAWord) => {
                    app.status = "Not a recognized word.".to_string();
                }
                Ok(SubmitOutcome::LookupFailed) => {
                    app.status = "Dictionary unavailable, try again.".to_string();
                }
                Ok(SubmitOutcome::Cancelled) => {
                    debug!("Stale submission discarded");
                }
                Ok(SubmitOutcome::Finished) => {}
                Err(e) => {
                    // Length mismatches are filtered before submit; log and move on.
                    warn!(error = %e, "Submission rejected");
                    app.status = e.to_string();
                }
            }
        }

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };

        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            info!("Player quit");
            return Ok(());
        }

        if app.state.is_terminal() {
            match key.code {
                KeyCode::Char('q') => {
                    info!("Player quit after game over");
                    return Ok(());
                }
                KeyCode::Char('r') => {
                    info!("Player reset the session");
                    controller.reset();
                    app = App::from_controller(&controller);
                }
                _ => {}
            }
            continue;
        }

        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if app.input.len() < app.word_length {
                    app.input.push(c.to_ascii_lowercase());
                }
            }
            KeyCode::Backspace => {
                app.input.pop();
            }
            KeyCode::Enter if app.input.len() == app.word_length => {
                let word = app.input.clone();
                let tx = outcome_tx.clone();
                let controller = controller.clone();
                app.checking = true;
                app.status = "Checking…".to_string();
                debug!(word = %word, "Submitting guess");
                // A newer submission supersedes any pending one; the
                // controller discards superseded results.
                tokio::spawn(async move {
                    let _ = tx.send(controller.submit(&word).await);
                });
            }
            _ => {}
        }
    }
}
