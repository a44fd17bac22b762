//! # hospital-dojo
//!
//! A terminal flashcard and quiz application for learning how hospitals are
//! classified: category, function type and ward.
//!
//! The quiz core ([`QuizSession`], [`generate_options`], [`is_correct`]) is
//! independent of the terminal front end and can be driven directly.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hospital_dojo::{Dojo, DojoError};
//!
//! fn main() -> Result<(), DojoError> {
//!     // Use the scenarios bundled with the crate
//!     let dojo = Dojo::builtin(None)?;
//!
//!     // Run the dojo in the terminal
//!     dojo.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod error;
mod models;
pub mod quiz;
pub mod terminal;
mod ui;

use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::info;

pub use app::App;
pub use data::{load_scenarios_from_path, parse_scenarios, Dataset, MIN_SCENARIOS};
pub use error::{DojoError, LoadError, QuizError};
pub use models::{is_correct, Answer, AppMode, Scenario, ScenarioId};
pub use quiz::{generate_options, Phase, QuizSession, SessionKind, SessionSnapshot, Summary};

/// The study/quiz application, ready to run in the terminal.
pub struct Dojo {
    app: App,
}

impl Dojo {
    /// Create a dojo over `dataset`. A `seed` makes option order reproducible.
    pub fn new(dataset: Dataset, seed: Option<u64>) -> Result<Self, DojoError> {
        Ok(Self {
            app: App::new(dataset, seed)?,
        })
    }

    /// Create a dojo over the bundled scenarios.
    pub fn builtin(seed: Option<u64>) -> Result<Self, DojoError> {
        Self::new(Dataset::builtin()?, seed)
    }

    /// Load the scenarios from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use hospital_dojo::Dojo;
    ///
    /// let dojo = Dojo::from_json("scenarios.json", None).expect("Failed to load scenarios");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P, seed: Option<u64>) -> Result<Self, DojoError> {
        Self::new(Dataset::from_json_file(path)?, seed)
    }

    /// Choose the screen shown when the dojo starts.
    pub fn open(&mut self, mode: AppMode) -> Result<(), DojoError> {
        match mode {
            AppMode::Home => self.app.open_home(),
            AppMode::Study => self.app.open_study(),
            AppMode::Quiz => self.app.open_quiz()?,
        }
        Ok(())
    }

    /// Run the dojo in the terminal.
    ///
    /// This will take over the terminal, display the UI, and return when
    /// the user quits.
    pub fn run(mut self) -> Result<(), DojoError> {
        let mut guard = terminal::TerminalGuard::enter()?;
        info!(mode = ?self.app.mode, "dojo started");
        let result = run_event_loop(guard.terminal(), &mut self.app);
        info!("dojo closed");
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), DojoError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code)? {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> Result<bool, QuizError> {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
        KeyCode::Esc => {
            app.open_home();
            return Ok(false);
        }
        KeyCode::Char('1') => {
            app.open_study();
            return Ok(false);
        }
        KeyCode::Char('2') => {
            app.open_quiz()?;
            return Ok(false);
        }
        _ => {}
    }

    match app.mode {
        AppMode::Home => {}
        AppMode::Study => handle_study_input(app, key),
        AppMode::Quiz if app.is_showing_results() => handle_result_input(app, key)?,
        AppMode::Quiz => handle_quiz_input(app, key)?,
    }
    Ok(false)
}

fn handle_study_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_study_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_study_up(),
        _ => {}
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> Result<(), QuizError> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.confirm()?,
        _ => {}
    }
    Ok(())
}

fn handle_result_input(app: &mut App, key: KeyCode) -> Result<(), QuizError> {
    match key {
        KeyCode::Char('w') | KeyCode::Char('W') => app.retry_wrong(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart_quiz(),
        _ => Ok(()),
    }
}
