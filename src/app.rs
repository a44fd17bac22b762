use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::data::Dataset;
use crate::error::QuizError;
use crate::models::AppMode;
use crate::quiz::{Phase, QuizSession, OPTION_COUNT};

/// Presentation state: which screen is shown and the cursor positions on it.
///
/// The quiz itself lives in the [`QuizSession`]; `App` only forwards intents
/// that the session's current state allows.
pub struct App {
    pub mode: AppMode,
    dataset: Dataset,
    quiz: QuizSession,
    cursor: usize,
    study_offset: usize,
}

impl App {
    /// Create the app over `dataset`. A `seed` makes option order reproducible.
    pub fn new(dataset: Dataset, seed: Option<u64>) -> Result<Self, QuizError> {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let quiz = QuizSession::start_full(dataset.clone(), rng)?;

        Ok(Self {
            mode: AppMode::Home,
            dataset,
            quiz,
            cursor: 0,
            study_offset: 0,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn quiz(&self) -> &QuizSession {
        &self.quiz
    }

    /// Option the cursor is on while the current question is unanswered.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the first study card on screen.
    pub fn study_offset(&self) -> usize {
        self.study_offset
    }

    pub fn is_showing_results(&self) -> bool {
        self.mode == AppMode::Quiz && self.quiz.phase() == Phase::Finished
    }

    pub fn can_retry_wrong(&self) -> bool {
        self.is_showing_results() && !self.quiz.wrong_ids().is_empty()
    }

    pub fn open_home(&mut self) {
        self.mode = AppMode::Home;
    }

    pub fn open_study(&mut self) {
        self.mode = AppMode::Study;
        self.study_offset = 0;
    }

    /// Enter quiz mode with a fresh session over the whole dataset.
    pub fn open_quiz(&mut self) -> Result<(), QuizError> {
        self.quiz.restart_all()?;
        self.cursor = 0;
        self.mode = AppMode::Quiz;
        Ok(())
    }

    pub fn select_next_option(&mut self) {
        if self.accepts_selection() {
            self.cursor = (self.cursor + 1) % OPTION_COUNT;
        }
    }

    pub fn select_previous_option(&mut self) {
        if self.accepts_selection() {
            self.cursor = (self.cursor + OPTION_COUNT - 1) % OPTION_COUNT;
        }
    }

    /// Answer with the highlighted option, or move on once answered.
    pub fn confirm(&mut self) -> Result<(), QuizError> {
        if self.mode != AppMode::Quiz || self.quiz.phase() == Phase::Finished {
            return Ok(());
        }

        if self.quiz.selection().is_none() {
            let correct = self.quiz.select_option(self.cursor)?;
            debug!(correct, "answer submitted");
        } else {
            self.quiz.advance()?;
            self.cursor = 0;
        }
        Ok(())
    }

    pub fn restart_quiz(&mut self) -> Result<(), QuizError> {
        if !self.is_showing_results() {
            return Ok(());
        }
        self.quiz.restart_all()?;
        self.cursor = 0;
        Ok(())
    }

    pub fn retry_wrong(&mut self) -> Result<(), QuizError> {
        if !self.can_retry_wrong() {
            return Ok(());
        }
        self.quiz.restart_wrong()?;
        self.cursor = 0;
        Ok(())
    }

    pub fn scroll_study_down(&mut self) {
        if self.study_offset + 1 < self.dataset.len() {
            self.study_offset += 1;
        }
    }

    pub fn scroll_study_up(&mut self) {
        self.study_offset = self.study_offset.saturating_sub(1);
    }

    fn accepts_selection(&self) -> bool {
        self.mode == AppMode::Quiz
            && self.quiz.phase() == Phase::InProgress
            && self.quiz.selection().is_none()
    }
}
