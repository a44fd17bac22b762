//! Quiz core: option generation and the session state machine.

mod distractor;
mod session;

pub use distractor::{generate_options, DISTRACTOR_COUNT, OPTION_COUNT};
pub use session::{Phase, QuizSession, SessionKind, SessionSnapshot, Summary};
