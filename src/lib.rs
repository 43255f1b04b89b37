pub mod controls;
pub mod decks;
pub mod engine;
pub mod logger;
pub mod models;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use controls::{handle_quiz_input, sync_after_engine_transition};
pub use decks::{builtin_deck, get_deck_files, load_deck, validate_deck};
pub use engine::{AdvancePolicy, EngineError, QuizEngine};
pub use models::{AnswerStatus, AppState, Question, QuizDeck, QuizScreen, Snapshot};
pub use ui::{draw_menu, draw_quit_confirmation, draw_quiz, draw_result};
pub use utils::truncate_string;
