use crate::engine::{EngineError, QuizEngine};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TIME_PER_QUESTION: u16 = 30;

/// One multiple-choice question. The order of `answers` is significant;
/// `correct_answer` indexes into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub answers: Vec<String>,
    pub correct_answer: usize,
}

/// A named set of questions, loaded from a `quizzes/*.json` file or built in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizDeck {
    pub name: String,
    #[serde(default = "default_time_per_question")]
    pub time_per_question: u16,
    pub questions: Vec<Question>,
}

fn default_time_per_question() -> u16 {
    DEFAULT_TIME_PER_QUESTION
}

/// Per-option render state. Derived from the engine on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerStatus {
    Idle,
    Selected,
    Correct,
    Wrong,
}

/// Read-only projection of the session state handed to the view layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub current_index: usize,
    pub total_questions: usize,
    pub time_remaining: u16,
    pub score: usize,
    pub answered: bool,
    pub finished: bool,
    pub selected_answer: Option<usize>,
    pub option_statuses: Vec<AnswerStatus>,
    pub percentage: u8,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Menu,
    Quiz,
    QuizQuitConfirm,
    Result,
}

/// Everything the quiz screen needs: the engine plus view-local state.
/// The option cursor is a rendering concern, not session state.
#[derive(Debug)]
pub struct QuizScreen {
    pub engine: QuizEngine,
    pub deck_name: String,
    pub highlighted: usize,
}

impl QuizScreen {
    pub fn new(deck: QuizDeck) -> Result<Self, EngineError> {
        let deck_name = deck.name;
        let engine = QuizEngine::new(deck.questions, deck.time_per_question)?;
        Ok(Self {
            engine,
            deck_name,
            highlighted: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_time_per_question_defaults() {
        let deck: QuizDeck = serde_json::from_str(
            r#"{
                "name": "Defaults",
                "questions": [
                    { "prompt": "Q?", "answers": ["a", "b"], "correct_answer": 0 }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(deck.time_per_question, DEFAULT_TIME_PER_QUESTION);
    }

    #[test]
    fn test_deck_time_per_question_explicit() {
        let deck: QuizDeck = serde_json::from_str(
            r#"{
                "name": "Fast round",
                "time_per_question": 10,
                "questions": [
                    { "prompt": "Q?", "answers": ["a", "b"], "correct_answer": 1 }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(deck.time_per_question, 10);
        assert_eq!(deck.questions[0].correct_answer, 1);
    }

    #[test]
    fn test_quiz_screen_starts_at_first_question() {
        let deck = QuizDeck {
            name: "Test".to_string(),
            time_per_question: 20,
            questions: vec![Question {
                prompt: "Q?".to_string(),
                answers: vec!["a".to_string(), "b".to_string()],
                correct_answer: 0,
            }],
        };
        let screen = QuizScreen::new(deck).unwrap();
        assert_eq!(screen.deck_name, "Test");
        assert_eq!(screen.highlighted, 0);
        assert_eq!(screen.engine.current_index(), 0);
        assert_eq!(screen.engine.time_remaining(), 20);
    }
}
