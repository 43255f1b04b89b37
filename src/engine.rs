use crate::models::{AnswerStatus, Question, Snapshot};
use std::fmt;

/// What happens after a question has been answered.
///
/// `Manual` waits for an explicit Skip/Continue intent. `AutoAfter(n)` arms
/// an n-second countdown on answering; when it runs out the engine advances
/// by itself. Skip, Continue and restart disarm a pending countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdvancePolicy {
    #[default]
    Manual,
    AutoAfter(u16),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    EmptyQuestionSet,
    AnswerOutOfRange { index: usize, option_count: usize },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::EmptyQuestionSet => {
                write!(f, "a quiz session needs at least one question")
            }
            EngineError::AnswerOutOfRange {
                index,
                option_count,
            } => write!(
                f,
                "answer index {} out of range for a question with {} options",
                index, option_count
            ),
        }
    }
}

impl std::error::Error for EngineError {}

/// The quiz session state machine. Sole owner of question progression,
/// timing and scoring; deterministic given its input event sequence.
///
/// The engine is clock-agnostic: it never reads a clock itself. The caller
/// delivers one `tick()` per elapsed second while the timer is relevant
/// (see [`QuizEngine::timer_running`]), which makes the engine trivially
/// steppable in tests.
#[derive(Debug)]
pub struct QuizEngine {
    questions: Vec<Question>,
    time_per_question: u16,
    advance_policy: AdvancePolicy,
    current_index: usize,
    selected_answer: Option<usize>,
    answered: bool,
    score: usize,
    time_remaining: u16,
    auto_advance_remaining: Option<u16>,
    finished: bool,
}

impl QuizEngine {
    pub fn new(questions: Vec<Question>, time_per_question: u16) -> Result<Self, EngineError> {
        Self::with_policy(questions, time_per_question, AdvancePolicy::Manual)
    }

    pub fn with_policy(
        questions: Vec<Question>,
        time_per_question: u16,
        advance_policy: AdvancePolicy,
    ) -> Result<Self, EngineError> {
        if questions.is_empty() {
            return Err(EngineError::EmptyQuestionSet);
        }
        Ok(Self {
            questions,
            time_per_question,
            advance_policy,
            current_index: 0,
            selected_answer: None,
            answered: false,
            score: 0,
            time_remaining: time_per_question,
            auto_advance_remaining: None,
            finished: false,
        })
    }

    /// One elapsed second. Counts the question clock down to 0 and marks the
    /// question answered on timeout, with no selection and no score change.
    /// Once the question is answered only an armed auto-advance countdown
    /// still consumes ticks; everything else is a no-op, so stray ticks
    /// after a transition are harmless.
    pub fn tick(&mut self) {
        if self.finished {
            return;
        }
        if self.answered {
            if let Some(remaining) = self.auto_advance_remaining {
                if remaining <= 1 {
                    self.advance();
                } else {
                    self.auto_advance_remaining = Some(remaining - 1);
                }
            }
            return;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.mark_answered(None);
        }
    }

    /// Record the user's pick for the current question. First answer wins:
    /// once the question is answered (by selection or timeout) further calls
    /// are silently dropped, as are calls after the session finished. An
    /// out-of-range index is a caller contract violation.
    pub fn select_answer(&mut self, index: usize) -> Result<(), EngineError> {
        if self.finished || self.answered {
            return Ok(());
        }
        let option_count = self.questions[self.current_index].answers.len();
        if index >= option_count {
            return Err(EngineError::AnswerOutOfRange {
                index,
                option_count,
            });
        }
        if index == self.questions[self.current_index].correct_answer {
            self.score += 1;
        }
        self.mark_answered(Some(index));
        Ok(())
    }

    /// Move past the current question: Skip (any time) and Continue
    /// (view-gated on `answered`) both land here. On the last question the
    /// session finishes instead.
    pub fn advance(&mut self) {
        if self.finished {
            return;
        }
        self.auto_advance_remaining = None;
        if self.current_index + 1 == self.questions.len() {
            self.finished = true;
        } else {
            self.current_index += 1;
            self.selected_answer = None;
            self.answered = false;
            self.time_remaining = self.time_per_question;
        }
    }

    /// Reinitialize the whole session. Valid from any state; nothing carries
    /// over.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.selected_answer = None;
        self.answered = false;
        self.score = 0;
        self.time_remaining = self.time_per_question;
        self.auto_advance_remaining = None;
        self.finished = false;
    }

    /// Pure render query for one option of the current question.
    ///
    /// Unanswered: `Selected` for the picked option, `Idle` otherwise.
    /// Answered: `Correct` for the correct option, `Wrong` for a picked
    /// incorrect option, `Idle` for the rest. After a timeout no option was
    /// picked, so the correct one reports `Correct` and no option reports
    /// `Wrong`.
    pub fn answer_status(&self, index: usize) -> AnswerStatus {
        let question = &self.questions[self.current_index];
        if self.answered {
            if index == question.correct_answer {
                AnswerStatus::Correct
            } else if self.selected_answer == Some(index) {
                AnswerStatus::Wrong
            } else {
                AnswerStatus::Idle
            }
        } else if self.selected_answer == Some(index) {
            AnswerStatus::Selected
        } else {
            AnswerStatus::Idle
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let option_statuses = (0..self.current_question().answers.len())
            .map(|index| self.answer_status(index))
            .collect();
        Snapshot {
            current_index: self.current_index,
            total_questions: self.questions.len(),
            time_remaining: self.time_remaining,
            score: self.score,
            answered: self.answered,
            finished: self.finished,
            selected_answer: self.selected_answer,
            option_statuses,
            percentage: self.percentage(),
        }
    }

    /// True while the caller should keep delivering ticks: a question is
    /// live and unanswered, or an auto-advance countdown is pending.
    pub fn timer_running(&self) -> bool {
        !self.finished && (!self.answered || self.auto_advance_remaining.is_some())
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn percentage(&self) -> u8 {
        ((self.score * 100) as f64 / self.questions.len() as f64).round() as u8
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn selected_answer(&self) -> Option<usize> {
        self.selected_answer
    }

    pub fn answered(&self) -> bool {
        self.answered
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn time_remaining(&self) -> u16 {
        self.time_remaining
    }

    pub fn time_per_question(&self) -> u16 {
        self.time_per_question
    }

    fn mark_answered(&mut self, selection: Option<usize>) {
        self.selected_answer = selection;
        self.answered = true;
        if let AdvancePolicy::AutoAfter(delay) = self.advance_policy {
            self.auto_advance_remaining = Some(delay);
        }
    }
}
