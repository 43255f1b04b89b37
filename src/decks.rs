use crate::models::{DEFAULT_TIME_PER_QUESTION, Question, QuizDeck};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub fn get_deck_files() -> Vec<PathBuf> {
    let deck_dir = PathBuf::from("quizzes");
    let mut files = Vec::new();

    if deck_dir.exists()
        && deck_dir.is_dir()
        && let Ok(entries) = fs::read_dir(&deck_dir)
    {
        for entry in entries.flatten() {
            if let Some(ext) = entry.path().extension()
                && ext == "json"
            {
                files.push(entry.path());
            }
        }
    }

    files.sort();
    files
}

pub fn load_deck(path: &Path) -> io::Result<QuizDeck> {
    let content = fs::read_to_string(path)?;
    let deck: QuizDeck = serde_json::from_str(&content)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    validate_deck(&deck).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(deck)
}

/// A deck must be playable before a session starts: at least one question,
/// at least two options per question, and every correct index in range.
pub fn validate_deck(deck: &QuizDeck) -> Result<(), String> {
    if deck.questions.is_empty() {
        return Err(format!("deck '{}' has no questions", deck.name));
    }
    for (i, question) in deck.questions.iter().enumerate() {
        if question.answers.len() < 2 {
            return Err(format!(
                "question {} needs at least two answer options",
                i + 1
            ));
        }
        if question.correct_answer >= question.answers.len() {
            return Err(format!(
                "question {} marks option {} correct but only has {} options",
                i + 1,
                question.correct_answer,
                question.answers.len()
            ));
        }
    }
    Ok(())
}

/// The deck shipped with the app, available even with an empty `quizzes/`
/// directory.
pub fn builtin_deck() -> QuizDeck {
    QuizDeck {
        name: "React Native Basics".to_string(),
        time_per_question: DEFAULT_TIME_PER_QUESTION,
        questions: vec![
            q(
                "What is React Native?",
                &[
                    "A web framework",
                    "A mobile app development framework",
                    "A database",
                    "A programming language",
                ],
                1,
            ),
            q(
                "Which company developed React Native?",
                &["Google", "Microsoft", "Facebook", "Apple"],
                2,
            ),
            q(
                "What language is React Native based on?",
                &["Python", "Java", "JavaScript", "Swift"],
                2,
            ),
            q(
                "Which hook is used for side effects in React?",
                &["useState", "useEffect", "useContext", "useReducer"],
                1,
            ),
            q(
                "What does JSX stand for?",
                &[
                    "JavaScript XML",
                    "Java Syntax Extension",
                    "JSON XML",
                    "JavaScript Extension",
                ],
                0,
            ),
        ],
    }
}

fn q(prompt: &str, answers: &[&str], correct_answer: usize) -> Question {
    Question {
        prompt: prompt.to_string(),
        answers: answers.iter().map(|a| a.to_string()).collect(),
        correct_answer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_deck_is_valid() {
        let deck = builtin_deck();
        assert!(validate_deck(&deck).is_ok());
        assert_eq!(deck.questions.len(), 5);
        assert_eq!(deck.time_per_question, 30);
    }

    #[test]
    fn test_validate_rejects_empty_deck() {
        let deck = QuizDeck {
            name: "Empty".to_string(),
            time_per_question: 30,
            questions: Vec::new(),
        };
        let err = validate_deck(&deck).unwrap_err();
        assert!(err.contains("no questions"));
    }

    #[test]
    fn test_validate_rejects_single_option_question() {
        let deck = QuizDeck {
            name: "Short".to_string(),
            time_per_question: 30,
            questions: vec![q("Q?", &["only"], 0)],
        };
        let err = validate_deck(&deck).unwrap_err();
        assert!(err.contains("at least two answer options"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_correct_index() {
        let deck = QuizDeck {
            name: "Broken".to_string(),
            time_per_question: 30,
            questions: vec![q("Q?", &["a", "b"], 2)],
        };
        let err = validate_deck(&deck).unwrap_err();
        assert!(err.contains("marks option 2 correct"));
    }

    #[test]
    fn test_load_deck_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "name": "Capitals",
                "time_per_question": 15,
                "questions": [
                    {{
                        "prompt": "Capital of France?",
                        "answers": ["Paris", "Rome", "Madrid"],
                        "correct_answer": 0
                    }}
                ]
            }}"#
        )
        .unwrap();

        let deck = load_deck(file.path()).unwrap();
        assert_eq!(deck.name, "Capitals");
        assert_eq!(deck.time_per_question, 15);
        assert_eq!(deck.questions.len(), 1);
        assert_eq!(deck.questions[0].answers.len(), 3);
    }

    #[test]
    fn test_load_deck_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = load_deck(file.path()).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_load_deck_rejects_invalid_deck() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "name": "Broken",
                "questions": [
                    {{ "prompt": "Q?", "answers": ["a", "b"], "correct_answer": 5 }}
                ]
            }}"#
        )
        .unwrap();
        let err = load_deck(file.path()).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_load_deck_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_deck(&dir.path().join("nope.json"));
        assert!(result.is_err());
    }
}
