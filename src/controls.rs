use crate::logger;
use crate::models::{AppState, QuizScreen};
use crossterm::event::{KeyCode, KeyEvent};

/// Translate a key event on the quiz screen into engine intents.
///
/// The view gates Continue on `answered`; Skip is always allowed. The
/// engine itself never rejects an early advance, so the gating lives here.
pub fn handle_quiz_input(screen: &mut QuizScreen, key: KeyEvent, app_state: &mut AppState) {
    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::QuizQuitConfirm;
        }
        KeyCode::Up => {
            if !screen.engine.answered() && screen.highlighted > 0 {
                screen.highlighted -= 1;
            }
        }
        KeyCode::Down => {
            let last = screen.engine.current_question().answers.len() - 1;
            if !screen.engine.answered() && screen.highlighted < last {
                screen.highlighted += 1;
            }
        }
        KeyCode::Enter => {
            if screen.engine.answered() {
                advance_screen(screen, app_state);
            } else {
                select(screen, screen.highlighted);
            }
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if index < screen.engine.current_question().answers.len() {
                select(screen, index);
            }
        }
        KeyCode::Char('s') => {
            logger::log(&format!(
                "question {} skipped",
                screen.engine.current_index() + 1
            ));
            advance_screen(screen, app_state);
        }
        _ => {}
    }
}

/// A transition driven by the engine itself (auto-advance firing inside a
/// tick) needs the same follow-up as a key-driven one: reset the option
/// cursor and leave the quiz screen when the session finished.
pub fn sync_after_engine_transition(
    screen: &mut QuizScreen,
    index_before: usize,
    app_state: &mut AppState,
) {
    if screen.engine.finished() {
        logger::log(&format!(
            "session finished: score {}/{}",
            screen.engine.score(),
            screen.engine.total_questions()
        ));
        *app_state = AppState::Result;
    } else if screen.engine.current_index() != index_before {
        screen.highlighted = 0;
    }
}

fn select(screen: &mut QuizScreen, index: usize) {
    // The index is range-checked above, so a rejection here means the view
    // and engine disagree about the current question.
    if let Err(err) = screen.engine.select_answer(index) {
        logger::log(&format!("selection rejected: {}", err));
        return;
    }
    if screen.engine.answered() {
        screen.highlighted = index;
    }
}

fn advance_screen(screen: &mut QuizScreen, app_state: &mut AppState) {
    let index_before = screen.engine.current_index();
    screen.engine.advance();
    sync_after_engine_transition(screen, index_before, app_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Question, QuizDeck};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn screen(total: usize) -> QuizScreen {
        let questions = (0..total)
            .map(|i| Question {
                prompt: format!("Q{}", i + 1),
                answers: vec![
                    "a".to_string(),
                    "b".to_string(),
                    "c".to_string(),
                    "d".to_string(),
                ],
                correct_answer: 1,
            })
            .collect();
        QuizScreen::new(QuizDeck {
            name: "Test".to_string(),
            time_per_question: 30,
            questions,
        })
        .unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_digit_key_selects_answer() {
        let mut screen = screen(3);
        let mut app_state = AppState::Quiz;
        handle_quiz_input(&mut screen, press(KeyCode::Char('2')), &mut app_state);
        assert!(screen.engine.answered());
        assert_eq!(screen.engine.selected_answer(), Some(1));
        assert_eq!(screen.engine.score(), 1);
        assert_eq!(app_state, AppState::Quiz);
    }

    #[test]
    fn test_digit_key_out_of_range_is_ignored() {
        let mut screen = screen(3);
        let mut app_state = AppState::Quiz;
        handle_quiz_input(&mut screen, press(KeyCode::Char('9')), &mut app_state);
        assert!(!screen.engine.answered());
        assert!(screen.engine.selected_answer().is_none());
    }

    #[test]
    fn test_cursor_moves_within_bounds() {
        let mut screen = screen(3);
        let mut app_state = AppState::Quiz;
        handle_quiz_input(&mut screen, press(KeyCode::Up), &mut app_state);
        assert_eq!(screen.highlighted, 0);
        handle_quiz_input(&mut screen, press(KeyCode::Down), &mut app_state);
        handle_quiz_input(&mut screen, press(KeyCode::Down), &mut app_state);
        assert_eq!(screen.highlighted, 2);
        handle_quiz_input(&mut screen, press(KeyCode::Down), &mut app_state);
        handle_quiz_input(&mut screen, press(KeyCode::Down), &mut app_state);
        assert_eq!(screen.highlighted, 3);
    }

    #[test]
    fn test_enter_selects_highlighted_option() {
        let mut screen = screen(3);
        let mut app_state = AppState::Quiz;
        handle_quiz_input(&mut screen, press(KeyCode::Down), &mut app_state);
        handle_quiz_input(&mut screen, press(KeyCode::Enter), &mut app_state);
        assert_eq!(screen.engine.selected_answer(), Some(1));
        assert_eq!(screen.engine.score(), 1);
    }

    #[test]
    fn test_enter_continues_once_answered() {
        let mut screen = screen(3);
        let mut app_state = AppState::Quiz;
        handle_quiz_input(&mut screen, press(KeyCode::Char('1')), &mut app_state);
        assert!(screen.engine.answered());
        handle_quiz_input(&mut screen, press(KeyCode::Enter), &mut app_state);
        assert_eq!(screen.engine.current_index(), 1);
        assert!(!screen.engine.answered());
        assert_eq!(screen.highlighted, 0);
        assert_eq!(app_state, AppState::Quiz);
    }

    #[test]
    fn test_skip_works_without_answering() {
        let mut screen = screen(3);
        let mut app_state = AppState::Quiz;
        handle_quiz_input(&mut screen, press(KeyCode::Char('s')), &mut app_state);
        assert_eq!(screen.engine.current_index(), 1);
        assert_eq!(screen.engine.score(), 0);
    }

    #[test]
    fn test_skip_on_last_question_shows_results() {
        let mut screen = screen(1);
        let mut app_state = AppState::Quiz;
        handle_quiz_input(&mut screen, press(KeyCode::Char('s')), &mut app_state);
        assert!(screen.engine.finished());
        assert_eq!(app_state, AppState::Result);
    }

    #[test]
    fn test_continue_on_last_question_shows_results() {
        let mut screen = screen(2);
        let mut app_state = AppState::Quiz;
        handle_quiz_input(&mut screen, press(KeyCode::Char('1')), &mut app_state);
        handle_quiz_input(&mut screen, press(KeyCode::Enter), &mut app_state);
        handle_quiz_input(&mut screen, press(KeyCode::Char('2')), &mut app_state);
        handle_quiz_input(&mut screen, press(KeyCode::Enter), &mut app_state);
        assert!(screen.engine.finished());
        assert_eq!(app_state, AppState::Result);
        assert_eq!(screen.engine.score(), 1);
    }

    #[test]
    fn test_second_selection_is_dropped() {
        let mut screen = screen(3);
        let mut app_state = AppState::Quiz;
        handle_quiz_input(&mut screen, press(KeyCode::Char('3')), &mut app_state);
        handle_quiz_input(&mut screen, press(KeyCode::Char('1')), &mut app_state);
        assert_eq!(screen.engine.selected_answer(), Some(2));
    }

    #[test]
    fn test_cursor_frozen_once_answered() {
        let mut screen = screen(3);
        let mut app_state = AppState::Quiz;
        handle_quiz_input(&mut screen, press(KeyCode::Char('1')), &mut app_state);
        let highlighted = screen.highlighted;
        handle_quiz_input(&mut screen, press(KeyCode::Down), &mut app_state);
        assert_eq!(screen.highlighted, highlighted);
    }

    #[test]
    fn test_esc_opens_quit_confirmation() {
        let mut screen = screen(3);
        let mut app_state = AppState::Quiz;
        handle_quiz_input(&mut screen, press(KeyCode::Esc), &mut app_state);
        assert_eq!(app_state, AppState::QuizQuitConfirm);
    }

    #[test]
    fn test_sync_after_auto_advance_resets_cursor() {
        let mut screen = screen(3);
        let mut app_state = AppState::Quiz;
        handle_quiz_input(&mut screen, press(KeyCode::Down), &mut app_state);
        let index_before = screen.engine.current_index();
        screen.engine.advance();
        sync_after_engine_transition(&mut screen, index_before, &mut app_state);
        assert_eq!(screen.highlighted, 0);
        assert_eq!(app_state, AppState::Quiz);
    }

    #[test]
    fn test_sync_after_finish_switches_to_results() {
        let mut screen = screen(1);
        let mut app_state = AppState::Quiz;
        let index_before = screen.engine.current_index();
        screen.engine.advance();
        sync_after_engine_transition(&mut screen, index_before, &mut app_state);
        assert_eq!(app_state, AppState::Result);
    }
}
