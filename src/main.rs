use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use terminal_trivia::{
    controls, decks, logger,
    models::{AppState, QuizScreen},
    ui::{draw_menu, draw_quit_confirmation, draw_quiz, draw_result},
};

const TICK_INTERVAL: Duration = Duration::from_secs(1);

enum DeckSource {
    Builtin,
    File(PathBuf),
}

fn main() -> io::Result<()> {
    logger::init();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut sources = vec![DeckSource::Builtin];
    let mut deck_names = vec![decks::builtin_deck().name];
    for path in decks::get_deck_files() {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default();
        deck_names.push(name);
        sources.push(DeckSource::File(path));
    }

    let mut app_state = AppState::Menu;
    let mut selected_deck_index: usize = 0;
    let mut quiz_screen: Option<QuizScreen> = None;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| match app_state {
            AppState::Menu => draw_menu(f, &deck_names, selected_deck_index),
            AppState::Quiz => {
                if let Some(screen) = &quiz_screen {
                    draw_quiz(f, screen);
                }
            }
            AppState::QuizQuitConfirm => draw_quit_confirmation(f),
            AppState::Result => {
                if let Some(screen) = &quiz_screen {
                    draw_result(f, screen);
                }
            }
        })?;

        // Wake up for the next due tick even when no key arrives.
        let timeout = TICK_INTERVAL.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
        {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }
            match app_state {
                AppState::Menu => match key.code {
                    KeyCode::Up => {
                        if selected_deck_index > 0 {
                            selected_deck_index -= 1;
                        }
                    }
                    KeyCode::Down => {
                        if selected_deck_index < deck_names.len().saturating_sub(1) {
                            selected_deck_index += 1;
                        }
                    }
                    KeyCode::Enter => {
                        let deck = match &sources[selected_deck_index] {
                            DeckSource::Builtin => Some(decks::builtin_deck()),
                            DeckSource::File(path) => match decks::load_deck(path) {
                                Ok(deck) => Some(deck),
                                Err(err) => {
                                    logger::log(&format!(
                                        "failed to load {}: {}",
                                        path.display(),
                                        err
                                    ));
                                    None
                                }
                            },
                        };
                        if let Some(deck) = deck {
                            match QuizScreen::new(deck) {
                                Ok(screen) => {
                                    logger::log(&format!(
                                        "session started: {} ({} questions)",
                                        screen.deck_name,
                                        screen.engine.total_questions()
                                    ));
                                    quiz_screen = Some(screen);
                                    app_state = AppState::Quiz;
                                    last_tick = Instant::now();
                                }
                                Err(err) => {
                                    logger::log(&format!("cannot start session: {}", err));
                                }
                            }
                        }
                    }
                    KeyCode::Char('q') => break,
                    _ => {}
                },
                AppState::Quiz => {
                    if let Some(screen) = &mut quiz_screen {
                        let index_before = screen.engine.current_index();
                        controls::handle_quiz_input(screen, key, &mut app_state);
                        // A new question gets a full first second: the
                        // deadline from the previous question never carries
                        // over across an advance.
                        if screen.engine.current_index() != index_before {
                            last_tick = Instant::now();
                        }
                    }
                }
                AppState::QuizQuitConfirm => match key.code {
                    KeyCode::Char('y') | KeyCode::Char('Y') => {
                        quiz_screen = None;
                        app_state = AppState::Menu;
                    }
                    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                        app_state = AppState::Quiz;
                        last_tick = Instant::now();
                    }
                    _ => {}
                },
                AppState::Result => match key.code {
                    KeyCode::Char('r') => {
                        if let Some(screen) = &mut quiz_screen {
                            screen.engine.restart();
                            screen.highlighted = 0;
                            logger::log("session restarted");
                            app_state = AppState::Quiz;
                            last_tick = Instant::now();
                        }
                    }
                    KeyCode::Char('m') => {
                        quiz_screen = None;
                        app_state = AppState::Menu;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    _ => {}
                },
            }
        }

        if last_tick.elapsed() >= TICK_INTERVAL {
            if app_state == AppState::Quiz
                && let Some(screen) = &mut quiz_screen
                && screen.engine.timer_running()
            {
                let index_before = screen.engine.current_index();
                let answered_before = screen.engine.answered();
                screen.engine.tick();
                if !answered_before
                    && screen.engine.answered()
                    && screen.engine.selected_answer().is_none()
                {
                    logger::log(&format!(
                        "question {} timed out",
                        screen.engine.current_index() + 1
                    ));
                }
                controls::sync_after_engine_transition(screen, index_before, &mut app_state);
            }
            last_tick = Instant::now();
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
