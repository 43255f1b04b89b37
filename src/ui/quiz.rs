use crate::models::{AnswerStatus, QuizScreen};
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::truncate_string;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

pub fn draw_quiz(f: &mut Frame, screen: &QuizScreen) {
    let layout = calculate_quiz_chunks(f.area());
    let snapshot = screen.engine.snapshot();
    let question = screen.engine.current_question();

    let mut header_text = Text::default();
    header_text.push_line(Line::from(Span::styled(
        format!(
            "{} - How many can you get?",
            truncate_string(&screen.deck_name, 40)
        ),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));

    let timer_style = if snapshot.time_remaining <= 10 {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    header_text.push_line(Line::from(vec![
        Span::from(format!(
            "Question {:02} of {:02}",
            snapshot.current_index + 1,
            snapshot.total_questions
        )),
        Span::from("    "),
        Span::from("Time left "),
        Span::styled(format!("{}s", snapshot.time_remaining), timer_style),
    ]));
    header_text.push_line(progress_segments(
        snapshot.current_index,
        snapshot.total_questions,
    ));

    let header = Paragraph::new(header_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let prompt = Paragraph::new(Text::from(question.prompt.as_str()))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(prompt, layout.question_area);

    let items: Vec<ListItem> = question
        .answers
        .iter()
        .enumerate()
        .map(|(i, answer)| {
            let status = snapshot.option_statuses[i];
            let cursor = if !snapshot.answered && i == screen.highlighted {
                "› "
            } else {
                "  "
            };
            let marker = match status {
                AnswerStatus::Correct => "  ✓",
                AnswerStatus::Wrong => "  ✗",
                AnswerStatus::Selected | AnswerStatus::Idle => "",
            };
            ListItem::new(format!("{}{}. {}{}", cursor, i + 1, answer, marker))
                .style(option_style(status))
        })
        .collect();

    let options = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Answers"),
    );
    f.render_widget(options, layout.options_area);

    let mut footer_text = vec![feedback_line(screen)];
    footer_text.push(help_line(screen));
    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, layout.footer_area);
}

fn progress_segments(current_index: usize, total_questions: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(total_questions * 2);
    for idx in 0..total_questions {
        let style = if idx < current_index {
            Style::default().fg(Color::Green)
        } else if idx == current_index {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled("━━", style));
        if idx + 1 < total_questions {
            spans.push(Span::from(" "));
        }
    }
    Line::from(spans)
}

fn option_style(status: AnswerStatus) -> Style {
    match status {
        AnswerStatus::Idle => Style::default(),
        AnswerStatus::Selected => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        AnswerStatus::Correct => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        AnswerStatus::Wrong => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

fn feedback_line(screen: &QuizScreen) -> Line<'_> {
    if !screen.engine.answered() {
        return Line::from(Span::styled(
            "Pick an answer before the clock runs out",
            Style::default().fg(Color::DarkGray),
        ));
    }
    match screen.engine.selected_answer() {
        Some(picked) if picked == screen.engine.current_question().correct_answer => {
            Line::from(Span::styled(
                "Correct!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
        }
        Some(_) => Line::from(Span::styled(
            "Not quite. The correct answer is highlighted.",
            Style::default().fg(Color::Red),
        )),
        None => Line::from(Span::styled(
            "Time's up! The correct answer is highlighted.",
            Style::default().fg(Color::Yellow),
        )),
    }
}

fn help_line(screen: &QuizScreen) -> Line<'_> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    if screen.engine.answered() {
        let continue_label = if screen.engine.is_last_question() {
            " See Results  "
        } else {
            " Continue  "
        };
        Line::from(vec![
            Span::styled("Enter", key_style),
            Span::from(continue_label),
            Span::styled("s", key_style),
            Span::from(" Skip  "),
            Span::styled("Esc", key_style),
            Span::from(" Quit to Menu"),
        ])
    } else {
        Line::from(vec![
            Span::styled("↑/↓", key_style),
            Span::from(" Move  "),
            Span::styled("Enter", key_style),
            Span::from(" Select  "),
            Span::styled("1-9", key_style),
            Span::from(" Pick  "),
            Span::styled("s", key_style),
            Span::from(" Skip  "),
            Span::styled("Esc", key_style),
            Span::from(" Quit to Menu"),
        ])
    }
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Quit to Menu")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Abandon this session and return to the menu? Progress is lost.")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Return to Menu)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Keep Playing)  "),
        Span::styled(
            "Ctrl+C",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
