use crate::models::QuizScreen;
use crate::ui::layout::calculate_result_chunks;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw_result(f: &mut Frame, screen: &QuizScreen) {
    let layout = calculate_result_chunks(f.area());
    let snapshot = screen.engine.snapshot();

    let title_text = format!("Session Complete - {}", screen.deck_name);
    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let mut card_text = Text::default();
    card_text.push_line(Line::from(""));
    card_text.push_line(Line::from(Span::styled(
        headline(snapshot.percentage),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    card_text.push_line(Line::from("Here is how you did"));
    card_text.push_line(Line::from(""));
    card_text.push_line(Line::from(Span::styled(
        format!("{}%", snapshot.percentage),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    card_text.push_line(Line::from(""));
    card_text.push_line(Line::from(format!(
        "You answered {} of {} questions correctly.",
        snapshot.score, snapshot.total_questions
    )));

    let card = Paragraph::new(card_text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(card, layout.card_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "r",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Restart Quiz  "),
        Span::styled(
            "m",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Main Menu  "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}

fn headline(percentage: u8) -> &'static str {
    if percentage >= 80 {
        "Great job!"
    } else if percentage >= 50 {
        "Nice work!"
    } else {
        "Keep practicing!"
    }
}
