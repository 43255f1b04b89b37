use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub question_area: Rect,
    pub options_area: Rect,
    pub footer_area: Rect,
}

pub struct ResultLayout {
    pub header_area: Rect,
    pub card_area: Rect,
    pub footer_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(4),
            Constraint::Percentage(50),
            Constraint::Length(4),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        question_area: chunks[1],
        options_area: chunks[2],
        footer_area: chunks[3],
    }
}

pub fn calculate_result_chunks(area: Rect) -> ResultLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    ResultLayout {
        header_area: chunks[0],
        card_area: chunks[1],
        footer_area: chunks[2],
    }
}
