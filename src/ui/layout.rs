use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct StudyLayout {
    pub header_area: Rect,
    pub deck_area: Rect,
    pub card_area: Rect,
    pub progress_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_study_chunks(area: Rect) -> StudyLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[1]);

    StudyLayout {
        header_area: chunks[0],
        deck_area: body_chunks[0],
        card_area: body_chunks[1],
        progress_area: chunks[2],
        help_area: chunks[3],
    }
}
