use crate::session::RenderState;
use crate::ui::layout::calculate_study_chunks;
use crate::utils::truncate_string;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

pub fn draw_study(f: &mut Frame, state: &RenderState) {
    let layout = calculate_study_chunks(f.area());

    let header = Paragraph::new("flipdeck v0.1.0")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let item_width = layout.deck_area.width.saturating_sub(2) as usize;
    let deck_items: Vec<ListItem> = state
        .decks
        .iter()
        .enumerate()
        .map(|(i, deck)| {
            let label = format!("{} ({} cards)", deck.name, deck.cards.len());
            let style = if i == state.deck_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(truncate_string(&label, item_width)).style(style)
        })
        .collect();

    let deck_list =
        List::new(deck_items).block(Block::default().borders(Borders::ALL).title("Decks"));
    f.render_widget(deck_list, layout.deck_area);

    // One side at a time: the question, or the answer after a flip
    let (card_title, card_text) = if state.flipped {
        (
            "Answer",
            Text::from(Line::from(Span::styled(
                state.card.answer.as_str(),
                Style::default().fg(Color::Green),
            ))),
        )
    } else {
        ("Question", Text::from(state.card.question.as_str()))
    };

    let card = Paragraph::new(card_text)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(card_title));
    f.render_widget(card, layout.card_area);

    let progress = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Progress"))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(state.progress.fraction())
        .label(state.progress.label());
    f.render_widget(progress, layout.progress_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "Space",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Flip  "),
        Span::styled(
            "←/→",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Prev/Next  "),
        Span::styled(
            "↑/↓",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Deck  "),
        Span::styled(
            "1-4",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Rate  "),
        Span::styled(
            "s",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Shuffle  "),
        Span::styled(
            "a",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Add Deck  "),
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
    f.render_widget(help, layout.help_area);
}
