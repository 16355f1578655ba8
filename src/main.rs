use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

use flipdeck::backend::LogBackend;
use flipdeck::input::{self, InputEvent};
use flipdeck::session::StudySession;
use flipdeck::store::DeckStore;
use flipdeck::{decks, logger, ui};

fn main() -> io::Result<()> {
    logger::init();
    logger::log("Starting flipdeck");

    let mut all_decks = decks::sample_decks();
    let loaded = decks::load_decks(&decks::decks_dir());
    if !loaded.is_empty() {
        logger::log(&format!("Loaded {} decks from disk", loaded.len()));
        all_decks.extend(loaded);
    }

    let store = DeckStore::new(all_decks);
    let mut session = StudySession::new(store, Box::new(LogBackend));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    loop {
        terminal.draw(|f| ui::draw_study(f, &session.render_state()))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(event) = input::map_key(key, session.deck_index(), session.deck_count()) {
                if event == InputEvent::Quit {
                    break;
                }
                session.handle_event(event);
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
