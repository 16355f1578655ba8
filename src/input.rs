use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::Rating;

/// The three card-control actions: step backwards, step forwards, or
/// re-order the active deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Prev,
    Next,
    Shuffle,
}

/// What a key press means to the study session, with terminal details
/// already stripped away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    CardActivated,
    Control(ControlAction),
    DeckSelected(usize),
    Rated(Rating),
    NewDeckRequested,
    Quit,
}

/// Translates a key press into an [`InputEvent`]. Deck selection is clamped
/// here: Up on the first deck and Down on the last produce nothing, so the
/// session only ever sees deck indexes that exist.
pub fn map_key(key: KeyEvent, active_deck: usize, deck_count: usize) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(InputEvent::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => Some(InputEvent::CardActivated),
        KeyCode::Left | KeyCode::Char('h') => Some(InputEvent::Control(ControlAction::Prev)),
        KeyCode::Right | KeyCode::Char('l') => Some(InputEvent::Control(ControlAction::Next)),
        KeyCode::Up => {
            if active_deck > 0 {
                Some(InputEvent::DeckSelected(active_deck - 1))
            } else {
                None
            }
        }
        KeyCode::Down => {
            if active_deck + 1 < deck_count {
                Some(InputEvent::DeckSelected(active_deck + 1))
            } else {
                None
            }
        }
        KeyCode::Char('s') => Some(InputEvent::Control(ControlAction::Shuffle)),
        KeyCode::Char('a') => Some(InputEvent::NewDeckRequested),
        KeyCode::Char(c @ '1'..='4') => Rating::new(c as u8 - b'0').map(InputEvent::Rated),
        KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Quit),
        _ => None,
    }
}
