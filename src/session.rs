use crate::backend::Backend;
use crate::input::{ControlAction, InputEvent};
use crate::logger;
use crate::models::{Card, Deck, Rating};
use crate::store::DeckStore;

/// How far through the active deck the session is, in cards. `position`
/// is 1-based so the first card already counts as progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
}

impl Progress {
    pub fn fraction(&self) -> f64 {
        self.position as f64 / self.total as f64
    }

    pub fn label(&self) -> String {
        format!("{} of {}", self.position, self.total)
    }
}

/// Read-only snapshot of everything a frame needs to draw.
pub struct RenderState<'a> {
    pub decks: &'a [Deck],
    pub deck_index: usize,
    pub card: &'a Card,
    pub flipped: bool,
    pub progress: Progress,
}

/// The single piece of mutable study state: which deck, which card, and
/// whether the answer side is showing. Every operation that lands on a
/// different card also turns the card back to its question side.
pub struct StudySession {
    store: DeckStore,
    backend: Box<dyn Backend>,
    deck_index: usize,
    card_index: usize,
    flipped: bool,
}

impl StudySession {
    pub fn new(store: DeckStore, backend: Box<dyn Backend>) -> Self {
        Self {
            store,
            backend,
            deck_index: 0,
            card_index: 0,
            flipped: false,
        }
    }

    pub fn deck_index(&self) -> usize {
        self.deck_index
    }

    pub fn card_index(&self) -> usize {
        self.card_index
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn deck_count(&self) -> usize {
        self.store.deck_count()
    }

    fn active_card_count(&self) -> usize {
        self.store.decks()[self.deck_index].cards.len()
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CardActivated => self.flip(),
            InputEvent::Control(ControlAction::Prev) => self.prev(),
            InputEvent::Control(ControlAction::Next) => self.next(),
            InputEvent::Control(ControlAction::Shuffle) => self.shuffle_active_deck(),
            InputEvent::DeckSelected(index) => self.select_deck(index),
            InputEvent::Rated(rating) => self.rate(rating),
            InputEvent::NewDeckRequested => self.request_new_deck(),
            // Quit never reaches the session; the event loop exits on it.
            InputEvent::Quit => {}
        }
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Switches to the given deck and starts it from the first card.
    /// Selecting the deck that is already active changes nothing.
    pub fn select_deck(&mut self, index: usize) {
        assert!(
            index < self.store.deck_count(),
            "deck index {} out of range",
            index
        );
        if index != self.deck_index {
            self.deck_index = index;
            self.card_index = 0;
            self.flipped = false;
        }
    }

    pub fn next(&mut self) {
        let count = self.active_card_count();
        self.card_index = (self.card_index + 1) % count;
        self.flipped = false;
    }

    pub fn prev(&mut self) {
        let count = self.active_card_count();
        self.card_index = (self.card_index + count - 1) % count;
        self.flipped = false;
    }

    /// Hands the score for the current card to the backend, then moves on
    /// to the next card like [`Self::next`].
    pub fn rate(&mut self, rating: Rating) {
        let deck = &self.store.decks()[self.deck_index];
        self.backend
            .record_rating(&deck.name, self.card_index, rating);
        self.next();
    }

    /// Re-orders the active deck and starts it over. The new order sticks
    /// until the deck is shuffled again.
    pub fn shuffle_active_deck(&mut self) {
        self.store
            .shuffle(self.deck_index, &mut rand::thread_rng())
            .expect("active deck index is in range");
        logger::log(&format!(
            "Shuffled deck {:?}",
            self.store.decks()[self.deck_index].name
        ));
        self.card_index = 0;
        self.flipped = false;
    }

    pub fn request_new_deck(&mut self) {
        self.backend.request_new_deck();
    }

    pub fn progress(&self) -> Progress {
        Progress {
            position: self.card_index + 1,
            total: self.active_card_count(),
        }
    }

    pub fn render_state(&self) -> RenderState<'_> {
        RenderState {
            decks: self.store.decks(),
            deck_index: self.deck_index,
            card: &self.store.decks()[self.deck_index].cards[self.card_index],
            flipped: self.flipped,
            progress: self.progress(),
        }
    }
}
