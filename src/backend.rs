use crate::logger;
use crate::models::Rating;

/// Receiver for the study actions that leave the UI: ratings and requests
/// for new decks. The session drives this; swapping the implementation is
/// how tests observe what the session forwarded.
pub trait Backend {
    fn record_rating(&mut self, deck_name: &str, card_index: usize, rating: Rating);
    fn request_new_deck(&mut self);
}

/// Default backend: everything lands in the log file.
pub struct LogBackend;

impl Backend for LogBackend {
    fn record_rating(&mut self, deck_name: &str, card_index: usize, rating: Rating) {
        logger::log(&format!(
            "Card {} of deck {:?} rated as: {}",
            card_index + 1,
            deck_name,
            rating.score()
        ));
    }

    fn request_new_deck(&mut self) {
        logger::log("Add new deck requested");
    }
}
