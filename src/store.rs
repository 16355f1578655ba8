use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::models::{Card, Deck};

/// Which index was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Deck,
    Card,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Deck => write!(f, "deck"),
            Axis::Card => write!(f, "card"),
        }
    }
}

/// The only error this system produces. Navigation operations self-clamp, so
/// seeing this means a caller bypassed them with a bad index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{axis} index {index} out of range (len {len})")]
pub struct IndexOutOfRange {
    pub axis: Axis,
    pub index: usize,
    pub len: usize,
}

/// Owns every deck for the session. Never empty: construction asserts at
/// least one deck with at least one card, so navigation is always defined.
#[derive(Debug)]
pub struct DeckStore {
    decks: Vec<Deck>,
}

impl DeckStore {
    pub fn new(decks: Vec<Deck>) -> Self {
        assert!(!decks.is_empty(), "deck store requires at least one deck");
        for deck in &decks {
            assert!(
                !deck.cards.is_empty(),
                "deck {:?} has no cards",
                deck.name
            );
        }
        Self { decks }
    }

    pub fn deck_count(&self) -> usize {
        self.decks.len()
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn deck(&self, index: usize) -> Result<&Deck, IndexOutOfRange> {
        self.decks.get(index).ok_or(IndexOutOfRange {
            axis: Axis::Deck,
            index,
            len: self.decks.len(),
        })
    }

    pub fn card(&self, deck_index: usize, card_index: usize) -> Result<&Card, IndexOutOfRange> {
        let deck = self.deck(deck_index)?;
        deck.cards.get(card_index).ok_or(IndexOutOfRange {
            axis: Axis::Card,
            index: card_index,
            len: deck.cards.len(),
        })
    }

    pub fn card_count(&self, deck_index: usize) -> Result<usize, IndexOutOfRange> {
        Ok(self.deck(deck_index)?.cards.len())
    }

    /// Re-orders one deck's cards in place with a uniform shuffle. The card
    /// multiset is unchanged; the new order persists for the session.
    pub fn shuffle(
        &mut self,
        deck_index: usize,
        rng: &mut impl Rng,
    ) -> Result<(), IndexOutOfRange> {
        let len = self.decks.len();
        let deck = self.decks.get_mut(deck_index).ok_or(IndexOutOfRange {
            axis: Axis::Deck,
            index: deck_index,
            len,
        })?;
        deck.cards.shuffle(rng);
        Ok(())
    }
}
