use serde::{Deserialize, Serialize};

/// One question/answer pair. Immutable once created; a card has no identity
/// beyond its position in a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub question: String,
    pub answer: String,
}

impl Card {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A named, ordered collection of cards. Order is navigation order and may be
/// permuted by shuffle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub cards: Vec<Card>,
}

/// A difficulty score in 1..=4. Construction is the only validation point;
/// everything downstream can rely on the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating(u8);

impl Rating {
    pub fn new(score: u8) -> Option<Self> {
        (1..=4).contains(&score).then_some(Self(score))
    }

    pub fn score(self) -> u8 {
        self.0
    }
}
