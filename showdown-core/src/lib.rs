pub mod cards;
pub mod table;

pub use cards::{card, deck, hand};

pub const DECK_LEN: usize = 52;
pub const HAND_LEN: usize = 5;

/// A card's position in the shuffled deal sequence. The first card dealt has
/// order number 1, the last has order number [`DECK_LEN`].
pub type OrderNum = usize;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ShowdownError {
    Deck(deck::DeckError),
    Hand(hand::HandError),
    OverlappingHands,
}
