use crate::cards::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::{OrderNum, DECK_LEN, HAND_LEN};
use base64ct::{Base64, Encoding};
use rand::prelude::*;
use rand_chacha::ChaChaRng;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

const SEED_LEN: usize = 32;
const ENCODED_SEED_LEN: usize = 4 * ((SEED_LEN + 3 - 1) / 3); // 4 * ceil(SEED_LEN / 3)

#[derive(Debug, PartialEq)]
pub enum DeckError {
    OrderOutOfRange(OrderNum),
    SeedDecodeError(base64ct::Error),
}

impl Error for DeckError {}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::OrderOutOfRange(n) => write!(
                f,
                "No run of {} cards starts at shuffle order {} (valid starts are 1..={})",
                HAND_LEN,
                n,
                DECK_LEN - HAND_LEN + 1
            ),
            DeckError::SeedDecodeError(e) => write!(f, "{}", e),
        }
    }
}

impl From<base64ct::Error> for DeckError {
    fn from(e: base64ct::Error) -> Self {
        Self::SeedDecodeError(e)
    }
}

/// A full 52-card deck in shuffle order. The card at position `i` carries
/// shuffle order number `i + 1`, i.e. it is the `i + 1`th card dealt.
#[derive(Debug, PartialEq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(&DeckSeed::default())
    }
}

impl Deck {
    /// Generate a single deck of cards, shuffled deterministically from `seed`.
    pub fn new(seed: &DeckSeed) -> Self {
        use itertools::Itertools;
        let cards: Vec<Card> = ALL_SUITS
            .iter()
            .cartesian_product(ALL_RANKS.iter())
            .map(|x| Card::new(*x.1, *x.0))
            .collect();
        assert_eq!(cards.len(), DECK_LEN);
        let mut d = Deck { cards };
        d.seeded_shuffle(seed);
        d
    }

    /// A fresh random seed and the deck it produces, so callers can report
    /// the seed and reproduce the run later.
    pub fn deck_and_seed() -> (Deck, DeckSeed) {
        let ds = DeckSeed::default();
        let d = Deck::new(&ds);
        (d, ds)
    }

    pub fn seeded_shuffle(&mut self, seed: &DeckSeed) {
        let mut rng = ChaChaRng::from_seed(seed.0);
        // For determinism given the same seed, the cards need to be in a known order before shuffling.
        self.cards.sort_unstable();
        self.cards.shuffle(&mut rng)
    }

    /// All 52 cards in shuffle order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The five cards whose shuffle order numbers are `start..=start + 4`,
    /// in increasing order. Read-only: the deck is not consumed.
    pub fn order_range(&self, start: OrderNum) -> Result<[Card; HAND_LEN], DeckError> {
        if start < 1 || start > self.cards.len() - HAND_LEN + 1 {
            return Err(DeckError::OrderOutOfRange(start));
        }
        let s = &self.cards[start - 1..start - 1 + HAND_LEN];
        Ok([s[0], s[1], s[2], s[3], s[4]])
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckSeed([u8; SEED_LEN]);

impl DeckSeed {
    pub const fn new(b: [u8; SEED_LEN]) -> Self {
        Self(b)
    }
}

impl Default for DeckSeed {
    fn default() -> Self {
        let mut b = [0u8; SEED_LEN];
        thread_rng().fill_bytes(&mut b);
        Self(b)
    }
}

impl fmt::Display for DeckSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut b = [0u8; ENCODED_SEED_LEN];
        Base64::encode(&self.0, &mut b).unwrap();
        write!(f, "{}", String::from_utf8_lossy(&b))
    }
}

impl FromStr for DeckSeed {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut b: [u8; SEED_LEN] = [0; SEED_LEN];
        Base64::decode(s, &mut b)?;
        Ok(DeckSeed(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Rank;
    use std::collections::HashMap;

    const SEED1: DeckSeed = DeckSeed([1; SEED_LEN]);
    const SEED2: DeckSeed = DeckSeed([0; SEED_LEN]);

    #[test]
    fn right_len() {
        let d = Deck::default();
        assert_eq!(d.cards.len(), DECK_LEN);
    }

    // Every order number maps to exactly one distinct card.
    #[test]
    fn right_count() {
        let d = Deck::default();
        let mut counts: HashMap<Card, u16> = HashMap::new();
        for card in d.cards.iter() {
            if let Some(count) = counts.get_mut(card) {
                *count += 1;
            } else {
                counts.insert(*card, 1);
            }
        }
        assert_eq!(counts.len(), DECK_LEN);
        for count in counts.values() {
            assert_eq!(*count, 1);
        }
    }

    #[test]
    fn is_shuffled() {
        let d = Deck::default();
        let top = d.order_range(1).unwrap();
        if top[0].rank() == Rank::Ace
            && top[1].rank() == Rank::Ace
            && top[2].rank() == Rank::Ace
            && top[3].rank() == Rank::Ace
        {
            panic!("Top four cards were all aces! This indicates the deck was not shuffled. There is a *very* small chance this is a false positive.")
        }
    }

    /// Given a specific seed, the order of the cards should always be the same.
    #[test]
    fn deck_is_seedable() {
        let d1 = Deck::new(&SEED1);
        let d2 = Deck::new(&SEED1);
        assert_eq!(d1, d2);
        let d3 = Deck::new(&SEED2);
        assert_ne!(d1, d3);
    }

    // The reported seed rebuilds the exact same deck.
    #[test]
    fn deck_and_seed_agree() {
        let (d, s) = Deck::deck_and_seed();
        assert_eq!(d, Deck::new(&s));
    }

    #[test]
    fn seed_to_from_string() {
        let d = DeckSeed::default();
        let s = d.to_string();
        let d2: DeckSeed = s.parse().unwrap();
        assert_eq!(d, d2);
    }

    #[test]
    fn order_range_bounds() {
        let d = Deck::default();
        assert!(d.order_range(1).is_ok());
        assert!(d.order_range(DECK_LEN - HAND_LEN + 1).is_ok());
        assert_eq!(d.order_range(0).unwrap_err(), DeckError::OrderOutOfRange(0));
        assert_eq!(
            d.order_range(DECK_LEN - HAND_LEN + 2).unwrap_err(),
            DeckError::OrderOutOfRange(DECK_LEN - HAND_LEN + 2)
        );
    }

    #[test]
    fn order_range_is_positional() {
        let d = Deck::new(&SEED1);
        let hand = d.order_range(6).unwrap();
        assert_eq!(&hand[..], &d.cards()[5..10]);
    }

    // Extraction never mutates the deck, so two extractions of the same
    // range return the same cards.
    #[test]
    fn order_range_read_only() {
        let d = Deck::new(&SEED1);
        assert_eq!(d.order_range(1).unwrap(), d.order_range(1).unwrap());
        assert_eq!(d.cards().len(), DECK_LEN);
    }
}
