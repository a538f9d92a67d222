use crate::cards::deck::{Deck, DeckSeed};
use crate::cards::hand::{Hand, WinState};
use crate::{OrderNum, ShowdownError, HAND_LEN};

/// Default shuffle order of the first hand's first card.
pub const HAND_A_START: OrderNum = 1;
/// Default shuffle order of the second hand's first card.
pub const HAND_B_START: OrderNum = 6;

/// One complete run: a seeded shuffle, two five-card hands extracted from
/// fixed positions in the shuffle order, and their classes. Owns everything
/// it produces; nothing is shared across runs.
#[derive(Debug)]
pub struct Showdown {
    seed: DeckSeed,
    deck: Deck,
    hands: [Hand; 2],
}

impl Showdown {
    /// Shuffle with `seed` and extract the hands starting at orders
    /// `start_a` and `start_b`. The two ranges must not overlap: a card can
    /// only be dealt to one hand.
    pub fn play(
        seed: DeckSeed,
        start_a: OrderNum,
        start_b: OrderNum,
    ) -> Result<Self, ShowdownError> {
        if ranges_overlap(start_a, start_b) {
            return Err(ShowdownError::OverlappingHands);
        }
        let deck = Deck::new(&seed);
        let hand_a = Hand::new(&deck.order_range(start_a)?)?;
        let hand_b = Hand::new(&deck.order_range(start_b)?)?;
        Ok(Self {
            seed,
            deck,
            hands: [hand_a, hand_b],
        })
    }

    /// A run with a fresh random seed and the default hand positions.
    pub fn deal() -> Result<Self, ShowdownError> {
        Self::play(DeckSeed::default(), HAND_A_START, HAND_B_START)
    }

    pub fn seed(&self) -> &DeckSeed {
        &self.seed
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn hands(&self) -> &[Hand; 2] {
        &self.hands
    }

    /// The first hand's result against the second.
    pub fn outcome(&self) -> WinState {
        self.hands[0].beats(&self.hands[1])
    }
}

fn ranges_overlap(a: OrderNum, b: OrderNum) -> bool {
    let gap = if a > b { a - b } else { b - a };
    gap < HAND_LEN
}
