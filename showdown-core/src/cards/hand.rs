use crate::cards::card::{Card, Rank, Suit, ALL_RANKS};
use crate::HAND_LEN;
use enum_map::EnumMap;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt;

/// How many of each rank a hand holds. Counts always sum to [`HAND_LEN`].
pub type RankCounts = EnumMap<Rank, u8>;
/// How many of each suit a hand holds. Counts always sum to [`HAND_LEN`].
pub type SuitCounts = EnumMap<Suit, u8>;

#[derive(Debug, PartialEq)]
pub enum WinState {
    Win,
    Tie,
    Lose,
}

impl From<Ordering> for WinState {
    fn from(o: Ordering) -> Self {
        match o {
            Ordering::Less => WinState::Lose,
            Ordering::Greater => WinState::Win,
            Ordering::Equal => WinState::Tie,
        }
    }
}

/// The fixed category ladder. Variants are ordered weakest first so the
/// derived `Ord` ranks a stronger class as greater.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandClass {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl HandClass {
    /// Ladder position, 1 (Straight Flush, best) through 9 (High Card, worst).
    pub fn priority(self) -> u8 {
        match self {
            Self::StraightFlush => 1,
            Self::FourOfAKind => 2,
            Self::FullHouse => 3,
            Self::Flush => 4,
            Self::Straight => 5,
            Self::ThreeOfAKind => 6,
            Self::TwoPair => 7,
            Self::Pair => 8,
            Self::HighCard => 9,
        }
    }

    /// Classify a hand from its two frequency tables. The checks must stay in
    /// best-to-worst order: each one only verifies that the hand *can* be
    /// read as that class, not that the class is the best available reading.
    pub fn from_counts(ranks: &RankCounts, suits: &SuitCounts) -> Self {
        if Self::is_straight(ranks) && Self::is_flush(suits) {
            Self::StraightFlush
        } else if Self::ranks_with_count(ranks, 4) == 1 {
            Self::FourOfAKind
        } else if Self::ranks_with_count(ranks, 3) == 1 && Self::ranks_with_count(ranks, 2) == 1 {
            Self::FullHouse
        } else if Self::is_flush(suits) {
            Self::Flush
        } else if Self::is_straight(ranks) {
            Self::Straight
        } else if Self::ranks_with_count(ranks, 3) == 1 && Self::ranks_with_count(ranks, 2) == 0 {
            Self::ThreeOfAKind
        } else if Self::ranks_with_count(ranks, 2) == 2 {
            Self::TwoPair
        } else if Self::ranks_with_count(ranks, 2) == 1 {
            Self::Pair
        } else {
            Self::HighCard
        }
    }

    /// How many ranks appear exactly `n` times. n=4 finds quads, n=3 trips,
    /// n=2 pairs, n=1 distinct unpaired ranks.
    fn ranks_with_count(ranks: &RankCounts, n: u8) -> usize {
        ranks.values().filter(|&&c| c == n).count()
    }

    // A flush is decided by the suit table only.
    fn is_flush(suits: &SuitCounts) -> bool {
        suits.values().any(|&c| c as usize == HAND_LEN)
    }

    fn is_straight(ranks: &RankCounts) -> bool {
        // Five distinct ranks or it can't be a straight.
        if Self::ranks_with_count(ranks, 1) != HAND_LEN {
            return false;
        }
        // The wheel: A-2-3-4-5 is a straight even though the ace reads as
        // high everywhere else. Must be checked before the run scan.
        if ranks[Rank::Ace] == 1
            && ranks[Rank::Two] == 1
            && ranks[Rank::Three] == 1
            && ranks[Rank::Four] == 1
            && ranks[Rank::Five] == 1
        {
            return true;
        }
        let mut run = 0;
        for r in ALL_RANKS {
            if ranks[r] == 1 {
                run += 1;
                if run == HAND_LEN {
                    return true;
                }
            } else {
                run = 0;
            }
        }
        false
    }
}

impl fmt::Display for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StraightFlush => write!(f, "Straight Flush"),
            Self::FourOfAKind => write!(f, "Four of a Kind"),
            Self::FullHouse => write!(f, "Full House"),
            Self::Flush => write!(f, "Flush"),
            Self::Straight => write!(f, "Straight"),
            Self::ThreeOfAKind => write!(f, "Three of a Kind"),
            Self::TwoPair => write!(f, "Two Pair"),
            Self::Pair => write!(f, "One Pair"),
            Self::HighCard => write!(f, "High Card"),
        }
    }
}

#[derive(PartialEq, Debug)]
pub enum HandError {
    NotFiveCards(usize),
}

impl Error for HandError {}

impl fmt::Display for HandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFiveCards(n) => write!(f, "Five cards are required, but {} were given", n),
        }
    }
}

/// Five cards in deal order, the frequency tables built from them, and the
/// class computed once at construction.
#[derive(Debug)]
pub struct Hand {
    cards: [Card; HAND_LEN],
    rank_counts: RankCounts,
    suit_counts: SuitCounts,
    class: HandClass,
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.cards[0], self.cards[1], self.cards[2], self.cards[3], self.cards[4],
        )
    }
}

impl Hand {
    pub fn new(cards: &[Card]) -> Result<Self, HandError> {
        if cards.len() != HAND_LEN {
            return Err(HandError::NotFiveCards(cards.len()));
        }
        let mut rank_counts = RankCounts::default();
        let mut suit_counts = SuitCounts::default();
        for c in cards {
            rank_counts[c.rank()] += 1;
            suit_counts[c.suit()] += 1;
        }
        let class = HandClass::from_counts(&rank_counts, &suit_counts);
        Ok(Self {
            cards: [cards[0], cards[1], cards[2], cards[3], cards[4]],
            rank_counts,
            suit_counts,
            class,
        })
    }

    pub fn cards(&self) -> &[Card; HAND_LEN] {
        &self.cards
    }

    pub fn rank_counts(&self) -> &RankCounts {
        &self.rank_counts
    }

    pub fn suit_counts(&self) -> &SuitCounts {
        &self.suit_counts
    }

    pub fn class(&self) -> HandClass {
        self.class
    }

    /// Compare by category only. Hands of the same class tie; kickers within
    /// a class are deliberately not compared.
    pub fn beats(&self, other: &Self) -> WinState {
        self.class.cmp(&other.class).into()
    }
}
