use std::fmt;

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::errors::GameError;

/// One of the four suits of a standard 52-card deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
        };
        f.write_str(name)
    }
}

/// Card rank. Numeric discriminants match the face value of the numeral
/// ranks; point values live in [`crate::hand::card_points`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Jack => f.write_str("jack"),
            Rank::Queen => f.write_str("queen"),
            Rank::King => f.write_str("king"),
            Rank::Ace => f.write_str("ace"),
            numeral => write!(f, "{}", *numeral as u8),
        }
    }
}

/// A single playing card. Immutable once created; exactly 52 unique
/// rank/suit combinations exist per deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Stable identifier used by the renderer to pick the card image,
    /// e.g. `queen_of_hearts` or `10_of_clubs`.
    pub fn image_name(&self) -> String {
        format!("{}_of_{}", self.rank, self.suit)
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Ace,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

/// All 52 cards in their pre-shuffle order.
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for &rank in &all_ranks() {
        for &suit in &all_suits() {
            cards.push(Card { rank, suit });
        }
    }
    cards
}

/// An ordered pile of cards. Built fresh for each round, dealt from the
/// back, and discarded when the round ends.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: SmallRng,
}

impl Deck {
    pub fn new(seed: u64) -> Self {
        let mut deck = Deck {
            cards: full_deck(),
            rng: SmallRng::seed_from_u64(seed),
        };
        deck.shuffle();
        deck
    }

    /// A deck that deals the given cards in order, with no shuffle.
    pub fn stacked(cards: Vec<Card>) -> Self {
        let mut cards = cards;
        cards.reverse();
        Deck {
            cards,
            rng: SmallRng::seed_from_u64(0),
        }
    }

    /// Reorders the pile in place. The swap partner for each index is drawn
    /// from the full range, not the shrinking suffix of Fisher-Yates, so the
    /// permutation distribution is slightly biased. The table keeps this
    /// shuffle as-is; statistical fairness is out of scope.
    pub fn shuffle(&mut self) {
        let n = self.cards.len();
        for i in 0..n {
            let j = self.rng.gen_range(0..n);
            self.cards.swap(i, j);
        }
    }

    /// Deals the next card, failing fast once the pile is exhausted.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
