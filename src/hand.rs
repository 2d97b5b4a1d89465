use crate::deck::{Card, Rank};

/// Point value of a single card. Aces score a fixed 11 at this table; there
/// is no soft-hand re-evaluation down to 1.
pub fn card_points(rank: Rank) -> u8 {
    match rank {
        Rank::Ace => 11,
        Rank::Jack | Rank::Queen | Rank::King => 10,
        numeral => numeral as u8,
    }
}

/// A running hand total. Only the score is kept; the cards themselves are
/// handed to the renderer as they are dealt. Totals are never clamped, so
/// anything above 21 is a bust.
#[derive(Debug, Default)]
pub struct Hand {
    total: u8,
}

impl Hand {
    pub fn new() -> Self {
        Hand::default()
    }

    pub fn add(&mut self, card: Card) {
        self.total += card_points(card.rank);
    }

    pub fn total(&self) -> u8 {
        self.total
    }
}
