use serde::Serialize;

use crate::{
    deck::Deck,
    errors::GameError,
    hand::Hand,
};

pub const BLACKJACK: u8 = 21;
pub const DEALER_STAND_TOTAL: u8 = 17;

/// Minimum pause the renderer should leave before showing each dealer card.
/// Purely a pacing directive carried on the reveal; the engine itself never
/// waits.
pub const DEALER_REVEAL_DELAY_MS: u32 = 2000;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Actor {
    Player,
    Dealer,
}

/// Where the round currently stands. The initial player deal happens inside
/// [`Round::start`], so a constructed round is already past it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    PlayerTurn,
    DealerTurn,
    RoundOver,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    PlayerWins,
    DealerWins,
    Tie,
}

impl Outcome {
    /// Message shown to the player at the end of the round.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::PlayerWins => "player won",
            Outcome::DealerWins => "player lost",
            Outcome::Tie => "tie",
        }
    }
}

/// One card the renderer should append to an actor's row, in deal order.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reveal {
    pub actor: Actor,
    pub image: String,
    pub delay_ms: u32,
}

/// A single round from first deal to settlement. Owns the deck exclusively;
/// every deal goes through [`Deck::draw`], so no card appears twice within
/// a round.
#[derive(Debug)]
pub struct Round {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    phase: Phase,
    outcome: Option<Outcome>,
}

impl Round {
    /// Deals the player's opening two cards. A natural 21 wins on the spot
    /// and the dealer never plays a counter-hand.
    pub fn start(deck: Deck) -> Result<(Round, Vec<Reveal>), GameError> {
        let mut round = Round {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            phase: Phase::PlayerTurn,
            outcome: None,
        };
        let mut reveals = Vec::with_capacity(2);
        round.deal_to_player(&mut reveals)?;
        round.deal_to_player(&mut reveals)?;
        if round.player.total() == BLACKJACK {
            round.settle(Outcome::PlayerWins);
        }
        Ok((round, reveals))
    }

    /// Player takes one more card. Going over 21 loses immediately; landing
    /// exactly on 21 stands automatically and hands play to the dealer.
    pub fn hit(&mut self) -> Result<Vec<Reveal>, GameError> {
        self.expect_player_turn()?;
        let mut reveals = Vec::new();
        self.deal_to_player(&mut reveals)?;
        if self.player.total() > BLACKJACK {
            self.settle(Outcome::DealerWins);
        } else if self.player.total() == BLACKJACK {
            self.play_dealer(&mut reveals)?;
        }
        Ok(reveals)
    }

    /// Player stops; the scripted dealer plays out the rest of the round.
    pub fn stand(&mut self) -> Result<Vec<Reveal>, GameError> {
        self.expect_player_turn()?;
        let mut reveals = Vec::new();
        self.play_dealer(&mut reveals)?;
        Ok(reveals)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn player_total(&self) -> u8 {
        self.player.total()
    }

    pub fn dealer_total(&self) -> u8 {
        self.dealer.total()
    }

    fn expect_player_turn(&self) -> Result<(), GameError> {
        match self.phase {
            Phase::PlayerTurn => Ok(()),
            Phase::DealerTurn => Err(GameError::NotPlayersTurn),
            Phase::RoundOver => Err(GameError::RoundOver),
        }
    }

    fn deal_to_player(&mut self, reveals: &mut Vec<Reveal>) -> Result<(), GameError> {
        let card = self.deck.draw()?;
        self.player.add(card);
        reveals.push(Reveal {
            actor: Actor::Player,
            image: card.image_name(),
            delay_ms: 0,
        });
        Ok(())
    }

    fn deal_to_dealer(&mut self, reveals: &mut Vec<Reveal>) -> Result<(), GameError> {
        let card = self.deck.draw()?;
        self.dealer.add(card);
        reveals.push(Reveal {
            actor: Actor::Dealer,
            image: card.image_name(),
            delay_ms: DEALER_REVEAL_DELAY_MS,
        });
        Ok(())
    }

    /// Fixed dealer policy: take a two-card first deal, then draw one card
    /// at a time until the total reaches 17. Runs to settlement in one call;
    /// the per-card pacing is carried on the reveals.
    fn play_dealer(&mut self, reveals: &mut Vec<Reveal>) -> Result<(), GameError> {
        self.phase = Phase::DealerTurn;
        self.deal_to_dealer(reveals)?;
        self.deal_to_dealer(reveals)?;
        while self.dealer.total() < DEALER_STAND_TOTAL {
            self.deal_to_dealer(reveals)?;
        }

        let outcome = if self.dealer.total() > BLACKJACK {
            Outcome::PlayerWins
        } else if self.dealer.total() > self.player.total() {
            Outcome::DealerWins
        } else if self.player.total() > self.dealer.total() {
            Outcome::PlayerWins
        } else {
            Outcome::Tie
        };
        self.settle(outcome);
        Ok(())
    }

    fn settle(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        self.phase = Phase::RoundOver;
    }
}
