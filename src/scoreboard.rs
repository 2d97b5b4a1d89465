use serde::Serialize;

use crate::game::Outcome;

/// Storage keys the front-end uses for the persisted win counts.
pub const PLAYER_KEY: &str = "User";
pub const DEALER_KEY: &str = "Dealer";

/// Cross-session win tally. The browser's key-value store owns the saved
/// copy; this struct restores from it at startup and hands back the entries
/// to write after each settled round. Ties increment neither side.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scoreboard {
    player_wins: u32,
    dealer_wins: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Scoreboard::default()
    }

    /// Restores saved counts. Both values must be present to restore; a
    /// partial save falls back to a zeroed board, and an unparsable count
    /// reads as 0.
    pub fn restore(player: Option<&str>, dealer: Option<&str>) -> Self {
        match (player, dealer) {
            (Some(player), Some(dealer)) => Scoreboard {
                player_wins: player.trim().parse().unwrap_or(0),
                dealer_wins: dealer.trim().parse().unwrap_or(0),
            },
            _ => Scoreboard::default(),
        }
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWins => self.player_wins += 1,
            Outcome::DealerWins => self.dealer_wins += 1,
            Outcome::Tie => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Scoreboard::default();
    }

    /// Key/value pairs for the persistence collaborator, in write order.
    pub fn entries(&self) -> [(&'static str, String); 2] {
        [
            (PLAYER_KEY, self.player_wins.to_string()),
            (DEALER_KEY, self.dealer_wins.to_string()),
        ]
    }

    pub fn player_wins(&self) -> u32 {
        self.player_wins
    }

    pub fn dealer_wins(&self) -> u32 {
        self.dealer_wins
    }
}
