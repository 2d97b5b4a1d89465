use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod scoreboard;

use deck::Deck;
use errors::GameError;
use game::{Outcome, Phase, Reveal, Round};
use scoreboard::Scoreboard;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TableInput {
    #[serde(default)]
    seed: Option<u64>,
    /// Win counts previously saved by the front-end, as decimal strings.
    #[serde(default)]
    saved_player_wins: Option<String>,
    #[serde(default)]
    saved_dealer_wins: Option<String>,
}

/// One key/value pair the front-end must write through to its store.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PersistEntry {
    key: &'static str,
    value: String,
}

/// State handed back to the renderer after every table action. `reveals`
/// only carries the cards dealt since the previous call; `persist` is empty
/// until the round settles.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    phase: Phase,
    player_total: u8,
    dealer_total: u8,
    reveals: Vec<Reveal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<&'static str>,
    offer_new_game: bool,
    scoreboard: Scoreboard,
    persist: Vec<PersistEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TallySnapshot {
    scoreboard: Scoreboard,
    persist: Vec<PersistEntry>,
}

/// A blackjack table exported to the JavaScript front-end. The front-end
/// owns the DOM and the session store; the table owns the deck, the turn
/// sequencing and the scoreboard arithmetic. A new game is a fresh table,
/// restored from the saved tally.
#[wasm_bindgen]
pub struct Table {
    round: Option<Round>,
    scoreboard: Scoreboard,
    seed: u64,
}

#[wasm_bindgen]
impl Table {
    #[wasm_bindgen(constructor)]
    pub fn new(params: &JsValue) -> Result<Table, JsValue> {
        console_error_panic_hook::set_once();
        let input: TableInput = serde_wasm_bindgen::from_value(params.clone())
            .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;

        Ok(Table {
            round: None,
            scoreboard: Scoreboard::restore(
                input.saved_player_wins.as_deref(),
                input.saved_dealer_wins.as_deref(),
            ),
            seed: input.seed.unwrap_or_else(rand::random),
        })
    }

    /// Shuffles a fresh deck and deals the player's opening hand.
    pub fn deal(&mut self) -> Result<JsValue, JsValue> {
        if self.round.is_some() {
            return Err(game_error(GameError::RoundAlreadyDealt));
        }
        let (round, reveals) = Round::start(Deck::new(self.seed)).map_err(game_error)?;
        self.round = Some(round);
        self.record_if_settled();
        self.round_snapshot(reveals)
    }

    pub fn hit(&mut self) -> Result<JsValue, JsValue> {
        let round = self
            .round
            .as_mut()
            .ok_or_else(|| game_error(GameError::NoRoundInProgress))?;
        let reveals = round.hit().map_err(game_error)?;
        self.record_if_settled();
        self.round_snapshot(reveals)
    }

    pub fn stand(&mut self) -> Result<JsValue, JsValue> {
        let round = self
            .round
            .as_mut()
            .ok_or_else(|| game_error(GameError::NoRoundInProgress))?;
        let reveals = round.stand().map_err(game_error)?;
        self.record_if_settled();
        self.round_snapshot(reveals)
    }

    /// Zeroes both win counts, regardless of prior values.
    pub fn reset_scoreboard(&mut self) -> Result<JsValue, JsValue> {
        self.scoreboard.reset();
        let snapshot = TallySnapshot {
            scoreboard: self.scoreboard,
            persist: persist_entries(&self.scoreboard),
        };
        to_js(&snapshot)
    }

    /// Current tally, for the startup render.
    pub fn scoreboard(&self) -> Result<JsValue, JsValue> {
        to_js(&self.scoreboard)
    }
}

impl Table {
    /// Settlement happens at most once per round; the call that flips the
    /// phase to `RoundOver` is the one that reaches this with an outcome.
    fn record_if_settled(&mut self) {
        let outcome = match self.round.as_ref().and_then(Round::outcome) {
            Some(outcome) => outcome,
            None => return,
        };
        self.scoreboard.record(outcome);
        web_sys::console::log_1(&JsValue::from_str(&format!(
            "round settled: {} ({} - {})",
            outcome.message(),
            self.scoreboard.player_wins(),
            self.scoreboard.dealer_wins(),
        )));
    }

    fn round_snapshot(&self, reveals: Vec<Reveal>) -> Result<JsValue, JsValue> {
        let round = match self.round.as_ref() {
            Some(round) => round,
            None => return Err(game_error(GameError::NoRoundInProgress)),
        };
        let over = round.phase() == Phase::RoundOver;
        let snapshot = Snapshot {
            phase: round.phase(),
            player_total: round.player_total(),
            dealer_total: round.dealer_total(),
            reveals,
            outcome: round.outcome().map(Outcome::message),
            offer_new_game: over,
            scoreboard: self.scoreboard,
            persist: if over {
                persist_entries(&self.scoreboard)
            } else {
                Vec::new()
            },
        };
        to_js(&snapshot)
    }
}

fn persist_entries(scoreboard: &Scoreboard) -> Vec<PersistEntry> {
    scoreboard
        .entries()
        .into_iter()
        .map(|(key, value)| PersistEntry { key, value })
        .collect()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

fn game_error(err: GameError) -> JsValue {
    JsValue::from_str(&format!("Game error: {err}"))
}
