use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("deck is empty")]
    EmptyDeck,
    #[error("it's not the player's turn")]
    NotPlayersTurn,
    #[error("round is already settled")]
    RoundOver,
    #[error("round has already been dealt")]
    RoundAlreadyDealt,
    #[error("no round in progress")]
    NoRoundInProgress,
}
