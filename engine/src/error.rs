use thiserror::Error;

/// Rejected-input and invalid-state failures. Every fallible operation in
/// the engine and service layers returns one of these; nothing panics and
/// nothing is retried internally.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invalid game status: {0}")]
    State(String),

    #[error("not your turn")]
    Turn,

    #[error("invalid move: {0}")]
    Move(String),

    #[error("game not found")]
    NotFound,
}
