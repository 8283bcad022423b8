// Error taxonomy for the decision engine
//
// Every variant is a precondition violation: the snapshot cannot yield a move.
// Running out of safe moves is not an error, the engine answers with the fallback move.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error("snake '{0}' not found on the board")]
    SelfNotFound(String),
    #[error("snake '{0}' has no body segments")]
    EmptyBody(String),
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("head of snake '{id}' at ({x}, {y}) lies outside the board")]
    HeadOutOfBounds { id: String, x: i32, y: i32 },
}
