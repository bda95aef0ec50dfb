//! Error type shared by the library.

use thiserror::Error;

use crate::core::{Color, Move};

/// Errors produced by board parsing, rule checks, search setup and the
/// manager protocol.
#[derive(Debug, Error)]
pub enum OthelloError {
    /// A board literal or row list does not describe a valid board.
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// A move that is off the board or flips nothing.
    #[error("illegal move {mv} for {color}")]
    IllegalMove { color: Color, mv: Move },

    /// A player had a legal move available but declined to play.
    #[error("{player} ({color}) passed while holding a legal move")]
    IllegalPass { player: String, color: Color },

    /// The game manager sent something the agent cannot interpret.
    #[error("protocol error: {message} (line: {line:?})")]
    Protocol { message: String, line: String },

    /// Rejected configuration values.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl OthelloError {
    pub(crate) fn protocol(message: impl Into<String>, line: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
            line: line.into(),
        }
    }
}

/// Library result alias.
pub type Result<T> = std::result::Result<T, OthelloError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = OthelloError::IllegalMove {
            color: Color::Dark,
            mv: Move::new(0, 0),
        };
        assert_eq!(err.to_string(), "illegal move 0 0 for dark");

        let err = OthelloError::protocol("bad status", "HELLO");
        assert_eq!(
            err.to_string(),
            "protocol error: bad status (line: \"HELLO\")"
        );
    }
}
