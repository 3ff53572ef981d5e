//! Error type shared by the whole crate.
//!
//! Drawing from an empty library is deliberately not an error: the draw is
//! skipped card by card, so there is no variant for it.

use thiserror::Error;

use super::entity::GameId;
use super::player::PlayerId;

/// Errors surfaced by game construction and the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Empty or malformed decklist. Raised before any player is created.
    #[error("invalid decklist for {player}: {reason}")]
    InvalidDecklist { player: String, reason: String },

    /// Seat count outside `1..=255`.
    #[error("a game needs between 1 and 255 players, got {count}")]
    InvalidPlayerCount { count: usize },

    /// A seat index that does not exist in this game.
    #[error("{0} is not seated in this game")]
    UnknownPlayer(PlayerId),

    /// No game is registered under this id.
    #[error("no active game with id {0}")]
    NoActiveGame(GameId),
}

impl GameError {
    pub fn invalid_decklist(player: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDecklist {
            player: player.into(),
            reason: reason.into(),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GameError>;
