//! Core engine types: ids, players, configuration, errors, RNG, the game
//! aggregate and its snapshots.

pub mod config;
pub mod entity;
pub mod error;
pub mod game;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{GameConfig, MAX_DECK_SIZE, MAX_PLAYERS};
pub use entity::GameId;
pub use error::{GameError, Result};
pub use game::Game;
pub use player::{Player, PlayerId, PlayerMap, PlayerSeat};
pub use rng::GameRng;
pub use state::{GameSnapshot, PlayerSnapshot};
