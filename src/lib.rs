//! # commander-table
//!
//! Turn sequencing and zone engine for a commander-style card table.
//!
//! ## Design Principles
//!
//! 1. **Resolved input**: Decklists arrive fully resolved as
//!    `(quantity, card)` pairs. The engine does no lookups and no I/O.
//!
//! 2. **N-Player capable**: The default table seats two, but every type is
//!    sized by the seat count it was built with.
//!
//! 3. **Deterministic**: Shuffles come from an injected, seedable `GameRng`.
//!
//! ## Architecture
//!
//! - **Zone engine** (`zones`): builds, shuffles and draws from one player's
//!   library. Knows nothing about turns.
//! - **Turn sequencer** (`turn`): walks the fixed phase/step schedule and
//!   reports where each advance landed. The game applies the draw step's
//!   draw as a side effect.
//! - **Snapshots** (`core::state`): the public view produced after every
//!   mutation, revealing exactly one seat's hand.
//! - **Registry** (`registry`): owns every game, keyed by `GameId`.
//!
//! ## Modules
//!
//! - `core`: Ids, players, configuration, errors, RNG, game, snapshots
//! - `cards`: Card values and decklists
//! - `zones`: Per-player zones and moves between them
//! - `turn`: Phase/step schedule, sequencer, automatic step actions
//! - `registry`: Game registry

pub mod cards;
pub mod core;
pub mod registry;
pub mod turn;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Game, GameConfig, GameError, GameId, GameRng, GameSnapshot, Player, PlayerId, PlayerMap,
    PlayerSeat, PlayerSnapshot, Result,
};

pub use crate::cards::{Card, CardId, DeckEntry, Decklist, ImageUris};

pub use crate::zones::{ZoneId, ZoneManager};

pub use crate::turn::{Phase, Step, StepAction, Transition, TurnSequencer, MAIN_PHASE_SENTINEL};

pub use crate::registry::GameRegistry;
