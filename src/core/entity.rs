//! Game identification.
//!
//! Every game held by a [`GameRegistry`](crate::registry::GameRegistry) is
//! addressed by an opaque `GameId`. Ids are allocated by the registry in
//! increasing order and never reused within one registry.
//!
//! ```
//! use commander_table::core::GameId;
//!
//! let id = GameId::new(3);
//! assert_eq!(id.raw(), 3);
//! assert_eq!(id.to_string(), "game-3");
//! ```

use serde::{Deserialize, Serialize};

/// Opaque identifier for a game instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl GameId {
    /// Create a game id from its raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The id that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "game-{}", self.0)
    }
}
