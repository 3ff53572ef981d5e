//! Game configuration.
//!
//! The phase/step schedule is fixed (see [`crate::turn::schedule`]). What a
//! table can tune is the numbers around it: starting life, opening hand
//! size, how many cards the draw step draws, whether the first player skips
//! the first draw, and which seat's hand snapshots reveal.
//!
//! `GameConfig` deserializes with defaults for every missing field, so a
//! collaborator can load a partial JSON object:
//!
//! ```
//! use commander_table::core::GameConfig;
//!
//! let config: GameConfig = serde_json::from_str(r#"{ "startingLife": 20 }"#).unwrap();
//! assert_eq!(config.starting_life, 20);
//! assert_eq!(config.opening_hand_size, 7);
//! ```

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Most seats a single game supports.
pub const MAX_PLAYERS: usize = 255;

/// Most cards a single decklist may expand to.
pub const MAX_DECK_SIZE: usize = 10_000;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Life each player starts with.
    pub starting_life: i64,

    /// Cards dealt to each player before turn 1.
    pub opening_hand_size: usize,

    /// Cards the active player draws in the draw step.
    pub draw_step_cards: usize,

    /// Skip the draw step's draw on turn 1.
    pub skip_first_draw: bool,

    /// Seat whose hand is revealed in snapshots (the human seat).
    pub revealed_seat: PlayerId,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_life: 40,
            opening_hand_size: 7,
            draw_step_cards: 1,
            skip_first_draw: true,
            revealed_seat: PlayerId::new(0),
        }
    }
}

impl GameConfig {
    /// Create the default commander table configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_starting_life(mut self, life: i64) -> Self {
        self.starting_life = life;
        self
    }

    #[must_use]
    pub fn with_opening_hand_size(mut self, size: usize) -> Self {
        self.opening_hand_size = size;
        self
    }

    #[must_use]
    pub fn with_draw_step_cards(mut self, count: usize) -> Self {
        self.draw_step_cards = count;
        self
    }

    #[must_use]
    pub fn with_skip_first_draw(mut self, skip: bool) -> Self {
        self.skip_first_draw = skip;
        self
    }

    /// Set which seat's hand snapshots reveal.
    #[must_use]
    pub fn with_revealed_seat(mut self, seat: PlayerId) -> Self {
        self.revealed_seat = seat;
        self
    }
}
