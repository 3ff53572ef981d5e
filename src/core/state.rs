//! Public game state snapshots.
//!
//! A `GameSnapshot` is what collaborators see after every mutation. It is
//! built for one viewing seat: that seat's hand is listed card by card,
//! every other hand is reported only as a count.
//!
//! Wire shape (camelCase JSON):
//!
//! ```text
//! { turn, phase, step, activePlayerIndex, activePlayerName,
//!   players: [ { name, life, handCount, libraryCount, graveyardCount,
//!                battlefieldCount, exileCount, hand, deckName?, commander? } ] }
//! ```

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::cards::Card;
use crate::turn::Phase;
use crate::zones::ZoneId;

/// Observable state of one game from one seat's point of view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    /// Turn number (starts at 1).
    pub turn: u32,

    pub phase: Phase,

    /// Step name, or the main-phase sentinel.
    pub step: String,

    pub active_player_index: usize,

    pub active_player_name: String,

    /// Players in seat order.
    pub players: Vec<PlayerSnapshot>,
}

/// Public counts for one player, plus the hand when revealed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub name: String,
    pub life: i64,
    pub hand_count: usize,
    pub library_count: usize,
    pub graveyard_count: usize,
    pub battlefield_count: usize,
    pub exile_count: usize,

    /// Hand contents. Empty unless this is the viewing seat.
    pub hand: Vec<Card>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commander: Option<String>,
}

impl PlayerSnapshot {
    /// Capture a player. `revealed` decides whether the hand is listed.
    #[must_use]
    pub fn capture(player: &Player, revealed: bool) -> Self {
        let zones = player.zones();
        Self {
            name: player.name.clone(),
            life: player.life,
            hand_count: zones.zone_size(ZoneId::Hand),
            library_count: zones.zone_size(ZoneId::Library),
            graveyard_count: zones.zone_size(ZoneId::Graveyard),
            battlefield_count: zones.zone_size(ZoneId::Battlefield),
            exile_count: zones.zone_size(ZoneId::Exile),
            hand: if revealed { player.hand().to_vec() } else { Vec::new() },
            deck_name: player.deck_name.clone(),
            commander: player.commander.clone(),
        }
    }
}
