//! Players, seats, and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier supporting 1-255 players.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## PlayerSeat / Player
//!
//! A `PlayerSeat` is what a collaborator hands in (name, labels, decklist).
//! A `Player` is the live entity built from it: life total plus zones.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use tracing::debug;

use super::config::MAX_PLAYERS;
use super::error::{GameError, Result};
use super::rng::GameRng;
use crate::cards::{Card, Decklist};
use crate::zones::{ZoneId, ZoneManager};

/// Player identifier supporting 1-255 players.
///
/// Seat indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping at `player_count`.
    ///
    /// ```
    /// use commander_table::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(2), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(1).next(2), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        // player_count <= 255, so the result fits in u8
        Self(((self.index() + 1) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Always holds between 1 and 255 entries.
///
/// ## Example
///
/// ```
/// use commander_table::core::{PlayerId, PlayerMap};
///
/// let mut life: PlayerMap<i64> = PlayerMap::from_vec(vec![40, 40]).unwrap();
/// life[PlayerId::new(1)] -= 3;
/// assert_eq!(life[PlayerId::new(1)], 37);
/// assert!(life.get(PlayerId::new(2)).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Wrap one value per seat.
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        if data.is_empty() || data.len() > MAX_PLAYERS {
            return Err(GameError::InvalidPlayerCount { count: data.len() });
        }
        Ok(Self { data })
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a player's data, or `None` for a seat that does not exist.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// A seat at the table as supplied by the caller.
///
/// The deck and commander labels are display metadata only; they are passed
/// through to snapshots untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSeat {
    pub name: String,
    pub decklist: Decklist,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commander: Option<String>,
}

impl PlayerSeat {
    pub fn new(name: impl Into<String>, decklist: Decklist) -> Self {
        Self {
            name: name.into(),
            decklist,
            deck_name: None,
            commander: None,
        }
    }

    /// The human-controlled seat of the default table.
    pub fn human(decklist: Decklist) -> Self {
        Self::new("Player 1", decklist)
    }

    /// The computer-controlled seat of the default table.
    pub fn ai(decklist: Decklist) -> Self {
        Self::new("AI Opponent", decklist)
    }

    #[must_use]
    pub fn with_deck_name(mut self, deck_name: impl Into<String>) -> Self {
        self.deck_name = Some(deck_name.into());
        self
    }

    #[must_use]
    pub fn with_commander(mut self, commander: impl Into<String>) -> Self {
        self.commander = Some(commander.into());
        self
    }
}

/// A live player: life total and zones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub life: i64,
    pub deck_name: Option<String>,
    pub commander: Option<String>,
    zones: ZoneManager,
    deck_size: usize,
}

impl Player {
    /// Seat a player with an already-built library and shuffle it.
    ///
    /// This is the only place a library is shuffled.
    pub fn new(seat: &PlayerSeat, library: Vec<Card>, life: i64, rng: &mut GameRng) -> Self {
        let deck_size = library.len();
        let mut zones = ZoneManager::with_library(library);
        debug!(player = %seat.name, cards = deck_size, "Shuffling library");
        zones.shuffle_library(rng);

        Self {
            name: seat.name.clone(),
            life,
            deck_name: seat.deck_name.clone(),
            commander: seat.commander.clone(),
            zones,
            deck_size,
        }
    }

    #[must_use]
    pub fn zones(&self) -> &ZoneManager {
        &self.zones
    }

    /// Cards in the player's deck at construction. Constant for the game.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        self.zones.cards(ZoneId::Hand)
    }

    #[must_use]
    pub fn library_size(&self) -> usize {
        self.zones.zone_size(ZoneId::Library)
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.zones.zone_size(ZoneId::Hand)
    }

    /// Draw up to `n` cards. An empty library skips the remaining draws.
    ///
    /// Returns how many cards were drawn.
    pub fn draw(&mut self, n: usize) -> usize {
        let drawn = self.zones.draw(n);

        let hand = self.zones.cards(ZoneId::Hand);
        for card in &hand[hand.len() - drawn..] {
            debug!(player = %self.name, card = %card.name, "Drew card");
        }
        if drawn < n {
            debug!(player = %self.name, skipped = n - drawn, "Library is empty, draws skipped");
        }
        drawn
    }
}
