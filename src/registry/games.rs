//! Registry of live games.
//!
//! Games are owned by the registry and addressed by [`GameId`]. All access
//! goes through one lock, so a create, advance or remove is a single
//! read-modify-publish step even when callers share the registry across
//! threads.

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::info;

use crate::cards::Decklist;
use crate::core::config::GameConfig;
use crate::core::entity::GameId;
use crate::core::error::{GameError, Result};
use crate::core::game::Game;
use crate::core::player::{PlayerId, PlayerSeat};
use crate::core::rng::GameRng;
use crate::core::state::GameSnapshot;

#[derive(Debug)]
struct Inner {
    games: FxHashMap<GameId, Game>,
    next_id: GameId,
    rng: GameRng,
}

/// Owns every active game.
///
/// ## Usage
///
/// ```
/// use commander_table::cards::{Card, Decklist};
/// use commander_table::registry::GameRegistry;
///
/// let deck = Decklist::default().with_entry(40, Card::new("f", "Forest"));
/// let registry = GameRegistry::new(42);
///
/// let (id, snapshot) = registry.create_table(deck).unwrap();
/// assert_eq!(snapshot.players[0].hand.len(), 7);
/// assert!(snapshot.players[1].hand.is_empty());
///
/// let next = registry.advance(id).unwrap();
/// assert_eq!(next.step, "upkeep");
/// ```
#[derive(Debug)]
pub struct GameRegistry {
    inner: Mutex<Inner>,
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }
}

impl GameRegistry {
    /// Registry whose games are shuffled from a fixed root seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self {
            inner: Mutex::new(Inner {
                games: FxHashMap::default(),
                next_id: GameId::new(1),
                rng,
            }),
        }
    }

    /// Build and register a game.
    ///
    /// Nothing is registered when construction fails, and the root RNG is
    /// left untouched, so the next game is dealt as if the failed call never
    /// happened.
    pub fn create(&self, seats: &[PlayerSeat], config: GameConfig) -> Result<(GameId, GameSnapshot)> {
        let mut inner = self.inner.lock();
        let mut root = inner.rng.clone();
        let game = Game::new(seats, config, root.fork())?;
        let snapshot = game.snapshot();

        inner.rng = root;

        let id = inner.next_id;
        inner.next_id = id.next();
        inner.games.insert(id, game);
        info!(game_id = %id, active_games = inner.games.len(), "Game registered");

        Ok((id, snapshot))
    }

    /// The default table: "Player 1" (revealed) against "AI Opponent",
    /// both playing `decklist`.
    pub fn create_table(&self, decklist: Decklist) -> Result<(GameId, GameSnapshot)> {
        let seats = [PlayerSeat::human(decklist.clone()), PlayerSeat::ai(decklist)];
        self.create(&seats, GameConfig::default())
    }

    /// Advance a game one step and return the new snapshot.
    pub fn advance(&self, id: GameId) -> Result<GameSnapshot> {
        let mut inner = self.inner.lock();
        let game = inner.games.get_mut(&id).ok_or(GameError::NoActiveGame(id))?;
        game.advance();
        Ok(game.snapshot())
    }

    pub fn snapshot(&self, id: GameId) -> Result<GameSnapshot> {
        self.with_game(id, Game::snapshot)
    }

    /// Snapshot revealing `viewer`'s hand instead of the configured seat's.
    pub fn snapshot_for(&self, id: GameId, viewer: PlayerId) -> Result<GameSnapshot> {
        self.with_game(id, |game| game.snapshot_for(viewer))?
    }

    /// Run `f` against a game while holding the lock.
    pub fn with_game<R>(&self, id: GameId, f: impl FnOnce(&Game) -> R) -> Result<R> {
        let inner = self.inner.lock();
        let game = inner.games.get(&id).ok_or(GameError::NoActiveGame(id))?;
        Ok(f(game))
    }

    /// Drop a game.
    pub fn remove(&self, id: GameId) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.games.remove(&id).ok_or(GameError::NoActiveGame(id))?;
        info!(game_id = %id, active_games = inner.games.len(), "Game removed");
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, id: GameId) -> bool {
        self.inner.lock().games.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
