//! The game aggregate.
//!
//! A `Game` owns its players, its turn sequencer and its RNG. Construction
//! validates every decklist before any player exists, shuffles each library
//! once, deals opening hands, and then enters the untap step of turn 1.
//! After that the only mutation is [`Game::advance`].

use tracing::info;

use super::config::{GameConfig, MAX_PLAYERS};
use super::error::{GameError, Result};
use super::player::{Player, PlayerId, PlayerMap, PlayerSeat};
use super::rng::GameRng;
use super::state::{GameSnapshot, PlayerSnapshot};
use crate::turn::{automatic_action, Phase, Step, StepAction, Transition, TurnSequencer};
use crate::zones::build_library;

/// One game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    players: PlayerMap<Player>,
    turns: TurnSequencer,
    rng: GameRng,
}

impl Game {
    /// Seat the players and start turn 1.
    ///
    /// ## Errors
    ///
    /// - [`GameError::InvalidPlayerCount`] for zero or more than 255 seats
    /// - [`GameError::UnknownPlayer`] if `config.revealed_seat` is not seated
    /// - [`GameError::InvalidDecklist`] for the first bad decklist, in seat order
    pub fn new(seats: &[PlayerSeat], config: GameConfig, mut rng: GameRng) -> Result<Self> {
        if seats.is_empty() || seats.len() > MAX_PLAYERS {
            return Err(GameError::InvalidPlayerCount { count: seats.len() });
        }
        if config.revealed_seat.index() >= seats.len() {
            return Err(GameError::UnknownPlayer(config.revealed_seat));
        }

        let libraries = seats
            .iter()
            .map(|seat| build_library(&seat.name, &seat.decklist))
            .collect::<Result<Vec<_>>>()?;

        let players: Vec<Player> = seats
            .iter()
            .zip(libraries)
            .map(|(seat, library)| Player::new(seat, library, config.starting_life, &mut rng))
            .collect();
        let players = PlayerMap::from_vec(players)?;
        let turns = TurnSequencer::new(players.player_count())?;

        info!(
            players = ?players.iter().map(|(_, p)| p.name.as_str()).collect::<Vec<_>>(),
            seed = rng.seed(),
            "Game created"
        );

        let mut game = Self {
            config,
            players,
            turns,
            rng,
        };
        game.deal_opening_hands();
        game.advance();
        Ok(game)
    }

    /// Every player draws the opening hand. Runs once, outside the schedule.
    fn deal_opening_hands(&mut self) {
        let size = self.config.opening_hand_size;
        for (_, player) in self.players.iter_mut() {
            player.draw(size);
        }
        self.log_state();
    }

    /// Move to the next step or main phase and run its automatic action.
    pub fn advance(&mut self) -> Transition {
        let transition = self.turns.advance();
        if let Some(action) = automatic_action(&transition, &self.config) {
            self.perform(action);
        }
        transition
    }

    fn perform(&mut self, action: StepAction) {
        match action {
            StepAction::Draw { player, count } => {
                // The sequencer only hands out seated players
                if let Some(player) = self.players.get_mut(player) {
                    player.draw(count);
                }
            }
        }
    }

    /// Log life, library and hand counts for every player.
    pub fn log_state(&self) {
        for (_, player) in self.players.iter() {
            info!(
                player = %player.name,
                life = player.life,
                library = player.library_size(),
                hand = player.hand_size(),
                "Player state"
            );
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turns.turn()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.turns.phase()
    }

    /// Current step, `None` in a main phase.
    #[must_use]
    pub fn step(&self) -> Option<Step> {
        self.turns.step()
    }

    #[must_use]
    pub fn step_label(&self) -> &'static str {
        self.turns.step_label()
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.turns.active_player()
    }

    #[must_use]
    pub fn active_player_name(&self) -> &str {
        &self.players[self.turns.active_player()].name
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.players.get(id).ok_or(GameError::UnknownPlayer(id))
    }

    /// Seed of this game's RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Snapshot from the configured revealed seat.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.capture(self.config.revealed_seat)
    }

    /// Snapshot revealing `viewer`'s hand.
    pub fn snapshot_for(&self, viewer: PlayerId) -> Result<GameSnapshot> {
        self.player(viewer)?;
        Ok(self.capture(viewer))
    }

    fn capture(&self, viewer: PlayerId) -> GameSnapshot {
        GameSnapshot {
            turn: self.turn(),
            phase: self.phase(),
            step: self.step_label().to_string(),
            active_player_index: self.active_player().index(),
            active_player_name: self.active_player_name().to_string(),
            players: self
                .players
                .iter()
                .map(|(id, player)| PlayerSnapshot::capture(player, id == viewer))
                .collect(),
        }
    }
}
