//! Turn sequencer: walks the phase/step schedule.
//!
//! The sequencer only tracks position (turn, active player, phase, step).
//! It returns a [`Transition`] from every [`TurnSequencer::advance`] and
//! leaves the zone side effects of that transition to the game.
//!
//! ## Position
//!
//! - `phase_index`: index into [`PHASES`]
//! - `step_index`: index into the phase's steps, `None` before the first step
//!   and always `None` in main phases
//!
//! ## Example
//!
//! ```
//! use commander_table::turn::{Phase, Step, TurnSequencer};
//!
//! let mut turns = TurnSequencer::new(2).unwrap();
//! assert_eq!(turns.step(), None);
//!
//! assert_eq!(turns.advance().step, Some(Step::Untap));
//! turns.advance();
//! turns.advance();
//! let main = turns.advance();
//! assert_eq!(main.phase, Phase::PrecombatMain);
//! assert_eq!(main.step, None);
//! ```

use tracing::{debug, info};

use super::schedule::{Phase, Step, MAIN_PHASE_SENTINEL, PHASES};
use crate::core::config::MAX_PLAYERS;
use crate::core::error::{GameError, Result};
use crate::core::player::PlayerId;

/// Where one `advance()` call landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Turn number after the call.
    pub turn: u32,
    pub phase: Phase,
    /// The step entered, or `None` when the call landed on a main phase.
    pub step: Option<Step>,
    /// Active player after the call.
    pub active_player: PlayerId,
    /// True when this call wrapped into a new turn.
    pub new_turn: bool,
}

/// Turn, active player, and schedule position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnSequencer {
    player_count: usize,
    turn: u32,
    active_player: PlayerId,
    phase_index: usize,
    step_index: Option<usize>,
}

impl TurnSequencer {
    /// Start at turn 1, first seat active, beginning phase, before its first step.
    pub fn new(player_count: usize) -> Result<Self> {
        if player_count == 0 || player_count > MAX_PLAYERS {
            return Err(GameError::InvalidPlayerCount {
                count: player_count,
            });
        }

        Ok(Self {
            player_count,
            turn: 1,
            active_player: PlayerId::new(0),
            phase_index: 0,
            step_index: None,
        })
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    #[must_use]
    pub fn phase_index(&self) -> usize {
        self.phase_index
    }

    #[must_use]
    pub fn step_index(&self) -> Option<usize> {
        self.step_index
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        PHASES[self.phase_index]
    }

    /// Current step, or `None` in a main phase or before the first step.
    #[must_use]
    pub fn step(&self) -> Option<Step> {
        self.step_index
            .and_then(|i| self.phase().steps().get(i).copied())
    }

    /// Current step name, or [`MAIN_PHASE_SENTINEL`].
    #[must_use]
    pub fn step_label(&self) -> &'static str {
        self.step().map_or(MAIN_PHASE_SENTINEL, Step::name)
    }

    /// Move to the next step or main phase.
    ///
    /// A call never stops between phases: leaving a phase continues into
    /// the next phase's first step, or stops on it if it is a main phase.
    /// Leaving the ending phase starts a new turn and passes the turn to
    /// the next seat.
    pub fn advance(&mut self) -> Transition {
        let mut new_turn = false;

        // Each pass either lands or moves one phase forward. The longest
        // walk is from the last phase, through the wrap, into untap.
        for _ in 0..=PHASES.len() {
            let steps = self.phase().steps();
            if !steps.is_empty() {
                let next = self.step_index.map_or(0, |i| i + 1);
                if let Some(&step) = steps.get(next) {
                    self.step_index = Some(next);
                    debug!(turn = self.turn, phase = %self.phase(), step = %step, "Entered step");
                    return self.transition(Some(step), new_turn);
                }
            }

            self.phase_index += 1;
            self.step_index = None;
            if self.phase_index >= PHASES.len() {
                self.phase_index = 0;
                self.turn += 1;
                self.active_player = self.active_player.next(self.player_count);
                new_turn = true;
                info!(turn = self.turn, active_player = %self.active_player, "Turn started");
            }

            if self.phase().is_main() {
                debug!(turn = self.turn, phase = %self.phase(), "Entered main phase");
                return self.transition(None, new_turn);
            }
        }

        unreachable!("phase schedule has no step or main phase to land on")
    }

    fn transition(&self, step: Option<Step>, new_turn: bool) -> Transition {
        Transition {
            turn: self.turn,
            phase: self.phase(),
            step,
            active_player: self.active_player,
            new_turn,
        }
    }
}
