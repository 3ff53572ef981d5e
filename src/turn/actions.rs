//! Automatic step actions.
//!
//! Entering a step may trigger a turn-based action. Only the draw step has
//! one: the active player draws, except on turn 1 when the table skips the
//! first draw. Every other step is a no-op for now.

use super::schedule::Step;
use super::sequencer::Transition;
use crate::core::config::GameConfig;
use crate::core::player::PlayerId;

/// A zone action the game performs on entering a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepAction {
    /// `player` draws `count` cards.
    Draw { player: PlayerId, count: usize },
}

/// The action for the step a transition landed on, if any.
#[must_use]
pub fn automatic_action(transition: &Transition, config: &GameConfig) -> Option<StepAction> {
    match transition.step? {
        Step::Draw => {
            if transition.turn == 1 && config.skip_first_draw {
                return None;
            }
            Some(StepAction::Draw {
                player: transition.active_player,
                count: config.draw_step_cards,
            })
        }
        Step::Untap
        | Step::Upkeep
        | Step::BeginningOfCombat
        | Step::DeclareAttackers
        | Step::DeclareBlockers
        | Step::CombatDamage
        | Step::EndOfCombat
        | Step::End
        | Step::Cleanup => None,
    }
}
