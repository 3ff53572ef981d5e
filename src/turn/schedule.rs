//! The static phase/step schedule.
//!
//! ```text
//! beginning        untap, upkeep, draw
//! precombat-main   (no steps)
//! combat           beginning-of-combat, declare-attackers, declare-blockers,
//!                  combat-damage, end-of-combat
//! postcombat-main  (no steps)
//! ending           end, cleanup
//! ```

use serde::{Deserialize, Serialize};

/// Label reported for "no step": main phases, and the moment before a
/// phase's first step.
pub const MAIN_PHASE_SENTINEL: &str = "main";

/// Coarse turn divisions, in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Beginning,
    PrecombatMain,
    Combat,
    PostcombatMain,
    Ending,
}

/// Sub-divisions of the beginning, combat and ending phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    Untap,
    Upkeep,
    Draw,
    BeginningOfCombat,
    DeclareAttackers,
    DeclareBlockers,
    CombatDamage,
    EndOfCombat,
    End,
    Cleanup,
}

/// Every phase in turn order.
pub const PHASES: [Phase; 5] = [
    Phase::Beginning,
    Phase::PrecombatMain,
    Phase::Combat,
    Phase::PostcombatMain,
    Phase::Ending,
];

const BEGINNING_STEPS: &[Step] = &[Step::Untap, Step::Upkeep, Step::Draw];

const COMBAT_STEPS: &[Step] = &[
    Step::BeginningOfCombat,
    Step::DeclareAttackers,
    Step::DeclareBlockers,
    Step::CombatDamage,
    Step::EndOfCombat,
];

const ENDING_STEPS: &[Step] = &[Step::End, Step::Cleanup];

impl Phase {
    /// Steps of this phase in order. Empty for main phases.
    #[must_use]
    pub const fn steps(self) -> &'static [Step] {
        match self {
            Phase::Beginning => BEGINNING_STEPS,
            Phase::Combat => COMBAT_STEPS,
            Phase::Ending => ENDING_STEPS,
            Phase::PrecombatMain | Phase::PostcombatMain => &[],
        }
    }

    #[must_use]
    pub const fn is_main(self) -> bool {
        self.steps().is_empty()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Beginning => "beginning",
            Phase::PrecombatMain => "precombat-main",
            Phase::Combat => "combat",
            Phase::PostcombatMain => "postcombat-main",
            Phase::Ending => "ending",
        }
    }
}

impl Step {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Step::Untap => "untap",
            Step::Upkeep => "upkeep",
            Step::Draw => "draw",
            Step::BeginningOfCombat => "beginning-of-combat",
            Step::DeclareAttackers => "declare-attackers",
            Step::DeclareBlockers => "declare-blockers",
            Step::CombatDamage => "combat-damage",
            Step::EndOfCombat => "end-of-combat",
            Step::End => "end",
            Step::Cleanup => "cleanup",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
