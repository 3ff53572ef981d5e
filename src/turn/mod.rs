//! Turn structure: the static schedule, the sequencer that walks it, and
//! the automatic actions attached to steps.

pub mod actions;
pub mod schedule;
pub mod sequencer;

pub use actions::{automatic_action, StepAction};
pub use schedule::{Phase, Step, MAIN_PHASE_SENTINEL, PHASES};
pub use sequencer::{Transition, TurnSequencer};
