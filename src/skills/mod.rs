//! Player skills.
//!
//! - `SkillKind`: the closed catalog, each variant with its own precondition
//!   and effect
//! - `Skill`: a player's instance of a kind, wrapping it with cooldown
//!   bookkeeping behind a uniform `execute`
//! - `SkillOutcome`: what a successful skill reports
//!
//! Skills mutate the board and the game's modifiers. They never change whose
//! turn it is; the game decides that after a skill succeeds.

mod kind;
mod skill;
mod outcome;

pub use kind::{sweep_bounds, SkillKind};
pub use skill::Skill;
pub use outcome::{AnimationHint, SkillOutcome};
