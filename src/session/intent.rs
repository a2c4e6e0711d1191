//! Caller intents and their responses.
//!
//! The presentation layer forwards exactly these inputs. `Session::handle`
//! dispatches them; the individual methods on `Session` can also be called
//! directly.

use serde::{Deserialize, Serialize};

use crate::board::Pos;
use crate::core::PlayerId;
use crate::game::MoveOutcome;
use crate::skills::{SkillKind, SkillOutcome};

/// An input from the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// A board cell was chosen. Places a stone, or feeds an armed targeted
    /// skill.
    AttemptMove(Pos),
    /// A skill button was pressed.
    InvokeSkill { player: PlayerId, index: usize },
    /// A board cell was chosen for the armed targeted skill.
    ResolvePendingTarget(Pos),
    /// Start over.
    ResetGame,
}

/// A targeted skill waiting for its coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingTarget {
    pub player: PlayerId,
    pub index: usize,
    pub skill: SkillKind,
}

/// What happened when a skill button was pressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkillResponse {
    /// The skill ran.
    Executed(SkillOutcome),
    /// The skill is targeted and now waits for a coordinate.
    AwaitingTarget(PendingTarget),
}

/// Successful response to an intent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    Move(MoveOutcome),
    Skill(SkillResponse),
    Reset,
}

impl Response {
    /// The move outcome, if a stone was placed.
    #[must_use]
    pub fn as_move(&self) -> Option<MoveOutcome> {
        match self {
            Response::Move(outcome) => Some(*outcome),
            _ => None,
        }
    }

    /// The skill outcome, if a skill ran.
    #[must_use]
    pub fn as_skill(&self) -> Option<&SkillOutcome> {
        match self {
            Response::Skill(SkillResponse::Executed(outcome)) => Some(outcome),
            _ => None,
        }
    }
}
