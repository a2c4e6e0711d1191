//! What a successful skill reports back.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::SkillKind;
use crate::board::Pos;
use crate::core::PlayerId;

/// Tells the presentation layer which stone to animate as removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimationHint {
    pub pos: Pos,
    pub owner: PlayerId,
}

/// Result of a skill that took effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillOutcome {
    /// Which skill produced this outcome.
    pub kind: SkillKind,

    /// Message for the players.
    pub message: String,

    /// Cells cleared by the skill. Undo clears at most two.
    pub removed: SmallVec<[Pos; 2]>,

    /// Set when the removal should be animated.
    pub animation: Option<AnimationHint>,
}

impl SkillOutcome {
    pub fn new(kind: SkillKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            removed: SmallVec::new(),
            animation: None,
        }
    }

    #[must_use]
    pub fn with_removed(mut self, removed: impl IntoIterator<Item = Pos>) -> Self {
        self.removed.extend(removed);
        self
    }

    #[must_use]
    pub fn with_animation(mut self, hint: AnimationHint) -> Self {
        self.animation = Some(hint);
        self
    }
}
