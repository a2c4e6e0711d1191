//! The cooldown wrapper shared by every skill.

use serde::{Deserialize, Serialize};

use super::{SkillKind, SkillOutcome};
use crate::board::Pos;
use crate::core::PlayerId;
use crate::error::SkillError;
use crate::game::Game;

/// A skill instance owned by one player.
///
/// `cooldown` is how many of the owner's turn starts must pass after a
/// successful use before the skill is ready again. The shipped catalog uses
/// zero everywhere, i.e. unlimited reuse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Skill {
    kind: SkillKind,
    cooldown: u32,
    current_cooldown: u32,
}

impl Skill {
    /// A ready skill with no cooldown.
    #[must_use]
    pub fn new(kind: SkillKind) -> Self {
        Self {
            kind,
            cooldown: 0,
            current_cooldown: 0,
        }
    }

    #[must_use]
    pub fn with_cooldown(mut self, cooldown: u32) -> Self {
        self.cooldown = cooldown;
        self
    }

    #[must_use]
    pub fn kind(&self) -> SkillKind {
        self.kind
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    #[must_use]
    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    #[must_use]
    pub fn current_cooldown(&self) -> u32 {
        self.current_cooldown
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.current_cooldown == 0
    }

    /// Run the skill unless it is cooling down.
    ///
    /// The cooldown restarts only when the effect succeeds.
    pub fn execute(
        &mut self,
        game: &mut Game,
        player: PlayerId,
        target: Option<Pos>,
    ) -> Result<SkillOutcome, SkillError> {
        if self.current_cooldown > 0 {
            return Err(SkillError::CoolingDown {
                remaining: self.current_cooldown,
            });
        }

        let outcome = self.kind.apply(game, player, target)?;
        self.current_cooldown = self.cooldown;
        Ok(outcome)
    }

    /// One step closer to ready.
    pub fn reduce_cooldown(&mut self) {
        self.current_cooldown = self.current_cooldown.saturating_sub(1);
    }

    pub fn reset_cooldown(&mut self) {
        self.current_cooldown = 0;
    }
}

impl From<SkillKind> for Skill {
    fn from(kind: SkillKind) -> Self {
        Self::new(kind)
    }
}
