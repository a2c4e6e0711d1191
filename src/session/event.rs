//! Notifications for the presentation layer.
//!
//! The engine never renders. After every intent the session appends events
//! describing what changed, and the caller drains them to update turn
//! indicators, frozen panels, the shattered-board overlay and removal
//! animations.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::game::ExtraTurnsWindow;
use crate::rules::GameResult;
use crate::skills::{AnimationHint, SkillKind};

/// Something the presentation layer may want to show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A different player is now to act.
    TurnChanged { player: PlayerId },

    /// The frozen player changed (`None`: nobody frozen).
    FreezeChanged { frozen: Option<PlayerId> },

    /// The board was shattered or restored.
    BoardShatterChanged { shattered_by: Option<PlayerId> },

    /// An extra-turns window opened, closed or expired.
    ExtraTurnsChanged { window: Option<ExtraTurnsWindow> },

    /// A stone was thrown off the board and should be animated.
    StoneRemoved(AnimationHint),

    /// The game ended.
    GameEnded(GameResult),

    /// A targeted skill is waiting for a board coordinate.
    TargetArmed { player: PlayerId, skill: SkillKind },

    /// The pending target selection was dropped without being used.
    TargetCancelled,

    /// The game was reset.
    Reset,
}

impl GameEvent {
    /// True for events that toggle a modifier indicator.
    #[must_use]
    pub fn is_modifier_change(&self) -> bool {
        matches!(
            self,
            GameEvent::FreezeChanged { .. }
                | GameEvent::BoardShatterChanged { .. }
                | GameEvent::ExtraTurnsChanged { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_events() {
        assert!(GameEvent::FreezeChanged { frozen: None }.is_modifier_change());
        assert!(GameEvent::ExtraTurnsChanged { window: None }.is_modifier_change());
        assert!(!GameEvent::Reset.is_modifier_change());
        assert!(!GameEvent::TurnChanged { player: PlayerId::new(1) }.is_modifier_change());
    }

    #[test]
    fn test_event_serde() {
        let event = GameEvent::GameEnded(GameResult::Winner(PlayerId::new(2)));
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
