//! Player identification and per-player data.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Ids are non-zero so that they can never be
//! confused with an empty board cell.
//!
//! ## Player
//!
//! Identity (id, display name, display color) plus the ordered list of
//! skills owned by that player.

use serde::{Deserialize, Serialize};

use crate::skills::Skill;

/// Player identifier.
///
/// The two seats of a game use distinct, non-zero ids (1 and 2 by default).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Zero is reserved for "no owner".
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seated player.
///
/// Identity is fixed at construction; only the skill list is mutable, and
/// skills are never shared between players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    color: String,
    skills: Vec<Skill>,
}

impl Player {
    /// Create a player without skills.
    pub fn new(id: PlayerId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            skills: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Attach a skill. Skills keep their insertion order.
    pub fn add_skill(&mut self, skill: Skill) {
        self.skills.push(skill);
    }

    /// Skills owned by this player, in insertion order.
    #[must_use]
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Get a skill by index.
    #[must_use]
    pub fn skill(&self, index: usize) -> Option<&Skill> {
        self.skills.get(index)
    }

    pub(crate) fn skill_mut(&mut self, index: usize) -> Option<&mut Skill> {
        self.skills.get_mut(index)
    }

    pub(crate) fn skills_mut(&mut self) -> impl Iterator<Item = &mut Skill> {
        self.skills.iter_mut()
    }

    #[must_use]
    pub fn has_skills(&self) -> bool {
        !self.skills.is_empty()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::SkillKind;

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);

        assert_eq!(p1.raw(), 1);
        assert!(p1.is_valid());
        assert!(!PlayerId::new(0).is_valid());
        assert_eq!(format!("{}", p1), "Player 1");
    }

    #[test]
    fn test_skills_keep_insertion_order() {
        let mut player = Player::new(PlayerId::new(1), "Black", "#000");
        assert!(!player.has_skills());

        player.add_skill(Skill::new(SkillKind::Freeze));
        player.add_skill(Skill::new(SkillKind::Undo));

        let kinds: Vec<_> = player.skills().iter().map(Skill::kind).collect();
        assert_eq!(kinds, vec![SkillKind::Freeze, SkillKind::Undo]);
        assert_eq!(player.skill(1).map(Skill::kind), Some(SkillKind::Undo));
        assert!(player.skill(2).is_none());
    }

    #[test]
    fn test_player_serialization() {
        let mut player = Player::new(PlayerId::new(2), "White", "#fff");
        player.add_skill(Skill::new(SkillKind::Sweep));

        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
