//! Game configuration types.
//!
//! A session is configured once at startup:
//! - `PlayerConfig`: identity of each seat
//! - `GameConfig`: board geometry, win length, modifier timings, sweep
//!   range, skill catalog and RNG seed
//!
//! Every field has a default, so a partial JSON document deserializes into a
//! playable configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::PlayerId;
use crate::board::Board;
use crate::error::ConfigError;
use crate::skills::SkillKind;

/// Identity of one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub id: PlayerId,
    pub name: String,
    pub color: String,
}

impl PlayerConfig {
    pub fn new(id: PlayerId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board.
    pub board_size: usize,

    /// Stones in a line needed to win.
    pub win_length: usize,

    /// Length of the ExtraTurns window in milliseconds.
    pub extra_turns_window_ms: u64,

    /// Lower bound of the Sweep removal share, in percent.
    pub sweep_min_percent: u32,

    /// Upper bound of the Sweep removal share, in percent.
    pub sweep_max_percent: u32,

    /// The two seats, first mover first.
    pub players: [PlayerConfig; 2],

    /// Skills attached to each player, in order.
    pub skills: Vec<SkillKind>,

    /// Seed for the game RNG.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 15,
            win_length: 5,
            extra_turns_window_ms: 5_000,
            sweep_min_percent: 30,
            sweep_max_percent: 60,
            players: [
                PlayerConfig::new(PlayerId::new(1), "Black", "#000"),
                PlayerConfig::new(PlayerId::new(2), "White", "#fff"),
            ],
            skills: SkillKind::DEFAULT_CATALOG.to_vec(),
            seed: 0,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    #[must_use]
    pub fn with_win_length(mut self, length: usize) -> Self {
        self.win_length = length;
        self
    }

    #[must_use]
    pub fn with_extra_turns_window(mut self, window: Duration) -> Self {
        self.extra_turns_window_ms = u64::try_from(window.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn with_sweep_range(mut self, min_percent: u32, max_percent: u32) -> Self {
        self.sweep_min_percent = min_percent;
        self.sweep_max_percent = max_percent;
        self
    }

    #[must_use]
    pub fn with_players(mut self, first: PlayerConfig, second: PlayerConfig) -> Self {
        self.players = [first, second];
        self
    }

    /// Replace the skill catalog attached to both players.
    #[must_use]
    pub fn with_skills(mut self, skills: impl IntoIterator<Item = SkillKind>) -> Self {
        self.skills = skills.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// ExtraTurns window as a `Duration`.
    #[must_use]
    pub fn extra_turns_window(&self) -> Duration {
        Duration::from_millis(self.extra_turns_window_ms)
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_length < 2 {
            return Err(ConfigError::WinLengthTooShort(self.win_length));
        }
        if self.board_size < self.win_length {
            return Err(ConfigError::BoardTooSmall {
                size: self.board_size,
                win_length: self.win_length,
            });
        }
        if self.board_size > Board::MAX_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size: self.board_size,
                max: Board::MAX_SIZE,
            });
        }
        let [first, second] = &self.players;
        for seat in &self.players {
            if !seat.id.is_valid() {
                return Err(ConfigError::ZeroPlayerId);
            }
        }
        if first.id == second.id {
            return Err(ConfigError::DuplicatePlayerId(first.id));
        }
        if self.sweep_max_percent > 100 || self.sweep_min_percent > self.sweep_max_percent {
            return Err(ConfigError::InvalidSweepRange {
                min: self.sweep_min_percent,
                max: self.sweep_max_percent,
            });
        }
        if self.extra_turns_window_ms == 0 {
            return Err(ConfigError::EmptyExtraTurnsWindow);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();

        assert_eq!(config.board_size, 15);
        assert_eq!(config.win_length, 5);
        assert_eq!(config.extra_turns_window(), Duration::from_secs(5));
        assert_eq!(config.skills.len(), 8);
        assert!(!config.skills.contains(&SkillKind::Block));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let config = GameConfig::new()
            .with_board_size(9)
            .with_win_length(4)
            .with_extra_turns_window(Duration::from_millis(250))
            .with_sweep_range(10, 20)
            .with_skills([SkillKind::Block])
            .with_seed(99);

        assert_eq!(config.board_size, 9);
        assert_eq!(config.win_length, 4);
        assert_eq!(config.extra_turns_window_ms, 250);
        assert_eq!((config.sweep_min_percent, config.sweep_max_percent), (10, 20));
        assert_eq!(config.skills, vec![SkillKind::Block]);
        assert_eq!(config.seed, 99);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_errors() {
        let small = GameConfig::new().with_board_size(4);
        assert_eq!(
            small.validate(),
            Err(ConfigError::BoardTooSmall { size: 4, win_length: 5 })
        );

        let huge = GameConfig::new().with_board_size(usize::MAX);
        assert_eq!(
            huge.validate(),
            Err(ConfigError::BoardTooLarge { size: usize::MAX, max: Board::MAX_SIZE })
        );
        assert!(GameConfig::new().with_board_size(Board::MAX_SIZE).validate().is_ok());

        let short = GameConfig::new().with_win_length(1);
        assert_eq!(short.validate(), Err(ConfigError::WinLengthTooShort(1)));

        let same = GameConfig::new().with_players(
            PlayerConfig::new(PlayerId::new(3), "A", "#000"),
            PlayerConfig::new(PlayerId::new(3), "B", "#fff"),
        );
        assert_eq!(same.validate(), Err(ConfigError::DuplicatePlayerId(PlayerId::new(3))));

        let zero = GameConfig::new().with_players(
            PlayerConfig::new(PlayerId::new(0), "A", "#000"),
            PlayerConfig::new(PlayerId::new(2), "B", "#fff"),
        );
        assert_eq!(zero.validate(), Err(ConfigError::ZeroPlayerId));

        let sweep = GameConfig::new().with_sweep_range(70, 60);
        assert!(matches!(sweep.validate(), Err(ConfigError::InvalidSweepRange { .. })));

        let window = GameConfig::new().with_extra_turns_window(Duration::ZERO);
        assert_eq!(window.validate(), Err(ConfigError::EmptyExtraTurnsWindow));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "board_size": 19, "seed": 7 }"#).unwrap();

        assert_eq!(config.board_size, 19);
        assert_eq!(config.seed, 7);
        assert_eq!(config.win_length, 5);
        assert_eq!(config.players[1].name, "White");
    }

    #[test]
    fn test_oversized_board_rejected_from_json() {
        let config: GameConfig = serde_json::from_str(r#"{ "board_size": 4294967296 }"#).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::BoardTooLarge { .. })));
        assert!(crate::game::Game::new(&config).is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = GameConfig::new().with_skills([SkillKind::Sweep, SkillKind::Block]);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
