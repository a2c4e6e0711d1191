//! Error types.
//!
//! Every rejected intent is reported as a value; the `Display` text of each
//! variant is the human-readable reason shown to players.

use thiserror::Error;

use crate::board::Pos;
use crate::core::PlayerId;

/// Why a stone could not be placed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is already over")]
    GameOver,

    #[error("{0} is outside the board")]
    OutOfBounds(Pos),

    #[error("cell {0} is occupied")]
    CellOccupied(Pos),
}

/// Why a skill failed. A failed skill has no effect.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SkillError {
    #[error("skill is cooling down ({remaining} more)")]
    CoolingDown { remaining: u32 },

    #[error("nothing to undo: you have not placed a stone yet")]
    NothingToUndo,

    #[error("the opponent has no stones on the board")]
    OpponentHasNoStones,

    #[error("a player is already frozen")]
    AlreadyFrozen,

    #[error("no player is frozen")]
    NobodyFrozen,

    #[error("you are not frozen")]
    NotFrozen,

    #[error("the board is already shattered")]
    AlreadyShattered,

    #[error("the board is not shattered")]
    NotShattered,

    #[error("an extra-turns window is already active")]
    ExtraTurnsActive,

    #[error("there are no stones on the board")]
    BoardEmpty,

    #[error("this skill needs a target cell")]
    TargetRequired,

    #[error("{0} is outside the board")]
    OutOfBounds(Pos),

    #[error("cell {0} is occupied")]
    CellOccupied(Pos),
}

/// Why an intent was rejected at the turn level.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("the game is over")]
    GameOver,

    #[error("the board is shattered; only Restore Board can be used")]
    BoardShattered,

    #[error("{0} is frozen; only Unfreeze can be used")]
    Frozen(PlayerId),

    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("{0} is not seated in this game")]
    UnknownPlayer(PlayerId),

    #[error("{player} has no skill at index {index}")]
    UnknownSkill { player: PlayerId, index: usize },

    #[error("no skill is waiting for a target")]
    NoPendingTarget,

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Skill(#[from] SkillError),
}

/// Invalid `GameConfig`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("win length must be at least 2, got {0}")]
    WinLengthTooShort(usize),

    #[error("board size {size} is smaller than win length {win_length}")]
    BoardTooSmall { size: usize, win_length: usize },

    #[error("board size {size} exceeds the maximum of {max}")]
    BoardTooLarge { size: usize, max: usize },

    #[error("player ids must be non-zero")]
    ZeroPlayerId,

    #[error("both players use id {0}")]
    DuplicatePlayerId(PlayerId),

    #[error("invalid sweep range {min}%..{max}%")]
    InvalidSweepRange { min: u32, max: u32 },

    #[error("extra-turns window must be longer than zero")]
    EmptyExtraTurnsWindow,
}
