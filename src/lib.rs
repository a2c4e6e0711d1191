//! # skill-gomoku
//!
//! A five-in-a-row rule engine where each player also owns a set of skills
//! that bend the rules: taking stones back, freezing the opponent, smashing
//! the board, keeping the turn for a few seconds, sweeping stones away.
//!
//! ## Design Principles
//!
//! 1. **Presentation-free**: The engine never renders. Callers send intents
//!    and receive results plus a queue of events to draw from.
//!
//! 2. **Single aggregate**: All turn and modifier state lives in `Game` and
//!    changes only through its methods.
//!
//! 3. **No timers**: Time-boxed state stores an absolute deadline and is
//!    checked lazily against a `Clock` at the next action.
//!
//! 4. **Failures are values**: Every rejected intent returns an error whose
//!    `Display` is the reason shown to players.
//!
//! ## Modules
//!
//! - `core`: Players, configuration, RNG, clock
//! - `board`: Grid, cells and coordinates
//! - `rules`: Win and draw detection
//! - `skills`: The skill catalog and the cooldown wrapper
//! - `game`: The turn-state machine and its modifiers
//! - `session`: Intents, pending targeted skills, events
//! - `error`: Error types
//!
//! ## Example
//!
//! ```
//! use skill_gomoku::{GameConfig, Session};
//!
//! let mut session = Session::new(&GameConfig::default()).unwrap();
//! for col in 7..11 {
//!     session.attempt_move(7, col).unwrap(); // Black
//!     session.attempt_move(0, col).unwrap(); // White
//! }
//! let response = session.attempt_move(7, 11).unwrap();
//! assert_eq!(response.as_move().and_then(|m| m.winner()), Some(skill_gomoku::PlayerId::new(1)));
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod skills;
pub mod game;
pub mod session;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerId, PlayerConfig, GameConfig,
    GameRng, Clock, ManualClock, SystemClock,
};

pub use crate::board::{Board, Cell, Pos};

pub use crate::rules::{check_draw, check_win, GameResult};

pub use crate::skills::{AnimationHint, Skill, SkillKind, SkillOutcome};

pub use crate::game::{ExtraTurnsWindow, Game, Modifiers, MoveOutcome};

pub use crate::session::{GameEvent, Intent, PendingTarget, Response, Session, SkillResponse};

pub use crate::error::{ActionError, ConfigError, MoveError, SkillError};
