//! Core engine types: players, configuration, RNG, clock.
//!
//! These are the building blocks shared by the board, the skills and the
//! game aggregate.

pub mod player;
pub mod rng;
pub mod config;
pub mod clock;

pub use player::{Player, PlayerId};
pub use rng::GameRng;
pub use config::{GameConfig, PlayerConfig};
pub use clock::{Clock, ManualClock, SystemClock};
