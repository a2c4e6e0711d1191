//! Caller-facing session.
//!
//! - `Intent`: the four inputs a front end forwards
//! - `Session`: dispatches intents, keeps the pending targeted skill, and
//!   queues `GameEvent`s for rendering
//!
//! ## Flow
//!
//! 1. The caller sends an intent
//! 2. The session validates and forwards it to `Game`
//! 3. The session diffs the visible state and queues events
//! 4. The caller drains events and redraws

mod event;
mod intent;
mod controller;

pub use event::GameEvent;
pub use intent::{Intent, PendingTarget, Response, SkillResponse};
pub use controller::Session;
