//! The intent layer between a front end and the game.
//!
//! `Session` adds what the game itself does not track:
//! - routing a chosen cell to an armed targeted skill instead of a move
//! - the pending-target state and its cancellation
//! - an event queue describing every visible change

use im::Vector;
use tracing::{debug, trace};

use super::{GameEvent, Intent, PendingTarget, Response, SkillResponse};
use crate::board::Pos;
use crate::core::{Clock, GameConfig, PlayerId, SystemClock};
use crate::error::{ActionError, ConfigError};
use crate::game::{Game, Modifiers};
use crate::rules::GameResult;
use crate::skills::SkillOutcome;

/// The state a presentation layer renders indicators from.
#[derive(Clone, Copy, PartialEq, Eq)]
struct Snapshot {
    modifiers: Modifiers,
    current: PlayerId,
    result: Option<GameResult>,
}

impl Snapshot {
    fn of(game: &Game) -> Self {
        Self {
            modifiers: *game.modifiers(),
            current: game.current_player_id(),
            result: game.result(),
        }
    }
}

/// One game session, driven by caller intents.
#[derive(Debug)]
pub struct Session {
    game: Game,
    pending: Option<PendingTarget>,
    events: Vector<GameEvent>,
}

impl Session {
    /// Create a session on the system clock.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, SystemClock::new())
    }

    /// Create a session reading time from `clock`.
    pub fn with_clock(config: &GameConfig, clock: impl Clock + 'static) -> Result<Self, ConfigError> {
        Ok(Self {
            game: Game::with_clock(config, clock)?,
            pending: None,
            events: Vector::new(),
        })
    }

    /// Read-only view of the game.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The targeted skill waiting for a coordinate, if any.
    #[must_use]
    pub fn pending_target(&self) -> Option<PendingTarget> {
        self.pending
    }

    /// Events not yet drained.
    #[must_use]
    pub fn events(&self) -> &Vector<GameEvent> {
        &self.events
    }

    /// Take all queued events, oldest first.
    pub fn drain_events(&mut self) -> Vector<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Dispatch an intent.
    pub fn handle(&mut self, intent: Intent) -> Result<Response, ActionError> {
        match intent {
            Intent::AttemptMove(pos) => self.attempt_move(pos.row, pos.col),
            Intent::InvokeSkill { player, index } => self.invoke_skill(player, index).map(Response::Skill),
            Intent::ResolvePendingTarget(pos) => self
                .resolve_pending_target(pos.row, pos.col)
                .map(|outcome| Response::Skill(SkillResponse::Executed(outcome))),
            Intent::ResetGame => {
                self.reset_game();
                Ok(Response::Reset)
            }
        }
    }

    /// A cell was chosen.
    ///
    /// With a targeted skill armed the cell goes to that skill; otherwise
    /// the current player places a stone there.
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<Response, ActionError> {
        if self.pending.is_some() {
            return self
                .resolve_pending_target(row, col)
                .map(|outcome| Response::Skill(SkillResponse::Executed(outcome)));
        }

        self.observe(|session| {
            session
                .game
                .attempt_move(Pos::new(row, col))
                .map(Response::Move)
        })
    }

    /// A skill button was pressed.
    ///
    /// Any armed selection is cancelled first. Untargeted skills run right
    /// away; targeted ones arm and wait for `resolve_pending_target`.
    pub fn invoke_skill(&mut self, player: PlayerId, index: usize) -> Result<SkillResponse, ActionError> {
        self.observe(|session| {
            if session.pending.take().is_some() {
                session.events.push_back(GameEvent::TargetCancelled);
            }

            let kind = session.game.authorize_skill(player, index)?;
            if kind.is_targeted() {
                let pending = PendingTarget { player, index, skill: kind };
                session.pending = Some(pending);
                session.events.push_back(GameEvent::TargetArmed { player, skill: kind });
                debug!(%player, skill = %kind, "awaiting target");
                return Ok(SkillResponse::AwaitingTarget(pending));
            }

            let outcome = session.game.invoke_skill(player, index, None)?;
            session.announce_removal(&outcome);
            Ok(SkillResponse::Executed(outcome))
        })
    }

    /// Feed a coordinate to the armed targeted skill.
    ///
    /// The armed state is cleared whether or not the skill succeeds.
    pub fn resolve_pending_target(&mut self, row: usize, col: usize) -> Result<SkillOutcome, ActionError> {
        self.observe(|session| {
            let pending = session.pending.take().ok_or(ActionError::NoPendingTarget)?;
            let outcome =
                session
                    .game
                    .invoke_skill(pending.player, pending.index, Some(Pos::new(row, col)))?;
            session.announce_removal(&outcome);
            Ok(outcome)
        })
    }

    /// Start over in place.
    pub fn reset_game(&mut self) {
        let before = Snapshot::of(&self.game);
        self.pending = None;
        self.game.reset();
        self.events.push_back(GameEvent::Reset);
        self.publish_since(before);
    }

    fn announce_removal(&mut self, outcome: &SkillOutcome) {
        if let Some(hint) = outcome.animation {
            self.events.push_back(GameEvent::StoneRemoved(hint));
        }
    }

    /// Run `f`, then queue events for every indicator it changed.
    fn observe<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ActionError>,
    ) -> Result<T, ActionError> {
        let before = Snapshot::of(&self.game);
        let result = f(self);

        if let Err(err) = &result {
            trace!(%err, "intent rejected");
        }
        self.publish_since(before);
        result
    }

    /// Queue events for every indicator that differs from `before`.
    fn publish_since(&mut self, before: Snapshot) {
        let after = Snapshot::of(&self.game);
        if before != after {
            self.publish_changes(before, after);
        }
    }

    fn publish_changes(&mut self, before: Snapshot, after: Snapshot) {
        let (old, new) = (before.modifiers, after.modifiers);

        if old.frozen() != new.frozen() {
            self.events.push_back(GameEvent::FreezeChanged { frozen: new.frozen() });
        }
        if old.shattered_by() != new.shattered_by() {
            self.events.push_back(GameEvent::BoardShatterChanged {
                shattered_by: new.shattered_by(),
            });
        }
        if old.extra_turns() != new.extra_turns() {
            self.events.push_back(GameEvent::ExtraTurnsChanged {
                window: new.extra_turns(),
            });
        }
        if before.result != after.result {
            if let Some(result) = after.result {
                self.events.push_back(GameEvent::GameEnded(result));
            }
        }
        if before.current != after.current {
            self.events.push_back(GameEvent::TurnChanged { player: after.current });
        }
    }
}
