//! The game aggregate.
//!
//! `Game` owns the board, both players, the turn index, the terminal result
//! and the modifier state. Every transition goes through its methods:
//!
//! - `make_move`: the base protocol (place, detect win/draw, pass the turn)
//! - `attempt_move`: `make_move` behind modifier checks, with extra turns
//! - `invoke_skill`: modifier checks, cooldown wrapper, turn hand-off
//!
//! ## Precedence
//!
//! 1. Game over (and board intact): nothing is allowed
//! 2. Board shattered: only Restore Board
//! 3. Acting player frozen: only Unfreeze
//! 4. Otherwise: placement and any skill

use std::time::Duration;

use tracing::{debug, info, instrument, trace};

use super::Modifiers;
use crate::board::{Board, Pos};
use crate::core::{Clock, GameConfig, GameRng, Player, PlayerId, SystemClock};
use crate::error::{ActionError, ConfigError, MoveError};
use crate::rules::{check_draw, check_win, GameResult};
use crate::skills::{Skill, SkillKind, SkillOutcome};

/// Tunable rule parameters, taken from `GameConfig`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub win_length: usize,
    pub extra_turns_window: Duration,
    pub sweep_min_percent: u32,
    pub sweep_max_percent: u32,
}

impl From<&GameConfig> for Settings {
    fn from(config: &GameConfig) -> Self {
        Self {
            win_length: config.win_length,
            extra_turns_window: config.extra_turns_window(),
            sweep_min_percent: config.sweep_min_percent,
            sweep_max_percent: config.sweep_max_percent,
        }
    }
}

/// Result of an accepted placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Game goes on; `next` is the player to act.
    Continued { next: PlayerId },
    /// The placed stone completed a line.
    Won { winner: PlayerId },
    /// The board filled up without a line.
    Draw,
}

impl MoveOutcome {
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        !matches!(self, MoveOutcome::Continued { .. })
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            MoveOutcome::Won { winner } => Some(*winner),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        matches!(self, MoveOutcome::Draw)
    }
}

/// A two-player game session.
#[derive(Debug)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    current: usize,
    result: Option<GameResult>,
    modifiers: Modifiers,
    settings: Settings,
    rng: GameRng,
    clock: Box<dyn Clock>,
}

impl Game {
    /// Create a game on the system clock.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, SystemClock::new())
    }

    /// Create a game reading time from `clock`.
    pub fn with_clock(config: &GameConfig, clock: impl Clock + 'static) -> Result<Self, ConfigError> {
        config.validate()?;

        let players = config.players.clone().map(|seat| {
            let mut player = Player::new(seat.id, seat.name, seat.color);
            for &kind in &config.skills {
                player.add_skill(Skill::new(kind));
            }
            player
        });

        Ok(Self {
            board: Board::new(config.board_size),
            players,
            current: 0,
            result: None,
            modifiers: Modifiers::new(),
            settings: Settings::from(config),
            rng: GameRng::new(config.seed),
            clock: Box::new(clock),
        })
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    fn seat_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id() == id)
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        self.players[self.current].id()
    }

    /// The other seat's id. An unknown id maps to the first seat.
    #[must_use]
    pub fn opponent_of(&self, id: PlayerId) -> PlayerId {
        if self.players[0].id() == id {
            self.players[1].id()
        } else {
            self.players[0].id()
        }
    }

    /// Display name of a player, or its id if it is not seated.
    #[must_use]
    pub fn display_name(&self, id: PlayerId) -> String {
        self.player(id)
            .map_or_else(|| id.to_string(), |p| p.name().to_string())
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.result.and_then(|r| r.winner())
    }

    #[must_use]
    pub fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Current time on the game clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    // === Crate-internal mutation (used by skills) ===

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn modifiers_mut(&mut self) -> &mut Modifiers {
        &mut self.modifiers
    }

    pub(crate) fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }

    pub(crate) fn clear_result(&mut self) {
        self.result = None;
    }

    // === Turn order ===

    /// Hand the turn to the other seat and tick the incoming player's
    /// cooldowns.
    fn switch_player(&mut self) {
        self.current = 1 - self.current;
        for skill in self.players[self.current].skills_mut() {
            skill.reduce_cooldown();
        }
        trace!(player = %self.current_player_id(), "turn changed");
    }

    // === Move protocol ===

    /// Place a stone for the current player, then score it.
    ///
    /// No modifier is consulted here; see `attempt_move`.
    pub fn make_move(&mut self, pos: Pos) -> Result<MoveOutcome, MoveError> {
        match self.place_and_score(pos)? {
            Some(outcome) => Ok(outcome),
            None => {
                self.switch_player();
                Ok(MoveOutcome::Continued {
                    next: self.current_player_id(),
                })
            }
        }
    }

    /// Place and check for a result. `Ok(None)` means the game continues and
    /// the turn has not moved yet.
    fn place_and_score(&mut self, pos: Pos) -> Result<Option<MoveOutcome>, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.in_bounds(pos) {
            return Err(MoveError::OutOfBounds(pos));
        }

        let mover = self.current_player_id();
        if !self.board.place_piece(pos, mover) {
            return Err(MoveError::CellOccupied(pos));
        }
        debug!(player = %mover, %pos, "stone placed");

        if check_win(&self.board, pos, mover, self.settings.win_length) {
            self.result = Some(GameResult::Winner(mover));
            info!(winner = %mover, "game won");
            return Ok(Some(MoveOutcome::Won { winner: mover }));
        }

        if check_draw(&self.board) {
            self.result = Some(GameResult::Draw);
            info!("game drawn");
            return Ok(Some(MoveOutcome::Draw));
        }

        Ok(None)
    }

    /// Drop an extra-turns window whose deadline has passed.
    fn expire_windows(&mut self) {
        let now = self.now();
        if self.modifiers.expire_extra_turns(now) {
            debug!("extra-turns window expired");
        }
    }

    /// Place a stone for the current player, honoring every modifier.
    ///
    /// After a placement that does not end the game, a mover holding an open
    /// extra-turns window keeps the turn.
    #[instrument(level = "debug", skip(self))]
    pub fn attempt_move(&mut self, pos: Pos) -> Result<MoveOutcome, ActionError> {
        self.expire_windows();

        let mover = self.current_player_id();
        if self.is_game_over() && !self.modifiers.is_shattered() {
            return Err(ActionError::GameOver);
        }
        if self.modifiers.is_shattered() {
            return Err(ActionError::BoardShattered);
        }
        if self.modifiers.is_frozen(mover) {
            return Err(ActionError::Frozen(mover));
        }

        if let Some(outcome) = self.place_and_score(pos)? {
            return Ok(outcome);
        }

        if self.modifiers.has_open_window(mover, self.now()) {
            debug!(player = %mover, "extra turn");
        } else {
            if self.modifiers.extra_turns().is_some_and(|w| w.holder == mover) {
                self.modifiers.close_extra_turns();
            }
            self.switch_player();
        }

        Ok(MoveOutcome::Continued {
            next: self.current_player_id(),
        })
    }

    // === Skills ===

    /// Check whether `player` may use their skill at `index` right now.
    ///
    /// Returns the skill's kind when allowed.
    pub fn authorize_skill(&self, player: PlayerId, index: usize) -> Result<SkillKind, ActionError> {
        let seat = self.seat_of(player).ok_or(ActionError::UnknownPlayer(player))?;

        if self.is_game_over() && !self.modifiers.is_shattered() {
            return Err(ActionError::GameOver);
        }
        if seat != self.current {
            return Err(ActionError::NotYourTurn(player));
        }

        let kind = self.players[seat]
            .skill(index)
            .ok_or(ActionError::UnknownSkill { player, index })?
            .kind();

        if self.modifiers.is_shattered() && kind != SkillKind::RestoreBoard {
            return Err(ActionError::BoardShattered);
        }
        if self.modifiers.is_frozen(player) && kind != SkillKind::Unfreeze {
            return Err(ActionError::Frozen(player));
        }

        Ok(kind)
    }

    /// Use a skill.
    ///
    /// A successful skill consumes the turn, except Extra Turns, which keeps
    /// it so the window can be used right away.
    #[instrument(level = "debug", skip(self))]
    pub fn invoke_skill(
        &mut self,
        player: PlayerId,
        index: usize,
        target: Option<Pos>,
    ) -> Result<SkillOutcome, ActionError> {
        self.expire_windows();

        let kind = self.authorize_skill(player, index)?;
        let seat = self.current;

        // Skills are Copy: run a detached copy against the game, then store
        // its updated cooldown back.
        let mut skill = self.players[seat].skills()[index];
        let result = skill.execute(self, player, target);
        if let Some(slot) = self.players[seat].skill_mut(index) {
            *slot = skill;
        }
        let outcome = result?;

        debug!(%player, skill = %kind, removed = outcome.removed.len(), "skill used");
        match kind {
            SkillKind::ShatterBoard => info!(%player, "board shattered"),
            SkillKind::RestoreBoard => info!(%player, "board restored"),
            _ => {}
        }

        if kind != SkillKind::ExtraTurns {
            self.switch_player();
        }
        Ok(outcome)
    }

    // === Lifecycle ===

    /// Start over in place: empty board, first seat to move, no result, no
    /// modifiers, every cooldown ready.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current = 0;
        self.result = None;
        self.modifiers.clear();
        for player in &mut self.players {
            for skill in player.skills_mut() {
                skill.reset_cooldown();
            }
        }
        info!("game reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ManualClock;

    const BLACK: PlayerId = PlayerId::new(1);
    const WHITE: PlayerId = PlayerId::new(2);

    fn game() -> Game {
        Game::with_clock(&GameConfig::default(), ManualClock::new()).unwrap()
    }

    fn skill_index(game: &Game, kind: SkillKind) -> usize {
        game.current_player()
            .skills()
            .iter()
            .position(|s| s.kind() == kind)
            .unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = game();

        assert_eq!(game.board().size(), 15);
        assert_eq!(game.current_player_id(), BLACK);
        assert_eq!(game.opponent_of(BLACK), WHITE);
        assert_eq!(game.opponent_of(WHITE), BLACK);
        assert!(!game.is_game_over());
        assert_eq!(game.players()[1].skills().len(), 8);
        assert_eq!(game.display_name(WHITE), "White");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig::new().with_board_size(3);
        assert!(matches!(Game::new(&config), Err(ConfigError::BoardTooSmall { .. })));
    }

    #[test]
    fn test_make_move_alternates() {
        let mut game = game();

        let outcome = game.make_move(Pos::new(7, 7)).unwrap();
        assert_eq!(outcome, MoveOutcome::Continued { next: WHITE });
        assert_eq!(game.board().owner_at(Pos::new(7, 7)), Some(BLACK));

        game.make_move(Pos::new(0, 0)).unwrap();
        assert_eq!(game.current_player_id(), BLACK);
    }

    #[test]
    fn test_make_move_rejects_without_side_effects() {
        let mut game = game();
        game.make_move(Pos::new(7, 7)).unwrap();

        assert_eq!(game.make_move(Pos::new(7, 7)), Err(MoveError::CellOccupied(Pos::new(7, 7))));
        assert_eq!(game.make_move(Pos::new(15, 0)), Err(MoveError::OutOfBounds(Pos::new(15, 0))));
        assert_eq!(game.current_player_id(), WHITE);
        assert_eq!(game.board().occupied().len(), 1);
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = game();
        for col in 0..4 {
            game.make_move(Pos::new(0, col)).unwrap();
            game.make_move(Pos::new(5, col)).unwrap();
        }

        let outcome = game.make_move(Pos::new(0, 4)).unwrap();
        assert_eq!(outcome, MoveOutcome::Won { winner: BLACK });
        assert!(outcome.is_game_over());
        assert_eq!(game.winner(), Some(BLACK));
        // Winner keeps the turn index; nothing else may happen
        assert_eq!(game.current_player_id(), BLACK);
        assert_eq!(game.make_move(Pos::new(9, 9)), Err(MoveError::GameOver));
    }

    #[test]
    fn test_game_over_rejects_actions() {
        let mut game = game();
        for col in 0..4 {
            game.make_move(Pos::new(0, col)).unwrap();
            game.make_move(Pos::new(5, col)).unwrap();
        }
        game.make_move(Pos::new(0, 4)).unwrap();

        assert_eq!(game.attempt_move(Pos::new(9, 9)), Err(ActionError::GameOver));
        let sweep = skill_index(&game, SkillKind::Sweep);
        assert_eq!(game.invoke_skill(BLACK, sweep, None), Err(ActionError::GameOver));
    }

    #[test]
    fn test_restore_reopens_finished_game() {
        let mut game = game();
        for col in 0..4 {
            game.make_move(Pos::new(0, col)).unwrap();
            game.make_move(Pos::new(5, col)).unwrap();
        }
        game.make_move(Pos::new(0, 4)).unwrap();
        game.modifiers_mut().shatter(WHITE);

        let restore = skill_index(&game, SkillKind::RestoreBoard);
        game.invoke_skill(BLACK, restore, None).unwrap();

        assert_eq!(game.result(), None);
        assert!(!game.modifiers().is_shattered());
        assert_eq!(game.current_player_id(), WHITE);
    }

    #[test]
    fn test_skill_consumes_turn() {
        let mut game = game();
        let freeze = skill_index(&game, SkillKind::Freeze);

        let outcome = game.invoke_skill(BLACK, freeze, None).unwrap();
        assert_eq!(outcome.kind, SkillKind::Freeze);
        assert_eq!(game.current_player_id(), WHITE);
        assert_eq!(game.modifiers().frozen(), Some(WHITE));
    }

    #[test]
    fn test_failed_skill_keeps_turn() {
        let mut game = game();
        let undo = skill_index(&game, SkillKind::Undo);

        let err = game.invoke_skill(BLACK, undo, None).unwrap_err();
        assert_eq!(err, ActionError::Skill(crate::error::SkillError::NothingToUndo));
        assert_eq!(game.current_player_id(), BLACK);
    }

    #[test]
    fn test_skill_gating_errors() {
        let mut game = game();

        assert_eq!(
            game.invoke_skill(WHITE, 0, None),
            Err(ActionError::NotYourTurn(WHITE))
        );
        assert_eq!(
            game.invoke_skill(PlayerId::new(9), 0, None),
            Err(ActionError::UnknownPlayer(PlayerId::new(9)))
        );
        assert_eq!(
            game.invoke_skill(BLACK, 42, None),
            Err(ActionError::UnknownSkill { player: BLACK, index: 42 })
        );
    }

    #[test]
    fn test_cooldowns_tick_on_turn_start() {
        let config = GameConfig::default();
        let mut game = Game::with_clock(&config, ManualClock::new()).unwrap();
        let shatter = skill_index(&game, SkillKind::ShatterBoard);
        if let Some(slot) = game.players[0].skill_mut(shatter) {
            *slot = Skill::new(SkillKind::ShatterBoard).with_cooldown(1);
        }

        game.invoke_skill(BLACK, shatter, None).unwrap();
        assert_eq!(game.players()[0].skills()[shatter].current_cooldown(), 1);

        let restore = skill_index(&game, SkillKind::RestoreBoard);
        game.invoke_skill(WHITE, restore, None).unwrap();

        // Black's turn started: ready again
        assert_eq!(game.current_player_id(), BLACK);
        assert!(game.players()[0].skills()[shatter].is_ready());
    }

    #[test]
    fn test_reset_in_place() {
        let mut game = game();
        game.make_move(Pos::new(7, 7)).unwrap();
        let freeze = skill_index(&game, SkillKind::Freeze);
        game.invoke_skill(WHITE, freeze, None).unwrap();

        game.reset();

        assert!(game.board().occupied().is_empty());
        assert_eq!(game.current_player_id(), BLACK);
        assert_eq!(*game.modifiers(), Modifiers::default());
        assert!(game.result().is_none());
    }
}
