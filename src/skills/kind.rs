//! The skill catalog.
//!
//! Each `SkillKind` carries its own precondition and effect. The uniform
//! cooldown wrapper lives in `Skill`; nothing here touches cooldowns or
//! turn order.

use serde::{Deserialize, Serialize};

use super::SkillOutcome;
use super::AnimationHint;
use crate::board::Pos;
use crate::core::PlayerId;
use crate::error::SkillError;
use crate::game::Game;

/// A special ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillKind {
    /// Take back two stones: the opponent's last one, then own stones.
    Undo,
    /// Throw out one opponent stone.
    RemoveLastStone,
    /// Freeze the opponent until they use Unfreeze.
    Freeze,
    /// Lift a freeze on yourself.
    Unfreeze,
    /// Shatter the board; only Restore Board can be used afterwards.
    ShatterBoard,
    /// Restore a shattered board.
    RestoreBoard,
    /// Keep the turn after placing, for a few seconds.
    ExtraTurns,
    /// Clear a random share of all stones.
    Sweep,
    /// Seal an empty cell. Needs a target; not in the default catalog.
    Block,
}

impl SkillKind {
    /// Skills attached to both players at session start.
    pub const DEFAULT_CATALOG: [SkillKind; 8] = [
        SkillKind::Undo,
        SkillKind::RemoveLastStone,
        SkillKind::Freeze,
        SkillKind::Unfreeze,
        SkillKind::ShatterBoard,
        SkillKind::RestoreBoard,
        SkillKind::ExtraTurns,
        SkillKind::Sweep,
    ];

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SkillKind::Undo => "Undo",
            SkillKind::RemoveLastStone => "Remove Last Stone",
            SkillKind::Freeze => "Freeze",
            SkillKind::Unfreeze => "Unfreeze",
            SkillKind::ShatterBoard => "Shatter Board",
            SkillKind::RestoreBoard => "Restore Board",
            SkillKind::ExtraTurns => "Extra Turns",
            SkillKind::Sweep => "Sweep",
            SkillKind::Block => "Block",
        }
    }

    /// One-line description for skill buttons.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            SkillKind::Undo => "Take back two stones, the opponent's first",
            SkillKind::RemoveLastStone => "Remove the opponent's last stone",
            SkillKind::Freeze => "Freeze the opponent; they can only use Unfreeze",
            SkillKind::Unfreeze => "Break out of a freeze",
            SkillKind::ShatterBoard => "Smash the board; the opponent must restore it",
            SkillKind::RestoreBoard => "Put a shattered board back together",
            SkillKind::ExtraTurns => "Keep placing stones for five seconds",
            SkillKind::Sweep => "Sweep a random share of stones off the board",
            SkillKind::Block => "Forbid a cell for the rest of the game",
        }
    }

    /// Targeted skills need a board coordinate after activation.
    #[must_use]
    pub fn is_targeted(self) -> bool {
        matches!(self, SkillKind::Block)
    }

    /// Run the skill's effect for `player`.
    ///
    /// On error nothing has changed.
    pub fn apply(
        self,
        game: &mut Game,
        player: PlayerId,
        target: Option<Pos>,
    ) -> Result<SkillOutcome, SkillError> {
        match self {
            SkillKind::Undo => undo(game, player),
            SkillKind::RemoveLastStone => remove_last_stone(game, player),
            SkillKind::Freeze => {
                let opponent = game.opponent_of(player);
                if !game.modifiers_mut().freeze(opponent) {
                    return Err(SkillError::AlreadyFrozen);
                }
                Ok(SkillOutcome::new(
                    self,
                    format!("{} is frozen and can only use Unfreeze", game.display_name(opponent)),
                ))
            }
            SkillKind::Unfreeze => {
                match game.modifiers().frozen() {
                    None => return Err(SkillError::NobodyFrozen),
                    Some(frozen) if frozen != player => return Err(SkillError::NotFrozen),
                    Some(_) => {}
                }
                game.modifiers_mut().unfreeze();
                Ok(SkillOutcome::new(self, "the freeze is lifted"))
            }
            SkillKind::ShatterBoard => {
                if !game.modifiers_mut().shatter(player) {
                    return Err(SkillError::AlreadyShattered);
                }
                Ok(SkillOutcome::new(
                    self,
                    format!(
                        "{} shattered the board! The opponent can use Restore Board",
                        game.display_name(player)
                    ),
                ))
            }
            SkillKind::RestoreBoard => {
                if game.modifiers_mut().restore().is_none() {
                    return Err(SkillError::NotShattered);
                }
                game.clear_result();
                Ok(SkillOutcome::new(self, "the board is restored; play on"))
            }
            SkillKind::ExtraTurns => {
                let now = game.now();
                let window = game.settings().extra_turns_window;
                game.modifiers_mut().expire_extra_turns(now);
                if !game.modifiers_mut().open_extra_turns(player, now + window) {
                    return Err(SkillError::ExtraTurnsActive);
                }
                Ok(SkillOutcome::new(
                    self,
                    format!(
                        "{} keeps the turn for {:.1} seconds",
                        game.display_name(player),
                        window.as_secs_f64()
                    ),
                ))
            }
            SkillKind::Sweep => sweep(game),
            SkillKind::Block => {
                let pos = target.ok_or(SkillError::TargetRequired)?;
                if !game.board().in_bounds(pos) {
                    return Err(SkillError::OutOfBounds(pos));
                }
                if !game.board_mut().block(pos) {
                    return Err(SkillError::CellOccupied(pos));
                }
                Ok(SkillOutcome::new(self, format!("cell {} is blocked", pos)))
            }
        }
    }
}

impl std::fmt::Display for SkillKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn undo(game: &mut Game, player: PlayerId) -> Result<SkillOutcome, SkillError> {
    if game.board().count_stones(player) == 0 {
        return Err(SkillError::NothingToUndo);
    }

    // Two stones in total: the opponent's last one if any, then own stones.
    let opponent = game.opponent_of(player);
    let mut removed = Vec::with_capacity(2);
    if let Some(pos) = game.board().last_stone_of(opponent) {
        game.board_mut().remove_piece(pos);
        removed.push(pos);
    }
    while removed.len() < 2 {
        let Some(pos) = game.board().last_stone_of(player) else {
            break;
        };
        game.board_mut().remove_piece(pos);
        removed.push(pos);
    }

    Ok(SkillOutcome::new(SkillKind::Undo, "move taken back").with_removed(removed))
}

fn remove_last_stone(game: &mut Game, player: PlayerId) -> Result<SkillOutcome, SkillError> {
    let opponent = game.opponent_of(player);
    let pos = game
        .board()
        .last_stone_of(opponent)
        .ok_or(SkillError::OpponentHasNoStones)?;

    game.board_mut().remove_piece(pos);

    Ok(
        SkillOutcome::new(SkillKind::RemoveLastStone, "the opponent's last stone flies away")
            .with_removed([pos])
            .with_animation(AnimationHint { pos, owner: opponent }),
    )
}

fn sweep(game: &mut Game) -> Result<SkillOutcome, SkillError> {
    let mut pool = game.board().occupied();
    if pool.is_empty() {
        return Err(SkillError::BoardEmpty);
    }

    let settings = game.settings();
    let (lo, hi) = sweep_bounds(pool.len(), settings.sweep_min_percent, settings.sweep_max_percent);
    let count = game.rng_mut().gen_range_inclusive(lo..=hi).min(pool.len());
    let swept = game.rng_mut().take_without_replacement(&mut pool, count);

    for &pos in &swept {
        game.board_mut().remove_piece(pos);
    }

    Ok(SkillOutcome::new(SkillKind::Sweep, format!("swept away {} stones", swept.len()))
        .with_removed(swept))
}

/// Inclusive range of stones Sweep removes from `occupied` stones.
///
/// The lower bound is `ceil(occupied * min%)` but at least one; the upper
/// bound is `floor(occupied * max%)`, raised to the lower bound when the
/// rounding would make the range empty.
#[must_use]
pub fn sweep_bounds(occupied: usize, min_percent: u32, max_percent: u32) -> (usize, usize) {
    let min = min_percent as usize;
    let max = max_percent as usize;
    let lo = (occupied * min).div_ceil(100).max(1).min(occupied);
    let hi = (occupied * max / 100).max(lo).min(occupied);
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog() {
        assert_eq!(SkillKind::DEFAULT_CATALOG.len(), 8);
        assert!(!SkillKind::DEFAULT_CATALOG.contains(&SkillKind::Block));
        assert!(SkillKind::DEFAULT_CATALOG.iter().all(|k| !k.is_targeted()));
        assert!(SkillKind::Block.is_targeted());
    }

    #[test]
    fn test_names() {
        assert_eq!(SkillKind::RemoveLastStone.to_string(), "Remove Last Stone");
        assert_eq!(SkillKind::RestoreBoard.name(), "Restore Board");
        assert!(!SkillKind::Sweep.description().is_empty());
    }

    #[test]
    fn test_sweep_bounds() {
        assert_eq!(sweep_bounds(10, 30, 60), (3, 6));
        assert_eq!(sweep_bounds(7, 30, 60), (3, 4));
        assert_eq!(sweep_bounds(2, 30, 60), (1, 1));
        // Rounding would leave an empty range; one stone still goes
        assert_eq!(sweep_bounds(1, 30, 60), (1, 1));
        assert_eq!(sweep_bounds(5, 30, 60), (2, 3));
    }

    #[test]
    fn test_sweep_bounds_never_exceed_occupied() {
        for n in 1..=225 {
            let (lo, hi) = sweep_bounds(n, 30, 60);
            assert!(lo >= 1);
            assert!(lo <= hi);
            assert!(hi <= n);
        }
        assert_eq!(sweep_bounds(4, 100, 100), (4, 4));
    }
}
