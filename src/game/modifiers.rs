//! Cross-cutting turn modifiers.
//!
//! Three independent modifiers can be active at once, but never two of the
//! same kind: one frozen player, one shattered board, one extra-turns
//! window. Activating a modifier that is already active fails and leaves the
//! existing one untouched.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// A time-boxed window during which `holder` keeps the turn after placing.
///
/// `deadline` is absolute, measured on the game clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtraTurnsWindow {
    pub holder: PlayerId,
    pub deadline: Duration,
}

impl ExtraTurnsWindow {
    /// Open while the clock is strictly before the deadline.
    #[must_use]
    pub fn is_open(&self, now: Duration) -> bool {
        now < self.deadline
    }
}

/// Modifier state of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    frozen: Option<PlayerId>,
    shattered_by: Option<PlayerId>,
    extra_turns: Option<ExtraTurnsWindow>,
}

impl Modifiers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Freeze ===

    #[must_use]
    pub fn frozen(&self) -> Option<PlayerId> {
        self.frozen
    }

    #[must_use]
    pub fn is_frozen(&self, player: PlayerId) -> bool {
        self.frozen == Some(player)
    }

    /// Freeze `player`. Fails if anyone is already frozen.
    pub fn freeze(&mut self, player: PlayerId) -> bool {
        if self.frozen.is_some() {
            return false;
        }
        self.frozen = Some(player);
        true
    }

    /// Lift the freeze, returning who was frozen.
    pub fn unfreeze(&mut self) -> Option<PlayerId> {
        self.frozen.take()
    }

    // === Shattered board ===

    #[must_use]
    pub fn shattered_by(&self) -> Option<PlayerId> {
        self.shattered_by
    }

    #[must_use]
    pub fn is_shattered(&self) -> bool {
        self.shattered_by.is_some()
    }

    /// Shatter the board. Fails if it is already shattered.
    pub fn shatter(&mut self, by: PlayerId) -> bool {
        if self.shattered_by.is_some() {
            return false;
        }
        self.shattered_by = Some(by);
        true
    }

    /// Restore the board, returning who had shattered it.
    pub fn restore(&mut self) -> Option<PlayerId> {
        self.shattered_by.take()
    }

    // === Extra turns ===

    #[must_use]
    pub fn extra_turns(&self) -> Option<ExtraTurnsWindow> {
        self.extra_turns
    }

    /// Open a window for `holder`. Fails if a window is already stored.
    pub fn open_extra_turns(&mut self, holder: PlayerId, deadline: Duration) -> bool {
        if self.extra_turns.is_some() {
            return false;
        }
        self.extra_turns = Some(ExtraTurnsWindow { holder, deadline });
        true
    }

    pub fn close_extra_turns(&mut self) -> Option<ExtraTurnsWindow> {
        self.extra_turns.take()
    }

    /// Drop the window if its deadline has passed. Returns true if one was
    /// dropped.
    pub fn expire_extra_turns(&mut self, now: Duration) -> bool {
        match self.extra_turns {
            Some(window) if !window.is_open(now) => {
                self.extra_turns = None;
                true
            }
            _ => false,
        }
    }

    /// True if `player` holds a window that is still open at `now`.
    #[must_use]
    pub fn has_open_window(&self, player: PlayerId, now: Duration) -> bool {
        self.extra_turns
            .is_some_and(|w| w.holder == player && w.is_open(now))
    }

    /// Deactivate everything.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P1: PlayerId = PlayerId::new(1);
    const P2: PlayerId = PlayerId::new(2);

    #[test]
    fn test_second_freeze_keeps_first() {
        let mut m = Modifiers::new();

        assert!(m.freeze(P2));
        assert!(!m.freeze(P1));
        assert_eq!(m.frozen(), Some(P2));

        assert_eq!(m.unfreeze(), Some(P2));
        assert_eq!(m.frozen(), None);
        assert_eq!(m.unfreeze(), None);
    }

    #[test]
    fn test_shatter_and_restore() {
        let mut m = Modifiers::new();

        assert!(m.shatter(P1));
        assert!(!m.shatter(P2));
        assert_eq!(m.shattered_by(), Some(P1));

        assert_eq!(m.restore(), Some(P1));
        assert!(!m.is_shattered());
    }

    #[test]
    fn test_extra_turns_window() {
        let mut m = Modifiers::new();
        let deadline = Duration::from_secs(5);

        assert!(m.open_extra_turns(P1, deadline));
        assert!(!m.open_extra_turns(P2, Duration::from_secs(9)));
        assert_eq!(m.extra_turns().map(|w| w.holder), Some(P1));

        assert!(m.has_open_window(P1, Duration::from_secs(4)));
        assert!(!m.has_open_window(P2, Duration::from_secs(4)));
        // The deadline itself is already closed
        assert!(!m.has_open_window(P1, deadline));

        assert!(!m.expire_extra_turns(Duration::from_secs(4)));
        assert!(m.expire_extra_turns(deadline));
        assert_eq!(m.extra_turns(), None);
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut m = Modifiers::new();

        assert!(m.freeze(P1));
        assert!(m.shatter(P2));
        assert!(m.open_extra_turns(P2, Duration::from_secs(1)));

        m.clear();
        assert_eq!(m, Modifiers::default());
    }
}
