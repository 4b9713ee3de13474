//! Session progress and the basic→advanced gate.

use super::Level;

/// Raised when a run is started at a level the session has not unlocked yet.
/// The only real error in the core; every other violated precondition is a
/// no-op because it corresponds to a UI state that cannot be reached.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Complete the Basic level with 70% or higher to unlock Advanced")]
pub struct GateError;

/// What the session has unlocked so far. Lives in the dialogue state for the
/// session only; it is never written anywhere. The flag goes up once and
/// never comes back down, regardless of later scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Progress {
    passed_basic: bool,
}

impl Progress {
    pub fn has_passed_basic(self) -> bool {
        self.passed_basic
    }

    pub fn can_select(self, level: Level) -> bool {
        match level {
            Level::Basic => true,
            Level::Advanced => self.passed_basic,
        }
    }

    pub(crate) fn record_basic_pass(&mut self) {
        self.passed_basic = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advanced_is_locked_by_default() {
        let progress = Progress::default();
        assert!(progress.can_select(Level::Basic));
        assert!(!progress.can_select(Level::Advanced));
    }

    #[test]
    fn passing_basic_unlocks_advanced() {
        let mut progress = Progress::default();
        progress.record_basic_pass();
        assert!(progress.has_passed_basic());
        assert!(progress.can_select(Level::Advanced));
    }
}
