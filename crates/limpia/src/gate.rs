//! Busy-flag gating for duplicate request submission.
//!
//! The client is single-threaded and event-driven; each action class is
//! guarded by a boolean busy flag rather than a mutex. Callers must not fire
//! a second request of the same kind while the flag is set.

use std::cell::Cell;
use std::fmt;

use crate::error::{LimpiaError, Result};

/// Action classes that are gated independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Analyze,
    Save,
    Upload,
    Train,
}

impl Action {
    fn index(self) -> usize {
        match self {
            Action::Analyze => 0,
            Action::Save => 1,
            Action::Upload => 2,
            Action::Train => 3,
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Analyze => "analyze",
            Action::Save => "save",
            Action::Upload => "upload",
            Action::Train => "train",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One busy flag per action class.
#[derive(Debug, Default)]
pub struct ActionGate {
    flags: [Cell<bool>; 4],
}

impl ActionGate {
    /// Create a gate with all flags clear.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a request of this kind is currently in flight.
    pub fn is_busy(&self, action: Action) -> bool {
        self.flags[action.index()].get()
    }

    /// Claim the flag for an action. Fails if a request of the same kind is
    /// already in flight; the returned guard clears the flag on drop.
    #[must_use = "dropping the guard immediately releases the gate"]
    pub fn begin(&self, action: Action) -> Result<GateGuard<'_>> {
        let flag = &self.flags[action.index()];
        if flag.get() {
            return Err(LimpiaError::Busy(action));
        }
        flag.set(true);
        Ok(GateGuard { flag })
    }
}

/// Clears the claimed busy flag when dropped.
pub struct GateGuard<'a> {
    flag: &'a Cell<bool>,
}

impl Drop for GateGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_submission_is_rejected() {
        let gate = ActionGate::new();
        let guard = gate.begin(Action::Save).unwrap();
        assert!(gate.is_busy(Action::Save));
        assert!(matches!(
            gate.begin(Action::Save),
            Err(LimpiaError::Busy(Action::Save))
        ));
        drop(guard);
        assert!(!gate.is_busy(Action::Save));
        assert!(gate.begin(Action::Save).is_ok());
    }

    #[test]
    fn test_actions_are_gated_independently() {
        let gate = ActionGate::new();
        let _saving = gate.begin(Action::Save).unwrap();
        assert!(gate.begin(Action::Analyze).is_ok());
        assert!(gate.begin(Action::Upload).is_ok());
    }
}
