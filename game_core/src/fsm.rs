//! Session phase state machine
//!
//! Only `Playing` advances the simulation; every other phase is inert.

use serde::{Deserialize, Serialize};

/// Game phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Menu,
    Playing,
    Paused,
    Over,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Start,
    Pause,
    Resume,
    LivesExhausted,
    Restart,
    Reset,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    success: bool,
    from_phase: Phase,
    to_phase: Phase,
    action: SessionAction,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    pub fn from_phase(&self) -> Phase {
        self.from_phase
    }

    pub fn to_phase(&self) -> Phase {
        self.to_phase
    }

    pub fn action(&self) -> SessionAction {
        self.action
    }

    /// Whether this transition begins a fresh round
    pub fn starts_round(&self) -> bool {
        self.success && matches!(self.action, SessionAction::Start | SessionAction::Restart)
    }
}

/// Session finite state machine
#[derive(Debug, Clone)]
pub struct PhaseFsm {
    phase: Phase,
}

impl PhaseFsm {
    pub fn new() -> Self {
        Self { phase: Phase::Menu }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn can_transition(&self, action: SessionAction) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition; on failure the phase is unchanged
    pub fn transition(&mut self, action: SessionAction) -> TransitionResult {
        let from_phase = self.phase;

        if let Some(next) = self.next_phase(action) {
            self.phase = next;
            TransitionResult {
                success: true,
                from_phase,
                to_phase: next,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_phase,
                to_phase: from_phase,
                action,
            }
        }
    }

    fn next_phase(&self, action: SessionAction) -> Option<Phase> {
        match (self.phase, action) {
            (Phase::Menu, SessionAction::Start) => Some(Phase::Playing),

            (Phase::Playing, SessionAction::Pause) => Some(Phase::Paused),
            (Phase::Playing, SessionAction::LivesExhausted) => Some(Phase::Over),
            (Phase::Playing, SessionAction::Reset) => Some(Phase::Menu),

            (Phase::Paused, SessionAction::Resume) => Some(Phase::Playing),
            (Phase::Paused, SessionAction::Reset) => Some(Phase::Menu),

            (Phase::Over, SessionAction::Start) => Some(Phase::Playing),
            (Phase::Over, SessionAction::Restart) => Some(Phase::Playing),
            (Phase::Over, SessionAction::Reset) => Some(Phase::Menu),

            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }
}

impl Default for PhaseFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase() {
        let fsm = PhaseFsm::new();
        assert_eq!(fsm.phase(), Phase::Menu);
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = PhaseFsm::new();
        let result = fsm.transition(SessionAction::Start);
        assert!(result.success());
        assert!(result.starts_round());
        assert_eq!(result.from_phase(), Phase::Menu);
        assert_eq!(fsm.phase(), Phase::Playing);
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = PhaseFsm::new();
        let result = fsm.transition(SessionAction::Pause);
        assert!(!result.success());
        assert!(!result.starts_round());
        assert_eq!(result.to_phase(), Phase::Menu);
        assert_eq!(fsm.phase(), Phase::Menu);
        assert!(!fsm.can_transition(SessionAction::Reset), "menu has nothing to reset");
    }

    #[test]
    fn test_pause_resume_flow() {
        let mut fsm = PhaseFsm::new();
        fsm.transition(SessionAction::Start);
        fsm.transition(SessionAction::Pause);
        assert_eq!(fsm.phase(), Phase::Paused);
        assert!(!fsm.can_transition(SessionAction::LivesExhausted));
        fsm.transition(SessionAction::Resume);
        assert!(fsm.is_playing());
    }

    #[test]
    fn test_game_over_flow() {
        let mut fsm = PhaseFsm::new();
        fsm.transition(SessionAction::Start);
        fsm.transition(SessionAction::LivesExhausted);
        assert!(fsm.is_over());
        assert!(!fsm.can_transition(SessionAction::Pause));
        let result = fsm.transition(SessionAction::Restart);
        assert!(result.starts_round());
        assert_eq!(fsm.phase(), Phase::Playing);
    }

    #[test]
    fn test_reset_from_every_active_phase() {
        for setup in [
            vec![SessionAction::Start],
            vec![SessionAction::Start, SessionAction::Pause],
            vec![SessionAction::Start, SessionAction::LivesExhausted],
        ] {
            let mut fsm = PhaseFsm::new();
            for action in setup {
                fsm.transition(action);
            }
            assert!(fsm.transition(SessionAction::Reset).success());
            assert_eq!(fsm.phase(), Phase::Menu);
        }
    }

    #[test]
    fn test_start_rejected_while_playing() {
        let mut fsm = PhaseFsm::new();
        fsm.transition(SessionAction::Start);
        assert!(!fsm.transition(SessionAction::Start).success());
        assert!(!fsm.transition(SessionAction::Restart).success());
    }
}
