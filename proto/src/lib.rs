//! Wire protocol between a Rockfall host and the simulation core
//!
//! Uses postcard for compact binary serialization

use game_core::{HudUpdate, Intent, InputEvent, SessionControl, Snapshot};
use postcard::{from_bytes, to_allocvec};

// ============================================================================
// C2S Messages (Host to Core)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum C2S {
    /// A steering or fire key went down (`pressed`) or up
    Key { intent: Intent, pressed: bool },

    /// Start, pause/resume, reset or restart
    Control(SessionControl),
}

impl From<C2S> for InputEvent {
    fn from(msg: C2S) -> Self {
        match msg {
            C2S::Key {
                intent,
                pressed: true,
            } => InputEvent::Press(intent),
            C2S::Key {
                intent,
                pressed: false,
            } => InputEvent::Release(intent),
            C2S::Control(control) => InputEvent::Control(control),
        }
    }
}

// ============================================================================
// S2C Messages (Core to Host)
// ============================================================================

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum S2C {
    /// Full render state for one frame
    Frame(Snapshot),

    /// Score, lives, level and overlay changed
    Hud(HudUpdate),
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl C2S {
    /// Serialize C2S message to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize C2S message from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl S2C {
    /// Serialize S2C message to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize S2C message from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Config, Game, Phase, Params};

    #[test]
    fn test_key_message_becomes_input_event() {
        let msg = C2S::Key {
            intent: Intent::Fire,
            pressed: true,
        };
        let bytes = msg.to_bytes().expect("Serialization should succeed");
        let decoded = C2S::from_bytes(&bytes).expect("Deserialization should succeed");
        assert_eq!(decoded, msg);
        assert_eq!(InputEvent::from(decoded), InputEvent::Press(Intent::Fire));

        let release = C2S::Key {
            intent: Intent::Left,
            pressed: false,
        };
        assert_eq!(InputEvent::from(release), InputEvent::Release(Intent::Left));
    }

    #[test]
    fn test_control_message() {
        let msg = C2S::Control(SessionControl::TogglePause);
        let bytes = msg.to_bytes().expect("Serialization should succeed");
        assert_eq!(
            InputEvent::from(C2S::from_bytes(&bytes).expect("Deserialization should succeed")),
            InputEvent::Control(SessionControl::TogglePause)
        );
    }

    #[test]
    fn test_frame_decodes_to_encoded_snapshot() {
        let mut game = Game::new(Config::default(), 5);
        game.start();
        game.set_intent(Intent::Fire, true);
        game.set_intent(Intent::Left, true);
        for _ in 0..200 {
            game.step(Params::FIXED_DT);
        }
        let snapshot = game.snapshot();
        assert!(!snapshot.ship.bullets.is_empty());

        let bytes = S2C::Frame(snapshot.clone())
            .to_bytes()
            .expect("Serialization should succeed");
        match S2C::from_bytes(&bytes).expect("Deserialization should succeed") {
            S2C::Frame(decoded) => assert_eq!(decoded, snapshot),
            other => panic!("Message type mismatch: {other:?}"),
        }
    }

    #[test]
    fn test_hud_message() {
        let update = HudUpdate::new(1200, 2, 2, Phase::Over);
        let bytes = S2C::Hud(update).to_bytes().expect("Serialization should succeed");
        assert_eq!(
            S2C::from_bytes(&bytes).expect("Deserialization should succeed"),
            S2C::Hud(update)
        );
    }

    #[test]
    fn test_truncated_bytes_rejected() {
        let bytes = S2C::Hud(HudUpdate::new(10, 3, 1, Phase::Playing))
            .to_bytes()
            .expect("Serialization should succeed");
        assert!(S2C::from_bytes(&bytes[..bytes.len() - 1]).is_err());
    }
}
