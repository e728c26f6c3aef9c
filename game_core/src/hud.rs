//! HUD notifications for whatever draws score, lives and overlays.

use serde::{Deserialize, Serialize};

use crate::fsm::Phase;

/// Which full-screen overlay the host should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    None,
    Title,
    Paused,
    GameOver { final_score: u32 },
}

impl Overlay {
    pub fn for_phase(phase: Phase, score: u32) -> Self {
        match phase {
            Phase::Menu => Self::Title,
            Phase::Playing => Self::None,
            Phase::Paused => Self::Paused,
            Phase::Over => Self::GameOver { final_score: score },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudUpdate {
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub phase: Phase,
    pub overlay: Overlay,
}

impl HudUpdate {
    pub fn new(score: u32, lives: u32, level: u32, phase: Phase) -> Self {
        Self {
            score,
            lives,
            level,
            phase,
            overlay: Overlay::for_phase(phase, score),
        }
    }
}

/// Receives HUD values after transitions and after ticks that change them
pub trait HudListener {
    fn on_hud(&mut self, update: &HudUpdate);
}

impl<F> HudListener for F
where
    F: FnMut(&HudUpdate),
{
    fn on_hud(&mut self, update: &HudUpdate) {
        self(update)
    }
}
