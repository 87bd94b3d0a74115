use serde::{Deserialize, Serialize};

use crate::Params;

/// Who controls the right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Local,
    Computer,
}

/// Ball speed tiers selectable from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedPreset {
    Chill,
    Normal,
    Fast,
}

impl SpeedPreset {
    /// (base, max) ball speed in px/s
    pub fn speeds(self) -> (f32, f32) {
        match self {
            SpeedPreset::Chill => (200.0, 400.0),
            SpeedPreset::Normal => (300.0, 600.0),
            SpeedPreset::Fast => (400.0, 800.0),
        }
    }
}

/// Immutable per-match configuration, supplied by the caller at countdown start
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameSettings {
    pub win_score: u8,
    pub ball_speed: f32,
    pub max_ball_speed: f32,
    pub mode: GameMode,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::from_preset(SpeedPreset::Normal, GameMode::Local)
    }
}

impl GameSettings {
    pub fn from_preset(preset: SpeedPreset, mode: GameMode) -> Self {
        let (ball_speed, max_ball_speed) = preset.speeds();
        Self {
            win_score: Params::WIN_SCORE,
            ball_speed,
            max_ball_speed,
            mode,
        }
    }

    /// Structural validity is the caller's responsibility; trip loudly in debug builds
    pub(crate) fn debug_validate(&self) {
        debug_assert!(self.win_score > 0, "win_score must be positive");
        debug_assert!(self.ball_speed > 0.0, "ball_speed must be positive");
        debug_assert!(
            self.max_ball_speed >= self.ball_speed,
            "max_ball_speed must be >= ball_speed"
        );
    }
}
