//! Data-driven game balance
//!
//! Every gameplay constant lives here, owned by one game instance, so two
//! games (or two tests) never share mutable globals.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;

/// Gameplay constants for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Scroll speed of obstacles and floor (background moves at half)
    pub velocity: f32,
    /// Ticks between obstacle spawns
    pub obstacle_time: u32,
    /// Gap height in every obstacle
    pub spacing: f32,
    /// Minimum distance of a gap from the scene top and the floor top
    pub gap_margin: f32,
    pub floor_height: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub clamp_tolerance: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub player_x: f32,
    pub flash_decay: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            velocity: VELOCITY,
            obstacle_time: OBSTACLE_TIME,
            spacing: SPACING,
            gap_margin: GAP_MARGIN,
            floor_height: FLOOR_HEIGHT,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            clamp_tolerance: CLAMP_TOLERANCE,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_x: PLAYER_X,
            flash_decay: FLASH_DECAY,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON document; missing keys keep defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> String {
        // Plain struct of numbers, serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), GameError> {
        let fields = [
            ("velocity", self.velocity),
            ("spacing", self.spacing),
            ("gap_margin", self.gap_margin),
            ("floor_height", self.floor_height),
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("clamp_tolerance", self.clamp_tolerance),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("player_x", self.player_x),
            ("flash_decay", self.flash_decay),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(GameError::InvalidTuning(format!("{name} is not finite")));
        }

        if self.velocity >= 0.0 {
            return Err(GameError::InvalidTuning(
                "velocity must be negative (scene scrolls left)".into(),
            ));
        }
        if self.jump_impulse >= 0.0 {
            return Err(GameError::InvalidTuning(
                "jump_impulse must be negative (upwards)".into(),
            ));
        }
        if self.spacing <= 0.0 || self.player_width <= 0.0 || self.player_height <= 0.0 {
            return Err(GameError::InvalidTuning(
                "spacing and player size must be positive".into(),
            ));
        }
        if self.gap_margin < 0.0 || self.floor_height < 0.0 || self.clamp_tolerance < 0.0 {
            return Err(GameError::InvalidTuning(
                "margins, floor height and tolerance cannot be negative".into(),
            ));
        }
        if self.flash_decay <= 0.0 {
            return Err(GameError::InvalidTuning("flash_decay must be positive".into()));
        }
        Ok(())
    }
}
