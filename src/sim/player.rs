//! The player avatar ("Joe")
//!
//! Only moves vertically: constant gravity, an instantaneous jump impulse,
//! and a soft clamp to the scene.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Vertical velocity (pixels/tick, positive = down)
    pub vy: f32,
}

impl Player {
    /// Create the player at its resting start position above `floor_y`
    pub fn new(tuning: &Tuning, floor_y: f32) -> Self {
        Self {
            rect: Rect::new(
                tuning.player_x,
                Self::start_y(tuning, floor_y),
                tuning.player_width,
                tuning.player_height,
            ),
            vy: 0.0,
        }
    }

    fn start_y(tuning: &Tuning, floor_y: f32) -> f32 {
        floor_y / 2.0 - tuning.player_height / 2.0
    }

    /// Back to the start position, not moving
    pub fn reset(&mut self, tuning: &Tuning, floor_y: f32) {
        self.rect.y = Self::start_y(tuning, floor_y);
        self.vy = 0.0;
    }

    /// Integrate one tick and clamp to `[-tolerance, floor_y - h + tolerance]`
    pub fn update(&mut self, tuning: &Tuning, floor_y: f32) {
        self.rect.y += self.vy;
        self.vy += tuning.gravity;

        let tolerance = tuning.clamp_tolerance;
        let resting_y = floor_y - self.rect.h + tolerance;
        if self.rect.y > resting_y {
            self.rect.y = resting_y;
        } else if self.rect.y < -tolerance {
            self.rect.y = -tolerance;
        }
    }

    /// Overrides whatever velocity the player had
    pub fn jump(&mut self, tuning: &Tuning) {
        self.vy = tuning.jump_impulse;
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.rect.center().x
    }

    /// Sprite tilt in radians: nose follows velocity, at most 45° upward
    pub fn tilt(&self) -> f32 {
        (self.vy / 5.0).atan().max(-std::f32::consts::FRAC_PI_4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FLOOR_Y: f32 = 500.0;

    #[test]
    fn test_start_position() {
        let tuning = Tuning::default();
        let player = Player::new(&tuning, FLOOR_Y);
        assert_eq!(player.rect.x, 200.0);
        assert_eq!(player.rect.y, 250.0 - 35.0);
        assert_eq!(player.rect.w, 100.0);
        assert_eq!(player.rect.h, 70.0);
        assert_eq!(player.vy, 0.0);
    }

    #[test]
    fn test_gravity_accumulates() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning, FLOOR_Y);
        let y0 = player.rect.y;
        player.update(&tuning, FLOOR_Y);
        // Position moves with the old velocity, then velocity grows
        assert_eq!(player.rect.y, y0);
        assert_eq!(player.vy, 0.75);
        player.update(&tuning, FLOOR_Y);
        assert_eq!(player.rect.y, y0 + 0.75);
        assert_eq!(player.vy, 1.5);
    }

    #[test]
    fn test_rests_on_floor_with_overlap() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning, FLOOR_Y);
        // 430 + 20 lands past the resting line at 440
        player.rect.y = 430.0;
        player.vy = 20.0;
        player.update(&tuning, FLOOR_Y);
        assert_eq!(player.rect.y, FLOOR_Y - 70.0 + 10.0);
        assert_eq!(player.vy, 20.75);
    }

    #[test]
    fn test_soft_ceiling() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning, FLOOR_Y);
        player.rect.y = 3.0;
        player.vy = -30.0;
        player.update(&tuning, FLOOR_Y);
        assert_eq!(player.rect.y, -10.0);
    }

    #[test]
    fn test_reset() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning, FLOOR_Y);
        player.rect.y = 12.0;
        player.vy = 7.0;
        player.reset(&tuning, FLOOR_Y);
        assert_eq!(player.rect.y, 215.0);
        assert_eq!(player.vy, 0.0);
    }

    #[test]
    fn test_tilt_is_capped_nose_up() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning, FLOOR_Y);
        player.vy = -10.0;
        assert_eq!(player.tilt(), -std::f32::consts::FRAC_PI_4);
        player.vy = 0.0;
        assert_eq!(player.tilt(), 0.0);
        player.vy = 20.0;
        assert!(player.tilt() > 1.0);
    }

    proptest! {
        #[test]
        fn update_stays_in_bounds(y in -2000.0f32..2000.0, vy in -500.0f32..500.0) {
            let tuning = Tuning::default();
            let mut player = Player::new(&tuning, FLOOR_Y);
            player.rect.y = y;
            player.vy = vy;
            player.update(&tuning, FLOOR_Y);
            prop_assert!(player.rect.y >= -10.0);
            prop_assert!(player.rect.y <= FLOOR_Y - player.rect.h + 10.0);
        }

        #[test]
        fn jump_sets_exact_impulse(vy in -1000.0f32..1000.0) {
            let tuning = Tuning::default();
            let mut player = Player::new(&tuning, FLOOR_Y);
            player.vy = vy;
            player.jump(&tuning);
            prop_assert_eq!(player.vy, -10.0);
        }
    }
}
