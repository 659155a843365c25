//! Obstacles: a top and a bottom half separated by a fixed gap

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::Scene;
use crate::tuning::Tuning;

/// A pair of columns moving left together
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Shared horizontal position of both halves
    pub x: f32,
    pub width: f32,
    /// Spans [0, split_y)
    pub top: Rect,
    /// Spans [split_y + spacing, scene height)
    pub bottom: Rect,
    /// Set once the player's centre has crossed this obstacle's centre
    pub passed: bool,
}

impl Obstacle {
    /// Spawn at the right edge of the scene with a random gap position
    ///
    /// The gap keeps at least `gap_margin` from the scene top and from the
    /// floor top.
    pub fn spawn<R: Rng>(
        scene: Scene,
        floor_y: f32,
        width: f32,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Self {
        let range = (floor_y - 2.0 * tuning.gap_margin - tuning.spacing).max(0.0);
        let split_y = rng.random::<f32>() * range + tuning.gap_margin;
        Self::with_split(scene.width, width, scene.height, split_y, tuning.spacing)
    }

    /// Build an obstacle with a known gap position
    pub fn with_split(x: f32, width: f32, scene_height: f32, split_y: f32, spacing: f32) -> Self {
        let bottom_y = split_y + spacing;
        Self {
            x,
            width,
            top: Rect::new(x, 0.0, width, split_y),
            bottom: Rect::new(x, bottom_y, width, scene_height - bottom_y),
            passed: false,
        }
    }

    pub fn update(&mut self, velocity: f32) {
        self.x += velocity;
        self.top.x = self.x;
        self.bottom.x = self.x;
    }

    /// Whether `other` overlaps either half
    pub fn collides(&self, other: &Rect) -> bool {
        self.top.overlaps(other) || self.bottom.overlaps(other)
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top of the gap
    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.top.bottom()
    }

    /// Bottom of the gap
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.bottom.y
    }

    /// Mark as passed if `player_center_x` is beyond the centre
    ///
    /// Returns true only on the tick the flag flips.
    pub fn try_pass(&mut self, player_center_x: f32) -> bool {
        if !self.passed && player_center_x > self.center_x() {
            self.passed = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn scene() -> Scene {
        Scene::new(800.0, 600.0).unwrap()
    }

    #[test]
    fn test_spawns_at_right_edge() {
        let mut rng = Pcg32::seed_from_u64(1);
        let obstacle = Obstacle::spawn(scene(), 500.0, 80.0, &Tuning::default(), &mut rng);
        assert_eq!(obstacle.x, 800.0);
        assert_eq!(obstacle.top.x, 800.0);
        assert_eq!(obstacle.bottom.x, 800.0);
        assert_eq!(obstacle.top.y, 0.0);
        assert!(!obstacle.passed);
    }

    #[test]
    fn test_update_moves_both_halves() {
        let mut obstacle = Obstacle::with_split(800.0, 80.0, 600.0, 150.0, 200.0);
        obstacle.update(-2.0);
        assert_eq!(obstacle.x, 798.0);
        assert_eq!(obstacle.top.x, 798.0);
        assert_eq!(obstacle.bottom.x, 798.0);
    }

    #[test]
    fn test_collision_with_halves_only() {
        let obstacle = Obstacle::with_split(200.0, 80.0, 600.0, 150.0, 200.0);
        // In the top half
        assert!(obstacle.collides(&Rect::new(210.0, 100.0, 20.0, 20.0)));
        // In the bottom half
        assert!(obstacle.collides(&Rect::new(210.0, 400.0, 20.0, 20.0)));
        // Inside the gap
        assert!(!obstacle.collides(&Rect::new(210.0, 200.0, 20.0, 100.0)));
        // Left of the obstacle
        assert!(!obstacle.collides(&Rect::new(100.0, 100.0, 20.0, 20.0)));
    }

    #[test]
    fn test_pass_flips_once() {
        let mut obstacle = Obstacle::with_split(200.0, 80.0, 600.0, 150.0, 200.0);
        // Centre at 240
        assert!(!obstacle.try_pass(240.0));
        assert!(obstacle.try_pass(240.5));
        assert!(obstacle.passed);
        assert!(!obstacle.try_pass(300.0));
    }

    proptest! {
        #[test]
        fn gap_layout_holds_for_any_seed(seed in any::<u64>(), height in 400.0f32..1200.0) {
            let tuning = Tuning::default();
            let scene = Scene::new(800.0, height).unwrap();
            let floor_y = height - tuning.floor_height;
            let mut rng = Pcg32::seed_from_u64(seed);
            let obstacle = Obstacle::spawn(scene, floor_y, 80.0, &tuning, &mut rng);

            let total = obstacle.top.h + tuning.spacing + obstacle.bottom.h;
            prop_assert!((total - height).abs() < 1e-3);
            prop_assert!(obstacle.top.h >= tuning.gap_margin);
            prop_assert!(obstacle.bottom.h >= tuning.gap_margin);
            prop_assert!(floor_y - obstacle.gap_bottom() >= tuning.gap_margin - 1e-3);
        }
    }
}
