//! A simple bot that plays the game
//!
//! Used by the native headless runner and as an attract/demo mode in the
//! browser. It only reads the state and produces the same [`TickInput`] a
//! player would.

use crate::sim::{GamePhase, GameState, TickInput};

/// Default distance kept between the player's bottom edge and the gap bottom
const DEFAULT_MARGIN: f32 = 20.0;

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    pub margin: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
        }
    }
}

impl Autopilot {
    /// Line the player's bottom edge should stay above
    ///
    /// Bottom of the next gap the player hasn't cleared yet, minus the
    /// margin; the middle of the scene when no obstacle is ahead.
    pub fn target_line(&self, state: &GameState) -> f32 {
        let player_left = state.player.rect.x;
        state
            .obstacles
            .iter()
            .find(|o| o.right() > player_left)
            .map(|o| o.gap_bottom() - self.margin)
            .unwrap_or(state.scene.height / 2.0)
    }

    pub fn decide(&self, state: &GameState) -> TickInput {
        let jump = match state.phase {
            GamePhase::Idle | GamePhase::Ended => true,
            GamePhase::Playing => {
                let falling = state.player.vy >= 0.0;
                falling && state.player.rect.bottom() > self.target_line(state)
            }
        };
        TickInput { jump }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Obstacle, tick};

    fn playing_state() -> GameState {
        let mut state = GameState::with_defaults(800.0, 600.0, 11).unwrap();
        state.phase = GamePhase::Playing;
        state
    }

    #[test]
    fn test_starts_and_restarts() {
        let pilot = Autopilot::default();
        let mut state = GameState::with_defaults(800.0, 600.0, 11).unwrap();
        assert!(pilot.decide(&state).jump);
        state.phase = GamePhase::Ended;
        assert!(pilot.decide(&state).jump);
    }

    #[test]
    fn test_targets_scene_middle_without_obstacles() {
        let pilot = Autopilot::default();
        let mut state = playing_state();
        assert_eq!(pilot.target_line(&state), 300.0);

        // Player starts with its bottom edge at 285
        assert!(!pilot.decide(&state).jump);

        state.player.rect.y = 300.0;
        assert!(pilot.decide(&state).jump);

        // Already rising
        state.player.vy = -4.0;
        assert!(!pilot.decide(&state).jump);
    }

    #[test]
    fn test_targets_next_uncleared_gap() {
        let pilot = Autopilot::default();
        let mut state = playing_state();
        // Already behind the player
        state
            .obstacles
            .push_back(Obstacle::with_split(50.0, 80.0, 600.0, 20.0, 200.0));
        // Gap spans 100..300
        state
            .obstacles
            .push_back(Obstacle::with_split(400.0, 80.0, 600.0, 100.0, 200.0));
        assert_eq!(pilot.target_line(&state), 280.0);
        assert!(pilot.decide(&state).jump);
    }

    #[test]
    fn test_survives_several_obstacles() {
        let pilot = Autopilot::default();
        let mut state = GameState::with_defaults(800.0, 600.0, 5).unwrap();
        for _ in 0..1500 {
            let input = pilot.decide(&state);
            tick(&mut state, &input);
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.score >= 3, "score was {}", state.score);
    }
}
