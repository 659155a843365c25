//! Per-frame simulation tick
//!
//! Core game loop that advances the simulation deterministically.

use super::state::{GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump / start / restart (space, tap)
    pub jump: bool,
}

/// Advance the game by one tick
///
/// Input is applied first, so a jump pressed since the previous frame is
/// visible to this tick's update and never mid-update. Events pile up in
/// the state until the host calls [`GameState::drain_events`]; only the
/// newest [`MAX_PENDING_EVENTS`](super::state::MAX_PENDING_EVENTS) are kept.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.jump {
        state.handle_jump();
    }

    // Nothing moves until the first jump
    if state.phase == GamePhase::Idle {
        return;
    }

    update(state);
}

/// The fixed-order update; later steps depend on positions from earlier ones
fn update(state: &mut GameState) {
    state.time_ticks += 1;

    // Collisions use positions from the end of the previous tick
    let player = state.player.rect;
    let hit_obstacle = state.obstacles.iter().any(|o| o.collides(&player));
    if hit_obstacle || state.floor.rect.overlaps(&player) {
        state.end_game();
    }

    // Death animation and flash keep running after game over
    let floor_y = state.floor_y();
    state.flash.update();
    state.player.update(&state.tuning, floor_y);

    if state.phase == GamePhase::Ended {
        return;
    }

    state.background.update();
    state.floor.update();
    let velocity = state.tuning.velocity;
    for obstacle in state.obstacles.iter_mut() {
        obstacle.update(velocity);
    }

    // Several obstacles may be passed in one tick
    let player_center_x = state.player.center_x();
    let mut passed = 0;
    for obstacle in state.obstacles.iter_mut() {
        if obstacle.try_pass(player_center_x) {
            passed += 1;
        }
    }
    for _ in 0..passed {
        state.add_point();
    }

    // Spawn spacing is monotonic, so at most one leaves per tick
    if state.obstacles.front().is_some_and(|o| o.right() <= 0.0) {
        state.obstacles.pop_front();
        log::debug!("Despawned obstacle ({} live)", state.obstacles.len());
    }

    if state.next_obstacle == 0 {
        state.spawn_obstacle();
        state.next_obstacle = state.tuning.obstacle_time;
    } else {
        state.next_obstacle -= 1;
    }
}
