//! Flappy Joe - A side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `renderer`: Render surface abstraction and frame drawing
//! - `platform`: Browser/native platform abstraction (input)
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod autopilot;
pub mod error;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use error::GameError;
pub use highscores::HighScore;
pub use settings::Settings;
pub use tuning::Tuning;

/// Reference gameplay values (defaults for [`Tuning`])
pub mod consts {
    /// Horizontal speed of obstacles and floor (pixels/tick, negative = left)
    pub const VELOCITY: f32 = -2.0;
    /// Ticks between obstacle spawns
    pub const OBSTACLE_TIME: u32 = 200;
    /// Vertical size of the gap in every obstacle
    pub const SPACING: f32 = 200.0;
    /// Minimum distance between a gap and the scene top / floor top
    pub const GAP_MARGIN: f32 = 50.0;
    /// Height of the floor strip
    pub const FLOOR_HEIGHT: f32 = 100.0;

    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY: f32 = 0.75;
    /// Vertical velocity set by a jump
    pub const JUMP_IMPULSE: f32 = -10.0;
    /// How far the player may overlap the floor or leave the top of the scene
    pub const CLAMP_TOLERANCE: f32 = 10.0;

    /// Player bounding box
    pub const PLAYER_WIDTH: f32 = 100.0;
    pub const PLAYER_HEIGHT: f32 = 70.0;
    /// Player horizontal position (fixed)
    pub const PLAYER_X: f32 = 200.0;

    /// Alpha lost by the game-over flash each tick
    pub const FLASH_DECAY: f32 = 0.05;
}
