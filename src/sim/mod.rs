//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One update per tick, fixed step order
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod flash;
pub mod obstacle;
pub mod player;
pub mod rect;
pub mod scroll;
pub mod state;
pub mod tick;

pub use flash::Flash;
pub use obstacle::Obstacle;
pub use player::Player;
pub use rect::Rect;
pub use scroll::ScrollingStrip;
pub use state::{GameEvent, GamePhase, GameState, Scene, SpriteSizes};
pub use tick::{TickInput, tick};
