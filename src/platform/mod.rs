//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (key and touch bindings, per-tick queue)

pub mod input;

pub use input::{Action, InputQueue};
