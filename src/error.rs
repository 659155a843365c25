//! Construction-time errors
//!
//! The tick itself is total; everything that can go wrong happens while a
//! game or a host is being set up.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("scene size must be finite and positive, got {width}x{height}")]
    InvalidScene { width: f32, height: f32 },

    #[error("scene height {height} leaves no room for a {spacing}px gap with {margin}px margins above a {floor}px floor")]
    SceneTooShort {
        height: f32,
        spacing: f32,
        margin: f32,
        floor: f32,
    },

    #[error("sprite `{name}` must have a positive size, got {width}x{height}")]
    InvalidSprite {
        name: &'static str,
        width: f32,
        height: f32,
    },

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("tuning parse error: {0}")]
    TuningParse(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    ReadConfig {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("missing host element: {0}")]
    MissingElement(String),
}
