//! Rendering module
//!
//! The game draws through the [`Surface`] trait; hosts supply the actual
//! backend (HTML canvas in the browser, a recording [`DrawList`] elsewhere).

pub mod draw_list;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use draw_list::{DrawCommand, DrawList};
pub use scene::{Draw, draw_frame};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// Textures the game draws (loaded by the host before the loop starts)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureId {
    Background,
    Floor,
    Obstacle,
    Player,
}

impl TextureId {
    pub const ALL: [TextureId; 4] = [
        TextureId::Background,
        TextureId::Floor,
        TextureId::Obstacle,
        TextureId::Player,
    ];

    /// DOM id of the `<img>` holding this texture
    pub fn element_id(&self) -> &'static str {
        match self {
            TextureId::Background => "texture-bg",
            TextureId::Floor => "texture-floor",
            TextureId::Obstacle => "texture-obstacle",
            TextureId::Player => "texture-joe",
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Straight (non-premultiplied) RGBA, components in 0-1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba()` string for canvas fill styles
    pub fn to_css(&self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "rgba({}, {}, {}, {})",
            channel(self.r),
            channel(self.g),
            channel(self.b),
            self.a.clamp(0.0, 1.0)
        )
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const HUD_PANEL: Color = Color::rgba(1.0, 1.0, 1.0, 0.9);
    pub const HUD_TEXT: Color = BLACK;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Text is always laid out from its top edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_px: f32,
    pub align: TextAlign,
    /// Squeeze the text horizontally if it would be wider
    pub max_width: Option<f32>,
    pub color: Color,
}

/// What the game needs from a render backend
pub trait Surface {
    /// Drawable size in scene units
    fn size(&self) -> Vec2;

    fn clear(&mut self);

    /// Draw a texture with its top-left corner at `pos`
    fn draw_image(&mut self, texture: TextureId, pos: Vec2);

    /// Draw a texture rotated by `angle` radians around `pivot`; `offset` is
    /// the texture's top-left corner relative to the pivot before rotation
    fn draw_image_rotated(&mut self, texture: TextureId, pivot: Vec2, offset: Vec2, angle: f32);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw text whose top edge is at `pos.y`, aligned around `pos.x`
    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle);
}
