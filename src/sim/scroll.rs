//! Seamlessly repeating horizontal strips (background, floor)

use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// A strip whose texture scrolls left and wraps after one texture width
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollingStrip {
    /// Bounding box (the floor's is used for collision)
    pub rect: Rect,
    /// Horizontal speed of the texture (pixels/tick)
    pub vx: f32,
    /// Current texture offset, in (-texture_width, 0]
    pub offset_x: f32,
    /// Width of the repeating texture
    pub texture_width: f32,
}

impl ScrollingStrip {
    pub fn new(rect: Rect, vx: f32, texture_width: f32) -> Self {
        Self {
            rect,
            vx,
            offset_x: 0.0,
            texture_width,
        }
    }

    pub fn update(&mut self) {
        self.offset_x += self.vx;
        if self.offset_x < -self.texture_width {
            self.offset_x = 0.0;
        }
    }

    pub fn reset(&mut self) {
        self.offset_x = 0.0;
    }

    /// Top edge of the strip
    #[inline]
    pub fn y(&self) -> f32 {
        self.rect.y
    }
}
