//! A surface that records draw calls instead of rasterizing them
//!
//! Used by the native headless runner and by tests that check what a frame
//! contains and in which order.

use glam::Vec2;

use super::{Color, Surface, TextStyle, TextureId};
use crate::sim::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Image {
        texture: TextureId,
        pos: Vec2,
    },
    RotatedImage {
        texture: TextureId,
        pivot: Vec2,
        offset: Vec2,
        angle: f32,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        style: TextStyle,
    },
}

#[derive(Debug, Clone)]
pub struct DrawList {
    size: Vec2,
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            commands: Vec::new(),
        }
    }

    /// Commands drawn since the last clear
    pub fn frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear))
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// Every text string in the current frame
    pub fn texts(&self) -> Vec<&str> {
        self.frame()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Textures of image commands in the current frame, in draw order
    pub fn textures(&self) -> Vec<TextureId> {
        self.frame()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Image { texture, .. } | DrawCommand::RotatedImage { texture, .. } => {
                    Some(*texture)
                }
                _ => None,
            })
            .collect()
    }
}

impl Surface for DrawList {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        // Keep only the current frame around
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_image(&mut self, texture: TextureId, pos: Vec2) {
        self.commands.push(DrawCommand::Image { texture, pos });
    }

    fn draw_image_rotated(&mut self, texture: TextureId, pivot: Vec2, offset: Vec2, angle: f32) {
        self.commands.push(DrawCommand::RotatedImage {
            texture,
            pivot,
            offset,
            angle,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            style: *style,
        });
    }
}
