//! Drawing the game state onto a surface
//!
//! Entities draw themselves through [`Draw`]; [`draw_frame`] fixes the
//! painter's order: background, obstacles, floor, player, flash, HUD.

use glam::Vec2;

use super::{Surface, TextureId, colors};
use crate::settings::Settings;
use crate::sim::{Flash, GameState, Obstacle, Player, ScrollingStrip, SpriteSizes};
use crate::ui;

/// Per-frame values entities need while drawing
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    pub floor_y: f32,
    pub sprites: SpriteSizes,
    pub settings: &'a Settings,
}

pub trait Draw {
    fn draw(&self, surface: &mut dyn Surface, frame: &FrameContext<'_>);
}

/// A scrolling strip plus the texture it repeats
pub struct Strip<'a> {
    pub strip: &'a ScrollingStrip,
    pub texture: TextureId,
}

impl Draw for Strip<'_> {
    fn draw(&self, surface: &mut dyn Surface, _frame: &FrameContext<'_>) {
        let ScrollingStrip {
            rect,
            offset_x,
            texture_width,
            ..
        } = *self.strip;
        surface.draw_image(self.texture, Vec2::new(offset_x, rect.y));
        surface.draw_image(self.texture, Vec2::new(offset_x + texture_width, rect.y));
    }
}

impl Draw for Obstacle {
    fn draw(&self, surface: &mut dyn Surface, frame: &FrameContext<'_>) {
        let tile_h = frame.sprites.obstacle.y;

        // Top half tiles upwards from its bottom edge until off-screen
        let mut y = self.top.bottom() - tile_h;
        while y + tile_h >= 0.0 {
            surface.draw_image(TextureId::Obstacle, Vec2::new(self.x, y));
            y -= tile_h;
        }

        // Bottom half tiles downwards until it reaches the floor
        let mut y = self.bottom.y;
        while y <= frame.floor_y {
            surface.draw_image(TextureId::Obstacle, Vec2::new(self.x, y));
            y += tile_h;
        }
    }
}

impl Draw for Player {
    fn draw(&self, surface: &mut dyn Surface, _frame: &FrameContext<'_>) {
        let half = self.rect.size() / 2.0;
        // Pivot sits a little below and right of the box centre
        let pivot = self.rect.center() + Vec2::new(5.0, 10.0);
        let offset = -half - Vec2::new(5.0, 15.0);
        surface.draw_image_rotated(TextureId::Player, pivot, offset, self.tilt());
    }
}

impl Draw for Flash {
    fn draw(&self, surface: &mut dyn Surface, frame: &FrameContext<'_>) {
        let alpha = frame.settings.flash_alpha(self.alpha);
        if alpha > 0.0 {
            surface.fill_rect(self.rect, colors::WHITE.with_alpha(alpha));
        }
    }
}

/// Render one complete frame
pub fn draw_frame(state: &GameState, surface: &mut dyn Surface, settings: &Settings) {
    let frame = FrameContext {
        floor_y: state.floor_y(),
        sprites: state.sprites,
        settings,
    };

    surface.clear();

    Strip {
        strip: &state.background,
        texture: TextureId::Background,
    }
    .draw(surface, &frame);
    for obstacle in &state.obstacles {
        obstacle.draw(surface, &frame);
    }
    Strip {
        strip: &state.floor,
        texture: TextureId::Floor,
    }
    .draw(surface, &frame);
    state.player.draw(surface, &frame);
    state.flash.draw(surface, &frame);

    ui::draw_hud(surface, state.phase, state.score, state.high_score.best);
}
