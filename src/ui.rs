//! HUD overlays: welcome banner, score counter, game-over panel

use glam::Vec2;

use crate::renderer::{Surface, TextAlign, TextStyle, colors};
use crate::sim::{GamePhase, Rect};

const FONT_PX: f32 = 40.0;

fn text_style(max_width: f32) -> TextStyle {
    TextStyle {
        font_px: FONT_PX,
        align: TextAlign::Center,
        max_width: Some(max_width),
        color: colors::HUD_TEXT,
    }
}

/// A white panel with centred lines of text at the given y positions
fn panel(surface: &mut dyn Surface, rect: Rect, lines: &[(&str, f32)]) {
    let center_x = surface.size().x / 2.0;
    surface.fill_rect(rect, colors::HUD_PANEL);
    let style = text_style(rect.w);
    for (text, y) in lines {
        surface.fill_text(text, Vec2::new(center_x, *y), &style);
    }
}

/// Draw the overlay for the current phase
pub fn draw_hud(surface: &mut dyn Surface, phase: GamePhase, score: u32, high_score: u32) {
    let center_x = surface.size().x / 2.0;
    match phase {
        GamePhase::Idle => panel(
            surface,
            Rect::new(center_x - 200.0, 25.0, 400.0, 175.0),
            &[("Welcome to Flappy Joe!", 35.0), ("Press SPACE to start", 135.0)],
        ),
        GamePhase::Playing => {
            let line = format!("Score: {score}");
            panel(
                surface,
                Rect::new(center_x - 100.0, 10.0, 200.0, 70.0),
                &[(line.as_str(), 20.0)],
            );
        }
        GamePhase::Ended => {
            let total = format!("Total score: {score}");
            let best = format!("High score: {high_score}");
            panel(
                surface,
                Rect::new(center_x - 200.0, 25.0, 400.0, 325.0),
                &[
                    ("Game over!", 35.0),
                    (total.as_str(), 135.0),
                    (best.as_str(), 185.0),
                    ("Press SPACE to try again", 285.0),
                ],
            );
        }
    }
}
