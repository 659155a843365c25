//! The white "game over" flash

use serde::{Deserialize, Serialize};

use super::rect::Rect;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flash {
    /// Covers the whole scene
    pub rect: Rect,
    /// 0 = invisible, 1 = solid white
    pub alpha: f32,
    /// Alpha lost per tick
    pub decay: f32,
}

impl Flash {
    pub fn new(rect: Rect, decay: f32) -> Self {
        Self {
            rect,
            alpha: 0.0,
            decay,
        }
    }

    pub fn trigger(&mut self) {
        self.alpha = 1.0;
    }

    pub fn update(&mut self) {
        if self.alpha > 0.0 {
            self.alpha = (self.alpha - self.decay).max(0.0);
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.alpha > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_and_fade() {
        let mut flash = Flash::new(Rect::new(0.0, 0.0, 800.0, 600.0), 0.05);
        assert!(!flash.is_visible());
        flash.trigger();
        assert_eq!(flash.alpha, 1.0);
        flash.update();
        assert!((flash.alpha - 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_fades_out_in_about_twenty_ticks() {
        let mut flash = Flash::new(Rect::new(0.0, 0.0, 800.0, 600.0), 0.05);
        flash.trigger();
        for _ in 0..21 {
            flash.update();
        }
        assert_eq!(flash.alpha, 0.0);
        // Stays at zero
        flash.update();
        assert_eq!(flash.alpha, 0.0);
    }
}
