//! HTML canvas 2D backend

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

use super::{Color, Surface, TextStyle, TextureId};
use crate::error::GameError;
use crate::sim::Rect;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    size: Vec2,
    /// Indexed by [`TextureId::index`]
    images: Vec<HtmlImageElement>,
}

fn lookup<T: JsCast>(document: &Document, id: &str) -> Result<T, GameError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| GameError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| GameError::MissingElement(format!("{id} has the wrong element type")))
}

impl CanvasSurface {
    /// Bind to the canvas with `canvas_id` and the texture `<img>` elements
    pub fn from_document(document: &Document, canvas_id: &str) -> Result<Self, GameError> {
        let canvas: HtmlCanvasElement = lookup(document, canvas_id)?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| GameError::MissingElement(format!("2d context of {canvas_id}")))?;

        let images = TextureId::ALL
            .iter()
            .map(|texture| lookup::<HtmlImageElement>(document, texture.element_id()))
            .collect::<Result<Vec<_>, _>>()?;

        let size = Vec2::new(canvas.width() as f32, canvas.height() as f32);
        log::info!("Canvas surface {}x{}", size.x, size.y);

        Ok(Self { ctx, size, images })
    }

    /// Natural pixel size of each texture, once the images have loaded
    pub fn texture_size(&self, texture: TextureId) -> Vec2 {
        let img = &self.images[texture.index()];
        Vec2::new(img.natural_width() as f32, img.natural_height() as f32)
    }

    fn image(&self, texture: TextureId) -> &HtmlImageElement {
        &self.images[texture.index()]
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
    }

    fn draw_image(&mut self, texture: TextureId, pos: Vec2) {
        if let Err(e) = self.ctx.draw_image_with_html_image_element(
            self.image(texture),
            pos.x as f64,
            pos.y as f64,
        ) {
            log::warn!("Failed to draw {:?}: {:?}", texture, e);
        }
    }

    fn draw_image_rotated(&mut self, texture: TextureId, pivot: Vec2, offset: Vec2, angle: f32) {
        self.ctx.save();
        let drawn = self
            .ctx
            .translate(pivot.x as f64, pivot.y as f64)
            .and_then(|_| self.ctx.rotate(angle as f64))
            .and_then(|_| {
                self.ctx.draw_image_with_html_image_element(
                    self.image(texture),
                    offset.x as f64,
                    offset.y as f64,
                )
            });
        self.ctx.restore();
        if let Err(e) = drawn {
            log::warn!("Failed to draw rotated {:?}: {:?}", texture, e);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.ctx.set_font(&format!("{}px sans-serif", style.font_px));
        self.ctx.set_text_align(style.align.as_str());
        self.ctx.set_text_baseline("top");
        self.ctx.set_fill_style_str(&style.color.to_css());

        let (x, y) = (pos.x as f64, pos.y as f64);
        let result = match style.max_width {
            Some(max) => self.ctx.fill_text_with_max_width(text, x, y, max as f64),
            None => self.ctx.fill_text(text, x, y),
        };
        if let Err(e) = result {
            log::warn!("Failed to draw text {:?}: {:?}", text, e);
        }
    }
}
