use crate::core::{Rgba, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// [`Surface`] backed by a canvas 2D context. Draw failures are logged at
/// debug level and the call is skipped.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn fill_disc(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            log::debug!("[render] arc failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn radial_glow(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let (x, y) = (center.x as f64, center.y as f64);
        let gradient = match self
            .ctx
            .create_radial_gradient(x, y, 0.0, x, y, radius as f64)
        {
            Ok(g) => g,
            Err(e) => {
                log::debug!("[render] gradient failed: {:?}", e);
                return;
            }
        };
        _ = gradient.add_color_stop(0.0, &color.to_css());
        _ = gradient.add_color_stop(1.0, &color.with_alpha(0.0).to_css());
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.fill_disc(center, radius);
    }

    fn dot(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.fill_disc(center, radius);
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(1.0);
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
