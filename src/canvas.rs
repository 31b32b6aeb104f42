use field_core::{Painter, Rgb, Surface};
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Painter`] backed by a `CanvasRenderingContext2d`.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { ctx })
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, surface: Surface) {
        self.ctx.clear_rect(0.0, 0.0, surface.width, surface.height);
    }

    fn glow_disc(&mut self, center: DVec2, radius: f64, color: Rgb, alpha: f64, blur: f64) {
        let css = color.css();
        self.ctx.begin_path();
        if self.ctx.arc(center.x, center.y, radius, 0.0, TAU).is_err() {
            return;
        }
        self.ctx.set_fill_style_str(&css);
        self.ctx.set_global_alpha(alpha);
        self.ctx.set_shadow_blur(blur);
        self.ctx.set_shadow_color(&css);
        self.ctx.fill();
        self.ctx.set_shadow_blur(0.0);
        self.ctx.set_global_alpha(1.0);
    }

    fn gradient_line(
        &mut self,
        from: DVec2,
        to: DVec2,
        from_color: Rgb,
        to_color: Rgb,
        alpha: f64,
        width: f64,
    ) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        let gradient = self.ctx.create_linear_gradient(from.x, from.y, to.x, to.y);
        let _ = gradient.add_color_stop(0.0, &from_color.css());
        let _ = gradient.add_color_stop(1.0, &to_color.css());
        self.ctx.set_stroke_style_canvas_gradient(&gradient);
        self.ctx.set_global_alpha(alpha);
        self.ctx.set_line_width(width);
        self.ctx.stroke();
        self.ctx.set_global_alpha(1.0);
    }
}
