use crate::constants::{FRAME_LINE_WIDTH, FRAME_STROKE, HANDLE_FILL, HANDLE_SIZE};
use crate::core::{BoundingBox, Handle, OverlayTransform};
use crate::session::LoadedImage;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 2D canvas painter for the overlay layer above the video.
pub struct Renderer {
    ctx: web::CanvasRenderingContext2d,
}

impl Renderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }

    /// Clear and redraw. Coordinates are css pixels; the backing store is
    /// scaled by the device pixel ratio.
    pub fn draw(
        &self,
        canvas: &web::HtmlCanvasElement,
        image: Option<&LoadedImage>,
        t: &OverlayTransform,
        selected: bool,
    ) -> anyhow::Result<()> {
        let ctx = &self.ctx;
        let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        ctx.clear_rect(
            0.0,
            0.0,
            canvas.width() as f64 / dpr,
            canvas.height() as f64 / dpr,
        );

        let Some(img) = image else {
            return Ok(());
        };

        let (sx, sy) = t.scale_factors();
        ctx.save();
        ctx.set_global_alpha(t.opacity);
        ctx.translate(t.position.x, t.position.y)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        ctx.scale(sx, sy).map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let drawn = ctx.draw_image_with_html_image_element(&img.element, 0.0, 0.0);
        ctx.restore();
        drawn.map_err(|e| anyhow::anyhow!("{:?}", e))?;

        if selected {
            self.draw_selection_frame(&t.bounding_box(img.size));
        }
        Ok(())
    }

    fn draw_selection_frame(&self, bbox: &BoundingBox) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_alpha(1.0);
        ctx.set_line_width(FRAME_LINE_WIDTH);
        ctx.set_stroke_style_str(FRAME_STROKE);
        ctx.stroke_rect(bbox.x, bbox.y, bbox.width, bbox.height);
        ctx.set_fill_style_str(HANDLE_FILL);
        let half = HANDLE_SIZE * 0.5;
        for h in Handle::ALL {
            let c = bbox.corner(h);
            ctx.fill_rect(c.x - half, c.y - half, HANDLE_SIZE, HANDLE_SIZE);
            ctx.stroke_rect(c.x - half, c.y - half, HANDLE_SIZE, HANDLE_SIZE);
        }
        ctx.restore();
    }
}
