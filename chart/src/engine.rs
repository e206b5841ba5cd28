use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::animation::Animation;
use crate::layout::Layout;
use crate::render;
use crate::series::Series;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core chart state: everything that does not touch the canvas element.
///
/// Separated from `Chart` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct ChartCore {
    pub series: Series,
    pub animation: Animation,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for ChartCore {
    fn default() -> Self {
        Self::new(Series::weekly())
    }
}

impl ChartCore {
    #[must_use]
    pub fn new(series: Series) -> Self {
        Self { series, animation: Animation::Idle, viewport_width: 0.0, viewport_height: 0.0, dpr: 1.0 }
    }

    /// Record the displayed size (CSS pixels) and device pixel ratio.
    ///
    /// Returns the backing-store size in device pixels. Animation progress
    /// is untouched so a resize mid-animation keeps growing from where it was.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> (u32, u32) {
        self.viewport_width = width_css.max(0.0);
        self.viewport_height = height_css.max(0.0);
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        (backing_size(self.viewport_width, self.dpr), backing_size(self.viewport_height, self.dpr))
    }

    /// Advance the grow-in animation by one frame.
    ///
    /// Returns `true` while another frame is needed.
    pub fn tick(&mut self) -> bool {
        self.animation.tick()
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.animation.progress()
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::new(self.viewport_width, self.viewport_height)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn backing_size(css: f64, dpr: f64) -> u32 {
    (css * dpr).round().clamp(0.0, f64::from(u32::MAX)) as u32
}

/// The full chart. Wraps `ChartCore` and owns the canvas and its 2D context.
pub struct Chart {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: ChartCore,
}

impl Chart {
    /// Bind a chart to `canvas`, acquiring its 2D context.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element cannot provide a 2D context.
    pub fn new(canvas: HtmlCanvasElement, series: Series) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        Ok(Self { canvas, ctx, core: ChartCore::new(series) })
    }

    /// Resize the backing store to the displayed box at device pixel density.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        let (width, height) = self.core.set_viewport(width_css, height_css, dpr);
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// Advance one frame. Returns `true` while another frame is needed.
    pub fn tick(&mut self) -> bool {
        self.core.tick()
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self, label_color: &str) -> Result<(), JsValue> {
        render::draw(&self.ctx, &self.core.series, &self.core.layout(), self.core.progress(), self.core.dpr, label_color)
    }
}
