//! Rendering: draws one full chart frame to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads layout results and produces pixels; it never mutates chart state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Chart::render`]) hands the result
//! to the host.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{
    AREA_FILL, GRID_COLOR, GRID_WIDTH_PX, LABEL_FONT, LINE_COLOR, LINE_WIDTH_PX, POINT_RADIUS_PX,
};
use crate::layout::{Layout, Point};
use crate::series::Series;

/// Draw the full chart: grid, line, area, markers, labels.
///
/// `dpr` is the device pixel ratio the backing store was sized with.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    series: &Series,
    layout: &Layout,
    progress: f64,
    dpr: f64,
    label_color: &str,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, layout.width, layout.height);

    draw_grid(ctx, layout);

    let points = layout.points(series, progress);
    if points.is_empty() {
        return Ok(());
    }

    draw_line(ctx, &points);
    draw_area(ctx, &layout.area(&points));
    draw_markers(ctx, &points)?;
    draw_labels(ctx, series, layout, label_color)
}

fn draw_grid(ctx: &CanvasRenderingContext2d, layout: &Layout) {
    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(GRID_WIDTH_PX);
    for y in layout.grid_lines() {
        ctx.begin_path();
        ctx.move_to(layout.padding, y);
        ctx.line_to(layout.width - layout.padding, y);
        ctx.stroke();
    }
}

fn draw_line(ctx: &CanvasRenderingContext2d, points: &[Point]) {
    ctx.set_stroke_style_str(LINE_COLOR);
    ctx.set_line_width(LINE_WIDTH_PX);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    trace_path(ctx, points);
    ctx.stroke();
}

fn draw_area(ctx: &CanvasRenderingContext2d, outline: &[Point]) {
    ctx.set_fill_style_str(AREA_FILL);
    trace_path(ctx, outline);
    ctx.close_path();
    ctx.fill();
}

fn draw_markers(ctx: &CanvasRenderingContext2d, points: &[Point]) -> Result<(), JsValue> {
    ctx.set_fill_style_str(LINE_COLOR);
    for point in points {
        ctx.begin_path();
        ctx.arc(point.x, point.y, POINT_RADIUS_PX, 0.0, PI * 2.0)?;
        ctx.fill();
    }
    Ok(())
}

fn draw_labels(
    ctx: &CanvasRenderingContext2d,
    series: &Series,
    layout: &Layout,
    color: &str,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str(color);
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("center");
    for label in layout.labels(series) {
        ctx.fill_text(label.text, label.at.x, label.at.y)?;
    }
    Ok(())
}

fn trace_path(ctx: &CanvasRenderingContext2d, points: &[Point]) {
    ctx.begin_path();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        ctx.move_to(first.x, first.y);
    }
    for point in iter {
        ctx.line_to(point.x, point.y);
    }
}
