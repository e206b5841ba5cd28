//! Shared numeric and style constants for the chart crate.

// ── Animation ───────────────────────────────────────────────────

/// Progress added per animation frame (50 frames to full height).
pub const PROGRESS_STEP: f64 = 0.02;

// ── Geometry ────────────────────────────────────────────────────

/// Inset between the canvas edge and the plot area, in CSS pixels.
pub const PADDING_PX: f64 = 60.0;

/// Number of horizontal grid bands; `GRID_BANDS + 1` lines are drawn.
pub const GRID_BANDS: u32 = 5;

/// Radius of each point marker.
pub const POINT_RADIUS_PX: f64 = 4.0;

/// Distance from the plot baseline to the axis label baseline.
pub const LABEL_OFFSET_PX: f64 = 20.0;

// ── Style ───────────────────────────────────────────────────────

pub const LINE_COLOR: &str = "#667eea";
pub const LINE_WIDTH_PX: f64 = 3.0;
pub const GRID_COLOR: &str = "rgba(102, 126, 234, 0.1)";
pub const GRID_WIDTH_PX: f64 = 1.0;
pub const AREA_FILL: &str = "rgba(102, 126, 234, 0.1)";
pub const LABEL_FONT: &str = "12px Inter, sans-serif";

/// Label colour used when the page does not define `--text-color`.
pub const FALLBACK_LABEL_COLOR: &str = "#333333";
