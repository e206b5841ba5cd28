//! Plot geometry, independent of any drawing context.
//!
//! All coordinates are CSS pixels with the origin at the top-left of the
//! canvas. The renderer walks these results; nothing here touches the DOM,
//! which keeps scaling behaviour testable natively.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::consts::{GRID_BANDS, LABEL_OFFSET_PX, PADDING_PX};
use crate::series::Series;

/// A point on the canvas in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A horizontal axis label and where to draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct Label<'a> {
    pub text: &'a str,
    pub at: Point,
}

/// Plot box derived from the canvas size and the fixed padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Layout {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, padding: PADDING_PX }
    }

    /// Width of the plot area; never negative.
    #[must_use]
    pub fn chart_width(&self) -> f64 {
        (self.width - self.padding * 2.0).max(0.0)
    }

    /// Height of the plot area; never negative.
    #[must_use]
    pub fn chart_height(&self) -> f64 {
        (self.height - self.padding * 2.0).max(0.0)
    }

    /// Y coordinate of the zero line.
    #[must_use]
    pub fn baseline(&self) -> f64 {
        self.padding + self.chart_height()
    }

    /// Y coordinates of the horizontal grid lines, top to bottom.
    #[must_use]
    pub fn grid_lines(&self) -> Vec<f64> {
        let band = self.chart_height() / f64::from(GRID_BANDS);
        (0..=GRID_BANDS).map(|i| self.padding + band * f64::from(i)).collect()
    }

    /// X coordinate of the `index`-th of `count` samples.
    ///
    /// A lone sample sits at the horizontal centre of the plot.
    #[must_use]
    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        if count < 2 {
            return self.padding + self.chart_width() / 2.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let step = self.chart_width() / (count - 1) as f64;
        #[allow(clippy::cast_precision_loss)]
        let offset = step * index as f64;
        self.padding + offset
    }

    /// Screen positions of every sample at the given animation progress.
    ///
    /// Heights scale linearly with `value / max * progress`.
    #[must_use]
    pub fn points(&self, series: &Series, progress: f64) -> Vec<Point> {
        let progress = progress.clamp(0.0, 1.0);
        let count = series.len();
        series
            .normalized()
            .into_iter()
            .enumerate()
            .map(|(i, ratio)| {
                let y = self.baseline() - ratio * self.chart_height() * progress;
                Point::new(self.x_at(i, count), y)
            })
            .collect()
    }

    /// Closed outline of the filled area: down to the baseline at both ends.
    #[must_use]
    pub fn area(&self, points: &[Point]) -> Vec<Point> {
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return Vec::new();
        };
        let mut outline = Vec::with_capacity(points.len() + 2);
        outline.push(Point::new(first.x, self.baseline()));
        outline.extend_from_slice(points);
        outline.push(Point::new(last.x, self.baseline()));
        outline
    }

    /// Axis labels centred under each sample.
    #[must_use]
    pub fn labels<'a>(&self, series: &'a Series) -> Vec<Label<'a>> {
        let count = series.len();
        let y = self.baseline() + LABEL_OFFSET_PX;
        series
            .points()
            .iter()
            .enumerate()
            .map(|(i, p)| Label { text: p.label.as_str(), at: Point::new(self.x_at(i, count), y) })
            .collect()
    }
}
