#![allow(clippy::float_cmp)]

use super::*;
use crate::series::{DataPoint, Series};

fn near(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// Plot box
// =============================================================

#[test]
fn chart_area_excludes_padding() {
    let layout = Layout::new(520.0, 320.0);
    assert_eq!(layout.chart_width(), 400.0);
    assert_eq!(layout.chart_height(), 200.0);
    assert_eq!(layout.baseline(), 260.0);
}

#[test]
fn tiny_canvas_has_empty_plot_area() {
    let layout = Layout::new(50.0, 50.0);
    assert_eq!(layout.chart_width(), 0.0);
    assert_eq!(layout.chart_height(), 0.0);
}

#[test]
fn six_grid_lines_span_the_plot() {
    let layout = Layout::new(520.0, 320.0);
    let lines = layout.grid_lines();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], 60.0);
    assert_eq!(lines[5], 260.0);
}

// =============================================================
// Points
// =============================================================

#[test]
fn points_span_full_width() {
    let layout = Layout::new(520.0, 320.0);
    let points = layout.points(&Series::weekly(), 1.0);
    assert_eq!(points.len(), 7);
    assert!(near(points[0].x, 60.0));
    assert!(near(points[6].x, 460.0));
}

#[test]
fn maximum_value_reaches_top_at_full_progress() {
    let layout = Layout::new(520.0, 320.0);
    let points = layout.points(&Series::weekly(), 1.0);
    // Thursday holds the maximum (81).
    assert!(near(points[3].y, 60.0));
}

#[test]
fn heights_scale_with_value_over_max_times_progress() {
    let layout = Layout::new(520.0, 320.0);
    let series = Series::weekly();
    for progress in [0.0, 0.25, 0.5, 1.0] {
        let points = layout.points(&series, progress);
        for (point, data) in points.iter().zip(series.points()) {
            let expected = data.value / 81.0 * layout.chart_height() * progress;
            assert!(near(layout.baseline() - point.y, expected));
        }
    }
}

#[test]
fn zero_progress_puts_every_point_on_baseline() {
    let layout = Layout::new(520.0, 320.0);
    let points = layout.points(&Series::weekly(), 0.0);
    assert!(points.iter().all(|p| near(p.y, layout.baseline())));
}

#[test]
fn empty_series_has_no_points_or_area() {
    let layout = Layout::new(520.0, 320.0);
    let points = layout.points(&Series::default(), 1.0);
    assert!(points.is_empty());
    assert!(layout.area(&points).is_empty());
}

#[test]
fn all_zero_series_draws_flat_baseline() {
    let layout = Layout::new(520.0, 320.0);
    let series = Series::new(vec![DataPoint::new("a", 0.0), DataPoint::new("b", 0.0)]);
    let points = layout.points(&series, 1.0);
    assert!(points.iter().all(|p| p.y.is_finite() && near(p.y, layout.baseline())));
}

#[test]
fn single_point_sits_at_centre() {
    let layout = Layout::new(520.0, 320.0);
    let series = Series::new(vec![DataPoint::new("only", 10.0)]);
    let points = layout.points(&series, 1.0);
    assert_eq!(points.len(), 1);
    assert!(near(points[0].x, 260.0));
    assert!(near(points[0].y, 60.0));
}

// =============================================================
// Area and labels
// =============================================================

#[test]
fn area_closes_down_to_baseline() {
    let layout = Layout::new(520.0, 320.0);
    let points = layout.points(&Series::weekly(), 1.0);
    let area = layout.area(&points);
    assert_eq!(area.len(), points.len() + 2);
    assert_eq!(area[0], Point::new(points[0].x, layout.baseline()));
    assert_eq!(area[area.len() - 1], Point::new(points[6].x, layout.baseline()));
}

#[test]
fn labels_sit_under_each_point() {
    let layout = Layout::new(520.0, 320.0);
    let series = Series::weekly();
    let labels = layout.labels(&series);
    let points = layout.points(&series, 1.0);
    assert_eq!(labels.len(), 7);
    for (label, point) in labels.iter().zip(&points) {
        assert!(near(label.at.x, point.x));
        assert!(near(label.at.y, 280.0));
    }
    assert_eq!(labels[0].text, "Mon");
}
