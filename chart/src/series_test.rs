#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn weekly_series_has_seven_labelled_days() {
    let series = Series::weekly();
    assert_eq!(series.len(), 7);
    let labels = series.points().iter().map(|p| p.label.as_str()).collect::<Vec<_>>();
    assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
}

#[test]
fn max_value_of_weekly_series() {
    assert_eq!(Series::weekly().max_value(), Some(81.0));
}

#[test]
fn max_value_of_empty_series_is_none() {
    assert_eq!(Series::default().max_value(), None);
    assert!(Series::default().is_empty());
}

#[test]
fn normalized_divides_by_maximum() {
    let series = Series::new(vec![DataPoint::new("a", 50.0), DataPoint::new("b", 100.0)]);
    assert_eq!(series.normalized(), vec![0.5, 1.0]);
}

#[test]
fn normalized_all_zero_series_is_flat() {
    let series = Series::new(vec![DataPoint::new("a", 0.0), DataPoint::new("b", 0.0)]);
    assert_eq!(series.normalized(), vec![0.0, 0.0]);
}

#[test]
fn normalized_negative_maximum_is_flat() {
    let series = Series::new(vec![DataPoint::new("a", -3.0), DataPoint::new("b", -1.0)]);
    assert_eq!(series.normalized(), vec![0.0, 0.0]);
}
