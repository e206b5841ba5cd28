//! Chart data: an ordered list of labelled values.

#[cfg(test)]
#[path = "series_test.rs"]
mod series_test;

/// One labelled sample on the horizontal axis.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

/// Ordered series plotted left to right.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    points: Vec<DataPoint>,
}

impl Series {
    #[must_use]
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    /// The weekly activity series shown on the landing page.
    #[must_use]
    pub fn weekly() -> Self {
        const WEEK: [(&str, f64); 7] = [
            ("Mon", 65.0),
            ("Tue", 59.0),
            ("Wed", 80.0),
            ("Thu", 81.0),
            ("Fri", 56.0),
            ("Sat", 55.0),
            ("Sun", 40.0),
        ];
        Self::new(WEEK.iter().map(|(label, value)| DataPoint::new(*label, *value)).collect())
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest value in the series, or `None` when empty.
    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        self.points.iter().map(|p| p.value).reduce(f64::max)
    }

    /// Each value as a fraction of the series maximum.
    ///
    /// A series whose maximum is not positive normalises to all zeros, which
    /// renders as a flat line on the baseline.
    #[must_use]
    pub fn normalized(&self) -> Vec<f64> {
        match self.max_value() {
            Some(max) if max > 0.0 => self.points.iter().map(|p| p.value / max).collect(),
            _ => vec![0.0; self.points.len()],
        }
    }
}
