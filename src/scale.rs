//! Min/max scaling of aggregate uncertainty values.

use serde::{Deserialize, Serialize};

/// Map `value` onto the reference range `[min_value, max_value]`.
///
/// Returns `0.0` for a degenerate range. Values outside the reference range
/// map outside `[0, 1]`; nothing is clamped.
pub fn scale(value: f64, min_value: f64, max_value: f64) -> f64 {
    if max_value == min_value {
        return 0.0;
    }
    (value - min_value) / (max_value - min_value)
}

/// A reference range, usually fitted on a sample of filings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    pub min: f64,
    pub max: f64,
}

impl MinMaxScaler {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Fit the range on a sample. `NaN`s are ignored; an empty sample gives
    /// the degenerate range `0..0`.
    pub fn fit<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut range: Option<(f64, f64)> = None;
        for value in values.into_iter().filter(|v| !v.is_nan()) {
            range = Some(match range {
                Some((min, max)) => (min.min(value), max.max(value)),
                None => (value, value),
            });
        }
        let (min, max) = range.unwrap_or((0.0, 0.0));
        Self { min, max }
    }

    pub fn transform(&self, value: f64) -> f64 {
        scale(value, self.min, self.max)
    }

    pub fn transform_all(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&v| self.transform(v)).collect()
    }
}
