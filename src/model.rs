//! Reading and result types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Weighted directional reading.
///
/// The angle is in degrees and need not be normalized to `[0, 360)`.
/// The weight scales the reading's unit vector and may be any real number.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Reading {
    /// Direction in degrees.
    pub angle: f64,
    /// Weight of the reading.
    pub weight: f64,
}

impl Reading {
    /// Create a new reading with a given angle (degrees) and weight.
    pub fn new(angle: f64, weight: f64) -> Self {
        Self { angle, weight }
    }
}

impl From<(f64, f64)> for Reading {
    fn from((angle, weight): (f64, f64)) -> Self {
        Self::new(angle, weight)
    }
}

/// Circular mean of a set of readings.
///
/// `angle` is the direction of the mean vector in degrees, typically in `(-180, 180]`.
/// `magnitude` is its length, which measures how concentrated the readings are.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct MeanReport {
    pub angle: f64,
    pub magnitude: f64,
}

impl fmt::Display for MeanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.angle, self.magnitude)
    }
}

/// Divisor applied to the summed vector.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Divide by the number of readings.
    #[default]
    Count,
    /// Divide by the sum of the weights.
    WeightSum,
}

/// Strategy used to turn readings into a mean vector and back.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Rotate by powers of the one-degree unit step and take its logarithm.
    #[default]
    Complex,
    /// Sum cosines and sines and recover the angle with `atan2`.
    Trig,
}

/// Options for [`crate::average_with`].
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct Options {
    #[serde(default)]
    pub method: Method,
    #[serde(default)]
    pub normalization: Normalization,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_tuple_debug() {
        let report = MeanReport {
            angle: 13.000304779886221,
            magnitude: 0.9990864214521125,
        };
        assert_eq!(
            report.to_string(),
            format!("{:?}", (report.angle, report.magnitude))
        );
    }

    #[test]
    fn options_default_to_complex_count() {
        let options = Options::default();
        assert_eq!(options.method, Method::Complex);
        assert_eq!(options.normalization, Normalization::Count);
    }

    #[test]
    fn reading_from_tuple() {
        assert_eq!(Reading::from((358.0, 2.0)), Reading::new(358.0, 2.0));
    }
}
