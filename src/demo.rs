//! Hardcoded reading sets printed by the `demo` command.

use crate::model::{MeanReport, Reading};
use crate::stats::average;
use anyhow::{Context, Result};

pub const DEMO_SETS: [[(f64, f64); 5]; 3] = [
    [(12.0, 1.0), (15.0, 1.0), (13.0, 1.0), (9.0, 1.0), (16.0, 1.0)],
    [(358.0, 1.0), (1.0, 1.0), (359.0, 1.0), (355.0, 1.0), (2.0, 1.0)],
    [(210.0, 1.0), (290.0, 1.0), (10.0, 1.0), (90.0, 1.0), (170.0, 1.0)],
];

/// Average every demo set, in order.
pub fn demo_reports() -> Result<Vec<MeanReport>> {
    DEMO_SETS
        .iter()
        .enumerate()
        .map(|(i_set, set)| {
            let readings: Vec<_> = set.iter().copied().map(Reading::from).collect();
            average(&readings).with_context(|| format!("failed to average demo set {i_set}"))
        })
        .collect()
}
