use crate::model::{MeanReport, Method, Normalization, Options, Reading};
use anyhow::{Context, Result, bail};
use num_complex::Complex;
use std::f64::consts::TAU;

/// One-degree rotation on the unit circle, `e^(i * tau / 360)`.
pub fn degrees_base() -> Complex<f64> {
    Complex::new(0.0, TAU / 360.0).exp()
}

/// Streaming accumulator of weighted readings.
///
/// Keeps the vector sum, the weight sum and the number of readings, so the
/// mean can be reported without holding the readings in memory.
pub struct CircularAccumulator {
    method: Method,
    base: Complex<f64>,
    n_vals: usize,
    vec_sum: Complex<f64>,
    weight_sum: f64,
}

impl CircularAccumulator {
    pub fn new() -> Self {
        Self::with_method(Method::default())
    }

    pub fn with_method(method: Method) -> Self {
        Self {
            method,
            base: degrees_base(),
            n_vals: 0,
            vec_sum: Complex::new(0.0, 0.0),
            weight_sum: 0.0,
        }
    }

    pub fn n_vals(&self) -> usize {
        self.n_vals
    }

    pub fn add(&mut self, reading: Reading) {
        self.n_vals += 1;
        self.weight_sum += reading.weight;

        let unit_vec = match self.method {
            Method::Complex => self.base.powf(reading.angle),
            Method::Trig => {
                let (sin, cos) = reading.angle.to_radians().sin_cos();
                Complex::new(cos, sin)
            }
        };
        self.vec_sum += unit_vec * reading.weight;
    }

    /// Report the mean angle (degrees) and the magnitude of the mean vector.
    ///
    /// # Errors
    /// Returns an error if no readings were added, if the divisor selected by
    /// `normalization` is zero, or if the mean vector is exactly zero (its
    /// angle is undefined).
    pub fn report(&self, normalization: Normalization) -> Result<MeanReport> {
        if self.n_vals == 0 {
            bail!("reading set must not be empty");
        }

        let divisor = match normalization {
            Normalization::Count => self.n_vals as f64,
            Normalization::WeightSum => {
                if self.weight_sum == 0.0 {
                    bail!("sum of weights must be non-zero");
                }
                self.weight_sum
            }
        };
        let mean_vec = self.vec_sum / divisor;

        if mean_vec.re == 0.0 && mean_vec.im == 0.0 {
            bail!("mean vector is zero, so its angle is undefined");
        }

        let angle = match self.method {
            // Logarithm in base `base`, principal branch.
            Method::Complex => (mean_vec.ln() / self.base.ln()).re,
            Method::Trig => mean_vec.im.atan2(mean_vec.re).to_degrees(),
        };

        Ok(MeanReport {
            angle,
            magnitude: mean_vec.norm(),
        })
    }
}

/// Circular mean of `readings`, dividing the summed vector by the number of readings.
///
/// # Errors
/// Returns an error if `readings` is empty or the mean vector is exactly zero.
pub fn average(readings: &[Reading]) -> Result<MeanReport> {
    average_with(readings, Options::default())
}

/// Same as [`average`] but sums cosines and sines instead of complex powers.
pub fn average_with_trig(readings: &[Reading]) -> Result<MeanReport> {
    average_with(
        readings,
        Options {
            method: Method::Trig,
            ..Options::default()
        },
    )
}

/// Circular mean of `readings` with an explicit method and normalization.
pub fn average_with(readings: &[Reading], options: Options) -> Result<MeanReport> {
    let mut acc = CircularAccumulator::with_method(options.method);
    for &reading in readings {
        acc.add(reading);
    }

    let report = acc
        .report(options.normalization)
        .with_context(|| format!("failed to average {} readings", acc.n_vals()))?;
    log::debug!("averaged {} readings with {options:?}: {report}", acc.n_vals());

    Ok(report)
}
