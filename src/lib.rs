//! Weighted circular mean of angular readings.
//!
//! Each reading `(angle, weight)` is turned into a point of length `weight`
//! at `angle` degrees on the complex plane by raising the one-degree rotation
//! `e^(i * tau / 360)` to the power `angle`. The points are summed, the sum is
//! divided by the number of readings, and the mean angle is recovered as the
//! logarithm of the result in base of that rotation.
//!
//! ```
//! use circmean::{Reading, average};
//!
//! let report = average(&[Reading::new(359.0, 1.0), Reading::new(1.0, 1.0)]).unwrap();
//! assert!(report.angle.abs() < 1e-9);
//! ```

pub mod config;
pub mod demo;
pub mod model;
pub mod stats;

pub use model::{MeanReport, Method, Normalization, Options, Reading};
pub use stats::{CircularAccumulator, average, average_with, average_with_trig, degrees_base};
