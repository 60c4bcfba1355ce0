//! Parameter ranges and their discretization into sample values.
//!
//! A range `{min, max, increment}` is sampled at `min + i * increment` for
//! `i = 0, 1, ...` while the sample stays at or below `max`.  Samples are
//! computed from the index rather than by repeated addition, so the
//! rounding error of the last sample does not grow with the step count.
//! A sample is still accepted when it overshoots `max` by less than
//! `STEP_TOLERANCE * increment` (e.g. `0.1 + 0.2` against `max = 0.3`).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Fraction of one increment by which a sample may overshoot `max`.
pub const STEP_TOLERANCE: f64 = 1e-9;

/// One declared sweep axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    pub name:      String,
    pub min:       f64,
    pub max:       f64,
    pub increment: f64,
}

impl ParameterRange {
    pub fn new(name: impl Into<String>, min: f64, max: f64, increment: f64) -> Self {
        Self { name: name.into(), min, max, increment }
    }

    /// Reject ranges whose sampling would not terminate.
    pub fn validate(&self) -> Result<()> {
        for (field, v) in [("min", self.min), ("max", self.max), ("increment", self.increment)] {
            if !v.is_finite() {
                return Err(Error::invalid_range(&self.name, format!("{field} is not finite ({v})")));
            }
        }
        if self.min < self.max && self.increment <= 0.0 {
            return Err(Error::invalid_range(
                &self.name,
                format!("increment must be positive when min < max (got {})", self.increment),
            ));
        }
        Ok(())
    }

    /// Number of samples this range produces.
    pub fn steps(&self) -> Result<usize> {
        self.validate()?;
        if self.min > self.max { return Ok(0); }
        if self.min == self.max { return Ok(1); }

        let last = (self.max - self.min) / self.increment + STEP_TOLERANCE;
        if !last.is_finite() || last >= (usize::MAX - 1) as f64 {
            return Err(Error::invalid_range(
                &self.name,
                format!("increment {} is too small for span [{}, {}]", self.increment, self.min, self.max),
            ));
        }
        Ok(last.floor() as usize + 1)
    }
}

/// Sample one range.  `min == max` always yields `[min]`; `min > max`
/// yields an empty sequence.
pub fn discretize(range: &ParameterRange) -> Result<Vec<f64>> {
    let n = range.steps()?;
    let values: Vec<f64> = (0..n)
        .map(|i| range.min + i as f64 * range.increment)
        .collect();
    debug!(name = %range.name, samples = values.len(), "discretized range");
    Ok(values)
}

/// Sample every range, in order.  All ranges are validated before any
/// of them is sampled.
pub fn discretize_all(ranges: &[ParameterRange]) -> Result<Vec<Vec<f64>>> {
    for r in ranges {
        r.validate()?;
    }
    ranges.iter().map(discretize).collect()
}
