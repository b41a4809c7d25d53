// ─────────────────────────────────────────────────────────────────────
// Pendulum Period Core — Amplitude Grid
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Evenly spaced initial amplitudes θ0, inclusive of both endpoints.

use ndarray::Array1;
use pendulum_types::config::PendulumConfig;
use pendulum_types::constants::{MIN_SAMPLE_COUNT, THETA_INVERTED_DEG};
use pendulum_types::error::{PendulumError, PendulumResult};
use pendulum_types::sample::AngleSample;

/// Ascending amplitude grid in degrees and radians.
#[derive(Debug, Clone)]
pub struct ThetaGrid {
    pub degrees: Array1<f64>,
    pub radians: Array1<f64>,
    /// Spacing in degrees.
    pub step_deg: f64,
}

impl ThetaGrid {
    /// `count` amplitudes from `low_deg` to `high_deg` inclusive.
    pub fn new(low_deg: f64, high_deg: f64, count: usize) -> PendulumResult<Self> {
        if count < MIN_SAMPLE_COUNT {
            return Err(PendulumError::Configuration(format!(
                "sample_count must be >= {MIN_SAMPLE_COUNT}, got {count}"
            )));
        }
        if !(low_deg.is_finite() && high_deg.is_finite()) || low_deg >= high_deg {
            return Err(PendulumError::Configuration(format!(
                "amplitude range must satisfy low < high, got [{low_deg}, {high_deg}]"
            )));
        }
        if high_deg >= THETA_INVERTED_DEG {
            return Err(PendulumError::Configuration(format!(
                "theta_high_deg must be < {THETA_INVERTED_DEG}, got {high_deg}"
            )));
        }

        let step_deg = (high_deg - low_deg) / (count - 1) as f64;
        let degrees = Array1::from_shape_fn(count, |i| {
            if i == count - 1 {
                high_deg
            } else {
                low_deg + i as f64 * step_deg
            }
        });
        let radians = degrees.mapv(f64::to_radians);

        Ok(ThetaGrid {
            degrees,
            radians,
            step_deg,
        })
    }

    pub fn from_config(config: &PendulumConfig) -> PendulumResult<Self> {
        Self::new(
            config.theta_low_deg,
            config.theta_high_deg,
            config.sample_count,
        )
    }

    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    pub fn sample(&self, i: usize) -> AngleSample {
        AngleSample {
            theta_deg: self.degrees[i],
            theta_rad: self.radians[i],
        }
    }

    pub fn samples(&self) -> Vec<AngleSample> {
        (0..self.len()).map(|i| self.sample(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_grid() {
        let grid = ThetaGrid::from_config(&PendulumConfig::reference()).unwrap();
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.degrees[0], 5.0);
        assert_eq!(grid.degrees[11], 60.0);
        assert!((grid.step_deg - 5.0).abs() < 1e-12);
        assert!((grid.degrees[5] - 30.0).abs() < 1e-12);
        assert!((grid.radians[11] - std::f64::consts::FRAC_PI_3).abs() < 1e-15);
    }

    #[test]
    fn test_samples_ascending_and_consistent() {
        let grid = ThetaGrid::new(1.0, 89.0, 17).unwrap();
        let samples = grid.samples();
        assert_eq!(samples.len(), 17);
        for w in samples.windows(2) {
            assert!(w[1].theta_deg > w[0].theta_deg);
        }
        for s in &samples {
            assert_eq!(s.theta_rad, s.theta_deg.to_radians());
        }
    }

    #[test]
    fn test_rejects_small_count() {
        let err = ThetaGrid::new(5.0, 60.0, 3).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_rejects_bad_range() {
        assert!(ThetaGrid::new(60.0, 5.0, 12).unwrap_err().is_configuration());
        assert!(ThetaGrid::new(5.0, 5.0, 12).unwrap_err().is_configuration());
        assert!(ThetaGrid::new(5.0, 180.0, 12).unwrap_err().is_configuration());
        assert!(ThetaGrid::new(f64::NAN, 60.0, 12).unwrap_err().is_configuration());
    }
}
