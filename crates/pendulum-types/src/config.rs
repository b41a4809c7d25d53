// ─────────────────────────────────────────────────────────────────────
// Pendulum Period Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{MIN_SAMPLE_COUNT, STANDARD_GRAVITY, THETA_INVERTED_DEG};
use crate::error::{PendulumError, PendulumResult};

/// Run configuration for the period analysis.
/// Maps 1:1 to the JSON schema of `configs/pendulum_reference.json`.
/// Every key is required; there is no serde default on any field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendulumConfig {
    /// Pendulum length [m].
    #[serde(rename = "L")]
    pub length: f64,
    /// Gravitational acceleration [m/s²].
    #[serde(rename = "g")]
    pub gravity: f64,
    pub theta_low_deg: f64,
    pub theta_high_deg: f64,
    pub sample_count: usize,
    /// Simpson subintervals, must be even.
    pub integral_steps: usize,
    /// Radicand clamp floor for the quadrature, and AGM gap tolerance.
    pub epsilon: f64,
}

impl PendulumConfig {
    /// The canonical run: 1 m pendulum under standard gravity, 5°..60°,
    /// 12 samples, 2000 Simpson steps, ε = 1e-10.
    pub fn reference() -> Self {
        PendulumConfig {
            length: 1.0,
            gravity: STANDARD_GRAVITY,
            theta_low_deg: 5.0,
            theta_high_deg: 60.0,
            sample_count: 12,
            integral_steps: 2000,
            epsilon: 1e-10,
        }
    }

    /// Load from JSON file and validate.
    pub fn from_file(path: impl AsRef<Path>) -> PendulumResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> PendulumResult<Self> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject any configuration the pipeline cannot run to completion.
    pub fn validate(&self) -> PendulumResult<()> {
        let reals = [
            ("L", self.length),
            ("g", self.gravity),
            ("theta_low_deg", self.theta_low_deg),
            ("theta_high_deg", self.theta_high_deg),
            ("epsilon", self.epsilon),
        ];
        for (name, value) in reals {
            if !value.is_finite() {
                return Err(config_error(format!("{name} must be finite, got {value}")));
            }
        }

        if self.length <= 0.0 {
            return Err(config_error(format!("L must be > 0, got {}", self.length)));
        }
        if self.gravity <= 0.0 {
            return Err(config_error(format!("g must be > 0, got {}", self.gravity)));
        }
        if self.epsilon <= 0.0 {
            return Err(config_error(format!(
                "epsilon must be > 0, got {}",
                self.epsilon
            )));
        }
        if self.integral_steps == 0 || self.integral_steps % 2 != 0 {
            return Err(config_error(format!(
                "integral_steps must be a positive even number for Simpson's rule, got {}",
                self.integral_steps
            )));
        }
        if self.sample_count < MIN_SAMPLE_COUNT {
            return Err(config_error(format!(
                "sample_count must be >= {MIN_SAMPLE_COUNT}, got {}",
                self.sample_count
            )));
        }
        if self.theta_low_deg <= 0.0 {
            return Err(config_error(format!(
                "theta_low_deg must be > 0, got {}",
                self.theta_low_deg
            )));
        }
        if self.theta_low_deg >= self.theta_high_deg {
            return Err(config_error(format!(
                "theta_low_deg ({}) must be < theta_high_deg ({})",
                self.theta_low_deg, self.theta_high_deg
            )));
        }
        if self.theta_high_deg >= THETA_INVERTED_DEG {
            return Err(config_error(format!(
                "theta_high_deg must be < {THETA_INVERTED_DEG}, got {}",
                self.theta_high_deg
            )));
        }
        Ok(())
    }

    /// √(L/g), the common prefactor of every period model.
    pub fn time_scale(&self) -> f64 {
        (self.length / self.gravity).sqrt()
    }
}

fn config_error(message: String) -> PendulumError {
    PendulumError::Configuration(message)
}
