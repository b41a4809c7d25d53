// ─────────────────────────────────────────────────────────────────────
// Pendulum Period Core — Samples
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};
use std::fmt;

/// One initial amplitude of the pendulum.
/// `theta_rad` is always `theta_deg · π / 180`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleSample {
    pub theta_deg: f64,
    pub theta_rad: f64,
}

impl AngleSample {
    pub fn from_degrees(theta_deg: f64) -> Self {
        AngleSample {
            theta_deg,
            theta_rad: theta_deg.to_radians(),
        }
    }

    /// Elliptic modulus k = sin(θ0/2).
    pub fn modulus(&self) -> f64 {
        (0.5 * self.theta_rad).sin()
    }
}

/// Which model produced a period value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodMethod {
    SmallAngle,
    Series,
    NumericSimpson,
    ExactAgm,
}

impl PeriodMethod {
    pub const ALL: [PeriodMethod; 4] = [
        PeriodMethod::SmallAngle,
        PeriodMethod::Series,
        PeriodMethod::NumericSimpson,
        PeriodMethod::ExactAgm,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            PeriodMethod::SmallAngle => "small_angle",
            PeriodMethod::Series => "series",
            PeriodMethod::NumericSimpson => "numeric_simpson",
            PeriodMethod::ExactAgm => "exact_agm",
        }
    }
}

impl fmt::Display for PeriodMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single period value [s] tagged with the method that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodEstimate {
    pub sample: AngleSample,
    pub method: PeriodMethod,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_radians_conversion() {
        let s = AngleSample::from_degrees(30.0);
        assert!((s.theta_rad - PI / 6.0).abs() < 1e-15);
        assert!((s.modulus() - (PI / 12.0).sin()).abs() < 1e-15);
    }

    #[test]
    fn test_method_tags_match_serde() {
        for method in PeriodMethod::ALL {
            let json = serde_json::to_string(&method).unwrap();
            assert_eq!(json, format!("\"{}\"", method.tag()));
        }
    }
}
