// ─────────────────────────────────────────────────────────────────────
// Pendulum Period Core — Verification Checks
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical sanity checks run independently of the main amplitude grid.

use serde::Serialize;
use tracing::{info, warn};

use pendulum_math::elliptic::ellipk_poly;
use pendulum_types::config::PendulumConfig;
use pendulum_types::error::PendulumResult;
use pendulum_types::sample::AngleSample;

use crate::approx::small_angle_period;
use crate::exact::exact_period;
use crate::quadrature::{endpoint_bias, numeric_period};

/// Amplitude of the small-angle check [deg].
const SMALL_CHECK_DEG: f64 = 1.0;
/// Max |T_num − T0| / T0 accepted at `SMALL_CHECK_DEG`.
const SMALL_CHECK_TOL: f64 = 0.01;
/// Amplitude of the large-angle check [deg].
const LARGE_CHECK_DEG: f64 = 60.0;
/// Accepted T_num / T0 window at `LARGE_CHECK_DEG`.
const LARGE_CHECK_RATIO: (f64, f64) = (1.05, 1.10);
/// Max |T_num − T_exact| / T_exact accepted at theta_high.
const AGREEMENT_TOL: f64 = 1e-9;
/// Max |K_agm − K_poly| / K_agm at theta_high (polynomial error is below 2e-8).
const POLY_CROSS_CHECK_TOL: f64 = 1e-7;

#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub theta0_deg: f64,
    /// The checked quantity (relative deviation or ratio).
    pub measured: f64,
    pub passed: bool,
}

/// Clamp diagnostics of the direct θ-grid quadrature at theta_high.
/// Informational: it never fails a verification.
#[derive(Debug, Clone, Serialize)]
pub struct EndpointDiagnostic {
    pub theta0_deg: f64,
    pub steps: usize,
    pub clamped_points: usize,
    pub clamp_rate: f64,
    /// Period from the direct grid [s].
    pub direct_period: f64,
    /// (T_direct − T_num) / T_num.
    pub relative_bias: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub checks: Vec<CheckOutcome>,
    pub endpoint: EndpointDiagnostic,
}

impl VerificationReport {
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }
}

/// Small-angle, large-angle, method-agreement and elliptic cross-checks for
/// `config`, plus the direct-grid clamp diagnostics at theta_high.
pub fn verify(config: &PendulumConfig) -> PendulumResult<VerificationReport> {
    config.validate()?;
    let t0 = small_angle_period(config);

    let small = AngleSample::from_degrees(SMALL_CHECK_DEG);
    let small_dev = (numeric_period(config, &small)?.value - t0).abs() / t0;

    let large = AngleSample::from_degrees(LARGE_CHECK_DEG);
    let large_ratio = numeric_period(config, &large)?.value / t0;

    let high = AngleSample::from_degrees(config.theta_high_deg);
    let t_num = numeric_period(config, &high)?.value;
    let exact = exact_period(config, &high)?;
    let agreement = (t_num - exact.value).abs() / exact.value;
    let poly_dev = (exact.k_integral - ellipk_poly(exact.modulus * exact.modulus)).abs()
        / exact.k_integral;

    let bias = endpoint_bias(config, &high)?;
    let endpoint = EndpointDiagnostic {
        theta0_deg: config.theta_high_deg,
        steps: bias.direct.quadrature.steps,
        clamped_points: bias.direct.quadrature.clamped_points,
        clamp_rate: bias.direct.quadrature.clamp_rate(),
        direct_period: bias.direct.value,
        relative_bias: bias.relative_bias(),
    };

    let checks = vec![
        CheckOutcome {
            name: "small_angle",
            theta0_deg: SMALL_CHECK_DEG,
            measured: small_dev,
            passed: small_dev < SMALL_CHECK_TOL,
        },
        CheckOutcome {
            name: "large_angle",
            theta0_deg: LARGE_CHECK_DEG,
            measured: large_ratio,
            passed: large_ratio > LARGE_CHECK_RATIO.0 && large_ratio < LARGE_CHECK_RATIO.1,
        },
        CheckOutcome {
            name: "method_agreement",
            theta0_deg: config.theta_high_deg,
            measured: agreement,
            passed: agreement < AGREEMENT_TOL,
        },
        CheckOutcome {
            name: "elliptic_cross_check",
            theta0_deg: config.theta_high_deg,
            measured: poly_dev,
            passed: poly_dev < POLY_CROSS_CHECK_TOL,
        },
    ];

    for c in &checks {
        if c.passed {
            info!(check = c.name, measured = c.measured, "Check passed");
        } else {
            warn!(check = c.name, measured = c.measured, "Check failed");
        }
    }

    info!(
        theta0_deg = endpoint.theta0_deg,
        clamped = endpoint.clamped_points,
        relative_bias = endpoint.relative_bias,
        "Direct-grid endpoint bias"
    );

    Ok(VerificationReport { checks, endpoint })
}
