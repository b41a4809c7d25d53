// ─────────────────────────────────────────────────────────────────────
// Pendulum Period Core — Singular Simpson Integrator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Numerical period from the integral
//!
//!   I(θ0) = ∫_0^θ0 dθ / √(2 (cos θ − cos θ0)),     T_num = 4 √(L/g) · I(θ0)
//!
//! The integrand diverges as θ → θ0. Two Simpson evaluations are provided:
//!
//! - `direct_period_integral` works on the θ grid θ_i = i·h with the radicand
//!   clamped to ε. Only the endpoint is clamped, but its ordinate 1/√(2ε)
//!   carries weight h/3, so the result is biased upward by ≈ h / (3√(2ε)).
//! - `period_integral` first substitutes sin(θ/2) = k sin φ, k = sin(θ0/2),
//!   giving ∫_0^{π/2} dφ / √(1 − k² sin²φ). The radicand is bounded below by
//!   cos²(θ0/2), so the same clamp never fires for θ0 < π and Simpson
//!   converges at the rate of a smooth periodic integrand.
//!
//! `numeric_period` (T_num) uses the substituted form.

use std::f64::consts::{FRAC_PI_2, PI};

use pendulum_math::simpson::{simpson_inverse_sqrt, QuadratureReport};
use pendulum_types::config::PendulumConfig;
use pendulum_types::error::{PendulumError, PendulumResult};
use pendulum_types::sample::AngleSample;

/// T_num for one amplitude, with the quadrature diagnostics behind it.
#[derive(Debug, Clone, Copy)]
pub struct NumericPeriod {
    pub value: f64,
    pub quadrature: QuadratureReport,
}

/// Comparison of the direct and substituted periods at one amplitude.
#[derive(Debug, Clone, Copy)]
pub struct EndpointBias {
    pub theta0_rad: f64,
    pub direct: NumericPeriod,
    pub substituted: NumericPeriod,
}

impl EndpointBias {
    /// T_direct − T_num [s].
    pub fn bias(&self) -> f64 {
        self.direct.value - self.substituted.value
    }

    pub fn relative_bias(&self) -> f64 {
        self.bias() / self.substituted.value
    }
}

fn check_amplitude(theta0: f64) -> PendulumResult<()> {
    if !theta0.is_finite() || theta0 < 0.0 || theta0 >= PI {
        return Err(PendulumError::Configuration(format!(
            "amplitude must lie in [0, π), got {theta0} rad"
        )));
    }
    Ok(())
}

fn check_steps(steps: usize) -> PendulumResult<()> {
    if steps == 0 || steps % 2 != 0 {
        return Err(PendulumError::Configuration(format!(
            "integral_steps must be a positive even number, got {steps}"
        )));
    }
    Ok(())
}

/// I(θ0) by Simpson on the θ grid, radicand cos θ − cos θ0 clamped to `epsilon`.
pub fn direct_period_integral(
    theta0: f64,
    steps: usize,
    epsilon: f64,
) -> PendulumResult<QuadratureReport> {
    check_amplitude(theta0)?;
    check_steps(steps)?;
    let cos_theta0 = theta0.cos();
    simpson_inverse_sqrt(|theta| theta.cos() - cos_theta0, 2.0, 0.0, theta0, steps, epsilon)
}

/// I(θ0) by Simpson on the φ grid after sin(θ/2) = k sin φ.
pub fn period_integral(
    theta0: f64,
    steps: usize,
    epsilon: f64,
) -> PendulumResult<QuadratureReport> {
    check_amplitude(theta0)?;
    check_steps(steps)?;
    let k = (0.5 * theta0).sin();
    let k2 = k * k;
    simpson_inverse_sqrt(
        |phi| {
            let s = phi.sin();
            1.0 - k2 * s * s
        },
        1.0,
        0.0,
        FRAC_PI_2,
        steps,
        epsilon,
    )
}

/// T_num(θ0) = 4 √(L/g) · I(θ0) [s].
pub fn numeric_period(config: &PendulumConfig, sample: &AngleSample) -> PendulumResult<NumericPeriod> {
    let quadrature = period_integral(sample.theta_rad, config.integral_steps, config.epsilon)?;
    Ok(NumericPeriod {
        value: 4.0 * config.time_scale() * quadrature.value,
        quadrature,
    })
}

/// Direct-grid period T = 4 √(L/g) · I_direct(θ0) [s], endpoint bias included.
pub fn direct_numeric_period(
    config: &PendulumConfig,
    sample: &AngleSample,
) -> PendulumResult<NumericPeriod> {
    let quadrature =
        direct_period_integral(sample.theta_rad, config.integral_steps, config.epsilon)?;
    Ok(NumericPeriod {
        value: 4.0 * config.time_scale() * quadrature.value,
        quadrature,
    })
}

/// Quantify the endpoint-clamp bias of the direct grid at one amplitude,
/// using the configured step count and ε.
pub fn endpoint_bias(config: &PendulumConfig, sample: &AngleSample) -> PendulumResult<EndpointBias> {
    Ok(EndpointBias {
        theta0_rad: sample.theta_rad,
        direct: direct_numeric_period(config, sample)?,
        substituted: numeric_period(config, sample)?,
    })
}
