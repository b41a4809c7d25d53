// ─────────────────────────────────────────────────────────────────────
// Pendulum Period Core — AGM Reference Period
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Exact period T_exact = 4 √(L/g) · K(k), k = sin(θ0/2), with K from the AGM.

use pendulum_math::elliptic::{ellipk_agm_trace, AgmTrace};
use pendulum_types::config::PendulumConfig;
use pendulum_types::error::PendulumResult;
use pendulum_types::sample::AngleSample;
use std::f64::consts::PI;

#[derive(Debug, Clone)]
pub struct ExactPeriod {
    pub value: f64,
    /// Elliptic modulus k = sin(θ0/2).
    pub modulus: f64,
    /// K(k).
    pub k_integral: f64,
    pub agm: AgmTrace,
}

/// T_exact(θ0) [s]. The AGM stops once |a_n − b_n| < ε or after 25 steps.
pub fn exact_period(config: &PendulumConfig, sample: &AngleSample) -> PendulumResult<ExactPeriod> {
    let modulus = sample.modulus();
    let agm = ellipk_agm_trace(modulus, config.epsilon)?;
    let k_integral = PI / (2.0 * agm.mean);
    Ok(ExactPeriod {
        value: 4.0 * config.time_scale() * k_integral,
        modulus,
        k_integral,
        agm,
    })
}
