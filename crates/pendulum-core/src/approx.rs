// ─────────────────────────────────────────────────────────────────────
// Pendulum Period Core — Approximate Period Models
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Small-angle and fourth-order series approximations of the period.

use std::f64::consts::PI;

use pendulum_types::config::PendulumConfig;
use pendulum_types::constants::{SERIES_C2, SERIES_C4};

/// Small-angle period T0 = 2π √(L/g) [s]. Independent of amplitude.
pub fn small_angle_period(config: &PendulumConfig) -> f64 {
    2.0 * PI * config.time_scale()
}

/// Series correction factor 1 + θ²/16 + 11θ⁴/3072 (θ in radians).
pub fn series_factor(theta_rad: f64) -> f64 {
    let t2 = theta_rad * theta_rad;
    1.0 + t2 * (SERIES_C2 + SERIES_C4 * t2)
}

/// Fourth-order series period T0 · (1 + θ²/16 + 11θ⁴/3072) [s].
pub fn series_period(t0: f64, theta_rad: f64) -> f64 {
    t0 * series_factor(theta_rad)
}
