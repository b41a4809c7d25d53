// ─────────────────────────────────────────────────────────────────────
// Pendulum Period Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Standard gravity (m/s²), CGPM 1901.
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Iteration cap for the arithmetic-geometric mean.
/// Convergence is quadratic, so 25 steps saturate f64 for any k in [0, 1).
pub const AGM_MAX_ITERATIONS: usize = 25;

/// Fewest amplitude samples accepted for a run.
pub const MIN_SAMPLE_COUNT: usize = 4;

/// Amplitude at which the pendulum is inverted and the period diverges (deg).
pub const THETA_INVERTED_DEG: f64 = 180.0;

/// Upper end of the amplitude range the fourth-order series is meant for (deg).
pub const SERIES_DOMAIN_LIMIT_DEG: f64 = 90.0;

/// Series coefficient of θ² in T/T0.
pub const SERIES_C2: f64 = 1.0 / 16.0;

/// Series coefficient of θ⁴ in T/T0.
pub const SERIES_C4: f64 = 11.0 / 3072.0;
