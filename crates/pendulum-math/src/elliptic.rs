// ─────────────────────────────────────────────────────────────────────
// Pendulum Period Core — Elliptic
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Complete elliptic integral of the first kind K(k).
//!
//! Primary evaluation is the arithmetic-geometric mean (DLMF 19.8.5):
//!   K(k) = π / (2 · AGM(1, √(1 − k²)))
//! A&S 17.3.34 polynomial form is kept as an independent cross-check.
//! Functions taking `k` use the modulus; `ellipk_poly` takes m = k^2.

use std::f64::consts::PI;

use pendulum_types::constants::AGM_MAX_ITERATIONS;
use pendulum_types::error::{PendulumError, PendulumResult};

/// Record of one AGM run.
#[derive(Debug, Clone)]
pub struct AgmTrace {
    /// (a_n + b_n) / 2 at the stopping iteration.
    pub mean: f64,
    /// Number of update steps applied.
    pub iterations: usize,
    /// |a_n − b_n| for n = 0..=iterations.
    pub gaps: Vec<f64>,
    /// Whether the final gap fell below the tolerance before the cap.
    pub converged: bool,
}

impl AgmTrace {
    pub fn final_gap(&self) -> f64 {
        self.gaps.last().copied().unwrap_or(0.0)
    }
}

/// Arithmetic-geometric mean of `a0` and `b0`.
///
/// Iterates a ← (a+b)/2, b ← √(ab) until |a − b| < `tol` or `max_iter`
/// updates have been applied.
pub fn agm(a0: f64, b0: f64, tol: f64, max_iter: usize) -> PendulumResult<AgmTrace> {
    if !(a0.is_finite() && b0.is_finite()) || a0 < 0.0 || b0 < 0.0 {
        return Err(PendulumError::Domain(format!(
            "agm requires finite non-negative arguments, got a0={a0}, b0={b0}"
        )));
    }

    let mut a = a0;
    let mut b = b0;
    let mut gaps = Vec::with_capacity(max_iter + 1);
    let mut iterations = 0;
    let mut converged = false;

    loop {
        let gap = (a - b).abs();
        gaps.push(gap);
        if gap < tol {
            converged = true;
            break;
        }
        if iterations == max_iter {
            break;
        }
        let a_next = 0.5 * (a + b);
        b = (a * b).sqrt();
        a = a_next;
        iterations += 1;
    }

    Ok(AgmTrace {
        mean: 0.5 * (a + b),
        iterations,
        gaps,
        converged,
    })
}

/// AGM run behind K(k), with the standard iteration cap.
pub fn ellipk_agm_trace(k: f64, tol: f64) -> PendulumResult<AgmTrace> {
    if k.is_nan() || k.abs() >= 1.0 {
        return Err(PendulumError::Domain(format!(
            "K(k) requires |k| < 1, got {k}"
        )));
    }
    agm(1.0, (1.0 - k * k).sqrt(), tol, AGM_MAX_ITERATIONS)
}

/// Complete elliptic integral of the first kind K(k) via the AGM.
///
/// Matches `scipy.special.ellipk(k**2)`.
pub fn ellipk_agm(k: f64, tol: f64) -> PendulumResult<f64> {
    let trace = ellipk_agm_trace(k, tol)?;
    Ok(PI / (2.0 * trace.mean))
}

/// A&S 17.3.34 coefficients of the regular part, ascending powers of m1 = 1 − m.
const POLY_A: [f64; 5] = [
    1.386_294_361_12,
    0.096_663_442_59,
    0.035_900_923_83,
    0.037_425_637_13,
    0.014_511_962_12,
];
/// A&S 17.3.34 coefficients multiplying ln(1/m1).
const POLY_B: [f64; 5] = [
    0.5,
    0.124_985_935_97,
    0.068_802_485_76,
    0.033_283_553_46,
    0.004_417_870_12,
];

fn horner(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// K(m) from the A&S 17.3.34 polynomial, m = k², 0 <= m < 1.
/// Absolute error below 2e-8; used to cross-check the AGM value.
pub fn ellipk_poly(m: f64) -> f64 {
    debug_assert!((0.0..1.0).contains(&m), "ellipk_poly requires 0 <= m < 1, got {m}");
    let m1 = 1.0 - m;
    horner(&POLY_A, m1) - horner(&POLY_B, m1) * m1.ln()
}
