// ─────────────────────────────────────────────────────────────────────
// Pendulum Period Core — Simpson Quadrature
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Composite Simpson's 1/3 rule.
//!
//!   ∫_a^b f dx ≈ (h/3) [f(x_0) + f(x_n) + 4 Σ_odd f(x_i) + 2 Σ_even f(x_i)]
//!
//! with h = (b − a)/n and n even. `simpson_inverse_sqrt` specialises the rule
//! to integrands of the form 1/√(s·r(x)) whose radicand r may touch zero at a
//! grid point: r is clamped to a floor ε before the square root, and the
//! number of clamped ordinates is reported alongside the value.

use pendulum_types::error::{PendulumError, PendulumResult};

/// Result of a clamped Simpson evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureReport {
    pub value: f64,
    /// Subintervals used.
    pub steps: usize,
    /// Ordinates evaluated (steps + 1).
    pub evaluations: usize,
    /// Ordinates whose radicand fell below ε and was clamped.
    pub clamped_points: usize,
}

impl QuadratureReport {
    pub fn clamp_rate(&self) -> f64 {
        if self.evaluations == 0 {
            return 0.0;
        }
        self.clamped_points as f64 / self.evaluations as f64
    }
}

fn check_steps(n: usize) -> PendulumResult<()> {
    if n == 0 || n % 2 != 0 {
        return Err(PendulumError::Domain(format!(
            "Simpson's rule needs a positive even number of subintervals, got {n}"
        )));
    }
    Ok(())
}

/// Simpson weight for ordinate `i` of `n`.
#[inline]
fn weight(i: usize, n: usize) -> f64 {
    if i == 0 || i == n {
        1.0
    } else if i % 2 == 1 {
        4.0
    } else {
        2.0
    }
}

/// Abscissa `i` of `n` on [a, b]; the last point is pinned to `b`.
#[inline]
fn node(a: f64, b: f64, h: f64, i: usize, n: usize) -> f64 {
    if i == n {
        b
    } else {
        a + i as f64 * h
    }
}

/// Composite Simpson integral of `f` over [a, b] with `n` subintervals.
pub fn simpson<F>(mut f: F, a: f64, b: f64, n: usize) -> PendulumResult<f64>
where
    F: FnMut(f64) -> f64,
{
    check_steps(n)?;
    let h = (b - a) / n as f64;
    let mut sum = 0.0;
    for i in 0..=n {
        sum += weight(i, n) * f(node(a, b, h, i, n));
    }
    Ok(sum * h / 3.0)
}

/// Simpson integral of 1/√(scale · max(radicand(x), epsilon)) over [a, b].
///
/// The clamp runs at every ordinate. It is inert wherever the radicand
/// exceeds `epsilon`; where it fires the ordinate is capped at
/// 1/√(scale · epsilon) and counted in `clamped_points`.
pub fn simpson_inverse_sqrt<R>(
    mut radicand: R,
    scale: f64,
    a: f64,
    b: f64,
    n: usize,
    epsilon: f64,
) -> PendulumResult<QuadratureReport>
where
    R: FnMut(f64) -> f64,
{
    check_steps(n)?;
    if epsilon.is_nan() || epsilon <= 0.0 || scale.is_nan() || scale <= 0.0 {
        return Err(PendulumError::Domain(format!(
            "clamped integrand needs epsilon > 0 and scale > 0, got epsilon={epsilon}, scale={scale}"
        )));
    }

    let h = (b - a) / n as f64;
    let mut sum = 0.0;
    let mut clamped_points = 0;
    for i in 0..=n {
        let r = radicand(node(a, b, h, i, n));
        let r = if r < epsilon {
            clamped_points += 1;
            epsilon
        } else {
            r
        };
        sum += weight(i, n) / (scale * r).sqrt();
    }

    Ok(QuadratureReport {
        value: sum * h / 3.0,
        steps: n,
        evaluations: n + 1,
        clamped_points,
    })
}
