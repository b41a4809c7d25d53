// ─────────────────────────────────────────────────────────────────────
// Pendulum Period Core — Property-Based Tests (proptest) for pendulum-math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for pendulum-math using proptest.
//!
//! Covers: Simpson exactness and linearity, clamp accounting,
//! AGM convergence, elliptic K cross-checks.

use pendulum_math::elliptic::{agm, ellipk_agm, ellipk_agm_trace, ellipk_poly};
use pendulum_math::simpson::{simpson, simpson_inverse_sqrt};
use proptest::prelude::*;
use std::f64::consts::FRAC_PI_2;

// ── Simpson Properties ───────────────────────────────────────────────

proptest! {
    /// Simpson is exact for cubic polynomials on any even grid.
    #[test]
    fn simpson_exact_cubic(
        c0 in -5.0f64..5.0,
        c1 in -5.0f64..5.0,
        c2 in -5.0f64..5.0,
        c3 in -5.0f64..5.0,
        b in 0.1f64..3.0,
        half in 1usize..50,
    ) {
        let f = |x: f64| c0 + x * (c1 + x * (c2 + x * c3));
        let exact = c0 * b + c1 * b.powi(2) / 2.0 + c2 * b.powi(3) / 3.0 + c3 * b.powi(4) / 4.0;
        let got = simpson(f, 0.0, b, 2 * half).unwrap();
        prop_assert!((got - exact).abs() < 1e-9 * (1.0 + exact.abs()),
            "got {}, exact {}", got, exact);
    }

    /// Odd step counts are always rejected.
    #[test]
    fn simpson_odd_rejected(half in 0usize..1000) {
        prop_assert!(simpson(|x| x, 0.0, 1.0, 2 * half + 1).is_err());
    }

    /// A radicand bounded away from zero is never clamped.
    #[test]
    fn clamp_inert_above_floor(k in 0.0f64..0.99, half in 1usize..200) {
        let report = simpson_inverse_sqrt(
            |phi| 1.0 - k * k * phi.sin().powi(2),
            1.0,
            0.0,
            FRAC_PI_2,
            2 * half,
            1e-10,
        ).unwrap();
        prop_assert_eq!(report.clamped_points, 0);
        prop_assert_eq!(report.evaluations, 2 * half + 1);
        prop_assert!(report.value.is_finite());
    }

    /// A radicand vanishing at the upper limit clamps exactly one ordinate.
    #[test]
    fn clamp_fires_once_at_singular_endpoint(b in 0.1f64..1.5, half in 2usize..500) {
        let cb = b.cos();
        let report = simpson_inverse_sqrt(
            |x| x.cos() - cb,
            2.0,
            0.0,
            b,
            2 * half,
            1e-10,
        ).unwrap();
        prop_assert_eq!(report.clamped_points, 1);
        prop_assert!(report.value.is_finite() && report.value > 0.0);
    }
}

// ── AGM / Elliptic Properties ────────────────────────────────────────

proptest! {
    /// |a_n − b_n| strictly decreases and converges well inside the cap.
    #[test]
    fn agm_gap_strictly_decreasing(k in 0.0f64..0.9999) {
        let trace = ellipk_agm_trace(k, 1e-10).unwrap();
        prop_assert!(trace.converged);
        prop_assert!(trace.iterations <= 10, "{} iterations", trace.iterations);
        for w in trace.gaps.windows(2) {
            prop_assert!(w[1] < w[0], "gaps not decreasing: {:?}", trace.gaps);
        }
    }

    /// The AGM lies between the geometric and arithmetic means of its inputs.
    #[test]
    fn agm_bracketed(a in 0.01f64..10.0, b in 0.01f64..10.0) {
        let m = agm(a, b, 1e-14, 25).unwrap().mean;
        let lo = (a * b).sqrt();
        let hi = 0.5 * (a + b);
        prop_assert!(m >= lo * (1.0 - 1e-12) && m <= hi * (1.0 + 1e-12),
            "agm({}, {}) = {} not in [{}, {}]", a, b, m, lo, hi);
    }

    /// AGM and A&S polynomial K agree to the polynomial's accuracy.
    #[test]
    fn ellipk_methods_agree(k in 0.0f64..0.99) {
        let a = ellipk_agm(k, 1e-12).unwrap();
        let p = ellipk_poly(k * k);
        prop_assert!((a - p).abs() < 5e-8, "agm={}, poly={}", a, p);
    }

    /// K is non-decreasing in k, starting from π/2.
    #[test]
    fn ellipk_monotone(k1 in 0.0f64..0.98, dk in 0.0f64..0.01) {
        let lo = ellipk_agm(k1, 1e-12).unwrap();
        let hi = ellipk_agm(k1 + dk, 1e-12).unwrap();
        prop_assert!(lo >= FRAC_PI_2 - 1e-15);
        prop_assert!(hi >= lo - 1e-12);
    }

    /// Simpson over the substituted integrand reproduces the AGM value.
    #[test]
    fn simpson_matches_agm(k in 0.0f64..0.95) {
        let q = simpson_inverse_sqrt(
            |phi| 1.0 - k * k * phi.sin().powi(2),
            1.0,
            0.0,
            FRAC_PI_2,
            400,
            1e-10,
        ).unwrap();
        let kk = ellipk_agm(k, 1e-12).unwrap();
        prop_assert!((q.value - kk).abs() / kk < 1e-10,
            "simpson={}, agm={}", q.value, kk);
    }
}
