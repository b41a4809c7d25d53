// ─────────────────────────────────────────────────────────────────────
// Pendulum Period Core — Error Analysis
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Relative errors of the approximate models against a reference period.
//!
//!   err_small  = |T0 − T_ref| / T_ref
//!   err_series = |T_series − T_ref| / T_ref
//!
//! Errors here are fractions; conversion to percent happens at assembly.

use ndarray::Array1;
use pendulum_types::error::{PendulumError, PendulumResult};

/// Per-sample relative errors plus their maxima.
#[derive(Debug, Clone)]
pub struct ErrorAnalysis {
    pub err_small: Array1<f64>,
    pub err_series: Array1<f64>,
    pub max_small: ErrorPeak,
    pub max_series: ErrorPeak,
}

/// Largest error of one series and where it occurs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorPeak {
    pub value: f64,
    pub index: usize,
    pub theta_deg: f64,
}

/// |estimate − reference| / reference, elementwise.
pub fn relative_errors(estimate: &Array1<f64>, reference: &Array1<f64>) -> Array1<f64> {
    (estimate - reference).mapv(f64::abs) / reference
}

/// First index of the maximum (ties resolve to the lower amplitude).
fn peak(errors: &Array1<f64>, degrees: &Array1<f64>) -> ErrorPeak {
    let (index, value) = errors
        .iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |(bi, bv), (i, &v)| {
            if v > bv {
                (i, v)
            } else {
                (bi, bv)
            }
        });
    ErrorPeak {
        value,
        index,
        theta_deg: degrees[index],
    }
}

/// Compare the constant T0 and the per-sample series periods against `reference`.
pub fn analyze(
    t0: f64,
    t_series: &Array1<f64>,
    reference: &Array1<f64>,
    degrees: &Array1<f64>,
) -> PendulumResult<ErrorAnalysis> {
    let n = degrees.len();
    if n == 0 || t_series.len() != n || reference.len() != n {
        return Err(PendulumError::Domain(format!(
            "error analysis needs equal non-empty series, got degrees={n}, series={}, reference={}",
            t_series.len(),
            reference.len()
        )));
    }
    if let Some(bad) = reference.iter().find(|v| !(v.is_finite() && **v > 0.0)) {
        return Err(PendulumError::Domain(format!(
            "reference periods must be finite and positive, found {bad}"
        )));
    }

    let t0_array = Array1::from_elem(n, t0);
    let err_small = relative_errors(&t0_array, reference);
    let err_series = relative_errors(t_series, reference);
    let max_small = peak(&err_small, degrees);
    let max_series = peak(&err_series, degrees);

    Ok(ErrorAnalysis {
        err_small,
        err_series,
        max_small,
        max_series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_relative_errors_nonnegative() {
        let est = array![0.9, 1.0, 1.2];
        let reference = array![1.0, 1.0, 1.0];
        let err = relative_errors(&est, &reference);
        assert!((err[0] - 0.1).abs() < 1e-15);
        assert_eq!(err[1], 0.0);
        assert!((err[2] - 0.2).abs() < 1e-15);
    }

    #[test]
    fn test_peak_first_index_on_tie() {
        let errors = array![0.1, 0.3, 0.3, 0.2];
        let degrees = array![5.0, 10.0, 15.0, 20.0];
        let p = peak(&errors, &degrees);
        assert_eq!(p.index, 1);
        assert_eq!(p.theta_deg, 10.0);
        assert_eq!(p.value, 0.3);
    }

    #[test]
    fn test_analyze_tracks_argmax() {
        let degrees = array![10.0, 20.0, 30.0, 40.0];
        let reference = array![2.0, 2.1, 2.2, 2.3];
        let series = array![2.0, 2.09, 2.19, 2.28];
        let a = analyze(2.0, &series, &reference, &degrees).unwrap();
        assert_eq!(a.max_small.index, 3);
        assert_eq!(a.max_small.theta_deg, 40.0);
        assert_eq!(a.max_series.index, 3);
        assert_eq!(a.err_small[0], 0.0);
    }

    #[test]
    fn test_analyze_rejects_mismatch_and_bad_reference() {
        let degrees = array![10.0, 20.0];
        assert!(analyze(2.0, &array![2.0], &array![2.0, 2.0], &degrees).is_err());
        assert!(analyze(2.0, &array![2.0, 2.0], &array![2.0, 0.0], &degrees).is_err());
        assert!(analyze(2.0, &array![2.0, 2.0], &array![f64::NAN, 2.0], &degrees).is_err());
    }
}
