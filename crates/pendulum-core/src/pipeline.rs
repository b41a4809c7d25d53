// ─────────────────────────────────────────────────────────────────────
// Pendulum Period Core — Pipeline
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Single-pass batch pipeline:
//! validate → grid → {T0, T_series, T_num, T_exact} per sample → errors → assembly.
//!
//! Errors are measured against the AGM period (`PeriodMethod::ExactAgm`).

use ndarray::Array1;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use pendulum_types::config::PendulumConfig;
use pendulum_types::constants::SERIES_DOMAIN_LIMIT_DEG;
use pendulum_types::error::PendulumResult;
use pendulum_types::sample::{AngleSample, PeriodMethod};

use crate::analysis::analyze;
use crate::approx::{series_period, small_angle_period};
use crate::exact::exact_period;
use crate::grid::ThetaGrid;
use crate::quadrature::numeric_period;
use crate::results::{assemble, ResultSet, SamplePeriods};

/// Reference model for the error columns.
pub const REFERENCE_METHOD: PeriodMethod = PeriodMethod::ExactAgm;

/// All per-sample periods for one amplitude.
pub fn evaluate_sample(
    config: &PendulumConfig,
    t0: f64,
    sample: &AngleSample,
) -> PendulumResult<SamplePeriods> {
    let t_series = series_period(t0, sample.theta_rad);
    let numeric = numeric_period(config, sample)?;
    let exact = exact_period(config, sample)?;

    if numeric.quadrature.clamped_points > 0 {
        warn!(
            theta0_deg = sample.theta_deg,
            clamped = numeric.quadrature.clamped_points,
            "Quadrature radicand clamped"
        );
    }
    debug!(
        theta0_deg = sample.theta_deg,
        t_series,
        t_num = numeric.value,
        t_exact = exact.value,
        agm_iterations = exact.agm.iterations,
        agm_final_gap = exact.agm.final_gap(),
        "Sample evaluated"
    );

    Ok(SamplePeriods {
        sample: *sample,
        t_series,
        t_num: numeric.value,
        t_exact: exact.value,
        clamped_points: numeric.quadrature.clamped_points,
        agm_iterations: exact.agm.iterations,
    })
}

fn prepare(config: &PendulumConfig) -> PendulumResult<(ThetaGrid, f64)> {
    config.validate()?;
    if config.theta_high_deg >= SERIES_DOMAIN_LIMIT_DEG {
        warn!(
            theta_high_deg = config.theta_high_deg,
            "Amplitude range reaches {SERIES_DOMAIN_LIMIT_DEG}°, beyond the series model's intended domain"
        );
    }
    let grid = ThetaGrid::from_config(config)?;
    let t0 = small_angle_period(config);
    info!(
        samples = grid.len(),
        theta_low_deg = config.theta_low_deg,
        theta_high_deg = config.theta_high_deg,
        integral_steps = config.integral_steps,
        t0,
        "Starting period analysis"
    );
    Ok((grid, t0))
}

fn finish(
    config: &PendulumConfig,
    grid: &ThetaGrid,
    t0: f64,
    periods: Vec<SamplePeriods>,
) -> PendulumResult<ResultSet> {
    let t_series = Array1::from_iter(periods.iter().map(|p| p.t_series));
    let reference = Array1::from_iter(periods.iter().map(|p| p.t_exact));
    let errors = analyze(t0, &t_series, &reference, &grid.degrees)?;
    let set = assemble(config, t0, &periods, &errors, REFERENCE_METHOD);
    info!(
        max_err_small_pct = set.summary.max_err_small,
        max_err_series_pct = set.summary.max_err_series,
        largest_error_at_deg = set.summary.largest_error_at_deg,
        "Period analysis complete"
    );
    Ok(set)
}

/// Run the analysis sequentially.
pub fn run(config: &PendulumConfig) -> PendulumResult<ResultSet> {
    let (grid, t0) = prepare(config)?;
    let periods = grid
        .samples()
        .iter()
        .map(|s| evaluate_sample(config, t0, s))
        .collect::<PendulumResult<Vec<_>>>()?;
    finish(config, &grid, t0, periods)
}

/// Run the analysis with samples mapped over the rayon pool.
/// Each sample writes its own slot, so output order and values match `run`.
pub fn run_parallel(config: &PendulumConfig) -> PendulumResult<ResultSet> {
    let (grid, t0) = prepare(config)?;
    let periods = grid
        .samples()
        .par_iter()
        .map(|s| evaluate_sample(config, t0, s))
        .collect::<PendulumResult<Vec<_>>>()?;
    finish(config, &grid, t0, periods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pendulum_types::error::PendulumError;

    fn record_at(set: &ResultSet, deg: f64) -> &crate::results::SampleRecord {
        set.records
            .iter()
            .find(|r| (r.theta0_deg - deg).abs() < 1e-9)
            .unwrap()
    }

    #[test]
    fn test_reference_run_30_deg() {
        let set = run(&PendulumConfig::reference()).unwrap();
        let r = record_at(&set, 30.0);
        assert!((r.t0 - 2.0064).abs() < 5e-5);
        assert!((r.t_series - 2.0413).abs() < 5e-5);
        assert!((r.t_num - 2.0413).abs() < 5e-5);
        assert!((r.err_small - 1.71).abs() < 5e-3, "err_small = {}", r.err_small);
        assert!((r.err_series - 0.00049).abs() < 1e-5, "err_series = {}", r.err_series);
    }

    #[test]
    fn test_reference_run_60_deg() {
        let set = run(&PendulumConfig::reference()).unwrap();
        let r = record_at(&set, 60.0);
        assert!((r.t_series - 2.1526).abs() < 5e-5);
        assert!((r.t_num - 2.1532).abs() < 5e-5);
        assert!((r.err_small - 6.82).abs() < 5e-3, "err_small = {}", r.err_small);
        assert!((r.err_series - 0.0314).abs() < 5e-5, "err_series = {}", r.err_series);
    }

    #[test]
    fn test_summary_of_reference_run() {
        let set = run(&PendulumConfig::reference()).unwrap();
        assert_eq!(set.len(), 12);
        assert_eq!(set.summary.theta_range_deg, [5.0, 60.0]);
        assert_eq!(set.summary.largest_error_at_deg, 60.0);
        assert_eq!(set.summary.largest_error_series_at_deg, 60.0);
        assert_eq!(set.summary.reference, PeriodMethod::ExactAgm);
        assert_eq!(set.summary.clamped_points, 0);
        assert!((set.summary.max_err_small - 6.82).abs() < 5e-3);
    }

    #[test]
    fn test_t0_shared_by_all_samples() {
        let set = run(&PendulumConfig::reference()).unwrap();
        let t0 = set.records[0].t0;
        assert!(set.records.iter().all(|r| r.t0 == t0));
    }

    #[test]
    fn test_series_beats_small_angle() {
        let cfg = PendulumConfig {
            theta_low_deg: 0.5,
            theta_high_deg: 89.5,
            sample_count: 90,
            ..PendulumConfig::reference()
        };
        let set = run(&cfg).unwrap();
        for r in &set.records {
            assert!(r.err_series < r.err_small, "θ0={}°", r.theta0_deg);
        }
    }

    #[test]
    fn test_errors_monotone_5_to_60() {
        let cfg = PendulumConfig {
            sample_count: 56,
            ..PendulumConfig::reference()
        };
        let set = run(&cfg).unwrap();
        for w in set.records.windows(2) {
            assert!(w[1].err_small >= w[0].err_small);
            assert!(w[1].err_series >= w[0].err_series);
        }
    }

    #[test]
    fn test_numeric_and_exact_agree() {
        let set = run(&PendulumConfig::reference()).unwrap();
        for r in &set.records {
            assert!((r.t_num - r.t_exact).abs() / r.t_exact < 1e-12);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let cfg = PendulumConfig {
            sample_count: 40,
            ..PendulumConfig::reference()
        };
        let seq = run(&cfg).unwrap();
        let par = run_parallel(&cfg).unwrap();
        assert_eq!(seq.len(), par.len());
        for (a, b) in seq.records.iter().zip(&par.records) {
            assert_eq!(a.theta0_deg, b.theta0_deg);
            assert_eq!(a.t_num, b.t_num);
            assert_eq!(a.t_exact, b.t_exact);
            assert_eq!(a.err_series, b.err_series);
        }
    }

    #[test]
    fn test_odd_steps_fail_before_quadrature() {
        let cfg = PendulumConfig {
            integral_steps: 2001,
            ..PendulumConfig::reference()
        };
        let err = run(&cfg).unwrap_err();
        assert!(matches!(err, PendulumError::Configuration(_)));
        assert!(run_parallel(&cfg).unwrap_err().is_configuration());
    }

    #[test]
    fn test_wide_range_still_completes() {
        let cfg = PendulumConfig {
            theta_high_deg: 170.0,
            ..PendulumConfig::reference()
        };
        let set = run(&cfg).unwrap();
        assert_eq!(set.len(), 12);
        assert!(set.records.iter().all(|r| r.t_num.is_finite()));
    }
}
