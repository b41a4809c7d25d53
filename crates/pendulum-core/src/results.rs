// ─────────────────────────────────────────────────────────────────────
// Pendulum Period Core — Result Assembly
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Read-only result records handed to report and export collaborators.
//!
//! Serialized field names and units are a fixed contract:
//! periods in seconds, errors in percent, angles in degrees/radians as named.

use serde::Serialize;

use pendulum_types::config::PendulumConfig;
use pendulum_types::sample::{AngleSample, PeriodEstimate, PeriodMethod};

use crate::analysis::ErrorAnalysis;

const STATUS_SUCCESS: &str = "success";
const CALCULATION_METHOD: &str =
    "Composite Simpson on the sin(θ/2) = k·sin φ substituted period integral; \
     errors against the AGM complete elliptic integral";

/// One amplitude with all of its period estimates and errors.
#[derive(Debug, Clone, Serialize)]
pub struct SampleRecord {
    pub theta0_deg: f64,
    pub theta0_rad: f64,
    #[serde(rename = "T0")]
    pub t0: f64,
    #[serde(rename = "T_series")]
    pub t_series: f64,
    #[serde(rename = "T_num")]
    pub t_num: f64,
    /// Relative error of T0 [%].
    pub err_small: f64,
    /// Relative error of T_series [%].
    pub err_series: f64,
    #[serde(skip)]
    pub t_exact: f64,
    #[serde(skip)]
    pub clamped_points: usize,
    #[serde(skip)]
    pub agm_iterations: usize,
}

impl SampleRecord {
    pub fn sample(&self) -> AngleSample {
        AngleSample {
            theta_deg: self.theta0_deg,
            theta_rad: self.theta0_rad,
        }
    }

    pub fn period(&self, method: PeriodMethod) -> f64 {
        match method {
            PeriodMethod::SmallAngle => self.t0,
            PeriodMethod::Series => self.t_series,
            PeriodMethod::NumericSimpson => self.t_num,
            PeriodMethod::ExactAgm => self.t_exact,
        }
    }

    pub fn estimate(&self, method: PeriodMethod) -> PeriodEstimate {
        PeriodEstimate {
            sample: self.sample(),
            method,
            value: self.period(method),
        }
    }
}

/// Run-level summary.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub status: &'static str,
    pub theta_range_deg: [f64; 2],
    /// [%]
    pub max_err_small: f64,
    /// [%]
    pub max_err_series: f64,
    /// Amplitude of the largest small-angle error [deg].
    pub largest_error_at_deg: f64,
    #[serde(skip)]
    pub largest_error_small_at_deg: f64,
    #[serde(skip)]
    pub largest_error_series_at_deg: f64,
    #[serde(skip)]
    pub reference: PeriodMethod,
    /// Clamped quadrature ordinates across all samples.
    #[serde(skip)]
    pub clamped_points: usize,
}

/// Per-sample period values feeding the assembler, in grid order.
#[derive(Debug, Clone, Copy)]
pub struct SamplePeriods {
    pub sample: AngleSample,
    pub t_series: f64,
    pub t_num: f64,
    pub t_exact: f64,
    pub clamped_points: usize,
    pub agm_iterations: usize,
}

/// Complete, immutable output of one run.
#[derive(Debug, Clone, Serialize)]
pub struct ResultSet {
    pub config: PendulumConfig,
    pub records: Vec<SampleRecord>,
    pub summary: Summary,
}

/// Columnar layout of `data.json`.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnarData {
    pub metadata: Metadata,
    pub theta0_deg: Vec<f64>,
    pub theta0_rad: Vec<f64>,
    #[serde(rename = "T0")]
    pub t0: Vec<f64>,
    #[serde(rename = "T_series")]
    pub t_series: Vec<f64>,
    #[serde(rename = "T_num")]
    pub t_num: Vec<f64>,
    pub err_small: Vec<f64>,
    pub err_series: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    #[serde(flatten)]
    pub config: PendulumConfig,
    pub reference_method: PeriodMethod,
    pub calculation_method: &'static str,
}

/// Build the result set. Performs no computation beyond unit conversion.
pub fn assemble(
    config: &PendulumConfig,
    t0: f64,
    periods: &[SamplePeriods],
    errors: &ErrorAnalysis,
    reference: PeriodMethod,
) -> ResultSet {
    let records: Vec<SampleRecord> = periods
        .iter()
        .enumerate()
        .map(|(i, p)| SampleRecord {
            theta0_deg: p.sample.theta_deg,
            theta0_rad: p.sample.theta_rad,
            t0,
            t_series: p.t_series,
            t_num: p.t_num,
            err_small: 100.0 * errors.err_small[i],
            err_series: 100.0 * errors.err_series[i],
            t_exact: p.t_exact,
            clamped_points: p.clamped_points,
            agm_iterations: p.agm_iterations,
        })
        .collect();

    let summary = Summary {
        status: STATUS_SUCCESS,
        theta_range_deg: [config.theta_low_deg, config.theta_high_deg],
        max_err_small: 100.0 * errors.max_small.value,
        max_err_series: 100.0 * errors.max_series.value,
        largest_error_at_deg: errors.max_small.theta_deg,
        largest_error_small_at_deg: errors.max_small.theta_deg,
        largest_error_series_at_deg: errors.max_series.theta_deg,
        reference,
        clamped_points: periods.iter().map(|p| p.clamped_points).sum(),
    };

    ResultSet {
        config: *config,
        records,
        summary,
    }
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every period estimate of the run, sample by sample, method by method.
    pub fn estimates(&self) -> impl Iterator<Item = PeriodEstimate> + '_ {
        self.records
            .iter()
            .flat_map(|r| PeriodMethod::ALL.into_iter().map(move |m| r.estimate(m)))
    }

    pub fn columns(&self) -> ColumnarData {
        let col = |f: fn(&SampleRecord) -> f64| self.records.iter().map(f).collect::<Vec<_>>();
        ColumnarData {
            metadata: Metadata {
                config: self.config,
                reference_method: self.summary.reference,
                calculation_method: CALCULATION_METHOD,
            },
            theta0_deg: col(|r| r.theta0_deg),
            theta0_rad: col(|r| r.theta0_rad),
            t0: col(|r| r.t0),
            t_series: col(|r| r.t_series),
            t_num: col(|r| r.t_num),
            err_small: col(|r| r.err_small),
            err_series: col(|r| r.err_series),
        }
    }
}
