//! Pendulum period models, quadrature, AGM reference and error analysis.
//!
//! Stage 1: amplitude grid, small-angle and series models
//! Stage 2: singular Simpson integrator, AGM reference
//! Stage 3: error analysis, result assembly, pipeline, verification

pub mod analysis;
pub mod approx;
pub mod exact;
pub mod grid;
pub mod pipeline;
pub mod quadrature;
pub mod results;
pub mod verify;
