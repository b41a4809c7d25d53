//! Numerical primitives for the pendulum period workspace.

pub mod elliptic;
pub mod simpson;
