//! Error taxonomy for the simulation core
//!
//! Only two conditions are fatal: a configuration that cannot produce a
//! meaningful run, and a singular force evaluation (coincident bodies).
//! Degenerate geometry inside the detectors is recovered locally by
//! skipping the offending step, and an orbital period that never resolves
//! is an `Option::None`, not an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Rejected at construction, before any stepping.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Two bodies occupy the same position, the gravitational force is
    /// undefined and the run cannot continue.
    #[error("bodies `{a}` and `{b}` coincide at t = {t}; gravitational force is singular")]
    SingularGeometry { a: String, b: String, t: f64 },
}
