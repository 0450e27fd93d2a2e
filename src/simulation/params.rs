//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - step size and step count,
//! - gravitational constant `G`,
//! - energy sampling cadence,
//! - alignment-detection policy (body count and angular tolerance)
//!
//! These are explicit fields passed at construction rather than ambient
//! globals, so several independent simulations can run in one process.

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // step size, must be positive
    pub num_steps: usize, // number of steps in the run
    pub G: f64, // gravitational constant, units must match dt and the masses
    pub energy_interval: usize, // sample total energy every this many steps
    pub alignment_count: usize, // how many innermost bodies the alignment scan checks
    pub alignment_tol: f64, // perpendicular-distance bound, sin of the angular tolerance
}

impl Parameters {
    /// Default energy sampling cadence (every 100 steps).
    pub const DEFAULT_ENERGY_INTERVAL: usize = 100;

    /// Default number of innermost bodies checked for alignment.
    pub const DEFAULT_ALIGNMENT_COUNT: usize = 5;

    /// Default alignment tolerance: within 5 degrees of the reference line.
    pub fn default_alignment_tol() -> f64 {
        (std::f64::consts::PI / 36.0).sin()
    }
}
