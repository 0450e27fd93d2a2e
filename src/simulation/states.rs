//! Core state types for the solar-system simulation.
//!
//! Defines the per-body state and the system container:
//! - `Body` holds current position/velocity, the two-slot acceleration
//!   history used by Beeman, and the append-only position history
//! - `System` holds the ordered list of bodies and the current time `t`
//!
//! Body index 0 is the gravitational center by convention: it starts at
//! rest and is never assigned an orbital period.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

use crate::simulation::integrator::Method;

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String, // unique within a simulation
    pub m: f64, // mass
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub prev_as: [NVec2; 2], // [a at step t-1, a at step t], zero before the first step
    pub method: Method, // integration variant, fixed at construction
    pub positions: Vec<NVec2>, // one entry per elapsed step plus the initial position
    pub orbital_period: Option<f64>, // absent until (if ever) detected
}

impl Body {
    /// Build a body at its initial state with a pre-sized position history.
    /// `capacity` should be `num_steps + 1` so the hot loop never reallocates.
    pub fn new(name: impl Into<String>, m: f64, x: NVec2, v: NVec2, method: Method, capacity: usize) -> Self {
        let mut positions = Vec::with_capacity(capacity.max(1));
        positions.push(x);
        Self {
            name: name.into(),
            m,
            x,
            v,
            prev_as: [NVec2::zeros(); 2],
            method,
            positions,
            orbital_period: None,
        }
    }

    /// Number of steps this body has been advanced.
    pub fn steps_elapsed(&self) -> usize {
        self.positions.len() - 1
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // ordered collection of bodies, index 0 is the center
    pub t: f64, // time
}
