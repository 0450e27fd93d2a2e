//! Force / acceleration contributors for the solar-system engine
//!
//! Defines the acceleration trait and the direct pairwise Newtonian
//! gravity term. Forces are always evaluated from one consistent position
//! snapshot: the caller accumulates all accelerations before mutating any
//! body, otherwise the integration becomes order-dependent.

use crate::simulation::error::SimError;
use crate::simulation::states::{NVec2, System};

/// Collection of acceleration terms.
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) -> Result<(), SimError> {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out)?;
        }
        Ok(())
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AccelSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccelSet")
            .field("terms", &self.terms.len())
            .finish()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]) -> Result<(), SimError>;
}

/// Exact pairwise Newtonian gravity, no softening.
///
/// A coincident pair of bodies makes the force singular; that is a
/// configuration error and surfaces as [`SimError::SingularGeometry`].
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]) -> Result<(), SimError> {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return Ok(());
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &sys.bodies[i];
            let xi = bi.x; // position of body i
            let mi = bi.m; // mass of body i

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // r is the displacement vector from i to j:
                // i feels a pull along +r, j feels a pull along -r
                let r = bj.x - xi;

                // Squared separation distance |r|^2
                let r2 = r.dot(&r);

                // 1 / |r|^3, as in a = G m r / |r|^3
                let inv_r = r2.sqrt().recip();
                let inv_r3 = inv_r * inv_r * inv_r;
                let coef = self.G * inv_r3;

                // Zero or near-zero separation overflows the coefficient;
                // either way the configuration is unusable
                if !coef.is_finite() {
                    return Err(SimError::SingularGeometry {
                        a: bi.name.clone(),
                        b: bj.name.clone(),
                        t,
                    });
                }

                // Newton's law, equal and opposite:
                // a_i +=  G * m_j * r / |r|^3
                // a_j += -G * m_i * r / |r|^3
                out[i] += coef * bj.m * r;
                out[j] -= coef * mi * r;
            }
        }
        Ok(())
    }
}
