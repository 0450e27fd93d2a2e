//! Total mechanical energy of the system
//!
//! Sampled on a fixed cadence by the engine to diagnose integrator drift:
//! the symplectic variants should oscillate around E(0), Direct Euler
//! drifts away monotonically.

use crate::simulation::states::System;

/// Kinetic energy: Σ ½ m |v|²
pub fn kinetic_energy(sys: &System) -> f64 {
    sys.bodies.iter().map(|b| 0.5 * b.m * b.v.dot(&b.v)).sum()
}

/// Potential energy over unordered pairs: Σ_{i<j} −G m_i m_j / |p_i − p_j|
#[allow(non_snake_case)]
pub fn potential_energy(sys: &System, G: f64) -> f64 {
    let n = sys.bodies.len();
    let mut pe = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            let r = (sys.bodies[i].x - sys.bodies[j].x).norm();
            pe += -G * sys.bodies[i].m * sys.bodies[j].m / r;
        }
    }
    pe
}

/// Total mechanical energy KE + PE at the system's current state.
#[allow(non_snake_case)]
pub fn total_energy(sys: &System, G: f64) -> f64 {
    kinetic_energy(sys) + potential_energy(sys, G)
}
