//! Fixed-step time integrators for the solar-system engine
//!
//! `Method` is the closed set of per-body integration variants and
//! `step_system` advances the whole system by one step, preserving the
//! barrier between "compute all accelerations from one snapshot" and
//! "apply all updates".

use crate::simulation::error::SimError;
use crate::simulation::forces::AccelSet;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, System};

/// Per-body integration variant, selected at construction and immutable.
///
/// Exhaustively matched everywhere: a fourth method cannot silently fall
/// through as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// `x += v dt`, then `v += a(t) dt`. Least stable, fastest secular
    /// energy drift.
    DirectEuler,
    /// Velocity first: `v += a(t) dt`, then `x += v(t+dt) dt`. Symplectic,
    /// bounded energy oscillation.
    EulerCromer,
    /// Multistep: `x += v dt + dt²/6 (4 a_t − a_{t−1})`, then after a second
    /// force pass at the new positions,
    /// `v += dt/6 (2 a_{t+dt} + 5 a_t − a_{t−1})`.
    ///
    /// Both acceleration-history slots start at zero, so the first step
    /// carries a small transient. This matches the reference behavior and
    /// is not corrected.
    Beeman,
}

/// Advance the system by one step.
///
/// Ordering, mandatory for all three variants:
/// 1. accumulate every body's step-`t` acceleration from the pre-update
///    snapshot into its `prev_as[1]` slot,
/// 2. update positions (and, for the Euler variants, velocities) per body,
/// 3. if any body uses Beeman, run one more force pass at the new positions
///    and finish the Beeman velocity updates, rotating the two-slot
///    acceleration history,
/// 4. append the new positions to each body's history and advance `t`.
pub fn step_system(sys: &mut System, forces: &AccelSet, params: &Parameters) -> Result<(), SimError> {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return Ok(());
    }

    let dt = params.dt;

    // a_t for every body, from the same snapshot, before any update
    let mut a_curr = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut a_curr)?;
    for (b, a) in sys.bodies.iter_mut().zip(a_curr.iter()) {
        b.prev_as[1] = *a;
    }

    let mut any_beeman = false;
    for b in sys.bodies.iter_mut() {
        match b.method {
            Method::DirectEuler => {
                // Position from the old velocity, then the velocity kick
                b.x += b.v * dt;
                b.v += b.prev_as[1] * dt;
            }
            Method::EulerCromer => {
                // Velocity first, position from the updated velocity
                b.v += b.prev_as[1] * dt;
                b.x += b.v * dt;
            }
            Method::Beeman => {
                // x_{t+dt} = x + v dt + dt²/6 (4 a_t − a_{t−1});
                // the velocity update waits for a_{t+dt}
                b.x += b.v * dt + dt * dt / 6.0 * (4.0 * b.prev_as[1] - b.prev_as[0]);
                any_beeman = true;
            }
        }
    }

    if any_beeman {
        // a_{t+dt} from the fully-updated positions
        let mut a_next = vec![NVec2::zeros(); n];
        forces.accumulate_accels(sys.t + dt, &*sys, &mut a_next)?;
        for (b, a_new) in sys.bodies.iter_mut().zip(a_next.iter()) {
            if b.method == Method::Beeman {
                b.v += dt / 6.0 * (2.0 * *a_new + 5.0 * b.prev_as[1] - b.prev_as[0]);
                // Rotate the history ring: a_{t−1} <- a_t
                b.prev_as[0] = b.prev_as[1];
            }
        }
    }

    for b in sys.bodies.iter_mut() {
        b.positions.push(b.x);
    }
    sys.t += dt;
    Ok(())
}
