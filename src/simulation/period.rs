//! Orbital-period detection over a body's recorded position history
//!
//! Walks the history accumulating the angle swept relative to the central
//! body; the first step at which the cumulative angle reaches 2π fixes the
//! period. Runs post-hoc, after the stepping loop has finished.

use crate::simulation::states::Body;

/// Time for `body` to sweep a full revolution around `central`, or `None`
/// if the recorded history never completes one.
///
/// Positions are taken relative to the central body at the same step, so
/// the center's own motion does not bias the swept angle. A step where
/// either relative vector has near-zero norm leaves the angle undefined;
/// that step contributes nothing rather than poisoning the sum with NaN.
pub fn orbital_period(body: &Body, central: &Body, dt: f64) -> Option<f64> {
    let steps = body.positions.len().min(central.positions.len());
    let mut rotation = 0.0;
    for i in 1..steps {
        // Reposition to account for central-body movement
        let prev = body.positions[i - 1] - central.positions[i - 1];
        let curr = body.positions[i] - central.positions[i];

        let denom = prev.norm() * curr.norm();
        if denom <= f64::EPSILON {
            continue; // degenerate orbit at this step, angle undefined
        }

        // Angle travelled in one step; clamp guards acos against rounding
        // pushing the cosine marginally outside [-1, 1]
        let cos_angle = (prev.dot(&curr) / denom).clamp(-1.0, 1.0);
        rotation += cos_angle.acos();

        if rotation >= 2.0 * std::f64::consts::PI {
            // Record the first time we pass 2π and stop
            return Some(i as f64 * dt);
        }
    }
    None
}
