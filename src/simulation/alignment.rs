//! Planetary-alignment detection over recorded position histories
//!
//! Scans every recorded step for instants where the innermost bodies'
//! positions relative to the center are nearly collinear: their unit
//! relative vectors all lie within a perpendicular-distance tolerance of
//! the line through the origin along the mean direction.

use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, System};

/// Times at which the innermost `alignment_count` bodies align with the
/// central body, within `alignment_tol` (default: within 5 degrees).
///
/// Consecutive qualifying steps are each recorded; callers wanting one
/// event per alignment window must deduplicate themselves.
pub fn detect_alignments(sys: &System, params: &Parameters) -> Vec<f64> {
    let mut events = Vec::new();
    if sys.bodies.len() < 2 {
        return events;
    }

    let central = &sys.bodies[0];
    let count = params.alignment_count.min(sys.bodies.len() - 1);
    let selected = &sys.bodies[1..=count];

    let steps = selected
        .iter()
        .map(|b| b.positions.len())
        .min()
        .unwrap_or(0)
        .min(central.positions.len());

    for i in 1..steps {
        // Position vectors relative to the center at this step
        let vectors: Vec<NVec2> = selected
            .iter()
            .map(|b| b.positions[i] - central.positions[i])
            .collect();

        // The mean vector defines the candidate alignment axis
        let mean: NVec2 = vectors.iter().copied().sum::<NVec2>() / vectors.len() as f64;
        let mean_norm = mean.norm();
        if mean_norm == 0.0 {
            continue; // no well-defined alignment axis at this step
        }
        let dir = mean / mean_norm;

        // Perpendicular distance of each unit relative vector to the axis
        let mut aligned = true;
        for v in &vectors {
            let norm = v.norm();
            if norm <= f64::EPSILON {
                aligned = false; // body sits on the center, angle undefined
                break;
            }
            let u = *v / norm;
            let dist = (u.x * dir.y - u.y * dir.x).abs();
            if dist > params.alignment_tol {
                aligned = false;
                break;
            }
        }

        if aligned {
            events.push(i as f64 * params.dt);
        }
    }
    events
}
