//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies seeded at t = 0)
//! - active force set (`AccelSet`)
//!
//! All configuration validation happens here, before any stepping: a bad
//! scenario is rejected with `SimError::InvalidConfiguration`.

use crate::configuration::config::{IntegratorConfig, ScenarioConfig};
use crate::simulation::engine::Simulation;
use crate::simulation::error::SimError;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::Method;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// A fully-initialized runtime scenario: parameters, system state at t = 0,
/// and the active force laws.
#[derive(Debug)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let p_cfg = &cfg.parameters;

        if p_cfg.timestep <= 0.0 {
            return Err(SimError::InvalidConfiguration {
                reason: format!("timestep must be positive, got {}", p_cfg.timestep),
            });
        }
        if cfg.bodies.is_empty() {
            return Err(SimError::InvalidConfiguration {
                reason: "scenario defines no bodies".into(),
            });
        }
        let energy_interval = p_cfg
            .energy_interval
            .unwrap_or(Parameters::DEFAULT_ENERGY_INTERVAL);
        if energy_interval == 0 {
            return Err(SimError::InvalidConfiguration {
                reason: "energy_interval must be at least 1".into(),
            });
        }

        let parameters = Parameters {
            dt: p_cfg.timestep,
            num_steps: p_cfg.num_iterations,
            G: p_cfg.grav_const,
            energy_interval,
            alignment_count: p_cfg
                .alignment_count
                .unwrap_or(Parameters::DEFAULT_ALIGNMENT_COUNT),
            alignment_tol: p_cfg
                .alignment_tolerance
                .unwrap_or_else(Parameters::default_alignment_tol),
        };

        // The center's mass seeds every non-central body's circular velocity
        let central_mass = cfg.bodies[0].mass;
        let capacity = parameters.num_steps + 1;

        let mut bodies = Vec::with_capacity(cfg.bodies.len());
        for (idx, bc) in cfg.bodies.iter().enumerate() {
            if bc.mass <= 0.0 {
                return Err(SimError::InvalidConfiguration {
                    reason: format!("body `{}` has non-positive mass {}", bc.name, bc.mass),
                });
            }

            let method = match bc.integration_method {
                IntegratorConfig::DirectEuler => Method::DirectEuler,
                IntegratorConfig::EulerCromer => Method::EulerCromer,
                IntegratorConfig::Beeman => Method::Beeman,
            };

            // Body 0 is the center: at the origin, at rest. Every other body
            // starts at (r, 0) on a circular orbit, v = (0, sqrt(G M / r)).
            let (x, v) = if idx == 0 {
                (NVec2::zeros(), NVec2::zeros())
            } else {
                if bc.orbital_radius <= 0.0 {
                    return Err(SimError::InvalidConfiguration {
                        reason: format!(
                            "body `{}` has non-positive orbital radius {}",
                            bc.name, bc.orbital_radius
                        ),
                    });
                }
                let speed = (parameters.G * central_mass / bc.orbital_radius).sqrt();
                (NVec2::new(bc.orbital_radius, 0.0), NVec2::new(0.0, speed))
            };

            bodies.push(Body::new(bc.name.clone(), bc.mass, x, v, method, capacity));
        }

        let system = System { bodies, t: 0.0 };

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity { G: parameters.G });

        Ok(Self {
            parameters,
            system,
            forces,
        })
    }

    /// Consume the scenario and produce a runnable [`Simulation`].
    pub fn into_simulation(self) -> Simulation {
        Simulation::new(self.system, self.forces, self.parameters)
    }
}
