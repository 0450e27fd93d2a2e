//! Simulation orchestrator
//!
//! `Simulation` owns the system, the force set, the parameters, and the two
//! observation logs. `run` drives the stepping loop and the post-run period
//! detection; `detect_alignments` fills the alignment log from the
//! accumulated histories.

use crate::simulation::alignment;
use crate::simulation::energy::total_energy;
use crate::simulation::error::SimError;
use crate::simulation::forces::AccelSet;
use crate::simulation::integrator::step_system;
use crate::simulation::params::Parameters;
use crate::simulation::period::orbital_period;
use crate::simulation::states::System;

pub struct Simulation {
    pub system: System,
    pub forces: AccelSet,
    pub parameters: Parameters,
    pub energy_log: Vec<(f64, f64)>, // (time, total energy), one entry per sampling interval
    pub alignment_log: Vec<f64>, // times at which an alignment event was detected
}

impl Simulation {
    pub fn new(system: System, forces: AccelSet, mut parameters: Parameters) -> Self {
        // A zero interval would panic in the stepping loop; sampling every
        // step is the closest meaningful behavior
        parameters.energy_interval = parameters.energy_interval.max(1);
        let samples = parameters.num_steps / parameters.energy_interval + 1;
        Self {
            system,
            forces,
            parameters,
            energy_log: Vec::with_capacity(samples),
            alignment_log: Vec::new(),
        }
    }

    /// Execute the run: `num_steps` integration steps with energy sampling
    /// on the configured cadence, then period detection for every
    /// non-central body.
    pub fn run(&mut self) -> Result<(), SimError> {
        let p = &self.parameters;
        log::info!(
            "running {} steps of dt = {} over {} bodies",
            p.num_steps,
            p.dt,
            self.system.bodies.len()
        );

        for step in 0..self.parameters.num_steps {
            let time = step as f64 * self.parameters.dt;
            step_system(&mut self.system, &self.forces, &self.parameters)?;

            // Log total system energy every sampling interval
            if step % self.parameters.energy_interval == 0 {
                let e = total_energy(&self.system, self.parameters.G);
                log::debug!("t = {time}: total energy {e}");
                self.energy_log.push((time, e));
            }
        }

        // Find the orbital period of each body around the center
        if let Some((central, rest)) = self.system.bodies.split_first_mut() {
            for b in rest.iter_mut() {
                b.orbital_period = orbital_period(b, central, self.parameters.dt);
            }
        }

        log::info!("run complete at t = {}", self.system.t);
        Ok(())
    }

    /// Scan the accumulated histories for planetary alignments and store
    /// the event times in `alignment_log`.
    pub fn detect_alignments(&mut self) {
        self.alignment_log = alignment::detect_alignments(&self.system, &self.parameters);
        log::info!("{} alignment events detected", self.alignment_log.len());
    }
}
