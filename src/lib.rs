pub mod simulation;
pub mod configuration;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::params::Parameters;
pub use simulation::error::SimError;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::{Method, step_system};
pub use simulation::energy::{kinetic_energy, potential_energy, total_energy};
pub use simulation::period::orbital_period;
pub use simulation::alignment::detect_alignments;
pub use simulation::scenario::Scenario;
pub use simulation::engine::Simulation;

pub use configuration::config::{ScenarioConfig, ParametersConfig, BodyConfig, IntegratorConfig};
