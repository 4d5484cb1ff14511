pub mod simulation;
pub mod configuration;
pub mod validation;
pub mod benchmark;
pub mod error;

pub use simulation::states::{NVec2, Particle};
pub use simulation::forces::{
    entropic_acceleration, newtonian_acceleration, orbital_velocity, phase_transition,
    GravityModel, R_FLOOR,
};
pub use simulation::integrator::{simulate_orbit, OrbitRun};
pub use simulation::rotation::{linspace, rotation_curve, RotationCurve};
pub use simulation::params::Parameters;
pub use simulation::scenario::{OrbitSettings, Scenario};

pub use configuration::config::ScenarioConfig;

pub use validation::rotation::run_rotation_validation;
pub use validation::sensitivity::run_sensitivity;
pub use validation::orbit::compare_orbits;
pub use validation::convergence::run_convergence;
pub use validation::lensing::{run_lensing, LensingSetup};

pub use benchmark::benchmark::{bench_forces, bench_orbit};

pub use error::{SimResult, SimulationError};
