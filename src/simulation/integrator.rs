//! Fixed-step orbit integrator
//!
//! Advances a single test particle through the central potential with
//! explicit (forward) Euler, driven by a [`GravityModel`] and `Parameters`.
//! First-order Euler is the point of the experiment: it does not conserve
//! energy exactly, and whether the nominally circular orbit survives the
//! accumulated drift is the quantity under study

use crate::error::{SimResult, SimulationError};
use crate::simulation::forces::{orbital_velocity, GravityModel, R_FLOOR};
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle};

/// Result of one orbit simulation
///
/// `trajectory` has `steps + 1` positions (the initial state included);
/// `speeds` mirrors it with one speed per position. `mean_speed` is the
/// plain arithmetic mean of `speeds`, not a physically normalized average
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitRun {
    pub trajectory: Vec<NVec2>,
    pub speeds: Vec<f64>,
    pub mean_speed: f64,
}

impl OrbitRun {
    /// Distance from the center at the end of the run
    pub fn final_radius(&self) -> f64 {
        // trajectory is never empty, it always holds the initial state
        self.trajectory.last().map(|x| x.norm()).unwrap_or(0.0)
    }
}

/// Simulate a star released on a circular orbit at `initial_radius`
///
/// The particle starts at `(r0, 0)` with tangential velocity
/// `(0, orbital_velocity(r0))` and is advanced `steps` times with step `dt`
///
/// Fails fast with `InvalidParameter` for a non-positive or non-finite `dt`
/// or an initial radius at or below the numerical floor
pub fn simulate_orbit(
    model: GravityModel,
    initial_radius: f64,
    steps: usize,
    dt: f64,
    params: &Parameters,
) -> SimResult<OrbitRun> {
    if !(dt > 0.0) || !dt.is_finite() {
        return Err(SimulationError::InvalidParameter {
            name: "dt",
            value: dt,
        });
    }
    if !(initial_radius > R_FLOOR) {
        return Err(SimulationError::InvalidParameter {
            name: "initial_radius",
            value: initial_radius,
        });
    }

    // Seed state: circular-orbit speed, directed tangentially
    let v_orbital = orbital_velocity(initial_radius, model, params);
    let mut particle = Particle::on_circular_orbit(initial_radius, v_orbital);

    let mut trajectory = Vec::with_capacity(steps + 1);
    let mut speeds = Vec::with_capacity(steps + 1);
    trajectory.push(particle.x);
    speeds.push(v_orbital);

    for _ in 0..steps {
        let r = particle.radius();

        // Acceleration vector pointing at the origin: -g * x / r
        // At or below the floor the direction is undefined, treat as zero
        let a = if r > R_FLOOR {
            let g = model.acceleration(r, params);
            -particle.x * (g / r)
        } else {
            NVec2::zeros()
        };

        // Forward Euler: kick then drift, one force evaluation per step
        particle.v += a * dt;
        particle.x += particle.v * dt;

        trajectory.push(particle.x);
        speeds.push(particle.speed());
    }

    let mean_speed = speeds.iter().sum::<f64>() / speeds.len() as f64;

    Ok(OrbitRun {
        trajectory,
        speeds,
        mean_speed,
    })
}
