//! Orbit stability comparison
//!
//! Releases the same test star on a circular orbit under each force law and
//! reports how far each one drifts from the release radius. The stability
//! verdict is on the entropic orbit: it must end within half its release
//! radius of where it started

use crate::error::SimResult;
use crate::simulation::forces::GravityModel;
use crate::simulation::integrator::simulate_orbit;
use crate::simulation::params::Parameters;

/// Maximum tolerated relative drift of the entropic orbit
pub const MAX_RELATIVE_DRIFT: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct OrbitComparison {
    pub initial_radius: f64,
    pub final_radius_newtonian: f64,
    pub final_radius_entropic: f64,
    pub mean_speed_newtonian: f64,
    pub mean_speed_entropic: f64,
    pub entropic_drift: f64, // |r_final - r0| / r0 for the entropic orbit
    pub stable: bool,
}

/// Simulate both orbits from the same release radius and compare drift
pub fn compare_orbits(
    initial_radius: f64,
    steps: usize,
    dt: f64,
    params: &Parameters,
) -> SimResult<OrbitComparison> {
    let newtonian = simulate_orbit(GravityModel::Newtonian, initial_radius, steps, dt, params)?;
    let entropic = simulate_orbit(GravityModel::Entropic, initial_radius, steps, dt, params)?;

    let final_radius_newtonian = newtonian.final_radius();
    let final_radius_entropic = entropic.final_radius();

    let entropic_drift = (final_radius_entropic - initial_radius).abs() / initial_radius;
    let stable = entropic_drift < MAX_RELATIVE_DRIFT;

    tracing::info!(
        initial_radius,
        final_radius_newtonian,
        final_radius_entropic,
        entropic_drift,
        "orbit comparison"
    );

    Ok(OrbitComparison {
        initial_radius,
        final_radius_newtonian,
        final_radius_entropic,
        mean_speed_newtonian: newtonian.mean_speed,
        mean_speed_entropic: entropic.mean_speed,
        entropic_drift,
        stable,
    })
}
