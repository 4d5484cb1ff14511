//! Radial force laws for the central potential
//!
//! Defines the two competing acceleration laws, classical Newtonian gravity
//! and the phase-transition "entropic" variant, plus the circular-orbit
//! velocity derived from either. All functions are pure: given the same
//! radius and parameters they return bit-identical results
//!
//! The phase-transition interpolation lives in [`phase_transition`] and is
//! shared with the lensing deflection calculation, so both validations test
//! the same underlying law

use crate::error::SimulationError;
use crate::simulation::params::Parameters;

/// Numerical distance floor: at or below this radius the acceleration is
/// defined as zero instead of dividing by a vanishing r
pub const R_FLOOR: f64 = 1e-10;

/// Which force law governs the galaxy
/// `model: "newtonian"` or `model: "entropic"` in scenario YAML
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityModel {
    Newtonian, // classical 1/r^2 law, the reference
    Entropic,  // Verlinde-style, decays as 1/r once g_N drops below a0
}

impl GravityModel {
    /// Parse a selector name from configuration
    /// An unrecognized name is a usage error, never a silent default
    pub fn parse(name: &str) -> Result<Self, SimulationError> {
        match name {
            "newtonian" => Ok(Self::Newtonian),
            "entropic" => Ok(Self::Entropic),
            other => Err(SimulationError::InvalidModel(other.to_string())),
        }
    }

    /// Scalar radial acceleration at distance `r` under this law
    pub fn acceleration(self, r: f64, params: &Parameters) -> f64 {
        match self {
            Self::Newtonian => newtonian_acceleration(r, params),
            Self::Entropic => entropic_acceleration(r, params),
        }
    }
}

impl std::str::FromStr for GravityModel {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Classical Newtonian acceleration: g = G M / r^2
/// Zero at or below the numerical floor (no singularity at the center)
pub fn newtonian_acceleration(r: f64, params: &Parameters) -> f64 {
    if r <= R_FLOOR {
        return 0.0;
    }
    params.G * params.central_mass / (r * r)
}

/// The entropic phase transition applied to a Newtonian field value
///
/// - `g_newton > a0`: near-field regime, indistinguishable from Newton
/// - `g_newton <= a0`: far-field regime, sqrt(a0 * g_newton), decaying as
///   1/r instead of 1/r^2
///
/// Both branches agree exactly at the crossover `g_newton == a0`
/// (`sqrt(a0 * a0) = a0`), so the law is continuous there
pub fn phase_transition(g_newton: f64, a0: f64) -> f64 {
    if g_newton > a0 {
        g_newton
    } else {
        (a0 * g_newton).sqrt()
    }
}

/// Entropic acceleration: the Newtonian value routed through the
/// phase transition. Zero at or below the floor, like the Newtonian law
pub fn entropic_acceleration(r: f64, params: &Parameters) -> f64 {
    if r <= R_FLOOR {
        return 0.0;
    }
    phase_transition(newtonian_acceleration(r, params), params.a0)
}

/// Circular-orbit speed at radius `r` under the chosen law: v = sqrt(g r)
/// Closed form for any central force with F = m g(r)
pub fn orbital_velocity(r: f64, model: GravityModel, params: &Parameters) -> f64 {
    (model.acceleration(r, params) * r).sqrt()
}
