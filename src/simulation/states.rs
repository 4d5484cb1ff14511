//! Core state types for the orbit simulation.
//!
//! Defines the 2D test-particle state used by the Euler integrator:
//! - `Particle` using `NVec2` (position + velocity)
//!
//! The particle is created on a circular orbit and mutated once per
//! integration step; only the accumulated trajectory survives a run.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
}

impl Particle {
    /// Particle at `(r0, 0)` with tangential speed `v_orbital`, i.e. the
    /// seed state of a nominally circular orbit
    pub fn on_circular_orbit(r0: f64, v_orbital: f64) -> Self {
        Self {
            x: NVec2::new(r0, 0.0),
            v: NVec2::new(0.0, v_orbital),
        }
    }

    /// Current distance from the galactic center
    pub fn radius(&self) -> f64 {
        self.x.norm()
    }

    /// Current speed
    pub fn speed(&self) -> f64 {
        self.v.norm()
    }
}
