//! Rotation-curve evaluator
//!
//! Samples the circular-orbit velocity at an ordered set of radii under a
//! chosen force law. No trajectories and no time dimension, just the
//! velocity-vs-radius curve used for plotting and flatness statistics

use crate::simulation::forces::{orbital_velocity, GravityModel};
use crate::simulation::params::Parameters;

/// Ordered (radius, velocity) samples, one per input radius
/// Input order and count are preserved, duplicates included
#[derive(Debug, Clone, PartialEq)]
pub struct RotationCurve {
    pub radii: Vec<f64>,
    pub velocities: Vec<f64>,
}

impl RotationCurve {
    /// Iterate the curve as (radius, velocity) pairs
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.radii.iter().copied().zip(self.velocities.iter().copied())
    }

    /// Trailing half of the velocity sequence, the "outer" region the
    /// flatness coefficient of variation is computed over
    pub fn outer_velocities(&self) -> &[f64] {
        &self.velocities[self.velocities.len() / 2..]
    }
}

/// `n` radii linearly spaced over `[start, stop]`, endpoints included
/// The usual way a radius grid is built for curve evaluation
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Evaluate the orbital velocity at each radius in `radii`
pub fn rotation_curve(radii: &[f64], model: GravityModel, params: &Parameters) -> RotationCurve {
    let velocities = radii
        .iter()
        .map(|&r| orbital_velocity(r, model, params))
        .collect();

    RotationCurve {
        radii: radii.to_vec(),
        velocities,
    }
}
