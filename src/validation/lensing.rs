//! Weak-lensing audit: phantom dark-matter deflection
//!
//! Converts an enclosed-mass profile into a deflection-angle profile under
//! standard GR (baryons only) and under the entropic law. The entropic
//! branch routes the Newtonian field through the kernel's
//! [`phase_transition`] (the same function the rotation module uses) and
//! converts the boosted field back into the effective mass the light "sees"
//!
//! Works in SI units with the astronomical value of the critical scale; the
//! galaxy is an analytic exponential disk

use crate::configuration::config::LensingConfig;
use crate::simulation::forces::phase_transition;
use crate::simulation::rotation::linspace;

// Physical constants (SI)
pub const G_SI: f64 = 6.674e-11;
pub const C_LIGHT: f64 = 3.0e8;
pub const A0_SI: f64 = 1.2e-10; // Verlinde scale acceleration
pub const M_SUN: f64 = 1.989e30;
pub const KPC: f64 = 3.086e19;

/// Entropic deflection must exceed GR by at least this factor at the edge
pub const OUTER_BOOST: f64 = 1.5;
/// Innermost impact parameter; lensing profiles start off-center
const R_MIN_KPC: f64 = 0.1;

/// Galaxy profile the audit runs against
#[derive(Debug, Clone)]
pub struct LensingSetup {
    pub galaxy_mass_msun: f64,
    pub scale_radius_kpc: f64,
    pub radii_kpc: Vec<f64>,
}

impl LensingSetup {
    pub fn from_config(cfg: &LensingConfig) -> Self {
        Self {
            galaxy_mass_msun: cfg.galaxy_mass_msun,
            scale_radius_kpc: cfg.scale_radius_kpc,
            radii_kpc: linspace(R_MIN_KPC, cfg.r_max_kpc, cfg.samples),
        }
    }
}

/// Deflection angles (radians) at one impact parameter
#[derive(Debug, Clone, Copy)]
pub struct DeflectionSample {
    pub radius_kpc: f64,
    pub alpha_gr: f64,
    pub alpha_entropic: f64,
}

#[derive(Debug, Clone)]
pub struct LensingReport {
    pub profile: Vec<DeflectionSample>,
    pub inner_ratio: f64, // entropic/GR at the innermost radius
    pub outer_ratio: f64, // entropic/GR at the outermost radius
    pub passed: bool,
}

/// Mass enclosed within projected radius `r_m` of an exponential disk:
/// M(<r) = M_tot (1 - (1 + r/R_d) e^(-r/R_d))
pub fn enclosed_mass(r_m: f64, total_mass_kg: f64, scale_radius_m: f64) -> f64 {
    let x = r_m / scale_radius_m;
    total_mass_kg * (1.0 - (1.0 + x) * (-x).exp())
}

/// GR and entropic deflection angles for enclosed mass `m_kg` at radius
/// `r_m`: alpha = 4 G M / (c^2 r), with the entropic branch using the
/// effective mass M_eff = g_ent r^2 / G
pub fn deflection_angles(r_m: f64, m_kg: f64) -> (f64, f64) {
    let alpha_gr = 4.0 * G_SI * m_kg / (C_LIGHT * C_LIGHT * r_m);

    let g_newton = G_SI * m_kg / (r_m * r_m);
    let g_entropic = phase_transition(g_newton, A0_SI);
    let m_eff = g_entropic * r_m * r_m / G_SI;
    let alpha_entropic = 4.0 * G_SI * m_eff / (C_LIGHT * C_LIGHT * r_m);

    (alpha_gr, alpha_entropic)
}

/// Deflection profile over the setup's radius grid
pub fn run_lensing(setup: &LensingSetup) -> LensingReport {
    let total_mass_kg = setup.galaxy_mass_msun * M_SUN;
    let scale_radius_m = setup.scale_radius_kpc * KPC;

    let profile: Vec<DeflectionSample> = setup
        .radii_kpc
        .iter()
        .map(|&radius_kpc| {
            let r_m = radius_kpc * KPC;
            let m_kg = enclosed_mass(r_m, total_mass_kg, scale_radius_m);
            let (alpha_gr, alpha_entropic) = deflection_angles(r_m, m_kg);

            DeflectionSample {
                radius_kpc,
                alpha_gr,
                alpha_entropic,
            }
        })
        .collect();

    let ratio = |s: &DeflectionSample| {
        if s.alpha_gr > 0.0 {
            s.alpha_entropic / s.alpha_gr
        } else {
            1.0
        }
    };

    // profile is non-empty for any sane config; guard anyway
    let inner_ratio = profile.first().map(&ratio).unwrap_or(1.0);
    let outer_ratio = profile.last().map(&ratio).unwrap_or(1.0);

    // Pass: Newtonian agreement near the center, material boost at the edge
    let passed = (inner_ratio - 1.0).abs() < 1e-9 && outer_ratio > OUTER_BOOST;

    tracing::info!(inner_ratio, outer_ratio, passed, "lensing deflection profile");

    LensingReport {
        profile,
        inner_ratio,
        outer_ratio,
        passed,
    }
}
