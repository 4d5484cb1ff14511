pub mod stats;
pub mod rotation;
pub mod sensitivity;
pub mod orbit;
pub mod convergence;
pub mod lensing;
