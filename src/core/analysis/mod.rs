//! Analysis algorithms: spectral cutoff, dynamics, classification

pub mod classify;
pub mod cutoff;
pub mod dynamics;

pub use cutoff::CutoffDetector;
pub use dynamics::DynamicsAnalyzer;
