//! Keyframe animation modules
//! Contains the cardinal-spline interpolator for scripted motion paths.

pub mod spline;

// Re-export commonly used types
pub use spline::{InvalidDomain, MotionPath, evaluate_spline, find_interval};
