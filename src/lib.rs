// Animation module with the keyframe spline interpolator
pub mod animation;

// Physics module with the rope tether simulation
pub mod physics;

// World module with the terrain height-query interface
pub mod world;

// Other modules
pub mod constants;

// Re-exports
pub use animation::{InvalidDomain, MotionPath, evaluate_spline, find_interval};
pub use constants::*;
pub use physics::{RopeChain, RopeParams, RopeSprings, initialize_rope, spring_force, step_rope};
pub use world::{HeightField, NoiseHeightField};
