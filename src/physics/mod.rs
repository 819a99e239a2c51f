//! Physics modules for the simulated rope tether
//! Contains the Hookean spring model and the particle-chain integrator.

pub mod rope;
pub mod spring;

// Re-export commonly used types
pub use rope::{RopeChain, RopeParams, RopeSprings, initialize_rope, step_rope};
pub use spring::spring_force;
