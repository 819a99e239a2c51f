//! World modules
//! Contains the terrain height-query interface consumed by the physics.

pub mod terrain;

// Re-export commonly used types
pub use terrain::{HeightField, NoiseHeightField};
