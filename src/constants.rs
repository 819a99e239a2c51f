use glam::Vec3;

// Rope simulation constants
pub const ROPE_PARTICLE_COUNT: usize = 10;
pub const PARTICLE_MASS: f32 = 0.01;
pub const DAMPING: f32 = 0.1;
pub const SPRING_STIFFNESS: f32 = 1.0;
pub const GRAVITY: Vec3 = Vec3::new(0.0, 0.0, -9.81);
pub const RESTITUTION: f32 = 0.7;
// Stiff springs diverge at full-frame steps; every frame is split into this many substeps
pub const SUBSTEPS_PER_FRAME: u32 = 50;

// Keyframe spline constants
pub const SPLINE_TENSION: f32 = 0.5;

// Terrain mapping constants
// World XY maps to normalized height-field UV as 0.5 + x / TERRAIN_EXTENT
pub const TERRAIN_EXTENT: f32 = 20.0;
pub const TERRAIN_AMPLITUDE: f32 = 0.6;
