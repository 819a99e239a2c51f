//! Mass-spring-damper rope chain pinned between two anchors.
//!
//! The chain is a contiguous arena of particles: index 0 is the fixed
//! anchor, the last index is the moving anchor re-imposed every substep,
//! and everything in between is integrated dynamically. Spring forces are
//! stiff relative to a frame, so the host calls [`step_rope`] many times
//! per frame with a proportionally small `dt` (see
//! [`crate::constants::SUBSTEPS_PER_FRAME`]).

use glam::Vec3;

use crate::constants::{
    DAMPING, GRAVITY, PARTICLE_MASS, RESTITUTION, SPRING_STIFFNESS, TERRAIN_EXTENT,
};
use crate::physics::spring::spring_force;
use crate::world::terrain::HeightField;

/// Simulation parameters for one rope instance.
///
/// The reference behavior damps twice: once as a `-mu * v` force term and
/// once as a `(1 - mu)` velocity decay during integration. The two
/// coefficients are kept separate so a single-damping variant can be
/// selected by zeroing either one; [`RopeParams::default`] reproduces the
/// compounded reference behavior.
#[derive(Debug, Clone, Copy)]
pub struct RopeParams {
    pub particle_mass: f32,
    pub stiffness: f32,
    /// Damping applied as a `-mu * v` term in the force sum.
    pub force_damping: f32,
    /// Damping applied as a `(1 - mu)` velocity decay during integration.
    pub velocity_damping: f32,
    pub gravity: Vec3,
    /// Fraction of vertical speed kept (sign-flipped) on terrain contact.
    pub restitution: f32,
}

impl Default for RopeParams {
    fn default() -> Self {
        RopeParams {
            particle_mass: PARTICLE_MASS,
            stiffness: SPRING_STIFFNESS,
            force_damping: DAMPING,
            velocity_damping: DAMPING,
            gravity: GRAVITY,
            restitution: RESTITUTION,
        }
    }
}

/// Particle arena for one rope: parallel position and velocity buffers.
///
/// Owned by the host animation loop and mutated in place by [`step_rope`].
#[derive(Debug, Clone)]
pub struct RopeChain {
    pub positions: Vec<Vec3>,
    pub velocities: Vec<Vec3>,
}

impl RopeChain {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The pinned anchor at index 0, never moved after initialization.
    pub fn fixed_anchor(&self) -> Vec3 {
        self.positions[0]
    }

    /// The kinematic anchor at the last index, overwritten every substep.
    pub fn moving_anchor(&self) -> Vec3 {
        self.positions[self.positions.len() - 1]
    }
}

/// Per-segment spring parameters, fixed at initialization.
#[derive(Debug, Clone)]
pub struct RopeSprings {
    pub rest_lengths: Vec<f32>,
    pub stiffnesses: Vec<f32>,
}

/// Build the initial chain state from its two anchor points.
///
/// Every spring shares a rest length of half the anchor distance divided
/// by the segment count: the deliberate factor-2 slack lets the chain sag
/// under gravity instead of staying taut.
///
/// Panics when `particle_count < 3` (no free particle to integrate) or
/// when the anchors coincide (zero rest lengths would make the spring
/// force undefined). Both are construction-time contract checks; the
/// per-substep path validates nothing.
pub fn initialize_rope(
    fixed: Vec3,
    moving: Vec3,
    particle_count: usize,
    params: &RopeParams,
) -> (RopeChain, RopeSprings) {
    assert!(
        particle_count >= 3,
        "rope needs two anchors and at least one free particle, got {particle_count}"
    );
    let span = fixed.distance(moving);
    assert!(span > 0.0, "rope anchors must not coincide");

    let mut positions = Vec::with_capacity(particle_count);
    positions.push(fixed);
    for i in 1..particle_count - 1 {
        positions.push(fixed + (moving - fixed) * (i as f32 / particle_count as f32));
    }
    positions.push(moving);

    let chain = RopeChain {
        velocities: vec![Vec3::ZERO; particle_count],
        positions,
    };

    let segment_count = particle_count - 1;
    let rest_length = span / (2.0 * segment_count as f32);
    let springs = RopeSprings {
        rest_lengths: vec![rest_length; segment_count],
        stiffnesses: vec![params.stiffness; segment_count],
    };

    (chain, springs)
}

/// Advance the chain by one substep of duration `dt`.
///
/// Accumulates spring, gravity and damping forces on the free particles,
/// re-imposes the moving anchor, integrates with symplectic Euler, then
/// clamps each free particle against the terrain height field with a
/// damped vertical bounce. `t` and `t_max` parameterize the height query's
/// animation phase.
#[allow(clippy::too_many_arguments)]
pub fn step_rope(
    moving_anchor: Vec3,
    chain: &mut RopeChain,
    springs: &RopeSprings,
    params: &RopeParams,
    terrain: &impl HeightField,
    t: f32,
    dt: f32,
    t_max: f32,
) {
    let n = chain.len();

    // Force accumulation; anchors stay at zero net force
    let mut forces = vec![Vec3::ZERO; n];
    for i in 1..n - 1 {
        let f_spring = spring_force(
            chain.positions[i],
            chain.positions[i - 1],
            springs.rest_lengths[i - 1],
            springs.stiffnesses[i - 1],
        ) + spring_force(
            chain.positions[i],
            chain.positions[i + 1],
            springs.rest_lengths[i],
            springs.stiffnesses[i],
        );
        let f_weight = params.particle_mass * params.gravity;
        let f_damping = -params.force_damping * chain.velocities[i];
        forces[i] = f_spring + f_weight + f_damping;
    }

    // The moving anchor is kinematic: imposed, never integrated
    chain.positions[n - 1] = moving_anchor;

    for i in 1..n - 1 {
        let velocity = (1.0 - params.velocity_damping) * chain.velocities[i]
            + dt * forces[i] / params.particle_mass;
        chain.velocities[i] = velocity;
        chain.positions[i] += dt * velocity;

        // Terrain collision: clamp to the surface and reflect the damped
        // vertical speed
        let u = 0.5 + chain.positions[i].x / TERRAIN_EXTENT;
        let v = 0.5 + chain.positions[i].y / TERRAIN_EXTENT;
        let h = terrain.height(u, v, t, t_max);
        if h > chain.positions[i].z {
            chain.positions[i].z = h;
            chain.velocities[i].z = -params.restitution * chain.velocities[i].z;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Height field returning the same height everywhere.
    struct FlatHeight(f32);

    impl HeightField for FlatHeight {
        fn height(&self, _u: f32, _v: f32, _t: f32, _t_max: f32) -> f32 {
            self.0
        }
    }

    const SEA_FLOOR: FlatHeight = FlatHeight(-10.0);

    #[test]
    fn test_initialize_layout() {
        let params = RopeParams::default();
        let fixed = Vec3::new(0.0, 0.0, 1.0);
        let moving = Vec3::new(3.0, 0.0, 1.0);
        let (chain, springs) = initialize_rope(fixed, moving, 4, &params);

        assert_eq!(chain.len(), 4);
        assert_eq!(chain.fixed_anchor(), fixed);
        assert_eq!(chain.moving_anchor(), moving);
        assert!(chain.velocities.iter().all(|v| *v == Vec3::ZERO));

        // 3 segments over an anchor span of 3, slack factor 2
        assert_eq!(springs.rest_lengths, vec![0.5; 3]);
        assert_eq!(springs.stiffnesses, vec![params.stiffness; 3]);
    }

    #[test]
    #[should_panic(expected = "at least one free particle")]
    fn test_initialize_rejects_degenerate_chain() {
        initialize_rope(Vec3::ZERO, Vec3::X, 2, &RopeParams::default());
    }

    #[test]
    #[should_panic(expected = "must not coincide")]
    fn test_initialize_rejects_coincident_anchors() {
        initialize_rope(Vec3::ONE, Vec3::ONE, 5, &RopeParams::default());
    }

    #[test]
    fn test_anchors_stay_pinned() {
        let params = RopeParams::default();
        let fixed = Vec3::new(0.0, 0.0, 1.0);
        let (mut chain, springs) = initialize_rope(fixed, Vec3::new(3.0, 0.0, 1.0), 6, &params);

        for step in 0..500 {
            let anchor = Vec3::new(3.0 + (step as f32 * 0.01).sin(), 0.1 * step as f32, 1.0);
            step_rope(
                anchor, &mut chain, &springs, &params, &SEA_FLOOR, 0.0, 0.002, 1.0,
            );
            assert_eq!(chain.fixed_anchor(), fixed);
            assert_eq!(chain.moving_anchor(), anchor);
        }
    }

    #[test]
    fn test_collision_clamps_height_and_reflects_velocity() {
        // Zero out every force and decay so the only state change is the
        // terrain clamp itself.
        let params = RopeParams {
            stiffness: 0.0,
            force_damping: 0.0,
            velocity_damping: 0.0,
            gravity: Vec3::ZERO,
            ..RopeParams::default()
        };
        let (mut chain, springs) = initialize_rope(
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(3.0, 0.0, 1.0),
            4,
            &params,
        );
        chain.velocities[1] = Vec3::new(0.0, 0.0, -2.0);

        let surface = FlatHeight(2.0);
        let anchor = chain.moving_anchor();
        step_rope(
            anchor, &mut chain, &springs, &params, &surface, 0.0, 0.002, 1.0,
        );

        assert_eq!(chain.positions[1].z, 2.0);
        assert_eq!(chain.velocities[1].z, -params.restitution * -2.0);
    }

    #[test]
    fn test_vertical_chain_sags_to_rest() {
        // 4-particle chain hanging between a post at the origin and an
        // anchor 3 below it; the flat height field never interferes.
        let params = RopeParams::default();
        let fixed = Vec3::ZERO;
        let anchor = Vec3::new(0.0, 0.0, -3.0);
        let (mut chain, springs) = initialize_rope(fixed, anchor, 4, &params);

        let dt = 0.002;
        for step in 0..20_000 {
            let t = step as f32 * dt;
            step_rope(
                anchor, &mut chain, &springs, &params, &SEA_FLOOR, t, dt, 60.0,
            );
        }

        // Damping has drained the kinetic energy
        let kinetic: f32 = chain
            .velocities
            .iter()
            .map(|v| 0.5 * params.particle_mass * v.length_squared())
            .sum();
        assert!(kinetic < 1e-8, "chain still moving: KE = {kinetic}");

        // Free particles settle below their straight-line seeds. Static
        // balance (tension differences carrying one particle weight each,
        // total stretch fixed by the anchor span) puts them near
        // z = -1.098 and z = -2.098.
        assert!((chain.positions[1].z - -1.098).abs() < 0.05);
        assert!((chain.positions[2].z - -2.098).abs() < 0.05);
        assert_eq!(chain.fixed_anchor(), fixed);
        assert_eq!(chain.moving_anchor(), anchor);
    }

    #[test]
    fn test_gravity_accelerates_free_particles() {
        let params = RopeParams {
            stiffness: 0.0,
            force_damping: 0.0,
            velocity_damping: 0.0,
            ..RopeParams::default()
        };
        let (mut chain, springs) = initialize_rope(
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(3.0, 0.0, 1.0),
            5,
            &params,
        );

        let anchor = chain.moving_anchor();
        step_rope(
            anchor, &mut chain, &springs, &params, &SEA_FLOOR, 0.0, 0.01, 1.0,
        );

        for i in 1..chain.len() - 1 {
            let expected = 0.01 * params.gravity.z;
            assert!((chain.velocities[i].z - expected).abs() < 1e-6);
        }
    }
}
