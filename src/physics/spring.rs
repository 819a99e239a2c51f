//! Hookean spring force between two connected particles.

use glam::Vec3;

/// Restoring force applied to `p_i` by the spring connecting it to `p_j`.
///
/// Attractive when stretched past `rest_length`, repulsive when
/// compressed. Undefined when the particles coincide (`L == 0`); the
/// simulator keeps connected particles apart through nonzero rest lengths
/// and bounded substeps.
pub fn spring_force(p_i: Vec3, p_j: Vec3, rest_length: f32, stiffness: f32) -> Vec3 {
    let delta = p_i - p_j;
    let length = delta.length();
    let direction = delta / length;
    -stiffness * (length - rest_length) * direction
}
