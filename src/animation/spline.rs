//! Cardinal-spline interpolation over timed 3D keyframes.
//!
//! Turns a sparse, strictly-increasing sequence of `(time, position)`
//! keyframes into a smooth C1 position function. The first and last
//! keyframes only supply tangents, so the evaluable window is
//! `[times[1], times[len - 2]]`.

use glam::Vec3;
use thiserror::Error;

use crate::constants::SPLINE_TENSION;

/// Query time fell outside the sample sequence (or the sequence is too
/// short to contain any interval). Carries the offending value and the
/// sequence it was searched against so the caller can clamp its clock.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("no interval contains t={t}: times={times:?}")]
pub struct InvalidDomain {
    pub t: f32,
    pub times: Vec<f32>,
}

/// Find the segment index `k` such that `times[k] <= t < times[k + 1]`,
/// assuming `times` is ascending.
///
/// At the very last sample the half-open form has no answer, so the index
/// is capped at `times.len() - 2`: `t == times[last]` lands in the final
/// segment. Errors when `times` has fewer than two entries or `t` lies
/// outside `[times[0], times[last]]`.
pub fn find_interval(t: f32, times: &[f32]) -> Result<usize, InvalidDomain> {
    if times.len() < 2 || t < times[0] || t > times[times.len() - 1] {
        return Err(InvalidDomain {
            t,
            times: times.to_vec(),
        });
    }

    let mut k = 0;
    while k + 2 < times.len() && times[k + 1] <= t {
        k += 1;
    }
    Ok(k)
}

/// Evaluate the cardinal-spline position at time `t`.
///
/// Requires `positions.len() == times.len() >= 4` with strictly increasing
/// times. The interval search runs over the inner window
/// `times[1..len - 1]`, which both enforces the evaluable domain and
/// guarantees the bracketing segment has a context keyframe on each side.
pub fn evaluate_spline(t: f32, positions: &[Vec3], times: &[f32]) -> Result<Vec3, InvalidDomain> {
    if times.len() < 4 || positions.len() != times.len() {
        return Err(InvalidDomain {
            t,
            times: times.to_vec(),
        });
    }

    let idx = find_interval(t, &times[1..times.len() - 1])? + 1;

    let (t0, t1, t2, t3) = (times[idx - 1], times[idx], times[idx + 1], times[idx + 2]);
    let (p0, p1, p2, p3) = (
        positions[idx - 1],
        positions[idx],
        positions[idx + 1],
        positions[idx + 2],
    );

    Ok(cardinal_spline(
        t,
        t0,
        t1,
        t2,
        t3,
        p0,
        p1,
        p2,
        p3,
        SPLINE_TENSION,
    ))
}

/// An authored keyframe path with a validated sample sequence.
pub struct MotionPath {
    positions: Vec<Vec3>,
    times: Vec<f32>,
}

impl MotionPath {
    /// Create a path from `(time, position)` keyframes.
    ///
    /// Panics unless there are at least four keyframes with strictly
    /// increasing times; both are authoring invariants, not runtime
    /// conditions.
    pub fn new(keyframes: &[(f32, Vec3)]) -> Self {
        assert!(
            keyframes.len() >= 4,
            "a motion path needs at least 4 keyframes, got {}",
            keyframes.len()
        );
        for pair in keyframes.windows(2) {
            assert!(
                pair[0].0 < pair[1].0,
                "keyframe times must be strictly increasing: {} then {}",
                pair[0].0,
                pair[1].0
            );
        }

        MotionPath {
            positions: keyframes.iter().map(|(_, p)| *p).collect(),
            times: keyframes.iter().map(|(t, _)| *t).collect(),
        }
    }

    /// The evaluable `(start, end)` time window. The outermost keyframes
    /// only shape boundary tangents and cannot be sampled themselves.
    pub fn window(&self) -> (f32, f32) {
        (self.times[1], self.times[self.times.len() - 2])
    }

    /// Position along the path at time `t`.
    pub fn position_at(&self, t: f32) -> Result<Vec3, InvalidDomain> {
        evaluate_spline(t, &self.positions, &self.times)
    }
}

/// Cardinal-spline (Hermite basis) interpolation between `p1` and `p2`,
/// with tangents estimated from the surrounding keyframes and scaled by
/// the tension constant.
#[allow(clippy::too_many_arguments)]
fn cardinal_spline(
    t: f32,
    t0: f32,
    t1: f32,
    t2: f32,
    t3: f32,
    p0: Vec3,
    p1: Vec3,
    p2: Vec3,
    p3: Vec3,
    tension: f32,
) -> Vec3 {
    let s = (t - t1) / (t2 - t1);
    let s2 = s * s;
    let s3 = s2 * s;

    let d1 = 2.0 * tension * (p2 - p0) / (t2 - t0);
    let d2 = 2.0 * tension * (p3 - p1) / (t3 - t1);

    (2.0 * s3 - 3.0 * s2 + 1.0) * p1
        + (s3 - 2.0 * s2 + s) * d1
        + (-2.0 * s3 + 3.0 * s2) * p2
        + (s3 - s2) * d2
}
