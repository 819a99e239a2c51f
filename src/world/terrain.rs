//! Terrain height queries for rope collision.
//!
//! The simulation only ever asks the terrain one question: how high is the
//! surface at a normalized planar coordinate, at a given animation time.
//! Mesh construction and rendering live with the owning terrain system.

use fastnoise_lite::{FastNoiseLite, FractalType, NoiseType};

/// Deterministic terrain-height sampler.
///
/// `u` and `v` are normalized planar coordinates (0.5 is the terrain
/// center); `t` and `t_max` give the animation phase for surfaces that
/// evolve over time. Queries are cheap, side-effect-free reads and are
/// never cached by the caller.
pub trait HeightField {
    fn height(&self, u: f32, v: f32, t: f32, t_max: f32) -> f32;
}

/// FBm-noise terrain whose surface swells over the animation cycle.
pub struct NoiseHeightField {
    noise: FastNoiseLite,
    amplitude: f32,
}

impl NoiseHeightField {
    pub fn new(seed: u32, amplitude: f32) -> Self {
        NoiseHeightField {
            noise: Self::create_fbm_noise(seed),
            amplitude,
        }
    }

    fn create_fbm_noise(seed: u32) -> FastNoiseLite {
        let mut noise = FastNoiseLite::with_seed(seed as i32);
        noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        noise.set_fractal_type(Some(FractalType::FBm));
        noise.set_fractal_octaves(Some(6));
        noise.set_fractal_gain(Some(0.6));
        noise.set_fractal_lacunarity(Some(2.25));
        noise.set_frequency(Some(2.0));
        noise
    }
}

impl HeightField for NoiseHeightField {
    fn height(&self, u: f32, v: f32, t: f32, t_max: f32) -> f32 {
        // Drift the sampling plane through a third noise axis so the
        // surface rises and falls once per animation cycle
        let phase = (std::f32::consts::PI * t / t_max).sin();
        self.amplitude * self.noise.get_noise_3d(u, v, 0.3 * phase)
    }
}
