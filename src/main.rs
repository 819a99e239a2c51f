//! Headless tether scene demo
//!
//! Reproduces the lake scene's animation loop without a renderer: a leader
//! bird follows an authored keyframe path, a drifting boat is tethered to
//! a pier post by the simulated rope, and an animated noise terrain sits
//! underneath the water.

use clap::Parser;
use glam::Vec3;

use towline::{
    MotionPath, NoiseHeightField, ROPE_PARTICLE_COUNT, RopeParams, SUBSTEPS_PER_FRAME,
    TERRAIN_AMPLITUDE, initialize_rope, step_rope,
};

/// Rope tether and keyframe animation demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of animation frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Integration substeps per frame
    #[arg(long, default_value_t = SUBSTEPS_PER_FRAME)]
    substeps: u32,

    /// Number of rope particles, anchors included
    #[arg(long, default_value_t = ROPE_PARTICLE_COUNT)]
    particles: usize,

    /// Terrain seed (random when omitted)
    #[arg(long)]
    seed: Option<u32>,
}

/// Authored circuit for the leader bird: a loop over the lake with a dip
/// toward the water. The first and last keyframes only shape tangents.
fn bird_path() -> MotionPath {
    MotionPath::new(&[
        (0.0, Vec3::new(-6.0, -5.0, 3.0)),
        (1.0, Vec3::new(-4.5, -3.0, 2.4)),
        (2.5, Vec3::new(-2.0, 0.0, 1.5)), // dip toward the water
        (4.0, Vec3::new(1.0, 2.5, 1.2)),
        (5.5, Vec3::new(4.0, 3.5, 2.0)),
        (7.0, Vec3::new(6.0, 1.0, 2.8)), // climb over the dunes
        (8.5, Vec3::new(5.0, -2.5, 3.2)),
        (10.0, Vec3::new(2.0, -4.5, 2.6)),
        (11.0, Vec3::new(-1.0, -5.5, 2.8)),
        (12.0, Vec3::new(-4.0, -6.0, 3.0)),
    ])
}

/// The moored boat drifts slowly around its post with a little bob from
/// the swell; its bow supplies the rope's moving anchor.
fn boat_position(t: f32, t_max: f32) -> Vec3 {
    let phase = std::f32::consts::TAU * t / t_max;
    Vec3::new(
        2.0 * phase.cos(),
        1.5 * phase.sin(),
        0.3 + 0.1 * (3.0 * phase).sin(),
    )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!("Starting tether scene (seed {})...", seed);

    let terrain = NoiseHeightField::new(seed, TERRAIN_AMPLITUDE);
    let path = bird_path();
    let (t_min, t_max) = path.window();

    let params = RopeParams::default();
    let post = Vec3::new(4.0, 1.0, 0.4);
    let mut t = t_min;
    let (mut chain, springs) = initialize_rope(
        post,
        boat_position(t, t_max),
        args.particles,
        &params,
    );
    tracing::info!(
        "Rope initialized: {} particles, rest length {:.3}",
        chain.len(),
        springs.rest_lengths[0]
    );

    let frame_dt = 1.0 / 60.0;
    let dt = frame_dt / args.substeps as f32;

    for frame in 0..args.frames {
        // The outer clock loops inside the path's evaluable window
        t += frame_dt;
        if t > t_max {
            t = t_min;
        }

        let bird = match path.position_at(t) {
            Ok(p) => p,
            Err(err) => {
                tracing::error!("Bird left its keyframe window: {}", err);
                return;
            }
        };

        let bow = boat_position(t, t_max);
        for _ in 0..args.substeps {
            step_rope(
                bow, &mut chain, &springs, &params, &terrain, t, dt, t_max,
            );
        }

        if frame % 60 == 0 {
            let mid = chain.positions[chain.len() / 2];
            tracing::info!(
                "frame {}: t={:.2} bird=({:.2}, {:.2}, {:.2}) rope mid=({:.2}, {:.2}, {:.2})",
                frame,
                t,
                bird.x,
                bird.y,
                bird.z,
                mid.x,
                mid.y,
                mid.z
            );
        }
    }

    tracing::info!("Scene finished after {} frames", args.frames);
}
