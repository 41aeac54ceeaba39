//! Headless demo that flies a camera through a procedurally generated
//! system and logs how bodies move between detail tiers.
//!
//! Configuration is loaded from `config.ron` when `--config` points at a
//! directory, and can be overridden via CLI flags. Run with
//! `cargo run -p orrery-demo -- --bodies 2000 --frames 1200` to scale the
//! scene up.

mod catalog;

use clap::Parser;
use orrery_config::{CliArgs, Config};
use orrery_lod::{PerspectiveCamera, TierManager};
use orrery_math::Vec3;
use tracing::info;

use crate::catalog::Catalog;

fn main() {
    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(dir) => Config::load_or_create(dir).unwrap_or_else(|err| {
            eprintln!("config error: {err}; using defaults");
            Config::default()
        }),
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    orrery_log::init_logging(None, cfg!(debug_assertions), Some(&config));

    let bodies = args.bodies.unwrap_or(512);
    let frames = args.frames.unwrap_or(600);
    let seed = args.seed.unwrap_or(42);

    let mut manager = TierManager::new(config.lod.clone());
    let catalog = Catalog::generate(seed, bodies);
    for entry in &catalog.entries {
        manager.add(entry.body.clone());
    }
    info!("registered {} bodies (seed {seed})", manager.len());

    let start = Vec3::new(0.0, 400.0, -6_000.0);
    let mut camera = PerspectiveCamera::looking_at(
        start,
        Vec3::zero(),
        config.window.fov_degrees.to_radians(),
        config.window.width as f32,
        config.window.height as f32,
    );

    let dt = 1.0 / 60.0;
    let mut time = 0.0f32;
    for frame in 0..frames {
        time += dt;

        // Fly straight through the system so bodies sweep every tier on the
        // way in and get culled behind us on the way out.
        camera.position = Vec3::new(start.x, start.y, start.z + time * 1_200.0);
        camera.look_at(Vec3::zero());

        for entry in &catalog.entries {
            if entry.orbit_radius > 0.0 {
                manager.update_position(&entry.body.id, entry.position_at(time));
            }
        }

        manager.update(&camera, dt);

        if config.debug.show_stats && frame % 60 == 0 {
            let stats = manager.stats();
            info!(
                "frame {frame}: {}/{} visible ({} full3d, {} billboard, {} circle, {} point, {} culled, {} fading)",
                stats.visible,
                stats.total,
                stats.full3d,
                stats.billboard,
                stats.circle,
                stats.point,
                stats.culled,
                manager.transitioning().count(),
            );
        }
    }

    let stats = manager.stats();
    info!(
        "final census after {frames} frames: {}/{} visible, {}/{} full-detail slots in use",
        stats.visible,
        stats.total,
        stats.full3d,
        manager.config().max_full3d,
    );
}
