//! Deterministic demo catalog: a central star, a ring of orbiting planets,
//! and a cloud of debris.

use std::f32::consts::TAU;

use orrery_lod::Body;
use orrery_math::Vec3;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A body plus the circular-orbit parameters the demo animates it with.
#[derive(Clone, Debug)]
pub struct OrbitEntry {
    pub body: Body,
    /// Orbit radius around the origin; zero means the body is static.
    pub orbit_radius: f32,
    /// Angular velocity in radians per second.
    pub angular_velocity: f32,
    /// Starting angle in radians.
    pub phase: f32,
    /// Fixed height of the orbital plane.
    pub plane_y: f32,
}

impl OrbitEntry {
    /// Position along the orbit at the given simulation time.
    pub fn position_at(&self, time: f32) -> Vec3 {
        if self.orbit_radius <= 0.0 {
            return self.body.position;
        }
        let angle = self.phase + self.angular_velocity * time;
        Vec3::new(
            angle.cos() * self.orbit_radius,
            self.plane_y,
            angle.sin() * self.orbit_radius,
        )
    }
}

/// A generated set of bodies. Deterministic for a given seed.
pub struct Catalog {
    pub entries: Vec<OrbitEntry>,
}

impl Catalog {
    /// Generate `count` bodies: one star, roughly one planet per eight
    /// bodies, and debris for the rest.
    pub fn generate(seed: u64, count: u32) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let total = count.max(1);
        let planet_count = (total.saturating_sub(1) / 8).min(32);
        let debris_count = total.saturating_sub(1 + planet_count);

        let mut entries = Vec::with_capacity(total as usize);

        // The star anchors the system and always wins a full-detail slot.
        entries.push(OrbitEntry {
            body: Body::new("star", Vec3::zero(), 60.0)
                .with_color(star_color(0.85))
                .with_importance(100.0),
            orbit_radius: 0.0,
            angular_velocity: 0.0,
            phase: 0.0,
            plane_y: 0.0,
        });

        for i in 0..planet_count {
            let orbit_radius = 400.0 + i as f32 * 350.0;
            let radius = rng.random_range(2.0..12.0);
            // Outer planets matter less when full-detail slots run out.
            let importance = 10.0 - i as f32 * 0.25;
            entries.push(OrbitEntry {
                body: Body::new(format!("planet-{i:02}"), Vec3::zero(), radius)
                    .with_color(star_color(rng.random::<f32>()))
                    .with_importance(importance),
                orbit_radius,
                angular_velocity: rng.random_range(0.02..0.2),
                phase: rng.random_range(0.0..TAU),
                plane_y: rng.random_range(-50.0..50.0),
            });
        }

        for i in 0..debris_count {
            entries.push(OrbitEntry {
                body: Body::new(
                    format!("debris-{i:04}"),
                    Vec3::zero(),
                    rng.random_range(0.2..1.5),
                )
                .with_color([0.5, 0.48, 0.45]),
                orbit_radius: rng.random_range(300.0..8_000.0),
                angular_velocity: rng.random_range(0.01..0.3),
                phase: rng.random_range(0.0..TAU),
                plane_y: rng.random_range(-200.0..200.0),
            });
        }

        Self { entries }
    }
}

/// Map a normalized temperature (0 = cool, 1 = hot) to an RGB tint running
/// red-orange through white to blue-white.
pub fn star_color(temperature: f32) -> [f32; 3] {
    let t = temperature.clamp(0.0, 1.0);
    let cool = [1.0, 0.55, 0.30];
    let white = [1.0, 1.0, 1.0];
    let hot = [0.65, 0.75, 1.0];
    if t < 0.5 {
        mix(cool, white, t * 2.0)
    } else {
        mix(white, hot, (t - 0.5) * 2.0)
    }
}

fn mix(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}
