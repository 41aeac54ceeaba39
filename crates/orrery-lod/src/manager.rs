//! Per-frame tier classification: projection and culling, hysteresis tier
//! resolution, crossfade transitions, priority ordering, and cap-enforced
//! bucketing.

use std::cmp::Ordering;

use orrery_math::{Vec3, distance};

use crate::body::Body;
use crate::camera::Camera;
use crate::config::LodConfig;
use crate::tier::Tier;

/// Extra pixels around the viewport before a body counts as off-screen.
/// Keeps a body whose center just left the frame from popping while its
/// disc still overlaps the edge.
const CULL_MARGIN_PX: f32 = 32.0;

/// Aggregate counts from the most recent update pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LodStats {
    /// Bodies currently registered.
    pub total: usize,
    /// Bodies bucketed into a drawable tier this frame.
    pub visible: usize,
    /// Bodies rejected by culling or resolved below the point threshold.
    pub culled: usize,
    /// Bodies in the full 3D bucket.
    pub full3d: usize,
    /// Bodies in the billboard bucket.
    pub billboard: usize,
    /// Bodies in the circle bucket.
    pub circle: usize,
    /// Bodies in the point bucket.
    pub point: usize,
}

/// Classifies every registered body into a detail tier once per frame.
///
/// Owns the body table outright; callers address bodies only by id, so a
/// `remove` can never invalidate a reference someone else is holding. The
/// per-tier output lists are rebuilt by every [`update`](Self::update) call
/// and are only valid until the next one — copy anything that must outlive
/// the frame.
///
/// Not internally synchronized: membership changes and `update` must run on
/// the same thread, or be serialized by the caller.
pub struct TierManager {
    config: LodConfig,
    bodies: Vec<Body>,
    /// Scratch: body indices sorted by (importance desc, distance asc).
    order: Vec<usize>,
    full3d: Vec<usize>,
    billboard: Vec<usize>,
    circle: Vec<usize>,
    point: Vec<usize>,
    transitioning: Vec<usize>,
    stats: LodStats,
}

impl TierManager {
    /// Create an empty manager with the given configuration.
    pub fn new(config: LodConfig) -> Self {
        Self {
            config,
            bodies: Vec::new(),
            order: Vec::new(),
            full3d: Vec::new(),
            billboard: Vec::new(),
            circle: Vec::new(),
            point: Vec::new(),
            transitioning: Vec::new(),
            stats: LodStats::default(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &LodConfig {
        &self.config
    }

    /// Swap the configuration at runtime; takes effect on the next update.
    pub fn set_config(&mut self, config: LodConfig) {
        self.config = config;
    }

    /// Register a body. It starts fully culled with no transition in flight.
    /// Re-adding an existing id replaces the old record, resetting its tier
    /// bookkeeping.
    pub fn add(&mut self, body: Body) {
        log::debug!("registering body '{}'", body.id);
        match self.bodies.iter_mut().find(|b| b.id == body.id) {
            Some(slot) => *slot = body,
            None => self.bodies.push(body),
        }
    }

    /// Remove a body by id. Unknown ids are silently ignored: removal racing
    /// against gameplay cleanup is benign, not an error.
    ///
    /// Removal invalidates the current frame's output lists; they stay empty
    /// until the next update rebuilds them.
    pub fn remove(&mut self, id: &str) {
        if let Some(index) = self.bodies.iter().position(|b| b.id == id) {
            self.bodies.swap_remove(index);
            self.invalidate_outputs();
            log::debug!("removed body '{id}'");
        }
    }

    /// Move a body. Unknown ids are silently ignored.
    pub fn update_position(&mut self, id: &str, position: Vec3) {
        if let Some(body) = self.bodies.iter_mut().find(|b| b.id == id) {
            body.position = position;
        }
    }

    /// Drop every body and all output lists.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.invalidate_outputs();
        self.stats = LodStats::default();
    }

    /// Drop the index-based output lists after the body table shifted under
    /// them, so a stale index can never reach a wrong (or missing) body.
    fn invalidate_outputs(&mut self) {
        self.order.clear();
        self.full3d.clear();
        self.billboard.clear();
        self.circle.clear();
        self.point.clear();
        self.transitioning.clear();
    }

    /// Number of registered bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// True when no bodies are registered.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Look up a body by id.
    pub fn get(&self, id: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Run the per-frame classification pass.
    ///
    /// In order: project every body and apply the viewport-margin cull,
    /// resolve target tiers with hysteresis and advance crossfades by `dt`
    /// seconds, sort by (importance desc, distance asc), then rebuild the
    /// per-tier buckets enforcing the full-detail cap. The output accessors
    /// reflect this frame until the next call.
    pub fn update(&mut self, camera: &dyn Camera, dt: f32) {
        self.project_and_cull(camera);
        self.advance_tiers(dt);
        self.sort_by_priority();
        self.rebuild_buckets();
        log::trace!(
            "tier pass: {}/{} visible ({} full3d, {} billboard, {} circle, {} point, {} culled)",
            self.stats.visible,
            self.stats.total,
            self.stats.full3d,
            self.stats.billboard,
            self.stats.circle,
            self.stats.point,
            self.stats.culled,
        );
    }

    /// Bodies to draw with the full 3D model this frame.
    pub fn tier_full3d(&self) -> impl Iterator<Item = &Body> {
        self.full3d.iter().map(|&i| &self.bodies[i])
    }

    /// Bodies to draw as camera-facing billboards this frame.
    pub fn tier_billboard(&self) -> impl Iterator<Item = &Body> {
        self.billboard.iter().map(|&i| &self.bodies[i])
    }

    /// Bodies to draw as flat circles this frame.
    pub fn tier_circle(&self) -> impl Iterator<Item = &Body> {
        self.circle.iter().map(|&i| &self.bodies[i])
    }

    /// Bodies to draw as single points this frame.
    pub fn tier_point(&self) -> impl Iterator<Item = &Body> {
        self.point.iter().map(|&i| &self.bodies[i])
    }

    /// Bodies mid-crossfade this frame. Each also appears in the bucket of
    /// its destination tier; renderers overlay `previous_tier()` at
    /// `previous_alpha()` to fade the old representation out.
    pub fn transitioning(&self) -> impl Iterator<Item = &Body> {
        self.transitioning.iter().map(|&i| &self.bodies[i])
    }

    /// Counts from the most recent update.
    pub fn stats(&self) -> LodStats {
        self.stats
    }

    fn project_and_cull(&mut self, camera: &dyn Camera) {
        let camera_position = camera.position();
        let fov_scale = camera.fov_scale();
        let width = camera.screen_width();
        let height = camera.screen_height();

        for body in &mut self.bodies {
            body.distance = distance(camera_position, body.position);
            let projected = camera.world_to_screen(body.position);
            body.screen_x = projected.x;
            body.screen_y = projected.y;
            // A camera sitting inside the body would divide by zero; the FOV
            // scale alone is the limiting apparent size.
            body.apparent_radius = if body.distance > 0.0 {
                body.radius / body.distance * fov_scale
            } else {
                fov_scale
            };

            let margin = body.apparent_radius + CULL_MARGIN_PX;
            body.visible = projected.visible
                && projected.x + margin >= 0.0
                && projected.x - margin <= width
                && projected.y + margin >= 0.0
                && projected.y - margin <= height;
        }
    }

    fn advance_tiers(&mut self, dt: f32) {
        let config = &self.config;
        for body in &mut self.bodies {
            let resolved =
                config.resolve_tier(body.current_tier, body.distance, body.apparent_radius);

            // A new crossfade only starts once the previous one has
            // finished; there is no mid-flight retargeting.
            if resolved != body.current_tier && body.transition_progress >= 1.0 {
                body.previous_tier = body.current_tier;
                body.target_tier = resolved;
                body.transition_progress = 0.0;
            }

            if body.transition_progress < 1.0 {
                body.transition_progress = if config.transition_time > 0.0 {
                    (body.transition_progress + dt / config.transition_time).min(1.0)
                } else {
                    1.0
                };
                if body.transition_progress >= 1.0 {
                    body.current_tier = body.target_tier;
                }
            }
        }
    }

    fn sort_by_priority(&mut self) {
        let bodies = &self.bodies;
        self.order.clear();
        self.order.extend(0..bodies.len());
        self.order.sort_by(|&a, &b| {
            let (a, b) = (&bodies[a], &bodies[b]);
            b.importance
                .partial_cmp(&a.importance)
                .unwrap_or(Ordering::Equal)
                .then_with(|| {
                    a.distance
                        .partial_cmp(&b.distance)
                        .unwrap_or(Ordering::Equal)
                })
        });
    }

    fn rebuild_buckets(&mut self) {
        self.full3d.clear();
        self.billboard.clear();
        self.circle.clear();
        self.point.clear();
        self.transitioning.clear();
        self.stats = LodStats {
            total: self.bodies.len(),
            ..LodStats::default()
        };

        for position in 0..self.order.len() {
            let index = self.order[position];
            if !self.bodies[index].visible {
                self.stats.culled += 1;
                continue;
            }

            // Mid-transition bodies bucket by their destination so the
            // renderer of the new tier sees them arriving; the transitioning
            // list carries the fading previous representation.
            let mut effective = if self.bodies[index].is_transitioning() {
                self.bodies[index].target_tier
            } else {
                self.bodies[index].current_tier
            };

            // Full-detail slots are scarce. The walk order is importance
            // then distance, so once the cap is hit every further claimant
            // lost the arbitration and is snapped straight to billboard with
            // no crossfade.
            if effective == Tier::Full3d && self.full3d.len() >= self.config.max_full3d {
                let body = &mut self.bodies[index];
                body.current_tier = Tier::Billboard;
                body.target_tier = Tier::Billboard;
                body.transition_progress = 1.0;
                effective = Tier::Billboard;
            }

            match effective {
                Tier::Full3d => {
                    self.full3d.push(index);
                    self.stats.full3d += 1;
                }
                Tier::Billboard => {
                    self.billboard.push(index);
                    self.stats.billboard += 1;
                }
                Tier::Circle => {
                    self.circle.push(index);
                    self.stats.circle += 1;
                }
                Tier::Point => {
                    self.point.push(index);
                    self.stats.point += 1;
                }
                Tier::Culled => {
                    // On-screen but too small to draw at all.
                    self.stats.culled += 1;
                    continue;
                }
            }
            self.stats.visible += 1;

            if self.bodies[index].is_transitioning() {
                self.transitioning.push(index);
            }
        }
    }
}
