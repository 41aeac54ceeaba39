//! Renderable body records: identity, appearance, and per-frame LOD
//! bookkeeping.

use orrery_math::Vec3;

use crate::tier::Tier;

/// A renderable object tracked by the tier manager.
///
/// The manager owns the record outright and is the sole mutator of the tier
/// and per-frame cache fields; `position` is caller-owned and moved between
/// frames through [`TierManager::update_position`](crate::TierManager::update_position).
/// The caller's visual payload (mesh, sprite, texture) is never touched —
/// only the `id` ties this record back to it.
///
/// Invariant: `transition_progress == 1.0` means the body is not
/// transitioning and `current_tier == target_tier`. While the progress is
/// below 1.0 the body is drawable in both `previous_tier` (fading out) and
/// `target_tier` (fading in).
#[derive(Clone, Debug)]
pub struct Body {
    /// Stable identity across frames.
    pub id: String,
    /// World position, caller-mutated between frames.
    pub position: Vec3,
    /// Intrinsic world-space radius, the basis of the apparent size.
    pub radius: f32,
    /// Display color (linear RGB).
    pub color: [f32; 3],
    /// Priority for full-detail slot arbitration; higher wins.
    pub importance: f32,

    pub(crate) current_tier: Tier,
    pub(crate) target_tier: Tier,
    pub(crate) previous_tier: Tier,
    pub(crate) transition_progress: f32,

    // Refreshed by every manager update.
    pub(crate) distance: f32,
    pub(crate) screen_x: f32,
    pub(crate) screen_y: f32,
    pub(crate) apparent_radius: f32,
    pub(crate) visible: bool,
}

impl Body {
    /// Create a body that starts fully culled with no transition in flight.
    pub fn new(id: impl Into<String>, position: Vec3, radius: f32) -> Self {
        Self {
            id: id.into(),
            position,
            radius,
            color: [1.0, 1.0, 1.0],
            importance: 0.0,
            current_tier: Tier::Culled,
            target_tier: Tier::Culled,
            previous_tier: Tier::Culled,
            transition_progress: 1.0,
            distance: 0.0,
            screen_x: 0.0,
            screen_y: 0.0,
            apparent_radius: 0.0,
            visible: false,
        }
    }

    /// Set the display color.
    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    /// Set the arbitration priority.
    pub fn with_importance(mut self, importance: f32) -> Self {
        self.importance = importance;
        self
    }

    /// The tier the body is currently settled in (or leaving, while a
    /// transition is in flight).
    pub fn current_tier(&self) -> Tier {
        self.current_tier
    }

    /// The tier the body is headed to; equals `current_tier` when settled.
    pub fn target_tier(&self) -> Tier {
        self.target_tier
    }

    /// The tier being faded out during a transition. Only meaningful while
    /// `is_transitioning()` is true.
    pub fn previous_tier(&self) -> Tier {
        self.previous_tier
    }

    /// Crossfade progress in [0, 1]; 1.0 means "not transitioning".
    pub fn transition_progress(&self) -> f32 {
        self.transition_progress
    }

    /// True while a crossfade between representations is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.transition_progress < 1.0
    }

    /// Alpha for the fading-out previous representation: `1 - progress`.
    pub fn previous_alpha(&self) -> f32 {
        1.0 - self.transition_progress
    }

    /// `(old_alpha, new_alpha)` for the crossfade. `(0, 1)` when settled.
    pub fn fade_alphas(&self) -> (f32, f32) {
        (1.0 - self.transition_progress, self.transition_progress)
    }

    /// Distance to the camera, cached by the last manager update.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Projected screen position, cached by the last manager update.
    pub fn screen_position(&self) -> (f32, f32) {
        (self.screen_x, self.screen_y)
    }

    /// On-screen radius in pixels, cached by the last manager update.
    pub fn apparent_radius(&self) -> f32 {
        self.apparent_radius
    }

    /// Whether the body survived culling in the last manager update.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Hermite smooth step for eased crossfades.
///
/// The contract alphas from [`Body::fade_alphas`] are linear; renderers that
/// want a softer fade can pass the progress through this first.
pub fn smooth_step(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_body_starts_culled_and_settled() {
        let body = Body::new("probe", Vec3::zero(), 1.0);
        assert_eq!(body.current_tier(), Tier::Culled);
        assert_eq!(body.target_tier(), Tier::Culled);
        assert_eq!(body.previous_tier(), Tier::Culled);
        assert!(!body.is_transitioning());
        assert!(!body.is_visible());
    }

    #[test]
    fn test_builders_set_appearance() {
        let body = Body::new("sol", Vec3::zero(), 50.0)
            .with_color([1.0, 0.9, 0.6])
            .with_importance(100.0);
        assert_eq!(body.color, [1.0, 0.9, 0.6]);
        assert_eq!(body.importance, 100.0);
    }

    /// Alphas run (1,0) -> (0,1) as the progress advances.
    #[test]
    fn test_fade_alphas_track_progress() {
        let mut body = Body::new("probe", Vec3::zero(), 1.0);
        body.transition_progress = 0.0;
        assert_eq!(body.fade_alphas(), (1.0, 0.0));
        assert_eq!(body.previous_alpha(), 1.0);

        body.transition_progress = 0.25;
        let (old_alpha, new_alpha) = body.fade_alphas();
        assert!((old_alpha - 0.75).abs() < 1e-6);
        assert!((new_alpha - 0.25).abs() < 1e-6);
        assert!((old_alpha + new_alpha - 1.0).abs() < 1e-6);

        body.transition_progress = 1.0;
        assert_eq!(body.fade_alphas(), (0.0, 1.0));
        assert!(!body.is_transitioning());
    }

    #[test]
    fn test_smooth_step_endpoints_and_clamp() {
        assert_eq!(smooth_step(0.0), 0.0);
        assert_eq!(smooth_step(1.0), 1.0);
        assert!((smooth_step(0.5) - 0.5).abs() < f32::EPSILON);
        assert_eq!(smooth_step(-1.0), 0.0);
        assert_eq!(smooth_step(2.0), 1.0);
    }

    #[test]
    fn test_smooth_step_monotonic() {
        let mut prev = 0.0f32;
        for i in 0..=100 {
            let v = smooth_step(i as f32 / 100.0);
            assert!(v >= prev, "smooth_step must not decrease: {prev} -> {v}");
            prev = v;
        }
    }
}
