//! Tier thresholds, hysteresis, transition timing, and the full-detail cap.

use serde::{Deserialize, Serialize};

use crate::tier::Tier;

/// Configuration for tier selection.
///
/// Two threshold modes are supported: apparent-pixel thresholds (a body is
/// classified by its projected on-screen radius) and plain distance
/// thresholds. `use_apparent_size` selects which set is active; the inactive
/// set is simply ignored.
///
/// Thresholds are a caller contract: distance thresholds must increase
/// (`full3d < billboard < circle < point`) and pixel thresholds must decrease
/// (`full3d > billboard > circle > point`). Violating that yields nonsensical
/// but non-crashing tier assignment; nothing here validates or panics.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LodConfig {
    /// Bodies nearer than this get the full 3D model (distance mode).
    pub full3d_distance: f32,
    /// Bodies nearer than this (but past `full3d_distance`) get a billboard.
    pub billboard_distance: f32,
    /// Bodies nearer than this (but past `billboard_distance`) get a circle.
    pub circle_distance: f32,
    /// Bodies nearer than this (but past `circle_distance`) get a point;
    /// anything farther is culled.
    pub point_distance: f32,

    /// Bodies at least this many pixels across get the full 3D model
    /// (apparent-size mode).
    pub full3d_pixels: f32,
    /// Minimum apparent radius in pixels for the billboard tier.
    pub billboard_pixels: f32,
    /// Minimum apparent radius in pixels for the circle tier.
    pub circle_pixels: f32,
    /// Minimum apparent radius in pixels for the point tier; anything
    /// smaller is culled.
    pub point_pixels: f32,

    /// Selects apparent-pixel thresholds (true) or distance thresholds
    /// (false).
    pub use_apparent_size: bool,

    /// Dead-zone fraction in [0, 1] applied against downgrades at tier
    /// boundaries, so a body hovering at a threshold does not flicker.
    pub hysteresis: f32,

    /// Crossfade duration in seconds; zero or negative snaps instantly.
    pub transition_time: f32,

    /// Hard cap on bodies granted the full 3D tier in any one frame.
    pub max_full3d: usize,
}

impl Default for LodConfig {
    fn default() -> Self {
        Self {
            full3d_distance: 500.0,
            billboard_distance: 2_500.0,
            circle_distance: 10_000.0,
            point_distance: 40_000.0,
            full3d_pixels: 40.0,
            billboard_pixels: 10.0,
            circle_pixels: 3.0,
            point_pixels: 1.0,
            use_apparent_size: true,
            hysteresis: 0.1,
            transition_time: 0.3,
            max_full3d: 16,
        }
    }
}

impl LodConfig {
    /// The tier a body with the given metrics would occupy under the strict
    /// thresholds, ignoring any hysteresis.
    pub fn strict_tier(&self, distance: f32, apparent_radius: f32) -> Tier {
        if self.use_apparent_size {
            if apparent_radius >= self.full3d_pixels {
                Tier::Full3d
            } else if apparent_radius >= self.billboard_pixels {
                Tier::Billboard
            } else if apparent_radius >= self.circle_pixels {
                Tier::Circle
            } else if apparent_radius >= self.point_pixels {
                Tier::Point
            } else {
                Tier::Culled
            }
        } else if distance < self.full3d_distance {
            Tier::Full3d
        } else if distance < self.billboard_distance {
            Tier::Billboard
        } else if distance < self.circle_distance {
            Tier::Circle
        } else if distance < self.point_distance {
            Tier::Point
        } else {
            Tier::Culled
        }
    }

    /// Resolve the tier for a body currently settled in `current`.
    ///
    /// Upgrades (more detail) use the raw thresholds. Downgrades must clear
    /// the current tier's entry threshold by the hysteresis fraction, which
    /// puts a one-sided dead zone around each boundary: a body that just
    /// slipped below a threshold keeps its tier until it has fallen
    /// decisively out of the band.
    pub fn resolve_tier(&self, current: Tier, distance: f32, apparent_radius: f32) -> Tier {
        let strict = self.strict_tier(distance, apparent_radius);
        if strict > current && current != Tier::Culled {
            let retain = if self.use_apparent_size {
                apparent_radius >= self.entry_pixels(current) * (1.0 - self.hysteresis)
            } else {
                distance < self.entry_distance(current) * (1.0 + self.hysteresis)
            };
            if retain {
                return current;
            }
        }
        strict
    }

    /// Minimum apparent radius to enter a tier (apparent-size mode).
    fn entry_pixels(&self, tier: Tier) -> f32 {
        match tier {
            Tier::Full3d => self.full3d_pixels,
            Tier::Billboard => self.billboard_pixels,
            Tier::Circle => self.circle_pixels,
            Tier::Point => self.point_pixels,
            Tier::Culled => 0.0,
        }
    }

    /// Maximum distance to enter a tier (distance mode).
    fn entry_distance(&self, tier: Tier) -> f32 {
        match tier {
            Tier::Full3d => self.full3d_distance,
            Tier::Billboard => self.billboard_distance,
            Tier::Circle => self.circle_distance,
            Tier::Point => self.point_distance,
            Tier::Culled => f32::INFINITY,
        }
    }
}
