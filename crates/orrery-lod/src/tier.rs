//! Detail tiers for renderable bodies.

use std::fmt;

/// How a body is depicted on screen this frame.
///
/// Declared in decreasing order of detail so the derived `Ord` follows the
/// usual LOD convention of "lower = more detail": `Full3d < Billboard <
/// Circle < Point < Culled`. The manager relies on this order to detect
/// downgrades and to arbitrate full-detail slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// The full detailed 3D model.
    Full3d,
    /// A camera-facing sprite.
    Billboard,
    /// A flat shaded circle.
    Circle,
    /// A single point.
    Point,
    /// Not drawn at all.
    Culled,
}

impl Tier {
    /// True when the body is not drawn in this tier.
    pub fn is_culled(self) -> bool {
        matches!(self, Tier::Culled)
    }

    /// True when the tier produces pixels (everything but `Culled`).
    pub fn is_drawable(self) -> bool {
        !self.is_culled()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Full3d => "full3d",
            Tier::Billboard => "billboard",
            Tier::Circle => "circle",
            Tier::Point => "point",
            Tier::Culled => "culled",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The derived order must run from most to least detail.
    #[test]
    fn test_order_tracks_detail() {
        assert!(Tier::Full3d < Tier::Billboard);
        assert!(Tier::Billboard < Tier::Circle);
        assert!(Tier::Circle < Tier::Point);
        assert!(Tier::Point < Tier::Culled);
    }

    #[test]
    fn test_drawable_predicates() {
        assert!(Tier::Full3d.is_drawable());
        assert!(Tier::Point.is_drawable());
        assert!(!Tier::Culled.is_drawable());
        assert!(Tier::Culled.is_culled());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Tier::Full3d.to_string(), "full3d");
        assert_eq!(Tier::Culled.to_string(), "culled");
    }
}
