//! Level-of-detail tier management: per-frame classification of renderable
//! bodies into detail tiers, crossfade transitions between representations,
//! and arbitration of the scarce full-detail slots.
//!
//! The manager owns the body table and is driven once per frame with a
//! [`Camera`] capability and a delta time; renderers consume the per-tier
//! output lists it produces. No actual drawing happens here.

mod body;
mod camera;
mod config;
mod manager;
mod tier;

pub use body::{Body, smooth_step};
pub use camera::{Camera, PerspectiveCamera, ScreenProjection};
pub use config::LodConfig;
pub use manager::{LodStats, TierManager};
pub use tier::Tier;
