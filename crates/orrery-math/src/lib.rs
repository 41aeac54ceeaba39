//! f32 vector math and distance operations for the Orrery LOD core.

mod vector;

pub use vector::{Vec3, distance, distance_squared};
