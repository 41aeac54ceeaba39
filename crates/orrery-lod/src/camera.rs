//! Camera capability consumed by the tier manager, plus a glam-based
//! perspective implementation.

use glam::{Mat4, Quat};
use orrery_math::Vec3;

/// Result of projecting a world position into screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenProjection {
    /// Horizontal screen coordinate in pixels.
    pub x: f32,
    /// Vertical screen coordinate in pixels (top-left origin).
    pub y: f32,
    /// Coarse visibility: in front of the camera and within the near/far
    /// range. The manager layers its own viewport-margin cull on top.
    pub visible: bool,
}

/// World-to-screen capability supplied by the embedding renderer.
///
/// The tier manager holds no camera state across frames; a fresh (or reused)
/// camera is passed to every update call. This is the one deliberate
/// dynamic-dispatch seam, so tests can substitute a deterministic fake.
pub trait Camera {
    /// Current world position.
    fn position(&self) -> Vec3;

    /// Project a world position to screen coordinates with a coarse
    /// visibility flag. Exact frustum math is the camera's responsibility.
    fn world_to_screen(&self, world: Vec3) -> ScreenProjection;

    /// Scale factor such that `radius / distance * fov_scale()` approximates
    /// the on-screen radius of a body in pixels.
    fn fov_scale(&self) -> f32;

    /// Viewport width in pixels.
    fn screen_width(&self) -> f32;

    /// Viewport height in pixels.
    fn screen_height(&self) -> f32;
}

/// A perspective camera that projects through glam view/projection matrices.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    /// Position in world space.
    pub position: Vec3,
    /// Rotation as a unit quaternion; forward is -Z in camera space.
    pub rotation: Quat,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
    /// Near clip plane distance (positive).
    pub near: f32,
    /// Far clip plane distance (positive, > near).
    pub far: f32,
}

impl PerspectiveCamera {
    /// Create a camera at `position` with an identity rotation.
    pub fn new(position: Vec3, fov_y: f32, width: f32, height: f32) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            fov_y,
            width,
            height,
            near: 0.1,
            far: 1.0e9,
        }
    }

    /// Create a camera at `position` oriented toward `target`.
    pub fn looking_at(position: Vec3, target: Vec3, fov_y: f32, width: f32, height: f32) -> Self {
        let mut camera = Self::new(position, fov_y, width, height);
        camera.look_at(target);
        camera
    }

    /// Reorient toward `target`. Roll is left unconstrained; a point at the
    /// camera position leaves the rotation unchanged.
    pub fn look_at(&mut self, target: Vec3) {
        let dir = (target - self.position).normalize_or_zero();
        if dir != Vec3::zero() {
            self.rotation = Quat::from_rotation_arc(glam::Vec3::NEG_Z, dir.into());
        }
    }

    /// Update the viewport dimensions.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// The forward direction vector (-Z in camera space).
    pub fn forward(&self) -> Vec3 {
        (self.rotation * glam::Vec3::NEG_Z).into()
    }

    /// The up direction vector (+Y in camera space).
    pub fn up(&self) -> Vec3 {
        (self.rotation * glam::Vec3::Y).into()
    }

    /// The right direction vector (+X in camera space).
    pub fn right(&self) -> Vec3 {
        (self.rotation * glam::Vec3::X).into()
    }

    /// Compute the view matrix (inverse of the camera transform).
    pub fn view_matrix(&self) -> Mat4 {
        let rotation = Mat4::from_quat(self.rotation);
        let translation = Mat4::from_translation(self.position.into());
        (translation * rotation).inverse()
    }

    /// Compute the projection matrix (0..1 depth range).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.width / self.height, self.near, self.far)
    }

    /// Compute the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Camera for PerspectiveCamera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn world_to_screen(&self, world: Vec3) -> ScreenProjection {
        let clip = self.view_projection_matrix() * glam::Vec3::from(world).extend(1.0);
        if clip.w <= 0.0 {
            // Behind the eye plane; there are no meaningful screen coordinates.
            return ScreenProjection {
                x: 0.0,
                y: 0.0,
                visible: false,
            };
        }
        let ndc = clip.truncate() / clip.w;
        ScreenProjection {
            x: (ndc.x + 1.0) * 0.5 * self.width,
            y: (1.0 - ndc.y) * 0.5 * self.height,
            visible: (0.0..=1.0).contains(&ndc.z),
        }
    }

    fn fov_scale(&self) -> f32 {
        self.height / (2.0 * (self.fov_y * 0.5).tan())
    }

    fn screen_width(&self) -> f32 {
        self.width
    }

    fn screen_height(&self) -> f32 {
        self.height
    }
}
