//! Camera: projection/view matrices and the frustum acceptance test.

use crate::math::{BoundingVolume, Fx, Mat4, Quaternion, Vec3, Vec4};

/// Perspective camera with a cached view matrix.
///
/// The view matrix is recomputed lazily: position/orientation writes only
/// set a dirty flag, and the next `view_matrix` call rebuilds it.
pub struct Camera {
    fov: Fx,
    near: Fx,
    far: Fx,

    position: Vec3,
    orientation: Quaternion,

    projection: Mat4,
    view: Mat4,
    orientation_dirty: bool,
}

impl Camera {
    /// `fov` is the vertical field of view in degrees.
    pub fn new(fov: Fx, near: Fx, far: Fx, aspect: Fx) -> Self {
        let mut cam = Self {
            fov,
            near,
            far,
            position: Vec3::ZERO,
            orientation: Quaternion::IDENTITY,
            projection: Mat4::perspective(fov, aspect, near, far),
            view: Mat4::identity(),
            orientation_dirty: false,
        };
        cam.rebuild_view();
        cam
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.orientation_dirty = true;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Set orientation from Euler angles in degrees (yaw-pitch-roll).
    pub fn set_rotation(&mut self, euler_deg: Vec3) {
        self.orientation = Quaternion::from_euler(euler_deg);
        self.orientation_dirty = true;
    }

    pub fn set_orientation(&mut self, orientation: Quaternion) {
        self.orientation = orientation;
        self.orientation_dirty = true;
    }

    pub fn fov(&self) -> Fx {
        self.fov
    }

    pub fn near(&self) -> Fx {
        self.near
    }

    pub fn far(&self) -> Fx {
        self.far
    }

    /// The view matrix, recomputed only if position/orientation changed.
    pub fn view_matrix(&mut self) -> Mat4 {
        if self.orientation_dirty {
            self.rebuild_view();
            self.orientation_dirty = false;
        }
        self.view
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// Frustum acceptance test for a bounding volume under `model`.
    ///
    /// Accepts if any of the eight corners lands inside the canonical
    /// clip volume. Intentionally incomplete: a volume enclosing the
    /// whole frustum has no corner inside and is rejected. That trade
    /// buys out of a separating-axis test; if an exact test is ever
    /// needed it must be a new routine, not a change to this one.
    pub fn intersects_frustum(&mut self, volume: &BoundingVolume, model: &Mat4) -> bool {
        let view_proj = self.projection * self.view_matrix();
        volume_in_frustum(&view_proj, volume, model)
    }

    fn rebuild_view(&mut self) {
        self.view = self.orientation.to_matrix() * Mat4::translate(-self.position);
    }
}

/// Any-corner-inside frustum test against a prebuilt view-projection.
///
/// Shared by the camera and by the rasterizer's per-frame snapshot so
/// both sides reject the same draw calls.
pub fn volume_in_frustum(view_proj: &Mat4, volume: &BoundingVolume, model: &Mat4) -> bool {
    let mvp = *view_proj * *model;
    for corner in volume.corners() {
        let clip = (mvp * Vec4::from_vec3(corner, Fx::ONE)).homogenize();
        let unit = Fx::ONE;
        if clip.x() >= -unit
            && clip.x() <= unit
            && clip.y() >= -unit
            && clip.y() <= unit
            && clip.z() >= Fx::ZERO
            && clip.z() <= unit
        {
            return true;
        }
    }
    false
}
