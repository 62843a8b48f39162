//! Perspective camera and pointer rays.
//!
//! The host owns the orbit controls and reports the camera pose after every
//! change; the engine only needs the pose to turn a pointer position into a
//! world-space ray for dropping, picking, and dragging.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::CameraDefaults;
use crate::consts::EPSILON;
use crate::doc::Point;

/// Pointer position in normalized device coordinates: x and y in `[-1, 1]`, y up.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ndc {
    pub x: f32,
    pub y: f32,
}

impl Ndc {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Convert a pointer offset inside a `width` × `height` viewport (CSS pixels, y down).
    #[must_use]
    pub fn from_viewport(px: f32, py: f32, width: f32, height: f32) -> Self {
        let w = width.max(1.0);
        let h = height.max(1.0);
        Self { x: px / w * 2.0 - 1.0, y: -(py / h) * 2.0 + 1.0 }
    }
}

/// A half-line in world space. `dir` is unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `dir`. Returns `None` for a zero direction.
    #[must_use]
    pub fn new(origin: Vec3, dir: Vec3) -> Option<Self> {
        let dir = dir.try_normalize()?;
        Some(Self { origin, dir })
    }

    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }

    /// Intersect with the horizontal plane at height `y`, in front of the origin.
    #[must_use]
    pub fn intersect_horizontal(&self, y: f32) -> Option<Vec3> {
        if self.dir.y.abs() < EPSILON {
            return None;
        }
        let t = (y - self.origin.y) / self.dir.y;
        if t < 0.0 {
            return None;
        }
        Some(self.at(t))
    }

    /// Where the ray meets the floor (`y = 0`).
    #[must_use]
    pub fn floor_point(&self) -> Option<Point> {
        self.intersect_horizontal(0.0).map(|p| Point::new(p.x, p.z))
    }
}

/// Perspective camera looking from `eye` at `target` with +y up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraDefaults::default())
    }
}

impl Camera {
    #[must_use]
    pub fn from_config(defaults: &CameraDefaults) -> Self {
        Self {
            eye: Vec3::from_array(defaults.eye),
            target: Vec3::from_array(defaults.target),
            fov_y_deg: defaults.fov_y_deg,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Track the viewport size. Degenerate sizes keep the previous aspect.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Update the pose reported by the host's orbit controls.
    pub fn set_pose(&mut self, eye: Vec3, target: Vec3) {
        self.eye = eye;
        self.target = target;
    }

    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        let proj = Mat4::perspective_rh_gl(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far);
        let view = Mat4::look_at_rh(self.eye, self.target, Vec3::Y);
        proj * view
    }

    /// Un-project a pointer position into a world-space ray from the near plane.
    #[must_use]
    pub fn ray(&self, ndc: Ndc) -> Option<Ray> {
        let inverse = self.view_projection().inverse();
        let near = inverse.project_point3(Vec3::new(ndc.x, ndc.y, -1.0));
        // Mid-depth stays close to the near plane; the far plane loses f32 precision.
        let mid = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        if !near.is_finite() || !mid.is_finite() {
            return None;
        }
        Ray::new(near, mid - near)
    }

    /// Project a world point to normalized device coordinates.
    ///
    /// Returns `None` for points behind the camera.
    #[must_use]
    pub fn project(&self, world: Vec3) -> Option<Ndc> {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w <= EPSILON {
            return None;
        }
        Some(Ndc::new(clip.x / clip.w, clip.y / clip.w))
    }

    /// The floor point under the pointer.
    #[must_use]
    pub fn floor_point(&self, ndc: Ndc) -> Option<Point> {
        self.ray(ndc)?.floor_point()
    }
}
