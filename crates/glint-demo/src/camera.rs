//! Fixed-angle orbit camera.
//!
//! The camera sits on a circle around the origin at a constant angle; it
//! never moves at runtime. Projection follows wgpu clip-space conventions
//! (depth 0..1).

use glam::{Mat4, Vec3};

pub const ORBIT_ANGLE_DEG: f32 = -10.0;
pub const ORBIT_RADIUS: f32 = 10.0;

pub const FOV_Y_DEG: f32 = 45.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

#[derive(Debug, Copy, Clone)]
pub struct OrbitCamera {
    pub angle_deg: f32,
    pub radius: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            angle_deg: ORBIT_ANGLE_DEG,
            radius: ORBIT_RADIUS,
        }
    }
}

impl OrbitCamera {
    /// Eye position on the orbit circle (y = 0 plane).
    pub fn eye(&self) -> Vec3 {
        let angle = self.angle_deg.to_radians();
        Vec3::new(self.radius * angle.sin(), 0.0, self.radius * angle.cos())
    }

    /// View matrix looking at the origin, +Y up.
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y)
    }

    /// Perspective projection for the given drawable aspect ratio.
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(FOV_Y_DEG.to_radians(), aspect, Z_NEAR, Z_FAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eye_sits_on_the_orbit_radius() {
        let cam = OrbitCamera::default();
        assert!((cam.eye().length() - ORBIT_RADIUS).abs() < 1e-5);
        assert_eq!(cam.eye().y, 0.0);
        // Negative angle puts the camera slightly to -X, in front of the scene.
        assert!(cam.eye().x < 0.0);
        assert!(cam.eye().z > 0.0);
    }

    #[test]
    fn view_maps_the_eye_to_the_camera_origin() {
        let cam = OrbitCamera::default();
        let eye_in_view = cam.view().transform_point3(cam.eye());
        assert!(eye_in_view.abs_diff_eq(Vec3::ZERO, 1e-5));
    }

    #[test]
    fn view_looks_down_negative_z_at_the_origin() {
        let cam = OrbitCamera::default();
        let origin_in_view = cam.view().transform_point3(Vec3::ZERO);
        assert!((origin_in_view.z + ORBIT_RADIUS).abs() < 1e-4);
        assert!(origin_in_view.x.abs() < 1e-4);
    }

    #[test]
    fn projection_respects_near_and_far() {
        let cam = OrbitCamera::default();
        let proj = cam.projection(800.0 / 600.0);

        // A point on the near plane projects to depth 0, far plane to 1
        // (wgpu conventions).
        let near = proj.project_point3(Vec3::new(0.0, 0.0, -Z_NEAR));
        let far = proj.project_point3(Vec3::new(0.0, 0.0, -Z_FAR));
        assert!(near.z.abs() < 1e-5);
        assert!((far.z - 1.0).abs() < 1e-4);
    }
}
