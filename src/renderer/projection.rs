//! Perspective projection for the chase camera

use glam::{Mat4, Vec3};

use crate::sim::ChaseCamera;

/// Perspective lens (75° vertical FOV, 0.1..1000 depth range)
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub fn new(width: u32, height: u32) -> Self {
        let mut projection = Self {
            fov_y: 75.0_f32.to_radians(),
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
        };
        projection.resize(width, height);
        projection
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn view_projection(&self, camera: &ChaseCamera) -> Mat4 {
        let view = Mat4::look_at_rh(camera.position, camera.look_at, Vec3::Y);
        let proj = Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far);
        proj * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::CameraTuning;

    #[test]
    fn test_resize_ignores_zero() {
        let mut projection = Projection::new(1600, 900);
        assert!((projection.aspect - 16.0 / 9.0).abs() < 1e-6);
        projection.resize(0, 900);
        assert!((projection.aspect - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_car_is_centered_on_screen() {
        let camera = ChaseCamera::new(Vec3::new(1.0, 0.0, -20.0), &CameraTuning::default());
        let vp = Projection::new(800, 600).view_projection(&camera);
        let clip = vp * camera.look_at.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
        // Inside the depth range
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }
}
