//! Lazy chase camera
//!
//! Each tick the camera closes a fixed fraction of the gap to its target on
//! the x and z axes, so after N ticks toward a still target the remaining gap
//! is `(1 - f)^N` of the initial gap. Height is not followed.

use glam::Vec3;

use crate::tuning::CameraTuning;

#[derive(Debug, Clone)]
pub struct ChaseCamera {
    pub position: Vec3,
    /// Point the camera looks at (the car)
    pub look_at: Vec3,
    pub follow_factor: f32,
    /// Resting offset from the followed subject
    pub offset: Vec3,
}

impl ChaseCamera {
    /// Start at rest behind `subject`
    pub fn new(subject: Vec3, tuning: &CameraTuning) -> Self {
        let offset = Vec3::from_array(tuning.offset);
        Self {
            position: subject + offset,
            look_at: subject,
            follow_factor: tuning.follow_factor,
            offset,
        }
    }

    /// Ease x and z one step toward `target`
    pub fn ease_toward(&mut self, target: Vec3) {
        self.position.x += (target.x - self.position.x) * self.follow_factor;
        self.position.z += (target.z - self.position.z) * self.follow_factor;
    }

    /// Ease toward the resting spot behind `subject` and look at it
    pub fn follow(&mut self, subject: Vec3) {
        self.ease_toward(subject + self.offset);
        self.look_at = subject;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_at(position: Vec3, follow_factor: f32) -> ChaseCamera {
        ChaseCamera {
            position,
            look_at: Vec3::ZERO,
            follow_factor,
            offset: Vec3::ZERO,
        }
    }

    #[test]
    fn test_geometric_convergence() {
        let start = Vec3::new(-4.0, 3.0, 20.0);
        let target = Vec3::new(2.0, 0.0, -10.0);
        let f: f32 = 0.1;
        let mut camera = camera_at(start, f);

        for n in 1..=40 {
            camera.ease_toward(target);
            let decay = (1.0 - f).powi(n);
            let expect_x = target.x - (target.x - start.x) * decay;
            let expect_z = target.z - (target.z - start.z) * decay;
            assert!((camera.position.x - expect_x).abs() < 1e-4, "x at tick {}", n);
            assert!((camera.position.z - expect_z).abs() < 1e-4, "z at tick {}", n);
        }
    }

    #[test]
    fn test_height_is_not_followed() {
        let mut camera = camera_at(Vec3::new(0.0, 3.0, 0.0), 0.5);
        for _ in 0..10 {
            camera.ease_toward(Vec3::new(1.0, 100.0, 1.0));
        }
        assert_eq!(camera.position.y, 3.0);
    }

    #[test]
    fn test_no_overshoot() {
        let mut camera = camera_at(Vec3::ZERO, 0.3);
        let target = Vec3::new(5.0, 0.0, -5.0);
        for _ in 0..200 {
            camera.ease_toward(target);
            assert!(camera.position.x <= target.x);
            assert!(camera.position.z >= target.z);
        }
    }

    #[test]
    fn test_follow_keeps_offset_and_look_at() {
        let tuning = CameraTuning::default();
        let mut camera = ChaseCamera::new(Vec3::ZERO, &tuning);
        let rest = camera.position;

        // Subject standing still: camera stays put
        camera.follow(Vec3::ZERO);
        assert_eq!(camera.position, rest);

        // Subject moves: camera lags behind the new resting spot
        let subject = Vec3::new(0.0, 0.0, -10.0);
        camera.follow(subject);
        assert_eq!(camera.look_at, subject);
        assert!(camera.position.z < rest.z);
        assert!(camera.position.z > subject.z + camera.offset.z);
    }
}
