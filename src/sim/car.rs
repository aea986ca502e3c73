//! Player car: held-key input to speed, speed to position
//!
//! The integrator works in per-tick units. Acceleration, deceleration and the
//! lateral step are applied once per call with no delta scaling; the host is
//! responsible for calling it at a fixed rate.

use glam::Vec3;
use std::f32::consts::TAU;

use super::tick::TickInput;
use crate::consts::SPEED_DISPLAY_SCALE;
use crate::tuning::CarTuning;

/// The player's car
#[derive(Debug, Clone)]
pub struct Car {
    /// World position (y stays on the road surface)
    pub pos: Vec3,
    /// Signed longitudinal speed; positive drives toward -z
    pub speed: f32,
    /// Wheel roll in radians, wrapped to `[0, TAU)`, for rendering
    pub wheel_angle: f32,
}

impl Default for Car {
    fn default() -> Self {
        Self {
            pos: Vec3::ZERO,
            speed: 0.0,
            wheel_angle: 0.0,
        }
    }
}

impl Car {
    /// Advance one tick from the held keys
    pub fn integrate(&mut self, input: &TickInput, tuning: &CarTuning) {
        // Longitudinal
        if input.forward {
            self.speed += tuning.acceleration;
        } else if input.backward {
            self.speed -= tuning.acceleration;
        } else {
            self.speed = decay_toward_zero(self.speed, tuning.deceleration);
        }
        self.speed = self.speed.clamp(tuning.min_speed, tuning.max_speed);

        self.pos.z -= self.speed;
        self.wheel_angle = wrap_angle(self.wheel_angle + self.speed / tuning.wheel_radius);

        // Lateral steps are instantaneous; both keys held cancel out
        if input.left {
            self.pos.x -= tuning.lateral_step;
        }
        if input.right {
            self.pos.x += tuning.lateral_step;
        }
        self.pos.x = self.pos.x.clamp(-tuning.lateral_bound, tuning.lateral_bound);
    }

    /// True once the speed has snapped to rest
    pub fn is_stopped(&self) -> bool {
        self.speed == 0.0
    }

    /// Speed in HUD units
    pub fn display_speed(&self) -> f32 {
        self.speed * SPEED_DISPLAY_SCALE
    }

    /// HUD text for the current speed
    pub fn speed_readout(&self) -> String {
        format!("{:.2}", self.display_speed())
    }
}

/// Wrap to `[0, TAU)`; `rem_euclid` alone can round up onto `TAU`
fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Slack on the snap threshold for f32 rounding from repeated subtraction
const SNAP_EPSILON: f32 = 1e-6;

/// Move `speed` one step of `decel` toward zero, landing exactly on zero
/// instead of overshooting past it.
fn decay_toward_zero(speed: f32, decel: f32) -> f32 {
    if speed.abs() <= decel + SNAP_EPSILON {
        0.0
    } else {
        speed - decel * speed.signum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn forward() -> TickInput {
        TickInput {
            forward: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_accelerate_ten_ticks() {
        let tuning = CarTuning {
            acceleration: 0.015,
            max_speed: 0.2,
            ..Default::default()
        };
        let mut car = Car::default();
        for _ in 0..10 {
            car.integrate(&forward(), &tuning);
        }
        assert!((car.speed - 0.15).abs() < 1e-5);
    }

    #[test]
    fn test_speed_clamps_at_max() {
        let tuning = CarTuning::default();
        let mut car = Car::default();
        for _ in 0..100 {
            car.integrate(&forward(), &tuning);
        }
        assert_eq!(car.speed, tuning.max_speed);
    }

    #[test]
    fn test_reverse_clamps_at_min() {
        let tuning = CarTuning::default();
        let mut car = Car::default();
        let input = TickInput {
            backward: true,
            ..Default::default()
        };
        for _ in 0..100 {
            car.integrate(&input, &tuning);
        }
        assert_eq!(car.speed, tuning.min_speed);
        // Reversing moves toward +z
        assert!(car.pos.z > 0.0);
    }

    #[test]
    fn test_forward_wins_over_backward() {
        let tuning = CarTuning::default();
        let mut car = Car::default();
        let input = TickInput {
            forward: true,
            backward: true,
            ..Default::default()
        };
        car.integrate(&input, &tuning);
        assert_eq!(car.speed, tuning.acceleration);
    }

    #[test]
    fn test_forward_speed_moves_toward_negative_z() {
        let tuning = CarTuning::default();
        let mut car = Car::default();
        car.integrate(&forward(), &tuning);
        assert_eq!(car.pos.z, -tuning.acceleration);
    }

    #[test]
    fn test_coast_snaps_to_zero() {
        let tuning = CarTuning {
            deceleration: 0.004,
            ..Default::default()
        };
        let mut car = Car {
            speed: 0.01,
            ..Default::default()
        };
        let idle = TickInput::default();

        car.integrate(&idle, &tuning);
        assert!((car.speed - 0.006).abs() < 1e-6);
        car.integrate(&idle, &tuning);
        assert!((car.speed - 0.002).abs() < 1e-6);
        // Within one step: lands on exactly zero rather than -0.002
        car.integrate(&idle, &tuning);
        assert_eq!(car.speed, 0.0);
        assert!(car.is_stopped());
    }

    #[test]
    fn test_lateral_step_and_bound() {
        let tuning = CarTuning::default();
        let mut car = Car::default();
        let left = TickInput {
            left: true,
            ..Default::default()
        };
        car.integrate(&left, &tuning);
        assert!((car.pos.x + tuning.lateral_step).abs() < 1e-6);

        for _ in 0..1000 {
            car.integrate(&left, &tuning);
        }
        assert_eq!(car.pos.x, -tuning.lateral_bound);
    }

    #[test]
    fn test_left_and_right_cancel() {
        let tuning = CarTuning::default();
        let mut car = Car::default();
        let both = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        car.integrate(&both, &tuning);
        assert_eq!(car.pos.x, 0.0);
    }

    #[test]
    fn test_steering_does_not_need_speed() {
        let tuning = CarTuning::default();
        let mut car = Car::default();
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        car.integrate(&right, &tuning);
        assert!(car.is_stopped());
        assert!(car.pos.x > 0.0);
    }

    #[test]
    fn test_wheel_angle_stays_wrapped() {
        let tuning = CarTuning::default();
        let mut car = Car::default();
        for _ in 0..10_000 {
            car.integrate(&forward(), &tuning);
            assert!((0.0..TAU).contains(&car.wheel_angle));
        }
        // One more tick at top speed still rolls by speed / radius
        let before = car.wheel_angle;
        car.integrate(&forward(), &tuning);
        let step = (car.wheel_angle - before).rem_euclid(TAU);
        assert!((step - tuning.max_speed / tuning.wheel_radius).abs() < 1e-4);

        // Reversing rolls the other way without leaving the range
        let reverse = TickInput {
            backward: true,
            ..Default::default()
        };
        for _ in 0..100 {
            car.integrate(&reverse, &tuning);
            assert!((0.0..TAU).contains(&car.wheel_angle));
        }
    }

    #[test]
    fn test_speed_readout() {
        let car = Car {
            speed: 0.15,
            ..Default::default()
        };
        assert_eq!(car.speed_readout(), "15.00");
        assert_eq!(Car::default().speed_readout(), "0.00");
    }

    fn arb_input() -> impl Strategy<Value = TickInput> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(forward, backward, left, right)| TickInput {
                forward,
                backward,
                left,
                right,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_speed_and_lateral_stay_bounded(inputs in prop::collection::vec(arb_input(), 1..300)) {
            let tuning = CarTuning::default();
            let mut car = Car::default();
            for input in &inputs {
                car.integrate(input, &tuning);
                prop_assert!(car.speed >= tuning.min_speed && car.speed <= tuning.max_speed);
                prop_assert!(car.pos.x.abs() <= tuning.lateral_bound);
            }
        }

        #[test]
        fn prop_release_reaches_zero_without_sign_flip(
            speed0 in CarTuning::default().min_speed..=CarTuning::default().max_speed,
        ) {
            let tuning = CarTuning::default();
            let mut car = Car { speed: speed0, ..Default::default() };
            let sign = speed0.signum();
            let limit = (speed0.abs() / tuning.deceleration).ceil() as usize;
            for _ in 0..limit {
                car.integrate(&TickInput::default(), &tuning);
                prop_assert!(car.speed == 0.0 || car.speed.signum() == sign);
            }
            prop_assert_eq!(car.speed, 0.0);
        }
    }
}
