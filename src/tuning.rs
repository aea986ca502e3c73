//! Data-driven driving constants
//!
//! Every number the simulation uses lives here so a browser build can be
//! retuned from LocalStorage without a rebuild. Missing JSON fields fall back
//! to the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Car integrator constants (per-tick units)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarTuning {
    pub acceleration: f32,
    pub deceleration: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub lateral_step: f32,
    pub lateral_bound: f32,
    pub wheel_radius: f32,
}

impl Default for CarTuning {
    fn default() -> Self {
        Self {
            acceleration: CAR_ACCELERATION,
            deceleration: CAR_DECELERATION,
            min_speed: CAR_MIN_SPEED,
            max_speed: CAR_MAX_SPEED,
            lateral_step: CAR_LATERAL_STEP,
            lateral_bound: CAR_LATERAL_BOUND,
            wheel_radius: WHEEL_RADIUS,
        }
    }
}

/// Road strip constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadTuning {
    pub width: f32,
    /// Strip length, also the scenery recycling window
    pub length: f32,
    pub fallback_speed: f32,
}

impl Default for RoadTuning {
    fn default() -> Self {
        Self {
            width: ROAD_WIDTH,
            length: ROAD_LENGTH,
            fallback_speed: ROAD_FALLBACK_SPEED,
        }
    }
}

/// Roadside scenery pool constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneryTuning {
    pub tree_count: usize,
    pub road_half_width: f32,
    pub lateral_jitter: f32,
    pub recycle_jitter: f32,
}

impl Default for SceneryTuning {
    fn default() -> Self {
        Self {
            tree_count: TREE_COUNT,
            road_half_width: TREE_ROAD_HALF_WIDTH,
            lateral_jitter: TREE_LATERAL_JITTER,
            recycle_jitter: TREE_RECYCLE_JITTER,
        }
    }
}

/// Chase camera constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraTuning {
    pub follow_factor: f32,
    /// Offset from the car to the camera's resting position
    pub offset: [f32; 3],
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            follow_factor: CAMERA_FOLLOW_FACTOR,
            offset: CAMERA_OFFSET,
        }
    }
}

/// Complete tuning set
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub car: CarTuning,
    pub road: RoadTuning,
    pub scenery: SceneryTuning,
    pub camera: CameraTuning,
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and sanitize it
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Repair values that would break the simulation invariants
    pub fn sanitized(mut self) -> Self {
        self.replace_non_finite();

        let car = &mut self.car;
        car.acceleration = car.acceleration.abs();
        car.deceleration = if car.deceleration > 0.0 {
            car.deceleration
        } else {
            CAR_DECELERATION
        };
        // Speed range must contain zero so the car can come to rest
        car.min_speed = car.min_speed.min(0.0);
        car.max_speed = car.max_speed.max(0.0);
        car.lateral_step = car.lateral_step.abs();
        car.lateral_bound = car.lateral_bound.abs();
        if car.wheel_radius <= 0.0 {
            car.wheel_radius = WHEEL_RADIUS;
        }

        let road = &mut self.road;
        if road.width <= 0.0 {
            road.width = ROAD_WIDTH;
        }
        if road.length <= 0.0 {
            road.length = ROAD_LENGTH;
        }

        let scenery = &mut self.scenery;
        scenery.road_half_width = scenery.road_half_width.abs();
        scenery.lateral_jitter = scenery.lateral_jitter.abs();
        // Recycled trees must land inside the window, not past its near edge
        scenery.recycle_jitter = scenery.recycle_jitter.abs().min(self.road.length);

        let camera = &mut self.camera;
        if !(camera.follow_factor > 0.0 && camera.follow_factor <= 1.0) {
            camera.follow_factor = CAMERA_FOLLOW_FACTOR;
        }

        self
    }

    /// Reset every NaN or infinite field to its default.
    ///
    /// JSON numbers beyond f32 range (e.g. `1e39`) parse as infinity.
    fn replace_non_finite(&mut self) {
        fn finite_or(value: &mut f32, default: f32) {
            if !value.is_finite() {
                log::warn!("Replacing non-finite tuning value {} with {}", value, default);
                *value = default;
            }
        }

        let (car, defaults) = (&mut self.car, CarTuning::default());
        finite_or(&mut car.acceleration, defaults.acceleration);
        finite_or(&mut car.deceleration, defaults.deceleration);
        finite_or(&mut car.min_speed, defaults.min_speed);
        finite_or(&mut car.max_speed, defaults.max_speed);
        finite_or(&mut car.lateral_step, defaults.lateral_step);
        finite_or(&mut car.lateral_bound, defaults.lateral_bound);
        finite_or(&mut car.wheel_radius, defaults.wheel_radius);

        let (road, defaults) = (&mut self.road, RoadTuning::default());
        finite_or(&mut road.width, defaults.width);
        finite_or(&mut road.length, defaults.length);
        finite_or(&mut road.fallback_speed, defaults.fallback_speed);

        let (scenery, defaults) = (&mut self.scenery, SceneryTuning::default());
        finite_or(&mut scenery.road_half_width, defaults.road_half_width);
        finite_or(&mut scenery.lateral_jitter, defaults.lateral_jitter);
        finite_or(&mut scenery.recycle_jitter, defaults.recycle_jitter);

        let (camera, defaults) = (&mut self.camera, CameraTuning::default());
        finite_or(&mut camera.follow_factor, defaults.follow_factor);
        for (value, default) in camera.offset.iter_mut().zip(defaults.offset) {
            finite_or(value, default);
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "road_drive_tuning";

    /// Load a tuning override from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning override from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring invalid tuning override: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
