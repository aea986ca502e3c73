//! Road Drive - an endless-road driving scene
//!
//! Core modules:
//! - `sim`: Deterministic simulation (car, road scroll, scenery pool, chase camera)
//! - `renderer`: WebGPU rendering pipeline and draw list
//! - `platform`: Browser/native platform abstraction (input)
//! - `tuning`: Data-driven driving constants
//! - `settings`: Player preferences

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{QualityPreset, Settings};
pub use tuning::Tuning;

/// Scene configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Car defaults (per-tick units)
    pub const CAR_ACCELERATION: f32 = 0.015;
    pub const CAR_DECELERATION: f32 = 0.005;
    /// Reverse is slower than forward
    pub const CAR_MIN_SPEED: f32 = -0.1;
    pub const CAR_MAX_SPEED: f32 = 0.2;
    pub const CAR_LATERAL_STEP: f32 = 0.1;
    /// Half road width minus half car width
    pub const CAR_LATERAL_BOUND: f32 = 4.5;
    pub const WHEEL_RADIUS: f32 = 0.2;

    /// Road strip dimensions; the length doubles as the recycling window
    pub const ROAD_WIDTH: f32 = 10.0;
    pub const ROAD_LENGTH: f32 = 300.0;
    /// Scroll speed used when no effective speed is supplied
    pub const ROAD_FALLBACK_SPEED: f32 = 0.1;

    /// Roadside trees
    pub const TREE_COUNT: usize = 60;
    pub const TREE_ROAD_HALF_WIDTH: f32 = 6.0;
    pub const TREE_LATERAL_JITTER: f32 = 10.0;
    pub const TREE_RECYCLE_JITTER: f32 = 10.0;

    /// Chase camera
    pub const CAMERA_FOLLOW_FACTOR: f32 = 0.1;
    pub const CAMERA_OFFSET: [f32; 3] = [0.0, 3.0, 8.0];

    /// HUD speed readout multiplier
    pub const SPEED_DISPLAY_SCALE: f32 = 100.0;
}
