//! Scrolling road strip
//!
//! The road mesh never ends because it never moves relative to the car: its
//! z is pinned to the car every tick, and forward motion is faked by
//! scrolling the lane markings with a phase accumulator. The roadside
//! scenery pool is recycled against the same reference z.

use rand::Rng;

use super::scenery::TreePool;
use crate::consts::SIM_DT;
use crate::tuning::Tuning;

/// World length of one repeat tile of the lane-marking pattern
pub const MARKING_TILE_LENGTH: f32 = 100.0;

/// The whole marking pattern repeats with this period (tile units)
pub const MARKING_PERIOD: f32 = 0.2;

/// Edge lines occupy the outer 2% of the road on each side
const EDGE_LINE_START: f32 = 0.48;
const EDGE_DASH_PERIOD: f32 = MARKING_PERIOD;
const CENTER_LINE_HALF_WIDTH: f32 = 0.05;
const CENTER_DASH_PERIOD: f32 = 0.1;
/// Half length of a dash, in tile units
const DASH_HALF_LENGTH: f32 = 0.02;

/// What the road surface shows at a given point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceTexel {
    Asphalt,
    EdgeLine,
    CenterDash,
}

impl SurfaceTexel {
    /// Linear RGB color (kept in sync with road_shader.wgsl)
    pub fn color(self) -> [f32; 3] {
        match self {
            SurfaceTexel::Asphalt => [0.1, 0.1, 0.1],
            SurfaceTexel::EdgeLine => [1.0, 1.0, 0.8],
            SurfaceTexel::CenterDash => [1.0, 1.0, 1.0],
        }
    }
}

/// Sample the periodic lane-marking pattern.
///
/// `u` runs across the road (0 = left edge, 1 = right edge); `t` runs along
/// it in tile units and already includes the scroll offset. The pattern
/// repeats every [`MARKING_PERIOD`] in `t`.
pub fn sample_surface(u: f32, t: f32) -> SurfaceTexel {
    let across = (u - 0.5).abs();

    let center_phase = (t.rem_euclid(CENTER_DASH_PERIOD) - CENTER_DASH_PERIOD / 2.0).abs();
    if across <= CENTER_LINE_HALF_WIDTH && center_phase <= DASH_HALF_LENGTH {
        return SurfaceTexel::CenterDash;
    }

    let edge_phase = (t.rem_euclid(EDGE_DASH_PERIOD) - EDGE_DASH_PERIOD / 2.0).abs();
    if across >= EDGE_LINE_START && edge_phase <= DASH_HALF_LENGTH {
        return SurfaceTexel::EdgeLine;
    }

    SurfaceTexel::Asphalt
}

/// The scrolling road and the scenery that lines it
#[derive(Debug, Clone)]
pub struct Road {
    /// Current z of the strip's center (mirrors the reference z)
    pub z: f32,
    /// Scroll accumulator (signed: reversing scrolls back). Kept in f64 so
    /// long drives do not lose marking resolution.
    pub phase: f64,
    pub width: f32,
    /// Strip length, also the recycling window
    pub length: f32,
    /// Scroll speed used when the caller has no effective speed
    pub fallback_speed: f32,
    pub scenery: TreePool,
}

impl Road {
    /// Create the road centered on `reference_z` and populate its scenery
    pub fn new<R: Rng + ?Sized>(tuning: &Tuning, reference_z: f32, rng: &mut R) -> Self {
        let mut scenery = TreePool::new(tuning.road.length, tuning.scenery);
        scenery.spawn(tuning.scenery.tree_count, reference_z, rng);

        Self {
            z: reference_z,
            phase: 0.0,
            width: tuning.road.width,
            length: tuning.road.length,
            fallback_speed: tuning.road.fallback_speed,
            scenery,
        }
    }

    /// Scroll by `effective_speed * dt`, snap to `reference_z`, and recycle
    /// scenery. Returns the number of trees recycled.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        effective_speed: Option<f32>,
        reference_z: f32,
        rng: &mut R,
    ) -> usize {
        let speed = effective_speed.unwrap_or(self.fallback_speed);
        self.phase += f64::from(speed) * f64::from(dt);
        self.z = reference_z;
        self.scenery.recycle(reference_z, rng)
    }

    /// Scroll offset in marking tiles, wrapped to `[0, MARKING_PERIOD)`.
    ///
    /// Speed is per tick and `dt` is seconds, so `phase / SIM_DT` is the
    /// distance the markings have travelled in world units.
    pub fn marking_offset(&self) -> f32 {
        let tiles = self.phase / (f64::from(SIM_DT) * f64::from(MARKING_TILE_LENGTH));
        let wrapped = tiles.rem_euclid(f64::from(MARKING_PERIOD)) as f32;
        // Narrowing can round up onto the period itself
        if wrapped >= MARKING_PERIOD { 0.0 } else { wrapped }
    }

    /// Sample the surface at mesh coordinates (`v` = 0 at the near end)
    pub fn sample(&self, u: f32, v: f32) -> SurfaceTexel {
        let t = v * self.length / MARKING_TILE_LENGTH + self.marking_offset();
        sample_surface(u, t)
    }
}
