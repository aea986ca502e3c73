//! Deterministic simulation module
//!
//! All driving logic lives here. This module must be pure and deterministic:
//! - Fixed tick only (car and camera move per tick, not per second)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod camera;
pub mod car;
pub mod road;
pub mod scenery;
pub mod state;
pub mod tick;

pub use camera::ChaseCamera;
pub use car::Car;
pub use road::{MARKING_PERIOD, MARKING_TILE_LENGTH, Road, SurfaceTexel, sample_surface};
pub use scenery::{Tree, TreePool};
pub use state::SceneState;
pub use tick::{TickInput, tick};
