//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (held driving keys)

pub mod input;

pub use input::{DriveKey, KeyboardState};
