//! Scene state and RNG
//!
//! Everything the tick mutates lives in one struct owned by the host loop.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::camera::ChaseCamera;
use super::car::Car;
use super::road::Road;
use crate::tuning::Tuning;

/// Complete scene state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct SceneState {
    /// Run seed for reproducible scenery
    pub seed: u64,
    /// Scenery placement RNG
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub car: Car,
    pub road: Road,
    pub camera: ChaseCamera,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl SceneState {
    /// Create a new scene with the given seed and tuning
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let car = Car::default();
        let road = Road::new(&tuning, car.pos.z, &mut rng);
        let camera = ChaseCamera::new(car.pos, &tuning.camera);

        Self {
            seed,
            rng,
            tuning,
            car,
            road,
            camera,
            time_ticks: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_scene_at_rest() {
        let state = SceneState::new(123, Tuning::default());
        assert!(state.car.is_stopped());
        assert_eq!(state.road.z, state.car.pos.z);
        assert_eq!(state.road.scenery.len(), state.tuning.scenery.tree_count);
        assert_eq!(state.camera.look_at, state.car.pos);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_same_seed_same_scenery() {
        let a = SceneState::new(77, Tuning::default());
        let b = SceneState::new(77, Tuning::default());
        let c = SceneState::new(78, Tuning::default());
        assert_eq!(a.road.scenery.trees, b.road.scenery.trees);
        assert_ne!(a.road.scenery.trees, c.road.scenery.trees);
    }
}
