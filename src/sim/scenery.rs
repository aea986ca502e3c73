//! Roadside scenery pool
//!
//! A fixed number of trees is spawned once and then reused forever: when a
//! tree scrolls out behind the camera it is moved back to the far end of the
//! window instead of being destroyed and reallocated.

use glam::Vec3;
use rand::Rng;

use crate::tuning::SceneryTuning;

/// A single roadside tree (rendered as trunk + foliage)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tree {
    pub pos: Vec3,
}

/// Fixed-size pool of recyclable trees
#[derive(Debug, Clone)]
pub struct TreePool {
    pub trees: Vec<Tree>,
    /// Length of the z-range kept populated around the reference point
    pub window: f32,
    pub tuning: SceneryTuning,
}

impl TreePool {
    pub fn new(window: f32, tuning: SceneryTuning) -> Self {
        Self {
            trees: Vec::with_capacity(tuning.tree_count),
            window,
            tuning,
        }
    }

    /// Place `count` trees anywhere in the window around `reference_z`
    pub fn spawn<R: Rng + ?Sized>(&mut self, count: usize, reference_z: f32, rng: &mut R) {
        let half = self.window / 2.0;
        for _ in 0..count {
            let z = rng.random_range(reference_z - half..=reference_z + half);
            let x = roll_side_offset(&self.tuning, rng);
            self.trees.push(Tree {
                pos: Vec3::new(x, 0.0, z),
            });
        }
    }

    /// Move every tree that has scrolled past the near edge of the window to
    /// the far edge. Returns the number of trees moved.
    pub fn recycle<R: Rng + ?Sized>(&mut self, reference_z: f32, rng: &mut R) -> usize {
        let half = self.window / 2.0;
        let near_edge = reference_z + half;
        let far_edge = reference_z - half;
        let tuning = self.tuning;
        let mut moved = 0;

        for tree in self.trees.iter_mut().filter(|t| t.pos.z > near_edge) {
            let z = far_edge + rng.random_range(0.0..=tuning.recycle_jitter);
            let x = roll_side_offset(&tuning, rng);
            tree.pos = Vec3::new(x, 0.0, z);
            moved += 1;
        }

        if moved > 0 {
            log::debug!("Recycled {} trees at z={:.1}", moved, reference_z);
        }
        moved
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

/// Random side of the road, clear of the drivable lane
fn roll_side_offset<R: Rng + ?Sized>(tuning: &SceneryTuning, rng: &mut R) -> f32 {
    let offset = tuning.road_half_width + rng.random_range(0.0..=tuning.lateral_jitter);
    if rng.random_bool(0.5) { offset } else { -offset }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn pool_300() -> TreePool {
        TreePool::new(300.0, SceneryTuning::default())
    }

    #[test]
    fn test_spawn_within_window() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut pool = pool_300();
        pool.spawn(60, 0.0, &mut rng);

        assert_eq!(pool.len(), 60);
        for tree in &pool.trees {
            assert!(tree.pos.z >= -150.0 && tree.pos.z <= 150.0);
            assert_eq!(tree.pos.y, 0.0);
        }
    }

    #[test]
    fn test_trees_stay_off_the_road() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut pool = pool_300();
        pool.spawn(200, 0.0, &mut rng);

        let tuning = pool.tuning;
        for tree in &pool.trees {
            let offset = tree.pos.x.abs();
            assert!(offset >= tuning.road_half_width);
            assert!(offset <= tuning.road_half_width + tuning.lateral_jitter);
        }
        // Both sides get used
        assert!(pool.trees.iter().any(|t| t.pos.x < 0.0));
        assert!(pool.trees.iter().any(|t| t.pos.x > 0.0));
    }

    #[test]
    fn test_recycle_far_reference_leaves_trees_untouched() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut pool = pool_300();
        pool.spawn(60, 0.0, &mut rng);
        let before = pool.trees.clone();

        // Window is now [850, 1150]; nothing lies past its near edge
        let moved = pool.recycle(1000.0, &mut rng);

        assert_eq!(moved, 0);
        assert_eq!(pool.trees, before);
    }

    #[test]
    fn test_recycle_far_reference_moves_trees_past_near_edge() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut pool = pool_300();
        pool.spawn(60, 0.0, &mut rng);
        // Trees past the near edge of the [850, 1150] window
        for (i, tree) in pool.trees.iter_mut().take(10).enumerate() {
            tree.pos.z = 1150.5 + i as f32 * 20.0;
        }
        let before = pool.trees.clone();

        let moved = pool.recycle(1000.0, &mut rng);

        assert_eq!(moved, 10);
        assert_eq!(pool.len(), 60);
        for (old, new) in before.iter().zip(&pool.trees) {
            if old.pos.z > 1150.0 {
                assert!(new.pos.z >= 850.0 && new.pos.z <= 860.0);
                assert!(new.pos.x.abs() >= pool.tuning.road_half_width);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_recycle_moves_trees_behind_the_camera() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut pool = pool_300();
        pool.spawn(60, 0.0, &mut rng);
        let before = pool.trees.clone();

        // Drive 100 units forward: window becomes [-250, 50]
        let moved = pool.recycle(-100.0, &mut rng);
        let expected = before.iter().filter(|t| t.pos.z > 50.0).count();
        assert_eq!(moved, expected);

        for (old, new) in before.iter().zip(&pool.trees) {
            if old.pos.z > 50.0 {
                assert!(new.pos.z >= -250.0 && new.pos.z <= -240.0);
                assert!(new.pos.x.abs() >= pool.tuning.road_half_width);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_zero_jitter_lands_on_far_edge() {
        let tuning = SceneryTuning {
            recycle_jitter: 0.0,
            lateral_jitter: 0.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(5);
        let mut pool = TreePool::new(100.0, tuning);
        pool.trees.push(Tree {
            pos: Vec3::new(6.0, 0.0, 60.0),
        });

        assert_eq!(pool.recycle(0.0, &mut rng), 1);
        assert_eq!(pool.trees[0].pos.z, -50.0);
        assert_eq!(pool.trees[0].pos.x.abs(), tuning.road_half_width);
    }

    proptest! {
        #[test]
        fn prop_forward_travel_keeps_pool_in_window(
            seed in any::<u64>(),
            steps in prop::collection::vec(0.0f32..5.0, 1..200),
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut pool = pool_300();
            pool.spawn(60, 0.0, &mut rng);

            let mut reference_z = 0.0;
            for step in steps {
                reference_z -= step;
                pool.recycle(reference_z, &mut rng);
                prop_assert_eq!(pool.len(), 60);
                for tree in &pool.trees {
                    prop_assert!(tree.pos.z >= reference_z - 150.0);
                    prop_assert!(tree.pos.z <= reference_z + 150.0);
                }
            }
        }
    }
}
