//! Draw list and scene models
//!
//! The simulation never touches the renderer. The host owns a [`DrawList`],
//! registers one model per simulated object through a [`SceneBinding`], and
//! copies positions across once per frame.

use glam::{Mat4, Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

use crate::sim::SceneState;

/// Mesh shapes the renderer knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    CarBody,
    Wheel,
    Trunk,
    Foliage,
}

impl MeshKind {
    pub const ALL: [MeshKind; 4] = [
        MeshKind::CarBody,
        MeshKind::Wheel,
        MeshKind::Trunk,
        MeshKind::Foliage,
    ];

    pub fn index(self) -> usize {
        match self {
            MeshKind::CarBody => 0,
            MeshKind::Wheel => 1,
            MeshKind::Trunk => 2,
            MeshKind::Foliage => 3,
        }
    }
}

/// Handle to a drawable in a [`DrawList`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawableId(u32);

/// A mesh placed in the world
#[derive(Debug, Clone, Copy)]
pub struct Drawable {
    pub mesh: MeshKind,
    pub transform: Mat4,
}

/// Set of drawables rendered each frame
#[derive(Debug, Default)]
pub struct DrawList {
    /// Slot per id; removed slots are reused
    slots: Vec<Option<Drawable>>,
    free: Vec<u32>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, mesh: MeshKind, transform: Mat4) -> DrawableId {
        let drawable = Some(Drawable { mesh, transform });
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot as usize] = drawable;
                DrawableId(slot)
            }
            None => {
                self.slots.push(drawable);
                DrawableId(self.slots.len() as u32 - 1)
            }
        }
    }

    /// Returns false if the id was not live
    pub fn remove(&mut self, id: DrawableId) -> bool {
        let Some(slot) = self.slots.get_mut(id.0 as usize) else {
            return false;
        };
        if slot.take().is_some() {
            self.free.push(id.0);
            true
        } else {
            false
        }
    }

    /// Returns false if the id was not live
    pub fn set_transform(&mut self, id: DrawableId, transform: Mat4) -> bool {
        match self.slots.get_mut(id.0 as usize) {
            Some(Some(drawable)) => {
                drawable.transform = transform;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, id: DrawableId) -> Option<&Drawable> {
        self.slots.get(id.0 as usize).and_then(|s| s.as_ref())
    }

    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Transforms grouped by mesh, in [`MeshKind::ALL`] order
    pub fn instances(&self) -> [Vec<Mat4>; 4] {
        let mut grouped: [Vec<Mat4>; 4] = Default::default();
        for drawable in self.slots.iter().flatten() {
            grouped[drawable.mesh.index()].push(drawable.transform);
        }
        grouped
    }
}

/// One mesh of a model, placed relative to the model origin
#[derive(Debug, Clone, Copy)]
pub struct Part {
    pub mesh: MeshKind,
    pub local: Mat4,
}

/// Wheel hub positions relative to the car origin
pub const WHEEL_POSITIONS: [[f32; 3]; 4] = [
    [-0.5, 0.2, 0.7],
    [0.5, 0.2, 0.7],
    [-0.5, 0.2, -0.7],
    [0.5, 0.2, -0.7],
];

/// Car parts: body first, then the four wheels (rolled by `wheel_angle`)
pub fn car_parts(wheel_angle: f32) -> Vec<Part> {
    let mut parts = vec![Part {
        mesh: MeshKind::CarBody,
        local: Mat4::from_translation(Vec3::new(0.0, 0.5, 0.0)),
    }];
    // Cylinder axis is Y; lay it along X, then roll about X
    let roll = Quat::from_rotation_x(-wheel_angle) * Quat::from_rotation_z(FRAC_PI_2);
    for pos in WHEEL_POSITIONS {
        parts.push(Part {
            mesh: MeshKind::Wheel,
            local: Mat4::from_rotation_translation(roll, Vec3::from_array(pos)),
        });
    }
    parts
}

/// Tree parts: trunk and foliage
pub fn tree_parts() -> Vec<Part> {
    vec![
        Part {
            mesh: MeshKind::Trunk,
            local: Mat4::from_translation(Vec3::new(0.0, 0.5, 0.0)),
        },
        Part {
            mesh: MeshKind::Foliage,
            local: Mat4::from_translation(Vec3::new(0.0, 1.5, 0.0)),
        },
    ]
}

/// Drawables registered for one model
#[derive(Debug, Clone)]
pub struct ModelHandle {
    pub parts: Vec<DrawableId>,
}

impl ModelHandle {
    pub fn register(list: &mut DrawList, parts: &[Part], world: Mat4) -> Self {
        Self {
            parts: parts
                .iter()
                .map(|p| list.add(p.mesh, world * p.local))
                .collect(),
        }
    }

    pub fn place(&self, list: &mut DrawList, parts: &[Part], world: Mat4) {
        for (id, part) in self.parts.iter().zip(parts) {
            list.set_transform(*id, world * part.local);
        }
    }

    pub fn unregister(&self, list: &mut DrawList) {
        for id in &self.parts {
            list.remove(*id);
        }
    }
}

/// Links simulated objects to their drawables
#[derive(Debug, Clone)]
pub struct SceneBinding {
    pub car: ModelHandle,
    pub trees: Vec<ModelHandle>,
}

impl SceneBinding {
    /// Register a model for the car and every tree
    pub fn register(list: &mut DrawList, state: &SceneState) -> Self {
        let car = ModelHandle::register(
            list,
            &car_parts(state.car.wheel_angle),
            Mat4::from_translation(state.car.pos),
        );
        let tree_parts = tree_parts();
        let trees = state
            .road
            .scenery
            .trees
            .iter()
            .map(|t| ModelHandle::register(list, &tree_parts, Mat4::from_translation(t.pos)))
            .collect();

        log::info!("Registered {} drawables", list.len());
        Self { car, trees }
    }

    /// Copy this tick's positions into the draw list
    pub fn sync(&self, list: &mut DrawList, state: &SceneState) {
        self.car.place(
            list,
            &car_parts(state.car.wheel_angle),
            Mat4::from_translation(state.car.pos),
        );
        let tree_parts = tree_parts();
        for (handle, tree) in self.trees.iter().zip(&state.road.scenery.trees) {
            handle.place(list, &tree_parts, Mat4::from_translation(tree.pos));
        }
    }

    /// Remove every registered drawable
    pub fn unregister(&self, list: &mut DrawList) {
        self.car.unregister(list);
        for tree in &self.trees {
            tree.unregister(list);
        }
    }
}
