//! Shape generation for 3D primitives
//!
//! All meshes are non-indexed triangle lists centered on the origin, with
//! flat per-face normals. Cylinders and cones stand along +Y like their
//! three.js counterparts.

use glam::Vec3;
use std::f32::consts::TAU;

use super::vertex::{RoadVertex, Vertex};

/// Two triangles for a quad given in winding order
fn quad(corners: [Vec3; 4], normal: Vec3, color: [f32; 4], out: &mut Vec<Vertex>) {
    let n = normal.to_array();
    for i in [0, 1, 2, 0, 2, 3] {
        out.push(Vertex::new(corners[i].to_array(), n, color));
    }
}

/// Generate vertices for an axis-aligned box
pub fn cuboid(size: Vec3, color: [f32; 4]) -> Vec<Vertex> {
    let h = size / 2.0;
    let mut vertices = Vec::with_capacity(36);

    // (normal, tangent u, tangent v) per face
    let faces = [
        (Vec3::X, Vec3::Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::Z, Vec3::NEG_X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::X, Vec3::Y),
    ];

    for (n, u, v) in faces {
        let center = n * h;
        let du = u * h;
        let dv = v * h;
        quad(
            [
                center - du - dv,
                center + du - dv,
                center + du + dv,
                center - du + dv,
            ],
            n,
            color,
            &mut vertices,
        );
    }

    vertices
}

/// Generate vertices for a capped cylinder along Y.
///
/// A `radius_top` of zero gives a cone (no top cap).
pub fn cylinder(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    segments: u32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let segments = segments.max(3);
    let half = height / 2.0;
    let mut vertices = Vec::with_capacity((segments * 12) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;
        let (s1, c1) = theta1.sin_cos();
        let (s2, c2) = theta2.sin_cos();

        let bottom1 = Vec3::new(radius_bottom * c1, -half, radius_bottom * s1);
        let bottom2 = Vec3::new(radius_bottom * c2, -half, radius_bottom * s2);
        let top1 = Vec3::new(radius_top * c1, half, radius_top * s1);
        let top2 = Vec3::new(radius_top * c2, half, radius_top * s2);

        // Side, normal tilted by the slope so cones shade correctly
        let mid = (theta1 + theta2) / 2.0;
        let slope = radius_bottom - radius_top;
        let side_normal = Vec3::new(mid.cos() * height, slope, mid.sin() * height).normalize();
        quad([bottom1, bottom2, top2, top1], side_normal, color, &mut vertices);

        // Caps
        if radius_top > 0.0 {
            let n = Vec3::Y.to_array();
            vertices.push(Vertex::new([0.0, half, 0.0], n, color));
            vertices.push(Vertex::new(top2.to_array(), n, color));
            vertices.push(Vertex::new(top1.to_array(), n, color));
        }
        if radius_bottom > 0.0 {
            let n = Vec3::NEG_Y.to_array();
            vertices.push(Vertex::new([0.0, -half, 0.0], n, color));
            vertices.push(Vertex::new(bottom1.to_array(), n, color));
            vertices.push(Vertex::new(bottom2.to_array(), n, color));
        }
    }

    vertices
}

/// Generate vertices for a cone along Y
pub fn cone(radius: f32, height: f32, segments: u32, color: [f32; 4]) -> Vec<Vertex> {
    cylinder(0.0, radius, height, segments, color)
}

/// Generate the flat road strip in the XZ plane.
///
/// `u` runs 0..1 from the left edge (-x) to the right edge (+x); `v` runs
/// 0..1 from the near end (+z) to the far end (-z).
pub fn road_strip(width: f32, length: f32) -> Vec<RoadVertex> {
    let hw = width / 2.0;
    let hl = length / 2.0;

    let near_left = RoadVertex::new([-hw, 0.0, hl], [0.0, 0.0]);
    let near_right = RoadVertex::new([hw, 0.0, hl], [1.0, 0.0]);
    let far_right = RoadVertex::new([hw, 0.0, -hl], [1.0, 1.0]);
    let far_left = RoadVertex::new([-hw, 0.0, -hl], [0.0, 1.0]);

    vec![near_left, near_right, far_right, near_left, far_right, far_left]
}
