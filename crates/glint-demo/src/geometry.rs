//! Hard-coded cube geometry.
//!
//! One unit cube (side 1.0, centered at the origin): 6 faces x 2 triangles,
//! 36 vertices as a flat triangle list, outward axis-aligned normals. There
//! is no index buffer; faces do not share vertices because their normals
//! differ.

use glint_engine::render::MeshVertex;

const fn v(position: [f32; 3], normal: [f32; 3]) -> MeshVertex {
    MeshVertex::new(position, normal)
}

pub const CUBE_VERTICES: [MeshVertex; 36] = [
    // -Z face
    v([-0.5, -0.5, -0.5], [0.0, 0.0, -1.0]),
    v([0.5, -0.5, -0.5], [0.0, 0.0, -1.0]),
    v([0.5, 0.5, -0.5], [0.0, 0.0, -1.0]),
    v([0.5, 0.5, -0.5], [0.0, 0.0, -1.0]),
    v([-0.5, 0.5, -0.5], [0.0, 0.0, -1.0]),
    v([-0.5, -0.5, -0.5], [0.0, 0.0, -1.0]),
    // +Z face
    v([-0.5, -0.5, 0.5], [0.0, 0.0, 1.0]),
    v([0.5, -0.5, 0.5], [0.0, 0.0, 1.0]),
    v([0.5, 0.5, 0.5], [0.0, 0.0, 1.0]),
    v([0.5, 0.5, 0.5], [0.0, 0.0, 1.0]),
    v([-0.5, 0.5, 0.5], [0.0, 0.0, 1.0]),
    v([-0.5, -0.5, 0.5], [0.0, 0.0, 1.0]),
    // -X face
    v([-0.5, 0.5, 0.5], [-1.0, 0.0, 0.0]),
    v([-0.5, 0.5, -0.5], [-1.0, 0.0, 0.0]),
    v([-0.5, -0.5, -0.5], [-1.0, 0.0, 0.0]),
    v([-0.5, -0.5, -0.5], [-1.0, 0.0, 0.0]),
    v([-0.5, -0.5, 0.5], [-1.0, 0.0, 0.0]),
    v([-0.5, 0.5, 0.5], [-1.0, 0.0, 0.0]),
    // +X face
    v([0.5, 0.5, 0.5], [1.0, 0.0, 0.0]),
    v([0.5, 0.5, -0.5], [1.0, 0.0, 0.0]),
    v([0.5, -0.5, -0.5], [1.0, 0.0, 0.0]),
    v([0.5, -0.5, -0.5], [1.0, 0.0, 0.0]),
    v([0.5, -0.5, 0.5], [1.0, 0.0, 0.0]),
    v([0.5, 0.5, 0.5], [1.0, 0.0, 0.0]),
    // -Y face
    v([-0.5, -0.5, -0.5], [0.0, -1.0, 0.0]),
    v([0.5, -0.5, -0.5], [0.0, -1.0, 0.0]),
    v([0.5, -0.5, 0.5], [0.0, -1.0, 0.0]),
    v([0.5, -0.5, 0.5], [0.0, -1.0, 0.0]),
    v([-0.5, -0.5, 0.5], [0.0, -1.0, 0.0]),
    v([-0.5, -0.5, -0.5], [0.0, -1.0, 0.0]),
    // +Y face
    v([-0.5, 0.5, -0.5], [0.0, 1.0, 0.0]),
    v([0.5, 0.5, -0.5], [0.0, 1.0, 0.0]),
    v([0.5, 0.5, 0.5], [0.0, 1.0, 0.0]),
    v([0.5, 0.5, 0.5], [0.0, 1.0, 0.0]),
    v([-0.5, 0.5, 0.5], [0.0, 1.0, 0.0]),
    v([-0.5, 0.5, -0.5], [0.0, 1.0, 0.0]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_36_vertices() {
        assert_eq!(CUBE_VERTICES.len(), 36);
    }

    #[test]
    fn positions_lie_on_the_unit_cube() {
        for v in &CUBE_VERTICES {
            for c in v.position {
                assert!(c == 0.5 || c == -0.5, "coordinate off the cube: {c}");
            }
        }
    }

    #[test]
    fn normals_are_unit_and_axis_aligned() {
        for v in &CUBE_VERTICES {
            let n = v.normal;
            let len2 = n[0] * n[0] + n[1] * n[1] + n[2] * n[2];
            assert_eq!(len2, 1.0);
            let nonzero = n.iter().filter(|c| **c != 0.0).count();
            assert_eq!(nonzero, 1, "normal not axis-aligned: {n:?}");
        }
    }

    #[test]
    fn each_face_normal_covers_one_quad() {
        // A closed cube has 6 distinct face normals, each used by exactly
        // 6 vertices (2 triangles).
        let mut counts = std::collections::HashMap::new();
        for v in &CUBE_VERTICES {
            *counts
                .entry([v.normal[0] as i8, v.normal[1] as i8, v.normal[2] as i8])
                .or_insert(0u32) += 1;
        }
        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|&c| c == 6));
    }

    #[test]
    fn vertices_lie_on_their_face_plane() {
        for v in &CUBE_VERTICES {
            let dot = v.position[0] * v.normal[0]
                + v.position[1] * v.normal[1]
                + v.position[2] * v.normal[2];
            assert_eq!(dot, 0.5, "vertex off its face plane: {v:?}");
        }
    }
}
