//! Scene layout: a 4x2 grid of cubes with per-cube shininess and lights.
//!
//! Nothing here persists across frames; every instance is derived from its
//! index by arithmetic, so the scene is a pure function of the constant
//! tables below.

use glam::{Mat4, Vec3};

/// Number of cubes in the scene.
pub const CUBE_COUNT: usize = 8;

/// Grid width; the grid is `GRID_COLS` x `CUBE_COUNT / GRID_COLS`.
pub const GRID_COLS: usize = 4;

/// Specular exponents, consumed 1:1 by cube index. Doubling per step gives a
/// visually even progression of highlight tightness.
pub const SHININESS: [f32; CUBE_COUNT] = [2.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0, 256.0];

const COL_SPACING: f32 = 2.2;
const ROW_SPACING: f32 = -2.8;
const GRID_X_OFFSET: f32 = -3.3;
const GRID_Y_OFFSET: f32 = 1.7;

const CUBE_YAW_DEG: f32 = 9.0;
const CUBE_SCALE: f32 = 1.5;

const LIGHT_X_OFFSET: f32 = -2.3;
const LIGHT_X_DRIFT: f32 = 0.35;
const LIGHT_Z: f32 = 2.0;

/// One cube of the demo scene, derived per frame from its index.
#[derive(Debug, Copy, Clone)]
pub struct CubeInstance {
    pub position: Vec3,
    pub light_pos: Vec3,
    pub shininess: f32,
}

impl CubeInstance {
    /// Model matrix: translate to the grid slot, yaw slightly so two faces
    /// catch the light, scale up.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_y(CUBE_YAW_DEG.to_radians())
            * Mat4::from_scale(Vec3::splat(CUBE_SCALE))
    }
}

/// Grid position of cube `i`: columns left to right, rows top to bottom.
fn cube_position(i: usize) -> Vec3 {
    let col = (i % GRID_COLS) as f32;
    let row = (i / GRID_COLS) as f32;
    Vec3::new(
        col * COL_SPACING + GRID_X_OFFSET,
        row * ROW_SPACING + GRID_Y_OFFSET,
        0.0,
    )
}

/// Light position for cube `i`: in front of the cube (fixed z), same row
/// height, with an x drift that cycles every four cubes so highlights land
/// at slightly different angles across a row.
fn light_position(i: usize) -> Vec3 {
    let col = (i % GRID_COLS) as f32;
    let row = (i / GRID_COLS) as f32;
    let drift = (3 - i % 4) as f32;
    Vec3::new(
        col * COL_SPACING + LIGHT_X_OFFSET - drift * LIGHT_X_DRIFT,
        row * ROW_SPACING + GRID_Y_OFFSET,
        LIGHT_Z,
    )
}

/// Derives all cube instances for one frame.
pub fn cube_instances() -> [CubeInstance; CUBE_COUNT] {
    std::array::from_fn(|i| CubeInstance {
        position: cube_position(i),
        light_pos: light_position(i),
        shininess: SHININESS[i],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shininess_table_doubles_from_two() {
        assert_eq!(SHININESS, [2.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0, 256.0]);
        for (i, inst) in cube_instances().iter().enumerate() {
            assert_eq!(inst.shininess, SHININESS[i]);
        }
    }

    #[test]
    fn cubes_form_a_4x2_grid() {
        let cubes = cube_instances();

        // Two rows of four, spaced by the fixed constants.
        for i in 0..CUBE_COUNT {
            let p = cubes[i].position;
            assert_eq!(p.x, (i % 4) as f32 * 2.2 - 3.3);
            assert_eq!(p.y, (i / 4) as f32 * -2.8 + 1.7);
            assert_eq!(p.z, 0.0);
        }

        // Rows share y; columns share x.
        for col in 0..4 {
            assert_eq!(cubes[col].position.x, cubes[col + 4].position.x);
        }
        assert!(cubes[0].position.y > cubes[4].position.y);
    }

    #[test]
    fn light_drift_cycles_every_four_cubes() {
        let cubes = cube_instances();
        for i in 0..CUBE_COUNT {
            let drift = (3 - i % 4) as f32;
            let expected_x = (i % 4) as f32 * 2.2 - 2.3 - drift * 0.35;
            assert!((cubes[i].light_pos.x - expected_x).abs() < 1e-6);
            assert_eq!(cubes[i].light_pos.y, cubes[i].position.y);
            assert_eq!(cubes[i].light_pos.z, 2.0);
        }
        // Same column, same drift on both rows.
        assert_eq!(cubes[0].light_pos.x, cubes[4].light_pos.x);
    }

    #[test]
    fn derivation_is_pure() {
        let a = cube_instances();
        let b = cube_instances();
        for i in 0..CUBE_COUNT {
            assert_eq!(a[i].position, b[i].position);
            assert_eq!(a[i].light_pos, b[i].light_pos);
            assert_eq!(a[i].shininess, b[i].shininess);
        }
    }

    #[test]
    fn model_matrix_places_the_cube_at_its_slot() {
        let inst = cube_instances()[5];
        let m = inst.model_matrix();
        let origin = m.transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(inst.position, 1e-6));

        // Uniform scale of 1.5: a unit x vector maps to length 1.5.
        let x = m.transform_vector3(Vec3::X);
        assert!((x.length() - 1.5).abs() < 1e-5);
    }
}
