//! Flat float blocks laid out the way the impostor shaders read them.
//!
//! Matrices are written row-major. Every block is padded to whole `vec4`s.

use crate::core::models::coordinate::Coordinate;
use crate::core::models::element::Color;
use crate::core::utils::matrix::{self, Matrix};

pub const SPHERE_VERTEX_UNIFORM_LEN: usize = 40;
pub const SPHERE_FRAGMENT_UNIFORM_LEN: usize = 24;
pub const CYLINDER_VERTEX_UNIFORM_LEN: usize = 40;
pub const CYLINDER_FRAGMENT_UNIFORM_LEN: usize = 20;

/// Orthographic projection for a viewport, keeping x in `-1..=1` and correcting y for the
/// aspect ratio.
pub fn viewport_projection(width: u32, height: u32) -> Matrix {
    let aspect = if width == 0 {
        1.0
    } else {
        height as f32 / width as f32
    };
    matrix::orthographic(-1.0, 1.0, -aspect, aspect, -1.0, 1.0)
}

fn transform_block(
    model_view: &Matrix,
    projection: &Matrix,
    radius: f32,
    translation: &Coordinate,
) -> [f32; 40] {
    let mut block = [0.0; 40];
    block[..16].copy_from_slice(&matrix::to_row_major(model_view));
    block[16..32].copy_from_slice(&matrix::to_row_major(projection));
    block[32] = radius;
    block[36..39].copy_from_slice(translation.as_slice());
    block
}

pub fn sphere_vertex_uniforms(
    model_view: &Matrix,
    projection: &Matrix,
    radius: f32,
    translation: &Coordinate,
) -> [f32; SPHERE_VERTEX_UNIFORM_LEN] {
    transform_block(model_view, projection, radius, translation)
}

/// Color, the inverse model-view used to orient the ambient occlusion lookup, and the
/// atlas patch width.
pub fn sphere_fragment_uniforms(
    color: Color,
    model_view: &Matrix,
    patch_width: f32,
) -> [f32; SPHERE_FRAGMENT_UNIFORM_LEN] {
    let mut block = [0.0; SPHERE_FRAGMENT_UNIFORM_LEN];
    block[..3].copy_from_slice(&color.to_array());
    block[4..20].copy_from_slice(&matrix::to_row_major(&matrix::inverted_rigid(model_view)));
    block[20] = patch_width;
    block
}

pub fn cylinder_vertex_uniforms(
    model_view: &Matrix,
    projection: &Matrix,
    radius: f32,
    translation: &Coordinate,
) -> [f32; CYLINDER_VERTEX_UNIFORM_LEN] {
    transform_block(model_view, projection, radius, translation)
}

pub fn cylinder_fragment_uniforms(
    color: Color,
    model_view: &Matrix,
) -> [f32; CYLINDER_FRAGMENT_UNIFORM_LEN] {
    let mut block = [0.0; CYLINDER_FRAGMENT_UNIFORM_LEN];
    block[..3].copy_from_slice(&color.to_array());
    block[4..20].copy_from_slice(&matrix::to_row_major(&matrix::inverted_rigid(model_view)));
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::coordinate::coordinate;
    use nalgebra::Vector3;

    #[test]
    fn viewport_projection_corrects_for_aspect_ratio() {
        let projection = viewport_projection(800, 400);
        assert_eq!(projection[(0, 0)], 1.0);
        assert_eq!(projection[(1, 1)], 2.0);
        assert_eq!(projection[(2, 2)], 1.0);
        assert_eq!(projection[(1, 3)], 0.0);
    }

    #[test]
    fn viewport_projection_tolerates_zero_width() {
        assert_eq!(viewport_projection(0, 600), Matrix::identity());
    }

    #[test]
    fn sphere_vertex_block_packs_matrices_radius_and_translation() {
        let model_view = matrix::default_model_view();
        let projection = viewport_projection(100, 100);
        let block = sphere_vertex_uniforms(&model_view, &projection, 0.25, &coordinate(1.0, 2.0, 3.0));

        assert_eq!(&block[..16], &matrix::to_row_major(&model_view));
        assert_eq!(&block[16..32], &matrix::to_row_major(&projection));
        assert_eq!(&block[32..36], &[0.25, 0.0, 0.0, 0.0]);
        assert_eq!(&block[36..40], &[1.0, 2.0, 3.0, 0.0]);
    }

    #[test]
    fn sphere_fragment_block_carries_inverse_model_view() {
        let model_view = matrix::rotated(&Matrix::identity(), 0.5, &Vector3::new(0.0, 1.0, 0.0));
        let block = sphere_fragment_uniforms(Color::new(1.0, 0.5, 0.25), &model_view, 0.125);

        assert_eq!(&block[..4], &[1.0, 0.5, 0.25, 0.0]);
        let inverse = Matrix::from_row_slice(&block[4..20]);
        assert!(((inverse * model_view) - Matrix::identity()).abs().max() < 1e-6);
        assert_eq!(&block[20..], &[0.125, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn cylinder_blocks_have_expected_lengths() {
        let model_view = Matrix::identity();
        let vertex = cylinder_vertex_uniforms(&model_view, &model_view, 0.15, &Coordinate::zeros());
        let fragment = cylinder_fragment_uniforms(Color::new(0.75, 0.75, 0.75), &model_view);
        assert_eq!(vertex.len(), 40);
        assert_eq!(vertex[32], 0.15);
        assert_eq!(fragment.len(), 20);
        assert_eq!(&fragment[..4], &[0.75, 0.75, 0.75, 0.0]);
        assert_eq!(&fragment[4..], &matrix::to_row_major(&Matrix::identity()));
    }
}
