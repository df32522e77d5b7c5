use nalgebra::{Matrix4, Rotation3, Unit, Vector3};

pub type Matrix = Matrix4<f32>;

/// Initial orientation of a freshly loaded molecule.
#[rustfmt::skip]
pub fn default_model_view() -> Matrix {
    Matrix::new(
        0.402560, 0.094840, 0.910469, 0.0,
        0.913984, -0.096835, -0.394028, 0.0,
        0.050796, 0.990772, -0.125664, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

#[rustfmt::skip]
pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Matrix {
    let tx = -(right + left) / (right - left);
    let ty = -(top + bottom) / (top - bottom);
    let tz = -(far + near) / (far - near);
    Matrix::new(
        2.0 / (right - left), 0.0, 0.0, tx,
        0.0, 2.0 / (top - bottom), 0.0, ty,
        0.0, 0.0, 2.0 / (far - near), tz,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Pre-multiplies `matrix` by a rotation of `angle` radians about the reversed `axis`.
///
/// A zero-length axis leaves the matrix unchanged.
pub fn rotated(matrix: &Matrix, angle: f32, axis: &Vector3<f32>) -> Matrix {
    if axis.norm() <= 0.0 {
        return *matrix;
    }
    let rotation = Rotation3::from_axis_angle(&Unit::new_normalize(-axis), angle);
    rotation.to_homogeneous() * matrix
}

/// Scales the first three rows by `x`, `y` and `z`.
pub fn scaled(matrix: &Matrix, x: f32, y: f32, z: f32) -> Matrix {
    let mut result = *matrix;
    for (row, factor) in [x, y, z].into_iter().enumerate() {
        result.row_mut(row).scale_mut(factor);
    }
    result
}

pub fn scale_of(matrix: &Matrix) -> f32 {
    matrix.fixed_view::<1, 3>(0, 0).norm()
}

/// Inverse of a rotation plus translation: the transposed rotation and the counter-rotated
/// translation. Not valid for matrices with shear or non-uniform scale.
pub fn inverted_rigid(matrix: &Matrix) -> Matrix {
    let rotation = matrix.fixed_view::<3, 3>(0, 0).transpose();
    let translation = -(rotation * matrix.fixed_view::<3, 1>(0, 3));
    let mut result = *matrix;
    result.fixed_view_mut::<3, 3>(0, 0).copy_from(&rotation);
    result.fixed_view_mut::<3, 1>(0, 3).copy_from(&translation);
    result
}

pub fn to_row_major(matrix: &Matrix) -> [f32; 16] {
    let mut values = [0.0; 16];
    values.copy_from_slice(matrix.transpose().as_slice());
    values
}
