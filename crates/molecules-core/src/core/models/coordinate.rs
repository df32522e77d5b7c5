use nalgebra::Vector3;

/// A position in Cartesian space, in Angstroms.
///
/// Componentwise addition and subtraction and scalar multiplication come from
/// `nalgebra`. Non-finite components are carried through untouched.
pub type Coordinate = Vector3<f32>;

/// Builds a coordinate from its three components.
pub fn coordinate(x: f32, y: f32, z: f32) -> Coordinate {
    Coordinate::new(x, y, z)
}
