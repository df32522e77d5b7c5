use super::atlas::AmbientOcclusionAtlas;
use crate::core::models::coordinate::Coordinate;
use std::sync::LazyLock;
use tracing::trace;

/// Bond emission stops once the cylinder cursor reaches this index.
pub const BOND_INDEX_LIMIT: u32 = 65530;
/// Number of vertices addressable by 16-bit indices.
const INDEX_SPACE: u32 = u16::MAX as u32 + 1;

const OCTAGON_VERTICES: u32 = 8;
const QUAD_VERTICES: u32 = 4;

#[rustfmt::skip]
const OCTAGON_INDICES: [u32; 18] = [
    0, 1, 2,
    2, 1, 3,
    2, 3, 4,
    0, 2, 5,
    1, 0, 6,
    3, 1, 7,
];

#[rustfmt::skip]
const QUAD_CORNERS: [f32; 8] = [
    -1.0, -1.0,
    1.0, -1.0,
    -1.0, 1.0,
    1.0, 1.0,
];

const QUAD_INDICES: [u32; 6] = [0, 1, 2, 1, 3, 2];

/// Regular octagon circumscribing the unit circle, in impostor space.
#[rustfmt::skip]
static OCTAGON_POINTS: LazyLock<[f32; 16]> = LazyLock::new(|| {
    let p = 1.0 - 2.0 / (2.0_f32.sqrt() + 2.0);
    let n = -p;
    [
        n, 1.0,
        -1.0, n,
        1.0, p,
        p, -1.0,
        1.0, n,
        p, 1.0,
        -1.0, p,
        n, -1.0,
    ]
});

/// Sphere impostors for one element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SphereBuffers {
    /// Atom centers, x mirrored, repeated for each of the 8 octagon vertices.
    pub vertices: Vec<f32>,
    pub impostor_coordinates: Vec<f32>,
    pub ambient_occlusion_offsets: Vec<f32>,
    pub indices: Vec<u16>,
    next_index: u32,
}

impl SphereBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the next octagon's first vertex will receive.
    pub fn current_index(&self) -> u32 {
        self.next_index
    }

    pub fn sphere_count(&self) -> usize {
        (self.next_index / OCTAGON_VERTICES) as usize
    }

    pub fn vertex_count(&self) -> usize {
        self.next_index as usize
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Cylinder impostors for all bonds of a molecule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CylinderBuffers {
    /// Bond endpoints, x mirrored: start twice, then end twice.
    pub vertices: Vec<f32>,
    pub directions: Vec<f32>,
    pub impostor_coordinates: Vec<f32>,
    pub indices: Vec<u16>,
    next_index: u32,
}

impl CylinderBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_index(&self) -> u32 {
        self.next_index
    }

    pub fn bond_count(&self) -> usize {
        (self.next_index / QUAD_VERTICES) as usize
    }

    pub fn vertex_count(&self) -> usize {
        self.next_index as usize
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

fn push_mirrored(target: &mut Vec<f32>, position: &Coordinate) {
    target.extend_from_slice(&[-position.x, position.y, position.z]);
}

fn push_indices(target: &mut Vec<u16>, base: u32, pattern: &[u32]) {
    // Callers check the base against the index space first.
    target.extend(pattern.iter().map(|offset| (base + offset) as u16));
}

/// Appends one octagon impostor for an atom already centered and scaled for display.
///
/// Emits 8 vertices, 8 impostor points, 18 indices and 8 atlas offsets, then advances the
/// cursor by 8 and the atlas by one patch.
///
/// # Return
///
/// `false`, with nothing appended, when the octagon would not fit in 16-bit indices.
pub fn append_octagon_vertices(
    position: &Coordinate,
    buffers: &mut SphereBuffers,
    atlas: &mut AmbientOcclusionAtlas,
) -> bool {
    let base = buffers.next_index;
    if base + OCTAGON_VERTICES > INDEX_SPACE {
        trace!(index = base, "Sphere index space exhausted");
        return false;
    }

    for _ in 0..OCTAGON_VERTICES {
        push_mirrored(&mut buffers.vertices, position);
    }
    buffers.impostor_coordinates.extend_from_slice(&*OCTAGON_POINTS);
    push_indices(&mut buffers.indices, base, &OCTAGON_INDICES);
    buffers.next_index = base + OCTAGON_VERTICES;

    let offset = atlas.next_offset();
    for _ in 0..OCTAGON_VERTICES {
        buffers.ambient_occlusion_offsets.extend_from_slice(&offset);
    }
    true
}

/// Appends one quad impostor for a bond whose endpoints are already centered and scaled.
///
/// # Return
///
/// `false`, with nothing appended, once the cursor has reached [`BOND_INDEX_LIMIT`].
pub fn append_rectangular_bond_vertices(
    start: &Coordinate,
    end: &Coordinate,
    buffers: &mut CylinderBuffers,
) -> bool {
    let base = buffers.next_index;
    if base >= BOND_INDEX_LIMIT {
        trace!(index = base, "Cylinder index space exhausted");
        return false;
    }

    push_mirrored(&mut buffers.vertices, start);
    push_mirrored(&mut buffers.vertices, start);
    push_mirrored(&mut buffers.vertices, end);
    push_mirrored(&mut buffers.vertices, end);

    let direction = [start.x - end.x, end.y - start.y, end.z - start.z];
    for _ in 0..QUAD_VERTICES {
        buffers.directions.extend_from_slice(&direction);
    }
    buffers.impostor_coordinates.extend_from_slice(&QUAD_CORNERS);
    push_indices(&mut buffers.indices, base, &QUAD_INDICES);
    buffers.next_index = base + QUAD_VERTICES;
    true
}
