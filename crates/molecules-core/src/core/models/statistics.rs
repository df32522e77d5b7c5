use super::coordinate::Coordinate;

const TARGET_WIDTH: f32 = 1.5;
const TARGET_DEPTH: f32 = 1.875;

/// Running bounding box and centroid over every atom a parser keeps.
///
/// The limits start at sentinels that the first real coordinate always replaces, so
/// molecules lying entirely in negative space are bounded correctly.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeStatistics {
    minimum: Coordinate,
    maximum: Coordinate,
    sum: Coordinate,
    count: usize,
}

impl Default for MoleculeStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl MoleculeStatistics {
    pub fn new() -> Self {
        Self {
            minimum: Coordinate::repeat(f32::MAX),
            maximum: Coordinate::repeat(f32::MIN),
            sum: Coordinate::zeros(),
            count: 0,
        }
    }

    pub fn update(&mut self, location: &Coordinate) {
        self.minimum = self.minimum.inf(location);
        self.maximum = self.maximum.sup(location);
        self.sum += location;
        self.count += 1;
    }

    pub fn atom_count(&self) -> usize {
        self.count
    }

    /// Mean position of the accumulated atoms, the origin when nothing was accumulated.
    pub fn center_of_mass(&self) -> Coordinate {
        if self.count == 0 {
            return Coordinate::zeros();
        }
        self.sum / self.count as f32
    }

    pub fn minimum_limits(&self) -> Coordinate {
        self.minimum
    }

    pub fn maximum_limits(&self) -> Coordinate {
        self.maximum
    }

    /// Per-axis factor mapping the bounding box onto 1.5 units in x and y and 1.875 in z.
    ///
    /// Returns `(1, 1, 1)` whenever any axis has zero (or negative) extent.
    pub fn scale_factor(&self) -> Coordinate {
        let extent = self.maximum - self.minimum;
        if extent.iter().any(|delta| *delta <= 0.0 || delta.is_nan()) {
            return Coordinate::repeat(1.0);
        }
        Coordinate::new(
            TARGET_WIDTH / extent.x,
            TARGET_WIDTH / extent.y,
            TARGET_DEPTH / extent.z,
        )
    }
}
