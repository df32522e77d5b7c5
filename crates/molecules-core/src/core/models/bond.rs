use super::atom::Atom;
use super::coordinate::Coordinate;

/// Bond multiplicity. Readers only ever produce `Single`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum BondStrength {
    #[default]
    Single = 1,
    Double = 2,
    Triple = 3,
}

/// A bond as drawn: the endpoints are copies of the atom positions, with no link back to the atoms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bond {
    pub strength: BondStrength,
    pub start: Coordinate,
    pub end: Coordinate,
}

impl Bond {
    pub fn new(strength: BondStrength, start: Coordinate, end: Coordinate) -> Self {
        Self {
            strength,
            start,
            end,
        }
    }

    pub fn single(start: Coordinate, end: Coordinate) -> Self {
        Self::new(BondStrength::Single, start, end)
    }

    pub fn between(first: &Atom, second: &Atom) -> Self {
        Self::single(first.location, second.location)
    }

    pub fn length(&self) -> f32 {
        (self.end - self.start).norm()
    }
}
