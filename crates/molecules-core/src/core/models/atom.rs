use super::coordinate::Coordinate;
use super::element::Element;

/// An atom located in 3-D space.
///
/// Atoms are created once per parsed record and owned by value in the structure's atom list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atom {
    /// The chemical element, `Element::Unknown` when the file's code was not recognized.
    pub element: Element,
    /// Position in Angstroms, in the file's coordinate frame.
    pub location: Coordinate,
}

impl Atom {
    pub fn new(element: Element, location: Coordinate) -> Self {
        Self { element, location }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::coordinate::coordinate;

    #[test]
    fn new_atom_stores_element_and_location() {
        let atom = Atom::new(Element::Oxygen, coordinate(1.0, 2.0, 3.0));
        assert_eq!(atom.element, Element::Oxygen);
        assert_eq!(atom.location, coordinate(1.0, 2.0, 3.0));
    }

    #[test]
    fn atoms_are_copied_by_value() {
        let original = Atom::new(Element::Carbon, coordinate(0.0, 0.0, 0.0));
        let mut copy = original;
        copy.location.x = 5.0;
        assert_eq!(original.location.x, 0.0);
        assert_ne!(original, copy);
    }
}
