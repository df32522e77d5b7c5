use phf::{Map, phf_map};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The chemical elements the viewer knows how to size and color.
///
/// Anything outside this set resolves to [`Element::Unknown`] instead of failing, so
/// that a single exotic atom never prevents a structure from loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Carbon,
    Hydrogen,
    Oxygen,
    Nitrogen,
    Sulfur,
    Phosphorous,
    Iron,
    Silicon,
    Fluorine,
    Chlorine,
    Bromine,
    Iodine,
    Calcium,
    Zinc,
    Cadmium,
    Sodium,
    Magnesium,
    Unknown,
}

/// An RGB display color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Color {
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.red, self.green, self.blue]
    }
}

static ELEMENT_CODES: Map<&'static str, Element> = phf_map! {
    "C" => Element::Carbon,
    "H" => Element::Hydrogen,
    "O" => Element::Oxygen,
    "N" => Element::Nitrogen,
    "S" => Element::Sulfur,
    "P" => Element::Phosphorous,
    "FE" => Element::Iron,
    "SI" => Element::Silicon,
    "F" => Element::Fluorine,
    "CL" => Element::Chlorine,
    "BR" => Element::Bromine,
    "I" => Element::Iodine,
    "CA" => Element::Calcium,
    "ZN" => Element::Zinc,
    "CD" => Element::Cadmium,
    "NA" => Element::Sodium,
    "MG" => Element::Magnesium,
};

impl Element {
    /// Every element in declaration order, `Unknown` last.
    pub const ALL: [Element; 18] = [
        Element::Carbon,
        Element::Hydrogen,
        Element::Oxygen,
        Element::Nitrogen,
        Element::Sulfur,
        Element::Phosphorous,
        Element::Iron,
        Element::Silicon,
        Element::Fluorine,
        Element::Chlorine,
        Element::Bromine,
        Element::Iodine,
        Element::Calcium,
        Element::Zinc,
        Element::Cadmium,
        Element::Sodium,
        Element::Magnesium,
        Element::Unknown,
    ];

    /// Resolves a one- or two-letter element symbol, ignoring case.
    ///
    /// # Arguments
    ///
    /// * `code` - The symbol as it appears in the file (surrounding whitespace is ignored).
    ///
    /// # Return
    ///
    /// The matching element, or `Element::Unknown` when the symbol is not in the table.
    pub fn from_code(code: &str) -> Self {
        ELEMENT_CODES
            .get(code.trim().to_ascii_uppercase().as_str())
            .copied()
            .unwrap_or(Element::Unknown)
    }

    /// Resolves an atomic number, as used by numeric XYZ files.
    pub fn from_atomic_number(atomic_number: i64) -> Self {
        match atomic_number {
            1 => Element::Hydrogen,
            6 => Element::Carbon,
            7 => Element::Nitrogen,
            8 => Element::Oxygen,
            9 => Element::Fluorine,
            11 => Element::Sodium,
            12 => Element::Magnesium,
            14 => Element::Silicon,
            15 => Element::Phosphorous,
            16 => Element::Sulfur,
            17 => Element::Chlorine,
            20 => Element::Calcium,
            26 => Element::Iron,
            30 => Element::Zinc,
            35 => Element::Bromine,
            48 => Element::Cadmium,
            53 => Element::Iodine,
            _ => Element::Unknown,
        }
    }

    /// Van der Waals radius in Angstroms.
    pub fn vdw_radius(self) -> f32 {
        match self {
            Element::Carbon => 1.70,
            Element::Hydrogen => 1.20,
            Element::Oxygen => 1.52,
            Element::Nitrogen => 1.55,
            Element::Sulfur => 1.80,
            Element::Phosphorous => 1.80,
            Element::Iron => 1.80,
            Element::Silicon => 2.10,
            Element::Fluorine => 1.47,
            Element::Chlorine => 1.75,
            Element::Bromine => 1.85,
            Element::Iodine => 1.98,
            Element::Calcium => 1.80,
            Element::Zinc => 1.39,
            Element::Cadmium => 1.58,
            Element::Sodium => 2.27,
            Element::Magnesium => 1.73,
            Element::Unknown => 1.50,
        }
    }

    /// Display color. Unknown atoms are drawn bright green so they stand out.
    pub fn color(self) -> Color {
        match self {
            Element::Carbon => Color::new(0.565, 0.565, 0.565),
            Element::Hydrogen => Color::new(1.0, 1.0, 1.0),
            Element::Oxygen => Color::new(1.0, 0.051, 0.051),
            Element::Nitrogen => Color::new(0.188, 0.314, 0.973),
            Element::Sulfur => Color::new(1.0, 1.0, 0.188),
            Element::Phosphorous => Color::new(1.0, 0.502, 0.0),
            Element::Iron => Color::new(0.878, 0.4, 0.2),
            Element::Silicon => Color::new(0.941, 0.784, 0.627),
            Element::Fluorine => Color::new(0.565, 0.878, 0.314),
            Element::Chlorine => Color::new(0.122, 0.941, 0.122),
            Element::Bromine => Color::new(0.651, 0.161, 0.161),
            Element::Iodine => Color::new(0.580, 0.0, 0.580),
            Element::Calcium => Color::new(0.239, 1.0, 0.0),
            Element::Zinc => Color::new(0.490, 0.502, 0.690),
            Element::Cadmium => Color::new(1.0, 0.851, 0.561),
            Element::Sodium => Color::new(0.671, 0.361, 0.949),
            Element::Magnesium => Color::new(0.541, 1.0, 0.0),
            Element::Unknown => Color::new(0.0, 1.0, 0.0),
        }
    }

    /// Conventional symbol, `"?"` for unknown atoms.
    pub fn symbol(self) -> &'static str {
        match self {
            Element::Carbon => "C",
            Element::Hydrogen => "H",
            Element::Oxygen => "O",
            Element::Nitrogen => "N",
            Element::Sulfur => "S",
            Element::Phosphorous => "P",
            Element::Iron => "Fe",
            Element::Silicon => "Si",
            Element::Fluorine => "F",
            Element::Chlorine => "Cl",
            Element::Bromine => "Br",
            Element::Iodine => "I",
            Element::Calcium => "Ca",
            Element::Zinc => "Zn",
            Element::Cadmium => "Cd",
            Element::Sodium => "Na",
            Element::Magnesium => "Mg",
            Element::Unknown => "?",
        }
    }
}

impl FromStr for Element {
    type Err = Infallible;

    /// Same resolution as [`Element::from_code`]; never fails.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Element::from_code(s))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_resolves_every_supported_symbol() {
        let expected = [
            ("C", Element::Carbon),
            ("H", Element::Hydrogen),
            ("O", Element::Oxygen),
            ("N", Element::Nitrogen),
            ("S", Element::Sulfur),
            ("P", Element::Phosphorous),
            ("FE", Element::Iron),
            ("SI", Element::Silicon),
            ("F", Element::Fluorine),
            ("CL", Element::Chlorine),
            ("BR", Element::Bromine),
            ("I", Element::Iodine),
            ("CA", Element::Calcium),
            ("ZN", Element::Zinc),
            ("CD", Element::Cadmium),
            ("NA", Element::Sodium),
            ("MG", Element::Magnesium),
        ];
        for (code, element) in expected {
            assert_eq!(Element::from_code(code), element, "code {code}");
        }
    }

    #[test]
    fn from_code_is_case_insensitive_and_trims_whitespace() {
        assert_eq!(Element::from_code("fe"), Element::Iron);
        assert_eq!(Element::from_code("Cl"), Element::Chlorine);
        assert_eq!(Element::from_code(" zN "), Element::Zinc);
    }

    #[test]
    fn from_code_maps_unrecognized_symbols_to_unknown() {
        assert_eq!(Element::from_code("XX"), Element::Unknown);
        assert_eq!(Element::from_code(""), Element::Unknown);
        assert_eq!(Element::from_code("Se"), Element::Unknown);
    }

    #[test]
    fn from_atomic_number_resolves_supported_numbers() {
        let expected = [
            (1, Element::Hydrogen),
            (6, Element::Carbon),
            (7, Element::Nitrogen),
            (8, Element::Oxygen),
            (9, Element::Fluorine),
            (11, Element::Sodium),
            (12, Element::Magnesium),
            (14, Element::Silicon),
            (15, Element::Phosphorous),
            (16, Element::Sulfur),
            (17, Element::Chlorine),
            (20, Element::Calcium),
            (26, Element::Iron),
            (30, Element::Zinc),
            (35, Element::Bromine),
            (48, Element::Cadmium),
            (53, Element::Iodine),
        ];
        for (number, element) in expected {
            assert_eq!(Element::from_atomic_number(number), element);
        }
    }

    #[test]
    fn from_atomic_number_maps_unsupported_numbers_to_unknown() {
        assert_eq!(Element::from_atomic_number(0), Element::Unknown);
        assert_eq!(Element::from_atomic_number(2), Element::Unknown);
        assert_eq!(Element::from_atomic_number(-6), Element::Unknown);
        assert_eq!(Element::from_atomic_number(118), Element::Unknown);
    }

    #[test]
    fn unknown_has_placeholder_radius_and_marker_color() {
        assert_eq!(Element::Unknown.vdw_radius(), 1.50);
        assert_eq!(Element::Unknown.color(), Color::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn every_element_has_positive_radius_and_normalized_color() {
        for element in Element::ALL {
            assert!(element.vdw_radius() > 0.0);
            for component in element.color().to_array() {
                assert!((0.0..=1.0).contains(&component));
            }
        }
    }

    #[test]
    fn parse_and_display_round_trip_symbols() {
        for element in Element::ALL.iter().filter(|e| **e != Element::Unknown) {
            let parsed: Element = element.to_string().parse().unwrap();
            assert_eq!(parsed, *element);
        }
        assert_eq!(Element::Unknown.to_string(), "?");
    }
}
