use super::columns::{parse_field, slice_and_trim, width};
use super::error::MolecularFileError;
use super::traits::MolecularFile;
use crate::core::models::atom::Atom;
use crate::core::models::bond::Bond;
use crate::core::models::coordinate::Coordinate;
use crate::core::models::element::Element;
use crate::core::models::statistics::MoleculeStatistics;
use crate::core::models::structure::{FileFormat, MolecularStructure};
use tracing::{debug, instrument, trace};

/// Lines wider than this are atom records.
const ATOM_LINE_WIDTH: usize = 67;
/// Narrower lines wider than this, once atoms have been seen, are bond records.
const BOND_LINE_WIDTH: usize = 20;

/// Reader for MDL molfiles and SD files.
///
/// Records are told apart by line width rather than by the counts line, and only the first
/// structure of a multi-structure file is read. Bond orders are not interpreted.
pub struct SdfFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Header,
    Atoms,
    Bonds,
}

impl MolecularFile for SdfFile {
    const FORMAT: FileFormat = FileFormat::Sdf;

    #[instrument(skip_all, name = "sdf_reader", fields(bytes = contents.len()))]
    fn read_from_str(contents: &str) -> Result<MolecularStructure, MolecularFileError> {
        let mut atoms: Vec<Atom> = Vec::new();
        let mut bonds: Vec<Bond> = Vec::new();
        let mut statistics = MoleculeStatistics::new();
        let mut malformed_atoms = 0usize;
        let mut block = Block::Header;

        for line in contents.lines() {
            let line_width = width(line);
            if line_width > ATOM_LINE_WIDTH {
                if block == Block::Bonds {
                    trace!("Atom record after bond block; ignoring remaining structures");
                    break;
                }
                block = Block::Atoms;
                match parse_atom(line) {
                    Some(atom) => {
                        statistics.update(&atom.location);
                        atoms.push(atom);
                    }
                    None => malformed_atoms += 1,
                }
            } else if line_width > BOND_LINE_WIDTH && block != Block::Header {
                block = Block::Bonds;
                match parse_bond(line, &atoms) {
                    Some(bond) => bonds.push(bond),
                    None => {
                        trace!(line = line, "End of bond block");
                        break;
                    }
                }
            }
        }

        debug!(
            atoms = atoms.len(),
            bonds = bonds.len(),
            malformed_atoms = malformed_atoms,
            "Finished reading SDF records"
        );
        if atoms.is_empty() {
            return Err(MolecularFileError::EmptyFile);
        }
        Ok(MolecularStructure::assemble(
            Self::FORMAT,
            atoms,
            bonds,
            &statistics,
            1,
            None,
        ))
    }
}

fn parse_atom(line: &str) -> Option<Atom> {
    let x = parse_field::<f32>(line, 0, 10)?;
    let y = parse_field::<f32>(line, 10, 20)?;
    let z = parse_field::<f32>(line, 20, 30)?;
    let element = Element::from_code(slice_and_trim(line, 31, 34));
    Some(Atom::new(element, Coordinate::new(x, y, z)))
}

fn parse_bond(line: &str, atoms: &[Atom]) -> Option<Bond> {
    let atom_at = |start: usize, end: usize| {
        parse_field::<usize>(line, start, end)
            .and_then(|index| index.checked_sub(1))
            .and_then(|index| atoms.get(index))
    };
    let first = atom_at(0, 3)?;
    let second = atom_at(3, 6)?;
    Some(Bond::between(first, second))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::bond::BondStrength;

    fn atom_line(x: f32, y: f32, z: f32, symbol: &str) -> String {
        format!(
            "{:>10.4}{:>10.4}{:>10.4} {:<3} 0  0  0  0  0  0  0  0  0  0  0  0",
            x, y, z, symbol
        )
    }

    fn bond_line(first: usize, second: usize, order: u8) -> String {
        format!("{:>3}{:>3}{:>3}  0  0  0  0", first, second, order)
    }

    fn header(atoms: usize, bonds: usize) -> Vec<String> {
        vec![
            "702".to_string(),
            "  -OEChem-01012500003D".to_string(),
            String::new(),
            format!("{:>3}{:>3}  0     0  0  0  0  0  0999 V2000", atoms, bonds),
        ]
    }

    fn ethanol() -> Vec<String> {
        let mut lines = header(3, 2);
        lines.push(atom_line(-0.0336, -0.0006, 0.0, "C"));
        lines.push(atom_line(1.4863, 0.0019, 0.0, "C"));
        lines.push(atom_line(2.0083, 1.3178, 0.0, "O"));
        lines.push(bond_line(1, 2, 1));
        lines.push(bond_line(2, 3, 1));
        lines.push("M  END".to_string());
        lines
    }

    #[test]
    fn line_helpers_have_expected_widths() {
        assert!(atom_line(0.0, 0.0, 0.0, "C").len() > ATOM_LINE_WIDTH);
        let bond = bond_line(1, 2, 1);
        assert!(bond.len() > BOND_LINE_WIDTH && bond.len() <= ATOM_LINE_WIDTH);
        assert!(header(3, 2)[3].len() <= ATOM_LINE_WIDTH);
    }

    #[test]
    fn reads_every_atom_and_valid_bond() {
        let structure = SdfFile::read_from_str(&ethanol().join("\n")).unwrap();

        assert_eq!(structure.format, FileFormat::Sdf);
        assert_eq!(structure.atoms.len(), 3);
        assert_eq!(structure.bonds.len(), 2);
        assert_eq!(structure.atoms[2].element, Element::Oxygen);
        assert_eq!(structure.bonds[1].start, structure.atoms[1].location);
        assert_eq!(structure.bonds[1].end, structure.atoms[2].location);
        assert_eq!(structure.structure_count, 1);
        assert!(structure.metadata.is_none());
    }

    #[test]
    fn bond_order_column_is_ignored() {
        let mut lines = header(2, 1);
        lines.push(atom_line(0.0, 0.0, 0.0, "C"));
        lines.push(atom_line(1.2, 0.0, 0.0, "O"));
        lines.push(bond_line(1, 2, 2));
        let structure = SdfFile::read_from_str(&lines.join("\n")).unwrap();

        assert_eq!(structure.bonds.len(), 1);
        assert_eq!(structure.bonds[0].strength, BondStrength::Single);
    }

    #[test]
    fn only_the_first_structure_is_read() {
        let mut lines = ethanol();
        lines.push("$$$$".to_string());
        lines.extend(ethanol());
        let structure = SdfFile::read_from_str(&lines.join("\n")).unwrap();

        assert_eq!(structure.atoms.len(), 3);
        assert_eq!(structure.bonds.len(), 2);
    }

    #[test]
    fn out_of_range_bond_index_ends_the_bond_block() {
        let mut lines = header(2, 3);
        lines.push(atom_line(0.0, 0.0, 0.0, "C"));
        lines.push(atom_line(1.5, 0.0, 0.0, "C"));
        lines.push(bond_line(1, 2, 1));
        lines.push(bond_line(1, 3, 1));
        lines.push(bond_line(2, 1, 1));
        let structure = SdfFile::read_from_str(&lines.join("\n")).unwrap();

        assert_eq!(structure.bonds.len(), 1);

        let mut zero_index = header(2, 1);
        zero_index.push(atom_line(0.0, 0.0, 0.0, "C"));
        zero_index.push(atom_line(1.5, 0.0, 0.0, "C"));
        zero_index.push(bond_line(0, 1, 1));
        let structure = SdfFile::read_from_str(&zero_index.join("\n")).unwrap();
        assert!(structure.bonds.is_empty());
    }

    #[test]
    fn property_lines_after_bonds_are_not_bonds() {
        let mut lines = ethanol();
        lines.push("M  CHG  1   3  -1".to_string());
        lines.push("> <PUBCHEM_COMPOUND_CID>".to_string());
        lines.push("702".to_string());
        let structure = SdfFile::read_from_str(&lines.join("\n")).unwrap();
        assert_eq!(structure.bonds.len(), 2);
    }

    #[test]
    fn malformed_atom_lines_are_skipped_and_unknown_elements_kept() {
        let mut lines = header(3, 0);
        lines.push(atom_line(0.0, 0.0, 0.0, "C"));
        let mut broken = atom_line(1.0, 0.0, 0.0, "C");
        broken.replace_range(0..10, "    x.xxxx");
        lines.push(broken);
        lines.push(atom_line(2.0, 0.0, 0.0, "Xe"));
        let structure = SdfFile::read_from_str(&lines.join("\n")).unwrap();

        assert_eq!(structure.atoms.len(), 2);
        assert_eq!(structure.atoms[1].element, Element::Unknown);
        assert!(structure.bonds.is_empty());
    }

    #[test]
    fn file_without_atom_lines_is_empty() {
        let lines = header(0, 0);
        assert!(matches!(
            SdfFile::read_from_str(&lines.join("\n")),
            Err(MolecularFileError::EmptyFile)
        ));
    }
}
