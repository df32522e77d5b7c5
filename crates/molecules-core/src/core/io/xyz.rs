use super::error::MolecularFileError;
use super::traits::MolecularFile;
use crate::core::models::atom::Atom;
use crate::core::models::coordinate::Coordinate;
use crate::core::models::element::Element;
use crate::core::models::statistics::MoleculeStatistics;
use crate::core::models::structure::{FileFormat, MolecularStructure};
use tracing::{debug, instrument};

/// Reader for whitespace-separated XYZ coordinate files.
///
/// Lines with fewer than four fields (the atom count and comment lines included) are
/// skipped. Atoms whose element cannot be resolved are dropped. No bonds are produced.
pub struct XyzFile;

impl MolecularFile for XyzFile {
    const FORMAT: FileFormat = FileFormat::Xyz;

    #[instrument(skip_all, name = "xyz_reader", fields(bytes = contents.len()))]
    fn read_from_str(contents: &str) -> Result<MolecularStructure, MolecularFileError> {
        let mut atoms = Vec::new();
        let mut statistics = MoleculeStatistics::new();
        let mut skipped = 0usize;

        for line in contents.lines() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 4 {
                continue;
            }
            match parse_atom(&fields) {
                Some(atom) => {
                    statistics.update(&atom.location);
                    atoms.push(atom);
                }
                None => skipped += 1,
            }
        }

        debug!(atoms = atoms.len(), skipped = skipped, "Finished reading XYZ records");
        if atoms.is_empty() {
            return Err(MolecularFileError::EmptyFile);
        }
        Ok(MolecularStructure::assemble(
            Self::FORMAT,
            atoms,
            Vec::new(),
            &statistics,
            1,
            None,
        ))
    }
}

fn parse_atom(fields: &[&str]) -> Option<Atom> {
    let element = match fields[0].parse::<i64>() {
        Ok(atomic_number) => Element::from_atomic_number(atomic_number),
        Err(_) => Element::from_code(fields[0]),
    };
    if element == Element::Unknown {
        return None;
    }
    let x = fields[1].parse::<f32>().ok()?;
    let y = fields[2].parse::<f32>().ok()?;
    let z = fields[3].parse::<f32>().ok()?;
    Some(Atom::new(element, Coordinate::new(x, y, z)))
}
