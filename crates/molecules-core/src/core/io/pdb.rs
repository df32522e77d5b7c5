use super::columns::{parse_field, prefix, rest_from, slice_and_trim};
use super::error::MolecularFileError;
use super::traits::MolecularFile;
use crate::core::models::atom::Atom;
use crate::core::models::bond::Bond;
use crate::core::models::coordinate::Coordinate;
use crate::core::models::element::Element;
use crate::core::models::metadata::{MolecularMetadata, append_text};
use crate::core::models::statistics::MoleculeStatistics;
use crate::core::models::structure::{FileFormat, MolecularStructure};
use crate::core::topology::context::ResidueContext;
use crate::core::topology::residue::ResidueKind;
use std::collections::HashMap;
use tracing::{debug, instrument, trace, warn};

const WATER_RESIDUE: &str = "HOH";
const CONECT_PARTNER_COLUMNS: [(usize, usize); 4] = [(11, 16), (16, 21), (21, 26), (26, 31)];

/// Reader for Protein Data Bank files.
///
/// Only the first model's atoms and bonds are kept. Bonds come from CONECT records and
/// from residue templates applied to consecutive ATOM records; HETATM groups other than
/// water are kept as atoms but only bonded through CONECT.
pub struct PdbFile;

impl MolecularFile for PdbFile {
    const FORMAT: FileFormat = FileFormat::Pdb;

    #[instrument(skip_all, name = "pdb_reader", fields(bytes = contents.len()))]
    fn read_from_str(contents: &str) -> Result<MolecularStructure, MolecularFileError> {
        let mut reader = PdbReader::new();
        for line in contents.lines() {
            reader.read_line(line);
        }
        reader.finish()
    }
}

struct AtomRecord<'a> {
    serial: Option<i64>,
    name: &'a str,
    residue_name: &'a str,
    residue_number: &'a str,
    atom: Atom,
}

impl<'a> AtomRecord<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let x = parse_field::<f32>(line, 30, 38)?;
        let y = parse_field::<f32>(line, 38, 46)?;
        let z = parse_field::<f32>(line, 46, 54)?;
        let element_code = match slice_and_trim(line, 76, 78) {
            "" => slice_and_trim(line, 12, 14),
            code => code,
        };
        Some(Self {
            serial: parse_field(line, 6, 12),
            name: slice_and_trim(line, 12, 16),
            residue_name: slice_and_trim(line, 17, 20),
            residue_number: slice_and_trim(line, 22, 27),
            atom: Atom::new(Element::from_code(element_code), Coordinate::new(x, y, z)),
        })
    }
}

#[derive(Debug, Default)]
struct RecordCounts {
    atoms: usize,
    hetero_atoms: usize,
    waters: usize,
    malformed: usize,
    outside_first_model: usize,
    residue_bonds: usize,
    conect_bonds: usize,
    unknown_residues: usize,
}

struct PdbReader {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    serial_lookup: HashMap<i64, Atom>,
    statistics: MoleculeStatistics,
    residues: ResidueContext,
    current_residue: Option<String>,
    metadata: MolecularMetadata,
    structure_count: usize,
    in_first_model: bool,
    counts: RecordCounts,
}

fn record_tag(line: &str) -> &str {
    prefix(line, 6).trim()
}

impl PdbReader {
    fn new() -> Self {
        Self {
            atoms: Vec::new(),
            bonds: Vec::new(),
            serial_lookup: HashMap::new(),
            statistics: MoleculeStatistics::new(),
            residues: ResidueContext::new(),
            current_residue: None,
            metadata: MolecularMetadata::default(),
            structure_count: 1,
            in_first_model: true,
            counts: RecordCounts::default(),
        }
    }

    fn read_line(&mut self, line: &str) {
        match record_tag(line) {
            "ATOM" => self.read_atom(line),
            "HETATM" => self.read_hetero_atom(line),
            "TER" => {
                let bonds = self.residues.break_chain();
                self.push_residue_bonds(bonds);
                self.current_residue = None;
            }
            "CONECT" => self.read_conect(line),
            "MODEL" => self.read_model(line),
            "ENDMDL" => {
                if self.in_first_model {
                    self.finish_residue();
                    self.in_first_model = false;
                }
            }
            "TITLE" => append_text(&mut self.metadata.title, rest_from(line, 10)),
            "COMPND" => {
                if slice_and_trim(line, 10, 20) == "MOLECULE:" {
                    append_text(&mut self.metadata.compound, rest_from(line, 20));
                }
            }
            "SOURCE" => append_text(&mut self.metadata.source, rest_from(line, 10)),
            "AUTHOR" => append_text(&mut self.metadata.authors, rest_from(line, 10)),
            "JRNL" => {
                if matches!(slice_and_trim(line, 12, 16), "REF" | "REFN") {
                    append_text(&mut self.metadata.journal, rest_from(line, 19));
                }
            }
            "SEQRES" => append_text(&mut self.metadata.sequence, rest_from(line, 19)),
            _ => {}
        }
    }

    fn read_atom(&mut self, line: &str) {
        if !self.in_first_model {
            self.counts.outside_first_model += 1;
            return;
        }
        let Some(record) = AtomRecord::parse(line) else {
            self.counts.malformed += 1;
            return;
        };

        if self.current_residue.as_deref() != Some(record.residue_number) {
            self.finish_residue();
            let kind = self.resolve_residue(record.residue_name);
            self.residues.begin(kind);
            self.current_residue = Some(record.residue_number.to_string());
        }
        self.residues.add_atom(record.name, record.atom);
        self.counts.atoms += 1;
        self.keep(&record);
    }

    fn read_hetero_atom(&mut self, line: &str) {
        if !self.in_first_model {
            self.counts.outside_first_model += 1;
            return;
        }
        if slice_and_trim(line, 17, 20) == WATER_RESIDUE {
            self.counts.waters += 1;
            return;
        }
        let Some(record) = AtomRecord::parse(line) else {
            self.counts.malformed += 1;
            return;
        };

        self.finish_residue();
        self.current_residue = None;
        self.counts.hetero_atoms += 1;
        self.keep(&record);
    }

    fn read_conect(&mut self, line: &str) {
        if !self.in_first_model {
            return;
        }
        let Some(origin) = self.lookup_serial(line, 6, 11) else {
            return;
        };
        // Applied as written; a pair listed from both ends yields two bonds.
        for (start, end) in CONECT_PARTNER_COLUMNS {
            if let Some(partner) = self.lookup_serial(line, start, end) {
                self.bonds.push(Bond::between(&origin, &partner));
                self.counts.conect_bonds += 1;
            }
        }
    }

    fn read_model(&mut self, line: &str) {
        let serial = rest_from(line, 6)
            .split_whitespace()
            .next()
            .and_then(|token| token.parse::<usize>().ok());
        if let Some(serial) = serial {
            self.structure_count = self.structure_count.max(serial);
        }
    }

    fn lookup_serial(&self, line: &str, start: usize, end: usize) -> Option<Atom> {
        let serial = parse_field::<i64>(line, start, end).filter(|serial| *serial > 0)?;
        self.serial_lookup.get(&serial).copied()
    }

    fn resolve_residue(&mut self, residue_name: &str) -> Option<ResidueKind> {
        match residue_name.parse::<ResidueKind>() {
            Ok(kind) => Some(kind),
            Err(e) => {
                warn!("{}; its atoms are kept without inferred bonds", e);
                self.counts.unknown_residues += 1;
                None
            }
        }
    }

    fn keep(&mut self, record: &AtomRecord<'_>) {
        trace!(
            serial = record.serial,
            name = record.name,
            residue = record.residue_name,
            element = %record.atom.element,
            "Read atom record"
        );
        self.statistics.update(&record.atom.location);
        self.atoms.push(record.atom);
        if let Some(serial) = record.serial {
            self.serial_lookup.insert(serial, record.atom);
        }
    }

    fn finish_residue(&mut self) {
        let bonds = self.residues.finish();
        self.push_residue_bonds(bonds);
    }

    fn push_residue_bonds(&mut self, bonds: Vec<Bond>) {
        self.counts.residue_bonds += bonds.len();
        self.bonds.extend(bonds);
    }

    fn finish(mut self) -> Result<MolecularStructure, MolecularFileError> {
        self.finish_residue();
        debug!(
            atoms = self.counts.atoms,
            hetero_atoms = self.counts.hetero_atoms,
            waters = self.counts.waters,
            malformed = self.counts.malformed,
            outside_first_model = self.counts.outside_first_model,
            residue_bonds = self.counts.residue_bonds,
            conect_bonds = self.counts.conect_bonds,
            unknown_residues = self.counts.unknown_residues,
            models = self.structure_count,
            "Finished reading PDB records"
        );

        if self.atoms.is_empty() {
            return Err(MolecularFileError::EmptyFile);
        }
        let metadata = (!self.metadata.is_empty()).then_some(self.metadata);
        Ok(MolecularStructure::assemble(
            PdbFile::FORMAT,
            self.atoms,
            self.bonds,
            &self.statistics,
            self.structure_count,
            metadata,
        ))
    }
}
