use crate::core::models::atom::Atom;
use crate::core::models::bond::Bond;
use phf::{Map, phf_map};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidueKind {
    // --- Amino acids ---
    Alanine,       // ALA
    Arginine,      // ARG
    Asparagine,    // ASN
    AsparticAcid,  // ASP
    Cysteine,      // CYS
    Glutamine,     // GLN
    GlutamicAcid,  // GLU
    Glycine,       // GLY
    Histidine,     // HIS
    Isoleucine,    // ILE
    Leucine,       // LEU
    Lysine,        // LYS
    Methionine,    // MET
    Phenylalanine, // PHE
    Proline,       // PRO
    Serine,        // SER
    Threonine,     // THR
    Tryptophan,    // TRP
    Tyrosine,      // TYR
    Valine,        // VAL

    // --- Ribonucleotides ---
    Adenosine, // A
    Cytidine,  // C
    Guanosine, // G
    Uridine,   // U

    // --- Deoxyribonucleotides ---
    Deoxyadenosine, // DA
    Deoxycytidine,  // DC
    Deoxyguanosine, // DG
    Deoxythymidine, // DT
}

static RESIDUE_NAMES: Map<&'static str, ResidueKind> = phf_map! {
    "ALA" => ResidueKind::Alanine,
    "ARG" => ResidueKind::Arginine,
    "ASN" => ResidueKind::Asparagine,
    "ASP" => ResidueKind::AsparticAcid,
    "CYS" => ResidueKind::Cysteine,
    "GLN" => ResidueKind::Glutamine,
    "GLU" => ResidueKind::GlutamicAcid,
    "GLY" => ResidueKind::Glycine,
    "HIS" => ResidueKind::Histidine,
    "ILE" => ResidueKind::Isoleucine,
    "LEU" => ResidueKind::Leucine,
    "LYS" => ResidueKind::Lysine,
    "MET" => ResidueKind::Methionine,
    "PHE" => ResidueKind::Phenylalanine,
    "PRO" => ResidueKind::Proline,
    "SER" => ResidueKind::Serine,
    "THR" => ResidueKind::Threonine,
    "TRP" => ResidueKind::Tryptophan,
    "TYR" => ResidueKind::Tyrosine,
    "VAL" => ResidueKind::Valine,
    "A" => ResidueKind::Adenosine,
    "C" => ResidueKind::Cytidine,
    "G" => ResidueKind::Guanosine,
    "U" => ResidueKind::Uridine,
    "DA" => ResidueKind::Deoxyadenosine,
    "DC" => ResidueKind::Deoxycytidine,
    "DG" => ResidueKind::Deoxyguanosine,
    "DT" => ResidueKind::Deoxythymidine,
};

type BondTable = &'static [(&'static str, &'static str)];

const AMINO_BACKBONE: BondTable = &[("N", "CA"), ("CA", "C"), ("C", "O")];

const DEOXYRIBOSE_BACKBONE: BondTable = &[
    ("P", "OP1"),
    ("P", "OP2"),
    ("P", "O5'"),
    ("O5'", "C5'"),
    ("C5'", "C4'"),
    ("C4'", "O4'"),
    ("C4'", "C3'"),
    ("C3'", "O3'"),
    ("O4'", "C1'"),
    ("C3'", "C2'"),
    ("C2'", "C1'"),
];

const RIBOSE_HYDROXYL: BondTable = &[("C2'", "O2'")];

const ALANINE: BondTable = &[("CA", "CB")];
const VALINE: BondTable = &[("CA", "CB"), ("CB", "CG1"), ("CB", "CG2")];
const LEUCINE: BondTable = &[("CA", "CB"), ("CB", "CG"), ("CG", "CD1"), ("CG", "CD2")];
const ISOLEUCINE: BondTable = &[("CA", "CB"), ("CB", "CG1"), ("CB", "CG2"), ("CG1", "CD1")];
const SERINE: BondTable = &[("CA", "CB"), ("CB", "OG")];
const CYSTEINE: BondTable = &[("CA", "CB"), ("CB", "SG")];
const THREONINE: BondTable = &[("CA", "CB"), ("CB", "OG1"), ("CB", "CG2")];
const METHIONINE: BondTable = &[("CA", "CB"), ("CB", "CG"), ("CG", "SD"), ("SD", "CE")];
const PROLINE: BondTable = &[("CA", "CB"), ("CB", "CG"), ("CG", "CD"), ("CD", "N")];
const PHENYLALANINE: BondTable = &[
    ("CA", "CB"),
    ("CB", "CG"),
    ("CG", "CD1"),
    ("CG", "CD2"),
    ("CD1", "CE1"),
    ("CD2", "CE2"),
    ("CE1", "CZ"),
    ("CE2", "CZ"),
];
const TYROSINE: BondTable = &[
    ("CA", "CB"),
    ("CB", "CG"),
    ("CG", "CD1"),
    ("CG", "CD2"),
    ("CD1", "CE1"),
    ("CD2", "CE2"),
    ("CE1", "CZ"),
    ("CE2", "CZ"),
    ("CZ", "OH"),
];
const TRYPTOPHAN: BondTable = &[
    ("CA", "CB"),
    ("CB", "CG"),
    ("CG", "CD1"),
    ("CG", "CD2"),
    ("CD1", "NE1"),
    ("CD2", "CE2"),
    ("NE1", "CE2"),
    ("CE2", "CZ2"),
    ("CZ2", "CH2"),
    ("CH2", "CZ3"),
    ("CZ3", "CE3"),
    ("CE3", "CD2"),
];
const HISTIDINE: BondTable = &[
    ("CA", "CB"),
    ("CB", "CG"),
    ("CG", "ND1"),
    ("CG", "CD2"),
    ("ND1", "CE1"),
    ("CD2", "NE2"),
    ("CE1", "NE2"),
];
const LYSINE: BondTable = &[
    ("CA", "CB"),
    ("CB", "CG"),
    ("CG", "CD"),
    ("CD", "CE"),
    ("CE", "NZ"),
];
const ARGININE: BondTable = &[
    ("CA", "CB"),
    ("CB", "CG"),
    ("CG", "CD"),
    ("CD", "NE"),
    ("NE", "CZ"),
    ("CZ", "NH1"),
    ("CZ", "NH2"),
];
const ASPARTIC_ACID: BondTable = &[("CA", "CB"), ("CB", "CG"), ("CG", "OD1"), ("CG", "OD2")];
const GLUTAMIC_ACID: BondTable = &[
    ("CA", "CB"),
    ("CB", "CG"),
    ("CG", "CD"),
    ("CD", "OE1"),
    ("CD", "OE2"),
];
const ASPARAGINE: BondTable = &[("CA", "CB"), ("CB", "CG"), ("CG", "OD1"), ("CG", "ND2")];
const GLUTAMINE: BondTable = &[
    ("CA", "CB"),
    ("CB", "CG"),
    ("CG", "CD"),
    ("CD", "OE1"),
    ("CD", "NE2"),
];

const ADENINE: BondTable = &[
    ("C1'", "N9"),
    ("N9", "C4"),
    ("C4", "N3"),
    ("N3", "C2"),
    ("C2", "N1"),
    ("N1", "C6"),
    ("C6", "N6"),
    ("C6", "C5"),
    ("C5", "C4"),
    ("C5", "N7"),
    ("N7", "C8"),
    ("C8", "N9"),
];
const CYTOSINE: BondTable = &[
    ("C1'", "N1"),
    ("N1", "C2"),
    ("C2", "O2"),
    ("C2", "N3"),
    ("N3", "C4"),
    ("C4", "N4"),
    ("C4", "C5"),
    ("C5", "C6"),
    ("C6", "N1"),
];
const GUANINE: BondTable = &[
    ("C1'", "N9"),
    ("N9", "C4"),
    ("C4", "N3"),
    ("N3", "C2"),
    ("C2", "N2"),
    ("C2", "N1"),
    ("N1", "C6"),
    ("C6", "O6"),
    ("C6", "C5"),
    ("C5", "C4"),
    ("C5", "N7"),
    ("N7", "C8"),
    ("C8", "N9"),
];
const URACIL: BondTable = &[
    ("C1'", "N1"),
    ("N1", "C2"),
    ("C2", "O2"),
    ("C2", "N3"),
    ("N3", "C4"),
    ("C4", "O4"),
    ("C4", "C5"),
    ("C5", "C6"),
    ("C6", "N1"),
];
// Only the methyl carbon; the thymine ring itself is not connected.
const THYMINE: BondTable = &[("C5", "C7")];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown residue name: '{0}'")]
pub struct UnknownResidueError(pub String);

/// Bonds inferred for one residue, and the atom the next residue in the chain links to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResidueBonds {
    pub bonds: Vec<Bond>,
    pub terminal_atom: Option<Atom>,
}

impl ResidueKind {
    pub fn is_amino_acid(&self) -> bool {
        !self.is_ribonucleotide() && !self.is_deoxyribonucleotide()
    }

    pub fn is_ribonucleotide(&self) -> bool {
        matches!(
            self,
            Self::Adenosine | Self::Cytidine | Self::Guanosine | Self::Uridine
        )
    }

    pub fn is_deoxyribonucleotide(&self) -> bool {
        matches!(
            self,
            Self::Deoxyadenosine | Self::Deoxycytidine | Self::Deoxyguanosine | Self::Deoxythymidine
        )
    }

    fn side_chain(&self) -> BondTable {
        match self {
            Self::Alanine => ALANINE,
            Self::Arginine => ARGININE,
            Self::Asparagine => ASPARAGINE,
            Self::AsparticAcid => ASPARTIC_ACID,
            Self::Cysteine => CYSTEINE,
            Self::Glutamine => GLUTAMINE,
            Self::GlutamicAcid => GLUTAMIC_ACID,
            Self::Glycine => &[],
            Self::Histidine => HISTIDINE,
            Self::Isoleucine => ISOLEUCINE,
            Self::Leucine => LEUCINE,
            Self::Lysine => LYSINE,
            Self::Methionine => METHIONINE,
            Self::Phenylalanine => PHENYLALANINE,
            Self::Proline => PROLINE,
            Self::Serine => SERINE,
            Self::Threonine => THREONINE,
            Self::Tryptophan => TRYPTOPHAN,
            Self::Tyrosine => TYROSINE,
            Self::Valine => VALINE,
            Self::Adenosine | Self::Deoxyadenosine => ADENINE,
            Self::Cytidine | Self::Deoxycytidine => CYTOSINE,
            Self::Guanosine | Self::Deoxyguanosine => GUANINE,
            Self::Uridine => URACIL,
            Self::Deoxythymidine => THYMINE,
        }
    }

    /// Infers the bonds of one residue from the atoms recorded for it.
    ///
    /// Runs a backbone pass for the residue's category, linking to `previous_terminal` when
    /// both it and this residue's link atom exist, then a side-chain or base pass. A bond is
    /// only emitted when both of its named atoms are present. Ribonucleotides only get their
    /// 2'-hydroxyl bond from the backbone pass and pass `previous_terminal` through as is.
    ///
    /// # Arguments
    ///
    /// * `residue_atoms` - Atoms of this residue keyed by trimmed atom name. Always left empty.
    /// * `previous_terminal` - The atom carried over from the preceding residue, if any.
    ///
    /// # Return
    ///
    /// The inferred bonds and the terminal atom to hand to the next residue.
    pub fn bonds(
        &self,
        residue_atoms: &mut HashMap<String, Atom>,
        previous_terminal: Option<Atom>,
    ) -> ResidueBonds {
        let mut bonds = Vec::new();
        let atoms = &*residue_atoms;

        let terminal_atom = if self.is_deoxyribonucleotide() {
            link_chain(&mut bonds, atoms, previous_terminal, "P", "O3'", DEOXYRIBOSE_BACKBONE)
        } else if self.is_ribonucleotide() {
            push_table(&mut bonds, atoms, RIBOSE_HYDROXYL);
            previous_terminal
        } else {
            link_chain(&mut bonds, atoms, previous_terminal, "N", "C", AMINO_BACKBONE)
        };
        push_table(&mut bonds, atoms, self.side_chain());

        residue_atoms.clear();
        ResidueBonds {
            bonds,
            terminal_atom,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Alanine => "ALA",
            Self::Arginine => "ARG",
            Self::Asparagine => "ASN",
            Self::AsparticAcid => "ASP",
            Self::Cysteine => "CYS",
            Self::Glutamine => "GLN",
            Self::GlutamicAcid => "GLU",
            Self::Glycine => "GLY",
            Self::Histidine => "HIS",
            Self::Isoleucine => "ILE",
            Self::Leucine => "LEU",
            Self::Lysine => "LYS",
            Self::Methionine => "MET",
            Self::Phenylalanine => "PHE",
            Self::Proline => "PRO",
            Self::Serine => "SER",
            Self::Threonine => "THR",
            Self::Tryptophan => "TRP",
            Self::Tyrosine => "TYR",
            Self::Valine => "VAL",
            Self::Adenosine => "A",
            Self::Cytidine => "C",
            Self::Guanosine => "G",
            Self::Uridine => "U",
            Self::Deoxyadenosine => "DA",
            Self::Deoxycytidine => "DC",
            Self::Deoxyguanosine => "DG",
            Self::Deoxythymidine => "DT",
        }
    }
}

fn push_table(bonds: &mut Vec<Bond>, atoms: &HashMap<String, Atom>, table: BondTable) {
    bonds.extend(table.iter().filter_map(|(first, second)| {
        match (atoms.get(*first), atoms.get(*second)) {
            (Some(a), Some(b)) => Some(Bond::between(a, b)),
            _ => None,
        }
    }));
}

fn link_chain(
    bonds: &mut Vec<Bond>,
    atoms: &HashMap<String, Atom>,
    previous_terminal: Option<Atom>,
    link_atom: &str,
    terminal_atom: &str,
    backbone: BondTable,
) -> Option<Atom> {
    push_table(bonds, atoms, backbone);
    if let (Some(previous), Some(link)) = (previous_terminal, atoms.get(link_atom)) {
        bonds.push(Bond::between(&previous, link));
    }
    atoms.get(terminal_atom).copied()
}

impl FromStr for ResidueKind {
    type Err = UnknownResidueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        RESIDUE_NAMES
            .get(name)
            .copied()
            .ok_or_else(|| UnknownResidueError(name.to_string()))
    }
}

impl fmt::Display for ResidueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
