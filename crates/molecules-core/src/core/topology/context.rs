use super::residue::ResidueKind;
use crate::core::models::atom::Atom;
use crate::core::models::bond::Bond;
use std::collections::HashMap;

/// Per-residue bookkeeping for bond inference while a PDB file is read.
///
/// Atoms of the current residue are collected by name until a boundary, at which point
/// [`ResidueContext::finish`] infers their bonds and carries the terminal atom forward.
#[derive(Debug, Default)]
pub struct ResidueContext {
    kind: Option<ResidueKind>,
    atoms: HashMap<String, Atom>,
    terminal_atom: Option<Atom>,
}

impl ResidueContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts collecting a new residue. `None` marks an unrecognized residue name.
    pub fn begin(&mut self, kind: Option<ResidueKind>) {
        self.kind = kind;
    }

    pub fn add_atom(&mut self, name: &str, atom: Atom) {
        self.atoms.insert(name.trim().to_string(), atom);
    }

    pub fn kind(&self) -> Option<ResidueKind> {
        self.kind
    }

    pub fn terminal_atom(&self) -> Option<Atom> {
        self.terminal_atom
    }

    /// Infers the bonds of the pending residue and forgets its atoms and kind.
    ///
    /// Unrecognized residues contribute no bonds and leave the terminal atom untouched, as
    /// does finishing twice in a row.
    pub fn finish(&mut self) -> Vec<Bond> {
        match self.kind.take() {
            Some(kind) => {
                let result = kind.bonds(&mut self.atoms, self.terminal_atom);
                self.terminal_atom = result.terminal_atom;
                result.bonds
            }
            None => {
                self.atoms.clear();
                Vec::new()
            }
        }
    }

    /// Finishes the pending residue and ends the chain, so the next residue starts unlinked.
    pub fn break_chain(&mut self) -> Vec<Bond> {
        let bonds = self.finish();
        self.terminal_atom = None;
        bonds
    }
}
