//! # Core Module
//!
//! The data model and file readers shared by every consumer of the library.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Coordinates, elements, atoms, bonds, statistics
//!   and the parsed structure itself
//! - **Residue Knowledge** ([`topology`]) - Residue kinds and the bond tables used to connect
//!   biopolymer atoms that PDB files list without explicit connectivity
//! - **File I/O** ([`io`]) - Lenient line-oriented readers for PDB, SDF/MOL and XYZ text
//! - **Utilities** ([`utils`]) - Matrix helpers for view transforms
//!
//! Parsing is synchronous and allocation-light: every reader makes a single pass over the text
//! and hands back an immutable [`models::structure::MolecularStructure`].

pub mod io;
pub mod models;
pub mod topology;
pub mod utils;
