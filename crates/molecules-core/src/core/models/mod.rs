//! # Core Models Module
//!
//! Value types describing a parsed molecule.
//!
//! ## Key Components
//!
//! - [`coordinate`] - Three-component positions in Angstroms
//! - [`element`] - The closed set of supported chemical elements and their display properties
//! - [`atom`] - A located atom
//! - [`bond`] - A rendered bond, stored as a pair of endpoint coordinates
//! - [`statistics`] - Running bounding box and center-of-mass accumulator
//! - [`metadata`] - Free-text header records from PDB files
//! - [`structure`] - The complete parse result and its source format
//!
//! ```ignore
//! use molecules::core::io::pdb::PdbFile;
//! use molecules::core::io::traits::MolecularFile;
//!
//! let structure = PdbFile::read_from_path("1crn.pdb")?;
//! println!("{} atoms, {} bonds", structure.atoms.len(), structure.bonds.len());
//! ```

pub mod atom;
pub mod bond;
pub mod coordinate;
pub mod element;
pub mod metadata;
pub mod statistics;
pub mod structure;
