//! Readers for the supported molecular structure formats.
//!
//! Each format is a unit type implementing [`traits::MolecularFile`]. The readers only
//! ever see plain text; compressed containers must be unpacked by the caller first.

pub(crate) mod columns;
pub mod error;
pub mod pdb;
pub mod sdf;
pub mod traits;
pub mod xyz;

use crate::core::models::structure::{FileFormat, MolecularStructure};
use error::MolecularFileError;
use pdb::PdbFile;
use sdf::SdfFile;
use traits::MolecularFile;
use xyz::XyzFile;

impl FileFormat {
    /// Parses `bytes` with the reader for this format.
    pub fn read(&self, bytes: &[u8]) -> Result<MolecularStructure, MolecularFileError> {
        match self {
            FileFormat::Pdb => PdbFile::read_from_bytes(bytes),
            FileFormat::Sdf => SdfFile::read_from_bytes(bytes),
            FileFormat::Xyz => XyzFile::read_from_bytes(bytes),
        }
    }
}
