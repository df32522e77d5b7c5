use super::error::MolecularFileError;
use crate::core::models::structure::{FileFormat, MolecularStructure};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Defines the interface shared by the molecular file readers.
///
/// Implementors only provide [`MolecularFile::read_from_str`]; decoding, reader and path
/// handling are layered on top by the provided methods.
pub trait MolecularFile {
    /// The format this reader understands.
    const FORMAT: FileFormat;

    /// Parses a complete file from text.
    ///
    /// # Errors
    ///
    /// Returns [`MolecularFileError::EmptyFile`] when no atom could be read.
    fn read_from_str(contents: &str) -> Result<MolecularStructure, MolecularFileError>;

    /// Parses a complete file from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`MolecularFileError::EmptyFile`] when the bytes are not UTF-8 text or hold
    /// no readable atoms.
    fn read_from_bytes(bytes: &[u8]) -> Result<MolecularStructure, MolecularFileError> {
        let contents = std::str::from_utf8(bytes).map_err(|_| MolecularFileError::EmptyFile)?;
        Self::read_from_str(contents)
    }

    /// Reads the reader to its end and parses the result.
    ///
    /// # Errors
    ///
    /// Returns [`MolecularFileError::Io`] if reading fails, otherwise as
    /// [`MolecularFile::read_from_bytes`].
    fn read_from(reader: &mut impl Read) -> Result<MolecularStructure, MolecularFileError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::read_from_bytes(&bytes)
    }

    /// Opens and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`MolecularFileError::Io`] if the file cannot be opened or read.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<MolecularStructure, MolecularFileError> {
        let path = path.as_ref();
        debug!(format = %Self::FORMAT, path = ?path, "Reading structure file");
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
