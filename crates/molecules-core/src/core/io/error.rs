use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MolecularFileError {
    /// The data was not valid UTF-8 text, or no atoms could be read from it.
    #[error("File contains no readable atoms")]
    EmptyFile,
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
