use molecules::core::models::structure::ParseFormatError;
use molecules::render::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    UnknownFormat(#[from] ParseFormatError),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn file_parsing_error_names_the_file_and_keeps_its_source() {
        let err = CliError::FileParsing {
            path: PathBuf::from("1crn.pdb"),
            source: anyhow::anyhow!("File contains no readable atoms"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse file '1crn.pdb': File contains no readable atoms"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn unknown_format_is_displayed_transparently() {
        let err = CliError::from(ParseFormatError("notes.txt".to_string()));
        assert_eq!(
            err.to_string(),
            "Unrecognized molecular file format: 'notes.txt'"
        );
    }

    #[test]
    fn io_errors_convert_with_prefix() {
        let err: CliError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.to_string(), "I/O error: gone");
    }
}
