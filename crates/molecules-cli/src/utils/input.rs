use crate::error::{CliError, Result};
use flate2::read::GzDecoder;
use molecules::core::models::structure::{FileFormat, MolecularStructure};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Inflates `bytes` when they are gzip data, either by name or by magic number.
pub fn decompress_if_needed(bytes: Vec<u8>, gzip_name: bool) -> Result<Vec<u8>> {
    if !gzip_name && !bytes.starts_with(&GZIP_MAGIC) {
        return Ok(bytes);
    }
    let mut decoder = GzDecoder::new(bytes.as_slice());
    let mut inflated = Vec::new();
    decoder.read_to_end(&mut inflated)?;
    debug!(
        compressed = bytes.len(),
        inflated = inflated.len(),
        "Decompressed gzip input"
    );
    Ok(inflated)
}

/// Reads, unpacks and parses one structure file.
///
/// `format` overrides detection from the file name; gzip data is still recognized by its
/// magic number in that case.
pub fn load_structure(path: &Path, format: Option<FileFormat>) -> Result<MolecularStructure> {
    let (format, gzip_name) = match format {
        Some(format) => (format, false),
        None => FileFormat::from_path(path)?,
    };
    info!("Loading {} structure from {:?}", format, path);

    let bytes = std::fs::read(path)?;
    let bytes = decompress_if_needed(bytes, gzip_name)?;
    format.read(&bytes).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    const WATER_XYZ: &str = "3\nwater\nO 0.000 0.000 0.000\nH 0.757 0.586 0.000\nH -0.757 0.586 0.000\n";

    fn gzip(contents: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(contents).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn plain_bytes_pass_through_untouched() {
        let bytes = b"C 0 0 0\n".to_vec();
        assert_eq!(decompress_if_needed(bytes.clone(), false).unwrap(), bytes);
    }

    #[test]
    fn gzip_data_is_inflated_by_magic_number() {
        let compressed = gzip(WATER_XYZ.as_bytes());
        let inflated = decompress_if_needed(compressed, false).unwrap();
        assert_eq!(inflated, WATER_XYZ.as_bytes());
    }

    #[test]
    fn gzip_name_with_corrupt_data_is_an_io_error() {
        let result = decompress_if_needed(b"not gzip at all".to_vec(), true);
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn load_structure_detects_format_from_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("water.xyz");
        File::create(&path)
            .unwrap()
            .write_all(WATER_XYZ.as_bytes())
            .unwrap();

        let structure = load_structure(&path, None).unwrap();
        assert_eq!(structure.format, FileFormat::Xyz);
        assert_eq!(structure.atoms.len(), 3);
    }

    #[test]
    fn load_structure_reads_gzipped_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("water.xyz.gz");
        File::create(&path)
            .unwrap()
            .write_all(&gzip(WATER_XYZ.as_bytes()))
            .unwrap();

        let structure = load_structure(&path, None).unwrap();
        assert_eq!(structure.atoms.len(), 3);
    }

    #[test]
    fn format_override_ignores_file_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("water.txt");
        File::create(&path)
            .unwrap()
            .write_all(WATER_XYZ.as_bytes())
            .unwrap();

        assert!(matches!(
            load_structure(&path, None),
            Err(CliError::UnknownFormat(_))
        ));
        let structure = load_structure(&path, Some(FileFormat::Xyz)).unwrap();
        assert_eq!(structure.atoms.len(), 3);
    }

    #[test]
    fn empty_structure_is_reported_with_its_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.pdb");
        File::create(&path).unwrap();

        let err = load_structure(&path, None).unwrap_err();
        assert!(matches!(err, CliError::FileParsing { .. }));
        assert!(err.to_string().contains("empty.pdb"));
    }
}
