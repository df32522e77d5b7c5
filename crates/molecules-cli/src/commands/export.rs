use crate::cli::ExportArgs;
use crate::error::Result;
use crate::utils::input::load_structure;
use molecules::core::models::structure::MolecularStructure;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use tracing::info;

#[derive(Debug, Serialize)]
struct AtomRow<'a> {
    index: usize,
    element: &'a str,
    x: f32,
    y: f32,
    z: f32,
}

pub fn run(args: ExportArgs) -> Result<()> {
    let structure = load_structure(&args.file, args.format)?;
    let file = File::create(&args.output)?;
    write_atoms(&structure, file)?;

    info!("Wrote {} atom(s) to {:?}", structure.atoms.len(), &args.output);
    println!(
        "✓ {} atom(s) written to: {}",
        structure.atoms.len(),
        args.output.display()
    );
    Ok(())
}

/// Writes one CSV row per atom, numbered from 1 in file order.
pub fn write_atoms<W: Write>(structure: &MolecularStructure, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (i, atom) in structure.atoms.iter().enumerate() {
        csv_writer.serialize(AtomRow {
            index: i + 1,
            element: atom.element.symbol(),
            x: atom.location.x,
            y: atom.location.y,
            z: atom.location.z,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use molecules::core::io::traits::MolecularFile;
    use molecules::core::io::xyz::XyzFile;
    use tempfile::tempdir;

    #[test]
    fn write_atoms_emits_header_and_rows() {
        let structure = XyzFile::read_from_str("O 0.0 0.0 0.0\nFe 1.5 -2.0 3.25\n").unwrap();
        let mut buffer = Vec::new();
        write_atoms(&structure, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["index,element,x,y,z", "1,O,0.0,0.0,0.0", "2,Fe,1.5,-2.0,3.25"]);
    }

    #[test]
    fn run_writes_csv_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pair.xyz");
        std::fs::write(&input, "C 0 0 0\nN 1 1 1\n").unwrap();
        let output = dir.path().join("atoms.csv");

        run(ExportArgs {
            file: input,
            output: output.clone(),
            format: None,
        })
        .unwrap();

        let mut reader = csv::Reader::from_path(&output).unwrap();
        let elements: Vec<String> = reader
            .records()
            .map(|record| record.unwrap()[1].to_string())
            .collect();
        assert_eq!(elements, vec!["C", "N"]);
    }

    #[test]
    fn run_fails_for_unreadable_input() {
        let dir = tempdir().unwrap();
        let result = run(ExportArgs {
            file: dir.path().join("missing.xyz"),
            output: dir.path().join("out.csv"),
            format: None,
        });
        assert!(result.is_err());
        assert!(!dir.path().join("out.csv").exists());
    }
}
