use crate::cli::InspectArgs;
use crate::error::{CliError, Result};
use crate::utils::input::load_structure;
use crate::utils::progress::FileProgress;
use molecules::core::models::element::Element;
use molecules::core::models::structure::MolecularStructure;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info};

pub fn run(args: InspectArgs) -> Result<()> {
    let total = args.files.len();
    info!("Reading {} structure file(s)", total);

    let progress = FileProgress::new(total as u64);
    let results: Vec<(PathBuf, Result<MolecularStructure>)> = args
        .files
        .par_iter()
        .map(|path| {
            let result = load_structure(path, args.format);
            progress.file_done(&path.display().to_string());
            (path.clone(), result)
        })
        .collect();
    progress.finish();

    let mut failures = 0;
    for (path, result) in &results {
        match result {
            Ok(structure) => println!("{}", format_summary(path, structure)),
            Err(e) => {
                error!("Could not read {:?}: {}", path, e);
                eprintln!("✗ {}", e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(CliError::Other(anyhow::anyhow!(
            "{} of {} file(s) could not be read",
            failures,
            total
        )));
    }
    Ok(())
}

fn element_histogram(structure: &MolecularStructure) -> BTreeMap<Element, usize> {
    let mut histogram = BTreeMap::new();
    for atom in &structure.atoms {
        *histogram.entry(atom.element).or_insert(0) += 1;
    }
    histogram
}

fn format_triple(label: &str, value: &[f32]) -> String {
    format!(
        "  {:<10} ({:.3}, {:.3}, {:.3})",
        label, value[0], value[1], value[2]
    )
}

/// Human-readable report for one parsed file.
pub fn format_summary(path: &Path, structure: &MolecularStructure) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} [{}]", path.display(), structure.format);
    let _ = writeln!(out, "  {:<10} {}", "Atoms", structure.atoms.len());
    let _ = writeln!(out, "  {:<10} {}", "Bonds", structure.bonds.len());
    let _ = writeln!(out, "  {:<10} {}", "Models", structure.structure_count);

    let elements = element_histogram(structure)
        .into_iter()
        .map(|(element, count)| format!("{element}:{count}"))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "  {:<10} {}", "Elements", elements);

    let _ = writeln!(out, "{}", format_triple("Minimum", structure.minimum_limits.as_slice()));
    let _ = writeln!(out, "{}", format_triple("Maximum", structure.maximum_limits.as_slice()));
    let _ = writeln!(out, "{}", format_triple("Center", structure.center_of_mass.as_slice()));
    let _ = writeln!(out, "  {:<10} {:.4}", "Scale", structure.overall_scale_factor());
    let _ = write!(
        out,
        "  {:<10} {}",
        "Style",
        structure.default_visualization_style()
    );

    if let Some(metadata) = &structure.metadata {
        for (label, value) in metadata.entries() {
            let _ = write!(out, "\n  {:<10} {}", label, value);
        }
    }
    out
}
