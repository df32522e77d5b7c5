use clap::{Args, Parser, Subcommand};
use molecules::core::models::structure::{FileFormat, VisualizationStyle};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Molecules CLI - inspect PDB, SDF/MOL and XYZ structures and build impostor geometry for them.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used when reading several files.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse one or more structure files and print a summary of each.
    Inspect(InspectArgs),
    /// Build impostor geometry for a structure and report the buffer sizes.
    Geometry(GeometryArgs),
    /// Write the atoms of a structure to a CSV file.
    Export(ExportArgs),
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Structure files (.pdb, .ent, .sdf, .mol, .xyz, optionally gzipped).
    #[arg(required = true, value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Read every file as this format instead of detecting it from the file name.
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<FileFormat>,
}

/// Arguments for the `geometry` subcommand.
#[derive(Args, Debug)]
pub struct GeometryArgs {
    /// Path to the input structure file.
    #[arg(value_name = "PATH")]
    pub file: PathBuf,

    /// Path to a geometry configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the visualization style ('spacefilling' or 'ball-and-stick').
    #[arg(short, long, value_name = "STYLE")]
    pub style: Option<VisualizationStyle>,

    /// Override the zoom factor.
    #[arg(short, long, value_name = "FLOAT")]
    pub zoom: Option<f32>,

    /// Override the ambient occlusion texture width in texels.
    #[arg(long, value_name = "INT")]
    pub texture_width: Option<u32>,

    /// Read the file as this format instead of detecting it from the file name.
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<FileFormat>,
}

/// Arguments for the `export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Path to the input structure file.
    #[arg(value_name = "PATH")]
    pub file: PathBuf,

    /// Path for the output CSV file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Read the file as this format instead of detecting it from the file name.
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<FileFormat>,
}
