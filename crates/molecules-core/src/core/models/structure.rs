use super::atom::Atom;
use super::bond::Bond;
use super::coordinate::Coordinate;
use super::metadata::MolecularMetadata;
use super::statistics::MoleculeStatistics;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

const BALL_AND_STICK_ATOM_LIMIT: usize = 600;

/// The text formats a [`MolecularStructure`] can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    Pdb,
    Sdf,
    Xyz,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unrecognized molecular file format: '{0}'")]
pub struct ParseFormatError(pub String);

impl FileFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "pdb" | "ent" => Some(Self::Pdb),
            "sdf" | "mol" => Some(Self::Sdf),
            "xyz" => Some(Self::Xyz),
            _ => None,
        }
    }

    /// Detects the format from a file name, looking through a trailing `.gz`.
    ///
    /// # Return
    ///
    /// The format together with `true` when the name carries the gzip suffix.
    ///
    /// # Errors
    ///
    /// Returns [`ParseFormatError`] with the offending file name when no known extension is found.
    pub fn from_path(path: &Path) -> Result<(Self, bool), ParseFormatError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        let unknown = || ParseFormatError(file_name.to_string());

        let (stem, compressed) = match file_name.rsplit_once('.') {
            Some((stem, ext)) if ext.eq_ignore_ascii_case("gz") => (stem, true),
            _ => (file_name, false),
        };
        let (_, extension) = stem.rsplit_once('.').ok_or_else(unknown)?;
        let format = Self::from_extension(extension).ok_or_else(unknown)?;
        Ok((format, compressed))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pdb => "PDB",
            Self::Sdf => "SDF/MOL",
            Self::Xyz => "XYZ",
        }
    }
}

impl FromStr for FileFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::from_extension(trimmed).ok_or_else(|| ParseFormatError(trimmed.to_string()))
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How atoms are drawn: touching van der Waals spheres, or small spheres joined by bonds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisualizationStyle {
    #[default]
    Spacefilling,
    BallAndStick,
}

impl VisualizationStyle {
    pub fn shows_bonds(&self) -> bool {
        matches!(self, Self::BallAndStick)
    }
}

impl FromStr for VisualizationStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spacefilling" | "space-filling" | "cpk" => Ok(Self::Spacefilling),
            "ball-and-stick" | "ballandstick" | "sticks" => Ok(Self::BallAndStick),
            _ => Err(ParseStyleError),
        }
    }
}

impl fmt::Display for VisualizationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spacefilling => write!(f, "spacefilling"),
            Self::BallAndStick => write!(f, "ball-and-stick"),
        }
    }
}

#[derive(Debug, Error)]
#[error("Invalid visualization style string")]
pub struct ParseStyleError;

/// A parsed molecule: its atoms and bonds plus the statistics needed to frame it.
#[derive(Debug, Clone, PartialEq)]
pub struct MolecularStructure {
    pub format: FileFormat,
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
    pub center_of_mass: Coordinate,
    pub minimum_limits: Coordinate,
    pub maximum_limits: Coordinate,
    pub suggested_scale_factor: Coordinate,
    /// Number of models in the file; only the first one's atoms and bonds are kept.
    pub structure_count: usize,
    pub metadata: Option<MolecularMetadata>,
}

impl MolecularStructure {
    pub(crate) fn assemble(
        format: FileFormat,
        atoms: Vec<Atom>,
        bonds: Vec<Bond>,
        statistics: &MoleculeStatistics,
        structure_count: usize,
        metadata: Option<MolecularMetadata>,
    ) -> Self {
        Self {
            format,
            atoms,
            bonds,
            center_of_mass: statistics.center_of_mass(),
            minimum_limits: statistics.minimum_limits(),
            maximum_limits: statistics.maximum_limits(),
            suggested_scale_factor: statistics.scale_factor(),
            structure_count: structure_count.max(1),
            metadata,
        }
    }

    /// The uniform scale used for display: the smallest of the per-axis factors.
    pub fn overall_scale_factor(&self) -> f32 {
        self.suggested_scale_factor.min()
    }

    pub fn default_visualization_style(&self) -> VisualizationStyle {
        if self.atoms.len() < BALL_AND_STICK_ATOM_LIMIT && !self.bonds.is_empty() {
            VisualizationStyle::BallAndStick
        } else {
            VisualizationStyle::Spacefilling
        }
    }
}
