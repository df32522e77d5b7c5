use crate::core::models::structure::VisualizationStyle;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_ZOOM: f32 = 1.0;
pub const DEFAULT_AMBIENT_OCCLUSION_TEXTURE_WIDTH: u32 = 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

/// Settings for one geometry build.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryConfig {
    /// `None` defers to the structure's own default style.
    pub style: Option<VisualizationStyle>,
    pub zoom: f32,
    pub ambient_occlusion_texture_width: u32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            style: None,
            zoom: DEFAULT_ZOOM,
            ambient_occlusion_texture_width: DEFAULT_AMBIENT_OCCLUSION_TEXTURE_WIDTH,
        }
    }
}

impl GeometryConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        GeometryConfigBuilder::from_toml_file(path)?.build()
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct GeometryConfigFile {
    style: Option<VisualizationStyle>,
    zoom: Option<f32>,
    ambient_occlusion_texture_width: Option<u32>,
}

#[derive(Debug, Default, Clone)]
pub struct GeometryConfigBuilder {
    style: Option<VisualizationStyle>,
    zoom: Option<f32>,
    ambient_occlusion_texture_width: Option<u32>,
}

impl GeometryConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a builder from a TOML file; setters called afterwards take precedence.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let file: GeometryConfigFile =
            toml::from_str(&content).map_err(|e| ConfigError::Toml {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
        Ok(Self {
            style: file.style,
            zoom: file.zoom,
            ambient_occlusion_texture_width: file.ambient_occlusion_texture_width,
        })
    }

    pub fn style(mut self, style: VisualizationStyle) -> Self {
        self.style = Some(style);
        self
    }
    pub fn zoom(mut self, zoom: f32) -> Self {
        self.zoom = Some(zoom);
        self
    }
    pub fn ambient_occlusion_texture_width(mut self, width: u32) -> Self {
        self.ambient_occlusion_texture_width = Some(width);
        self
    }

    pub fn build(self) -> Result<GeometryConfig, ConfigError> {
        let zoom = self.zoom.unwrap_or(DEFAULT_ZOOM);
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ConfigError::InvalidValue {
                name: "zoom",
                reason: format!("must be a positive finite number, got {zoom}"),
            });
        }
        let width = self
            .ambient_occlusion_texture_width
            .unwrap_or(DEFAULT_AMBIENT_OCCLUSION_TEXTURE_WIDTH);
        if width == 0 {
            return Err(ConfigError::InvalidValue {
                name: "ambient-occlusion-texture-width",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(GeometryConfig {
            style: self.style,
            zoom,
            ambient_occlusion_texture_width: width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("geometry.toml");
        let mut file = File::create(&path).unwrap();
        write!(file, "{}", content).unwrap();
        (dir, path)
    }

    #[test]
    fn builder_without_values_yields_defaults() {
        let config = GeometryConfigBuilder::new().build().unwrap();
        assert_eq!(config, GeometryConfig::default());
        assert_eq!(config.zoom, 1.0);
        assert_eq!(config.ambient_occlusion_texture_width, 1024);
        assert!(config.style.is_none());
    }

    #[test]
    fn builder_applies_every_setter() {
        let config = GeometryConfigBuilder::new()
            .style(VisualizationStyle::BallAndStick)
            .zoom(2.5)
            .ambient_occlusion_texture_width(512)
            .build()
            .unwrap();
        assert_eq!(config.style, Some(VisualizationStyle::BallAndStick));
        assert_eq!(config.zoom, 2.5);
        assert_eq!(config.ambient_occlusion_texture_width, 512);
    }

    #[test]
    fn build_rejects_non_positive_or_non_finite_zoom() {
        for zoom in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let result = GeometryConfigBuilder::new().zoom(zoom).build();
            assert!(
                matches!(result, Err(ConfigError::InvalidValue { name: "zoom", .. })),
                "zoom {zoom} should be rejected"
            );
        }
    }

    #[test]
    fn build_rejects_zero_texture_width() {
        let result = GeometryConfigBuilder::new()
            .ambient_occlusion_texture_width(0)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                name: "ambient-occlusion-texture-width",
                ..
            })
        ));
    }

    #[test]
    fn load_reads_kebab_case_keys() {
        let (_dir, path) = write_config(
            "style = \"ball-and-stick\"\nzoom = 1.5\nambient-occlusion-texture-width = 2048\n",
        );
        let config = GeometryConfig::load(&path).unwrap();
        assert_eq!(config.style, Some(VisualizationStyle::BallAndStick));
        assert_eq!(config.zoom, 1.5);
        assert_eq!(config.ambient_occlusion_texture_width, 2048);
    }

    #[test]
    fn load_fills_missing_keys_with_defaults() {
        let (_dir, path) = write_config("style = \"spacefilling\"\n");
        let config = GeometryConfig::load(&path).unwrap();
        assert_eq!(config.style, Some(VisualizationStyle::Spacefilling));
        assert_eq!(config.zoom, DEFAULT_ZOOM);
    }

    #[test]
    fn setters_override_file_values() {
        let (_dir, path) = write_config("zoom = 3.0\n");
        let config = GeometryConfigBuilder::from_toml_file(&path)
            .unwrap()
            .zoom(0.5)
            .build()
            .unwrap();
        assert_eq!(config.zoom, 0.5);
    }

    #[test]
    fn load_rejects_unknown_keys() {
        let (_dir, path) = write_config("zoom = 1.0\nshading = \"phong\"\n");
        assert!(matches!(
            GeometryConfig::load(&path),
            Err(ConfigError::Toml { .. })
        ));
    }

    #[test]
    fn load_rejects_unknown_style() {
        let (_dir, path) = write_config("style = \"wireframe\"\n");
        assert!(matches!(
            GeometryConfig::load(&path),
            Err(ConfigError::Toml { .. })
        ));
    }

    #[test]
    fn load_reports_missing_file_as_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = GeometryConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn load_validates_values_from_file() {
        let (_dir, path) = write_config("zoom = -2.0\n");
        assert!(matches!(
            GeometryConfig::load(&path),
            Err(ConfigError::InvalidValue { name: "zoom", .. })
        ));
    }
}
