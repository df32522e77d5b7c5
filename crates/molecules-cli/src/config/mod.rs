use crate::cli::GeometryArgs;
use crate::error::Result;
use molecules::render::config::{GeometryConfig, GeometryConfigBuilder};
use tracing::debug;

/// Layers command-line overrides on top of the optional configuration file.
pub fn build_geometry_config(args: &GeometryArgs) -> Result<GeometryConfig> {
    let mut builder = match &args.config {
        Some(path) => {
            debug!("Reading geometry configuration from {:?}", path);
            GeometryConfigBuilder::from_toml_file(path)?
        }
        None => GeometryConfigBuilder::new(),
    };

    if let Some(style) = args.style {
        builder = builder.style(style);
    }
    if let Some(zoom) = args.zoom {
        builder = builder.zoom(zoom);
    }
    if let Some(width) = args.texture_width {
        builder = builder.ambient_occlusion_texture_width(width);
    }

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use molecules::core::models::structure::VisualizationStyle;
    use std::fs::File;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn args(config: Option<PathBuf>) -> GeometryArgs {
        GeometryArgs {
            file: PathBuf::from("input.pdb"),
            config,
            style: None,
            zoom: None,
            texture_width: None,
            format: None,
        }
    }

    #[test]
    fn no_file_and_no_flags_gives_defaults() {
        let config = build_geometry_config(&args(None)).unwrap();
        assert_eq!(config, GeometryConfig::default());
    }

    #[test]
    fn flags_override_file_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("geometry.toml");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "style = \"spacefilling\"").unwrap();
        writeln!(file, "zoom = 3.0").unwrap();
        writeln!(file, "ambient-occlusion-texture-width = 256").unwrap();

        let mut args = args(Some(path));
        args.style = Some(VisualizationStyle::BallAndStick);
        args.zoom = Some(0.5);

        let config = build_geometry_config(&args).unwrap();
        assert_eq!(config.style, Some(VisualizationStyle::BallAndStick));
        assert_eq!(config.zoom, 0.5);
        assert_eq!(config.ambient_occlusion_texture_width, 256);
    }

    #[test]
    fn invalid_flag_value_is_a_config_error() {
        let mut args = args(None);
        args.zoom = Some(0.0);
        assert!(matches!(
            build_geometry_config(&args),
            Err(CliError::Config(_))
        ));
    }
}
