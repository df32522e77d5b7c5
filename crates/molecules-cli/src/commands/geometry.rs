use crate::cli::GeometryArgs;
use crate::config::build_geometry_config;
use crate::error::Result;
use crate::utils::input::load_structure;
use molecules::render::builder::GeometryBuilder;
use molecules::render::geometry::MoleculeGeometry;
use std::fmt::Write;
use tracing::{info, warn};

pub fn run(args: GeometryArgs) -> Result<()> {
    let config = build_geometry_config(&args)?;
    let structure = load_structure(&args.file, args.format)?;

    let builder = GeometryBuilder::new(config);
    let mut atlas = builder.atlas_for(&structure);
    info!(
        "Building geometry for {} atom(s) with {:.0} texel patches",
        structure.atoms.len(),
        atlas.patch_texels()
    );
    let geometry = builder.build(&structure, &mut atlas);

    if geometry.skipped_atoms > 0 || geometry.skipped_bonds > 0 {
        warn!(
            "{} atom(s) and {} bond(s) did not fit in the index buffers",
            geometry.skipped_atoms, geometry.skipped_bonds
        );
    }
    println!("{}", format_report(&geometry));
    Ok(())
}

/// Per-element and bond buffer sizes of a built geometry.
pub fn format_report(geometry: &MoleculeGeometry) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Style {} | scale {:.4} | AO patch {:.4}",
        geometry.style, geometry.scale, geometry.ambient_occlusion_patch_width
    );
    let _ = writeln!(
        out,
        "{:<8} {:>8} {:>10} {:>10} {:>8}",
        "Element", "Atoms", "Vertices", "Triangles", "Radius"
    );
    for (element, buffers) in &geometry.spheres {
        let _ = writeln!(
            out,
            "{:<8} {:>8} {:>10} {:>10} {:>8.4}",
            element.symbol(),
            buffers.sphere_count(),
            buffers.vertex_count(),
            buffers.triangle_count(),
            geometry.sphere_radius(*element)
        );
    }
    if let Some(cylinders) = &geometry.cylinders {
        let _ = writeln!(
            out,
            "{:<8} {:>8} {:>10} {:>10} {:>8.4}",
            "Bonds",
            cylinders.bond_count(),
            cylinders.vertex_count(),
            cylinders.triangle_count(),
            geometry.bond_radius()
        );
    }
    let _ = write!(
        out,
        "Total: {} vertices, {} triangles",
        geometry.total_vertices(),
        geometry.total_triangles()
    );
    out
}
