use super::atlas::AmbientOcclusionAtlas;
use super::config::GeometryConfig;
use super::geometry::MoleculeGeometry;
use super::impostor::{
    CylinderBuffers, SphereBuffers, append_octagon_vertices, append_rectangular_bond_vertices,
};
use crate::core::models::coordinate::Coordinate;
use crate::core::models::element::Element;
use crate::core::models::structure::MolecularStructure;
use std::collections::BTreeMap;
use tracing::{debug, instrument, warn};

/// Builds impostor geometry for parsed structures under one configuration.
#[derive(Debug, Clone, Default)]
pub struct GeometryBuilder {
    config: GeometryConfig,
}

impl GeometryBuilder {
    pub fn new(config: GeometryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeometryConfig {
        &self.config
    }

    /// A fresh atlas sized for every atom of `structure`.
    pub fn atlas_for(&self, structure: &MolecularStructure) -> AmbientOcclusionAtlas {
        AmbientOcclusionAtlas::for_atom_count(
            structure.atoms.len(),
            self.config.ambient_occlusion_texture_width,
        )
    }

    /// Emits one octagon per atom, bucketed by element, and one quad per bond when the
    /// style draws bonds.
    ///
    /// Positions are moved so the center of mass sits at the origin, then scaled by the
    /// structure's overall scale factor times the configured zoom. Atoms or bonds that no
    /// longer fit in 16-bit indices are counted as skipped rather than emitted.
    #[instrument(skip_all, name = "geometry_builder", fields(atoms = structure.atoms.len(), bonds = structure.bonds.len()))]
    pub fn build(
        &self,
        structure: &MolecularStructure,
        atlas: &mut AmbientOcclusionAtlas,
    ) -> MoleculeGeometry {
        let style = self
            .config
            .style
            .unwrap_or_else(|| structure.default_visualization_style());
        let scale = structure.overall_scale_factor() * self.config.zoom;
        let center = structure.center_of_mass;
        let place = |location: &Coordinate| (location - center) * scale;

        let mut spheres: BTreeMap<Element, SphereBuffers> = BTreeMap::new();
        let mut skipped_atoms = 0;
        for atom in &structure.atoms {
            let buffers = spheres.entry(atom.element).or_default();
            if !append_octagon_vertices(&place(&atom.location), buffers, atlas) {
                skipped_atoms += 1;
            }
        }

        let mut skipped_bonds = 0;
        let cylinders = if style.shows_bonds() && !structure.bonds.is_empty() {
            let mut buffers = CylinderBuffers::new();
            for bond in &structure.bonds {
                if !append_rectangular_bond_vertices(
                    &place(&bond.start),
                    &place(&bond.end),
                    &mut buffers,
                ) {
                    skipped_bonds += 1;
                }
            }
            Some(buffers)
        } else {
            None
        };

        if skipped_atoms > 0 || skipped_bonds > 0 {
            warn!(
                skipped_atoms = skipped_atoms,
                skipped_bonds = skipped_bonds,
                "Structure exceeds the 16-bit index space; some impostors were not emitted"
            );
        }

        let geometry = MoleculeGeometry {
            style,
            scale,
            spheres,
            cylinders,
            ambient_occlusion_patch_width: atlas.patch_width(),
            skipped_atoms,
            skipped_bonds,
        };
        debug!(
            style = %geometry.style,
            elements = geometry.spheres.len(),
            vertices = geometry.total_vertices(),
            triangles = geometry.total_triangles(),
            "Built impostor geometry"
        );
        geometry
    }
}
