use super::impostor::{CylinderBuffers, SphereBuffers};
use crate::core::models::element::{Color, Element};
use crate::core::models::structure::VisualizationStyle;
use std::collections::BTreeMap;

pub const BOND_RADIUS: f32 = 0.15;
pub const BOND_COLOR: Color = Color::new(0.75, 0.75, 0.75);
const BALL_AND_STICK_RADIUS_FACTOR: f32 = 0.35;

/// Renderer-ready buffers for one molecule, built in a single pass.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeGeometry {
    pub style: VisualizationStyle,
    /// Overall scale factor times zoom, already applied to every position.
    pub scale: f32,
    pub spheres: BTreeMap<Element, SphereBuffers>,
    /// Present only for ball-and-stick structures that have bonds.
    pub cylinders: Option<CylinderBuffers>,
    pub ambient_occlusion_patch_width: f32,
    pub skipped_atoms: usize,
    pub skipped_bonds: usize,
}

impl MoleculeGeometry {
    fn radius_factor(&self) -> f32 {
        match self.style {
            VisualizationStyle::Spacefilling => 1.0,
            VisualizationStyle::BallAndStick => BALL_AND_STICK_RADIUS_FACTOR,
        }
    }

    /// Impostor radius for an element in display units.
    pub fn sphere_radius(&self, element: Element) -> f32 {
        element.vdw_radius() * self.scale * self.radius_factor()
    }

    pub fn sphere_color(&self, element: Element) -> Color {
        element.color()
    }

    pub fn bond_radius(&self) -> f32 {
        BOND_RADIUS * self.scale
    }

    pub fn bond_color(&self) -> Color {
        BOND_COLOR
    }

    pub fn atom_count(&self) -> usize {
        self.spheres.values().map(SphereBuffers::sphere_count).sum()
    }

    pub fn bond_count(&self) -> usize {
        self.cylinders.as_ref().map_or(0, CylinderBuffers::bond_count)
    }

    pub fn total_vertices(&self) -> usize {
        self.spheres
            .values()
            .map(SphereBuffers::vertex_count)
            .sum::<usize>()
            + self.cylinders.as_ref().map_or(0, CylinderBuffers::vertex_count)
    }

    pub fn total_triangles(&self) -> usize {
        self.spheres
            .values()
            .map(SphereBuffers::triangle_count)
            .sum::<usize>()
            + self.cylinders.as_ref().map_or(0, CylinderBuffers::triangle_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(style: VisualizationStyle, scale: f32) -> MoleculeGeometry {
        MoleculeGeometry {
            style,
            scale,
            spheres: BTreeMap::new(),
            cylinders: None,
            ambient_occlusion_patch_width: 1.0,
            skipped_atoms: 0,
            skipped_bonds: 0,
        }
    }

    #[test]
    fn sphere_radius_uses_full_vdw_radius_when_spacefilling() {
        let geometry = geometry(VisualizationStyle::Spacefilling, 0.5);
        assert!((geometry.sphere_radius(Element::Carbon) - 0.85).abs() < 1e-6);
    }

    #[test]
    fn sphere_radius_shrinks_for_ball_and_stick() {
        let geometry = geometry(VisualizationStyle::BallAndStick, 2.0);
        assert!((geometry.sphere_radius(Element::Hydrogen) - 1.2 * 2.0 * 0.35).abs() < 1e-6);
    }

    #[test]
    fn bond_radius_and_color_are_fixed_up_to_scale() {
        let geometry = geometry(VisualizationStyle::BallAndStick, 2.0);
        assert!((geometry.bond_radius() - 0.3).abs() < 1e-6);
        assert_eq!(geometry.bond_color(), Color::new(0.75, 0.75, 0.75));
        assert_eq!(geometry.sphere_color(Element::Oxygen), Element::Oxygen.color());
    }

    #[test]
    fn empty_geometry_has_no_vertices_or_triangles() {
        let geometry = geometry(VisualizationStyle::Spacefilling, 1.0);
        assert_eq!(geometry.atom_count(), 0);
        assert_eq!(geometry.bond_count(), 0);
        assert_eq!(geometry.total_vertices(), 0);
        assert_eq!(geometry.total_triangles(), 0);
    }
}
