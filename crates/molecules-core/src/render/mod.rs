//! Turns a parsed [`MolecularStructure`](crate::core::models::structure::MolecularStructure)
//! into impostor buffers for an external renderer.
//!
//! Atoms become flat octagons and bonds flat quads; a shader is expected to ray-trace the
//! sphere and cylinder surfaces inside them. Nothing here talks to a GPU.

pub mod atlas;
pub mod builder;
pub mod config;
pub mod geometry;
pub mod impostor;
pub mod uniforms;
