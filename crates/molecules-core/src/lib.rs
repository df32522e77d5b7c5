//! # Molecules Core Library
//!
//! Parses molecular structure files into a uniform model of atoms and bonds and turns that
//! model into impostor geometry buffers for a sphere/cylinder ray-casting renderer.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers with a one-way dependency between them.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`MolecularStructure`, `Atom`, `Bond`),
//!   static chemistry tables (elements, residue bond topology) and the PDB, SDF and XYZ readers.
//!
//! - **[`render`]: The Geometry Layer.** Converts a parsed structure into per-element octagon
//!   impostors and a merged bond buffer, together with the uniforms a renderer needs to draw them.
//!   Decompression, windowing and GPU submission stay with the host application.

pub mod core;
pub mod render;
