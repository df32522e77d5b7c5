pub mod context;
pub mod residue;
