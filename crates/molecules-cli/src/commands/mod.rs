pub mod export;
pub mod geometry;
pub mod inspect;
