pub mod charset;
pub mod error;
pub mod geometry;
pub mod mask;
pub mod metadata;
