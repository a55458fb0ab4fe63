pub mod geometry;
pub mod render;
pub mod text;
