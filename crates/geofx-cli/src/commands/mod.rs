//! CLI command implementations

pub mod bar;
pub mod geometry;
pub mod json_output;
pub mod material;
pub mod render;
pub mod stats;
