//! geofx CLI library.
//!
//! The commands behind the `geofx` binary: preview renders of the shading
//! formulas, material descriptors and the dashboard's mock data and geometry.

pub mod commands;
