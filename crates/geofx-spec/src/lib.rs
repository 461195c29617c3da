//! geofx specification types
//!
//! This crate provides the typed configuration shared by the geofx shading
//! backend, the data collaborators and the CLI. It performs no shading itself.
//!
//! # Modules
//!
//! - [`effect`]: Effect types and per-effect parameter structs
//! - [`material`]: Material descriptors and render hints
//! - [`scene`]: Scene files (layer stacks rendered at one clock value)
//! - [`error`]: Error types, validation codes and the `BackendError` trait
//!
//! # Example
//!
//! ```
//! use geofx_spec::{MaterialDescriptor, SideParams, BlendMode};
//!
//! let descriptor =
//!     MaterialDescriptor::from_params(SideParams::new([0.1, 0.4, 0.8]).into()).unwrap();
//! assert_eq!(descriptor.hints().blend_mode, BlendMode::Normal);
//! ```

pub mod effect;
pub mod error;
pub mod material;
pub mod scene;

pub use effect::{
    BarParams, EffectParams, EffectType, GearParams, GroundParams, SideParams, TerrainParams,
    DEFAULT_GROUND_COLOR, DEFAULT_SIDE_DEPTH, DEFAULT_TERRAIN_NOISE_SCALE,
};
pub use error::{
    BackendError, ErrorCode, ParamsError, SceneError, UnknownEffectType, ValidationError,
    ValidationResult,
};
pub use material::{BlendMode, MaterialDescriptor, RenderHints, ShadingFormula};
pub use scene::{SceneSpec, MAX_RESOLUTION, SCENE_VERSION};
