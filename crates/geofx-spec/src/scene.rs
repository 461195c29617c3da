//! Scene files: a stack of effect layers rendered at one clock value.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::effect::{validate_color, EffectParams};
use crate::error::{ErrorCode, SceneError, ValidationError, ValidationResult};

/// Current scene file version.
pub const SCENE_VERSION: u32 = 1;

/// Largest accepted edge of a rendered preview, in pixels.
pub const MAX_RESOLUTION: u32 = 4096;

/// A preview scene: layers composited bottom to top over a background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneSpec {
    /// Scene file version.
    pub scene_version: u32,
    /// Output resolution `[width, height]`.
    pub resolution: [u32; 2],
    /// Animation clock value, in seconds.
    #[serde(default)]
    pub time: f64,
    /// Background RGB color.
    #[serde(default)]
    pub background: [f64; 3],
    /// Layers in draw order.
    pub layers: Vec<EffectParams>,
}

impl SceneSpec {
    /// Creates an empty scene at the given resolution.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            scene_version: SCENE_VERSION,
            resolution: [width, height],
            time: 0.0,
            background: [0.0, 0.0, 0.0],
            layers: Vec::new(),
        }
    }

    /// Sets the clock value.
    pub fn with_time(mut self, time: f64) -> Self {
        self.time = time;
        self
    }

    /// Sets the background color.
    pub fn with_background(mut self, background: [f64; 3]) -> Self {
        self.background = background;
        self
    }

    /// Appends a layer.
    pub fn with_layer(mut self, layer: impl Into<EffectParams>) -> Self {
        self.layers.push(layer.into());
        self
    }

    /// Parses a scene from JSON.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a scene file.
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serializes the scene to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates the scene, collecting every problem found.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.scene_version != SCENE_VERSION {
            result.add_error(ValidationError::with_path(
                ErrorCode::UnsupportedSceneVersion,
                format!(
                    "scene_version {} is not supported (expected {})",
                    self.scene_version, SCENE_VERSION
                ),
                "scene_version",
            ));
        }

        let [width, height] = self.resolution;
        if width == 0 || height == 0 || width > MAX_RESOLUTION || height > MAX_RESOLUTION {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidResolution,
                format!(
                    "resolution {}x{} must be within 1..={} on each axis",
                    width, height, MAX_RESOLUTION
                ),
                "resolution",
            ));
        }

        if !self.time.is_finite() {
            result.add_error(ValidationError::with_path(
                ErrorCode::NonFiniteTime,
                "time must be finite",
                "time",
            ));
        }

        if let Err(e) = validate_color("background", self.background) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidBackground,
                e.to_string(),
                "background",
            ));
        }

        if self.layers.is_empty() {
            result.add_error(ValidationError::with_path(
                ErrorCode::NoLayers,
                "scene must declare at least one layer",
                "layers",
            ));
        }

        for (i, layer) in self.layers.iter().enumerate() {
            if let Err(e) = layer.validate() {
                result.add_error(ValidationError::with_path(
                    ErrorCode::InvalidLayerParams,
                    e.to_string(),
                    format!("layers[{}]", i),
                ));
            }
        }

        result
    }
}
