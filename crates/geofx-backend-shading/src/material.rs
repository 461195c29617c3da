//! Material factory: builds immutable descriptors and evaluates their bound
//! formula for one surface point.

use thiserror::Error;

use geofx_spec::{
    BackendError, EffectParams, EffectType, MaterialDescriptor, ParamsError, UnknownEffectType,
};

use crate::clock::FrameTime;
use crate::color::Color;
use crate::effects::{bar_color, gear_color, ground_color, side_color};
use crate::math::finite_or;
use crate::noise::{Noise2D, NoiseField, SimplexNoise};
use crate::terrain::{Palette, TerrainColorizer};

/// Errors from building a material.
#[derive(Debug, Error)]
pub enum MaterialError {
    #[error(transparent)]
    UnknownEffectType(#[from] UnknownEffectType),

    #[error("{expected} material was given {found} parameters")]
    ParamsMismatch {
        expected: EffectType,
        found: EffectType,
    },

    #[error("Invalid parameters: {0}")]
    InvalidParams(#[from] ParamsError),
}

impl BackendError for MaterialError {
    fn code(&self) -> &'static str {
        match self {
            MaterialError::UnknownEffectType(_) => "SHADING_001",
            MaterialError::ParamsMismatch { .. } => "SHADING_002",
            MaterialError::InvalidParams(_) => "SHADING_003",
        }
    }

    fn category(&self) -> &'static str {
        "shading"
    }
}

/// Distance fog supplied by the renderer for one surface point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FogInput {
    /// Fog amount; clamped to [0, 1] when applied.
    pub factor: f64,
    /// Fog color.
    pub color: Color,
}

/// Everything the factory needs to shade one surface point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShadeInput {
    /// Map-local position. `z` is the extrusion coordinate for side walls.
    pub position: [f64; 3],
    /// Surface coordinate in [0, 1]^2.
    pub uv: [f64; 2],
    /// Fog at this point, if the renderer computes any.
    pub fog: Option<FogInput>,
}

impl ShadeInput {
    pub fn new(position: [f64; 3], uv: [f64; 2]) -> Self {
        Self {
            position,
            uv,
            fog: None,
        }
    }

    pub fn with_fog(mut self, factor: f64, color: Color) -> Self {
        self.fog = Some(FogInput { factor, color });
        self
    }

    /// Copy with every non-finite coordinate, fog factor or fog channel
    /// replaced by 0.
    pub fn sanitized(&self) -> Self {
        Self {
            position: self.position.map(|v| finite_or(v, 0.0)),
            uv: self.uv.map(|v| finite_or(v, 0.0)),
            fog: self.fog.map(|fog| FogInput {
                factor: finite_or(fog.factor, 0.0),
                color: fog.color.sanitized(),
            }),
        }
    }
}

/// Builds material descriptors and shades points with them.
///
/// The factory owns the terrain colorizer (palette and noise); every other
/// formula is stateless.
#[derive(Debug, Clone, Copy)]
pub struct MaterialFactory<N: Noise2D = SimplexNoise> {
    terrain: TerrainColorizer<N>,
}

impl MaterialFactory<SimplexNoise> {
    pub fn new() -> Self {
        Self {
            terrain: TerrainColorizer::new(),
        }
    }

    /// A factory whose terrain uses a custom palette.
    pub fn with_palette(palette: Palette) -> Self {
        Self {
            terrain: TerrainColorizer::with_parts(palette, NoiseField::simplex()),
        }
    }
}

impl Default for MaterialFactory<SimplexNoise> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Noise2D> MaterialFactory<N> {
    pub fn with_terrain(terrain: TerrainColorizer<N>) -> Self {
        Self { terrain }
    }

    pub fn terrain(&self) -> &TerrainColorizer<N> {
        &self.terrain
    }

    /// Builds a descriptor for `effect` from `params`.
    ///
    /// The parameter variant must match the requested effect type.
    pub fn build(
        &self,
        effect: EffectType,
        params: EffectParams,
    ) -> Result<MaterialDescriptor, MaterialError> {
        let found = params.effect_type();
        if found != effect {
            return Err(MaterialError::ParamsMismatch {
                expected: effect,
                found,
            });
        }
        Ok(MaterialDescriptor::from_params(params)?)
    }

    /// Like [`build`](Self::build), with the effect type given by name.
    pub fn build_named(
        &self,
        name: &str,
        params: EffectParams,
    ) -> Result<MaterialDescriptor, MaterialError> {
        let effect: EffectType = name.parse()?;
        self.build(effect, params)
    }

    /// Evaluates the descriptor's formula at one point.
    ///
    /// Fog is applied only to materials that take part in fog. The returned
    /// color and alpha are clamped to [0, 1].
    pub fn shade(
        &self,
        descriptor: &MaterialDescriptor,
        input: &ShadeInput,
        frame: FrameTime,
    ) -> Color {
        let input = input.sanitized();
        let [x, y, z] = input.position;

        let color = match descriptor.params() {
            EffectParams::Side(params) => side_color(z, frame, params),
            EffectParams::Terrain(params) => self.terrain.color_at_scale([x, y], params.noise_scale),
            EffectParams::Bar(params) => bar_color(input.uv, frame, params),
            EffectParams::Ground(params) => ground_color(input.uv, frame, params),
            EffectParams::Gear(params) => gear_color(input.uv, frame, params),
        };

        let color = match input.fog {
            Some(fog) if descriptor.hints().fog => apply_fog(color, &fog),
            _ => color,
        };
        color.clamp()
    }
}

/// Mixes the rgb channels toward the fog color; alpha is kept.
fn apply_fog(color: Color, fog: &FogInput) -> Color {
    let t = fog.factor.clamp(0.0, 1.0);
    color.mix(&fog.color.with_alpha(color.a), t)
}
