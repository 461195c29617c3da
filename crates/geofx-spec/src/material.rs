//! Material descriptors: a shading formula bound to its parameters and render hints.
//!
//! A descriptor is built once per visual element and is never mutated. It does
//! not compute colors; the shading backend evaluates the bound formula.

use serde::{Deserialize, Serialize};

use crate::effect::{EffectParams, EffectType};
use crate::error::ParamsError;

/// Identifies the shading formula a descriptor evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadingFormula {
    /// Depth gradient with a sweeping scan band.
    SideScanLine,
    /// Noise and region-mask terrain colorization.
    TerrainColor,
    /// Vertical alpha gradient with a breathing pulse.
    BarPulse,
    /// Three concurrent expanding rings.
    GroundRipple,
    /// Rotating 16-tooth gear ring.
    GearRing,
}

impl ShadingFormula {
    /// The formula used for an effect type.
    pub fn for_effect(effect: EffectType) -> Self {
        match effect {
            EffectType::Side => ShadingFormula::SideScanLine,
            EffectType::Terrain => ShadingFormula::TerrainColor,
            EffectType::Bar => ShadingFormula::BarPulse,
            EffectType::Ground => ShadingFormula::GroundRipple,
            EffectType::Gear => ShadingFormula::GearRing,
        }
    }
}

/// How a shaded surface composites onto what is already drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Opaque replacement.
    Normal,
    /// Source-over alpha blending.
    Alpha,
    /// Additive glow: `dst + src * alpha`.
    Additive,
}

impl std::fmt::Display for BlendMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlendMode::Normal => write!(f, "normal"),
            BlendMode::Alpha => write!(f, "alpha"),
            BlendMode::Additive => write!(f, "additive"),
        }
    }
}

/// Hints for the rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderHints {
    /// Blend mode used when compositing.
    pub blend_mode: BlendMode,
    /// Whether the surface is translucent and must be sorted back-to-front.
    pub transparent: bool,
    /// Whether the surface writes depth.
    pub depth_write: bool,
    /// Whether back faces are drawn.
    pub double_sided: bool,
    /// Whether externally supplied distance fog attenuates the surface.
    pub fog: bool,
}

impl RenderHints {
    /// The fixed hints for an effect type.
    pub fn for_effect(effect: EffectType) -> Self {
        match effect {
            EffectType::Side | EffectType::Terrain => RenderHints {
                blend_mode: BlendMode::Normal,
                transparent: false,
                depth_write: true,
                double_sided: false,
                fog: true,
            },
            EffectType::Bar => RenderHints {
                blend_mode: BlendMode::Alpha,
                transparent: true,
                depth_write: false,
                double_sided: false,
                fog: true,
            },
            EffectType::Ground => RenderHints {
                blend_mode: BlendMode::Alpha,
                transparent: true,
                depth_write: false,
                double_sided: true,
                fog: true,
            },
            EffectType::Gear => RenderHints {
                blend_mode: BlendMode::Additive,
                transparent: true,
                depth_write: false,
                double_sided: true,
                fog: false,
            },
        }
    }
}

/// An immutable bundle of formula, bound parameters and render hints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialDescriptor {
    effect: EffectType,
    formula: ShadingFormula,
    params: EffectParams,
    hints: RenderHints,
}

impl MaterialDescriptor {
    /// Builds a descriptor from validated parameters.
    ///
    /// The effect type is taken from the parameter variant; the formula and
    /// hints follow from it.
    pub fn from_params(params: EffectParams) -> Result<Self, ParamsError> {
        params.validate()?;
        let effect = params.effect_type();
        Ok(Self {
            effect,
            formula: ShadingFormula::for_effect(effect),
            params,
            hints: RenderHints::for_effect(effect),
        })
    }

    pub fn effect(&self) -> EffectType {
        self.effect
    }

    pub fn formula(&self) -> ShadingFormula {
        self.formula
    }

    pub fn params(&self) -> &EffectParams {
        &self.params
    }

    pub fn hints(&self) -> RenderHints {
        self.hints
    }

    /// Serializes the descriptor to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{BarParams, GearParams, GroundParams, SideParams, TerrainParams};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hints_table() {
        let bar = RenderHints::for_effect(EffectType::Bar);
        assert_eq!(bar.blend_mode, BlendMode::Alpha);
        assert!(!bar.depth_write);
        assert!(bar.fog);

        let gear = RenderHints::for_effect(EffectType::Gear);
        assert_eq!(gear.blend_mode, BlendMode::Additive);
        assert!(!gear.fog);

        for effect in [EffectType::Side, EffectType::Terrain] {
            let hints = RenderHints::for_effect(effect);
            assert_eq!(hints.blend_mode, BlendMode::Normal);
            assert!(hints.depth_write);
            assert!(!hints.transparent);
        }
    }

    #[test]
    fn test_descriptor_binds_params_verbatim() {
        let all: Vec<EffectParams> = vec![
            SideParams::new([0.1, 0.2, 0.3])
                .with_scan_enabled(false)
                .with_depth(2.5)
                .into(),
            TerrainParams { noise_scale: 0.45 }.into(),
            BarParams {
                color: [0.9, 0.1, 0.0],
            }
            .into(),
            GroundParams {
                color: [0.3, 0.3, 0.7],
            }
            .into(),
            GearParams {
                color: [0.0, 0.8, 1.0],
            }
            .into(),
        ];

        for params in all {
            let descriptor = MaterialDescriptor::from_params(params.clone()).unwrap();
            assert_eq!(descriptor.params(), &params);
            assert_eq!(descriptor.effect(), params.effect_type());
            assert_eq!(
                descriptor.formula(),
                ShadingFormula::for_effect(params.effect_type())
            );
            assert_eq!(
                descriptor.hints(),
                RenderHints::for_effect(params.effect_type())
            );
        }
    }

    #[test]
    fn test_descriptor_rejects_invalid_params() {
        let params = EffectParams::Bar(BarParams {
            color: [2.0, 0.0, 0.0],
        });
        assert!(MaterialDescriptor::from_params(params).is_err());
    }

    #[test]
    fn test_descriptor_json_shape() {
        let descriptor = MaterialDescriptor::from_params(
            GearParams {
                color: [1.0, 1.0, 0.0],
            }
            .into(),
        )
        .unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&descriptor.to_json_pretty().unwrap()).unwrap();
        assert_eq!(value["effect"], "gear");
        assert_eq!(value["formula"], "gear_ring");
        assert_eq!(value["params"]["effect"], "gear");
        assert_eq!(value["hints"]["blend_mode"], "additive");
        assert_eq!(value["hints"]["fog"], false);
    }
}
