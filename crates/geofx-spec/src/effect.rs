//! Effect types and their per-surface parameter structures.
//!
//! Every visual surface of the map (terrain top, region side-wall, data bar,
//! ground plane, decorative gear ring) is configured by exactly one of the
//! parameter structs below. The set of fields is fixed per effect; unknown keys
//! are rejected when parsing.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParamsError, UnknownEffectType};

/// Default sweep depth of the side-wall scan line (extrusion depth of a region).
pub const DEFAULT_SIDE_DEPTH: f64 = 3.0;

/// Default base frequency of the terrain noise octaves.
pub const DEFAULT_TERRAIN_NOISE_SCALE: f64 = 0.3;

/// Default ground ripple color.
pub const DEFAULT_GROUND_COLOR: [f64; 3] = [0.0, 0.5, 1.0];

/// The visual surface types the engine can shade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectType {
    /// Region side-wall with a sweeping scan line.
    Side,
    /// Region top surface colored by noise and geographic masks.
    Terrain,
    /// Statistical data bar with a breathing pulse.
    Bar,
    /// Ground plane with expanding ripples.
    Ground,
    /// Rotating decorative gear ring.
    Gear,
}

impl EffectType {
    /// All effect types, in declaration order.
    pub const ALL: [EffectType; 5] = [
        EffectType::Side,
        EffectType::Terrain,
        EffectType::Bar,
        EffectType::Ground,
        EffectType::Gear,
    ];

    /// Returns the effect name as used in scene files.
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectType::Side => "side",
            EffectType::Terrain => "terrain",
            EffectType::Bar => "bar",
            EffectType::Ground => "ground",
            EffectType::Gear => "gear",
        }
    }
}

impl std::fmt::Display for EffectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectType {
    type Err = UnknownEffectType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "side" => Ok(EffectType::Side),
            "terrain" => Ok(EffectType::Terrain),
            "bar" => Ok(EffectType::Bar),
            "ground" => Ok(EffectType::Ground),
            "gear" => Ok(EffectType::Gear),
            other => Err(UnknownEffectType(other.to_string())),
        }
    }
}

/// Parameters for a region side-wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SideParams {
    /// Base RGB tint, each channel in [0, 1].
    pub color: [f64; 3],
    /// Whether the scan line is drawn. Re-read on every evaluation.
    #[serde(default = "default_true")]
    pub scan_enabled: bool,
    /// Extrusion depth; also the period of the scan sweep.
    #[serde(default = "default_side_depth")]
    pub depth: f64,
}

/// Parameters for the terrain surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TerrainParams {
    /// Base frequency of the first noise octave.
    #[serde(default = "default_noise_scale")]
    pub noise_scale: f64,
}

/// Parameters for a data bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BarParams {
    /// Base RGB tint, each channel in [0, 1].
    pub color: [f64; 3],
}

/// Parameters for the ground ripple plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroundParams {
    /// Ripple RGB color, each channel in [0, 1].
    #[serde(default = "default_ground_color")]
    pub color: [f64; 3],
}

/// Parameters for the decorative gear ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GearParams {
    /// Base RGB tint, each channel in [0, 1].
    pub color: [f64; 3],
}

fn default_true() -> bool {
    true
}

fn default_side_depth() -> f64 {
    DEFAULT_SIDE_DEPTH
}

fn default_noise_scale() -> f64 {
    DEFAULT_TERRAIN_NOISE_SCALE
}

fn default_ground_color() -> [f64; 3] {
    DEFAULT_GROUND_COLOR
}

impl SideParams {
    /// Creates side-wall parameters with the scan line enabled and the default depth.
    pub fn new(color: [f64; 3]) -> Self {
        Self {
            color,
            scan_enabled: true,
            depth: DEFAULT_SIDE_DEPTH,
        }
    }

    /// Sets whether the scan line is drawn.
    pub fn with_scan_enabled(mut self, enabled: bool) -> Self {
        self.scan_enabled = enabled;
        self
    }

    /// Sets the extrusion depth.
    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = depth;
        self
    }
}

impl BarParams {
    pub fn new(color: [f64; 3]) -> Self {
        Self { color }
    }
}

impl GearParams {
    pub fn new(color: [f64; 3]) -> Self {
        Self { color }
    }
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            noise_scale: DEFAULT_TERRAIN_NOISE_SCALE,
        }
    }
}

impl Default for GroundParams {
    fn default() -> Self {
        Self {
            color: DEFAULT_GROUND_COLOR,
        }
    }
}

/// Per-surface effect configuration, tagged by effect name.
///
/// ```
/// use geofx_spec::effect::{EffectParams, EffectType};
///
/// let params: EffectParams =
///     serde_json::from_str(r#"{"effect": "bar", "color": [1.0, 0.0, 0.0]}"#).unwrap();
/// assert_eq!(params.effect_type(), EffectType::Bar);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum EffectParams {
    Side(SideParams),
    Terrain(TerrainParams),
    Bar(BarParams),
    Ground(GroundParams),
    Gear(GearParams),
}

impl EffectParams {
    /// The effect type these parameters configure.
    pub fn effect_type(&self) -> EffectType {
        match self {
            EffectParams::Side(_) => EffectType::Side,
            EffectParams::Terrain(_) => EffectType::Terrain,
            EffectParams::Bar(_) => EffectType::Bar,
            EffectParams::Ground(_) => EffectType::Ground,
            EffectParams::Gear(_) => EffectType::Gear,
        }
    }

    /// The base tint, if the effect has one.
    pub fn tint(&self) -> Option<[f64; 3]> {
        match self {
            EffectParams::Side(p) => Some(p.color),
            EffectParams::Terrain(_) => None,
            EffectParams::Bar(p) => Some(p.color),
            EffectParams::Ground(p) => Some(p.color),
            EffectParams::Gear(p) => Some(p.color),
        }
    }

    /// Validates every field.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if let Some(color) = self.tint() {
            validate_color("color", color)?;
        }
        match self {
            EffectParams::Side(p) => validate_positive("depth", p.depth),
            EffectParams::Terrain(p) => validate_positive("noise_scale", p.noise_scale),
            _ => Ok(()),
        }
    }
}

impl From<SideParams> for EffectParams {
    fn from(p: SideParams) -> Self {
        EffectParams::Side(p)
    }
}

impl From<TerrainParams> for EffectParams {
    fn from(p: TerrainParams) -> Self {
        EffectParams::Terrain(p)
    }
}

impl From<BarParams> for EffectParams {
    fn from(p: BarParams) -> Self {
        EffectParams::Bar(p)
    }
}

impl From<GroundParams> for EffectParams {
    fn from(p: GroundParams) -> Self {
        EffectParams::Ground(p)
    }
}

impl From<GearParams> for EffectParams {
    fn from(p: GearParams) -> Self {
        EffectParams::Gear(p)
    }
}

/// Checks that an RGB triple is finite and within [0, 1].
pub fn validate_color(field: &'static str, color: [f64; 3]) -> Result<(), ParamsError> {
    if color.iter().any(|c| !c.is_finite()) {
        return Err(ParamsError::NonFiniteColor { field });
    }
    for (channel, &value) in color.iter().enumerate() {
        if !(0.0..=1.0).contains(&value) {
            return Err(ParamsError::ColorOutOfRange {
                field,
                channel,
                value,
            });
        }
    }
    Ok(())
}

fn validate_positive(field: &'static str, value: f64) -> Result<(), ParamsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParamsError::NotPositive { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_effect_type_parse() {
        for effect in EffectType::ALL {
            assert_eq!(effect.as_str().parse::<EffectType>().unwrap(), effect);
        }
        let err = "hologram".parse::<EffectType>().unwrap_err();
        assert_eq!(err, UnknownEffectType("hologram".to_string()));
    }

    #[test]
    fn test_effect_type_serde() {
        let json = serde_json::to_string(&EffectType::Ground).unwrap();
        assert_eq!(json, "\"ground\"");
    }

    #[test]
    fn test_side_defaults_from_json() {
        let params: EffectParams =
            serde_json::from_str(r#"{"effect": "side", "color": [0.1, 0.2, 0.3]}"#).unwrap();
        assert_eq!(
            params,
            EffectParams::Side(SideParams {
                color: [0.1, 0.2, 0.3],
                scan_enabled: true,
                depth: 3.0,
            })
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<EffectParams, _> =
            serde_json::from_str(r#"{"effect": "bar", "color": [0.1, 0.2, 0.3], "speed": 2.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_effect_rejected() {
        let result: Result<EffectParams, _> =
            serde_json::from_str(r#"{"effect": "lava", "color": [0.1, 0.2, 0.3]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_terrain_and_ground_defaults() {
        let terrain: EffectParams = serde_json::from_str(r#"{"effect": "terrain"}"#).unwrap();
        assert_eq!(terrain, EffectParams::Terrain(TerrainParams::default()));

        let ground: EffectParams = serde_json::from_str(r#"{"effect": "ground"}"#).unwrap();
        assert_eq!(ground.tint(), Some([0.0, 0.5, 1.0]));
    }

    #[test]
    fn test_validate_color() {
        assert!(validate_color("color", [0.0, 0.5, 1.0]).is_ok());
        assert_eq!(
            validate_color("color", [0.0, 1.2, 1.0]),
            Err(ParamsError::ColorOutOfRange {
                field: "color",
                channel: 1,
                value: 1.2
            })
        );
        assert_eq!(
            validate_color("color", [f64::NAN, 0.0, 0.0]),
            Err(ParamsError::NonFiniteColor { field: "color" })
        );
    }

    #[test]
    fn test_validate_depth_and_scale() {
        let side = EffectParams::from(SideParams::new([0.2, 0.2, 0.2]).with_depth(0.0));
        assert!(matches!(
            side.validate(),
            Err(ParamsError::NotPositive { field: "depth", .. })
        ));

        let terrain = EffectParams::Terrain(TerrainParams {
            noise_scale: f64::INFINITY,
        });
        assert!(matches!(
            terrain.validate(),
            Err(ParamsError::NotPositive {
                field: "noise_scale",
                ..
            })
        ));
    }
}
