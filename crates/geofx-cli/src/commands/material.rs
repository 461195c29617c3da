//! Material command implementation
//!
//! Builds a material descriptor through the factory and prints it.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use geofx_backend_shading::{Color, MaterialFactory};
use geofx_spec::{
    BarParams, EffectParams, EffectType, GearParams, GroundParams, MaterialDescriptor, SideParams,
    TerrainParams,
};

use super::json_output::{error_codes, print_failure, JsonError, JsonOutput};

/// Tint used when no `--color` is given (the dashboard's cyan, `#00aaff`).
pub const DEFAULT_TINT: [f64; 3] = [0.0, 170.0 / 255.0, 1.0];

/// Default parameters for `effect`.
///
/// `color` replaces the tint of tinted effects and is ignored by terrain;
/// `scan_enabled` only affects side walls.
pub fn default_params(effect: EffectType, color: Option<[f64; 3]>, scan_enabled: bool) -> EffectParams {
    let tint = color.unwrap_or(DEFAULT_TINT);
    match effect {
        EffectType::Side => SideParams::new(tint).with_scan_enabled(scan_enabled).into(),
        EffectType::Terrain => TerrainParams::default().into(),
        EffectType::Bar => BarParams::new(tint).into(),
        EffectType::Ground => match color {
            Some(color) => GroundParams { color }.into(),
            None => GroundParams::default().into(),
        },
        EffectType::Gear => GearParams::new(tint).into(),
    }
}

/// Parses a `#rrggbb` argument into an RGB triple.
pub fn parse_color(hex: &str) -> Result<[f64; 3], String> {
    Color::from_hex_rgb(hex).map(|c| c.to_array())
}

/// Run the material command
///
/// # Arguments
/// * `effect` - Effect type name
/// * `color` - Optional `#rrggbb` tint
/// * `no_scan` - Disable the side-wall scan line
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(effect: &str, color: Option<&str>, no_scan: bool, json_output: bool) -> Result<ExitCode> {
    let built = build(effect, color, !no_scan);
    if json_output {
        return match built {
            Ok(descriptor) => {
                JsonOutput::success(&descriptor).print()?;
                Ok(ExitCode::SUCCESS)
            }
            Err(error) => {
                print_failure(error)?;
                Ok(ExitCode::from(1))
            }
        };
    }

    let descriptor = built.map_err(|e| anyhow::anyhow!("{} ({})", e.message, e.code))?;
    let hints = descriptor.hints();
    println!(
        "{} {} ({} blend{})",
        "Material:".cyan().bold(),
        descriptor.effect(),
        hints.blend_mode,
        if hints.fog { ", fog" } else { "" }
    );
    let json = descriptor
        .to_json_pretty()
        .context("Failed to serialize material descriptor")?;
    println!("{}", json);
    Ok(ExitCode::SUCCESS)
}

fn build(effect: &str, color: Option<&str>, scan_enabled: bool) -> Result<MaterialDescriptor, JsonError> {
    let effect: EffectType = effect
        .parse()
        .map_err(|e: geofx_spec::UnknownEffectType| {
            JsonError::new(error_codes::UNKNOWN_EFFECT, e.to_string())
        })?;
    let color = color
        .map(parse_color)
        .transpose()
        .map_err(|e| JsonError::new(error_codes::INVALID_COLOR, e))?;

    let params = default_params(effect, color, scan_enabled);
    MaterialFactory::new()
        .build(effect, params)
        .map_err(|e| JsonError::from_backend(&e))
}
