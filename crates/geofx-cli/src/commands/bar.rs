//! Bar command implementation
//!
//! Prints the data bar a region gets: its value, its base color and the
//! material tint that color becomes.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

use geofx_backend_shading::Color;
use geofx_data::{BarDatum, MockDataSource, Origin};

use super::json_output::JsonOutput;

#[derive(Debug, Serialize)]
struct BarResult<'a> {
    name: &'a str,
    seed: u32,
    hex_color: String,
    /// Linear RGB tint handed to the bar material.
    tint: [f64; 3],
    #[serde(flatten)]
    bar: BarDatum,
}

/// Run the bar command
///
/// # Arguments
/// * `name` - Region name; matched loosely against the bar table
/// * `seed` - Mock data seed
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(name: &str, seed: u32, json_output: bool) -> Result<ExitCode> {
    let bar = MockDataSource::new(seed).bar_data(name);
    let tint = bar_tint(&bar);

    if json_output {
        JsonOutput::success(BarResult {
            name,
            seed,
            hex_color: bar.hex_color(),
            tint,
            bar,
        })
        .print()?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Bar:".cyan().bold(), name);
    println!("  {} {}", "Value:".dimmed(), bar.value);
    println!("  {} {}", "Color:".dimmed(), bar.hex_color());
    println!(
        "  {} [{:.3}, {:.3}, {:.3}]",
        "Tint:".dimmed(),
        tint[0],
        tint[1],
        tint[2]
    );
    if bar.origin == Origin::Generated {
        println!("\n{} generated from seed {}", "!".yellow(), seed);
    }
    Ok(ExitCode::SUCCESS)
}

/// The bar's packed color as a material tint.
pub fn bar_tint(bar: &BarDatum) -> [f64; 3] {
    Color::from_packed_rgb(bar.color).to_array()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bar_result_flattens_datum() {
        let bar = MockDataSource::new(0).bar_data("杭州");
        let json = serde_json::to_value(BarResult {
            name: "杭州",
            seed: 0,
            hex_color: bar.hex_color(),
            tint: bar_tint(&bar),
            bar,
        })
        .unwrap();
        assert_eq!(json["value"], 82);
        assert_eq!(json["hex_color"], "#00aaff");
        assert_eq!(json["tint"][0], 0.0);
        assert_eq!(json["tint"][2], 1.0);
        assert_eq!(json["origin"], "static");
    }

    #[test]
    fn test_tint_matches_hex_color() {
        let source = MockDataSource::new(7);
        for name in ["西安", "南京市", "拉萨市"] {
            let bar = source.bar_data(name);
            let from_hex = Color::from_hex_rgb(&bar.hex_color()).unwrap().to_array();
            assert_eq!(bar_tint(&bar), from_hex);
        }
        let xian = source.bar_data("西安");
        assert_eq!(bar_tint(&xian), [0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_run_succeeds_for_any_name() {
        assert!(run("", 3, true).is_ok());
        assert!(run("乌鲁木齐", 3, false).is_ok());
    }
}
