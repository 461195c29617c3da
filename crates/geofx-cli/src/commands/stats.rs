//! Stats command implementation
//!
//! Prints a region's info-card statistics from the seeded mock data source.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

use geofx_data::{MockDataSource, Origin, RegionLevel, RegionStats};

use super::json_output::{error_codes, print_failure, JsonError, JsonOutput};

#[derive(Debug, Serialize)]
struct StatsResult<'a> {
    name: &'a str,
    level: RegionLevel,
    seed: u32,
    stats: RegionStats,
}

/// Run the stats command
///
/// # Arguments
/// * `name` - Region name
/// * `level` - Region level name
/// * `seed` - Mock data seed
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(name: &str, level: &str, seed: u32, json_output: bool) -> Result<ExitCode> {
    let level = match level.parse::<RegionLevel>() {
        Ok(level) => level,
        Err(e) => {
            let message = e.to_string();
            if json_output {
                print_failure(JsonError::new(error_codes::UNKNOWN_LEVEL, message))?;
                return Ok(ExitCode::from(1));
            }
            anyhow::bail!(message);
        }
    };

    let stats = MockDataSource::new(seed).region_stats(name, level);

    if json_output {
        JsonOutput::success(StatsResult {
            name,
            level,
            seed,
            stats,
        })
        .print()?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {} ({})", "Region:".cyan().bold(), name, level);
    for (label, value) in [
        ("GDP", &stats.gdp),
        ("Population", &stats.population),
        ("Growth", &stats.growth),
        ("Industry", &stats.industry),
        ("Temperature", &stats.temperature),
        ("AQI", &stats.aqi),
    ] {
        println!("  {:<12} {}", format!("{}:", label).dimmed(), value);
    }
    if stats.origin == Origin::Generated {
        println!("\n{} generated from seed {}", "!".yellow(), seed);
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_level_is_an_error_in_human_mode() {
        let err = run("广东省", "county", 0, false).unwrap_err();
        assert!(err.to_string().contains("unknown region level 'county'"));
    }

    #[test]
    fn test_known_region_succeeds() {
        assert!(run("广东省", "province", 0, false).is_ok());
        assert!(run("深圳市", "city", 0, true).is_ok());
    }

    #[test]
    fn test_unknown_level_json_reports_instead_of_failing() {
        assert!(run("广东省", "county", 0, true).is_ok());
    }
}
