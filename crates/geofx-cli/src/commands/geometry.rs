//! Geometry command implementation
//!
//! Loads a region's child outlines through an ordered chain of map servers
//! and directories and summarizes what was found.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

use geofx_data::{
    Bounds, ChainError, DirectorySource, FeatureCollection, HttpSource, MapProjection,
    SourceChain,
};
use geofx_spec::BackendError;

use super::json_output::{JsonError, JsonOutput};

/// Map directory used when neither `--url` nor `--dir` is given.
pub const DEFAULT_MAP_DIR: &str = "maps";

/// One feature of a loaded collection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FeatureSummary {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adcode: Option<String>,
    pub polygons: usize,
}

/// What a geometry load produced.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GeometrySummary {
    pub adcode: u32,
    pub source: String,
    pub features: Vec<FeatureSummary>,
    /// Map-local bounds around the national reference point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
}

impl GeometrySummary {
    pub fn new(adcode: u32, source: String, collection: &FeatureCollection) -> Self {
        let features = collection
            .features
            .iter()
            .map(|f| FeatureSummary {
                name: f.properties.name.clone(),
                adcode: f.properties.adcode.as_ref().map(|a| a.to_string()),
                polygons: f.geometry.as_ref().map_or(0, |g| g.polygon_count()),
            })
            .collect();
        Self {
            adcode,
            source,
            features,
            bounds: collection.local_bounds(&MapProjection::default()),
        }
    }
}

/// Where to look for map data. Servers are tried before directories.
#[derive(Debug, Clone, Copy, Default)]
pub struct Locations<'a> {
    pub urls: &'a [String],
    pub dirs: &'a [String],
}

/// Builds the source chain: servers, then directories, each in the order given.
pub fn source_chain(locations: Locations<'_>) -> SourceChain {
    if locations.urls.is_empty() && locations.dirs.is_empty() {
        return SourceChain::new().with_source(DirectorySource::new(DEFAULT_MAP_DIR));
    }
    let chain = locations
        .urls
        .iter()
        .fold(SourceChain::new(), |chain, url| {
            chain.with_source(HttpSource::new(url.as_str()))
        });
    locations
        .dirs
        .iter()
        .fold(chain, |chain, dir| chain.with_source(DirectorySource::new(dir)))
}

/// Loads `adcode` through the chain built from `locations`.
pub fn load(adcode: u32, locations: Locations<'_>) -> Result<GeometrySummary, ChainError> {
    let loaded = source_chain(locations).load(adcode)?;
    Ok(GeometrySummary::new(adcode, loaded.source, &loaded.collection))
}

/// Run the geometry command
///
/// # Arguments
/// * `adcode` - Region whose children are loaded
/// * `locations` - Map servers and directories, tried in order
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(adcode: u32, locations: Locations<'_>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(adcode, locations)
    } else {
        run_human(adcode, locations)
    }
}

fn run_human(adcode: u32, locations: Locations<'_>) -> Result<ExitCode> {
    println!("{} region {}", "Loading:".cyan().bold(), adcode);

    let summary = match load(adcode, locations) {
        Ok(summary) => summary,
        Err(err) => {
            if err.failures.is_empty() {
                println!("  {} {}", "!".red(), err);
            }
            for (source, failure) in &err.failures {
                println!("  {} [{}] {}: {}", "!".red(), failure.code(), source, failure);
            }
            println!("\n{} No source could load region {}", "FAILED".red().bold(), adcode);
            return Ok(ExitCode::from(1));
        }
    };

    println!("  {} {}", "Source:".dimmed(), summary.source);
    for feature in &summary.features {
        let adcode = feature.adcode.as_deref().unwrap_or("-");
        println!(
            "  {:<10} {} ({} polygon{})",
            adcode,
            feature.name,
            feature.polygons,
            if feature.polygons == 1 { "" } else { "s" }
        );
    }
    if let Some(bounds) = summary.bounds {
        println!(
            "  {} x {:.2}..{:.2}, y {:.2}..{:.2}",
            "Bounds:".dimmed(),
            bounds.min[0],
            bounds.max[0],
            bounds.min[1],
            bounds.max[1]
        );
    }
    println!(
        "\n{} Loaded {} feature(s)",
        "SUCCESS".green().bold(),
        summary.features.len()
    );
    Ok(ExitCode::SUCCESS)
}

fn run_json(adcode: u32, locations: Locations<'_>) -> Result<ExitCode> {
    match load(adcode, locations) {
        Ok(summary) => {
            JsonOutput::success(summary).print()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let mut errors = vec![JsonError::from_backend(&err)];
            errors.extend(err.failures.iter().map(|(source, failure)| {
                JsonError::new(failure.code(), format!("{}: {}", source, failure))
            }));
            JsonOutput::<()>::failure(errors).print()?;
            Ok(ExitCode::from(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ZHEJIANG: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "adcode": 330100, "name": "杭州市" },
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[119.0, 29.5], [120.5, 29.5], [120.5, 30.5], [119.0, 29.5]]],
                        [[[120.6, 30.0], [120.8, 30.0], [120.8, 30.2], [120.6, 30.0]]]
                    ]
                }
            },
            {
                "type": "Feature",
                "properties": { "adcode": "100000_JD", "name": "" },
                "geometry": null
            }
        ]
    }"#;

    fn dirs_only(dirs: &[String]) -> Locations<'_> {
        Locations { urls: &[], dirs }
    }

    #[test]
    fn test_default_chain_uses_maps_dir() {
        assert_eq!(source_chain(Locations::default()).source_names(), vec!["dir:maps"]);
        let dirs = vec!["cache".to_string(), "mirror".to_string()];
        assert_eq!(
            source_chain(dirs_only(&dirs)).source_names(),
            vec!["dir:cache", "dir:mirror"]
        );
    }

    #[test]
    fn test_servers_come_before_directories() {
        let urls = vec!["https://maps.example.com/areas/".to_string()];
        let dirs = vec!["cache".to_string()];
        let chain = source_chain(Locations {
            urls: &urls,
            dirs: &dirs,
        });
        assert_eq!(
            chain.source_names(),
            vec!["http:https://maps.example.com/areas", "dir:cache"]
        );

        let only_urls = source_chain(Locations {
            urls: &urls,
            dirs: &[],
        });
        assert_eq!(only_urls.source_names(), vec!["http:https://maps.example.com/areas"]);
    }

    #[test]
    fn test_unreachable_server_falls_back_to_directory() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let closed = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let mirror = tempfile::tempdir().unwrap();
        std::fs::write(mirror.path().join("330000.json"), ZHEJIANG).unwrap();
        let urls = vec![closed];
        let dirs = vec![mirror.path().display().to_string()];
        let locations = Locations {
            urls: &urls,
            dirs: &dirs,
        };

        let summary = load(330000, locations).unwrap();
        assert_eq!(summary.source, format!("dir:{}", mirror.path().display()));

        let err = load(110000, locations).unwrap_err();
        assert_eq!(err.failures.len(), 2);
        assert_eq!(err.failures[0].1.code(), "DATA_004");
        assert_eq!(err.failures[1].1.code(), "DATA_001");
    }

    #[test]
    fn test_second_directory_is_fallback() {
        let empty = tempfile::tempdir().unwrap();
        let mirror = tempfile::tempdir().unwrap();
        std::fs::write(mirror.path().join("330000.json"), ZHEJIANG).unwrap();

        let dirs = vec![
            empty.path().display().to_string(),
            mirror.path().display().to_string(),
        ];
        let summary = load(330000, dirs_only(&dirs)).unwrap();
        assert_eq!(summary.source, format!("dir:{}", mirror.path().display()));
        assert_eq!(
            summary.features,
            vec![
                FeatureSummary {
                    name: "杭州市".to_string(),
                    adcode: Some("330100".to_string()),
                    polygons: 2,
                },
                FeatureSummary {
                    name: String::new(),
                    adcode: Some("100000_JD".to_string()),
                    polygons: 0,
                },
            ]
        );

        let bounds = summary.bounds.unwrap();
        assert!((bounds.min[0] - 15.0).abs() < 1e-9);
        assert!((bounds.max[1] - (-5.5)).abs() < 1e-9);
    }

    #[test]
    fn test_missing_region_reports_each_directory() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        let dirs = vec![a.path().display().to_string(), b.path().display().to_string()];

        let err = load(110000, dirs_only(&dirs)).unwrap_err();
        assert_eq!(err.failures.len(), 2);
        assert_eq!(err.code(), "DATA_011");
    }
}
