//! geofx CLI - preview renders and dashboard data from the command line
//!
//! This binary renders the shading formulas to PNG, prints material
//! descriptors and queries the dashboard's mock statistics and geometry.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use geofx_cli::commands;
use geofx_cli::commands::render::{RenderOptions, RenderSource};

/// geofx - Procedural shading for 3D map dashboards
#[derive(Parser)]
#[command(name = "geofx")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a scene file or a single effect to a PNG preview
    Render {
        /// Path to a scene JSON file
        #[arg(short, long, conflicts_with = "effect", required_unless_present = "effect")]
        scene: Option<String>,

        /// Effect type to render alone (side, terrain, bar, ground, gear)
        #[arg(short, long)]
        effect: Option<String>,

        /// Animation clock value in seconds (overrides the scene's time)
        #[arg(short, long, allow_negative_numbers = true)]
        time: Option<f64>,

        /// Output size as WxH or N (overrides the scene's resolution)
        #[arg(long)]
        size: Option<String>,

        /// Output PNG path
        #[arg(short, long, default_value = "preview.png")]
        out: String,

        /// Use the smallest PNG encoding (slower)
        #[arg(long)]
        best: bool,

        /// Output machine-readable JSON diagnostics
        #[arg(long)]
        json: bool,
    },

    /// Build a material descriptor and print it as JSON
    Material {
        /// Effect type (side, terrain, bar, ground, gear)
        #[arg(short, long)]
        effect: String,

        /// Base tint as #rrggbb
        #[arg(short, long)]
        color: Option<String>,

        /// Disable the side-wall scan line
        #[arg(long)]
        no_scan: bool,

        /// Output machine-readable JSON diagnostics
        #[arg(long)]
        json: bool,
    },

    /// Show a region's info-card statistics
    Stats {
        /// Region name (e.g. 广东省, 深圳市)
        #[arg(short, long)]
        name: String,

        /// Region level: nation, province, city or district
        #[arg(short, long, default_value = "province")]
        level: String,

        /// Seed for generated values
        #[arg(long, default_value_t = 0)]
        seed: u32,

        /// Output machine-readable JSON diagnostics
        #[arg(long)]
        json: bool,
    },

    /// Show the data bar of a region
    Bar {
        /// Region name, matched loosely (e.g. 北京)
        #[arg(short, long)]
        name: String,

        /// Seed for generated values
        #[arg(long, default_value_t = 0)]
        seed: u32,

        /// Output machine-readable JSON diagnostics
        #[arg(long)]
        json: bool,
    },

    /// Load a region's child outlines and summarize them
    Geometry {
        /// Administrative code of the parent region (100000 for the nation)
        #[arg(short, long)]
        adcode: u32,

        /// Map server base URL serving <adcode>.json; repeat to add fallbacks
        #[arg(short, long)]
        url: Vec<String>,

        /// Map directory holding <adcode>.json files, tried after the servers
        #[arg(short, long)]
        dir: Vec<String>,

        /// Output machine-readable JSON diagnostics
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            scene,
            effect,
            time,
            size,
            out,
            best,
            json,
        } => {
            // clap guarantees exactly one of the two.
            let source = match scene.as_deref() {
                Some(path) => RenderSource::Scene(path),
                None => RenderSource::Effect(effect.as_deref().unwrap_or_default()),
            };
            let options = RenderOptions {
                time,
                size: size.as_deref(),
                out: &out,
                best,
            };
            commands::render::run(source, options, json)
        }
        Commands::Material {
            effect,
            color,
            no_scan,
            json,
        } => commands::material::run(&effect, color.as_deref(), no_scan, json),
        Commands::Stats {
            name,
            level,
            seed,
            json,
        } => commands::stats::run(&name, &level, seed, json),
        Commands::Bar { name, seed, json } => commands::bar::run(&name, seed, json),
        Commands::Geometry {
            adcode,
            url,
            dir,
            json,
        } => {
            let locations = commands::geometry::Locations {
                urls: &url,
                dirs: &dir,
            };
            commands::geometry::run(adcode, locations, json)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
