//! Render command implementation
//!
//! Renders a scene file, or a single effect over a black background, to a
//! PNG preview and reports its BLAKE3 hash.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

use geofx_backend_shading::png::{write_rgba_to_vec_with_hash, PngConfig};
use geofx_backend_shading::{render_scene, MaterialFactory, RenderError};
use geofx_spec::{EffectType, SceneError, SceneSpec, ValidationError};

use super::json_output::{error_codes, print_failure, JsonError, JsonOutput};
use super::material::default_params;

/// Edge of a single-effect preview when no `--size` is given.
pub const DEFAULT_SIZE: u32 = 256;

/// What to render.
#[derive(Debug, Clone, Copy)]
pub enum RenderSource<'a> {
    /// A scene file.
    Scene(&'a str),
    /// One effect with default parameters.
    Effect(&'a str),
}

/// Render options shared by both sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions<'a> {
    /// Clock value; overrides the scene's own time.
    pub time: Option<f64>,
    /// `WxH` or `N`; overrides the scene's resolution.
    pub size: Option<&'a str>,
    /// Output PNG path.
    pub out: &'a str,
    /// Trade encoding speed for a smaller file.
    pub best: bool,
}

impl RenderOptions<'_> {
    /// PNG settings for the chosen compression.
    pub fn png_config(&self) -> PngConfig {
        if self.best {
            PngConfig::best_compression()
        } else {
            PngConfig::default()
        }
    }
}

/// Summary of a finished render.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RenderReport {
    pub out: String,
    pub width: u32,
    pub height: u32,
    pub time: f64,
    pub layers: Vec<EffectType>,
    pub hash: String,
}

/// Parses `WxH`, or `N` for a square.
pub fn parse_size(size: &str) -> Result<[u32; 2], String> {
    let parse = |s: &str| {
        s.trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid size '{}': {}", size, e))
    };
    match size.split_once(['x', 'X']) {
        Some((w, h)) => Ok([parse(w)?, parse(h)?]),
        None => {
            let n = parse(size)?;
            Ok([n, n])
        }
    }
}

/// Run the render command
///
/// # Arguments
/// * `source` - Scene file or effect name
/// * `options` - Time, size and output overrides
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(source: RenderSource<'_>, options: RenderOptions<'_>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(source, options)
    } else {
        run_human(source, options)
    }
}

fn run_human(source: RenderSource<'_>, options: RenderOptions<'_>) -> Result<ExitCode> {
    match source {
        RenderSource::Scene(path) => println!("{} {}", "Rendering:".cyan().bold(), path),
        RenderSource::Effect(name) => println!("{} effect {}", "Rendering:".cyan().bold(), name),
    }

    let scene = match load_scene(source, options) {
        Ok(scene) => scene,
        Err(error) => anyhow::bail!("{} ({})", error.message, error.code),
    };

    let report = match render_to_file(&scene, options.out, &options.png_config())? {
        Ok(report) => report,
        Err(RenderError::InvalidScene(errors)) => {
            print_validation_errors(&errors);
            println!(
                "\n{} Scene has {} error(s)",
                "FAILED".red().bold(),
                errors.len()
            );
            return Ok(ExitCode::from(1));
        }
        Err(err) => return Err(err.into()),
    };

    let layers: Vec<&str> = report.layers.iter().map(|l| l.as_str()).collect();
    println!(
        "  {} {}x{} at t={}s, layers: {}",
        "Size:".dimmed(),
        report.width,
        report.height,
        report.time,
        if layers.is_empty() {
            "(none)".to_string()
        } else {
            layers.join(", ")
        }
    );
    println!("  {} {}", "Hash:".dimmed(), report.hash);
    println!("\n{} Wrote {}", "SUCCESS".green().bold(), report.out);
    Ok(ExitCode::SUCCESS)
}

fn run_json(source: RenderSource<'_>, options: RenderOptions<'_>) -> Result<ExitCode> {
    let scene = match load_scene(source, options) {
        Ok(scene) => scene,
        Err(error) => {
            print_failure(error)?;
            return Ok(ExitCode::from(1));
        }
    };

    match render_to_file(&scene, options.out, &options.png_config())? {
        Ok(report) => {
            JsonOutput::success(report).print()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(RenderError::InvalidScene(errors)) => {
            JsonOutput::<()>::failure(errors.iter().map(JsonError::from).collect()).print()?;
            Ok(ExitCode::from(1))
        }
        Err(err) => {
            print_failure(JsonError::from_backend(&err))?;
            Ok(ExitCode::from(1))
        }
    }
}

/// Builds the scene to render, applying the command-line overrides.
pub fn load_scene(source: RenderSource<'_>, options: RenderOptions<'_>) -> Result<SceneSpec, JsonError> {
    let size = options
        .size
        .map(parse_size)
        .transpose()
        .map_err(|e| JsonError::new(error_codes::INVALID_SIZE, e))?;

    let mut scene = match source {
        RenderSource::Scene(path) => {
            SceneSpec::from_file(Path::new(path)).map_err(|e| match e {
                SceneError::Io(e) => JsonError::new(
                    error_codes::FILE_READ,
                    format!("Failed to read scene file {}: {}", path, e),
                ),
                other => JsonError::new(
                    error_codes::SCENE_PARSE,
                    format!("Failed to parse scene file {}: {}", path, other),
                ),
            })?
        }
        RenderSource::Effect(name) => {
            let effect: EffectType = name
                .parse()
                .map_err(|e: geofx_spec::UnknownEffectType| {
                    JsonError::new(error_codes::UNKNOWN_EFFECT, e.to_string())
                })?;
            SceneSpec::new(DEFAULT_SIZE, DEFAULT_SIZE).with_layer(default_params(effect, None, true))
        }
    };

    if let Some(size) = size {
        scene.resolution = size;
    }
    if let Some(time) = options.time {
        scene.time = time;
    }
    Ok(scene)
}

/// Renders `scene` and writes the PNG to `out`.
///
/// Scene and material problems come back in the inner result; only I/O and
/// encoding failures are errors of the outer one.
pub fn render_to_file(
    scene: &SceneSpec,
    out: &str,
    config: &PngConfig,
) -> Result<Result<RenderReport, RenderError>> {
    let buffer = match render_scene(&MaterialFactory::new(), scene) {
        Ok(buffer) => buffer,
        Err(err) => return Ok(Err(err)),
    };

    let (data, hash) = write_rgba_to_vec_with_hash(&buffer, config)
        .context("Failed to encode PNG")?;
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(out_path, &data).with_context(|| format!("Failed to write {}", out))?;

    Ok(Ok(RenderReport {
        out: out.to_string(),
        width: buffer.width,
        height: buffer.height,
        time: scene.time,
        layers: scene.layers.iter().map(|l| l.effect_type()).collect(),
        hash,
    }))
}

fn print_validation_errors(errors: &[ValidationError]) {
    println!("\n{}", "Errors:".red().bold());
    for error in errors {
        match &error.path {
            Some(path) => println!("  {} [{}] {}: {}", "!".red(), error.code, path, error.message),
            None => println!("  {} [{}] {}", "!".red(), error.code, error.message),
        }
    }
}
