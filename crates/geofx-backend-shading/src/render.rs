//! CPU preview renderer.
//!
//! Rasterizes each material over a flat quad and composites the layers with
//! their blend modes. This is a preview of the formulas, not a 3D renderer:
//! the quad's uv spans the whole image, terrain covers the map extent and side
//! walls run from the base (bottom row) to the top of the extrusion.

use thiserror::Error;

use geofx_spec::{
    BackendError, BlendMode, EffectParams, EffectType, MaterialDescriptor, SceneSpec,
    ValidationError, DEFAULT_SIDE_DEPTH,
};

use crate::clock::FrameTime;
use crate::color::Color;
use crate::material::{MaterialError, MaterialFactory, ShadeInput};
use crate::noise::Noise2D;

/// Map-local x extent covered by a terrain preview.
pub const TERRAIN_EXTENT_X: [f64; 2] = [-45.0, 45.0];

/// Map-local y extent covered by a terrain preview.
pub const TERRAIN_EXTENT_Y: [f64; 2] = [-25.0, 25.0];

/// Errors from rendering a scene.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Scene is invalid: {}", summarize(.0))]
    InvalidScene(Vec<ValidationError>),

    #[error("Layer {index}: {source}")]
    Material {
        index: usize,
        #[source]
        source: MaterialError,
    },
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl BackendError for RenderError {
    fn code(&self) -> &'static str {
        match self {
            RenderError::InvalidScene(_) => "SHADING_101",
            RenderError::Material { source, .. } => source.code(),
        }
    }

    fn category(&self) -> &'static str {
        "shading"
    }
}

/// An RGBA image of floating-point colors.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (row-major, top row first).
    pub data: Vec<Color>,
}

impl TextureBuffer {
    /// Create a new texture buffer filled with a color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.data[self.index(x, y)]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.index(x, y);
        self.data[idx] = color;
    }

    /// Convert to 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for color in &self.data {
            bytes.extend_from_slice(&color.to_rgba8());
        }
        bytes
    }
}

/// Pixel-center uv of pixel `(x, y)`; `v` is 1 at the top row.
#[inline]
pub fn pixel_uv(x: u32, y: u32, width: u32, height: u32) -> [f64; 2] {
    let u = (x as f64 + 0.5) / width as f64;
    let v = 1.0 - (y as f64 + 0.5) / height as f64;
    [u, v]
}

/// The shade input for a surface point at `uv` of a preview quad.
pub fn surface_input(descriptor: &MaterialDescriptor, uv: [f64; 2]) -> ShadeInput {
    let [u, v] = uv;
    let position = match descriptor.effect() {
        EffectType::Terrain => [
            TERRAIN_EXTENT_X[0] + u * (TERRAIN_EXTENT_X[1] - TERRAIN_EXTENT_X[0]),
            TERRAIN_EXTENT_Y[0] + v * (TERRAIN_EXTENT_Y[1] - TERRAIN_EXTENT_Y[0]),
            0.0,
        ],
        EffectType::Side => {
            let depth = match descriptor.params() {
                EffectParams::Side(params) => params.depth,
                _ => DEFAULT_SIDE_DEPTH,
            };
            [u, 0.0, v * depth]
        }
        EffectType::Bar | EffectType::Ground | EffectType::Gear => [u, v, 0.0],
    };
    ShadeInput::new(position, uv)
}

/// Shades every pixel of one layer.
pub fn render_layer<N: Noise2D>(
    factory: &MaterialFactory<N>,
    descriptor: &MaterialDescriptor,
    width: u32,
    height: u32,
    frame: FrameTime,
) -> TextureBuffer {
    let mut buffer = TextureBuffer::new(width, height, Color::rgba(0.0, 0.0, 0.0, 0.0));
    for y in 0..height {
        for x in 0..width {
            let input = surface_input(descriptor, pixel_uv(x, y, width, height));
            buffer.set(x, y, factory.shade(descriptor, &input, frame));
        }
    }
    buffer
}

/// Composites `src` onto `dst` and clamps the result.
#[inline]
pub fn composite(dst: Color, src: Color, mode: BlendMode) -> Color {
    let a = src.a.clamp(0.0, 1.0);
    let out = match mode {
        BlendMode::Normal | BlendMode::Alpha => Color {
            r: src.r * a + dst.r * (1.0 - a),
            g: src.g * a + dst.g * (1.0 - a),
            b: src.b * a + dst.b * (1.0 - a),
            a: a + dst.a * (1.0 - a),
        },
        BlendMode::Additive => dst.add_rgb(&src.scale(a)),
    };
    out.clamp()
}

/// Renders every layer of a validated scene over its background.
pub fn render_scene<N: Noise2D>(
    factory: &MaterialFactory<N>,
    scene: &SceneSpec,
) -> Result<TextureBuffer, RenderError> {
    scene
        .validate()
        .into_result()
        .map_err(RenderError::InvalidScene)?;

    let [width, height] = scene.resolution;
    let frame = FrameTime::at(scene.time);
    let mut target = TextureBuffer::new(width, height, Color::from_array(scene.background));

    for (index, params) in scene.layers.iter().enumerate() {
        let descriptor = factory
            .build(params.effect_type(), params.clone())
            .map_err(|source| RenderError::Material { index, source })?;
        let layer = render_layer(factory, &descriptor, width, height, frame);
        let mode = descriptor.hints().blend_mode;
        for (dst, src) in target.data.iter_mut().zip(&layer.data) {
            *dst = composite(*dst, *src, mode);
        }
    }

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geofx_spec::{BarParams, GearParams, GroundParams, SideParams, TerrainParams};

    #[test]
    fn test_pixel_uv_flips_v() {
        assert_eq!(pixel_uv(0, 0, 2, 2), [0.25, 0.75]);
        assert_eq!(pixel_uv(1, 1, 2, 2), [0.75, 0.25]);
    }

    #[test]
    fn test_terrain_surface_spans_map() {
        let factory = MaterialFactory::new();
        let terrain = factory
            .build(EffectType::Terrain, TerrainParams::default().into())
            .unwrap();
        let input = surface_input(&terrain, [0.0, 1.0]);
        assert_eq!(input.position, [-45.0, 25.0, 0.0]);
    }

    #[test]
    fn test_side_surface_uses_depth() {
        let factory = MaterialFactory::new();
        let side = factory
            .build(EffectType::Side, SideParams::new([0.2, 0.2, 0.2]).with_depth(2.0).into())
            .unwrap();
        let input = surface_input(&side, [0.5, 0.5]);
        assert_eq!(input.position[2], 1.0);
    }

    #[test]
    fn test_composite_modes() {
        let dst = Color::rgba(0.2, 0.2, 0.2, 1.0);
        let src = Color::rgba(1.0, 0.0, 0.0, 0.5);

        let over = composite(dst, src, BlendMode::Alpha);
        assert!((over.r - 0.6).abs() < 1e-12);
        assert!((over.g - 0.1).abs() < 1e-12);
        assert_eq!(over.a, 1.0);

        let add = composite(dst, src, BlendMode::Additive);
        assert!((add.r - 0.7).abs() < 1e-12);
        assert!((add.g - 0.2).abs() < 1e-12);

        let saturated = composite(Color::white(), Color::white(), BlendMode::Additive);
        assert_eq!(saturated, Color::white());
    }

    #[test]
    fn test_render_scene_rejects_invalid() {
        let factory = MaterialFactory::new();
        let scene = SceneSpec::new(0, 4);
        let err = render_scene(&factory, &scene).unwrap_err();
        assert!(matches!(err, RenderError::InvalidScene(_)));
        assert_eq!(err.code(), "SHADING_101");
    }

    #[test]
    fn test_render_scene_layers() {
        let factory = MaterialFactory::new();
        let scene = SceneSpec::new(16, 16)
            .with_time(2.5)
            .with_layer(GroundParams::default())
            .with_layer(GearParams::new([0.0, 0.8, 1.0]));
        let image = render_scene(&factory, &scene).unwrap();
        assert_eq!(image.data.len(), 256);
        assert!(image
            .data
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(&c.r) && (0.0..=1.0).contains(&c.a)));
    }

    #[test]
    fn test_bar_layer_over_background() {
        let factory = MaterialFactory::new();
        let background = SceneSpec::new(4, 2);
        let image = render_scene(&factory, &background).unwrap();
        assert_eq!(image.get(3, 1), Color::from_array(background.background));

        // At t = 0 the pulse is 0.8; the top row sits at v = 0.75, alpha 0.9.
        let scene = SceneSpec::new(4, 2).with_layer(BarParams::new([1.0, 0.5, 0.0]));
        let mut image = render_scene(&factory, &scene).unwrap();
        let pixel = image.get(0, 0);
        assert!((pixel.r - 0.72).abs() < 1e-9);
        assert!((pixel.g - 0.36).abs() < 1e-9);
        assert!((pixel.a - 1.0).abs() < 1e-9);
        assert!((image.get(0, 1).r - 0.56).abs() < 1e-9);

        image.set(0, 0, Color::white());
        assert_eq!(image.get(0, 0), Color::white());
        assert_eq!(image.get(1, 0), pixel);
    }
}
