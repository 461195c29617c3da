//! Terrain colorization from noise detail and region masks.
//!
//! Positions are map-local offsets from the map's reference point; x grows
//! east and y grows north, roughly x in [-45, 45] and y in [-25, 25].

use crate::color::Color;
use crate::mask::RegionMask;
use crate::math::smoothstep;
use crate::noise::{Noise2D, NoiseField, SimplexNoise, TERRAIN_BASE_SCALE};

/// Snow line in noise units, before the plateau lowers it.
pub const SNOW_LINE: f64 = 0.8;

/// How far the snow line drops at full plateau mask.
pub const PLATEAU_SNOW_DROP: f64 = 0.3;

/// Width of the snow transition above the snow line.
pub const SNOW_BLEND: f64 = 0.1;

/// Maximum weight of the desert blend.
pub const DESERT_COVERAGE: f64 = 0.9;

/// Anchor colors of the terrain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub plains: Color,
    pub forest: Color,
    pub desert: Color,
    pub sand: Color,
    pub mountain: Color,
    pub rock: Color,
    pub snow: Color,
}

impl Palette {
    /// Low-saturation natural palette.
    pub const NATURAL: Palette = Palette {
        plains: Color::rgb(0.22, 0.35, 0.18),
        forest: Color::rgb(0.15, 0.28, 0.15),
        desert: Color::rgb(0.55, 0.48, 0.35),
        sand: Color::rgb(0.65, 0.58, 0.45),
        mountain: Color::rgb(0.35, 0.30, 0.25),
        rock: Color::rgb(0.25, 0.22, 0.20),
        snow: Color::rgb(0.95, 0.95, 0.98),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::NATURAL
    }
}

/// Computes the terrain color at a map-local position.
#[derive(Debug, Clone, Copy)]
pub struct TerrainColorizer<N: Noise2D = SimplexNoise> {
    palette: Palette,
    noise: NoiseField<N>,
    noise_scale: f64,
}

impl TerrainColorizer<SimplexNoise> {
    /// A colorizer with the natural palette and simplex noise.
    pub const fn new() -> Self {
        Self {
            palette: Palette::NATURAL,
            noise: NoiseField::simplex(),
            noise_scale: TERRAIN_BASE_SCALE,
        }
    }
}

impl Default for TerrainColorizer<SimplexNoise> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Noise2D> TerrainColorizer<N> {
    /// A colorizer over a custom palette and noise field.
    pub fn with_parts(palette: Palette, noise: NoiseField<N>) -> Self {
        Self {
            palette,
            noise,
            noise_scale: TERRAIN_BASE_SCALE,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn noise_scale(&self) -> f64 {
        self.noise_scale
    }

    /// Terrain color at `position`, every channel in [0, 1], alpha 1.
    pub fn color_at(&self, position: [f64; 2]) -> Color {
        self.color_at_scale(position, self.noise_scale)
    }

    /// Terrain color with an explicit octave base scale.
    pub fn color_at_scale(&self, position: [f64; 2], noise_scale: f64) -> Color {
        let p = &self.palette;
        let detail = self.noise.terrain_detail(position, noise_scale);

        let plateau = RegionMask::Plateau.evaluate(position);
        let desert = RegionMask::Desert.evaluate(position);

        let mut color = p.plains.mix(&p.forest, smoothstep(-0.5, 0.5, detail));

        let desert_color = p.desert.mix(&p.sand, detail * 0.5 + 0.5);
        color = color.mix(&desert_color, desert * DESERT_COVERAGE);

        // Plateau goes on top of the desert so it wins where both apply
        let mountain = p.mountain.mix(&p.rock, smoothstep(0.0, 1.0, detail));
        let snow_line = SNOW_LINE - PLATEAU_SNOW_DROP * plateau;
        let high = mountain.mix(
            &p.snow,
            smoothstep(snow_line, snow_line + SNOW_BLEND, detail),
        );
        color = color.mix(&high, plateau);

        let shade = self.noise.shade(position, noise_scale);
        color.scale(0.85 + 0.15 * shade).with_alpha(1.0).clamp()
    }
}
