//! Noise generation primitives.
//!
//! All noise functions are pure, need no seed, and produce identical output
//! for identical input.

mod simplex;

pub use simplex::SimplexNoise;

/// Trait for 2D noise generators.
pub trait Noise2D {
    /// Sample the noise at a given 2D coordinate.
    /// Returns a value roughly in [-1, 1].
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// Base frequency of the terrain octaves.
pub const TERRAIN_BASE_SCALE: f64 = 0.3;

/// Frequency multiplier of the fine shading octave relative to the base scale.
pub const SHADE_FREQUENCY: f64 = 10.0;

/// Offset applied to the fine shading octave, so it decorrelates from the detail.
pub const SHADE_OFFSET: [f64; 2] = [1.0, 1.0];

/// A bounded, continuous noise field over map-local positions.
///
/// Single samples are clamped to [-1, 1] and any non-finite intermediate is
/// reported as 0, so every finite input yields a finite, bounded value.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoiseField<N: Noise2D = SimplexNoise> {
    noise: N,
}

impl NoiseField<SimplexNoise> {
    /// A field backed by simplex noise.
    pub const fn simplex() -> Self {
        Self {
            noise: SimplexNoise::new(),
        }
    }
}

impl<N: Noise2D> NoiseField<N> {
    /// A field backed by any coherent noise.
    pub fn new(noise: N) -> Self {
        Self { noise }
    }

    /// One octave at `position * scale`, in [-1, 1].
    #[inline]
    pub fn sample(&self, position: [f64; 2], scale: f64) -> f64 {
        self.sample_raw(position[0] * scale, position[1] * scale)
    }

    /// One octave at an already scaled coordinate, in [-1, 1].
    #[inline]
    pub fn sample_raw(&self, x: f64, y: f64) -> f64 {
        let v = self.noise.sample(x, y);
        if v.is_finite() {
            v.clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }

    /// Four-octave terrain detail, in [-2, 2].
    ///
    /// The last octave is folded with `abs` to add sharp ridges.
    pub fn terrain_detail(&self, position: [f64; 2], base_scale: f64) -> f64 {
        self.sample(position, base_scale)
            + 0.5 * self.sample(position, base_scale * 2.0)
            + 0.25 * self.sample(position, base_scale * 4.0)
            + 0.1 * self.sample(position, base_scale * 8.0).abs()
    }

    /// Fine shading octave used for micro-contrast, in [-1, 1].
    pub fn shade(&self, position: [f64; 2], base_scale: f64) -> f64 {
        let scale = base_scale * SHADE_FREQUENCY;
        self.sample_raw(
            position[0] * scale + SHADE_OFFSET[0],
            position[1] * scale + SHADE_OFFSET[1],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(f64);

    impl Noise2D for Constant {
        fn sample(&self, _x: f64, _y: f64) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_octave_weights() {
        let field = NoiseField::new(Constant(-1.0));
        // -1 - 0.5 - 0.25 + 0.1 * |-1|
        let detail = field.terrain_detail([3.0, 4.0], TERRAIN_BASE_SCALE);
        assert!((detail - (-1.65)).abs() < 1e-12);

        let field = NoiseField::new(Constant(1.0));
        assert!((field.terrain_detail([3.0, 4.0], TERRAIN_BASE_SCALE) - 1.85).abs() < 1e-12);
    }

    #[test]
    fn test_sample_clamps_and_rejects_non_finite() {
        assert_eq!(NoiseField::new(Constant(3.0)).sample([0.0, 0.0], 1.0), 1.0);
        assert_eq!(NoiseField::new(Constant(f64::NAN)).sample([0.0, 0.0], 1.0), 0.0);
    }
}
