//! Simplex noise implementation.
//!
//! 2D simplex noise with a polynomial permutation (`(34x² + x) mod 289`) and
//! rotated gradients, as used by the map shaders. The permutation needs no
//! table and no seed, so output is identical on every platform and run.

use super::Noise2D;
use crate::math::fract;

/// 2D Simplex noise generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplexNoise;

impl SimplexNoise {
    /// Skewing factor for 2D: (sqrt(3) - 1) / 2.
    const F2: f64 = 0.366025403784439;
    /// Unskewing factor for 2D: (3 - sqrt(3)) / 6.
    const G2: f64 = 0.211324865405187;
    /// Offset of the last corner: -1 + 2 * G2.
    const LAST_CORNER: f64 = -0.577350269189626;
    /// Spreads permutation values over the gradient ring: 1 / 41.
    const GRAD_STEP: f64 = 0.024390243902439;
    /// Period of the permutation polynomial.
    const PERIOD: f64 = 289.0;

    /// Create a new simplex noise generator.
    pub const fn new() -> Self {
        Self
    }

    /// Permutation polynomial.
    #[inline]
    fn permute(x: f64) -> f64 {
        let v = (x * 34.0 + 1.0) * x;
        v - Self::PERIOD * (v / Self::PERIOD).floor()
    }
}

impl Noise2D for SimplexNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        // Skew the input space to determine which simplex cell we're in
        let s = (x + y) * Self::F2;
        let i = (x + s).floor();
        let j = (y + s).floor();

        // Unskew the cell origin back to (x, y) space
        let t = (i + j) * Self::G2;
        let x0 = x - i + t;
        let y0 = y - j + t;

        // Lower or upper triangle of the cell
        let (i1, j1) = if x0 > y0 { (1.0, 0.0) } else { (0.0, 1.0) };

        let corners = [
            (x0, y0),
            (x0 + Self::G2 - i1, y0 + Self::G2 - j1),
            (x0 + Self::LAST_CORNER, y0 + Self::LAST_CORNER),
        ];

        // Wrap the lattice coordinates so huge inputs cannot lose the hash
        let i = i - Self::PERIOD * (i / Self::PERIOD).floor();
        let j = j - Self::PERIOD * (j / Self::PERIOD).floor();
        let offsets = [(0.0, 0.0), (i1, j1), (1.0, 1.0)];

        let mut total = 0.0;
        for (&(cx, cy), &(oi, oj)) in corners.iter().zip(offsets.iter()) {
            let falloff = 0.5 - (cx * cx + cy * cy);
            if falloff <= 0.0 {
                continue;
            }
            let hash = Self::permute(Self::permute(j + oj) + i + oi);

            // Gradient on a rotated ring, normalized by a Taylor approximation
            let gx = 2.0 * fract(hash * Self::GRAD_STEP) - 1.0;
            let h = gx.abs() - 0.5;
            let a0 = gx - (gx + 0.5).floor();
            let norm = 1.79284291400159 - 0.85373472095314 * (a0 * a0 + h * h);

            let m = falloff * falloff;
            total += m * m * norm * (a0 * cx + h * cy);
        }

        // Scale to roughly [-1, 1]
        130.0 * total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplex_deterministic() {
        let noise1 = SimplexNoise::new();
        let noise2 = SimplexNoise::new();

        for i in 0..100 {
            let x = i as f64 * 0.1;
            let y = i as f64 * 0.13;
            assert_eq!(noise1.sample(x, y), noise2.sample(x, y));
        }
    }

    #[test]
    fn test_simplex_range() {
        let noise = SimplexNoise::new();
        let mut min = f64::MAX;
        let mut max = f64::MIN;

        for i in 0..400 {
            for j in 0..400 {
                let v = noise.sample(i as f64 * 0.037, j as f64 * 0.041);
                min = min.min(v);
                max = max.max(v);
            }
        }

        assert!(min >= -1.1, "min {}", min);
        assert!(max <= 1.1, "max {}", max);
        // Not degenerate
        assert!(max - min > 0.5);
    }

    #[test]
    fn test_simplex_zero_at_lattice_origin() {
        // The origin corner has a zero offset; the other two lie outside the kernel.
        let v = SimplexNoise::new().sample(0.0, 0.0);
        assert!(v.abs() < 1e-12);
    }

    #[test]
    fn test_simplex_continuous() {
        let noise = SimplexNoise::new();
        for i in 0..200 {
            let x = i as f64 * 0.05 - 5.0;
            let y = i as f64 * 0.031 + 2.0;
            let a = noise.sample(x, y);
            let b = noise.sample(x + 1e-6, y + 1e-6);
            assert!((a - b).abs() < 1e-3, "jump at ({}, {}): {} vs {}", x, y, a, b);
        }
    }
}
