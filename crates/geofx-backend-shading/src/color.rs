//! Color utilities for shading.

use crate::math::finite_or;

/// RGBA color with f64 components.
///
/// Intermediate colors may leave the [0, 1] range (additive highlights,
/// extrapolating mixes); [`Color::clamp`] brings them back at composition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Create a new color with alpha = 1.0.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a new color with alpha.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from an RGB triple.
    pub const fn from_array(rgb: [f64; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }

    /// Create a grayscale color.
    pub const fn gray(value: f64) -> Self {
        Self::rgb(value, value, value)
    }

    /// Create black.
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Create white.
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Parse a `#rrggbb` (or `rrggbb`) hex string into an opaque color.
    pub fn from_hex_rgb(hex: &str) -> Result<Self, String> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(format!("expected 6 hex digits, got '{}'", hex));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|e| format!("invalid hex digits in '{}': {}", hex, e))
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// The RGB channels as an array.
    pub fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Same color with a different alpha.
    pub fn with_alpha(&self, a: f64) -> Color {
        Color { a, ..*self }
    }

    /// Linear interpolation of all four channels.
    ///
    /// `t` is not clamped, so values outside [0, 1] extrapolate.
    pub fn mix(&self, other: &Color, t: f64) -> Color {
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Clamp all components to [0.0, 1.0]. Non-finite components become 0.
    pub fn clamp(&self) -> Color {
        let unit = |v: f64| finite_or(v, 0.0).clamp(0.0, 1.0);
        Color {
            r: unit(self.r),
            g: unit(self.g),
            b: unit(self.b),
            a: unit(self.a),
        }
    }

    /// Copy with every non-finite component replaced by 0.
    pub fn sanitized(&self) -> Color {
        Color {
            r: finite_or(self.r, 0.0),
            g: finite_or(self.g, 0.0),
            b: finite_or(self.b, 0.0),
            a: finite_or(self.a, 0.0),
        }
    }

    /// Multiply the RGB channels by a scalar; alpha is kept.
    pub fn scale(&self, factor: f64) -> Color {
        Color {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: self.a,
        }
    }

    /// Add another color's RGB channels; alpha is kept.
    pub fn add_rgb(&self, other: &Color) -> Color {
        Color {
            r: self.r + other.r,
            g: self.g + other.g,
            b: self.b + other.b,
            a: self.a,
        }
    }

    /// Whether every channel is finite.
    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Convert to 8-bit RGBA.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let c = self.clamp();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
            (c.a * 255.0).round() as u8,
        ]
    }

    /// Create from a packed `0xRRGGBB` integer.
    pub fn from_packed_rgb(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xff) as f64 / 255.0,
            ((rgb >> 8) & 0xff) as f64 / 255.0,
            (rgb & 0xff) as f64 / 255.0,
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_midpoint() {
        let mid = Color::black().mix(&Color::white(), 0.5);
        assert!((mid.r - 0.5).abs() < 1e-12);
        assert!((mid.g - 0.5).abs() < 1e-12);
        assert!((mid.b - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_mix_extrapolates() {
        let c = Color::gray(0.2).mix(&Color::gray(0.4), 1.5);
        assert!((c.r - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_clamp() {
        let c = Color::rgba(-0.5, 0.5, 2.0, 1.5).clamp();
        assert_eq!(c, Color::rgba(0.0, 0.5, 1.0, 1.0));
    }

    #[test]
    fn test_clamp_non_finite() {
        let c = Color::rgba(f64::NAN, f64::INFINITY, f64::NEG_INFINITY, f64::NAN).clamp();
        assert_eq!(c, Color::rgba(0.0, 0.0, 0.0, 0.0));
        assert_eq!(Color::rgb(f64::NAN, 0.5, 0.0).to_rgba8(), [0, 128, 0, 255]);
    }

    #[test]
    fn test_from_hex_rgb() {
        let c = Color::from_hex_rgb("#ff8000").unwrap();
        assert_eq!(c.to_rgba8(), [255, 128, 0, 255]);
        assert!(Color::from_hex_rgb("#ff80").is_err());
        assert!(Color::from_hex_rgb("zzzzzz").is_err());
    }

    #[test]
    fn test_from_packed_rgb() {
        assert_eq!(Color::from_packed_rgb(0x00ff00).to_rgba8(), [0, 255, 0, 255]);
    }

    #[test]
    fn test_scale_keeps_alpha() {
        let c = Color::rgba(0.5, 0.5, 0.5, 0.3).scale(2.0);
        assert_eq!(c, Color::rgba(1.0, 1.0, 1.0, 0.3));
    }
}
