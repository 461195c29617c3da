//! Scalar helpers with shading-language semantics.

/// Hermite smoothstep between two edges.
///
/// Follows shading-language semantics: edges may be reversed (`edge0 > edge1`)
/// to produce a falling gate. The result is always in [0, 1]. When both edges
/// are equal the gate is a hard step at that value.
#[inline]
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    if edge0 == edge1 {
        return if x >= edge1 { 1.0 } else { 0.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Linear interpolation, not clamped.
#[inline]
pub fn mix(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Floored modulo: the result has the sign of `y`.
///
/// `modulo(-0.1, 1.0) == 0.9`, unlike the `%` operator.
#[inline]
pub fn modulo(x: f64, y: f64) -> f64 {
    x - y * (x / y).floor()
}

/// Fractional part, always in [0, 1).
#[inline]
pub fn fract(x: f64) -> f64 {
    x - x.floor()
}

/// Returns `value` if finite, otherwise `fallback`.
#[inline]
pub fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoothstep_rising() {
        assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
        assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
    }

    #[test]
    fn test_smoothstep_reversed_edges() {
        // Falling gate: 1 below the upper edge, 0 past the lower.
        assert_eq!(smoothstep(0.0, -15.0, 5.0), 0.0);
        assert_eq!(smoothstep(0.0, -15.0, -20.0), 1.0);
        assert!((smoothstep(0.0, -15.0, -7.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_smoothstep_degenerate_edges() {
        assert_eq!(smoothstep(0.5, 0.5, 0.49), 0.0);
        assert_eq!(smoothstep(0.5, 0.5, 0.5), 1.0);
    }

    #[test]
    fn test_modulo_negative() {
        assert!((modulo(-0.1, 1.0) - 0.9).abs() < 1e-12);
        assert!((modulo(3.5, 3.0) - 0.5).abs() < 1e-12);
    }
}
