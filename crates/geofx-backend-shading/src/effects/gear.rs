//! Decorative gear ring: a 16-tooth outer ring, a plain inner ring and a thin
//! trim ring, rotating slowly and breathing.

use geofx_spec::GearParams;

use crate::clock::FrameTime;
use crate::color::Color;
use crate::math::smoothstep;

/// Rotation speed, in radians per second.
pub const ROTATION_SPEED: f64 = 0.2;

/// Number of teeth on the outer ring.
pub const TEETH: f64 = 16.0;

/// Mean radius of the toothed edge.
pub const GEAR_RADIUS: f64 = 0.85;

/// Depth of the teeth.
pub const TOOTH_DEPTH: f64 = 0.05;

/// Radius at which the ring band starts.
pub const INNER_RADIUS: f64 = 0.70;

/// Soft edge width of the rings.
pub const EDGE: f64 = 0.01;

/// Radius of the thin trim ring.
pub const TRIM_RADIUS: f64 = 0.65;

/// Gear edge radius at rotated angle `a`.
#[inline]
pub fn gear_shape(a: f64) -> f64 {
    GEAR_RADIUS + TOOTH_DEPTH * (a * TEETH).cos()
}

/// Breathing multiplier on the gear alpha, in [0.6, 1.0].
#[inline]
pub fn gear_breathing(t: f64) -> f64 {
    0.8 + 0.2 * t.sin()
}

/// Coverage of the gear's parts at one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearSample {
    /// Toothed ring coverage, in [0, 1].
    pub ring: f64,
    /// Trim ring coverage, in [0, 1].
    pub trim: f64,
}

/// Outer edge coverage at normalized radius `r` for edge radius `shape`.
///
/// Inclusive: `r == shape` is fully covered, coverage fades to 0 at
/// `shape + EDGE`.
#[inline]
pub fn outer_edge(r: f64, shape: f64) -> f64 {
    smoothstep(shape + EDGE, shape, r)
}

/// Gear coverage at normalized radius `r` and rotated angle `a`.
pub fn gear_sample(r: f64, a: f64) -> GearSample {
    let outer = outer_edge(r, gear_shape(a));
    let inner = smoothstep(INNER_RADIUS, INNER_RADIUS + EDGE, r);
    let trim = smoothstep(TRIM_RADIUS + EDGE, TRIM_RADIUS, r)
        * smoothstep(TRIM_RADIUS - EDGE, TRIM_RADIUS, r);
    GearSample {
        ring: outer * inner,
        trim,
    }
}

/// Gear color at surface coordinate `uv`.
pub fn gear_color(uv: [f64; 2], frame: FrameTime, params: &GearParams) -> Color {
    let t = frame.seconds();
    let x = uv[0] - 0.5;
    let y = uv[1] - 0.5;
    let r = (x * x + y * y).sqrt() * 2.0;
    let a = y.atan2(x) - t * ROTATION_SPEED;

    let sample = gear_sample(r, a);
    let alpha = (sample.ring + sample.trim) * gear_breathing(t);
    Color::from_array(params.color)
        .scale(1.0 + sample.ring)
        .with_alpha(alpha)
}
