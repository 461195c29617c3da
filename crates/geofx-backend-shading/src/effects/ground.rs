//! Ground plane: three concurrent rings expanding from the center.

use geofx_spec::GroundParams;

use crate::clock::FrameTime;
use crate::color::Color;
use crate::math::modulo;

/// Number of concurrent rings.
pub const RING_COUNT: usize = 3;

/// Expansion speed in normalized radius per second.
pub const RIPPLE_SPEED: f64 = 0.2;

/// Phase lag between consecutive rings.
pub const RING_SPACING: f64 = 0.3;

/// Thickness of each ring.
pub const RING_WIDTH: f64 = 0.02;

/// Center of the ground plane in UV space.
pub const RIPPLE_CENTER: [f64; 2] = [0.5, 0.5];

/// Front radius of ring `index` at time `t`, in [0, 1).
#[inline]
pub fn ring_front(index: usize, t: f64) -> f64 {
    modulo(t * RIPPLE_SPEED - index as f64 * RING_SPACING, 1.0)
}

/// Alpha contributed by ring `index` at radial distance `d`.
///
/// Rings fade as they expand. The band is open at both ends.
#[inline]
pub fn ring_alpha(index: usize, d: f64, t: f64) -> f64 {
    let r = ring_front(index, t);
    if d > r && d < r + RING_WIDTH {
        (1.0 - r) * 0.5
    } else {
        0.0
    }
}

/// Summed alpha of all rings at distance `d`.
///
/// Not clamped: overlapping rings may exceed 1 and are clamped when the
/// material is composited.
pub fn ripple_alpha(d: f64, t: f64) -> f64 {
    (0..RING_COUNT).map(|i| ring_alpha(i, d, t)).sum()
}

/// Ground color at surface coordinate `uv`, with the unclamped ripple alpha.
pub fn ground_color(uv: [f64; 2], frame: FrameTime, params: &GroundParams) -> Color {
    let dx = uv[0] - RIPPLE_CENTER[0];
    let dy = uv[1] - RIPPLE_CENTER[1];
    let d = (dx * dx + dy * dy).sqrt();
    Color::from_array(params.color).with_alpha(ripple_alpha(d, frame.seconds()))
}
