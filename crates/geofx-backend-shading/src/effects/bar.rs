//! Data bar: vertical alpha gradient with a breathing pulse and a lit top cap.

use geofx_spec::BarParams;

use crate::clock::FrameTime;
use crate::color::Color;

/// Angular frequency of the pulse, in radians per second.
pub const PULSE_RATE: f64 = 3.0;

/// `uv.y` above which the top cap highlight is added.
pub const TOP_CAP_START: f64 = 0.95;

/// Flat highlight added to every channel on the top cap.
pub const TOP_CAP_HIGHLIGHT: f64 = 0.5;

/// Alpha at height `v`: half-transparent at the base, opaque at the top.
#[inline]
pub fn bar_alpha(v: f64) -> f64 {
    0.6 + 0.4 * v
}

/// Brightness multiplier at time `t`, in [0.6, 1.0].
#[inline]
pub fn pulse(t: f64) -> f64 {
    0.8 + 0.2 * (t * PULSE_RATE).sin()
}

/// Bar color at surface coordinate `uv`.
pub fn bar_color(uv: [f64; 2], frame: FrameTime, params: &BarParams) -> Color {
    let mut color = Color::from_array(params.color).scale(pulse(frame.seconds()));
    if uv[1] > TOP_CAP_START {
        color = color.add_rgb(&Color::gray(TOP_CAP_HIGHLIGHT));
    }
    color.with_alpha(bar_alpha(uv[1]))
}
