//! Region side-wall: depth gradient with a sweeping scan line.

use geofx_spec::SideParams;

use crate::clock::FrameTime;
use crate::color::Color;
use crate::math::modulo;

/// Sweep speed along the extrusion axis, in depth units per second.
pub const SCAN_SPEED: f64 = 0.5;

/// Thickness of the scan band.
pub const SCAN_WIDTH: f64 = 0.1;

/// Tint added inside the scan band.
pub const SCAN_HIGHLIGHT: Color = Color::rgb(1.2, 1.6, 2.0);

/// Lower edge of the scan band at time `t`, in [0, depth).
#[inline]
pub fn scan_position(t: f64, depth: f64) -> f64 {
    modulo(t * SCAN_SPEED, depth)
}

/// Whether `z` lies strictly inside the scan band.
#[inline]
pub fn in_scan_band(z: f64, t: f64, depth: f64) -> bool {
    let scan = scan_position(t, depth);
    z > scan && z < scan + SCAN_WIDTH
}

/// Side-wall color at extrusion coordinate `z`.
///
/// The wall brightens toward the top; the band is only computed when the
/// scan line is enabled.
pub fn side_color(z: f64, frame: FrameTime, params: &SideParams) -> Color {
    let base = Color::from_array(params.color).scale(0.5 + z * 1.5);
    if params.scan_enabled && in_scan_band(z, frame.seconds(), params.depth) {
        base.add_rgb(&SCAN_HIGHLIGHT)
    } else {
        base
    }
}
