//! Smooth geographic region masks.
//!
//! A mask is the product of two independent 1D smooth gates, one along x and
//! one along y, giving a soft rectangular region of influence. Gates clamp, so
//! masks stay in [0, 1] for any position, however far outside the map.

use crate::math::smoothstep;

/// Smooth 1D gate: 0 at `edge0`, 1 at `edge1`, Hermite-eased in between.
///
/// Reversed edges open the gate toward negative values. Equal edges are a
/// hard step at `value >= edge1`.
#[inline]
pub fn smooth_gate(value: f64, edge0: f64, edge1: f64) -> f64 {
    smoothstep(edge0, edge1, value)
}

/// A gate along one axis: 0 at `from`, 1 at `to`, eased in between.
///
/// `from > to` gives a gate that opens toward negative values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gate {
    pub from: f64,
    pub to: f64,
}

impl Gate {
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Gate value at `v`, in [0, 1].
    #[inline]
    pub fn eval(&self, v: f64) -> f64 {
        smooth_gate(v, self.from, self.to)
    }
}

/// Mask at `position` for the given x and y gates.
#[inline]
pub fn mask(position: [f64; 2], x_gate: Gate, y_gate: Gate) -> f64 {
    x_gate.eval(position[0]) * y_gate.eval(position[1])
}

/// The named regions used by the terrain colorizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionMask {
    /// High plateau in the south-west of the map.
    Plateau,
    /// Arid basin in the north-west of the map.
    Desert,
}

impl RegionMask {
    /// The x and y gates of the region.
    pub const fn thresholds(&self) -> (Gate, Gate) {
        match self {
            RegionMask::Plateau => (Gate::new(0.0, -15.0), Gate::new(-20.0, 10.0)),
            RegionMask::Desert => (Gate::new(5.0, -15.0), Gate::new(0.0, 10.0)),
        }
    }

    /// Mask value at `position`, in [0, 1].
    #[inline]
    pub fn evaluate(&self, position: [f64; 2]) -> f64 {
        let (x_gate, y_gate) = self.thresholds();
        mask(position, x_gate, y_gate)
    }
}
