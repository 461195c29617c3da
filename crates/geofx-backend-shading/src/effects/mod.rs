//! Animated surface effects.
//!
//! Each effect is a set of pure formulas of a local surface coordinate, a
//! [`FrameTime`] and the effect's parameters. [`AnimatedEffectSet`] owns the
//! clock that produces the frame snapshots.

pub mod bar;
pub mod gear;
pub mod ground;
pub mod side;

pub use bar::{bar_alpha, bar_color, pulse};
pub use gear::{gear_breathing, gear_color, gear_sample, gear_shape, GearSample};
pub use ground::{ground_color, ring_alpha, ring_front, ripple_alpha};
pub use side::{in_scan_band, scan_position, side_color};

use crate::clock::{AnimationClock, ClockUpdate, FrameTime};

/// Owner of the animation clock shared by every animated surface.
#[derive(Debug, Clone, Default)]
pub struct AnimatedEffectSet {
    clock: AnimationClock,
}

impl AnimatedEffectSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one frame delta. Call once per frame, before any
    /// surface is shaded.
    pub fn tick(&mut self, delta: f64) -> ClockUpdate {
        self.clock.advance(delta)
    }

    /// Move the clock to an absolute time.
    pub fn tick_to(&mut self, seconds: f64) -> ClockUpdate {
        self.clock.set(seconds)
    }

    /// Snapshot shared by every surface shaded this frame.
    pub fn frame(&self) -> FrameTime {
        self.clock.frame()
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }
}
