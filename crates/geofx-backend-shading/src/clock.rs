//! The shared animation clock.
//!
//! The render loop advances the clock once per frame and hands out a
//! [`FrameTime`] snapshot. Every surface shaded in that frame reads the same
//! snapshot; the engine never samples wall time itself.

/// Immutable per-frame time snapshot, in seconds.
///
/// `Copy`, so it can be handed to worker threads without sharing the clock.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct FrameTime {
    seconds: f64,
    index: u64,
}

impl FrameTime {
    /// A standalone snapshot at `seconds`, e.g. for a single still render.
    ///
    /// Non-finite values become 0.
    pub fn at(seconds: f64) -> Self {
        Self {
            seconds: if seconds.is_finite() { seconds } else { 0.0 },
            index: 0,
        }
    }

    /// Clock value in seconds. Always finite.
    #[inline]
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Number of accepted clock updates before this snapshot was taken.
    pub fn index(&self) -> u64 {
        self.index
    }
}

/// Outcome of a clock update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockUpdate {
    /// The clock moved to the new value.
    Advanced,
    /// The input was non-finite or would move time backwards; the clock kept
    /// its last valid value.
    Rejected,
}

/// Monotonic animation clock owned by the render loop.
#[derive(Debug, Clone, Default)]
pub struct AnimationClock {
    seconds: f64,
    updates: u64,
}

impl AnimationClock {
    /// A clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// A clock starting at `seconds` (0 if non-finite or negative).
    pub fn starting_at(seconds: f64) -> Self {
        Self {
            seconds: if seconds.is_finite() && seconds >= 0.0 {
                seconds
            } else {
                0.0
            },
            updates: 0,
        }
    }

    /// Advance by a frame delta.
    pub fn advance(&mut self, delta: f64) -> ClockUpdate {
        if !delta.is_finite() || delta < 0.0 {
            return ClockUpdate::Rejected;
        }
        self.set(self.seconds + delta)
    }

    /// Move to an absolute time.
    pub fn set(&mut self, seconds: f64) -> ClockUpdate {
        if !seconds.is_finite() || seconds < self.seconds {
            return ClockUpdate::Rejected;
        }
        self.seconds = seconds;
        self.updates += 1;
        ClockUpdate::Advanced
    }

    /// Current clock value in seconds.
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Snapshot for the current frame.
    pub fn frame(&self) -> FrameTime {
        FrameTime {
            seconds: self.seconds,
            index: self.updates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates() {
        let mut clock = AnimationClock::new();
        assert_eq!(clock.advance(0.5), ClockUpdate::Advanced);
        assert_eq!(clock.advance(0.25), ClockUpdate::Advanced);
        assert_eq!(clock.seconds(), 0.75);
        assert_eq!(clock.frame().index(), 2);
    }

    #[test]
    fn test_non_finite_rejected_keeps_last_value() {
        let mut clock = AnimationClock::starting_at(1.0);
        assert_eq!(clock.advance(f64::NAN), ClockUpdate::Rejected);
        assert_eq!(clock.advance(f64::INFINITY), ClockUpdate::Rejected);
        assert_eq!(clock.set(f64::NEG_INFINITY), ClockUpdate::Rejected);
        assert_eq!(clock.seconds(), 1.0);
        assert_eq!(clock.frame().index(), 0);
    }

    #[test]
    fn test_time_never_goes_backwards() {
        let mut clock = AnimationClock::starting_at(2.0);
        assert_eq!(clock.advance(-0.1), ClockUpdate::Rejected);
        assert_eq!(clock.set(1.0), ClockUpdate::Rejected);
        assert_eq!(clock.set(2.0), ClockUpdate::Advanced);
        assert_eq!(clock.seconds(), 2.0);
    }

    #[test]
    fn test_overflowing_delta_rejected() {
        let mut clock = AnimationClock::starting_at(f64::MAX);
        assert_eq!(clock.advance(f64::MAX), ClockUpdate::Rejected);
        assert_eq!(clock.seconds(), f64::MAX);
    }

    #[test]
    fn test_snapshot_is_stable() {
        let mut clock = AnimationClock::new();
        clock.advance(1.0);
        let frame = clock.frame();
        clock.advance(1.0);
        assert_eq!(frame.seconds(), 1.0);
        assert_eq!(clock.frame().seconds(), 2.0);
    }

    #[test]
    fn test_frame_time_at_sanitizes() {
        assert_eq!(FrameTime::at(f64::NAN).seconds(), 0.0);
        assert_eq!(FrameTime::at(3.0).seconds(), 3.0);
    }
}
