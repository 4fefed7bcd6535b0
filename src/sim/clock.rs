//! Wall-clock countdown
//!
//! The survival timer is paced by real elapsed time, not by ticks: callers
//! feed it the measured frame delta and it converts whole accumulated
//! seconds into decrements. Tick rate never changes how fast it runs.

use serde::{Deserialize, Serialize};

/// A once-per-second countdown driven by accumulated elapsed time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Countdown {
    /// Whole seconds left
    remaining: u32,
    /// Elapsed time not yet converted into a whole second.
    /// f64: summing f32 frame deltas at 60 Hz drifts below the true
    /// elapsed time and lands a second short over a ten second run.
    acc: f64,
}

impl Countdown {
    pub fn new(secs: u32) -> Self {
        Self {
            remaining: secs,
            acc: 0.0,
        }
    }

    /// Restart from `secs` with no leftover fraction
    pub fn reset(&mut self, secs: u32) {
        self.remaining = secs;
        self.acc = 0.0;
    }

    /// Feed elapsed real seconds
    ///
    /// Decrements once per whole accumulated second and never goes below
    /// zero. Returns true exactly when the countdown reaches zero, and
    /// never again after that.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.acc += f64::from(dt.max(0.0));

        let mut expired = false;
        while self.acc >= 1.0 && self.remaining > 0 {
            self.acc -= 1.0;
            self.remaining -= 1;
            if self.remaining == 0 {
                expired = true;
            }
        }
        expired
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decrements_once_per_accumulated_second() {
        let mut cd = Countdown::new(10);
        assert!(!cd.advance(0.5));
        assert_eq!(cd.remaining(), 10);
        assert!(!cd.advance(0.5));
        assert_eq!(cd.remaining(), 9);
    }

    #[test]
    fn test_expires_exactly_once() {
        let mut cd = Countdown::new(2);
        assert!(!cd.advance(1.0));
        assert_eq!(cd.remaining(), 1);
        assert!(cd.advance(1.0));
        assert_eq!(cd.remaining(), 0);
        // Already expired: no further edge
        assert!(!cd.advance(1.0));
        assert_eq!(cd.remaining(), 0);
    }

    #[test]
    fn test_large_dt_drains_and_saturates() {
        let mut cd = Countdown::new(3);
        assert!(cd.advance(10.0));
        assert_eq!(cd.remaining(), 0);
        assert!(!cd.advance(10.0));
    }

    #[test]
    fn test_pacing_is_independent_of_slicing() {
        // Same elapsed time in different slice sizes lands on the same count
        let mut fine = Countdown::new(8);
        let mut coarse = Countdown::new(8);
        for _ in 0..20 {
            fine.advance(0.25);
        }
        for _ in 0..5 {
            coarse.advance(1.0);
        }
        assert_eq!(fine.remaining(), coarse.remaining());
        assert_eq!(fine.remaining(), 3);
    }

    #[test]
    fn test_sixty_hz_frames_expire_on_the_exact_frame() {
        // Ten seconds sliced into 600 nominal frame deltas must reach zero
        // on frame 600, not drift past it
        let dt = 1.0f32 / 60.0;
        let mut cd = Countdown::new(10);
        let mut expired_at = None;
        for frame in 1..=660u32 {
            if cd.advance(dt) {
                expired_at = Some(frame);
                break;
            }
        }
        assert_eq!(expired_at, Some(600));
        assert_eq!(cd.remaining(), 0);
    }

    #[test]
    fn test_nonpositive_dt_is_ignored() {
        let mut cd = Countdown::new(5);
        assert!(!cd.advance(0.0));
        assert!(!cd.advance(-3.0));
        assert_eq!(cd.remaining(), 5);
        assert!(!cd.advance(1.0));
        assert_eq!(cd.remaining(), 4);
    }

    #[test]
    fn test_reset_clears_fraction() {
        let mut cd = Countdown::new(3);
        cd.advance(0.9);
        cd.reset(3);
        cd.advance(0.2);
        assert_eq!(cd.remaining(), 3);
    }

    proptest! {
        #[test]
        fn prop_monotonic_and_single_expiry(dts in proptest::collection::vec(0.0f32..0.4, 1..200)) {
            let mut cd = Countdown::new(5);
            let mut last = cd.remaining();
            let mut edges = 0;
            for dt in dts {
                if cd.advance(dt) {
                    edges += 1;
                }
                prop_assert!(cd.remaining() <= last);
                last = cd.remaining();
            }
            prop_assert!(edges <= 1);
        }
    }
}
