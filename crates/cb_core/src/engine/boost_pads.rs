//! Boost pad respawn timers
//!
//! The tick snapshot only carries active/inactive flags; how long until
//! an inactive pad comes back must be tracked across ticks. That state
//! lives here, in an explicitly owned tracker, never inside the
//! observation builders.
//!
//! Write/read discipline per tick: the control loop calls [`advance`]
//! exactly once when a new snapshot arrives, then any number of
//! builders read the timers concurrently through `&BoostPadTracker`.
//! `advance` is guarded by the snapshot tick number, so a redundant
//! call for the same tick is a no-op.
//!
//! [`advance`]: BoostPadTracker::advance

use crate::engine::physics_constants::boost_pad::{respawn_secs, PAD_COUNT};
use crate::engine::physics_constants::tick::TICK_DURATION_SECS;
use crate::engine::tick_snapshot::TickSnapshot;

/// Countdown timers for all boost pads, canonical and mirrored.
#[derive(Clone, Debug)]
pub struct BoostPadTracker {
    /// Physics ticks elapsed between consecutive snapshots
    tick_skip: u32,
    /// Seconds until respawn per pad, canonical order; 0 when active
    timers: [f32; PAD_COUNT],
    /// Canonical timers under the mirror permutation (array reversal)
    timers_mirrored: [f32; PAD_COUNT],
    /// Active flags seen at the previous advance
    prev_active: [bool; PAD_COUNT],
    /// Tick of the last applied advance
    last_tick: Option<u64>,
}

impl BoostPadTracker {
    /// New tracker with every pad active.
    pub fn new(tick_skip: u32) -> BoostPadTracker {
        BoostPadTracker {
            tick_skip,
            timers: [0.0; PAD_COUNT],
            timers_mirrored: [0.0; PAD_COUNT],
            prev_active: [true; PAD_COUNT],
            last_tick: None,
        }
    }

    /// Ticks elapsed per control step
    pub fn tick_skip(&self) -> u32 {
        self.tick_skip
    }

    /// Apply one control step's worth of timer decay.
    ///
    /// Per pad: active resets the timer to 0; a pad that was active
    /// last step and is inactive now starts its respawn countdown; a
    /// pad already counting loses `tick_skip / tick_rate` seconds,
    /// floored at 0. Calling again with the same tick changes nothing.
    pub fn advance(&mut self, snapshot: &TickSnapshot) {
        if self.last_tick == Some(snapshot.tick) {
            return;
        }
        let elapsed = self.tick_skip as f32 * TICK_DURATION_SECS;

        for (i, &active) in snapshot.boost_pads.iter().enumerate() {
            self.timers[i] = if active {
                0.0
            } else if self.prev_active[i] {
                respawn_secs(i)
            } else {
                (self.timers[i] - elapsed).max(0.0)
            };
            self.prev_active[i] = active;
        }
        for i in 0..PAD_COUNT {
            self.timers_mirrored[i] = self.timers[PAD_COUNT - 1 - i];
        }

        self.last_tick = Some(snapshot.tick);
        log::trace!(
            "boost pad timers advanced: tick={} elapsed={:.4}s",
            snapshot.tick,
            elapsed
        );
    }

    /// Timer array in the requested frame
    #[inline]
    pub fn timers(&self, mirrored: bool) -> &[f32; PAD_COUNT] {
        if mirrored {
            &self.timers_mirrored
        } else {
            &self.timers
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::kinematics::KinematicState;

    fn snapshot_with_pads(tick: u64, pads: [bool; PAD_COUNT]) -> TickSnapshot {
        let mut mirrored = [false; PAD_COUNT];
        for i in 0..PAD_COUNT {
            mirrored[i] = pads[PAD_COUNT - 1 - i];
        }
        TickSnapshot {
            tick,
            ball: KinematicState::default(),
            ball_mirrored: KinematicState::default(),
            cars: vec![],
            boost_pads: pads,
            boost_pads_mirrored: mirrored,
        }
    }

    #[test]
    fn test_all_active_stays_zero() {
        let mut tracker = BoostPadTracker::new(8);
        tracker.advance(&snapshot_with_pads(1, [true; PAD_COUNT]));
        assert!(tracker.timers(false).iter().all(|&t| t == 0.0));
    }

    #[test]
    fn test_newly_inactive_pad_starts_countdown() {
        let mut tracker = BoostPadTracker::new(8);
        let mut pads = [true; PAD_COUNT];
        pads[3] = false; // large pad
        pads[0] = false; // small pad
        tracker.advance(&snapshot_with_pads(1, pads));
        assert_eq!(tracker.timers(false)[3], 10.0);
        assert_eq!(tracker.timers(false)[0], 4.0);
    }

    #[test]
    fn test_countdown_decreases_by_tick_skip() {
        let mut tracker = BoostPadTracker::new(8);
        let mut pads = [true; PAD_COUNT];
        pads[0] = false;
        tracker.advance(&snapshot_with_pads(1, pads));
        tracker.advance(&snapshot_with_pads(2, pads));

        // One control step at tick_skip=8 is 8/120 s.
        let expected = 4.0 - 8.0 / 120.0;
        assert!((tracker.timers(false)[0] - expected).abs() < 1e-6);
        // Active pads are untouched by decay.
        assert_eq!(tracker.timers(false)[1], 0.0);
    }

    #[test]
    fn test_advance_same_tick_is_noop() {
        let mut tracker = BoostPadTracker::new(8);
        let mut pads = [true; PAD_COUNT];
        pads[0] = false;
        let snapshot = snapshot_with_pads(1, pads);
        tracker.advance(&snapshot);
        let before = *tracker.timers(false);
        tracker.advance(&snapshot);
        assert_eq!(before, *tracker.timers(false));
    }

    #[test]
    fn test_countdown_floors_at_zero() {
        let mut tracker = BoostPadTracker::new(8);
        let mut pads = [true; PAD_COUNT];
        pads[0] = false;
        // 4s countdown at 1/15s per step needs 60 steps; run extra.
        for tick in 1..=80u64 {
            tracker.advance(&snapshot_with_pads(tick, pads));
        }
        assert_eq!(tracker.timers(false)[0], 0.0);
    }

    #[test]
    fn test_reactivated_pad_resets_to_zero() {
        let mut tracker = BoostPadTracker::new(8);
        let mut pads = [true; PAD_COUNT];
        pads[5] = false;
        tracker.advance(&snapshot_with_pads(1, pads));
        assert!(tracker.timers(false)[5] > 0.0);
        pads[5] = true;
        tracker.advance(&snapshot_with_pads(2, pads));
        assert_eq!(tracker.timers(false)[5], 0.0);
    }

    #[test]
    fn test_mirrored_timers_are_reversed() {
        let mut tracker = BoostPadTracker::new(8);
        let mut pads = [true; PAD_COUNT];
        pads[0] = false;
        pads[3] = false;
        tracker.advance(&snapshot_with_pads(1, pads));

        let canonical = tracker.timers(false);
        let mirrored = tracker.timers(true);
        for i in 0..PAD_COUNT {
            assert_eq!(mirrored[i], canonical[PAD_COUNT - 1 - i]);
        }
        // Pad 0 (small) shows up at mirrored slot 33.
        assert_eq!(mirrored[PAD_COUNT - 1], 4.0);
    }
}
