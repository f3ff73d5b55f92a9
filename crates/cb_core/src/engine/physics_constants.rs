//! Physics constants for the car-and-ball arena
//!
//! Values match the standard arena the policies are trained on. The
//! observation layer only reads these for normalization and boost pad
//! bookkeeping; it never steps physics.

// ============================================================
// Arena Geometry
// ============================================================
pub mod field {
    /// Side wall distance from center (uu)
    pub const SIDE_WALL_X: f32 = 4096.0;

    /// Back net distance from center (uu) - goals sit behind the back wall
    pub const BACK_NET_Y: f32 = 6000.0;

    /// Back wall distance from center (uu)
    pub const BACK_WALL_Y: f32 = 5120.0;

    /// Ceiling height (uu)
    pub const CEILING_Z: f32 = 2044.0;
}

// ============================================================
// Speed Limits
// ============================================================
pub mod speed {
    /// Maximum car speed (uu/s), reachable only while boosting
    pub const CAR_MAX_SPEED: f32 = 2300.0;

    /// Maximum ball speed (uu/s)
    pub const BALL_MAX_SPEED: f32 = 6000.0;

    /// Maximum car angular speed (rad/s)
    pub const CAR_MAX_ANG_VEL: f32 = 5.5;
}

// ============================================================
// Simulation Timing
// ============================================================
pub mod tick {
    /// Physics tick rate (Hz)
    pub const TICK_RATE_HZ: f32 = 120.0;

    /// Duration of one physics tick (seconds)
    pub const TICK_DURATION_SECS: f32 = 1.0 / 120.0;

    /// Default number of physics ticks elapsed per control step
    pub const DEFAULT_TICK_SKIP: u32 = 8;
}

// ============================================================
// Boost Pads
// ============================================================
pub mod boost_pad {
    /// Number of boost pads on a standard arena
    pub const PAD_COUNT: usize = 34;

    /// Indices of the six large (100-boost) pads.
    ///
    /// The set is symmetric under the mirror permutation
    /// (`i -> PAD_COUNT - 1 - i`), so mirrored pad arrays keep large
    /// pads in large slots.
    pub const LARGE_PAD_INDICES: [usize; 6] = [3, 4, 15, 18, 29, 30];

    /// Respawn countdown for a consumed large pad (seconds)
    pub const LARGE_PAD_RESPAWN_SECS: f32 = 10.0;

    /// Respawn countdown for a consumed small pad (seconds)
    pub const SMALL_PAD_RESPAWN_SECS: f32 = 4.0;

    /// True if the pad at `index` is one of the six large pads
    #[inline]
    pub fn is_large(index: usize) -> bool {
        LARGE_PAD_INDICES.contains(&index)
    }

    /// Respawn countdown for the pad at `index` (seconds)
    #[inline]
    pub fn respawn_secs(index: usize) -> f32 {
        if is_large(index) {
            LARGE_PAD_RESPAWN_SECS
        } else {
            SMALL_PAD_RESPAWN_SECS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_pad_indices_mirror_symmetric() {
        for &i in &boost_pad::LARGE_PAD_INDICES {
            let mirrored = boost_pad::PAD_COUNT - 1 - i;
            assert!(
                boost_pad::is_large(mirrored),
                "pad {} is large but its mirror {} is not",
                i,
                mirrored
            );
        }
    }

    #[test]
    fn test_respawn_secs() {
        assert_eq!(boost_pad::respawn_secs(3), boost_pad::LARGE_PAD_RESPAWN_SECS);
        assert_eq!(boost_pad::respawn_secs(0), boost_pad::SMALL_PAD_RESPAWN_SECS);
    }

    #[test]
    fn test_tick_duration() {
        assert!((tick::TICK_DURATION_SECS * tick::TICK_RATE_HZ - 1.0).abs() < 1e-6);
    }
}
