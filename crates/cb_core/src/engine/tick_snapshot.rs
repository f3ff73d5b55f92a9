//! Tick snapshot - immutable per-tick game state
//!
//! ## Design Principles
//! 1. **Snapshot is SSOT**: observation builders read this single truth
//!    and nothing else from the simulation
//! 2. **Immutable**: created once per tick by the state source, never
//!    modified by the observation layer
//! 3. **Both frames precomputed**: every body carries its canonical and
//!    mirrored state so frame selection is a branch, not a transform
//!
//! The state source (an external physics bridge) is responsible for
//! filling both frames consistently; `KinematicState::mirrored` defines
//! what "consistently" means.

use crate::engine::kinematics::KinematicState;
use crate::engine::physics_constants::boost_pad::PAD_COUNT;
use crate::engine::types::{CarId, Team};

// ============================================================================
// TickSnapshot
// ============================================================================

/// Read-only state snapshot for one simulation tick.
#[derive(Clone, Debug)]
pub struct TickSnapshot {
    /// Current tick number, strictly increasing across snapshots
    pub tick: u64,

    /// Ball state, canonical frame
    pub ball: KinematicState,

    /// Ball state, mirrored frame
    pub ball_mirrored: KinematicState,

    /// Current roster. Order is the encounter order observation
    /// builders use; it may differ between ticks.
    pub cars: Vec<CarSnap>,

    /// Boost pad active flags, canonical frame
    pub boost_pads: [bool; PAD_COUNT],

    /// Boost pad active flags, mirrored frame.
    /// `boost_pads_mirrored[i] == boost_pads[PAD_COUNT - 1 - i]`.
    pub boost_pads_mirrored: [bool; PAD_COUNT],
}

impl TickSnapshot {
    /// Ball state in the requested frame
    #[inline]
    pub fn ball_view(&self, mirrored: bool) -> &KinematicState {
        if mirrored {
            &self.ball_mirrored
        } else {
            &self.ball
        }
    }

    /// Boost pad flags in the requested frame
    #[inline]
    pub fn pads_view(&self, mirrored: bool) -> &[bool; PAD_COUNT] {
        if mirrored {
            &self.boost_pads_mirrored
        } else {
            &self.boost_pads
        }
    }

    /// Look up a car by identity, not roster index
    pub fn car(&self, id: CarId) -> Option<&CarSnap> {
        self.cars.iter().find(|c| c.id == id)
    }
}

// ============================================================================
// CarSnap
// ============================================================================

/// One car's state snapshot.
#[derive(Clone, Copy, Debug)]
pub struct CarSnap {
    /// Stable identity
    pub id: CarId,

    /// Team membership
    pub team: Team,

    /// Kinematic state, canonical frame
    pub state: KinematicState,

    /// Kinematic state, mirrored frame
    pub state_mirrored: KinematicState,

    /// Boost amount (0.0-1.0)
    pub boost: f32,

    /// Wheels on a drivable surface
    pub on_ground: bool,

    /// Flip/double-jump still available
    pub has_flip: bool,

    /// Currently demolished
    pub is_demolished: bool,

    /// Seconds until respawn while demolished, 0 otherwise
    pub demo_respawn_timer: f32,
}

impl CarSnap {
    /// Kinematic state in the requested frame
    #[inline]
    pub fn state_view(&self, mirrored: bool) -> &KinematicState {
        if mirrored {
            &self.state_mirrored
        } else {
            &self.state
        }
    }

    /// Build a snap from a canonical state, deriving the mirrored frame.
    pub fn from_canonical(id: CarId, team: Team, state: KinematicState) -> CarSnap {
        CarSnap {
            id,
            team,
            state,
            state_mirrored: state.mirrored(),
            boost: 0.33,
            on_ground: true,
            has_flip: true,
            is_demolished: false,
            demo_respawn_timer: 0.0,
        }
    }
}
