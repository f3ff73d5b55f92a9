//! # cb_core - Fixed-Shape Observation Encoding for Car-and-Ball RL
//!
//! Converts a per-tick snapshot of a multi-agent car-and-ball match
//! into flat `f32` feature vectors for machine-learning policies.
//!
//! ## Features
//! - Side-invariant encoding: Orange-team observations read mirrored
//!   state views so every policy learns from the Blue perspective
//! - Observer-relative features for the ball and every peer
//! - Fixed output shape via configurable ally/enemy slot capacities,
//!   with zero-padding and roster-order truncation
//! - Boost pad respawn countdowns tracked in an explicitly owned,
//!   once-per-tick-advanced collaborator
//!
//! The crate performs no physics and no learning; it is the pure
//! encoding layer between a state source and a training loop.

pub mod engine;
pub mod error;

// Re-export the observation API
pub use engine::boost_pads::BoostPadTracker;
pub use engine::kinematics::KinematicState;
pub use engine::observation::{
    FlatObservation, NormCoefs, ObsConfig, ObservationBuilder, PaddedObsBuilder,
    RelativeObsBuilder, ACTION_WIDTH, GLOBAL_WIDTH, PLAYER_BLOCK_WIDTH, SELF_BLOCK_WIDTH,
};
pub use engine::tick_snapshot::{CarSnap, TickSnapshot};
pub use engine::types::{CarId, Team};
pub use error::{ObsError, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
