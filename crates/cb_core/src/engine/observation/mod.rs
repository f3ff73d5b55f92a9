//! Observation Module - TickSnapshot-based Observation Builders
//!
//! ## Design Principles
//!
//! 1. **SSOT Contract**: observations derive from [`TickSnapshot`] plus
//!    the boost pad tracker and previous action passed into each call
//! 2. **Frame selection up front**: one branch per build picks the
//!    canonical or mirrored views; every block encoder is frame-agnostic
//! 3. **Composition over hierarchy**: both builders share the block
//!    encoders in [`common`]; variants are selected by constructing the
//!    matching config record, not by subclassing
//!
//! ## Available Builders
//!
//! - [`RelativeObsBuilder`]: unpadded, output length scales with roster
//! - [`PaddedObsBuilder`]: fixed shape from [`ObsConfig`] capacities,
//!   with zero-padded and truncated peer slots
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cb_core::{BoostPadTracker, ObservationBuilder, PaddedObsBuilder};
//!
//! let builder = PaddedObsBuilder::with_defaults();
//! let mut tracker = BoostPadTracker::new(8);
//!
//! // Once per tick:
//! tracker.advance(&snapshot);
//! // Then once per car (independent, may run concurrently):
//! let obs = builder.build(&snapshot, &tracker, car_id, &previous_action)?;
//! ```
//!
//! [`TickSnapshot`]: crate::engine::tick_snapshot::TickSnapshot

mod builder;
mod common;
mod padded_vector;
mod relative_vector;

pub use builder::{FlatObservation, ObservationBuilder};
pub use common::{
    encode_peer_block, is_mirrored, NormCoefs, ACTION_WIDTH, BALL_RELATIVE_WIDTH,
    CAR_RELATIVE_WIDTH, CAR_STATE_WIDTH, GLOBAL_WIDTH, PLAYER_BLOCK_WIDTH, SELF_BLOCK_WIDTH,
};
pub use padded_vector::{ObsConfig, PaddedObsBuilder};
pub use relative_vector::RelativeObsBuilder;
