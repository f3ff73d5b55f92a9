//! ObservationBuilder trait and flat output type
//!
//! SSOT contract: observations derive from the [`TickSnapshot`] plus
//! the two externally owned collaborators passed into each call (the
//! boost pad tracker and the previous action). Builders hold
//! configuration only, never per-tick state, so one builder can serve
//! every car on every tick, including from parallel callers.

use serde::{Deserialize, Serialize};

use crate::engine::boost_pads::BoostPadTracker;
use crate::engine::observation::common::ACTION_WIDTH;
use crate::engine::tick_snapshot::TickSnapshot;
use crate::engine::types::CarId;
use crate::error::Result;

/// Observation builder trait.
///
/// One call per observing car per tick. The boost pad tracker must
/// already have been advanced for `snapshot.tick` (single writer, many
/// readers).
pub trait ObservationBuilder {
    /// Output observation type
    type Output;

    /// Build the observation for `car_id`'s perspective.
    ///
    /// Fails with [`ObsError::CarNotInRoster`] if `car_id` is absent
    /// from the snapshot - a malformed observation would silently
    /// corrupt the training signal downstream.
    ///
    /// [`ObsError::CarNotInRoster`]: crate::error::ObsError::CarNotInRoster
    fn build(
        &self,
        snapshot: &TickSnapshot,
        pads: &BoostPadTracker,
        car_id: CarId,
        previous_action: &[f32; ACTION_WIDTH],
    ) -> Result<Self::Output>;
}

/// Flat observation vector for ML pipelines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatObservation {
    /// Observing car
    pub car_id: CarId,
    /// Tick the observation was built from
    pub tick: u64,
    /// True if the mirrored state views were read (Orange perspective)
    pub mirrored: bool,
    /// The feature vector
    pub values: Vec<f32>,
}

impl FlatObservation {
    /// Number of features
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow the feature vector
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Consume into the raw feature vector
    pub fn into_vec(self) -> Vec<f32> {
        self.values
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
