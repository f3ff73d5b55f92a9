//! Padded observation vector (fixed shape)
//!
//! Same block layout as
//! [`RelativeObsBuilder`](super::RelativeObsBuilder), but peer blocks
//! are assembled into a fixed number of ally and enemy slots: short
//! groups are zero-padded, long groups truncated by roster encounter
//! order. The output length depends only on [`ObsConfig`], never on
//! how many cars are present, so one trained model serves 1v1 through
//! 3v3 alike.

use serde::{Deserialize, Serialize};

use crate::engine::boost_pads::BoostPadTracker;
use crate::engine::observation::builder::{FlatObservation, ObservationBuilder};
use crate::engine::observation::common::{
    encode_peer_block, is_mirrored, push_ball_relative, push_car_state, push_global, NormCoefs,
    ACTION_WIDTH, GLOBAL_WIDTH, PLAYER_BLOCK_WIDTH, SELF_BLOCK_WIDTH,
};
use crate::engine::tick_snapshot::TickSnapshot;
use crate::engine::types::CarId;
use crate::error::{ObsError, Result};

// =============================================================================
// ObsConfig
// =============================================================================

/// Capacity and normalization configuration for the padded encoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObsConfig {
    /// Ally slot budget baseline (one team's roster capacity)
    pub ally_capacity: usize,
    /// Enemy slots in the output
    pub enemy_capacity: usize,
    /// When true the observer consumes one slot of `ally_capacity`,
    /// leaving `ally_capacity - 1` peer slots. Explicit so the
    /// self-vs-ally budget is a tested choice, not an off-by-one.
    pub self_occupies_ally_slot: bool,
    /// Width of one peer slot. Encoded blocks are clipped or
    /// zero-extended to exactly this many floats.
    pub per_player_width: usize,
    /// Normalization coefficients
    pub coefs: NormCoefs,
}

impl Default for ObsConfig {
    fn default() -> Self {
        Self {
            ally_capacity: 3,
            enemy_capacity: 3,
            self_occupies_ally_slot: true,
            per_player_width: PLAYER_BLOCK_WIDTH,
            coefs: NormCoefs::default(),
        }
    }
}

impl ObsConfig {
    /// Peer slots reserved for allies
    pub fn ally_slots(&self) -> usize {
        self.ally_capacity
            .saturating_sub(usize::from(self.self_occupies_ally_slot))
    }

    /// Total output length for this config, independent of roster size
    pub fn output_width(&self) -> usize {
        GLOBAL_WIDTH
            + SELF_BLOCK_WIDTH
            + (self.ally_slots() + self.enemy_capacity) * self.per_player_width
    }

    /// Reject configs that cannot produce a meaningful encoding
    pub fn validate(&self) -> Result<()> {
        if self.per_player_width == 0 {
            return Err(ObsError::InvalidConfig {
                reason: "per_player_width must be > 0".into(),
            });
        }
        if self.enemy_capacity == 0 {
            return Err(ObsError::InvalidConfig {
                reason: "enemy_capacity must be > 0".into(),
            });
        }
        if self.self_occupies_ally_slot && self.ally_capacity == 0 {
            return Err(ObsError::InvalidConfig {
                reason: "ally_capacity must be > 0 when the observer occupies an ally slot".into(),
            });
        }
        Ok(())
    }
}

// =============================================================================
// PaddedObsBuilder
// =============================================================================

/// Builder for the fixed-shape padded observation.
#[derive(Debug, Clone)]
pub struct PaddedObsBuilder {
    config: ObsConfig,
}

impl PaddedObsBuilder {
    /// Create a builder, validating the config up front.
    pub fn new(config: ObsConfig) -> Result<PaddedObsBuilder> {
        config.validate()?;
        log::debug!(
            "padded obs builder: ally_slots={} enemy_slots={} width={}",
            config.ally_slots(),
            config.enemy_capacity,
            config.output_width()
        );
        Ok(PaddedObsBuilder { config })
    }

    /// Builder with the default 3v3 config
    pub fn with_defaults() -> PaddedObsBuilder {
        PaddedObsBuilder {
            config: ObsConfig::default(),
        }
    }

    /// The active configuration
    pub fn config(&self) -> &ObsConfig {
        &self.config
    }

    /// Fill `slots` peer slots from `blocks`: encounter order is
    /// preserved, excess blocks dropped, missing slots zero-filled.
    fn push_group(&self, values: &mut Vec<f32>, blocks: Vec<Vec<f32>>, slots: usize) {
        let width = self.config.per_player_width;
        let mut iter = blocks.into_iter();
        for _ in 0..slots {
            match iter.next() {
                Some(mut block) => {
                    block.resize(width, 0.0);
                    values.extend_from_slice(&block);
                }
                None => values.extend(std::iter::repeat(0.0).take(width)),
            }
        }
    }
}

impl ObservationBuilder for PaddedObsBuilder {
    type Output = FlatObservation;

    fn build(
        &self,
        snapshot: &TickSnapshot,
        pads: &BoostPadTracker,
        car_id: CarId,
        previous_action: &[f32; ACTION_WIDTH],
    ) -> Result<FlatObservation> {
        let observer = snapshot
            .car(car_id)
            .ok_or(ObsError::CarNotInRoster { car_id: car_id.0 })?;
        let mirrored = is_mirrored(observer.team);
        let ball = snapshot.ball_view(mirrored);
        let observer_state = observer.state_view(mirrored);

        let mut values = Vec::with_capacity(self.config.output_width());

        push_global(
            &mut values,
            ball,
            previous_action,
            snapshot.pads_view(mirrored),
            pads.timers(mirrored),
            &self.config.coefs,
        );
        push_car_state(&mut values, observer, observer_state, &self.config.coefs);
        push_ball_relative(&mut values, observer_state, ball, &self.config.coefs);

        let mut allies = Vec::new();
        let mut enemies = Vec::new();
        for other in &snapshot.cars {
            if other.id == observer.id {
                continue;
            }
            let block =
                encode_peer_block(other, observer_state, ball, mirrored, &self.config.coefs);
            if other.team == observer.team {
                allies.push(block);
            } else {
                enemies.push(block);
            }
        }

        self.push_group(&mut values, allies, self.config.ally_slots());
        self.push_group(&mut values, enemies, self.config.enemy_capacity);

        debug_assert_eq!(values.len(), self.config.output_width());
        Ok(FlatObservation {
            car_id,
            tick: snapshot.tick,
            mirrored,
            values,
        })
    }
}
