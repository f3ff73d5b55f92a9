//! Relative observation vector (unpadded)
//!
//! The minimal encoding: frame-global block, observer block, then one
//! block per peer grouped allies-first in roster encounter order. The
//! output length grows with the roster, so this builder suits
//! fixed-roster training setups; use
//! [`PaddedObsBuilder`](super::PaddedObsBuilder) when the model input
//! shape must survive roster changes.

use crate::engine::boost_pads::BoostPadTracker;
use crate::engine::observation::builder::{FlatObservation, ObservationBuilder};
use crate::engine::observation::common::{
    encode_peer_block, is_mirrored, push_ball_relative, push_car_state, push_global, NormCoefs,
    ACTION_WIDTH, GLOBAL_WIDTH, PLAYER_BLOCK_WIDTH, SELF_BLOCK_WIDTH,
};
use crate::engine::tick_snapshot::TickSnapshot;
use crate::engine::types::CarId;
use crate::error::{ObsError, Result};

/// Builder for the unpadded relative observation.
#[derive(Debug, Clone, Default)]
pub struct RelativeObsBuilder {
    coefs: NormCoefs,
}

impl RelativeObsBuilder {
    /// Create a builder with the given coefficients
    pub fn new(coefs: NormCoefs) -> RelativeObsBuilder {
        RelativeObsBuilder { coefs }
    }
}

impl ObservationBuilder for RelativeObsBuilder {
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

        let peer_count = snapshot.cars.len().saturating_sub(1);
        let mut values =
            Vec::with_capacity(GLOBAL_WIDTH + SELF_BLOCK_WIDTH + peer_count * PLAYER_BLOCK_WIDTH);

        push_global(
            &mut values,
            ball,
            previous_action,
            snapshot.pads_view(mirrored),
            pads.timers(mirrored),
            &self.coefs,
        );
        push_car_state(&mut values, observer, observer_state, &self.coefs);
        push_ball_relative(&mut values, observer_state, ball, &self.coefs);

        let mut allies = Vec::new();
        let mut enemies = Vec::new();
        for other in &snapshot.cars {
            if other.id == observer.id {
                continue;
            }
            let block = encode_peer_block(other, observer_state, ball, mirrored, &self.coefs);
            if other.team == observer.team {
                allies.push(block);
            } else {
                enemies.push(block);
            }
        }
        for block in allies.into_iter().chain(enemies) {
            values.extend_from_slice(&block);
        }

        Ok(FlatObservation {
            car_id,
            tick: snapshot.tick,
            mirrored,
            values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::kinematics::KinematicState;
    use crate::engine::physics_constants::boost_pad::PAD_COUNT;
    use crate::engine::tick_snapshot::CarSnap;
    use crate::engine::types::Team;
    use nalgebra::Vector3;

    fn car(id: u32, team: Team, y: f32) -> CarSnap {
        CarSnap::from_canonical(
            CarId(id),
            team,
            KinematicState {
                position: Vector3::new(0.0, y, 17.0),
                ..Default::default()
            },
        )
    }

    fn snapshot(cars: Vec<CarSnap>) -> TickSnapshot {
        let ball = KinematicState {
            position: Vector3::new(0.0, 0.0, 93.0),
            ..Default::default()
        };
        TickSnapshot {
            tick: 10,
            ball,
            ball_mirrored: ball.mirrored(),
            cars,
            boost_pads: [true; PAD_COUNT],
            boost_pads_mirrored: [true; PAD_COUNT],
        }
    }

    fn advanced_tracker(snapshot: &TickSnapshot) -> BoostPadTracker {
        let mut tracker = BoostPadTracker::new(8);
        tracker.advance(snapshot);
        tracker
    }

    #[test]
    fn test_length_grows_with_roster() {
        let builder = RelativeObsBuilder::default();
        let action = [0.0; ACTION_WIDTH];

        for n_peers in 0..4usize {
            let mut cars = vec![car(0, Team::Blue, -4000.0)];
            for i in 0..n_peers {
                cars.push(car(i as u32 + 1, Team::Orange, 3000.0));
            }
            let snap = snapshot(cars);
            let tracker = advanced_tracker(&snap);
            let obs = builder.build(&snap, &tracker, CarId(0), &action).unwrap();
            assert_eq!(
                obs.len(),
                GLOBAL_WIDTH + SELF_BLOCK_WIDTH + n_peers * PLAYER_BLOCK_WIDTH
            );
        }
    }

    #[test]
    fn test_allies_precede_enemies_regardless_of_roster_order() {
        // Roster order: observer, enemy, ally. The ally block must
        // still come first in the output.
        let observer = car(0, Team::Blue, -4000.0);
        let enemy = car(1, Team::Orange, 3000.0);
        let ally = car(2, Team::Blue, -2000.0);
        let snap = snapshot(vec![observer, enemy, ally]);
        let tracker = advanced_tracker(&snap);

        let obs = RelativeObsBuilder::default()
            .build(&snap, &tracker, CarId(0), &[0.0; ACTION_WIDTH])
            .unwrap();

        let peers = &obs.as_slice()[GLOBAL_WIDTH + SELF_BLOCK_WIDTH..];
        let coefs = NormCoefs::default();
        // First peer block is the ally at y=-2000.
        assert!((peers[1] - (-2000.0 * coefs.pos.y)).abs() < 1e-6);
        // Second is the enemy at y=3000.
        assert!((peers[PLAYER_BLOCK_WIDTH + 1] - (3000.0 * coefs.pos.y)).abs() < 1e-6);
    }

    #[test]
    fn test_observer_excluded_by_identity() {
        // Two cars share a position; only identity distinguishes them.
        let a = car(5, Team::Blue, -1000.0);
        let b = car(6, Team::Blue, -1000.0);
        let snap = snapshot(vec![a, b]);
        let tracker = advanced_tracker(&snap);

        let obs = RelativeObsBuilder::default()
            .build(&snap, &tracker, CarId(6), &[0.0; ACTION_WIDTH])
            .unwrap();
        // Exactly one peer block: the other car, not the observer.
        assert_eq!(obs.len(), GLOBAL_WIDTH + SELF_BLOCK_WIDTH + PLAYER_BLOCK_WIDTH);
    }

    #[test]
    fn test_missing_observer_fails_fast() {
        let snap = snapshot(vec![car(0, Team::Blue, 0.0)]);
        let tracker = advanced_tracker(&snap);
        let err = RelativeObsBuilder::default()
            .build(&snap, &tracker, CarId(42), &[0.0; ACTION_WIDTH])
            .unwrap_err();
        assert_eq!(err, ObsError::CarNotInRoster { car_id: 42 });
    }

    #[test]
    fn test_orange_observer_reads_mirrored_views() {
        let blue = car(0, Team::Blue, -4000.0);
        let orange = car(1, Team::Orange, 4000.0);
        let snap = snapshot(vec![blue, orange]);
        let tracker = advanced_tracker(&snap);

        let obs = RelativeObsBuilder::default()
            .build(&snap, &tracker, CarId(1), &[0.0; ACTION_WIDTH])
            .unwrap();
        assert!(obs.mirrored);
        // Self position is the mirrored one: y flips to -4000.
        let coefs = NormCoefs::default();
        let self_y = obs.as_slice()[GLOBAL_WIDTH + 1];
        assert!((self_y - (-4000.0 * coefs.pos.y)).abs() < 1e-6);
    }
}
