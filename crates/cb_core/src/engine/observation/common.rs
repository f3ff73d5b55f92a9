//! Shared observation encoding blocks
//!
//! Every builder is assembled from the same four block encoders:
//! [`push_global`] (ball + previous action + boost pads),
//! [`push_car_state`], [`push_ball_relative`] and [`push_car_relative`].
//! Frame selection happens once per build via [`is_mirrored`]; the
//! encoders themselves are frame-agnostic and only see already-selected
//! state views.
//!
//! Block widths are fixed by the layout and exported as constants so
//! padded builders can size zero slots without re-deriving them.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::engine::kinematics::KinematicState;
use crate::engine::physics_constants::boost_pad::PAD_COUNT;
use crate::engine::physics_constants::{field, speed};
use crate::engine::tick_snapshot::CarSnap;
use crate::engine::types::Team;

// =============================================================================
// Layout Widths
// =============================================================================

/// Width of the controller action vector, appended verbatim
pub const ACTION_WIDTH: usize = 8;

/// Ball block (9) + previous action + pad flags + pad timers
pub const GLOBAL_WIDTH: usize = 9 + ACTION_WIDTH + 2 * PAD_COUNT;

/// One car's own state: position, linear velocity, forward, up,
/// angular velocity (3 each) plus five intrinsic scalars
pub const CAR_STATE_WIDTH: usize = 20;

/// Car-minus-ball difference block: position, linear velocity,
/// angular velocity
pub const BALL_RELATIVE_WIDTH: usize = 9;

/// Peer-minus-observer difference block: position, linear velocity,
/// forward difference, up-vs-forward cross term, angular velocity
pub const CAR_RELATIVE_WIDTH: usize = 15;

/// Observer block: own state plus ball-relative state
pub const SELF_BLOCK_WIDTH: usize = CAR_STATE_WIDTH + BALL_RELATIVE_WIDTH;

/// One peer's block: own state, ball-relative and observer-relative
pub const PLAYER_BLOCK_WIDTH: usize = CAR_STATE_WIDTH + BALL_RELATIVE_WIDTH + CAR_RELATIVE_WIDTH;

// =============================================================================
// Normalization Coefficients
// =============================================================================

/// Scale factors applied uniformly to every vector of the same
/// physical unit across the whole output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NormCoefs {
    /// Per-axis position scale
    pub pos: Vector3<f32>,
    /// Euler-angle scale; the basis-vector layout emits unit vectors
    /// and never multiplies by it
    pub ang: f32,
    /// Linear velocity scale
    pub lin_vel: f32,
    /// Angular velocity scale
    pub ang_vel: f32,
}

impl Default for NormCoefs {
    fn default() -> Self {
        Self {
            pos: Vector3::new(
                1.0 / field::SIDE_WALL_X,
                1.0 / field::BACK_NET_Y,
                1.0 / field::CEILING_Z,
            ),
            ang: 1.0 / std::f32::consts::PI,
            lin_vel: 1.0 / speed::CAR_MAX_SPEED,
            ang_vel: 1.0 / speed::CAR_MAX_ANG_VEL,
        }
    }
}

// =============================================================================
// Frame Selection
// =============================================================================

/// Whether this team's observations read the mirrored state views.
///
/// Orange is the secondary team; mirroring makes every policy see
/// itself defending the Blue goal. This is the sole symmetry-breaking
/// decision in the encoding.
#[inline]
pub fn is_mirrored(team: Team) -> bool {
    team == Team::Orange
}

// =============================================================================
// Block Encoders
// =============================================================================

#[inline]
fn push_vec3(out: &mut Vec<f32>, v: Vector3<f32>) {
    out.extend_from_slice(&[v.x, v.y, v.z]);
}

/// Ball state, previous action and boost pads - the frame-global block.
pub fn push_global(
    out: &mut Vec<f32>,
    ball: &KinematicState,
    previous_action: &[f32; ACTION_WIDTH],
    pads: &[bool; PAD_COUNT],
    pad_timers: &[f32; PAD_COUNT],
    coefs: &NormCoefs,
) {
    push_vec3(out, ball.position.component_mul(&coefs.pos));
    push_vec3(out, ball.linear_velocity * coefs.lin_vel);
    push_vec3(out, ball.angular_velocity * coefs.ang_vel);
    out.extend_from_slice(previous_action);
    out.extend(pads.iter().map(|&active| if active { 1.0 } else { 0.0 }));
    out.extend_from_slice(pad_timers);
}

/// One car's own kinematic state and intrinsic scalars.
pub fn push_car_state(out: &mut Vec<f32>, car: &CarSnap, state: &KinematicState, coefs: &NormCoefs) {
    push_vec3(out, state.position.component_mul(&coefs.pos));
    push_vec3(out, state.linear_velocity * coefs.lin_vel);
    push_vec3(out, state.forward());
    push_vec3(out, state.up());
    push_vec3(out, state.angular_velocity * coefs.ang_vel);
    out.push(car.boost);
    out.push(if car.on_ground { 1.0 } else { 0.0 });
    out.push(if car.has_flip { 1.0 } else { 0.0 });
    out.push(if car.is_demolished { 1.0 } else { 0.0 });
    out.push(car.demo_respawn_timer);
}

/// Car state relative to the ball (car minus ball).
pub fn push_ball_relative(
    out: &mut Vec<f32>,
    state: &KinematicState,
    ball: &KinematicState,
    coefs: &NormCoefs,
) {
    push_vec3(out, (state.position - ball.position).component_mul(&coefs.pos));
    push_vec3(out, (state.linear_velocity - ball.linear_velocity) * coefs.lin_vel);
    push_vec3(out, (state.angular_velocity - ball.angular_velocity) * coefs.ang_vel);
}

/// Peer state relative to the observer (peer minus observer).
///
/// The fourth term is `other.up() - observer.forward()`, not
/// up-minus-up. The asymmetry is part of the feature distribution the
/// deployed policies were trained on and must not be "corrected".
pub fn push_car_relative(
    out: &mut Vec<f32>,
    other: &KinematicState,
    observer: &KinematicState,
    coefs: &NormCoefs,
) {
    push_vec3(out, (other.position - observer.position).component_mul(&coefs.pos));
    push_vec3(out, (other.linear_velocity - observer.linear_velocity) * coefs.lin_vel);
    push_vec3(out, other.forward() - observer.forward());
    push_vec3(out, other.up() - observer.forward());
    push_vec3(out, (other.angular_velocity - observer.angular_velocity) * coefs.ang_vel);
}

/// Encode one peer's full block: own state, ball-relative state and
/// observer-relative state. Used for allies and enemies alike; only
/// the grouping differs between builders.
pub fn encode_peer_block(
    other: &CarSnap,
    observer_state: &KinematicState,
    ball: &KinematicState,
    mirrored: bool,
    coefs: &NormCoefs,
) -> Vec<f32> {
    let mut block = Vec::with_capacity(PLAYER_BLOCK_WIDTH);
    let other_state = other.state_view(mirrored);
    push_car_state(&mut block, other, other_state, coefs);
    push_ball_relative(&mut block, other_state, ball, coefs);
    push_car_relative(&mut block, other_state, observer_state, coefs);
    debug_assert_eq!(block.len(), PLAYER_BLOCK_WIDTH);
    block
}
