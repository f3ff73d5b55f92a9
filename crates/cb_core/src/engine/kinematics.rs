//! Kinematic state of a single rigid body (car or ball)
//!
//! Each body carries a canonical and a mirrored state in the tick
//! snapshot. The mirrored state is the same physical configuration seen
//! after a half-turn about the vertical axis (x and y negated, z kept),
//! which swaps the two goals while preserving handedness. Orange-team
//! observations read the mirrored views so every policy learns as if it
//! defended the Blue goal.

use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Position, velocities and orientation of one rigid body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KinematicState {
    /// Position (uu)
    pub position: Vector3<f32>,
    /// Linear velocity (uu/s)
    pub linear_velocity: Vector3<f32>,
    /// Angular velocity (rad/s)
    pub angular_velocity: Vector3<f32>,
    /// Orientation; forward is the rotated +x axis, up the rotated +z axis
    pub rotation: UnitQuaternion<f32>,
}

impl KinematicState {
    /// Unit forward vector (rotated +x axis)
    #[inline]
    pub fn forward(&self) -> Vector3<f32> {
        self.rotation * Vector3::x()
    }

    /// Unit up vector (rotated +z axis)
    #[inline]
    pub fn up(&self) -> Vector3<f32> {
        self.rotation * Vector3::z()
    }

    /// The same physical state seen through the field mirror.
    ///
    /// Half-turn about the vertical axis: x and y components of
    /// position, both velocities and the orientation are negated, z is
    /// unchanged. Applying it twice restores the original state.
    pub fn mirrored(&self) -> KinematicState {
        let half_turn = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), std::f32::consts::PI);
        KinematicState {
            position: mirror_vec(self.position),
            linear_velocity: mirror_vec(self.linear_velocity),
            angular_velocity: mirror_vec(self.angular_velocity),
            rotation: half_turn * self.rotation,
        }
    }
}

impl Default for KinematicState {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            linear_velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
        }
    }
}

#[inline]
fn mirror_vec(v: Vector3<f32>) -> Vector3<f32> {
    Vector3::new(-v.x, -v.y, v.z)
}
