//! Engine-facing state model and observation encoding

pub mod boost_pads;
pub mod kinematics;
pub mod observation;
pub mod physics_constants;
pub mod tick_snapshot;
pub mod types;
