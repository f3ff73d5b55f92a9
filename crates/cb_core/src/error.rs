use thiserror::Error;

/// Errors from the observation layer.
///
/// Both variants are caller bugs rather than runtime conditions; there
/// is nothing to retry. They are surfaced as errors instead of panics
/// so a training harness can crash with context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObsError {
    #[error("car {car_id} is not in the snapshot roster")]
    CarNotInRoster { car_id: u32 },

    #[error("invalid observation config: {reason}")]
    InvalidConfig { reason: String },
}

pub type Result<T> = std::result::Result<T, ObsError>;
