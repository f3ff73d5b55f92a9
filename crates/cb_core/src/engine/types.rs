//! Shared identity and team types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Team membership.
///
/// Blue defends the negative-y goal and is the primary (non-mirrored)
/// perspective; Orange observations read the mirrored state views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Blue,
    Orange,
}

impl Team {
    /// The opposing team
    pub fn opponent(self) -> Team {
        match self {
            Team::Blue => Team::Orange,
            Team::Orange => Team::Blue,
        }
    }
}

/// Stable car identity, unique within a match.
///
/// Roster position may change between ticks; `CarId` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CarId(pub u32);

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
