//! Pool identifiers.

use super::ParsePoolError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three disjoint task collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pool {
    /// Not currently assigned.
    Available,
    /// Assigned and awaiting a completion decision.
    Pending,
    /// Explicitly deferred by the user.
    Stashed,
}

impl Pool {
    /// All pools in display order.
    pub const ALL: [Self; 3] = [Self::Available, Self::Pending, Self::Stashed];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Pending => "pending",
            Self::Stashed => "stashed",
        }
    }
}

impl TryFrom<&str> for Pool {
    type Error = ParsePoolError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "available" => Ok(Self::Available),
            "pending" => Ok(Self::Pending),
            "stashed" => Ok(Self::Stashed),
            _ => Err(ParsePoolError(value.to_owned())),
        }
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
