use serde::{Deserialize, Serialize};
use std::fmt;

/// Postpartum recovery bucket used to tag recovery tips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecoveryStage {
    /// Up to and including month 3
    Early,
    /// Months 4 through 12
    Mid,
    /// Beyond the first year
    Late,
}

impl fmt::Display for RecoveryStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RecoveryStage {
    /// Convert from database string representation.
    ///
    /// Matching is exact: tags are stored capitalised and compared by value.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Early" => Some(Self::Early),
            "Mid" => Some(Self::Mid),
            "Late" => Some(Self::Late),
            _ => None,
        }
    }

    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Early => "Early",
            Self::Mid => "Mid",
            Self::Late => "Late",
        }
    }
}
