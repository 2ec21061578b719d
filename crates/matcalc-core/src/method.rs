//! Identifiers for the available multiplication methods.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculator::MatError;

/// Which multiplication algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiplicationMethod {
    /// Triple-loop O(n³) multiplication.
    Naive,
    /// Strassen's recursive multiplication.
    Strassen,
    /// Tiled triple-loop multiplication.
    Blocked,
}

impl MultiplicationMethod {
    /// Every method, in presentation order.
    pub const ALL: [Self; 3] = [Self::Naive, Self::Strassen, Self::Blocked];

    /// Lowercase key used on the command line and in the registry.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Strassen => "strassen",
            Self::Blocked => "blocked",
        }
    }
}

impl fmt::Display for MultiplicationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MultiplicationMethod {
    type Err = MatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" | "classic" => Ok(Self::Naive),
            "strassen" => Ok(Self::Strassen),
            "blocked" | "tiled" => Ok(Self::Blocked),
            other => Err(MatError::Config(format!("unknown algorithm: {other}"))),
        }
    }
}
