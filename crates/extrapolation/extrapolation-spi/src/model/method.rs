//! Polynomial evaluation method

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExtrapolationError;

/// Interpolating polynomial form used to compute a prediction.
///
/// Both forms describe the same polynomial and agree up to rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Lagrange basis-polynomial form
    #[default]
    Lagrange,
    /// Newton divided-difference form evaluated with Horner's scheme
    DividedDifference,
}

impl Method {
    /// All supported methods
    pub const ALL: [Method; 2] = [Method::Lagrange, Method::DividedDifference];

    /// Human-readable method name
    pub fn name(&self) -> &'static str {
        match self {
            Method::Lagrange => "Lagrange",
            Method::DividedDifference => "Divided Difference",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = ExtrapolationError;

    /// Parse a method from user-supplied text.
    ///
    /// Accepts the display names, their kebab/snake variants, and the
    /// single-letter shortcuts `L` and `D`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "lagrange" | "l" => Ok(Method::Lagrange),
            "divided difference" | "d" | "newton" => Ok(Method::DividedDifference),
            _ => Err(ExtrapolationError::UnknownMethod(s.to_string())),
        }
    }
}
