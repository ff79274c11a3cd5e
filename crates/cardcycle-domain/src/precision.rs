//! Tags describing which calculation tier produced a result.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Calculation tier, ordered from most to least precise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// Anchored-day computation on a valid configuration.
    Exact,
    /// Simplified heuristic used after the exact computation failed.
    Fallback,
    /// Hardcoded result that cannot fail.
    Default,
}

impl Precision {
    pub fn is_exact(self) -> bool {
        matches!(self, Precision::Exact)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Precision::Exact => "exact",
            Precision::Fallback => "fallback",
            Precision::Default => "default",
        };
        f.write_str(label)
    }
}

/// A calculated value paired with the tier that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub precision: Precision,
}

impl<T> Resolved<T> {
    pub fn new(value: T, precision: Precision) -> Self {
        Self { value, precision }
    }

    pub fn into_value(self) -> T {
        self.value
    }
}
