//! Ally / neutral / enemy classification of friendliness values

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The neutral friendliness value. Peers without a stored value sit here.
pub const NEUTRAL_VALUE: f64 = 0.0;

/// Discrete classification of a friendliness value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Association {
    Ally,
    Neutral,
    Enemy,
}

impl Association {
    /// All associations, from most to least friendly
    pub const ALL: [Association; 3] = [Association::Ally, Association::Neutral, Association::Enemy];

    /// Canonical friendliness value of this association
    pub fn value(&self) -> f64 {
        match self {
            Association::Ally => 1.0,
            Association::Neutral => NEUTRAL_VALUE,
            Association::Enemy => -1.0,
        }
    }

    /// Association whose canonical value is exactly `value`, if any.
    ///
    /// This only round-trips canonical values; use [`Association::closest_to`]
    /// to classify arbitrary values.
    pub fn by_value(value: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.value() == value)
    }

    /// Association whose canonical value is nearest to `value`.
    ///
    /// Midpoints (`-0.5` and `0.5`) resolve away from neutral.
    pub fn closest_to(value: f64) -> Self {
        if value <= -0.5 {
            Association::Enemy
        } else if value >= 0.5 {
            Association::Ally
        } else {
            Association::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Association::Ally => "ally",
            Association::Neutral => "neutral",
            Association::Enemy => "enemy",
        }
    }
}

impl fmt::Display for Association {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Association {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ally" | "friend" => Ok(Association::Ally),
            "neutral" => Ok(Association::Neutral),
            "enemy" | "foe" => Ok(Association::Enemy),
            _ => Err(format!("Invalid association: {}", s)),
        }
    }
}
