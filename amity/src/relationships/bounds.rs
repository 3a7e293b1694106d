//! Legal interval for friendliness values

use crate::{AmityError, Result};
use serde::{Deserialize, Serialize};

/// Default lower limit used by [`Bounds::standard`]
pub const STANDARD_MINIMUM: f64 = -2.0;

/// Default upper limit used by [`Bounds::standard`]
pub const STANDARD_MAXIMUM: f64 = 2.0;

/// Inclusive `[minimum, maximum]` interval every stored value must stay within.
///
/// Construction guarantees `minimum < maximum`, finite limits, and that the
/// neutral value `0` is representable. Bounds are immutable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds", into = "RawBounds")]
pub struct Bounds {
    minimum: f64,
    maximum: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawBounds {
    minimum: f64,
    maximum: f64,
}

impl Bounds {
    /// Create bounds, validating the limits
    pub fn new(minimum: f64, maximum: f64) -> Result<Self> {
        let invalid = |reason: &str| AmityError::InvalidBounds {
            minimum,
            maximum,
            reason: reason.to_string(),
        };

        if !minimum.is_finite() || !maximum.is_finite() {
            return Err(invalid("limits must be finite"));
        }
        if minimum >= maximum {
            return Err(invalid("minimum must be strictly less than maximum"));
        }
        if minimum > 0.0 || maximum < 0.0 {
            return Err(invalid("the neutral value 0 must lie within the bounds"));
        }

        Ok(Self { minimum, maximum })
    }

    /// The `[-2, 2]` bounds friend lists use unless configured otherwise
    pub fn standard() -> Self {
        Self {
            minimum: STANDARD_MINIMUM,
            maximum: STANDARD_MAXIMUM,
        }
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Whether `value` lies within the bounds, inclusive at both ends
    pub fn contains(&self, value: f64) -> bool {
        self.minimum <= value && value <= self.maximum
    }

    /// Factor that maps an out-of-range `value` exactly onto the limit it violates.
    ///
    /// Returns `None` when `value` is already within the bounds. The factor is
    /// always in `[0, 1)`, so applying it to in-range values keeps them in range
    /// and never moves them across neutral. A limit of 0 gives a factor of
    /// exactly `+0.0`.
    pub fn rescale_factor(&self, value: f64) -> Result<Option<f64>> {
        if !value.is_finite() {
            return Err(AmityError::InvalidValue(value));
        }
        if self.contains(value) {
            return Ok(None);
        }
        // 0 is always contained, so reaching here with 0 means the bounds are corrupt
        if value == 0.0 {
            return Err(AmityError::InvariantViolation(format!(
                "zero value outside bounds [{}, {}]",
                self.minimum, self.maximum
            )));
        }

        let limit = if value < self.minimum {
            self.minimum
        } else {
            self.maximum
        };
        let factor = limit / value;
        // 0 / negative is -0.0, which would turn every scaled value into -0.0
        Ok(Some(if factor == 0.0 { 0.0 } else { factor }))
    }

    /// The limit `value` would be rescaled onto, if it is out of range
    pub fn violated_limit(&self, value: f64) -> Option<f64> {
        if value < self.minimum {
            Some(self.minimum)
        } else if value > self.maximum {
            Some(self.maximum)
        } else {
            None
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<RawBounds> for Bounds {
    type Error = AmityError;

    fn try_from(raw: RawBounds) -> Result<Self> {
        Bounds::new(raw.minimum, raw.maximum)
    }
}

impl From<Bounds> for RawBounds {
    fn from(bounds: Bounds) -> Self {
        RawBounds {
            minimum: bounds.minimum,
            maximum: bounds.maximum,
        }
    }
}
