//! Bounded item quantity.

use derive_more::{Display, Into};
use serde::{Deserialize, Serialize};

use crate::PepengError;

/// Number of items in a shipment, always within `MIN..=MAX`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u8")]
pub struct Quantity(u8);

impl Quantity {
    /// Smallest accepted quantity.
    pub const MIN: Self = Self(1);

    /// Largest accepted quantity.
    pub const MAX: Self = Self(10);

    /// Creates a quantity, validating the `1..=10` range.
    ///
    /// # Errors
    ///
    /// Returns [`PepengError::QuantityOutOfRange`] if `value` is outside the range.
    pub fn new(value: u32) -> Result<Self, PepengError> {
        if (u32::from(Self::MIN.0)..=u32::from(Self::MAX.0)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(PepengError::QuantityOutOfRange(value))
        }
    }

    /// Returns the quantity as a plain integer.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u32> for Quantity {
    type Error = PepengError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
