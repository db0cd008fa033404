use std::fmt::Display;

use serde::{
    Deserialize,
    Serialize,
};

/// A measurement in tenths of its display unit, as reported by the upstream API.
///
/// Heights are reported in decimeters and weights in hectograms, so dividing by 10 yields meters
/// and kilograms.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Decaunits(pub u32);

impl Decaunits {
    /// The raw value, in tenths.
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// The value in display units.
    pub fn to_units(&self) -> f64 {
        self.0 as f64 / 10f64
    }
}

impl From<u32> for Decaunits {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Display for Decaunits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Integer formatting keeps exactly one decimal place without float rounding.
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

#[cfg(test)]
mod decaunits_test {
    use crate::Decaunits;

    #[test]
    fn formats_with_one_decimal_place() {
        assert_eq!(Decaunits(7).to_string(), "0.7");
        assert_eq!(Decaunits(69).to_string(), "6.9");
        assert_eq!(Decaunits(1000).to_string(), "100.0");
    }

    #[test]
    fn converts_to_display_units() {
        assert_eq!(Decaunits(85).to_units(), 8.5);
        assert_eq!(Decaunits(0).to_units(), 0f64);
    }
}
