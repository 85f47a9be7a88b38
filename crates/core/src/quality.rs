//! Quality score of an item.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Integer desirability score.
///
/// Ordinary stock lives in `[Quality::MIN, Quality::MAX]`; the bound is applied
/// by [`Quality::clamped`], not on construction, because legendary stock sits
/// outside the range and is never checked against it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quality(i32);

impl Quality {
    /// Lowest quality an ordinary item can reach.
    pub const MIN: Quality = Quality(0);

    /// Highest quality an ordinary item can reach.
    pub const MAX: Quality = Quality(50);

    /// Conventional quality of legendary stock.
    pub const LEGENDARY: Quality = Quality(80);

    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    /// Raise the score by `amount`, saturating at the integer bounds.
    pub fn increased_by(self, amount: i32) -> Self {
        Self(self.0.saturating_add(amount))
    }

    /// Lower the score by `amount`, saturating at the integer bounds.
    pub fn decreased_by(self, amount: i32) -> Self {
        Self(self.0.saturating_sub(amount))
    }

    /// Bring the score into `[MIN, MAX]`.
    pub fn clamped(self) -> Self {
        Self(self.0.clamp(Self::MIN.0, Self::MAX.0))
    }

    pub fn is_within_bounds(self) -> bool {
        (Self::MIN..=Self::MAX).contains(&self)
    }
}

impl ValueObject for Quality {}

impl Default for Quality {
    fn default() -> Self {
        Self::MIN
    }
}

impl From<i32> for Quality {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Quality> for i32 {
    fn from(value: Quality) -> Self {
        value.0
    }
}

impl core::fmt::Display for Quality {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Quality {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i32>()
            .map_err(|e| DomainError::invalid_value(format!("Quality: {e}")))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_pulls_values_into_range() {
        assert_eq!(Quality::new(-3).clamped(), Quality::MIN);
        assert_eq!(Quality::new(51).clamped(), Quality::MAX);
        assert_eq!(Quality::new(27).clamped(), Quality::new(27));
    }

    #[test]
    fn legendary_quality_is_out_of_range() {
        assert!(!Quality::LEGENDARY.is_within_bounds());
        assert!(Quality::MAX.is_within_bounds());
        assert!(Quality::MIN.is_within_bounds());
    }

    #[test]
    fn arithmetic_saturates_instead_of_overflowing() {
        assert_eq!(Quality::new(i32::MAX).increased_by(3), Quality::new(i32::MAX));
        assert_eq!(Quality::new(i32::MIN).decreased_by(2), Quality::new(i32::MIN));
    }

    #[test]
    fn parses_from_string() {
        assert_eq!(" 42 ".parse::<Quality>().unwrap(), Quality::new(42));

        let err = "lots".parse::<Quality>().unwrap_err();
        match err {
            DomainError::InvalidValue(msg) if msg.starts_with("Quality") => {}
            _ => panic!("Expected InvalidValue error for non-numeric quality"),
        }
    }

    #[test]
    fn serializes_as_a_bare_integer() {
        let json = serde_json::to_string(&Quality::new(49)).unwrap();
        assert_eq!(json, "49");
        let back: Quality = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Quality::new(49));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: clamping always lands in range and is idempotent.
            #[test]
            fn clamped_is_in_range_and_idempotent(value in any::<i32>()) {
                let once = Quality::new(value).clamped();
                prop_assert!(once.is_within_bounds());
                prop_assert_eq!(once.clamped(), once);
            }
        }
    }
}
