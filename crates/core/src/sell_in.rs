//! Sell-by countdown.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Days remaining until the sell-by date.
///
/// Negative once the date has passed; there is no floor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SellIn(i32);

impl SellIn {
    pub const fn new(days: i32) -> Self {
        Self(days)
    }

    pub const fn days(self) -> i32 {
        self.0
    }

    /// The countdown one day later. Saturates at `i32::MIN`.
    pub fn next_day(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// True once the sell-by date has passed.
    pub fn is_past(self) -> bool {
        self.0 < 0
    }
}

impl ValueObject for SellIn {}

impl From<i32> for SellIn {
    fn from(days: i32) -> Self {
        Self(days)
    }
}

impl From<SellIn> for i32 {
    fn from(value: SellIn) -> Self {
        value.0
    }
}

impl core::fmt::Display for SellIn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for SellIn {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let days = s
            .trim()
            .parse::<i32>()
            .map_err(|e| DomainError::invalid_value(format!("SellIn: {e}")))?;
        Ok(Self(days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_day_has_no_floor() {
        assert_eq!(SellIn::new(1).next_day(), SellIn::new(0));
        assert_eq!(SellIn::new(0).next_day(), SellIn::new(-1));
        assert_eq!(SellIn::new(-7).next_day(), SellIn::new(-8));
    }

    #[test]
    fn next_day_saturates_at_the_minimum() {
        assert_eq!(SellIn::new(i32::MIN).next_day(), SellIn::new(i32::MIN));
    }

    #[test]
    fn only_negative_countdown_is_past() {
        assert!(!SellIn::new(1).is_past());
        assert!(!SellIn::new(0).is_past());
        assert!(SellIn::new(-1).is_past());
    }

    #[test]
    fn rejects_non_numeric_input() {
        let err = "soon".parse::<SellIn>().unwrap_err();
        match err {
            DomainError::InvalidValue(msg) if msg.starts_with("SellIn") => {}
            _ => panic!("Expected InvalidValue error for non-numeric sell-in"),
        }
    }
}
