//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity** - they are defined entirely by their
//! attribute values. Two quality scores of 7 are the same quality score.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// produce a new one: `quality.increased_by(2)` returns a fresh `Quality` and
/// leaves the original untouched.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: `Quality(20)`, `SellIn(-1)`
/// - **Entity**: an inventory item, which keeps its place in the stock list
///   while its values change day by day
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Copy**: every value object in this domain is a small integer wrapper
/// - **PartialEq**: value objects are compared by their attribute values
/// - **Debug**: value objects show up in logs and test failures
///
/// ## Usage Pattern
///
/// ```
/// use gilded_rose_core::{Quality, ValueObject};
///
/// fn assert_value_object<T: ValueObject>(_: T) {}
///
/// let q1 = Quality::new(10);
/// let q2 = q1.decreased_by(1);
/// assert_value_object(q2);
/// assert_eq!(q1, Quality::new(10));
/// assert_eq!(q2, Quality::new(9));
/// ```
pub trait ValueObject: Copy + PartialEq + core::fmt::Debug {}
