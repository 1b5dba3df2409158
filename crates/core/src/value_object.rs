//! Value object trait: equality by value, not identity.
//!
//! Everything the registration form produces is a value object: a product has no
//! identifier, and two products with the same fields are indistinguishable.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values; collections of them are replaced as
/// whole snapshots rather than edited in place.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Price(u64);
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price(1050), Price(1050));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
