//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: identity
/// doesn't matter, only the attribute values do. Two slugs spelled the same
/// way (up to case) are the same slug; there is no "which one" question.
///
/// The trait requires `Clone + PartialEq + Debug` so values can be copied
/// freely, compared structurally, and logged.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
