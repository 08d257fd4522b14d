//! Entity trait: identity + continuity across state changes.
//!
//! An actor keeps its identity while its role and permission grants churn;
//! anything with that property implements [`Entity`].

/// Entity marker + minimal interface.
///
/// Entities are compared and tracked by identifier, never by field values.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
