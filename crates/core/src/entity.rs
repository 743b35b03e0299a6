//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Stores and reviews are both entities: two records with the same id are the
/// same thing, even if their other fields differ.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
