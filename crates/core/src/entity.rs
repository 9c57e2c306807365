//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Record identifiers are small `Copy` newtypes, so `id` returns by value.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// First record with the given identifier, if any.
pub fn find_by_id<E: Entity>(records: &[E], id: E::Id) -> Option<&E> {
    records.iter().find(|r| r.id() == id)
}
