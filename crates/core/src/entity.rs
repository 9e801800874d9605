//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Returns the first entity in `items` whose identifier equals `id`.
pub fn find_by_id<'a, E: Entity>(items: impl IntoIterator<Item = &'a E>, id: &E::Id) -> Option<&'a E>
where
    E: 'a,
{
    items.into_iter().find(|e| e.id() == id)
}
