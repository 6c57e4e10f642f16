//! Entity base: identity + continuity across state changes.

/// Anything addressed by an identifier.
///
/// Domain types that embed an [`Entity`] or [`AggregateRoot`](crate::AggregateRoot)
/// implement this by delegating to it, which lets generic code (repositories,
/// lookups) key them by identity.
pub trait Identifiable {
    /// Strongly-typed identifier.
    type Id;

    /// Returns the identifier.
    fn id(&self) -> &Self::Id;
}

/// Base for domain objects whose identity is carried by `id`, independent of
/// their other attributes.
///
/// Meant to be embedded as a private field of a domain type:
///
/// ```
/// use ddd_core::{Entity, Identifier};
///
/// pub type LineId = Identifier<u32, OrderLine>;
///
/// pub struct OrderLine {
///     entity: Entity<LineId>,
///     quantity: u32,
/// }
///
/// impl OrderLine {
///     pub fn new(id: LineId, quantity: u32) -> Self {
///         Self { entity: Entity::new(id), quantity }
///     }
///
///     pub fn id(&self) -> &LineId {
///         self.entity.id()
///     }
/// }
///
/// let line = OrderLine::new(LineId::new(1), 3);
/// assert_eq!(**line.id(), 1);
/// ```
///
/// Only the embedding type can reach `&mut Entity`, so only it can call
/// [`Entity::set_id`]. No `PartialEq`/`Hash`/`Display` is provided: whether two
/// entities with the same id are interchangeable is the embedding type's call.
#[derive(Debug, Clone)]
pub struct Entity<T> {
    id: T,
}

impl<T> Entity<T> {
    /// The id is stored verbatim; uniqueness is the caller's concern.
    pub const fn new(id: T) -> Self {
        Self { id }
    }

    pub fn id(&self) -> &T {
        &self.id
    }

    pub fn set_id(&mut self, id: T) {
        tracing::trace!("entity identifier replaced");
        self.id = id;
    }

    pub fn into_id(self) -> T {
        self.id
    }
}

impl<T> Identifiable for Entity<T> {
    type Id = T;

    fn id(&self) -> &T {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::Identifier;
    use uuid::Uuid;

    enum Dummy {}

    #[test]
    fn new_assigns_id() {
        let id = Uuid::now_v7();
        let entity = Entity::new(id);
        assert_eq!(*entity.id(), id);
    }

    #[test]
    fn accepts_typed_identifiers() {
        let id = Identifier::<Uuid, Dummy>::generate();
        let entity = Entity::new(id);
        assert_eq!(*entity.id(), id);
        assert_eq!(Identifiable::id(&entity), &id);
    }

    #[test]
    fn set_id_replaces_identity() {
        let mut entity = Entity::new(1_u64);
        entity.set_id(2);
        assert_eq!(*entity.id(), 2);
        assert_eq!(entity.into_id(), 2);
    }

    #[test]
    fn debug_shows_id() {
        let entity = Entity::new(5_u8);
        assert_eq!(format!("{entity:?}"), "Entity { id: 5 }");
    }

    #[test]
    fn clone_keeps_id() {
        let entity = Entity::new(String::from("a-1"));
        let copy = entity.clone();
        assert_eq!(copy.id(), entity.id());
    }
}
