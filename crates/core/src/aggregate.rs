//! Aggregate root: an entity that is the consistency boundary of a cluster.

use crate::entity::{Entity, Identifiable};

/// Marks an [`Entity`] as the root of a transactional cluster.
///
/// Holds the same data as `Entity<T>` and behaves identically. Typing a field
/// as `AggregateRoot<T>` documents that the cluster is only mutated through
/// the embedding type.
#[derive(Debug, Clone)]
pub struct AggregateRoot<T> {
    entity: Entity<T>,
}

impl<T> AggregateRoot<T> {
    pub const fn new(id: T) -> Self {
        Self {
            entity: Entity::new(id),
        }
    }

    pub fn id(&self) -> &T {
        self.entity.id()
    }

    pub fn set_id(&mut self, id: T) {
        self.entity.set_id(id);
    }

    pub fn as_entity(&self) -> &Entity<T> {
        &self.entity
    }

    pub fn into_entity(self) -> Entity<T> {
        self.entity
    }
}

impl<T> Identifiable for AggregateRoot<T> {
    type Id = T;

    fn id(&self) -> &T {
        self.entity.id()
    }
}
