//! `ddd-core` — base types for Domain-Driven Design models.
//!
//! Typed identifiers, an entity base and an aggregate-root marker. This crate
//! is **pure domain**: no persistence, no IO, no event sourcing.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;

pub use aggregate::AggregateRoot;
pub use entity::{Entity, Identifiable};
pub use error::{DomainError, DomainResult};
pub use id::Identifier;
