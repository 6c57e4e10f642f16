//! Strongly-typed identifiers used across the domain.

use core::any::Any;
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::Deref;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Identifier wrapping a raw value of type `T`.
///
/// Two identifiers are equal iff their wrapped values are equal, and an
/// identifier hashes exactly like its value, so it can stand in for the raw
/// value as a `HashMap`/`HashSet` key (lookups by `&T` work through [`Borrow`]).
///
/// The optional marker `M` separates identifier kinds that share a value type:
///
/// ```
/// use ddd_core::Identifier;
/// use uuid::Uuid;
///
/// pub enum Order {}
/// pub enum Customer {}
///
/// pub type OrderId = Identifier<Uuid, Order>;
/// pub type CustomerId = Identifier<Uuid, Customer>;
///
/// let order = OrderId::generate();
/// let raw: &Uuid = &order;
/// assert_eq!(*raw, order.into_inner());
/// ```
///
/// No trait impl places bounds on `M`; it never exists at runtime.
pub struct Identifier<T, M = ()> {
    value: T,
    _marker: PhantomData<fn() -> M>,
}

impl<T, M> Identifier<T, M> {
    /// Wrap a value. No validation is performed.
    pub const fn new(value: T) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: PartialEq + 'static, M: 'static> Identifier<T, M> {
    /// Compare against an arbitrary value.
    ///
    /// Anything that is not an identifier of exactly this type is unequal.
    pub fn eq_dyn(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<Self>().is_some_and(|other| self == other)
    }
}

impl<M> Identifier<Uuid, M> {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn generate() -> Self {
        Self::new(Uuid::now_v7())
    }

    pub const fn nil() -> Self {
        Self::new(Uuid::nil())
    }
}

impl<T: Clone, M> Clone for Identifier<T, M> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: Copy, M> Copy for Identifier<T, M> {}

impl<T: Default, M> Default for Identifier<T, M> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: PartialEq, M> PartialEq for Identifier<T, M> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, M> Eq for Identifier<T, M> {}

impl<T: PartialOrd, M> PartialOrd for Identifier<T, M> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, M> Ord for Identifier<T, M> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

// Must stay identical to `T`'s hash for `Borrow<T>` lookups to be sound.
impl<T: Hash, M> Hash for Identifier<T, M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: fmt::Debug, M> fmt::Debug for Identifier<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Identifier").field(&self.value).finish()
    }
}

impl<T: fmt::Display, M> fmt::Display for Identifier<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<T, M> Deref for Identifier<T, M> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, M> AsRef<T> for Identifier<T, M> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T, M> Borrow<T> for Identifier<T, M> {
    fn borrow(&self) -> &T {
        &self.value
    }
}

impl<T, M> From<T> for Identifier<T, M> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T, M> FromStr for Identifier<T, M>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match T::from_str(s) {
            Ok(value) => Ok(Self::new(value)),
            Err(e) => {
                let kind = kind_name::<T, M>();
                tracing::debug!(%kind, input_len = s.len(), error = %e, "rejected identifier");
                Err(DomainError::invalid_id(format!("{kind}: {e}")))
            }
        }
    }
}

impl<T: Serialize, M> Serialize for Identifier<T, M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>, M> Deserialize<'de> for Identifier<T, M> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}

/// Short name of the identifier kind: the marker, or `Identifier<T>` when
/// there is none.
fn kind_name<T, M>() -> String {
    let marker = core::any::type_name::<M>();
    if marker == core::any::type_name::<()>() {
        return format!("Identifier<{}>", short_type_name(core::any::type_name::<T>()));
    }
    short_type_name(marker).to_string()
}

/// Last path segment with generic arguments stripped.
fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
