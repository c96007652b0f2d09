//! Entity marker trait.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::types::EntityId;

/// A persisted record with a unique integer identifier.
///
/// Entities are read back from [`Record`](super::store::Record)s through
/// serde, so every column of the backing table must map onto a field.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Human-readable resource name used in messages, e.g. `"Property"`.
    const RESOURCE: &'static str;

    /// The entity's primary key.
    fn id(&self) -> EntityId;
}
