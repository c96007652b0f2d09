//! Partial-update fields for nullable columns.
//!
//! An update body distinguishes three cases per nullable column: key absent
//! (leave unchanged), `null` (clear), and a value (set). Such fields are
//! `Option<Option<T>>` and deserialize with [`nullable`]:
//!
//! ```ignore
//! #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
//! pub address: Option<Option<String>>,
//! ```

use serde::{Deserialize, Deserializer};

/// Deserialize a present key as `Some`, keeping an explicit `null` as
/// `Some(None)`. Pair with `#[serde(default)]` so an absent key is `None`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
