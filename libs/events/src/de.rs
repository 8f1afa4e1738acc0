//! Serde helpers shared by the payload types.

use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` as the type's default.
///
/// `#[serde(default)]` only covers missing keys; the provider also sends
/// `null` for unset scalars.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
