//! Serde helpers for quirks of the backend wire format

use serde::{Deserialize, Deserializer};

/// The backend serializes unfetched to-many relationships as `null`;
/// decode that as an empty list.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
