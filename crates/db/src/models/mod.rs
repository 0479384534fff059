//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - Read-side shapes returned to API clients (`Serialize`)
//! - `Deserialize` + `Validate` input DTOs for inserts and patches

pub mod account;
pub mod category;
pub mod note;
pub mod session;

use std::fmt::Display;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Deserialize a field that was present in the payload, even if `null`.
///
/// Paired with `#[serde(default)]` on an `Option<Option<T>>` field this
/// distinguishes "absent" (`None`) from "explicitly null" (`Some(None)`).
pub(crate) fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Deserialize an optional query-string value, treating an empty value
/// (`?category=`) the same as an absent one.
pub(crate) fn deserialize_blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw.trim().parse().map(Some).map_err(D::Error::custom),
        _ => Ok(None),
    }
}
