//! Serde adapters for optional metadata fields.
//!
//! Absent values are written the way the instructor key has always shown
//! them: `"Unknown"` for supply, the empty string for the contract and
//! homepage. An absent OpenSea link is left out entirely.

use serde::{Deserialize, Deserializer, Serializer};

use crate::record::UNKNOWN_SUPPLY;

pub(crate) fn unknown_if_none<S: Serializer>(
    value: &Option<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_deref().unwrap_or(UNKNOWN_SUPPLY))
}

pub(crate) fn none_if_unknown<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| v != UNKNOWN_SUPPLY))
}

pub(crate) fn empty_if_none<S: Serializer>(
    value: &Option<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}

pub(crate) fn none_if_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_empty()))
}
