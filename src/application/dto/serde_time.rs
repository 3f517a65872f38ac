//! `#[serde(with = "serde_time")]` adapters for the canonical wire layout.

use crate::domain::time::wire;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// # Errors
///
/// Propagates the serializer's own error.
pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&wire::format(*value))
}

/// `null` and `""` deserialize to the unset sentinel.
///
/// # Errors
///
/// Fails on non-string input and on strings that are not a date-time.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    wire::parse(raw.as_deref()).map_err(serde::de::Error::custom)
}

pub mod option {
    use crate::domain::time::wire;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// # Errors
    ///
    /// Propagates the serializer's own error.
    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_some(&wire::format(*dt)),
            None => serializer.serialize_none(),
        }
    }

    /// `null` and `""` deserialize to `None`.
    ///
    /// # Errors
    ///
    /// Fails on non-string input and on strings that are not a date-time.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.filter(|s| !s.is_empty())
            .map(|s| wire::parse(Some(s.as_str())).map_err(serde::de::Error::custom))
            .transpose()
    }
}
