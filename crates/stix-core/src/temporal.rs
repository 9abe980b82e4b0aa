//! # Temporal Types
//!
//! UTC-only timestamp type for STIX objects. Timestamps render in the
//! exchange format's textual form: RFC 3339, UTC, `Z` suffix, millisecond
//! precision (e.g. `2016-08-08T15:50:10.983Z`).
//!
//! [`Timestamp::now`] is the clock collaborator used when an object is
//! constructed fresh. Envelope properties hold the rendered string, so a
//! decoded object keeps the producer's exact text.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// A UTC timestamp with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current UTC time, truncated to milliseconds.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Wrap a `chrono::DateTime<Utc>`, truncating to milliseconds.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        let millis = dt.timestamp_millis();
        Self(DateTime::from_timestamp_millis(millis).unwrap_or(dt))
    }

    /// Parse an RFC 3339 string, converting any offset to UTC.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimestamp`] if the string is not
    /// valid RFC 3339.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| ValidationError::InvalidTimestamp {
            value: s.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_datetime(dt.with_timezone(&Utc)))
    }

    /// Access the underlying `chrono::DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
    pub fn to_stix_string(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_stix_string())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}

impl std::str::FromStr for Timestamp {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_stix_string())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
