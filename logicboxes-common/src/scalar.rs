//! Tolerant response scalars.
//!
//! The API serializes booleans, floats and Unix timestamps as quoted JSON
//! strings (`"true"`, `"12.50"`, `"1488274364"`). Each wrapper strips the
//! quoting, parses the native value and is immutable afterwards. A parse
//! failure is scoped to the one field being decoded.

use crate::error::Error;
use serde::{Deserialize, Deserializer};
use time::OffsetDateTime;

/// Boolean wire-encoded as a quoted `true`/`false` literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonBool(bool);

impl JsonBool {
    /// Decodes raw wire text, tolerating surrounding quote characters.
    pub fn from_wire(raw: &str) -> Result<Self, Error> {
        let text = raw.trim_matches('"');
        text.parse::<bool>().map(JsonBool).map_err(|_| Error::Format {
            kind: "boolean",
            text: text.to_owned(),
        })
    }

    pub fn as_bool(self) -> bool {
        self.0
    }
}

impl<'de> Deserialize<'de> for JsonBool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        JsonBool::from_wire(&text).map_err(serde::de::Error::custom)
    }
}

/// 64-bit float wire-encoded as a quoted numeric literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsonFloat(f64);

impl JsonFloat {
    pub fn from_wire(raw: &str) -> Result<Self, Error> {
        let text = raw.trim_matches('"');
        text.parse::<f64>()
            .map(JsonFloat)
            .map_err(|_| Error::Format {
                kind: "float",
                text: text.to_owned(),
            })
    }

    pub fn as_f64(self) -> f64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for JsonFloat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        JsonFloat::from_wire(&text).map_err(serde::de::Error::custom)
    }
}

/// Point in time wire-encoded as quoted Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonTime(OffsetDateTime);

impl JsonTime {
    pub fn from_wire(raw: &str) -> Result<Self, Error> {
        let text = raw.trim_matches('"');
        let seconds = text.parse::<i64>().map_err(|_| Error::Format {
            kind: "timestamp",
            text: text.to_owned(),
        })?;
        let time = OffsetDateTime::from_unix_timestamp(seconds).map_err(|_| Error::Format {
            kind: "timestamp",
            text: text.to_owned(),
        })?;
        Ok(JsonTime(time))
    }

    pub fn as_time(self) -> OffsetDateTime {
        self.0
    }
}

impl From<OffsetDateTime> for JsonTime {
    fn from(time: OffsetDateTime) -> Self {
        JsonTime(time)
    }
}

impl<'de> Deserialize<'de> for JsonTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        JsonTime::from_wire(&text).map_err(serde::de::Error::custom)
    }
}
