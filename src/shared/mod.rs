//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the explorer backend sends and the store persists, so they can
//! be used directly in wire types without conversion overhead.

pub mod fmt;
pub mod scaling;
pub mod serde_util;

pub use scaling::{from_base_units, normalize_input, to_base_units, ScalingError};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── DateKey ─────────────────────────────────────────────────────────────────

/// Calendar-day key in ISO format (`"2024-03-01"`).
///
/// Orders chronologically. Serializes as the plain ISO string so it can be
/// used as a JSON object key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today's key in UTC.
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl std::fmt::Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for DateKey {
    type Err = chrono::ParseError;

    /// Accepts a bare date or an RFC 3339 timestamp, keeping only the
    /// calendar day of the latter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, Self::FORMAT)
            .or_else(|_| DateTime::parse_from_rfc3339(s).map(|ts| ts.date_naive()))
            .map(Self)
    }
}

impl Serialize for DateKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateKey::from_str(&s)
            .map_err(|e| serde::de::Error::custom(format!("Invalid date key '{}': {}", s, e)))
    }
}

// ─── Address ─────────────────────────────────────────────────────────────────

/// A `0x`-prefixed hex account address (staking pool or delegator).
///
/// Serializes transparently as a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the 20 address bytes.
    pub fn to_bytes(&self) -> Result<[u8; 20], String> {
        let raw = self
            .0
            .strip_prefix("0x")
            .or_else(|| self.0.strip_prefix("0X"))
            .unwrap_or(&self.0);
        let bytes = hex::decode(raw).map_err(|e| e.to_string())?;
        <[u8; 20]>::try_from(bytes.as_slice())
            .map_err(|_| format!("Expected 20 bytes, got {}", bytes.len()))
    }

    pub fn is_valid(&self) -> bool {
        self.to_bytes().is_ok()
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Address(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_key_round_trip_string() {
        let key = DateKey::from_str("2024-03-01").unwrap();
        assert_eq!(key.to_string(), "2024-03-01");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2024-03-01\"");
    }

    #[test]
    fn test_date_key_truncates_timestamp() {
        let key = DateKey::from_str("2024-03-01T12:30:00.000Z").unwrap();
        assert_eq!(key.to_string(), "2024-03-01");
    }

    #[test]
    fn test_date_key_rejects_garbage() {
        assert!(DateKey::from_str("yesterday").is_err());
        assert!(DateKey::from_str("2024-03-01junk").is_err());
        assert!(DateKey::from_str("2024-03-01T12:30").is_err());
        assert!(serde_json::from_str::<DateKey>("\"2024-13-01\"").is_err());
    }

    #[test]
    fn test_date_key_orders_chronologically() {
        let a = DateKey::from_str("2023-12-31").unwrap();
        let b = DateKey::from_str("2024-01-01").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_address_bytes() {
        let addr = Address::from("0x00000000000000000000000000000000000000ff");
        let bytes = addr.to_bytes().unwrap();
        assert_eq!(bytes[19], 0xff);
        assert!(addr.is_valid());
        assert!(!Address::from("0x1234").is_valid());
        assert!(!Address::from("not-hex").is_valid());
    }

    #[test]
    fn test_address_serde() {
        let addr = Address::from("0xabc");
        assert_eq!(serde_json::to_string(&addr).unwrap(), "\"0xabc\"");
    }
}
