//! Custom serde helpers for explorer wire and storage formats.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::scaling::parse_decimal;

/// A decimal that deserializes from either a JSON string or a JSON number and
/// always serializes as a string.
///
/// The explorer sends amounts as strings; older cached entries and hand-written
/// fixtures use bare numbers. Both must load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexDecimal(pub Decimal);

impl Serialize for FlexDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for FlexDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Str(String),
            Num(serde_json::Number),
        }

        let text = match Raw::deserialize(deserializer)? {
            Raw::Str(s) => s,
            Raw::Num(n) => n.to_string(),
        };
        parse_decimal(text.trim())
            .map(FlexDecimal)
            .map_err(serde::de::Error::custom)
    }
}

impl From<FlexDecimal> for Decimal {
    fn from(d: FlexDecimal) -> Self {
        d.0
    }
}

/// `#[serde(with = "decimal_any")]` for `Decimal` fields.
pub mod decimal_any {
    use super::FlexDecimal;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        FlexDecimal(*value).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        FlexDecimal::deserialize(deserializer).map(Decimal::from)
    }
}

/// `#[serde(with = "option_decimal_any", default)]` for `Option<Decimal>` fields.
/// `null` and missing fields both map to `None`.
pub mod option_decimal_any {
    use super::FlexDecimal;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.map(FlexDecimal).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<FlexDecimal>::deserialize(deserializer).map(|v| v.map(Decimal::from))
    }
}

/// Deserializes a field whose value is itself a JSON document encoded as a
/// string (the explorer's `supply_data` / `history_data`).
pub fn from_json_string<T>(field: &'static str, raw: &str) -> Result<T, crate::error::HttpError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(raw).map_err(|e| crate::error::HttpError::MalformedPayload {
        field,
        reason: e.to_string(),
    })
}
