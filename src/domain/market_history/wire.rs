//! Wire types for the market history endpoint.

use crate::shared::serde_util::decimal_any;
use crate::shared::DateKey;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Query parameter the endpoint expects to answer with JSON.
pub const RESPONSE_TYPE_PARAM: (&str, &str) = ("type", "JSON");

/// Raw response of `GET {data_path}?type=JSON`.
///
/// Both fields carry JSON documents encoded as strings. Plain JSON values are
/// accepted too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketHistoryResponse {
    #[serde(default)]
    pub supply_data: serde_json::Value,
    #[serde(default)]
    pub history_data: serde_json::Value,
}

/// One `history_data` entry, snake_case as sent by the explorer. Other keys
/// (`opening_price`) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireHistoryPoint {
    pub date: DateKey,
    #[serde(with = "decimal_any")]
    pub closing_price: Decimal,
}
