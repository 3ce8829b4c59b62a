//! Wire → domain conversions for market history.

use super::wire::{MarketHistoryResponse, WireHistoryPoint};
use super::{MarketHistory, PricePoint, Supply};
use crate::error::HttpError;
use crate::shared::serde_util::from_json_string;
use serde::de::DeserializeOwned;

impl From<WireHistoryPoint> for PricePoint {
    fn from(p: WireHistoryPoint) -> Self {
        Self {
            date: p.date,
            closing_price: p.closing_price,
        }
    }
}

fn decode_embedded<T: DeserializeOwned>(
    field: &'static str,
    value: serde_json::Value,
) -> Result<T, HttpError> {
    match value {
        serde_json::Value::String(raw) => from_json_string(field, &raw),
        other => serde_json::from_value(other).map_err(|e| HttpError::MalformedPayload {
            field,
            reason: e.to_string(),
        }),
    }
}

impl TryFrom<MarketHistoryResponse> for MarketHistory {
    type Error = HttpError;

    fn try_from(resp: MarketHistoryResponse) -> Result<Self, Self::Error> {
        let supply: Option<Supply> = decode_embedded("supply_data", resp.supply_data)?;
        let history: Option<Vec<WireHistoryPoint>> =
            decode_embedded("history_data", resp.history_data)?;

        Ok(Self {
            prices: history
                .unwrap_or_default()
                .into_iter()
                .map(PricePoint::from)
                .collect(),
            supply,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::DateKey;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_decode_string_encoded_fields() {
        let body = serde_json::json!({
            "supply_data": "\"1000\"",
            "history_data": "[{\"date\":\"2024-03-01\",\"closing_price\":\"1.5\",\"opening_price\":\"1.4\"}]"
        });
        let resp: MarketHistoryResponse = serde_json::from_value(body).unwrap();
        let history = MarketHistory::try_from(resp).unwrap();

        assert_eq!(history.supply, Some(Supply::Scalar(Decimal::from(1000))));
        assert_eq!(history.prices.len(), 1);
        assert_eq!(history.prices[0].date, DateKey::from_str("2024-03-01").unwrap());
        assert_eq!(history.prices[0].closing_price, Decimal::from_str("1.5").unwrap());
    }

    #[test]
    fn test_decode_per_day_supply_and_plain_values() {
        let body = serde_json::json!({
            "supply_data": {"2024-03-01": "10"},
            "history_data": [{"date": "2024-03-01", "closing_price": 2}]
        });
        let resp: MarketHistoryResponse = serde_json::from_value(body).unwrap();
        let history = MarketHistory::try_from(resp).unwrap();

        assert!(matches!(history.supply, Some(Supply::PerDay(_))));
        assert_eq!(history.prices[0].closing_price, Decimal::from(2));
    }

    #[test]
    fn test_decode_missing_fields_is_empty() {
        let resp: MarketHistoryResponse = serde_json::from_str("{}").unwrap();
        let history = MarketHistory::try_from(resp).unwrap();
        assert_eq!(history, MarketHistory::default());
    }

    #[test]
    fn test_decode_malformed_history_names_field() {
        let body = serde_json::json!({ "supply_data": "1", "history_data": "[{" });
        let resp: MarketHistoryResponse = serde_json::from_value(body).unwrap();
        let err = MarketHistory::try_from(resp).unwrap_err();
        assert!(matches!(
            err,
            HttpError::MalformedPayload { field: "history_data", .. }
        ));
    }
}
