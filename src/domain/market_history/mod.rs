//! Market history domain — price series, supply, derived market cap.

pub mod cache;
#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod theme;
pub mod widget;
pub mod wire;

pub use cache::{MarketHistoryCache, MARKET_STORAGE_KEY, SUPPLY_STORAGE_KEY};
pub use state::{Axis, ChartDataset, ChartPoint, FetchIndicators, LoaderState, MarketHistoryChart};
pub use theme::{ChartLabels, ChartTheme, ColorMode};
pub use widget::MarketHistoryWidget;

use crate::shared::serde_util::{decimal_any, FlexDecimal};
use crate::shared::DateKey;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// One day of closing price, as persisted under `marketStorage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub date: DateKey,
    #[serde(with = "decimal_any")]
    pub closing_price: Decimal,
}

/// Circulating supply: one value for every date, or one value per day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Supply {
    Scalar(Decimal),
    PerDay(BTreeMap<DateKey, Decimal>),
}

impl Supply {
    /// Supply applicable to `date`.
    pub fn at(&self, date: &DateKey) -> Option<Decimal> {
        match self {
            Supply::Scalar(value) => Some(*value),
            Supply::PerDay(by_day) => by_day.get(date).copied(),
        }
    }

    /// Merge today's live supply into a per-day mapping. Scalars are returned
    /// unchanged.
    pub fn with_live_value(mut self, today: DateKey, live: Option<Decimal>) -> Self {
        if let (Supply::PerDay(by_day), Some(value)) = (&mut self, live) {
            by_day.insert(today, value);
        }
        self
    }
}

impl Serialize for Supply {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Supply::Scalar(value) => FlexDecimal(*value).serialize(serializer),
            Supply::PerDay(by_day) => serializer.collect_map(
                by_day.iter().map(|(date, value)| (date, FlexDecimal(*value))),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for Supply {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Scalar(FlexDecimal),
            PerDay(BTreeMap<DateKey, FlexDecimal>),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Scalar(value) => Ok(Supply::Scalar(value.0)),
            Raw::PerDay(by_day) => Ok(Supply::PerDay(
                by_day.into_iter().map(|(k, v)| (k, v.0)).collect(),
            )),
        }
    }
}

/// Derived market capitalisation for one date. `None` when no supply is known
/// for that date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketCapPoint {
    pub date: DateKey,
    pub value: Option<Decimal>,
}

/// Price series plus the market-cap series derived from it. Both have the same
/// length and date order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketSeries {
    pub price: Vec<PricePoint>,
    pub market_cap: Vec<MarketCapPoint>,
}

/// A decoded market history fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketHistory {
    pub prices: Vec<PricePoint>,
    pub supply: Option<Supply>,
}

impl MarketHistory {
    /// Series for this fetch, with `live_supply` merged under `today` when the
    /// supply is per-day.
    pub fn series(&self, live_supply: Option<Decimal>, today: DateKey) -> MarketSeries {
        let supply = self
            .supply
            .clone()
            .map(|s| s.with_live_value(today, live_supply));
        merge_market_series(&[], None, Some(&self.prices), supply.as_ref())
    }
}

/// Pointwise `closing_price × supply(date)`.
///
/// Missing supply (or an overflowing product) yields a `None` point rather than
/// an error; the output is index-aligned with `prices`.
pub fn market_cap_series(prices: &[PricePoint], supply: Option<&Supply>) -> Vec<MarketCapPoint> {
    prices
        .iter()
        .map(|point| MarketCapPoint {
            date: point.date,
            value: supply
                .and_then(|s| s.at(&point.date))
                .and_then(|s| point.closing_price.checked_mul(s)),
        })
        .collect()
}

/// Reconcile cached and freshly fetched series. Fresh data, when present,
/// replaces the cached side entirely.
pub fn merge_market_series(
    cached_price: &[PricePoint],
    cached_supply: Option<&Supply>,
    fresh_price: Option<&[PricePoint]>,
    fresh_supply: Option<&Supply>,
) -> MarketSeries {
    let price = fresh_price.unwrap_or(cached_price);
    let supply = fresh_supply.or(cached_supply);
    MarketSeries {
        price: price.to_vec(),
        market_cap: market_cap_series(price, supply),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn day(s: &str) -> DateKey {
        DateKey::from_str(s).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn point(date: &str, price: &str) -> PricePoint {
        PricePoint {
            date: day(date),
            closing_price: dec(price),
        }
    }

    fn prices() -> Vec<PricePoint> {
        vec![
            point("2024-03-01", "1.5"),
            point("2024-03-02", "2"),
            point("2024-03-03", "0.25"),
        ]
    }

    #[test]
    fn test_scalar_supply_multiplies_every_point() {
        let p = prices();
        let supply = Supply::Scalar(dec("1000"));
        let caps = market_cap_series(&p, Some(&supply));
        assert_eq!(caps.len(), p.len());
        for (cap, price) in caps.iter().zip(p.iter()) {
            assert_eq!(cap.date, price.date);
            assert_eq!(cap.value, Some(price.closing_price * dec("1000")));
        }
    }

    #[test]
    fn test_per_day_supply_missing_date_is_none() {
        let mut by_day = BTreeMap::new();
        by_day.insert(day("2024-03-01"), dec("10"));
        by_day.insert(day("2024-03-03"), dec("40"));
        let caps = market_cap_series(&prices(), Some(&Supply::PerDay(by_day)));
        assert_eq!(caps[0].value, Some(dec("15")));
        assert_eq!(caps[1].value, None);
        assert_eq!(caps[2].value, Some(dec("10")));
    }

    #[test]
    fn test_absent_supply_yields_all_none() {
        let caps = market_cap_series(&prices(), None);
        assert_eq!(caps.len(), 3);
        assert!(caps.iter().all(|c| c.value.is_none()));
    }

    #[test]
    fn test_overflowing_product_is_none() {
        let p = vec![point("2024-03-01", "79228162514264337593543950335")];
        let caps = market_cap_series(&p, Some(&Supply::Scalar(dec("2"))));
        assert_eq!(caps[0].value, None);
    }

    #[test]
    fn test_merge_prefers_fresh_data() {
        let cached = vec![point("2024-01-01", "9")];
        let cached_supply = Supply::Scalar(dec("1"));
        let fresh = prices();
        let fresh_supply = Supply::Scalar(dec("2"));

        let initial = merge_market_series(&cached, Some(&cached_supply), None, None);
        assert_eq!(initial.price, cached);
        assert_eq!(initial.market_cap[0].value, Some(dec("9")));

        let refreshed =
            merge_market_series(&cached, Some(&cached_supply), Some(&fresh), Some(&fresh_supply));
        assert_eq!(refreshed.price, fresh);
        assert_eq!(refreshed.market_cap[1].value, Some(dec("4")));
    }

    #[test]
    fn test_merge_fresh_price_with_cached_supply() {
        let cached_supply = Supply::Scalar(dec("3"));
        let fresh = prices();
        let merged = merge_market_series(&[], Some(&cached_supply), Some(&fresh), None);
        assert_eq!(merged.market_cap[1].value, Some(dec("6")));
    }

    #[test]
    fn test_live_value_merges_into_per_day_only() {
        let today = day("2024-03-04");
        let per_day = Supply::PerDay(BTreeMap::new()).with_live_value(today, Some(dec("77")));
        assert_eq!(per_day.at(&today), Some(dec("77")));

        let scalar = Supply::Scalar(dec("5")).with_live_value(today, Some(dec("77")));
        assert_eq!(scalar, Supply::Scalar(dec("5")));
    }

    #[test]
    fn test_price_point_storage_format_is_camel_case() {
        let json = serde_json::to_string(&point("2024-03-01", "1.5")).unwrap();
        assert_eq!(json, r#"{"date":"2024-03-01","closingPrice":"1.5"}"#);
        let back: PricePoint =
            serde_json::from_str(r#"{"date":"2024-03-01","closingPrice":1.5}"#).unwrap();
        assert_eq!(back.closing_price, dec("1.5"));
    }

    #[test]
    fn test_supply_serde_scalar_and_map() {
        let scalar: Supply = serde_json::from_str("1000000").unwrap();
        assert_eq!(scalar, Supply::Scalar(dec("1000000")));
        assert_eq!(serde_json::to_string(&scalar).unwrap(), "\"1000000\"");

        let per_day: Supply =
            serde_json::from_str(r#"{"2024-03-01": "10", "2024-03-02": 20}"#).unwrap();
        assert_eq!(per_day.at(&day("2024-03-02")), Some(dec("20")));
        assert_eq!(
            serde_json::to_string(&per_day).unwrap(),
            r#"{"2024-03-01":"10","2024-03-02":"20"}"#
        );

        let absent: Option<Supply> = serde_json::from_str("null").unwrap();
        assert!(absent.is_none());
    }
}
