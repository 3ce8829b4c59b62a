//! Owned cache for the price and supply series.
//!
//! Parses the store once on load and writes through on every change, so the
//! rest of the crate never touches the raw `marketStorage` / `supplyStorage`
//! strings.

use super::{merge_market_series, MarketHistory, MarketSeries, PricePoint, Supply};
use crate::error::{StorageError, WidgetError};
use crate::shared::DateKey;
use crate::storage::KeyValueStore;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

/// Store key for the JSON array of `{date, closingPrice}`.
pub const MARKET_STORAGE_KEY: &str = "marketStorage";

/// Store key for the supply (JSON scalar, or JSON object keyed by date).
pub const SUPPLY_STORAGE_KEY: &str = "supplyStorage";

/// Cached market history backed by a [`KeyValueStore`].
#[derive(Debug)]
pub struct MarketHistoryCache<S: KeyValueStore> {
    store: S,
    prices: Vec<PricePoint>,
    supply: Option<Supply>,
}

fn read_json<S: KeyValueStore, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get_item(key)? else {
        return Ok(None);
    };
    match serde_json::from_str::<Option<T>>(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!(key, "Ignoring unreadable cache entry: {}", e);
            Ok(None)
        }
    }
}

impl<S: KeyValueStore> MarketHistoryCache<S> {
    /// Load both series from `store`. Entries that fail to parse are treated as
    /// absent.
    pub fn load(store: S) -> Result<Self, StorageError> {
        let prices = read_json::<_, Vec<PricePoint>>(&store, MARKET_STORAGE_KEY)?.unwrap_or_default();
        let supply = read_json::<_, Supply>(&store, SUPPLY_STORAGE_KEY)?;
        tracing::debug!(
            points = prices.len(),
            has_supply = supply.is_some(),
            "Loaded market history cache"
        );
        Ok(Self {
            store,
            prices,
            supply,
        })
    }

    pub fn prices(&self) -> &[PricePoint] {
        &self.prices
    }

    pub fn supply(&self) -> Option<&Supply> {
        self.supply.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Replace the cached price series. The in-memory copy only changes once
    /// the store accepted the write.
    pub fn set_prices(&mut self, prices: Vec<PricePoint>) -> Result<(), WidgetError> {
        let json = serde_json::to_string(&prices)?;
        self.store.set_item(MARKET_STORAGE_KEY, &json)?;
        self.prices = prices;
        Ok(())
    }

    /// Replace the cached supply. `None` removes the entry.
    pub fn set_supply(&mut self, supply: Option<Supply>) -> Result<(), WidgetError> {
        match &supply {
            Some(s) => {
                let json = serde_json::to_string(s)?;
                self.store.set_item(SUPPLY_STORAGE_KEY, &json)?;
            }
            None => self.store.remove_item(SUPPLY_STORAGE_KEY)?,
        }
        self.supply = supply;
        Ok(())
    }

    /// Series from cached data only.
    pub fn series(&self) -> MarketSeries {
        merge_market_series(&self.prices, self.supply.as_ref(), None, None)
    }

    /// Overwrite both cached series with a fresh fetch.
    pub fn replace(&mut self, fresh: MarketHistory) -> Result<(), WidgetError> {
        self.set_prices(fresh.prices)?;
        self.set_supply(fresh.supply)
    }

    /// Persist a fresh fetch (overwriting whatever was cached) and recompute the
    /// series. `live_supply` is merged under `today` for per-day supplies; it is
    /// not persisted.
    pub fn refresh(
        &mut self,
        fresh: MarketHistory,
        live_supply: Option<Decimal>,
        today: DateKey,
    ) -> Result<MarketSeries, WidgetError> {
        let series = fresh.series(live_supply, today);
        self.replace(fresh)?;
        Ok(series)
    }

    /// Drop both cached series from memory and the store.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove_item(MARKET_STORAGE_KEY)?;
        self.store.remove_item(SUPPLY_STORAGE_KEY)?;
        self.prices.clear();
        self.supply = None;
        Ok(())
    }
}
