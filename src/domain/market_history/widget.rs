//! The market history chart widget: cache + chart + indicators.

use super::cache::MarketHistoryCache;
use super::state::{FetchIndicators, MarketHistoryChart};
use super::theme::{ChartLabels, ChartTheme};
use super::MarketHistory;
use crate::error::{StorageError, WidgetError};
use crate::shared::DateKey;
use crate::storage::KeyValueStore;
use rust_decimal::Decimal;

/// App-owned widget instance. Renders cached data immediately, then applies
/// the fetch outcome.
#[derive(Debug)]
pub struct MarketHistoryWidget<S: KeyValueStore> {
    cache: MarketHistoryCache<S>,
    chart: MarketHistoryChart,
    indicators: FetchIndicators,
}

impl<S: KeyValueStore> MarketHistoryWidget<S> {
    /// Build the widget from whatever `store` has cached.
    pub fn open(store: S, theme: &ChartTheme, labels: &ChartLabels) -> Result<Self, StorageError> {
        let cache = MarketHistoryCache::load(store)?;
        let chart = MarketHistoryChart::new(theme, labels, &cache.series());
        let mut indicators = FetchIndicators::new();
        if !cache.is_empty() {
            indicators.show_chart();
        }
        Ok(Self {
            cache,
            chart,
            indicators,
        })
    }

    pub fn chart(&self) -> &MarketHistoryChart {
        &self.chart
    }

    pub fn indicators(&self) -> &FetchIndicators {
        &self.indicators
    }

    pub fn cache(&self) -> &MarketHistoryCache<S> {
        &self.cache
    }

    /// A fetch is about to start.
    pub fn begin_fetch(&mut self) {
        self.indicators.begin();
    }

    /// The loader timeout fired while the fetch is still in flight.
    pub fn loader_timeout(&mut self) {
        self.indicators.timeout_elapsed();
    }

    /// Apply a successful fetch: persist, recompute, redraw.
    ///
    /// If persisting fails the chart still shows the fresh series; the storage
    /// error is returned after the indicators settle.
    pub fn apply(
        &mut self,
        fresh: MarketHistory,
        live_supply: Option<Decimal>,
        today: DateKey,
    ) -> Result<(), WidgetError> {
        let points = fresh.prices.len();
        let series = fresh.series(live_supply, today);
        let result = self.cache.replace(fresh);
        if let Err(e) = &result {
            tracing::warn!("Failed to persist market history: {}", e);
        }
        self.chart.update(&series);
        tracing::debug!(points, revision = self.chart.revision(), "Market history updated");
        self.indicators.succeed();
        result
    }

    /// Apply a failed fetch: keep the cached series, show the error indicator.
    pub fn apply_failure(&mut self, error: &WidgetError) {
        tracing::error!("Market history fetch failed: {}", error);
        self.indicators.fail();
    }

    /// The user clicked the error indicator; a fresh fetch follows.
    pub fn retry(&mut self) {
        tracing::info!(attempt = self.indicators.attempts() + 1, "Retrying market history fetch");
        self.indicators.retry();
    }
}
