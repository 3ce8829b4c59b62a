//! Market history sub-client — fetch and apply to a widget.

use super::widget::MarketHistoryWidget;
use super::MarketHistory;
use crate::client::ExplorerClient;
use crate::error::WidgetError;
use crate::shared::DateKey;
use crate::storage::KeyValueStore;

use futures_util::future::{select, Either};
use futures_util::pin_mut;
use rust_decimal::Decimal;

/// Sub-client for market history operations.
pub struct MarketHistoryClient<'a> {
    pub(crate) client: &'a ExplorerClient,
}

impl<'a> MarketHistoryClient<'a> {
    /// Fetch and decode the configured market history path.
    pub async fn fetch(&self) -> Result<MarketHistory, WidgetError> {
        self.fetch_path(&self.client.market_history_path).await
    }

    /// Fetch and decode an explicit data path.
    pub async fn fetch_path(&self, data_path: &str) -> Result<MarketHistory, WidgetError> {
        let resp = self.client.http.get_market_history(data_path).await?;
        Ok(MarketHistory::try_from(resp)?)
    }

    /// Run one fetch against `widget`: arm the loader, force it visible if the
    /// fetch outlives the loader delay, then apply success or failure.
    ///
    /// `live_supply` is today's supply value, merged into per-day supplies.
    pub async fn refresh<S: KeyValueStore>(
        &self,
        widget: &mut MarketHistoryWidget<S>,
        live_supply: Option<Decimal>,
    ) -> Result<(), WidgetError> {
        widget.begin_fetch();

        let fetch = self.fetch();
        let delay = futures_timer::Delay::new(self.client.loader_delay);
        pin_mut!(fetch, delay);

        let result = match select(fetch, delay).await {
            Either::Left((result, _)) => result,
            Either::Right(((), pending)) => {
                widget.loader_timeout();
                pending.await
            }
        };

        match result {
            Ok(history) => widget.apply(history, live_supply, DateKey::today()),
            Err(e) => {
                widget.apply_failure(&e);
                Err(e)
            }
        }
    }

    /// User-triggered retry after a failed refresh.
    pub async fn retry<S: KeyValueStore>(
        &self,
        widget: &mut MarketHistoryWidget<S>,
        live_supply: Option<Decimal>,
    ) -> Result<(), WidgetError> {
        widget.retry();
        self.refresh(widget, live_supply).await
    }
}
