//! Market history state containers — app-owned, crate-provided update logic.

use super::theme::{ChartLabels, ChartTheme};
use super::MarketSeries;
use crate::shared::fmt::decimal;
use crate::shared::DateKey;
use rust_decimal::Decimal;

// ─── Chart model ─────────────────────────────────────────────────────────────

/// Y axis a dataset is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Price,
    MarketCap,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Price => "price",
            Axis::MarketCap => "marketCap",
        }
    }

    /// Tick label for `value` on this axis. The market-cap axis shows none.
    pub fn tick_label(&self, value: &Decimal) -> String {
        match self {
            Axis::Price => decimal::axis_usd(value),
            Axis::MarketCap => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub x: DateKey,
    pub y: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartDataset {
    pub label: String,
    pub axis: Axis,
    pub color: String,
    pub data: Vec<ChartPoint>,
}

impl ChartDataset {
    /// Tooltip line for the point at `index`, e.g. `"Price: $1.50"`.
    pub fn tooltip(&self, index: usize) -> Option<String> {
        let y = self.data.get(index)?.y?;
        Some(format!("{}: {}", self.label, decimal::usd(&y)))
    }
}

/// Price + market-cap datasets ready for the charting library.
#[derive(Debug, Clone)]
pub struct MarketHistoryChart {
    pub price: ChartDataset,
    pub market_cap: ChartDataset,
    revision: u64,
}

impl MarketHistoryChart {
    pub fn new(theme: &ChartTheme, labels: &ChartLabels, series: &MarketSeries) -> Self {
        let mut chart = Self {
            price: ChartDataset {
                label: labels.price.clone(),
                axis: Axis::Price,
                color: theme.price_line.clone(),
                data: Vec::new(),
            },
            market_cap: ChartDataset {
                label: labels.market_cap.clone(),
                axis: Axis::MarketCap,
                color: theme.market_cap_line.clone(),
                data: Vec::new(),
            },
            revision: 0,
        };
        chart.fill(series);
        chart
    }

    /// Replace both datasets and bump the revision so the renderer redraws.
    pub fn update(&mut self, series: &MarketSeries) {
        self.fill(series);
        self.revision += 1;
    }

    /// Number of updates applied since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn datasets(&self) -> [&ChartDataset; 2] {
        [&self.price, &self.market_cap]
    }

    fn fill(&mut self, series: &MarketSeries) {
        self.price.data = series
            .price
            .iter()
            .map(|p| ChartPoint {
                x: p.date,
                y: Some(p.closing_price),
            })
            .collect();
        self.market_cap.data = series
            .market_cap
            .iter()
            .map(|p| ChartPoint {
                x: p.date,
                y: p.value,
            })
            .collect();
    }
}

// ─── Fetch indicators ────────────────────────────────────────────────────────

/// Loading indicator lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoaderState {
    /// No fetch in flight.
    #[default]
    Idle,
    /// Fetch in flight; indicator hidden until the timeout elapses.
    Armed,
    /// Indicator shown.
    Visible,
}

/// Visibility of the loading indicator, error indicator and chart.
///
/// ```text
/// begin()            Idle    -> Armed
/// timeout_elapsed()  Armed   -> Visible
/// succeed()/fail()   *       -> Idle      (error shown on fail)
/// retry()            *       -> Visible   (error hidden)
/// ```
#[derive(Debug, Clone, Default)]
pub struct FetchIndicators {
    loader: LoaderState,
    error_visible: bool,
    chart_visible: bool,
    attempts: u32,
}

impl FetchIndicators {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fetch starts.
    pub fn begin(&mut self) {
        if self.loader != LoaderState::Visible {
            self.loader = LoaderState::Armed;
        }
        self.attempts += 1;
    }

    /// The loader timeout fired before the fetch settled.
    pub fn timeout_elapsed(&mut self) {
        if self.loader == LoaderState::Armed {
            self.loader = LoaderState::Visible;
        }
    }

    pub fn succeed(&mut self) {
        self.chart_visible = true;
        self.settle();
    }

    pub fn fail(&mut self) {
        self.error_visible = true;
        self.settle();
    }

    /// User asked to refetch after a failure.
    pub fn retry(&mut self) {
        self.loader = LoaderState::Visible;
        self.error_visible = false;
    }

    /// Mark the chart as displayable (cached data is available).
    pub fn show_chart(&mut self) {
        self.chart_visible = true;
    }

    pub fn loader(&self) -> LoaderState {
        self.loader
    }

    pub fn loading_visible(&self) -> bool {
        self.loader == LoaderState::Visible
    }

    pub fn error_visible(&self) -> bool {
        self.error_visible
    }

    pub fn chart_visible(&self) -> bool {
        self.chart_visible
    }

    pub fn is_settled(&self) -> bool {
        self.loader == LoaderState::Idle
    }

    /// Fetches started so far, retries included.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    fn settle(&mut self) {
        self.loader = LoaderState::Idle;
    }
}
