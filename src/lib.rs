//! # Explorer Widgets
//!
//! Client-side logic for two block explorer widgets, usable from native and
//! WASM targets.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Shared newtypes, amount scaling, formatting, domain models (always available, WASM-safe)
//! 2. **Storage** — `KeyValueStore` with an in-memory store and a browser `localStorage` backend
//! 3. **HTTP API** — `ExplorerHttp` for the market history endpoint
//! 4. **High-Level Client** — `ExplorerClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use explorer_widgets::prelude::*;
//!
//! let client = ExplorerClient::builder()
//!     .base_url("https://explorer.example.org")
//!     .build()?;
//!
//! let theme = ChartTheme::for_mode(ColorMode::Dark);
//! let mut widget = MarketHistoryWidget::open(MemoryStore::new(), &theme, &ChartLabels::default())?;
//! client.market_history().refresh(&mut widget, None).await?;
//!
//! let verdict = validate(AmountCheck::Withdraw, "1,5", &constraints, &TokenInfo::new("STAKE", 18));
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, amount scaling and display formatting.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified error types.
pub mod error;

/// Default endpoints and timings.
pub mod network;

// ── Layer 2: Storage ─────────────────────────────────────────────────────────

/// Key/value persistence for cached chart data and preferences.
pub mod storage;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client for explorer endpoints.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `ExplorerClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + scaling
    pub use crate::shared::{from_base_units, normalize_input, to_base_units, Address, DateKey};

    // Domain types — market history
    pub use crate::domain::market_history::{
        market_cap_series, merge_market_series, Axis, ChartLabels, ChartTheme, ColorMode,
        FetchIndicators, LoaderState, MarketCapPoint, MarketHistory, MarketHistoryCache,
        MarketHistoryChart, MarketHistoryWidget, MarketSeries, PricePoint, Supply,
    };

    // Domain types — stake
    pub use crate::domain::stake::{
        evaluate, validate, AmountCheck, Choice, ClaimModal, ClaimOrWithdraw, FormButton,
        StakeConstraints, StakeProgress, StakingCall, TokenInfo, Verdict, WithdrawForm,
        WithdrawModal,
    };

    // Errors
    pub use crate::error::{HttpError, ScalingError, StorageError, WidgetError};

    // Network
    pub use crate::network::{DEFAULT_EXPLORER_URL, DEFAULT_LOADER_DELAY};

    // Storage
    pub use crate::storage::{KeyValueStore, MemoryStore};
    #[cfg(feature = "storage-wasm")]
    pub use crate::storage::LocalStorage;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{ExplorerClient, ExplorerClientBuilder, MarketHistorySubClient};
}
