//! Default endpoints and timings for the explorer widgets.

use std::time::Duration;

/// Default explorer base URL (local development server).
pub const DEFAULT_EXPLORER_URL: &str = "http://localhost:4000";

/// Default path serving the market history chart data.
pub const DEFAULT_MARKET_HISTORY_PATH: &str = "/market-history-chart";

/// How long a fetch may run before the loading indicator is forced visible.
pub const DEFAULT_LOADER_DELAY: Duration = Duration::from_millis(1000);

/// Per-request timeout on native targets.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
