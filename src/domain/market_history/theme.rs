//! Chart colours and labels, passed explicitly to the chart constructor.

use crate::error::StorageError;
use crate::storage::KeyValueStore;

/// Store key holding the user's colour mode (`"dark"` or anything else).
pub const COLOR_MODE_KEY: &str = "current-color-mode";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Interpret a stored colour-mode value. Only `"dark"` selects dark mode.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ColorMode::Dark,
            _ => ColorMode::Light,
        }
    }

    /// Read the colour mode from `store`.
    pub fn load<S: KeyValueStore>(store: &S) -> Result<Self, StorageError> {
        Ok(Self::from_stored(store.get_item(COLOR_MODE_KEY)?.as_deref()))
    }
}

/// Line and axis colours for the market history chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartTheme {
    pub price_line: String,
    pub market_cap_line: String,
    pub axis_font: String,
}

impl ChartTheme {
    pub fn light() -> Self {
        Self {
            price_line: "#4e3bc6".to_string(),
            market_cap_line: "#22bb96".to_string(),
            axis_font: "#a3a9b5".to_string(),
        }
    }

    pub fn dark() -> Self {
        Self {
            price_line: "#7b6ae3".to_string(),
            market_cap_line: "#55e3b9".to_string(),
            axis_font: "#a3a9b5".to_string(),
        }
    }

    pub fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => Self::light(),
            ColorMode::Dark => Self::dark(),
        }
    }
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self::light()
    }
}

/// Localized dataset labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLabels {
    pub price: String,
    pub market_cap: String,
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self {
            price: "Price".to_string(),
            market_cap: "Market Cap".to_string(),
        }
    }
}
