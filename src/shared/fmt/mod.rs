//! Display formatting for chart tooltips, axis ticks and validation messages.

pub mod decimal;
pub mod num;
