//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types
//! - `wire.rs` — Raw serde structs matching server payloads
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `state.rs` / `modal.rs` — State containers the application drives
//! - `client.rs` — Sub-client with HTTP methods (market history only)

pub mod market_history;
pub mod stake;
