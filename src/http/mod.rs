//! HTTP client layer — `ExplorerHttp`, one method per endpoint.

pub mod client;

pub use client::ExplorerHttp;
