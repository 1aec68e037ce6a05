//! Provider plumbing: the Yahoo client, its error type and the market-data seam.

/// The main client (`YfClient`), its builder and the credential handshake.
pub mod client;
/// The provider error type (`YfError`).
pub mod error;
/// Service traits for abstracting the market-data source.
pub mod services;

pub(crate) mod net;

pub use client::{YfClient, YfClientBuilder};
pub use error::YfError;
pub use services::MarketDataService;
