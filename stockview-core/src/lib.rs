//! StockView Core — catalog, analysis model, backend client and viewer state.
//!
//! This crate holds everything that does not need a terminal:
//! - The static catalog of construction-industry tickers
//! - The analysis response model returned by the backend
//! - The blocking HTTP client for the analysis endpoint
//! - Viewer state (selection, loading flag, last result) and its transitions
//! - The render contract shared by the TUI and the CLI

pub mod analysis;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod viewer;

pub use analysis::{AnalysisRequest, AnalysisResult};
pub use catalog::{StockOption, CATALOG};
pub use client::{AnalysisClient, HttpAnalysisClient, DEFAULT_ENDPOINT};
pub use config::{ConfigError, ViewerConfig};
pub use error::AnalysisError;
pub use render::{DetailsView, NO_ANALYSIS};
pub use viewer::{FetchTicket, ViewerState};
