//! StockView TUI — terminal front-end for the construction stock analyzer.
//!
//! Layout:
//! - Heading
//! - Selector — placeholder row plus the ten catalog stocks
//! - Details — loading indicator, title, metrics list, AI analysis
//! - Status bar — key hints, in-flight requests, last update time

pub mod app;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;
pub mod worker;

pub use app::AppState;
pub use input::handle_key;
