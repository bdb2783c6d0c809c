//! The fixed catalog of selectable stocks.
//!
//! The catalog is a process-wide immutable table. Nothing is added or removed
//! at runtime; the selector only ever offers these entries.

use serde::Serialize;
use std::fmt;

/// A selectable stock: exchange symbol plus display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StockOption {
    pub ticker: &'static str,
    pub name: &'static str,
}

impl StockOption {
    pub const fn new(ticker: &'static str, name: &'static str) -> Self {
        Self { ticker, name }
    }

    /// `<name> (<ticker>)`, used for both dropdown rows and the details title.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.ticker)
    }
}

impl fmt::Display for StockOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.ticker)
    }
}

/// Construction-industry stocks, in dropdown order.
pub static CATALOG: &[StockOption] = &[
    StockOption::new("IBP", "Installed Building Products, Inc."),
    StockOption::new("SKY", "Skyline Champion Corporation"),
    StockOption::new("KBH", "KB Home"),
    StockOption::new("CVCO", "Cavco Industries, Inc."),
    StockOption::new("GRBK", "Green Brick Partners, Inc."),
    StockOption::new("TOL", "Toll Brothers, Inc."),
    StockOption::new("DHI", "D.R. Horton, Inc."),
    StockOption::new("LEN", "Lennar Corporation"),
    StockOption::new("PHM", "PulteGroup, Inc."),
    StockOption::new("NVR", "NVR, Inc."),
];

/// Placeholder row shown above the catalog entries in the selector.
pub const PLACEHOLDER: &str = "Select a Stock";

/// Resolve a ticker back to its catalog entry. Exact match only.
pub fn find_by_ticker(ticker: &str) -> Option<&'static StockOption> {
    CATALOG.iter().find(|s| s.ticker == ticker)
}

/// Case-insensitive lookup, for user-typed symbols.
pub fn lookup(ticker: &str) -> Option<&'static StockOption> {
    let wanted = ticker.trim();
    CATALOG.iter().find(|s| s.ticker.eq_ignore_ascii_case(wanted))
}
