//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here. Fetch threads report back via channels.

use std::sync::mpsc::{Receiver, Sender};

use stockview_core::catalog::{StockOption, CATALOG, PLACEHOLDER};
use stockview_core::{AnalysisError, ViewerState};
use tracing::error;

use crate::worker::{WorkerCommand, WorkerResponse};

/// Dropdown state.
///
/// Row 0 is the placeholder; rows `1..=CATALOG.len()` are catalog entries.
/// `value` is what the dropdown currently shows as chosen, mirroring an HTML
/// `<select>`: choosing the row that is already the value does not fire.
#[derive(Debug, Clone, Default)]
pub struct SelectorState {
    pub cursor: usize,
    pub value: usize,
}

impl SelectorState {
    pub fn row_count(&self) -> usize {
        CATALOG.len() + 1
    }

    pub fn row_label(row: usize) -> String {
        match row {
            0 => PLACEHOLDER.to_string(),
            n => CATALOG
                .get(n - 1)
                .map(StockOption::label)
                .unwrap_or_default(),
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.row_count() {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_first(&mut self) {
        self.cursor = 0;
    }

    pub fn move_last(&mut self) {
        self.cursor = self.row_count() - 1;
    }

    /// Catalog entry under the cursor, if it is not the placeholder.
    pub fn highlighted(&self) -> Option<&'static StockOption> {
        self.cursor.checked_sub(1).and_then(|i| CATALOG.get(i))
    }
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

/// Top-level application state.
pub struct AppState {
    pub running: bool,
    pub viewer: ViewerState,
    pub selector: SelectorState,
    pub overlay: Overlay,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,

    pub endpoint: String,
}

impl AppState {
    pub fn new(
        worker_tx: Sender<WorkerCommand>,
        worker_rx: Receiver<WorkerResponse>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            running: true,
            viewer: ViewerState::new(),
            selector: SelectorState::default(),
            overlay: Overlay::None,
            worker_tx,
            worker_rx,
            endpoint: endpoint.into(),
        }
    }

    /// Choose the highlighted dropdown row.
    ///
    /// Returns true when a request was dispatched.
    pub fn choose_highlighted(&mut self) -> bool {
        if self.selector.cursor == self.selector.value {
            return false;
        }
        let Some(stock) = self.selector.highlighted() else {
            return false;
        };
        self.selector.value = self.selector.cursor;
        self.select_stock(stock);
        true
    }

    /// Select a stock and hand its request to the worker.
    pub fn select_stock(&mut self, stock: &'static StockOption) {
        let ticket = self.viewer.select_stock(stock);
        if let Err(e) = self.worker_tx.send(WorkerCommand::Fetch(ticket)) {
            error!(request_id = ticket.request_id, "worker unavailable: {e}");
            self.viewer.apply_outcome(
                &ticket,
                Err(AnalysisError::Transport("worker unavailable".into())),
            );
        }
    }

    /// Apply every response that has arrived, without blocking.
    pub fn drain_worker(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(resp) = self.worker_rx.try_recv() {
            self.handle_worker_response(resp);
            applied += 1;
        }
        applied
    }

    pub fn handle_worker_response(&mut self, resp: WorkerResponse) {
        match resp {
            WorkerResponse::Analysis { ticket, outcome } => {
                self.viewer.apply_outcome(&ticket, outcome);
            }
        }
    }
}
