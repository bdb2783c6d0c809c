//! Viewer state — selection, loading flag, last result.
//!
//! Single owner. The front-end calls [`ViewerState::select_stock`] on user
//! input, runs the returned [`FetchTicket`] somewhere that may block, and hands
//! the outcome back through [`ViewerState::apply_outcome`]. Outcomes are
//! applied in the order they arrive; nothing is cancelled or reordered.

use chrono::{DateTime, Local};
use tracing::{error, info};

use crate::analysis::AnalysisResult;
use crate::catalog::StockOption;
use crate::client::AnalysisClient;
use crate::error::AnalysisError;
use crate::render::DetailsView;

/// One dispatched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    /// Monotonic per viewer. Only used to correlate log lines.
    pub request_id: u64,
    pub stock: &'static StockOption,
}

impl FetchTicket {
    pub fn ticker(&self) -> &'static str {
        self.stock.ticker
    }

    /// Perform the request. Blocks until the transport resolves.
    pub fn run(&self, client: &dyn AnalysisClient) -> Result<AnalysisResult, AnalysisError> {
        info!(
            request_id = self.request_id,
            ticker = self.stock.ticker,
            endpoint = client.endpoint(),
            "dispatching analysis request"
        );
        client.analyze(self.stock.ticker)
    }
}

#[derive(Debug, Default)]
pub struct ViewerState {
    selection: Option<&'static StockOption>,
    loading: bool,
    result: Option<AnalysisResult>,
    next_request_id: u64,
    in_flight: usize,
    last_updated: Option<DateTime<Local>>,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a catalog entry and start a fetch for it.
    ///
    /// Sets the selection and raises the loading flag. The caller must run
    /// the ticket and report back through [`apply_outcome`](Self::apply_outcome).
    pub fn select_stock(&mut self, stock: &'static StockOption) -> FetchTicket {
        self.selection = Some(stock);
        self.loading = true;
        self.in_flight += 1;
        self.next_request_id += 1;
        FetchTicket {
            request_id: self.next_request_id,
            stock,
        }
    }

    /// Record a resolved request.
    ///
    /// Success replaces the result wholesale. Every failure kind is logged and
    /// leaves the result untouched. The loading flag drops in all cases.
    pub fn apply_outcome(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<AnalysisResult, AnalysisError>,
    ) {
        match outcome {
            Ok(result) => {
                info!(
                    request_id = ticket.request_id,
                    ticker = ticket.ticker(),
                    metrics = result.metrics.len(),
                    "analysis received"
                );
                self.result = Some(result);
                self.last_updated = Some(Local::now());
            }
            Err(AnalysisError::Backend(msg)) => {
                error!(
                    request_id = ticket.request_id,
                    ticker = ticket.ticker(),
                    "Error in backend: {msg}"
                );
            }
            Err(e) => {
                error!(
                    request_id = ticket.request_id,
                    ticker = ticket.ticker(),
                    kind = e.kind(),
                    "Error fetching stock data: {e}"
                );
            }
        }
        self.in_flight = self.in_flight.saturating_sub(1);
        self.loading = false;
    }

    /// Select, fetch and apply in one blocking call.
    pub fn select_and_fetch(&mut self, stock: &'static StockOption, client: &dyn AnalysisClient) {
        let ticket = self.select_stock(stock);
        let outcome = ticket.run(client);
        self.apply_outcome(&ticket, outcome);
    }

    pub fn selection(&self) -> Option<&'static StockOption> {
        self.selection
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Requests dispatched and not yet resolved.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// When the current result arrived.
    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    pub fn details(&self) -> Option<DetailsView> {
        DetailsView::build(self.selection, self.result.as_ref())
    }
}
