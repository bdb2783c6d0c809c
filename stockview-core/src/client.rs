//! Backend analysis client.
//!
//! The [`AnalysisClient`] trait abstracts over the transport so the viewer can
//! be driven by a scripted client in tests. [`HttpAnalysisClient`] is the real
//! implementation: one blocking `POST` per call, no retries, no timeout.

use std::time::Duration;

use tracing::debug;

use crate::analysis::{AnalysisRequest, AnalysisResult};
use crate::error::AnalysisError;

/// Default backend endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/stock-analysis";

/// Something that can turn a ticker into an analysis.
pub trait AnalysisClient: Send + Sync {
    /// Where requests go. Used for logging.
    fn endpoint(&self) -> &str;

    /// Request the analysis for `ticker`.
    ///
    /// A body carrying an `error` field comes back as
    /// [`AnalysisError::Backend`], never as `Ok`.
    fn analyze(&self, ticker: &str) -> Result<AnalysisResult, AnalysisError>;

    /// Like [`analyze`](Self::analyze), but return the body as the backend
    /// sent it once it has passed the same checks.
    ///
    /// Clients without a wire body serialize the parsed result.
    fn analyze_raw(&self, ticker: &str) -> Result<Vec<u8>, AnalysisError> {
        let result = self.analyze(ticker)?;
        serde_json::to_vec(&result).map_err(|e| AnalysisError::InvalidBody(e.to_string()))
    }
}

/// Parse a success body, turning a reported backend error into
/// [`AnalysisError::Backend`].
fn checked(body: &[u8]) -> Result<AnalysisResult, AnalysisError> {
    let result = AnalysisResult::from_body(body)?;
    if let Some(msg) = result.backend_error() {
        return Err(AnalysisError::Backend(msg.to_string()));
    }
    Ok(result)
}

/// Blocking reqwest client for the analysis endpoint.
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpAnalysisClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, AnalysisError> {
        // The request waits as long as the transport does.
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| AnalysisError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Client pointed at [`DEFAULT_ENDPOINT`].
    pub fn local() -> Result<Self, AnalysisError> {
        Self::new(DEFAULT_ENDPOINT)
    }

    /// Send the request and return the raw success body.
    ///
    /// Non-2xx statuses and transport failures are errors; the body is not
    /// inspected.
    pub fn fetch_raw(&self, ticker: &str) -> Result<Vec<u8>, AnalysisError> {
        debug!(endpoint = %self.endpoint, ticker, "POST analysis request");

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&AnalysisRequest::new(ticker))
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AnalysisError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        Ok(resp.bytes()?.to_vec())
    }
}

impl AnalysisClient for HttpAnalysisClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn analyze(&self, ticker: &str) -> Result<AnalysisResult, AnalysisError> {
        checked(&self.fetch_raw(ticker)?)
    }

    fn analyze_raw(&self, ticker: &str) -> Result<Vec<u8>, AnalysisError> {
        let body = self.fetch_raw(ticker)?;
        checked(&body)?;
        Ok(body)
    }
}
