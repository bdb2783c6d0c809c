//! Request and response bodies of the analysis endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::AnalysisError;

/// Metric name → value, in the order the backend wrote them.
pub type Metrics = serde_json::Map<String, Value>;

/// Body of `POST /api/stock-analysis`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub ticker: String,
}

impl AnalysisRequest {
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
        }
    }
}

/// Parsed response body. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "serde_json::Map::is_empty"
    )]
    pub metrics: Metrics,

    #[serde(
        rename = "aiAnalysis",
        default,
        deserialize_with = "truthy_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub ai_analysis: Option<String>,

    #[serde(
        default,
        deserialize_with = "truthy_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Metrics, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Metrics>::deserialize(deserializer)?.unwrap_or_default())
}

/// Any JSON value; falsy ones (`null`, `false`, `0`, `""`) become `None`,
/// the rest their text form.
fn truthy_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let falsy = match &value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    };
    Ok((!falsy).then(|| metric_text(&value)))
}

impl AnalysisResult {
    /// Parse a success-status response body.
    ///
    /// The body must be a JSON object. Field-level shape problems (e.g. a
    /// non-object `metrics`) are reported as [`AnalysisError::InvalidBody`].
    pub fn from_body(body: &[u8]) -> Result<Self, AnalysisError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| AnalysisError::InvalidBody(e.to_string()))?;
        if !value.is_object() {
            return Err(AnalysisError::InvalidBody(format!(
                "expected a JSON object, got {}",
                json_kind(&value)
            )));
        }
        serde_json::from_value(value).map_err(|e| AnalysisError::InvalidBody(e.to_string()))
    }

    /// The backend's error message, if the body reports one.
    ///
    /// An empty `error` string does not count as an error.
    pub fn backend_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    /// Metric entries as `(name, text)` pairs, in backend order.
    pub fn metric_entries(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.metrics
            .iter()
            .map(|(k, v)| (k.as_str(), metric_text(v)))
    }
}

/// Text form of a metric value.
///
/// Strings render verbatim, `null` renders empty, numbers render the way a
/// browser prints them (`12.0` is `12`), everything else uses its compact
/// JSON form.
pub fn metric_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Number(n) => number_text(n),
        other => other.to_string(),
    }
}

/// Largest integer an `f64` holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(v) if n.is_f64() && v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER => {
            format!("{}", v as i64)
        }
        _ => n.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
