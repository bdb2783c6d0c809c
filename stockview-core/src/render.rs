//! Render contract: what the details section shows for a given state.
//!
//! Both front-ends draw from [`DetailsView`], so the wording lives here once.

use std::fmt::Write as _;

use crate::analysis::AnalysisResult;
use crate::catalog::StockOption;

pub const HEADING: &str = "Construction Stock Analyzer";
pub const LOADING: &str = "Loading...";
pub const METRICS_HEADING: &str = "Metrics:";
pub const ANALYSIS_HEADING: &str = "AI Analysis:";
pub const NO_ANALYSIS: &str = "No analysis available.";

/// Text content of the details block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsView {
    /// `<name> (<ticker>)`
    pub title: String,
    /// One `key: value` line per metric, backend order.
    pub metrics: Vec<String>,
    pub analysis: String,
}

impl DetailsView {
    /// Build the view. The block exists only when there is both a selection
    /// and a result; the title always follows the selection, even when the
    /// result belongs to an earlier one.
    pub fn build(
        selection: Option<&StockOption>,
        result: Option<&AnalysisResult>,
    ) -> Option<Self> {
        let (stock, result) = (selection?, result?);

        let metrics = result
            .metric_entries()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect();

        let analysis = match result.ai_analysis.as_deref() {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => NO_ANALYSIS.to_string(),
        };

        Some(Self {
            title: stock.label(),
            metrics,
            analysis,
        })
    }

    /// Plain-text rendering for non-interactive output.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out);
        let _ = writeln!(out, "{METRICS_HEADING}");
        for line in &self.metrics {
            let _ = writeln!(out, "  - {line}");
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{ANALYSIS_HEADING}");
        let _ = writeln!(out, "{}", self.analysis);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_by_ticker;
    use proptest::prelude::*;
    use serde_json::Value;

    fn result_from(body: &str) -> AnalysisResult {
        AnalysisResult::from_body(body.as_bytes()).unwrap()
    }

    #[test]
    fn nothing_without_selection_or_result() {
        let ibp = find_by_ticker("IBP").unwrap();
        let result = result_from("{}");
        assert!(DetailsView::build(None, Some(&result)).is_none());
        assert!(DetailsView::build(Some(ibp), None).is_none());
    }

    #[test]
    fn renders_metrics_and_analysis() {
        let ibp = find_by_ticker("IBP").unwrap();
        let result = result_from(r#"{"metrics":{"P/E":"15.2"},"aiAnalysis":"Positive outlook"}"#);
        let view = DetailsView::build(Some(ibp), Some(&result)).unwrap();
        assert_eq!(view.title, "Installed Building Products, Inc. (IBP)");
        assert_eq!(view.metrics, vec!["P/E: 15.2".to_string()]);
        assert_eq!(view.analysis, "Positive outlook");
    }

    #[test]
    fn missing_analysis_uses_fallback() {
        let ibp = find_by_ticker("IBP").unwrap();
        let view = DetailsView::build(Some(ibp), Some(&result_from(r#"{"metrics":{}}"#))).unwrap();
        assert_eq!(view.analysis, "No analysis available.");

        let view =
            DetailsView::build(Some(ibp), Some(&result_from(r#"{"aiAnalysis":""}"#))).unwrap();
        assert_eq!(view.analysis, NO_ANALYSIS);
    }

    #[test]
    fn missing_metrics_renders_empty_list() {
        let nvr = find_by_ticker("NVR").unwrap();
        let view =
            DetailsView::build(Some(nvr), Some(&result_from(r#"{"aiAnalysis":"x"}"#))).unwrap();
        assert!(view.metrics.is_empty());
    }

    #[test]
    fn numeric_metrics_render_as_text() {
        let tol = find_by_ticker("TOL").unwrap();
        let result = result_from(r#"{"metrics":{"P/E Ratio":9.87,"Market Cap":"N/A"}}"#);
        let view = DetailsView::build(Some(tol), Some(&result)).unwrap();
        assert_eq!(view.metrics, vec!["P/E Ratio: 9.87", "Market Cap: N/A"]);
    }

    #[test]
    fn whole_number_metric_has_no_trailing_zero() {
        let kbh = find_by_ticker("KBH").unwrap();
        let result = result_from(r#"{"metrics":{"P/E Ratio":12.0,"Shares":100,"Flag":true}}"#);
        let view = DetailsView::build(Some(kbh), Some(&result)).unwrap();
        assert_eq!(view.metrics, vec!["P/E Ratio: 12", "Shares: 100", "Flag: true"]);
    }

    #[test]
    fn plain_text_layout() {
        let view = DetailsView {
            title: "KB Home (KBH)".into(),
            metrics: vec!["P/E: 15.2".into()],
            analysis: "Positive outlook".into(),
        };
        assert_eq!(
            view.to_plain_text(),
            "KB Home (KBH)\n\nMetrics:\n  - P/E: 15.2\n\nAI Analysis:\nPositive outlook\n"
        );
    }

    proptest! {
        #[test]
        fn one_line_per_metric_in_order(
            entries in proptest::collection::vec(("[A-Za-z %/]{1,12}", "[ -~]{0,16}"), 0..12)
        ) {
            let mut metrics = serde_json::Map::new();
            for (k, v) in &entries {
                metrics.insert(k.clone(), Value::String(v.clone()));
            }
            let expected: Vec<String> = metrics
                .iter()
                .map(|(k, v)| format!("{k}: {}", v.as_str().unwrap_or_default()))
                .collect();

            let result = AnalysisResult { metrics, ..Default::default() };
            let first = &crate::catalog::CATALOG[0];
            let view = DetailsView::build(Some(first), Some(&result)).unwrap();
            prop_assert_eq!(view.metrics, expected);
        }
    }
}
