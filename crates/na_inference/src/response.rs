use once_cell::sync::Lazy;
use regex::Regex;

use na_core::PreferenceAnalysis;

const DEFAULT_REASON: &str = "No reason provided";

static CONFIDENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"CONFIDENCE:\s*(\d+)").unwrap());
// (?s) so the reason may span multiple lines through end of output.
static REASON_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)REASON:\s*(.+)").unwrap());

/// Parse a model answer of the form `CONFIDENCE: <int>` / `REASON: <text>`.
///
/// A missing or unparseable confidence yields 0; a missing reason yields the
/// fixed default. The confidence is not range-checked: the prompt asks for
/// 0-100 but whatever integer the model produced is passed through.
pub fn parse_analysis(text: &str) -> PreferenceAnalysis {
    let confidence = CONFIDENCE_RE
        .captures(text)
        .and_then(|caps| caps[1].parse::<f32>().ok())
        .unwrap_or(0.0);

    let reason = REASON_RE
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_else(|| DEFAULT_REASON.to_string());

    PreferenceAnalysis::new(confidence, reason)
}
