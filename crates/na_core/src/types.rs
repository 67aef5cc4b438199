use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A news article as returned by the provider. Transient: never persisted
/// as-is. Missing provider fields are normalized to empty strings upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub url: String,
    pub content: String,
}

/// Coarse bucket derived from a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    /// Pure mapping: >= 70 is High, >= 40 is Medium, everything else Low.
    pub fn from_score(score: f32) -> Self {
        if score >= 70.0 {
            Self::High
        } else if score >= 40.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "HIGH CONFIDENCE - You'll love this news!",
            Self::Medium => "MEDIUM CONFIDENCE - Might be interesting",
            Self::Low => "LOW CONFIDENCE - Probably not your thing",
        }
    }
}

/// Per-article scoring outcome. Confidence is whatever the model reported;
/// a parse failure yields 0, but out-of-range values are passed through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceAnalysis {
    pub confidence_score: f32,
    pub tier: ConfidenceTier,
    pub reason: String,
}

impl PreferenceAnalysis {
    pub fn new(confidence_score: f32, reason: String) -> Self {
        Self {
            confidence_score,
            tier: ConfidenceTier::from_score(confidence_score),
            reason,
        }
    }

    /// Sentinel analysis for a failed model call. Only the pipeline boundary
    /// should flatten errors into this shape; the error itself goes to the log.
    pub fn failure(message: &str) -> Self {
        Self {
            confidence_score: 0.0,
            tier: ConfidenceTier::Low,
            reason: format!("Error occurred: {}", message),
        }
    }
}

/// Persisted row: article metadata plus the computed confidence and the
/// preference it was scored against. Insert-only; identity and timestamp are
/// assigned by the storage backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub url: String,
    pub confidence: f32,
    pub preference: String,
    pub created_at: DateTime<Utc>,
}

/// One entry of the response payload. Field names are part of the wire
/// contract and must not change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub news_title: String,
    pub user_preference: String,
    pub confidence_score: f32,
    pub why_this_confidence: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_articles: usize,
    pub user_preference: String,
    pub analysis_results: Vec<AnalysisResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(ConfidenceTier::from_score(100.0), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_score(70.0), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_score(69.9), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_score(40.0), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_score(39.9), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_score(0.0), ConfidenceTier::Low);
    }

    #[test]
    fn tier_is_pure() {
        for score in [0.0, 39.0, 40.0, 55.5, 70.0, 85.0, 150.0] {
            assert_eq!(
                ConfidenceTier::from_score(score),
                ConfidenceTier::from_score(score)
            );
        }
    }

    #[test]
    fn out_of_range_score_passes_through() {
        let analysis = PreferenceAnalysis::new(150.0, "very relevant".to_string());
        assert_eq!(analysis.confidence_score, 150.0);
        assert_eq!(analysis.tier, ConfidenceTier::High);
    }

    #[test]
    fn failure_sentinel_shape() {
        let analysis = PreferenceAnalysis::failure("connection refused");
        assert_eq!(analysis.confidence_score, 0.0);
        assert_eq!(analysis.tier, ConfidenceTier::Low);
        assert_eq!(analysis.reason, "Error occurred: connection refused");
    }

    #[test]
    fn summary_wire_field_names() {
        let summary = AnalysisSummary {
            total_articles: 1,
            user_preference: "health".to_string(),
            analysis_results: vec![AnalysisResult {
                news_title: "t".to_string(),
                user_preference: "health".to_string(),
                confidence_score: 85.0,
                why_this_confidence: "r".to_string(),
            }],
        };

        let value = serde_json::to_value(&summary).unwrap();
        assert!(value.get("total_articles").is_some());
        assert!(value.get("analysis_results").is_some());
        let entry = &value["analysis_results"][0];
        assert!(entry.get("news_title").is_some());
        assert!(entry.get("why_this_confidence").is_some());
    }
}
