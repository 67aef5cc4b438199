use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

use na_core::{AnalysisResult, AnalysisSummary, PreferenceAnalysis};

use crate::AppState;

/// Articles analyzed per pipeline pass.
const ARTICLE_BATCH: usize = 3;

const TITLE_PREVIEW_CHARS: usize = 60;

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "News Analysis Agent is running!" }))
}

/// One full pipeline pass: fetch, score, persist, summarize.
///
/// Every external failure degrades to a default value; only an empty fetch
/// is surfaced, and even that as a 200 with an error field.
pub async fn analyze_news(State(state): State<Arc<AppState>>) -> Response {
    let preference = state.user_preference.clone();
    info!("🔍 Analyzing news for user preference: {}", preference);

    let articles = match state.news.fetch_random(ARTICLE_BATCH).await {
        Ok(articles) => articles,
        Err(e) => {
            error!("❌ Error fetching news: {}", e);
            Vec::new()
        }
    };

    if articles.is_empty() {
        return Json(json!({ "error": "No articles found" })).into_response();
    }

    info!("✅ Found {} articles", articles.len());

    let mut analysis_results = Vec::with_capacity(articles.len());
    for (i, article) in articles.iter().enumerate() {
        info!("--- Article {} --", i + 1);
        info!("📰 Title: {}...", title_preview(&article.title));

        let analysis = match state.model.score(article, &preference).await {
            Ok(analysis) => analysis,
            Err(e) => {
                error!("❌ Error analyzing with {}: {}", state.model.name(), e);
                PreferenceAnalysis::failure(&e.to_string())
            }
        };

        info!("🤖 AI Confidence: {}%", analysis.confidence_score);
        info!("📝 {}", analysis.tier.label());
        info!("💡 Reason: {}", analysis.reason);
        info!("🔗 URL: {}", article.url);

        analysis_results.push(AnalysisResult {
            news_title: article.title.clone(),
            user_preference: preference.clone(),
            confidence_score: analysis.confidence_score,
            why_this_confidence: analysis.reason,
        });

        // A failed write is logged and skipped; the batch continues and the
        // result above is still reported.
        if let Err(e) = state
            .storage
            .create_analysis(article, analysis.confidence_score, &preference)
            .await
        {
            error!("❌ Database error: {}", e);
        }
    }

    let summary = AnalysisSummary {
        total_articles: articles.len(),
        user_preference: preference,
        analysis_results,
    };
    log_summary(&summary);

    Json(summary).into_response()
}

fn title_preview(title: &str) -> String {
    title.chars().take(TITLE_PREVIEW_CHARS).collect()
}

fn log_summary(summary: &AnalysisSummary) {
    info!("{}", "=".repeat(80));
    info!("📊 ANALYSIS SUMMARY");
    info!("{}", "=".repeat(80));
    for (i, result) in summary.analysis_results.iter().enumerate() {
        info!("Article {}:", i + 1);
        info!("  Title: {}", result.news_title);
        info!("  User Preference: {}", result.user_preference);
        info!("  Confidence: {}%", result.confidence_score);
        info!("  Reason: {}", result.why_this_confidence);
        info!("{}", "-".repeat(40));
    }
}
