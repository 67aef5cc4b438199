use async_trait::async_trait;

use na_core::{Article, PreferenceAnalysis, PreferenceModel, Result};

/// Offline model for development and tests: scores by the share of
/// preference terms found in the article's title and description.
#[derive(Debug, Default)]
pub struct DummyModel;

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PreferenceModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn score(&self, article: &Article, preference: &str) -> Result<PreferenceAnalysis> {
        let haystack = format!("{} {}", article.title, article.description).to_lowercase();
        let terms: Vec<String> = preference
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        if terms.is_empty() {
            return Ok(PreferenceAnalysis::new(
                0.0,
                "No preference terms to match".to_string(),
            ));
        }

        let hits = terms.iter().filter(|term| haystack.contains(*term)).count();
        let confidence = (hits * 100 / terms.len()) as f32;

        Ok(PreferenceAnalysis::new(
            confidence,
            format!("Matched {} of {} preference terms", hits, terms.len()),
        ))
    }
}
