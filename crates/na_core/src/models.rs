use async_trait::async_trait;
use std::fmt;

use crate::types::{Article, PreferenceAnalysis};
use crate::Result;

/// A model that estimates how well an article matches a user preference.
///
/// Implementations return `Err` on any transport or parse failure; callers
/// decide at the response boundary whether to flatten that into the
/// zero-confidence sentinel.
#[async_trait]
pub trait PreferenceModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Score one article against the preference string.
    async fn score(&self, article: &Article, preference: &str) -> Result<PreferenceAnalysis>;
}
