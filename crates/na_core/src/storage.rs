use async_trait::async_trait;

use crate::types::{AnalysisRecord, Article};
use crate::Result;

#[async_trait]
pub trait AnalysisStorage: Send + Sync {
    /// Insert one analysis record. Each insert is independent; a failure must
    /// not affect records written before or after it.
    async fn create_analysis(
        &self,
        article: &Article,
        confidence: f32,
        preference: &str,
    ) -> Result<AnalysisRecord>;

    /// Most recently created records, newest first.
    async fn recent(&self, limit: usize) -> Result<Vec<AnalysisRecord>>;

    /// Release the backend's resources. Called once at process shutdown.
    async fn close(&self) -> Result<()>;
}
