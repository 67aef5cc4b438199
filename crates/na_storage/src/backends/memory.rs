use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use na_core::{AnalysisRecord, AnalysisStorage, Article, Result};

/// In-memory analysis store for development and tests. Records live only as
/// long as the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: RwLock<Vec<AnalysisRecord>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl AnalysisStorage for MemoryStorage {
    async fn create_analysis(
        &self,
        article: &Article,
        confidence: f32,
        preference: &str,
    ) -> Result<AnalysisRecord> {
        let mut records = self.records.write().await;
        let record = AnalysisRecord {
            id: records.len() as i64 + 1,
            title: article.title.clone(),
            description: article.description.clone(),
            url: article.url.clone(),
            confidence,
            preference: preference.to_string(),
            created_at: Utc::now(),
        };
        records.push(record.clone());
        Ok(record)
    }

    async fn recent(&self, limit: usize) -> Result<Vec<AnalysisRecord>> {
        let records = self.records.read().await;
        Ok(records.iter().rev().take(limit).cloned().collect())
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}
