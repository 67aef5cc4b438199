use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::str::FromStr;

use na_core::{AnalysisRecord, AnalysisStorage, Article, Error, Result};

const MIGRATIONS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS news_analyses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        url TEXT NOT NULL,
        confidence REAL NOT NULL,
        preference TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    // Add future migrations here
];

/// SQLite-backed analysis store. Connections are pooled; statements acquire
/// one per call, so concurrent pipeline runs never share a handle.
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| Error::Database(format!("Invalid database URL: {}", e)))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|e| Error::Database(format!("Failed to connect to database: {}", e)))?;

        for (i, migration) in MIGRATIONS.iter().enumerate() {
            sqlx::query(migration)
                .execute(&pool)
                .await
                .map_err(|e| Error::Database(format!("Failed to run migration {}: {}", i, e)))?;
        }

        Ok(Self { pool })
    }
}

#[async_trait]
impl AnalysisStorage for SqliteStorage {
    async fn create_analysis(
        &self,
        article: &Article,
        confidence: f32,
        preference: &str,
    ) -> Result<AnalysisRecord> {
        let created_at = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO news_analyses
            (title, description, url, confidence, preference, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&article.title)
        .bind(&article.description)
        .bind(&article.url)
        .bind(confidence as f64)
        .bind(preference)
        .bind(created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| Error::Database(format!("Failed to store analysis: {}", e)))?;

        Ok(AnalysisRecord {
            id: result.last_insert_rowid(),
            title: article.title.clone(),
            description: article.description.clone(),
            url: article.url.clone(),
            confidence,
            preference: preference.to_string(),
            created_at,
        })
    }

    async fn recent(&self, limit: usize) -> Result<Vec<AnalysisRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, url, confidence, preference, created_at
            FROM news_analyses
            ORDER BY created_at DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Error::Database(format!("Failed to load analyses: {}", e)))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            records.push(AnalysisRecord {
                id: row.get("id"),
                title: row.get("title"),
                description: row.get("description"),
                url: row.get("url"),
                confidence: row.get::<f64, _>("confidence") as f32,
                preference: row.get("preference"),
                created_at: chrono::DateTime::parse_from_rfc3339(
                    &row.get::<String, _>("created_at"),
                )
                .map_err(|e| Error::Database(format!("Failed to parse timestamp: {}", e)))?
                .with_timezone(&chrono::Utc),
            });
        }

        Ok(records)
    }

    async fn close(&self) -> Result<()> {
        self.pool.close().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            description: "desc".to_string(),
            url: format!("https://example.com/{}", title),
            content: String::new(),
        }
    }

    #[tokio::test]
    async fn insert_and_read_back() {
        let storage = SqliteStorage::connect("sqlite::memory:").await.unwrap();

        let record = storage
            .create_analysis(&article("first"), 85.0, "health")
            .await
            .unwrap();
        assert!(record.id >= 1);
        assert_eq!(record.confidence, 85.0);
        assert_eq!(record.preference, "health");

        storage
            .create_analysis(&article("second"), 30.0, "health")
            .await
            .unwrap();

        let records = storage.recent(10).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "second");
        assert_eq!(records[1].title, "first");
    }

    #[tokio::test]
    async fn inserts_are_independent() {
        let storage = SqliteStorage::connect("sqlite::memory:").await.unwrap();

        for i in 0..3 {
            storage
                .create_analysis(&article(&format!("a{}", i)), i as f32, "tech")
                .await
                .unwrap();
        }

        assert_eq!(storage.recent(2).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn persists_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}", dir.path().join("news.db").display());

        let storage = SqliteStorage::connect(&url).await.unwrap();
        storage
            .create_analysis(&article("durable"), 50.0, "science")
            .await
            .unwrap();
        storage.close().await.unwrap();

        let reopened = SqliteStorage::connect(&url).await.unwrap();
        let records = reopened.recent(10).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "durable");
    }
}
