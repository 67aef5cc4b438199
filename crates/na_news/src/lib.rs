use async_trait::async_trait;
use na_core::{Article, Result};

pub mod newsapi;

pub use newsapi::NewsApiSource;

/// A provider of news articles.
#[async_trait]
pub trait NewsSource: Send + Sync {
    fn name(&self) -> &str;

    /// Fetch up to `count` recent articles in one batched call.
    async fn fetch_random(&self, count: usize) -> Result<Vec<Article>>;
}
