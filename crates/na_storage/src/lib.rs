use std::sync::Arc;

use na_core::{AnalysisStorage, Error, Result};

pub mod backends;

pub use backends::memory::MemoryStorage;
pub use backends::sqlite::SqliteStorage;

/// Build a storage backend from a connection URL.
///
/// `sqlite:` URLs open (and create if missing) a SQLite database;
/// `memory:` keeps records in process memory only.
pub async fn create_storage(url: &str) -> Result<Arc<dyn AnalysisStorage>> {
    if url.starts_with("sqlite:") {
        Ok(Arc::new(SqliteStorage::connect(url).await?))
    } else if url.starts_with("memory:") {
        Ok(Arc::new(MemoryStorage::new()))
    } else {
        Err(Error::Storage(format!(
            "Unsupported storage URL '{}'. Expected sqlite: or memory:",
            url
        )))
    }
}
