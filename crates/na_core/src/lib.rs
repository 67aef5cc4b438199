pub mod error;
pub mod models;
pub mod storage;
pub mod types;

pub use error::Error;
pub use models::PreferenceModel;
pub use storage::AnalysisStorage;
pub use types::{
    AnalysisRecord, AnalysisResult, AnalysisSummary, Article, ConfidenceTier, PreferenceAnalysis,
};

pub type Result<T> = std::result::Result<T, Error>;
