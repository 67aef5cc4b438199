use std::sync::Arc;

use na_core::{AnalysisStorage, PreferenceModel};
use na_news::NewsSource;

/// Long-lived services shared by all requests. Everything is injected so
/// tests can substitute doubles for the external collaborators.
pub struct AppState {
    pub news: Arc<dyn NewsSource>,
    pub model: Arc<dyn PreferenceModel>,
    pub storage: Arc<dyn AnalysisStorage>,
    pub user_preference: String,
}
