use std::sync::Arc;

use common::{corpus::Corpus, utils::config::AppConfig};
use qa_pipeline::{QaProvider, QaTuning};

/// Everything a request handler needs, wired once at startup. The corpus
/// and provider are read-only after construction and shared across
/// concurrent requests without locking.
#[derive(Clone)]
pub struct ApiState {
    pub corpus: Arc<Corpus>,
    pub qa: Option<Arc<QaProvider>>,
    pub tuning: QaTuning,
    pub config: AppConfig,
}

impl ApiState {
    pub fn new(config: &AppConfig, corpus: Arc<Corpus>, qa: Option<Arc<QaProvider>>) -> Self {
        Self {
            corpus,
            qa,
            tuning: QaTuning::from_config(config),
            config: config.clone(),
        }
    }
}
