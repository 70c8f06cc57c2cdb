use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    #[serde(default = "default_corpus_path")]
    pub corpus_path: String,
    /// Contexts handed to the QA capability are capped at this many
    /// characters. Truncation is by character count, not word boundaries.
    #[serde(default = "default_max_context_chars")]
    pub max_context_chars: usize,
    /// "remote" or "lexical"; parsed by the pipeline crate.
    #[serde(default)]
    pub qa_backend: Option<String>,
    pub qa_endpoint: Option<String>,
    #[serde(default = "default_qa_timeout_secs")]
    pub qa_timeout_secs: u64,
    pub answer_top_k: Option<usize>,
    pub answer_max_len: Option<usize>,
    pub answer_score_threshold: Option<f32>,
}

fn default_http_port() -> u16 {
    5000
}

fn default_corpus_path() -> String {
    "./data/medquad.json".to_string()
}

fn default_max_context_chars() -> usize {
    512
}

fn default_qa_timeout_secs() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http_port: default_http_port(),
            corpus_path: default_corpus_path(),
            max_context_chars: default_max_context_chars(),
            qa_backend: None,
            qa_endpoint: None,
            qa_timeout_secs: default_qa_timeout_secs(),
            answer_top_k: None,
            answer_max_len: None,
            answer_score_threshold: None,
        }
    }
}

pub fn get_config() -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::default())
        .build()?;

    config.try_deserialize()
}
