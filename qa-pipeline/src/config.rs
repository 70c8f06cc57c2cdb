use std::fmt;
use std::str::FromStr;

use common::utils::config::AppConfig;
use serde::{Deserialize, Serialize};

/// Which implementation backs the opaque QA capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QaBackend {
    /// Self-hosted extractive QA inference endpoint, called over HTTP.
    #[default]
    Remote,
    /// Deterministic in-process token-overlap scorer. No model, no network;
    /// intended for tests and offline operation.
    Lexical,
}

impl FromStr for QaBackend {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "lexical" => Ok(Self::Lexical),
            other => Err(format!(
                "unknown QA backend '{other}'. Expected 'remote' or 'lexical'."
            )),
        }
    }
}

impl fmt::Display for QaBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QaBackend::Remote => "remote",
            QaBackend::Lexical => "lexical",
        };
        f.write_str(label)
    }
}

/// Tunable parameters that govern answer extraction and selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaTuning {
    /// Ranked candidates requested across the whole context collection.
    pub top_k: usize,
    /// Hard cap on the extracted answer span, in characters.
    pub max_answer_len: usize,
    /// Candidates scoring below this are suppressed rather than surfaced.
    pub score_threshold: f32,
}

impl Default for QaTuning {
    fn default() -> Self {
        Self {
            top_k: 3,
            max_answer_len: 200,
            score_threshold: 0.10,
        }
    }
}

impl QaTuning {
    /// Applies per-deployment overrides on top of the defaults.
    pub fn from_config(config: &AppConfig) -> Self {
        let defaults = Self::default();
        Self {
            top_k: config.answer_top_k.unwrap_or(defaults.top_k),
            max_answer_len: config.answer_max_len.unwrap_or(defaults.max_answer_len),
            score_threshold: config
                .answer_score_threshold
                .unwrap_or(defaults.score_threshold),
        }
    }
}
