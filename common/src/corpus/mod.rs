use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::AppError;

pub mod extract;

/// One persisted medical Q&A record, produced by the MedQuAD extraction
/// tool and loaded once at process start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusEntry {
    pub focus: String,
    pub question: String,
    pub answer: String,
}

/// The static search space for answer extraction. Entries and their derived
/// contexts are built once and never mutated, so the corpus is shared across
/// request handlers without locking.
#[derive(Debug, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
    contexts: Vec<String>,
}

impl Corpus {
    /// Loads the corpus from a JSON array on disk. A missing, unreadable or
    /// malformed file is logged and yields an empty corpus; downstream code
    /// treats that as "no corpus available" rather than an error.
    pub fn load(path: impl AsRef<Path>, max_context_chars: usize) -> Self {
        let path = path.as_ref();
        match Self::read(path, max_context_chars) {
            Ok(corpus) => {
                info!(
                    entries = corpus.len(),
                    path = %path.display(),
                    "Corpus loaded"
                );
                corpus
            }
            Err(e) => {
                error!(path = %path.display(), "Corpus loading failed: {e}");
                Self::default()
            }
        }
    }

    fn read(path: &Path, max_context_chars: usize) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        let entries: Vec<CorpusEntry> = serde_json::from_str(&raw)?;
        Ok(Self::from_entries(entries, max_context_chars))
    }

    /// Builds the corpus in memory. Records missing a question or an answer
    /// are skipped; every kept entry yields exactly one context, in source
    /// order.
    pub fn from_entries(entries: Vec<CorpusEntry>, max_context_chars: usize) -> Self {
        let (entries, contexts) = entries
            .into_iter()
            .filter(|entry| !entry.question.is_empty() && !entry.answer.is_empty())
            .map(|entry| {
                let context = truncate_chars(
                    &format!("{} {}", entry.question, entry.answer),
                    max_context_chars,
                );
                (entry, context)
            })
            .unzip();

        Self { entries, contexts }
    }

    /// Candidate passages for extractive QA, one per entry.
    pub fn contexts(&self) -> &[String] {
        &self.contexts
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Character-count truncation. It can split text mid-word or mid-sentence;
/// the cap is a hard character budget, not a tokenizer.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((boundary, _)) => text[..boundary].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn entry(question: &str, answer: &str) -> CorpusEntry {
        CorpusEntry {
            focus: "General".to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn contexts_are_question_then_answer_in_source_order() {
        let corpus = Corpus::from_entries(
            vec![entry("What is A?", "A is first."), entry("What is B?", "B is second.")],
            512,
        );

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.contexts()[0], "What is A? A is first.");
        assert_eq!(corpus.contexts()[1], "What is B? B is second.");
    }

    #[test]
    fn contexts_never_exceed_the_configured_cap() {
        let long_answer = "word ".repeat(400);
        let corpus = Corpus::from_entries(vec![entry("What is long?", &long_answer)], 512);

        assert_eq!(corpus.contexts().len(), 1);
        assert_eq!(corpus.contexts()[0].chars().count(), 512);
    }

    #[test]
    fn short_contexts_are_kept_whole() {
        let corpus = Corpus::from_entries(vec![entry("Q?", "A.")], 512);
        assert_eq!(corpus.contexts()[0], "Q? A.");
    }

    #[test]
    fn records_without_question_or_answer_are_skipped() {
        let corpus = Corpus::from_entries(
            vec![
                entry("", "Orphaned answer."),
                entry("Orphaned question?", ""),
                entry("Kept?", "Kept."),
            ],
            512,
        );

        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.entries()[0].question, "Kept?");
        assert_eq!(corpus.contexts()[0], "Kept? Kept.");
    }

    #[test]
    fn missing_file_yields_an_empty_corpus() {
        let corpus = Corpus::load("/nonexistent/path/medquad.json", 512);
        assert!(corpus.is_empty());
        assert!(corpus.contexts().is_empty());
    }

    #[test]
    fn malformed_json_yields_an_empty_corpus() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"{ not json").expect("write");

        let corpus = Corpus::load(file.path(), 512);
        assert!(corpus.is_empty());
    }

    #[test]
    fn valid_file_round_trips() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        let json = serde_json::to_string(&vec![entry("What is glaucoma?", "An eye disease.")])
            .expect("serialize");
        file.write_all(json.as_bytes()).expect("write");

        let corpus = Corpus::load(file.path(), 512);
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.contexts()[0], "What is glaucoma? An eye disease.");
    }
}
