use std::time::Duration;

use common::error::AppError;
use common::utils::config::AppConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::{QaBackend, QaTuning};

mod lexical;

/// Best answer span found in one context, with the capability's confidence.
/// Produced per query and discarded after selection.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerCandidate {
    pub context_index: usize,
    pub answer_span: String,
    pub score: f32,
}

/// The opaque extractive QA capability: given a question and candidate
/// passages, it returns ranked answer spans with confidence scores.
pub struct QaProvider {
    inner: QaInner,
}

enum QaInner {
    Remote {
        client: reqwest::Client,
        endpoint: String,
    },
    Lexical,
}

#[derive(Serialize)]
struct RemoteQaRequest<'a> {
    question: &'a str,
    contexts: &'a [String],
    top_k: usize,
    max_answer_len: usize,
}

#[derive(Deserialize)]
struct RemoteQaAnswer {
    answer: String,
    score: f32,
    context: usize,
}

impl QaProvider {
    pub fn backend_label(&self) -> &'static str {
        match self.inner {
            QaInner::Remote { .. } => "remote",
            QaInner::Lexical => "lexical",
        }
    }

    /// Builds the provider selected by configuration. Initialization errors
    /// are returned to the caller, which degrades to an inert "no QA" state
    /// rather than crashing.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let backend = match config.qa_backend.as_deref() {
            Some(value) => value
                .parse::<QaBackend>()
                .map_err(AppError::Validation)?,
            None => QaBackend::default(),
        };

        match backend {
            QaBackend::Lexical => Ok(Self::new_lexical()),
            QaBackend::Remote => {
                let endpoint = config.qa_endpoint.clone().ok_or_else(|| {
                    AppError::Validation(
                        "QA_ENDPOINT must be set for the remote backend".to_string(),
                    )
                })?;
                Self::new_remote(endpoint, Duration::from_secs(config.qa_timeout_secs))
            }
        }
    }

    pub fn new_remote(endpoint: String, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            inner: QaInner::Remote { client, endpoint },
        })
    }

    pub fn new_lexical() -> Self {
        Self {
            inner: QaInner::Lexical,
        }
    }

    /// One batched call: the question against every context at once,
    /// returning up to `tuning.top_k` ranked candidates across the whole
    /// collection. The capability's own ordering is preserved.
    pub async fn ask(
        &self,
        question: &str,
        contexts: &[String],
        tuning: &QaTuning,
    ) -> Result<Vec<AnswerCandidate>, AppError> {
        match &self.inner {
            QaInner::Remote { client, endpoint } => {
                let request = RemoteQaRequest {
                    question,
                    contexts,
                    top_k: tuning.top_k,
                    max_answer_len: tuning.max_answer_len,
                };

                let answers: Vec<RemoteQaAnswer> = client
                    .post(endpoint)
                    .json(&request)
                    .send()
                    .await?
                    .error_for_status()?
                    .json()
                    .await?;

                Ok(answers
                    .into_iter()
                    .map(|answer| AnswerCandidate {
                        context_index: answer.context,
                        answer_span: answer.answer,
                        score: answer.score,
                    })
                    .collect())
            }
            QaInner::Lexical => Ok(lexical::answers(question, contexts, tuning)),
        }
    }
}

/// Runs the extraction stage for one question. An absent capability or an
/// empty corpus short-circuits to no answer without any call; a failed call
/// is logged and also resolves to no answer. Nothing propagates upward.
pub async fn extract_answer(
    qa: Option<&QaProvider>,
    question: &str,
    contexts: &[String],
    tuning: &QaTuning,
) -> Option<String> {
    let qa = qa?;
    if contexts.is_empty() {
        return None;
    }

    let candidates = match qa.ask(question, contexts, tuning).await {
        Ok(candidates) => candidates,
        Err(e) => {
            error!("QA request failed: {e}");
            return None;
        }
    };

    select_best(candidates, tuning.score_threshold).map(|best| best.answer_span)
}

// Maximum score wins; ties keep the earliest candidate in the returned
// order. The capability's ranking is authoritative and never re-sorted.
fn select_best(candidates: Vec<AnswerCandidate>, threshold: f32) -> Option<AnswerCandidate> {
    let best = candidates.into_iter().reduce(|best, candidate| {
        if candidate.score > best.score {
            candidate
        } else {
            best
        }
    })?;

    if best.score < threshold {
        debug!(
            score = best.score,
            threshold, "Best candidate below threshold, suppressing answer"
        );
        return None;
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(context_index: usize, span: &str, score: f32) -> AnswerCandidate {
        AnswerCandidate {
            context_index,
            answer_span: span.to_string(),
            score,
        }
    }

    #[test]
    fn selection_picks_the_maximum_score() {
        let picked = select_best(
            vec![
                candidate(0, "weak", 0.2),
                candidate(1, "strong", 0.9),
                candidate(2, "middling", 0.5),
            ],
            0.10,
        )
        .expect("candidate above threshold");

        assert_eq!(picked.answer_span, "strong");
    }

    #[test]
    fn score_ties_keep_the_first_candidate() {
        let picked = select_best(
            vec![candidate(3, "first", 0.7), candidate(1, "second", 0.7)],
            0.10,
        )
        .expect("candidate above threshold");

        assert_eq!(picked.answer_span, "first");
        assert_eq!(picked.context_index, 3);
    }

    #[test]
    fn low_confidence_answers_are_suppressed() {
        assert_eq!(select_best(vec![candidate(0, "noise", 0.09)], 0.10), None);
        assert!(select_best(vec![candidate(0, "signal", 0.10)], 0.10).is_some());
    }

    #[test]
    fn no_candidates_means_no_answer() {
        assert_eq!(select_best(Vec::new(), 0.10), None);
    }

    #[tokio::test]
    async fn absent_capability_short_circuits() {
        let contexts = vec!["Some context.".to_string()];
        let answer = extract_answer(None, "a question", &contexts, &QaTuning::default()).await;
        assert_eq!(answer, None);
    }

    #[tokio::test]
    async fn empty_context_collection_short_circuits() {
        let qa = QaProvider::new_lexical();
        let answer = extract_answer(Some(&qa), "a question", &[], &QaTuning::default()).await;
        assert_eq!(answer, None);
    }

    #[tokio::test]
    async fn lexical_backend_extracts_a_matching_span() {
        let qa = QaProvider::new_lexical();
        let contexts = vec![
            "What is anemia? Anemia is a shortage of red blood cells.".to_string(),
            "What is glaucoma? Glaucoma damages the optic nerve over time.".to_string(),
        ];

        let answer = extract_answer(
            Some(&qa),
            "what is glaucoma",
            &contexts,
            &QaTuning::default(),
        )
        .await
        .expect("answer");

        assert!(answer.to_lowercase().contains("glaucoma"));
    }

    #[tokio::test]
    async fn unreachable_remote_endpoint_degrades_to_no_answer() {
        let qa = QaProvider::new_remote(
            // Reserved TEST-NET-1 address; nothing listens there.
            "http://192.0.2.1:9/qa".to_string(),
            Duration::from_millis(50),
        )
        .expect("client");
        let contexts = vec!["What is anemia? A shortage of red blood cells.".to_string()];

        let answer =
            extract_answer(Some(&qa), "what is anemia", &contexts, &QaTuning::default()).await;
        assert_eq!(answer, None);
    }
}
