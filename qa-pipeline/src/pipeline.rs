use common::corpus::Corpus;
use tracing::debug;

use crate::compose::{compose, EMPTY_QUESTION_PROMPT};
use crate::config::QaTuning;
use crate::provider::{extract_answer, QaProvider};
use crate::symptoms;

/// Runs one question through the whole pipeline: empty-input check, symptom
/// scan, answer extraction, composition. Every path terminates in a
/// response string; no stage retries and no error escapes this function.
pub async fn answer_question(
    corpus: &Corpus,
    qa: Option<&QaProvider>,
    tuning: &QaTuning,
    raw_question: &str,
) -> String {
    let question = raw_question.trim();
    if question.is_empty() {
        return EMPTY_QUESTION_PROMPT.to_string();
    }

    let advice = symptoms::detect(question);
    let answer = extract_answer(qa, question, corpus.contexts(), tuning).await;
    debug!(
        has_advice = advice.is_some(),
        has_answer = answer.is_some(),
        "Question pipeline finished"
    );

    compose(advice, answer.as_deref())
}
