use std::collections::HashSet;

use common::corpus::truncate_chars;

use super::AnswerCandidate;
use crate::config::QaTuning;

/// Deterministic stand-in for the model-backed capability: scores each
/// context by distinct-token overlap with the question and extracts the
/// best-matching sentence as the answer span. Scores land in [0, 1].
pub(super) fn answers(
    question: &str,
    contexts: &[String],
    tuning: &QaTuning,
) -> Vec<AnswerCandidate> {
    let question_tokens: HashSet<String> = tokens(question).collect();
    if question_tokens.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<AnswerCandidate> = contexts
        .iter()
        .enumerate()
        .filter_map(|(context_index, context)| {
            let (span, overlap) = best_window(context, &question_tokens, tuning.max_answer_len)?;
            (overlap > 0).then(|| AnswerCandidate {
                context_index,
                answer_span: span,
                score: overlap as f32 / question_tokens.len() as f32,
            })
        })
        .collect();

    // Stable sort: equal scores keep ascending context order.
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(tuning.top_k);
    candidates
}

fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_ascii_lowercase())
}

// Picks the sentence sharing the most distinct tokens with the question;
// earlier sentences win ties. The span is capped at `max_len` characters.
fn best_window(
    context: &str,
    question_tokens: &HashSet<String>,
    max_len: usize,
) -> Option<(String, usize)> {
    context
        .split_terminator(['.', '?', '!'])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .fold(None, |best: Option<(&str, usize)>, sentence| {
            let overlap = tokens(sentence)
                .collect::<HashSet<_>>()
                .intersection(question_tokens)
                .count();
            match best {
                Some((_, best_overlap)) if overlap <= best_overlap => best,
                _ => Some((sentence, overlap)),
            }
        })
        .map(|(sentence, overlap)| (truncate_chars(sentence, max_len), overlap))
}
