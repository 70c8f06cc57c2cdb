/// Response for questions that are empty after trimming.
pub const EMPTY_QUESTION_PROMPT: &str = "Please enter a medical question.";

/// Global fallback when neither symptom advice nor an extracted answer
/// qualifies.
pub const CONSULT_FALLBACK: &str =
    "Please consult a healthcare professional for personalized advice.";

/// Merges the two pipeline outcomes into the final HTML fragment. Advice
/// always precedes the extracted answer, with no separator; when both are
/// absent the fixed fallback sentence is returned instead.
pub fn compose(advice: Option<&str>, answer: Option<&str>) -> String {
    let mut parts = Vec::with_capacity(2);

    if let Some(advice) = advice {
        parts.push(format!("<div class='symptom-alert'>{advice}</div>"));
    }
    if let Some(answer) = answer {
        parts.push(format!("<div class='medical-info'>{answer}</div>"));
    }

    if parts.is_empty() {
        return CONSULT_FALLBACK.to_string();
    }
    parts.concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_to_say_yields_the_fixed_fallback() {
        assert_eq!(compose(None, None), CONSULT_FALLBACK);
    }

    #[test]
    fn advice_alone_is_wrapped_as_a_symptom_alert() {
        assert_eq!(
            compose(Some("rest"), None),
            "<div class='symptom-alert'>rest</div>"
        );
    }

    #[test]
    fn answer_alone_is_wrapped_as_medical_info() {
        assert_eq!(
            compose(None, Some("an answer")),
            "<div class='medical-info'>an answer</div>"
        );
    }

    #[test]
    fn advice_always_precedes_the_answer_with_no_separator() {
        assert_eq!(
            compose(Some("A"), Some("B")),
            "<div class='symptom-alert'>A</div><div class='medical-info'>B</div>"
        );
    }
}
