use std::collections::HashSet;

/// One hand-authored keyword rule. A rule matches when any keyword appears
/// as an exact whole token in the question.
pub struct SymptomRule {
    pub name: &'static str,
    pub advice: &'static str,
    pub keywords: &'static [&'static str],
}

/// The fixed rule table. Declaration order is the match priority: scanning
/// stops at the first matching rule, so at most one advice string ever
/// surfaces even when several symptoms are mentioned.
pub static SYMPTOM_RULES: &[SymptomRule] = &[
    SymptomRule {
        name: "fever",
        advice: "For fever: Monitor temperature regularly, stay hydrated with water and \
                 electrolytes. If temperature exceeds 39\u{b0}C (102\u{b0}F) or persists beyond \
                 3 days, seek medical attention.",
        keywords: &["fever", "temperature", "febrile", "hot", "chills"],
    },
    SymptomRule {
        name: "cough",
        advice: "For cough: Stay hydrated, avoid irritants like smoke. Consult a doctor if \
                 coughing blood or lasting over 3 weeks.",
        keywords: &["cough", "coughing", "hacking", "phlegm"],
    },
];

/// Scans free text against the rule table and returns the first matching
/// rule's advice. Tokenization is lowercase whitespace splitting; no
/// stemming and no punctuation stripping, so "fever," is not a match.
pub fn detect(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    let tokens: HashSet<&str> = lowered.split_whitespace().collect();

    SYMPTOM_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| tokens.contains(keyword)))
        .map(|rule| rule.advice)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fever_advice() -> &'static str {
        SYMPTOM_RULES[0].advice
    }

    fn cough_advice() -> &'static str {
        SYMPTOM_RULES[1].advice
    }

    #[test]
    fn fever_keyword_matches_case_insensitively() {
        assert_eq!(detect("I have a FEVER tonight"), Some(fever_advice()));
        assert_eq!(detect("my temperature is high"), Some(fever_advice()));
    }

    #[test]
    fn cough_keywords_match_when_no_fever_rule_token_is_present() {
        assert_eq!(detect("this coughing will not stop"), Some(cough_advice()));
    }

    #[test]
    fn first_rule_in_table_order_wins_when_several_match() {
        let advice = detect("I have a fever and a cough");
        assert_eq!(advice, Some(fever_advice()));
        assert_ne!(advice, Some(cough_advice()));
    }

    #[test]
    fn keywords_only_match_as_whole_tokens() {
        // No punctuation stripping and no stemming.
        assert_eq!(detect("I feel feverish"), None);
        assert_eq!(detect("a bad fever."), None);
    }

    #[test]
    fn unrelated_text_matches_nothing() {
        assert_eq!(detect("what is glaucoma"), None);
        assert_eq!(detect(""), None);
    }
}
