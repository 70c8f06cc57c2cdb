pub mod compose;
pub mod config;
pub mod pipeline;
pub mod provider;
pub mod symptoms;

pub use compose::{compose, CONSULT_FALLBACK, EMPTY_QUESTION_PROMPT};
pub use config::{QaBackend, QaTuning};
pub use pipeline::answer_question;
pub use provider::{extract_answer, AnswerCandidate, QaProvider};
