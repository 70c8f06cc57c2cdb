use axum::{extract::State, response::IntoResponse, Form, Json};
use qa_pipeline::answer_question;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api_state::ApiState;

#[derive(Debug, Deserialize)]
pub struct AskParams {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Answers one medical question. Every pipeline outcome, including empty
/// input and degraded corpus/model states, is a 200 with the outcome
/// carried in-band as the answer text; there is no error field.
pub async fn ask(
    State(state): State<ApiState>,
    Form(params): Form<AskParams>,
) -> impl IntoResponse {
    info!(question = %params.question.trim(), "Received question");

    let answer = answer_question(
        &state.corpus,
        state.qa.as_deref(),
        &state.tuning,
        &params.question,
    )
    .await;

    Json(AskResponse { answer })
}
