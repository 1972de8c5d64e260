//! Axum route handlers for the Quiz API.

use std::collections::HashMap;

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Query, Request, State},
    http::header,
    Form, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::matching::pipeline::build_result;
use crate::models::result::QuizResult;
use crate::models::riasec::{Category, CategoryScores};
use crate::quiz::questions::{Question, QUESTION_BANK};
use crate::quiz::scoring::score_answers;
use crate::quiz::shuffle::shuffled_questions;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}

/// Answer map from `POST /api/v1/submit`, read from either a url-encoded form or a JSON object.
///
/// JSON values may be strings or numbers (`{"q1": "5"}` and `{"q1": 5}` are equivalent). Any
/// other value is kept as text and later defaulted by the scorer like any malformed answer.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubmittedAnswers(pub HashMap<String, String>);

#[async_trait]
impl<S> FromRequest<S> for SubmittedAnswers
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| {
                ct.trim_start()
                    .to_ascii_lowercase()
                    .starts_with("application/json")
            });

        if is_json {
            let Json(raw) = Json::<HashMap<String, Value>>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::InvalidSubmission {
                    status: rejection.status(),
                    message: rejection.body_text(),
                })?;
            let answers = raw
                .into_iter()
                .map(|(key, value)| (key, answer_text(value)))
                .collect();
            Ok(SubmittedAnswers(answers))
        } else {
            let Form(answers) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::InvalidSubmission {
                    status: rejection.status(),
                    message: rejection.body_text(),
                })?;
            Ok(SubmittedAnswers(answers))
        }
    }
}

fn answer_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Leading signed integer of `raw`, ignoring anything after it: `"7.5"` and `"7abc"` are 7.
/// `None` when there are no leading digits or the value overflows `i32`.
pub fn parse_int_prefix(raw: &str) -> Option<i32> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len > 1 {
        return None;
    }
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse().ok()
}

/// Raw category scores for the diagnostic entry point. Each value is read up to its first
/// non-digit; values with no leading integer count as 0.
#[derive(Debug, Default, Deserialize)]
pub struct DiagnosticScoresQuery {
    pub r: Option<String>,
    pub i: Option<String>,
    pub a: Option<String>,
    pub s: Option<String>,
    pub e: Option<String>,
    pub c: Option<String>,
}

impl DiagnosticScoresQuery {
    pub fn to_scores(&self) -> CategoryScores {
        let parse = |v: &Option<String>| {
            v.as_deref()
                .and_then(parse_int_prefix)
                .unwrap_or(0)
        };
        [
            (Category::R, parse(&self.r)),
            (Category::I, parse(&self.i)),
            (Category::A, parse(&self.a)),
            (Category::S, parse(&self.s)),
            (Category::E, parse(&self.e)),
            (Category::C, parse(&self.c)),
        ]
        .into_iter()
        .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/questions
///
/// The full question bank in a fresh random order.
pub async fn handle_get_questions() -> Json<QuestionsResponse> {
    let questions = shuffled_questions(&QUESTION_BANK, &mut rand::rng());
    Json(QuestionsResponse { questions })
}

/// POST /api/v1/submit
///
/// Scores an answer map (`q1=5&q2=3...` as a form, or `{"q1": 5, ...}` as JSON) and returns
/// matched programs. Unreadable bodies are rejected with `INVALID_SUBMISSION`.
pub async fn handle_submit(
    State(state): State<AppState>,
    SubmittedAnswers(answers): SubmittedAnswers,
) -> Json<QuizResult> {
    let outcome = score_answers(
        &QUESTION_BANK,
        &answers,
        &state.settings.scale,
        state.settings.answer_policy,
    );

    if outcome.defaulted.len() == QUESTION_BANK.len() {
        tracing::warn!("Submission contained no valid answers");
    }

    Json(build_result(outcome.scores, &state.catalog, &state.settings, false))
}

/// GET /api/v1/results?r=&i=&a=&s=&e=&c=
///
/// Diagnostic entry point: skips the questionnaire and matches raw category scores.
pub async fn handle_diagnostic_results(
    State(state): State<AppState>,
    Query(params): Query<DiagnosticScoresQuery>,
) -> Json<QuizResult> {
    Json(build_result(params.to_scores(), &state.catalog, &state.settings, true))
}
