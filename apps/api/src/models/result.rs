use serde::Serialize;

use crate::models::riasec::CategoryScores;

/// One institution offering a matched course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Provider {
    pub university: String,
    pub campus: String,
    pub major: String,
}

/// A course group: every catalog row sharing `course_name` that cleared the threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub course_name: String,
    pub riasec_code: String, // code of the highest-scoring row for this course
    pub score: u32,
    pub careers: Vec<String>, // from the same row as riasec_code
    pub providers: Vec<Provider>, // never empty
}

/// Payload handed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub holland_code: String,
    /// Category names for each letter of `holland_code`, e.g. `["Realistic", "Investigative"]`.
    pub holland_labels: Vec<&'static str>,
    pub top_matches: Vec<MatchResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<CategoryScores>,
    pub diagnostic_mode: bool,
}
