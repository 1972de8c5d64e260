//! Scores → code → matches, assembled into the payload the presentation layer renders.

use serde::{Deserialize, Serialize};

use crate::matching::catalog::Catalog;
use crate::matching::holland::{derive_code, CodePolicy};
use crate::matching::matcher::{match_programs, MatchWeights};
use crate::models::result::QuizResult;
use crate::models::riasec::CategoryScores;
use crate::quiz::scoring::{AnswerPolicy, LikertScale};

/// Every tunable that changes a result. Built from `Config` at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    pub answer_policy: AnswerPolicy,
    pub code_policy: CodePolicy,
    pub scale: LikertScale,
    pub weights: MatchWeights,
}

/// Derives the code from `scores` and matches it against `catalog`.
pub fn build_result(
    scores: CategoryScores,
    catalog: &Catalog,
    settings: &EngineSettings,
    diagnostic_mode: bool,
) -> QuizResult {
    let (ranking, code) = derive_code(&scores, settings.code_policy);
    let top_matches = match_programs(&ranking.top_three(), catalog, &settings.weights);

    let holland_code = code.as_string();
    tracing::info!(
        holland_code = %holland_code,
        matches = top_matches.len(),
        diagnostic_mode,
        "Built quiz result"
    );

    QuizResult {
        holland_code,
        holland_labels: code.letters().iter().map(|c| c.label()).collect(),
        top_matches,
        scores: Some(scores),
        diagnostic_mode,
    }
}
