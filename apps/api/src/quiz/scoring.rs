//! Scorer — turns raw Likert answers into signed per-category totals.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::riasec::CategoryScores;
use crate::quiz::questions::{answer_key, Question};

/// Answer substituted under `AnswerPolicy::Neutral`.
pub const NEUTRAL_ANSWER: u8 = 3;

/// What to do with a missing or out-of-range answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerPolicy {
    /// Treat the answer as `NEUTRAL_ANSWER` and score it through the scale.
    #[default]
    Neutral,
    /// Contribute nothing for that question.
    Skip,
}

impl FromStr for AnswerPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "neutral" => Ok(AnswerPolicy::Neutral),
            "skip" => Ok(AnswerPolicy::Skip),
            other => Err(format!("unknown answer policy '{other}' (expected neutral|skip)")),
        }
    }
}

/// Signed contribution for each answer value, indexed by `answer - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikertScale(pub [i32; 5]);

impl Default for LikertScale {
    /// Non-linear: strong agreement is rewarded and strong disagreement penalized.
    fn default() -> Self {
        LikertScale([-3, -1, 0, 1, 3])
    }
}

impl LikertScale {
    /// Contribution for an answer in `1..=5`.
    pub fn contribution(&self, answer: u8) -> Option<i32> {
        match answer {
            1..=5 => Some(self.0[usize::from(answer - 1)]),
            _ => None,
        }
    }
}

/// Scorer output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreOutcome {
    pub scores: CategoryScores,
    /// Question ids whose answer was missing or malformed and fell back to the policy.
    pub defaulted: Vec<u32>,
}

/// Parses a raw form value into a valid Likert answer.
pub fn parse_answer(raw: Option<&str>) -> Option<u8> {
    raw?.trim().parse::<u8>().ok().filter(|v| (1..=5).contains(v))
}

/// Scores every question in `bank` against the submitted answers.
///
/// `answers` is keyed by `q<id>`; unknown keys are ignored.
pub fn score_answers(
    bank: &[Question],
    answers: &HashMap<String, String>,
    scale: &LikertScale,
    policy: AnswerPolicy,
) -> ScoreOutcome {
    let mut scores = CategoryScores::new();
    let mut defaulted = Vec::new();

    for question in bank {
        let raw = answers.get(&answer_key(question)).map(String::as_str);

        let answer = match parse_answer(raw) {
            Some(v) => Some(v),
            None => {
                defaulted.push(question.id);
                match policy {
                    AnswerPolicy::Neutral => Some(NEUTRAL_ANSWER),
                    AnswerPolicy::Skip => None,
                }
            }
        };

        if let Some(points) = answer.and_then(|a| scale.contribution(a)) {
            scores.add(question.category, points);
        }
    }

    if !defaulted.is_empty() {
        tracing::debug!(
            count = defaulted.len(),
            ?policy,
            "Resolved missing or malformed answers by policy"
        );
    }

    ScoreOutcome { scores, defaulted }
}
