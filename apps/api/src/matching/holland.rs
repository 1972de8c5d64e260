//! Code Deriver — ranks categories and builds the Holland code string.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::riasec::{Category, CategoryScores};

/// How the displayed code is assembled from the top three categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodePolicy {
    /// Always the top three letters, whatever their sign.
    TopThree,
    /// Only positively scored letters from the top three; falls back to `TopThree` when none are.
    #[default]
    PositiveOnly,
}

impl FromStr for CodePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top_three" | "top3" => Ok(CodePolicy::TopThree),
            "positive_only" | "positive" => Ok(CodePolicy::PositiveOnly),
            other => Err(format!(
                "unknown code policy '{other}' (expected top_three|positive_only)"
            )),
        }
    }
}

/// All six categories, highest score first. Equal scores keep canonical R-I-A-S-E-C order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranking([(Category, i32); 6]);

impl Ranking {
    pub fn from_scores(scores: &CategoryScores) -> Self {
        let mut ranked: [(Category, i32); 6] = Category::ALL.map(|c| (c, scores.get(c)));
        // stable: ties stay in canonical order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        Ranking(ranked)
    }

    pub fn entries(&self) -> &[(Category, i32); 6] {
        &self.0
    }

    /// Primary, secondary and tertiary categories.
    pub fn top_three(&self) -> [Category; 3] {
        [self.0[0].0, self.0[1].0, self.0[2].0]
    }
}

/// The derived code, 1–3 letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HollandCode {
    letters: Vec<Category>,
}

impl HollandCode {
    pub fn derive(ranking: &Ranking, policy: CodePolicy) -> Self {
        let top = &ranking.entries()[..3];

        let letters: Vec<Category> = match policy {
            CodePolicy::TopThree => top.iter().map(|(c, _)| *c).collect(),
            CodePolicy::PositiveOnly => {
                let positive: Vec<Category> = top
                    .iter()
                    .filter(|(_, score)| *score > 0)
                    .map(|(c, _)| *c)
                    .collect();
                if positive.is_empty() {
                    top.iter().map(|(c, _)| *c).collect()
                } else {
                    positive
                }
            }
        };

        HollandCode { letters }
    }

    pub fn letters(&self) -> &[Category] {
        &self.letters
    }

    pub fn as_string(&self) -> String {
        self.letters.iter().map(|c| c.letter()).collect()
    }
}

/// Convenience: ranking plus code in one step.
pub fn derive_code(scores: &CategoryScores, policy: CodePolicy) -> (Ranking, HollandCode) {
    let ranking = Ranking::from_scores(scores);
    let code = HollandCode::derive(&ranking, policy);
    (ranking, code)
}
