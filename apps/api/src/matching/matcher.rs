//! Matcher — scores catalog rows against a ranking and groups them by course.
//!
//! Algorithm:
//! 1. For each row, award points per ranked letter:
//!    - top1: 1st letter → `primary_exact`, elsewhere in code → `primary_present`
//!    - top2: 2nd letter → `secondary_exact`, elsewhere → `secondary_present`
//!    - top3: 3rd letter → `tertiary_exact`, elsewhere → `tertiary_present`
//! 2. Keep rows scoring ≥ `threshold`.
//! 3. Stable sort by score descending (catalog order breaks ties).
//! 4. Group by course name in first-seen order; keep the first `max_results` groups.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::matching::catalog::{Catalog, CatalogRow};
use crate::models::result::{MatchResult, Provider};
use crate::models::riasec::Category;

pub const PRIMARY_EXACT: u32 = 15;
pub const PRIMARY_PRESENT: u32 = 5;
pub const SECONDARY_EXACT: u32 = 10;
pub const SECONDARY_PRESENT: u32 = 3;
pub const TERTIARY_EXACT: u32 = 5;
pub const TERTIARY_PRESENT: u32 = 1;
pub const MATCH_THRESHOLD: u32 = 10;
pub const MAX_RESULTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub primary_exact: u32,
    pub primary_present: u32,
    pub secondary_exact: u32,
    pub secondary_present: u32,
    pub tertiary_exact: u32,
    pub tertiary_present: u32,
    pub threshold: u32,
    pub max_results: usize,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            primary_exact: PRIMARY_EXACT,
            primary_present: PRIMARY_PRESENT,
            secondary_exact: SECONDARY_EXACT,
            secondary_present: SECONDARY_PRESENT,
            tertiary_exact: TERTIARY_EXACT,
            tertiary_present: TERTIARY_PRESENT,
            threshold: MATCH_THRESHOLD,
            max_results: MAX_RESULTS,
        }
    }
}

impl MatchWeights {
    fn for_rank(&self, rank: usize) -> (u32, u32) {
        match rank {
            0 => (self.primary_exact, self.primary_present),
            1 => (self.secondary_exact, self.secondary_present),
            _ => (self.tertiary_exact, self.tertiary_present),
        }
    }
}

/// Positional score of one row code (already upper-case) against the top three categories.
pub fn score_code(code: &str, top: &[Category; 3], weights: &MatchWeights) -> u32 {
    let letters: Vec<char> = code.chars().collect();

    top.iter()
        .enumerate()
        .map(|(rank, category)| {
            let (exact, present) = weights.for_rank(rank);
            let letter = category.letter();
            if letters.get(rank) == Some(&letter) {
                exact
            } else if letters.contains(&letter) {
                present
            } else {
                0
            }
        })
        .sum()
}

/// Runs the full match pipeline. Pure: same inputs always give the same output.
pub fn match_programs(
    top: &[Category; 3],
    catalog: &Catalog,
    weights: &MatchWeights,
) -> Vec<MatchResult> {
    let mut scored: Vec<(u32, &CatalogRow)> = catalog
        .rows()
        .iter()
        .map(|row| (score_code(&row.riasec_code, top, weights), row))
        .filter(|(score, _)| *score >= weights.threshold)
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    let mut groups: Vec<MatchResult> = Vec::new();
    let mut index_by_course: HashMap<&str, usize> = HashMap::new();

    for (score, row) in scored {
        let provider = Provider {
            university: row.university.clone(),
            campus: row.campus.clone(),
            major: row.major.clone(),
        };

        match index_by_course.get(row.course.as_str()) {
            Some(&i) => groups[i].providers.push(provider),
            None => {
                index_by_course.insert(row.course.as_str(), groups.len());
                groups.push(MatchResult {
                    course_name: row.course.clone(),
                    riasec_code: row.riasec_code.clone(),
                    score,
                    careers: row.careers.clone(),
                    providers: vec![provider],
                });
            }
        }
    }

    groups.truncate(weights.max_results);
    groups
}
