use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

use crate::matching::holland::CodePolicy;
use crate::matching::matcher::{MatchWeights, MATCH_THRESHOLD, MAX_RESULTS};
use crate::matching::pipeline::EngineSettings;
use crate::quiz::scoring::{AnswerPolicy, LikertScale};

/// Application configuration loaded from environment variables.
/// Every variable has a default; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub catalog_path: PathBuf,
    pub answer_policy: AnswerPolicy,
    pub code_policy: CodePolicy,
    pub match_threshold: u32,
    pub max_results: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            port: parse_or("PORT", lookup("PORT"), 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            catalog_path: lookup("CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/catalog.csv")),
            answer_policy: parse_policy("ANSWER_POLICY", lookup("ANSWER_POLICY"))?,
            code_policy: parse_policy("CODE_POLICY", lookup("CODE_POLICY"))?,
            match_threshold: parse_or("MATCH_THRESHOLD", lookup("MATCH_THRESHOLD"), MATCH_THRESHOLD)?,
            max_results: parse_or("MAX_RESULTS", lookup("MAX_RESULTS"), MAX_RESULTS)?,
        })
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            answer_policy: self.answer_policy,
            code_policy: self.code_policy,
            scale: LikertScale::default(),
            weights: MatchWeights {
                threshold: self.match_threshold,
                max_results: self.max_results,
                ..MatchWeights::default()
            },
        }
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(v) => v
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{v}'")),
        None => Ok(default),
    }
}

fn parse_policy<T>(key: &str, raw: Option<String>) -> Result<T>
where
    T: FromStr<Err = String> + Default,
{
    match raw {
        Some(v) => v.parse::<T>().map_err(|e| anyhow!("{key}: {e}")),
        None => Ok(T::default()),
    }
}
