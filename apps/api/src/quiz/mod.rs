// Questionnaire: the question bank, per-request shuffling and answer scoring.

pub mod handlers;
pub mod questions;
pub mod scoring;
pub mod shuffle;
