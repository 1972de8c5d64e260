pub mod config;
pub mod errors;
pub mod matching;
pub mod models;
pub mod quiz;
pub mod routes;
pub mod state;
