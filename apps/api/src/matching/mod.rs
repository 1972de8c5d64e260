// Program matching: catalog loading, Holland code derivation, weighted matching.
// `pipeline` ties them together; handlers stay thin.

pub mod catalog;
pub mod handlers;
pub mod holland;
pub mod matcher;
pub mod pipeline;
