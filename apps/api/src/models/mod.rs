pub mod result;
pub mod riasec;
