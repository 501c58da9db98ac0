//! Command implementations

pub mod check;
pub mod simple;

pub use check::{LengthReport, WordCounts, check_dictionaries};
pub use simple::run_simple;
