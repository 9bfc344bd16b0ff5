pub mod stats;

pub mod batch;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod format;
pub mod report;

pub use stats::{pair_exact_test, triple_exact_test, ContingencyTable2x2, ContingencyTable2x3};
