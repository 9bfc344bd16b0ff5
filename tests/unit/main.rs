//! Integration tests for fisher_exact.
//!
//! Tests are organized by layer:
//! - `stats/` - exact-test engine against fixtures and reference values
//! - `cli` - positional, batch and output handling
//! - `properties` - proptest invariants over random tables


mod stats;
