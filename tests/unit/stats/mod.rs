//! Exact-test engine tests
//!
//! - `fixtures` - exhaustive comparison against exact rational enumeration
//! - `pair` - 2x2 reference values, symmetry, monotonicity, large counts
//! - `triple` - 2x3 reference values, reduction to 2x2, large counts

mod fixtures;
mod pair;
mod triple;
