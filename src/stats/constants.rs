//! Numeric constants shared by the exact-test walks.

/// Offset applied to the observed 2x2 table's weight, so that tables exactly
/// as probable as the observed one still fall below it after rounding.
pub const SMALL_EPSILON: f64 = 0.0000000000001;

/// Observed-table offset for the 2x3 walk, which accumulates more rounding
/// per table than the 2x2 walk.
pub const SMALLISH_EPSILON: f64 = 0.00000000003;

/// Tail terms smaller than this fraction of the running tail are dropped.
pub const DOUBLE_PREC_LIMIT: f64 = 0.0000000000000001;

/// Integer zero test for counts carried as `f64`.
pub const EXHAUSTED: f64 = 0.5;
