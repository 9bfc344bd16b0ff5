//! Diagnostic output for the `fisher` binary.
//!
//! Enabled per run with `--verbose`, or globally via the FISHER_DIAGNOSTICS
//! environment variable (`1` or `true`). All output goes to stderr.

use std::sync::OnceLock;

use crate::stats::{canonicalize_2x2, canonicalize_2x3, Table};

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(false)
}

/// Check if diagnostics are enabled via environment variable
pub fn diagnostics_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| env_flag("FISHER_DIAGNOSTICS"))
}

/// Check if start-up tracing is enabled (FISHER_STARTUP_TRACE=1).
pub fn startup_trace_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| std::env::var("FISHER_STARTUP_TRACE").ok().as_deref() == Some("1"))
}

/// Describe the canonical orientation chosen for `table`.
pub fn describe_orientation(table: &Table) -> String {
    match table {
        Table::Pair(t) => {
            let c = canonicalize_2x2(*t);
            let o = c.orientation;
            format!(
                "2x2 canonical {:?} (off-diagonal swap: {}, diagonal swap: {}, column swap: {})",
                c.table.cells(),
                o.off_diagonal_swapped,
                o.diagonal_swapped,
                o.columns_swapped
            )
        }
        Table::Triple(t) => {
            let c = canonicalize_2x3(*t);
            format!(
                "2x3 canonical {:?} (column order: {:?}, row swap: {})",
                c.table.cells,
                c.orientation.column_order,
                c.orientation.rows_swapped
            )
        }
    }
}

/// Print the orientation of `table` to stderr.
pub fn print_orientation(table: &Table) {
    eprintln!("[diag] {}", describe_orientation(table));
}
