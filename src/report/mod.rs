//! Tabular output of evaluated tables.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::format::format_g;
use crate::stats::Table;

/// One evaluated table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableResult {
    pub table: Table,
    pub p_value: f64,
}

impl TableResult {
    pub fn evaluate(table: Table) -> Self {
        Self {
            table,
            p_value: table.p_value(),
        }
    }
}

/// Buffered writer over `path`, or stdout when `path` is `None` or `-`.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(p) if p != Path::new("-") => {
            let file = File::create(p)
                .with_context(|| format!("Failed to create output file {}", p.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        _ => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

/// Write one tab-separated line per result: the cells in row-major order,
/// then the p-value in `%g` form. With `header`, a `#` comment line naming
/// the columns comes first.
pub fn write_tabular<W: Write + ?Sized>(
    writer: &mut W,
    results: &[TableResult],
    header: bool,
) -> io::Result<()> {
    if header {
        writeln!(writer, "# cells (row-major)\tp_value")?;
    }
    for result in results {
        for cell in result.table.cells() {
            write!(writer, "{}\t", cell)?;
        }
        writeln!(writer, "{}", format_g(result.p_value))?;
    }
    writer.flush()
}
