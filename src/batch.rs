//! Batch evaluation: many tables from a file, evaluated in parallel.
//!
//! Input holds one table per line as 4 (2x2) or 6 (2x3) whitespace-separated
//! counts in row-major order. Blank lines and lines starting with `#` are
//! skipped. Results keep input order.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{anyhow, bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::config::RunConfig;
use crate::report::{write_tabular, TableResult};
use crate::stats::Table;

/// Options for one batch run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    pub config: RunConfig,
    /// Worker threads; 0 uses every available CPU.
    pub num_threads: usize,
    pub progress: bool,
    pub header: bool,
}

/// Parse batch input into tables.
pub fn parse_tables<R: BufRead>(reader: R, config: &RunConfig) -> Result<Vec<Table>> {
    let mut tables = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut counts = Vec::with_capacity(6);
        for field in trimmed.split_whitespace() {
            let parsed = config
                .parse_count(field)
                .map_err(|e| anyhow!("line {}: {}", line_no, e))?;
            if parsed.fallback && config.verbose {
                eprintln!(
                    "[warn] line {}: '{}' is not a plain count, using {}",
                    line_no, field, parsed.value
                );
            }
            counts.push(parsed.value);
        }

        match Table::from_row_major(&counts) {
            Some(table) => tables.push(table),
            None => bail!(
                "line {}: expected 4 or 6 counts, found {}",
                line_no,
                counts.len()
            ),
        }
    }
    Ok(tables)
}

/// Read tables from `path`, or from stdin when `path` is `-`.
pub fn read_tables(path: &Path, config: &RunConfig) -> Result<Vec<Table>> {
    if path == Path::new("-") {
        let stdin = io::stdin();
        parse_tables(stdin.lock(), config)
    } else {
        let file = File::open(path)
            .with_context(|| format!("Failed to open input file {}", path.display()))?;
        parse_tables(BufReader::new(file), config)
    }
}

/// Evaluate `tables` in parallel on the current rayon pool, in input order.
pub fn evaluate_tables(tables: &[Table], progress: bool) -> Result<Vec<TableResult>> {
    let bar = if progress {
        ProgressBar::new(tables.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
            .context("Invalid progress bar template")?,
    );

    let results = tables
        .par_iter()
        .map(|&table| {
            let result = TableResult::evaluate(table);
            bar.inc(1);
            result
        })
        .collect();
    bar.finish();
    Ok(results)
}

/// Read, evaluate, and write one batch.
pub fn run_batch(input: &Path, options: &BatchOptions, out: &mut dyn Write) -> Result<()> {
    let verbose = options.config.verbose;
    let num_threads = if options.num_threads == 0 {
        num_cpus::get()
    } else {
        options.num_threads
    };
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .context("Failed to build thread pool")?;

    let start = Instant::now();
    let tables = read_tables(input, &options.config)?;
    if verbose {
        eprintln!(
            "Read {} tables from {} ({} threads)",
            tables.len(),
            input.display(),
            num_threads
        );
    }

    let results = pool.install(|| evaluate_tables(&tables, options.progress))?;
    write_tabular(out, &results, options.header).context("Failed to write results")?;

    if verbose {
        eprintln!(
            "Evaluated {} tables in {:.3}s",
            results.len(),
            start.elapsed().as_secs_f64()
        );
    }
    Ok(())
}
