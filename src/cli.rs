use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, bail, Result};
use clap::Parser;

use crate::batch::{run_batch, BatchOptions};
use crate::config::{ParseMode, RunConfig};
use crate::diagnostics::{diagnostics_enabled, print_orientation};
use crate::format::format_g;
use crate::stats::{ContingencyTable2x2, ContingencyTable2x3, Table};

pub const USAGE: &str = "\
Fisher 2x2 and 2x3 exact test    https://www.cog-genomics.org/wdist
(C) 2013 Christopher Chang, GNU General Public License version 3

Usage: fisher [m11] [m12] [m21] [m22]
       fisher [m11] [m12] [m21] [m22] [m31] [m32]
       fisher -i <tables.tsv> [-o <out.tsv>] [-n <threads>]
";

#[derive(Parser, Debug)]
#[command(name = "fisher")]
#[command(version = "0.1.0")]
#[command(about = "Exact Fisher 2x2 and Fisher-Freeman-Halton 2x3 tests", long_about = None)]
pub struct FisherArgs {
    /// Cell counts: 4 for a 2x2 table; 6 for a 3x2 table given row by row,
    /// which is tested as its 2x3 transpose. Options go before the counts;
    /// once counts start, hyphen-led tokens such as `-1x` are counts.
    #[arg(allow_negative_numbers = true, allow_hyphen_values = true)]
    pub counts: Vec<String>,
    /// Batch input: one table per line (4 or 6 counts, row-major), `-` for stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    #[arg(short = 'n', long, default_value_t = 0)]
    pub num_threads: usize,
    /// Count parsing: `lenient` (atoi-compatible) or `strict`
    #[arg(long, default_value_t = ParseMode::Lenient)]
    pub parse: ParseMode,
    #[arg(long, default_value_t = false)]
    pub progress: bool,
    /// Prefix batch output with a `#` column header line
    #[arg(long, default_value_t = false)]
    pub header: bool,
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

impl FisherArgs {
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            parse_mode: self.parse,
            verbose: self.verbose || diagnostics_enabled(),
        }
    }
}

/// Build the table named by positional counts, or `None` when the count of
/// arguments matches neither shape.
///
/// Six arguments are read as a 3x2 table row by row: arguments 1, 3, 5 form
/// row 1 of the tested 2x3 table and arguments 2, 4, 6 form row 2.
pub fn positional_table(counts: &[String], config: &RunConfig) -> Result<Option<Table>> {
    if counts.len() != 4 && counts.len() != 6 {
        return Ok(None);
    }
    let mut values = Vec::with_capacity(counts.len());
    for (idx, arg) in counts.iter().enumerate() {
        let parsed = config
            .parse_count(arg)
            .map_err(|e| anyhow!("argument {}: {}", idx + 1, e))?;
        if parsed.fallback && config.verbose {
            eprintln!(
                "[warn] argument {} ('{}') is not a plain count, using {}",
                idx + 1,
                arg,
                parsed.value
            );
        }
        values.push(parsed.value);
    }

    Ok(match *values.as_slice() {
        [m11, m12, m21, m22] => Some(Table::Pair(ContingencyTable2x2::new(m11, m12, m21, m22))),
        [a1, a2, a3, a4, a5, a6] => Some(Table::Triple(ContingencyTable2x3::from_interleaved([
            a1, a2, a3, a4, a5, a6,
        ]))),
        _ => None,
    })
}

/// Run the command described by `args`, writing results to `out`.
///
/// Returns the process exit status: 0 on success, 1 when the usage text was
/// printed.
pub fn run(args: &FisherArgs, out: &mut dyn Write) -> Result<i32> {
    let config = args.run_config();

    if let Some(input) = &args.input {
        if !args.counts.is_empty() {
            bail!("positional counts cannot be combined with --input");
        }
        let options = BatchOptions {
            config,
            num_threads: args.num_threads,
            progress: args.progress,
            header: args.header,
        };
        run_batch(input, &options, out)?;
        return Ok(0);
    }

    let table = match positional_table(&args.counts, &config)? {
        Some(table) => table,
        None => {
            print!("{}", USAGE);
            return Ok(1);
        }
    };

    let start = Instant::now();
    if config.verbose {
        print_orientation(&table);
    }
    let p = table.p_value();
    if config.verbose {
        eprintln!("[diag] evaluated in {:.6}s", start.elapsed().as_secs_f64());
    }
    writeln!(out, "p-value: {}", format_g(p))?;
    out.flush()?;
    Ok(0)
}
