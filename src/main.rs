use std::io::Write;

use anyhow::Result;
use clap::Parser;
use fisher_exact::cli::{self, FisherArgs};
use fisher_exact::diagnostics::startup_trace_enabled;
use fisher_exact::report::open_output;

fn main() -> Result<()> {
    let startup_trace = startup_trace_enabled();
    if startup_trace {
        eprintln!("[startup] enter main");
    }
    let args = FisherArgs::parse();
    if startup_trace {
        eprintln!("[startup] after clap parse");
    }

    let mut out = open_output(args.out.as_deref())?;
    let code = cli::run(&args, &mut *out)?;
    if code != 0 {
        drop(out);
        std::io::stdout().flush()?;
        std::process::exit(code);
    }
    Ok(())
}
