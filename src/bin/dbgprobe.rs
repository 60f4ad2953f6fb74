// src/bin/dbgprobe.rs
//! Probe binary: exercises `debug_stream!` in a real process so integration
//! tests can inspect the bytes that actually reach stderr under the feature
//! set the build was produced with.

use std::io::Write;

use clap::Parser;
use dbgstream::debug_stream;

#[derive(Parser)]
#[command(name = "dbgprobe", about = "Emit debug_stream! output for inspection")]
struct ProbeArgs {
    /// Label for the emitted value.
    #[arg(long, default_value = "x")]
    label: String,

    /// Value to emit.
    #[arg(long, default_value_t = 7)]
    value: i64,

    /// Emit this many independent newline-terminated calls instead of one.
    #[arg(long, value_name = "N")]
    repeat: Option<usize>,

    /// Use the sink form with several chained writes.
    #[arg(long)]
    chained: bool,
}

fn main() -> anyhow::Result<()> {
    let args = ProbeArgs::parse();

    if args.chained {
        let mut sink = debug_stream!();
        write!(sink, "{}=", args.label)?;
        write!(sink, "{}", args.value)?;
        write!(sink, " ok")?;
    } else if let Some(n) = args.repeat {
        for i in 0..n {
            debug_stream!("{}[{}]={}\n", args.label, i, args.value);
        }
    } else {
        debug_stream!("{}={}", args.label, args.value);
    }

    // Visible on stdout in both build modes; the flag must never change
    // caller-visible control flow.
    println!("done");
    Ok(())
}
