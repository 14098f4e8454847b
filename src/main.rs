use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use clap_stdin::FileOrStdin;
use tracing::Level;

use tacc::driver::{self, Options};

/// Compiles let/print programs into three-address code and pseudo-assembly.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Source file, `-` reads stdin
    #[arg(default_value = "-")]
    input: FileOrStdin,

    /// Also print the intermediate code before optimization
    #[arg(long)]
    show_intermediate: bool,

    /// Generate assembly from the unoptimized intermediate code
    #[arg(long)]
    no_optimize: bool,

    /// Do not print the token listing
    #[arg(long)]
    no_tokens: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    let source = args
        .input
        .contents()
        .context("failed to read the source text")?;

    let options = Options {
        show_tokens: !args.no_tokens,
        show_intermediate: args.show_intermediate,
        optimize: !args.no_optimize,
    };

    let mut out = io::stdout().lock();
    let ok = driver::run(&source, &options, &mut out)?;
    out.flush()?;

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
