//! Entry point for the `lineup` binary: parses CLI flags, wires up logging, and hands
//! off to [`lineup::repl::run`] for either a single `--eval` line or an interactive
//! loop over standard input.

use std::io;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lineup::repl::{self, Options};

/// A tiny bytecode REPL: integers, `if`/`while`, assignment, and `print`.
#[derive(Parser, Debug)]
#[command(name = "lineup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A tiny bytecode REPL language", long_about = None)]
struct Cli {
    /// Run a single line non-interactively instead of starting the REPL loop.
    #[arg(short, long, value_name = "LINE")]
    eval: Option<String>,

    /// Suppress the startup banner.
    #[arg(long)]
    no_banner: bool,

    /// Suppress the `[AST]`/`[Bytecode]` diagnostic blocks, printing only `PRINT`
    /// output and errors.
    #[arg(short, long)]
    quiet: bool,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true, env = "LINEUP_VERBOSE")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let opts = Options {
        eval: cli.eval,
        no_banner: cli.no_banner,
        quiet: cli.quiet,
    };

    let stdin = io::stdin();
    repl::run(opts, stdin.lock(), io::stdout())?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init();
}
