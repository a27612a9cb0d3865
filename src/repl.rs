//! # REPL driver
//!
//! Ties the four pipeline stages together into the interactive loop: one line in,
//! lexed, parsed, compiled, and run against a single long-lived [`Vm`], with the
//! `[AST]`/`[Bytecode]` diagnostics printed ahead of execution unless `quiet` is set.
//!
//! A non-interactive line (`--eval`) runs the exact same [`run_line`] function, so the
//! two entry points can never drift in behavior.

use std::io::{self, BufRead, Write};

use crate::compiler::compile;
use crate::diagnostics::{disassemble, print_ast};
use crate::error::LineupError;
use crate::lexer::tokenize;
use crate::parser::parse;
use crate::vm::Vm;

pub const BANNER: &str = "Bytecode REPL. Type 'exit' to quit.";
pub const PROMPT: &str = ">>> ";

/// Lex, parse, compile, and run one line against `vm`, writing diagnostics (unless
/// `quiet`) and program output to `out`. Returns the first error encountered at
/// whichever stage it occurs.
pub fn run_line(
    vm: &mut Vm,
    line: &str,
    quiet: bool,
    mut out: impl Write,
) -> Result<(), LineupError> {
    let tokens = tokenize(line);
    let stmts = parse(&tokens)?;

    if !quiet {
        for stmt in &stmts {
            let _ = writeln!(out, "[AST]");
            let mut buf = String::new();
            if print_ast(stmt, &mut buf).is_ok() {
                let _ = write!(out, "{buf}");
            }
        }
    }

    let bytecode = compile(&stmts)?;

    if !quiet {
        let _ = writeln!(out, "[Bytecode]");
        let mut buf = String::new();
        if disassemble(&bytecode, &mut buf).is_ok() {
            let _ = write!(out, "{buf}");
        }
    }

    vm.run(&bytecode, &mut out)?;
    Ok(())
}

/// Options controlling how [`run`] drives the loop; mirrors the CLI flags in
/// `src/main.rs` without depending on `clap` itself.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub eval: Option<String>,
    pub no_banner: bool,
    pub quiet: bool,
}

/// Run the REPL to completion: either a single `--eval` line, or an interactive loop
/// reading from `input` until `exit` or EOF.
pub fn run(opts: Options, input: impl BufRead, mut out: impl Write) -> io::Result<()> {
    let mut vm = Vm::new();

    if let Some(line) = opts.eval {
        tracing::debug!(line = %line, "evaluating single line");
        if let Err(err) = run_line(&mut vm, &line, opts.quiet, &mut out) {
            eprintln!("Parser error: {err}");
        }
        return Ok(());
    }

    if !opts.no_banner {
        writeln!(out, "{BANNER}")?;
    }

    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        if line == "exit" {
            break;
        }

        tracing::debug!(line = %line, "running line");
        if let Err(err) = run_line(&mut vm, &line, opts.quiet, &mut out) {
            tracing::warn!(error = %err, "line failed");
            eprintln!("Parser error: {err}");
        }
    }

    Ok(())
}
