//! # Diagnostics
//!
//! The AST pretty-printer and bytecode disassembler behind the REPL's `[AST]` and
//! `[Bytecode]` headers. Peripheral to the pipeline itself, but part of the external
//! interface: every line run interactively prints both before executing.

use crate::compiler::bytecode::Instruction;
use crate::parser::ast::{Expr, Stmt};

/// Pretty-print one top-level statement, indented two spaces per nesting level.
///
/// Only the variants the source prints are handled here (`Number`, `Identifier`,
/// `BinaryOp`, `UnaryOp`, `Assignment`, `Print`) — `If`/`While`/`Block`/bare
/// `Expression` have no printer, matching the external interface's exact list.
pub fn print_ast(stmt: &Stmt, out: &mut impl std::fmt::Write) -> std::fmt::Result {
    print_stmt(stmt, 0, out)
}

fn print_stmt(stmt: &Stmt, indent: usize, out: &mut impl std::fmt::Write) -> std::fmt::Result {
    let pad = " ".repeat(indent);
    match stmt {
        Stmt::Assignment { name, expr } => {
            writeln!(out, "{pad}Assignment({name})")?;
            print_expr(expr, indent + 2, out)
        }
        Stmt::Print(expr) => {
            writeln!(out, "{pad}Print")?;
            print_expr(expr, indent + 2, out)
        }
        // If/While/Block/bare-expression statements print nothing, matching the REPL's
        // diagnostic output contract.
        Stmt::If { .. } | Stmt::While { .. } | Stmt::Block(_) | Stmt::Expression(_) => Ok(()),
    }
}

fn print_expr(expr: &Expr, indent: usize, out: &mut impl std::fmt::Write) -> std::fmt::Result {
    let pad = " ".repeat(indent);
    match expr {
        Expr::Number(n) => writeln!(out, "{pad}Number({n})"),
        Expr::Identifier(name) => writeln!(out, "{pad}Identifier({name})"),
        Expr::BinaryOp { op, left, right } => {
            writeln!(out, "{pad}BinaryOp({op})")?;
            print_expr(left, indent + 2, out)?;
            print_expr(right, indent + 2, out)
        }
        Expr::UnaryOp { op, expr } => {
            writeln!(out, "{pad}UnaryOp({op})")?;
            print_expr(expr, indent + 2, out)
        }
    }
}

/// One disassembled line per instruction: mnemonic, then operand if present.
/// [`Instruction`]'s `Display` impl already produces this format; this wrapper exists so
/// callers don't need to know that detail.
pub fn disassemble(bytecode: &[Instruction], out: &mut impl std::fmt::Write) -> std::fmt::Result {
    for instr in bytecode {
        writeln!(out, "{instr}")?;
    }
    Ok(())
}
