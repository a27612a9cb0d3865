//! # Compiler
//!
//! Lowers a parsed statement list into a flat [`bytecode::Instruction`] vector.
//! Post-order: every node compiles its children before emitting the opcode that combines
//! them, so the stack holds operands in the right order by construction.
//!
//! ## Control flow
//!
//! `if`/`while` are the only non-trivial lowering: the branch target isn't known until
//! after the skipped region is compiled, so the compiler emits a jump with a placeholder
//! operand, keeps its index, and patches that operand once the target index is known.
//! This emit-then-patch shape is taken directly from the bytecode compiler this crate is
//! ported from; see [`emit`]/[`patch`].

pub mod bytecode;


use crate::error::CompileError;
use crate::parser::ast::{Expr, Stmt};
use bytecode::{Instruction, OpCode, Operand};

/// Compile a whole program (one REPL line's worth of statements) into bytecode.
pub fn compile(program: &[Stmt]) -> Result<Vec<Instruction>, CompileError> {
    let mut out = Vec::new();
    for stmt in program {
        compile_stmt(stmt, &mut out)?;
    }
    tracing::debug!(count = out.len(), "instructions emitted");
    Ok(out)
}

fn emit(out: &mut Vec<Instruction>, op: OpCode, operand: Operand) -> usize {
    out.push(Instruction { op, operand });
    out.len() - 1
}

/// Rewrite the operand of a previously emitted jump once its target index is known.
fn patch(out: &mut [Instruction], at: usize, target: usize) {
    out[at].operand = Operand::Index(target);
}

fn compile_stmt(stmt: &Stmt, out: &mut Vec<Instruction>) -> Result<(), CompileError> {
    match stmt {
        Stmt::Assignment { name, expr } => {
            compile_expr(expr, out)?;
            emit(out, OpCode::StoreVar, Operand::Symbol(name.clone()));
        }
        Stmt::Print(expr) => {
            compile_expr(expr, out)?;
            emit(out, OpCode::Print, Operand::None);
        }
        Stmt::If {
            cond,
            then_branch,
            else_branch,
        } => compile_if(cond, then_branch, else_branch.as_deref(), out)?,
        Stmt::While { cond, body } => compile_while(cond, body, out)?,
        Stmt::Block(stmts) => {
            for s in stmts {
                compile_stmt(s, out)?;
            }
        }
        // No discard is emitted here: a bare expression statement is specified to leave
        // exactly one residual value on the stack.
        Stmt::Expression(expr) => compile_expr(expr, out)?,
    }
    Ok(())
}

fn compile_if(
    cond: &Expr,
    then_branch: &Stmt,
    else_branch: Option<&Stmt>,
    out: &mut Vec<Instruction>,
) -> Result<(), CompileError> {
    compile_expr(cond, out)?;
    let jfalse = emit(out, OpCode::JmpIfFalse, Operand::Index(0));

    compile_stmt(then_branch, out)?;

    match else_branch {
        Some(else_branch) => {
            let jend = emit(out, OpCode::Jmp, Operand::Index(0));
            patch(out, jfalse, out.len());
            compile_stmt(else_branch, out)?;
            patch(out, jend, out.len());
        }
        None => patch(out, jfalse, out.len()),
    }
    Ok(())
}

fn compile_while(cond: &Expr, body: &Stmt, out: &mut Vec<Instruction>) -> Result<(), CompileError> {
    let loop_start = out.len();
    compile_expr(cond, out)?;
    let jfalse = emit(out, OpCode::JmpIfFalse, Operand::Index(0));

    compile_stmt(body, out)?;
    emit(out, OpCode::Jmp, Operand::Index(loop_start));

    patch(out, jfalse, out.len());
    Ok(())
}

fn compile_expr(expr: &Expr, out: &mut Vec<Instruction>) -> Result<(), CompileError> {
    match expr {
        Expr::Number(n) => {
            emit(out, OpCode::LoadConst, Operand::Immediate(*n));
        }
        Expr::Identifier(name) => {
            emit(out, OpCode::LoadVar, Operand::Symbol(name.clone()));
        }
        Expr::BinaryOp { op, left, right } => {
            compile_expr(left, out)?;
            compile_expr(right, out)?;
            emit(out, binary_opcode(op)?, Operand::None);
        }
        Expr::UnaryOp { op, expr } => compile_unary(op, expr, out)?,
    }
    Ok(())
}

fn compile_unary(op: &str, expr: &Expr, out: &mut Vec<Instruction>) -> Result<(), CompileError> {
    match op {
        "!" => {
            compile_expr(expr, out)?;
            emit(out, OpCode::LogicalNot, Operand::None);
        }
        // The current grammar never produces unary minus, but the lowering is kept for
        // completeness: emulate NEG as `0 - expr`.
        "-" => {
            emit(out, OpCode::LoadConst, Operand::Immediate(0));
            compile_expr(expr, out)?;
            emit(out, OpCode::Sub, Operand::None);
        }
        _ => return Err(CompileError::UnknownUnaryOperator(op.to_string())),
    }
    Ok(())
}

fn binary_opcode(op: &str) -> Result<OpCode, CompileError> {
    Ok(match op {
        "+" => OpCode::Add,
        "-" => OpCode::Sub,
        "*" => OpCode::Mul,
        "/" => OpCode::Div,
        "%" => OpCode::Mod,
        "==" => OpCode::CmpEq,
        "!=" => OpCode::CmpNeq,
        "<" => OpCode::CmpLt,
        "<=" => OpCode::CmpLte,
        ">" => OpCode::CmpGt,
        ">=" => OpCode::CmpGte,
        "&&" => OpCode::LogicalAnd,
        "||" => OpCode::LogicalOr,
        _ => return Err(CompileError::UnknownBinaryOperator(op.to_string())),
    })
}
