//! # Error types
//!
//! One enum per pipeline stage, unified behind a single crate-level error so the REPL
//! driver has one place to decide the `Parser error: ` prefix. There is deliberately no
//! `Lex` variant: the lexer never fails (unrecognized input becomes
//! [`crate::lexer::token::TokenKind::Unknown`]), so a lex-stage error has no inhabitant
//! to construct.

use thiserror::Error;

/// A syntactic violation encountered while parsing a single line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Expected '(' after {0}")]
    ExpectedLParen(&'static str),
    #[error("Expected ')' after condition")]
    ExpectedRParen,
    #[error("Expected '=' after identifier")]
    ExpectedAssign,
    #[error("Expected semicolon after {0}")]
    ExpectedSemicolon(&'static str),
    #[error("Unexpected token in factor: {0}")]
    UnexpectedToken(String),
}

/// A failure while lowering an AST to bytecode. Can only arise from an operator the
/// compiler does not recognize; the parser never produces one, so these variants exist
/// for completeness rather than as reachable cases in normal use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("Unknown binary operator: {0}")]
    UnknownBinaryOperator(String),
    #[error("Unknown unary operator: {0}")]
    UnknownUnaryOperator(String),
}

/// A failure while executing bytecode on the VM.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("Stack underflow")]
    StackUnderflow,
    #[error("Undefined variable: {0}")]
    UndefinedVariable(String),
    #[error("Division by zero")]
    DivisionByZero,
}

/// Unified pipeline error. A REPL line fails at exactly one stage; the driver only needs
/// to know which, to print it with the right prefix (every stage uses the same
/// `Parser error: ` prefix regardless of which of these it is).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineupError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
