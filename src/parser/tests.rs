use crate::error::ParseError;
use crate::lexer::tokenize;
use crate::parser::ast::{Expr, Stmt};
use crate::parser::parse;

fn parse_ok(input: &str) -> Vec<Stmt> {
    let tokens = tokenize(input);
    parse(&tokens).unwrap_or_else(|e| panic!("unexpected parse error for {input:?}: {e}"))
}

fn parse_err(input: &str) -> ParseError {
    let tokens = tokenize(input);
    parse(&tokens).expect_err("expected a parse error")
}

fn num(n: i32) -> Expr {
    Expr::Number(n)
}

fn id(name: &str) -> Expr {
    Expr::Identifier(name.into())
}

#[test]
fn assignment() {
    let stmts = parse_ok("x = 1;");
    assert_eq!(
        stmts,
        vec![Stmt::Assignment {
            name: "x".into(),
            expr: num(1),
        }]
    );
}

#[test]
fn print_statement() {
    let stmts = parse_ok("print 1;");
    assert_eq!(stmts, vec![Stmt::Print(num(1))]);
}

#[test]
fn bare_expression_statement() {
    let stmts = parse_ok("1 + 2;");
    assert_eq!(
        stmts,
        vec![Stmt::Expression(Expr::BinaryOp {
            op: "+".into(),
            left: Box::new(num(1)),
            right: Box::new(num(2)),
        })]
    );
}

#[test]
fn precedence_multiplicative_over_additive() {
    // a + b * c parses as a + (b * c)
    let stmts = parse_ok("print a + b * c;");
    let Stmt::Print(expr) = &stmts[0] else {
        panic!("expected print");
    };
    assert_eq!(
        *expr,
        Expr::BinaryOp {
            op: "+".into(),
            left: Box::new(id("a")),
            right: Box::new(Expr::BinaryOp {
                op: "*".into(),
                left: Box::new(id("b")),
                right: Box::new(id("c")),
            }),
        }
    );
}

#[test]
fn left_associative_subtraction() {
    // a - b - c parses as (a - b) - c
    let stmts = parse_ok("print a - b - c;");
    let Stmt::Print(expr) = &stmts[0] else {
        panic!("expected print");
    };
    assert_eq!(
        *expr,
        Expr::BinaryOp {
            op: "-".into(),
            left: Box::new(Expr::BinaryOp {
                op: "-".into(),
                left: Box::new(id("a")),
                right: Box::new(id("b")),
            }),
            right: Box::new(id("c")),
        }
    );
}

#[test]
fn logical_precedence_chain() {
    // a || b && c == d parses as a || (b && (c == d))
    let stmts = parse_ok("print a || b && c == d;");
    let Stmt::Print(expr) = &stmts[0] else {
        panic!("expected print");
    };
    assert_eq!(
        *expr,
        Expr::BinaryOp {
            op: "||".into(),
            left: Box::new(id("a")),
            right: Box::new(Expr::BinaryOp {
                op: "&&".into(),
                left: Box::new(id("b")),
                right: Box::new(Expr::BinaryOp {
                    op: "==".into(),
                    left: Box::new(id("c")),
                    right: Box::new(id("d")),
                }),
            }),
        }
    );
}

#[test]
fn unary_not() {
    let stmts = parse_ok("print !(1 == 2);");
    assert_eq!(
        stmts,
        vec![Stmt::Print(Expr::UnaryOp {
            op: "!".into(),
            expr: Box::new(Expr::BinaryOp {
                op: "==".into(),
                left: Box::new(num(1)),
                right: Box::new(num(2)),
            }),
        })]
    );
}

#[test]
fn parenthesized_expression() {
    let stmts = parse_ok("print (1 + 2) * 3;");
    let Stmt::Print(expr) = &stmts[0] else {
        panic!("expected print");
    };
    assert_eq!(
        *expr,
        Expr::BinaryOp {
            op: "*".into(),
            left: Box::new(Expr::BinaryOp {
                op: "+".into(),
                left: Box::new(num(1)),
                right: Box::new(num(2)),
            }),
            right: Box::new(num(3)),
        }
    );
}

#[test]
fn if_without_else() {
    let stmts = parse_ok("if (x > 3) print 1;");
    assert_eq!(
        stmts,
        vec![Stmt::If {
            cond: Expr::BinaryOp {
                op: ">".into(),
                left: Box::new(id("x")),
                right: Box::new(num(3)),
            },
            then_branch: Box::new(Stmt::Print(num(1))),
            else_branch: None,
        }]
    );
}

#[test]
fn if_with_else() {
    let stmts = parse_ok("if (x > 3) print 1; else print 0;");
    let Stmt::If { else_branch, .. } = &stmts[0] else {
        panic!("expected if");
    };
    assert_eq!(**else_branch.as_ref().unwrap(), Stmt::Print(num(0)));
}

#[test]
fn while_loop() {
    let stmts = parse_ok("while (n < 3) n = n + 1;");
    assert_eq!(
        stmts,
        vec![Stmt::While {
            cond: Expr::BinaryOp {
                op: "<".into(),
                left: Box::new(id("n")),
                right: Box::new(num(3)),
            },
            body: Box::new(Stmt::Assignment {
                name: "n".into(),
                expr: Expr::BinaryOp {
                    op: "+".into(),
                    left: Box::new(id("n")),
                    right: Box::new(num(1)),
                },
            }),
        }]
    );
}

#[test]
fn multiple_statements_on_one_line() {
    let stmts = parse_ok("x = 10; print x + 5;");
    assert_eq!(stmts.len(), 2);
}

#[test]
fn missing_paren_after_if() {
    assert_eq!(parse_err("if x > 3) print 1;"), ParseError::ExpectedLParen("if"));
}

#[test]
fn missing_closing_paren() {
    assert_eq!(parse_err("if (x > 3 print 1;"), ParseError::ExpectedRParen);
}

#[test]
fn missing_assign_after_identifier() {
    assert_eq!(parse_err("x 1;"), ParseError::ExpectedAssign);
}

#[test]
fn missing_semicolon() {
    assert_eq!(
        parse_err("x = 1"),
        ParseError::ExpectedSemicolon("assignment")
    );
}

#[test]
fn unexpected_token_in_factor() {
    assert_eq!(parse_err("print ;"), ParseError::UnexpectedToken(";".into()));
}
