//! # Lexer
//!
//! Tokenizes one REPL line into a stream of tokens.
//!
//! ## Never fails
//!
//! Unlike a typical lexer, this one has no error path: a character that matches no
//! recognized class becomes a [`TokenKind::Unknown`] token carrying just that character,
//! and scanning continues. The parser is the one that decides an `Unknown` token is a
//! syntax error; the lexer's job ends at classification.
//!
//! ## Two-character operators
//!
//! `==`, `!=`, `<=`, `>=`, `&&`, `||` are recognized by a single-character lookahead on
//! [`Cursor::peek`] after consuming the first character. A lone `&` or `|` — not followed
//! by its twin — is `Unknown`, not a single-character operator; a lone `!`, `<`, `>` is
//! the single-char `Operator`, and a lone `=` is `Assign`.

pub mod cursor;
pub mod token;


use cursor::Cursor;
use token::{is_keyword, Token, TokenKind};

/// Tokenize a single line of source, terminated by a single `Eof` token.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut cursor = Cursor::new(source);
    let mut tokens = Vec::new();

    while !cursor.is_at_end() {
        if let Some(token) = lex_token(&mut cursor) {
            tokens.push(token);
        }
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        lexeme: String::new(),
    });
    tracing::debug!(count = tokens.len(), "tokens produced");
    tokens
}

fn lex_token(cursor: &mut Cursor) -> Option<Token> {
    while matches!(cursor.peek(), Some(c) if c.is_whitespace()) {
        cursor.advance();
    }

    let ch = cursor.peek()?;

    let token = match ch {
        ';' => {
            cursor.advance();
            simple(TokenKind::Semicolon, ";")
        }
        '(' => {
            cursor.advance();
            simple(TokenKind::LParen, "(")
        }
        ')' => {
            cursor.advance();
            simple(TokenKind::RParen, ")")
        }
        '+' | '-' | '*' | '/' | '%' => {
            cursor.advance();
            simple(TokenKind::Operator, &ch.to_string())
        }
        '=' => lex_two_char(cursor, '=', "==", TokenKind::Assign, TokenKind::Operator),
        '!' => lex_two_char(cursor, '=', "!=", TokenKind::Operator, TokenKind::Operator),
        '<' => lex_two_char(cursor, '=', "<=", TokenKind::Operator, TokenKind::Operator),
        '>' => lex_two_char(cursor, '=', ">=", TokenKind::Operator, TokenKind::Operator),
        '&' => lex_doubled(cursor, '&', "&&"),
        '|' => lex_doubled(cursor, '|', "||"),
        c if c.is_ascii_digit() => lex_number(cursor),
        c if c.is_alphabetic() => lex_word(cursor),
        _ => {
            cursor.advance();
            simple(TokenKind::Unknown, &ch.to_string())
        }
    };

    Some(token)
}

fn simple(kind: TokenKind, lexeme: &str) -> Token {
    Token {
        kind,
        lexeme: lexeme.to_string(),
    }
}

/// The current character was already peeked (not consumed). If it's immediately followed
/// by `second`, consume both and emit `two_char_kind` with the combined lexeme; otherwise
/// consume just the first character and emit `one_char_kind`.
fn lex_two_char(
    cursor: &mut Cursor,
    second: char,
    two_char_lexeme: &str,
    one_char_kind: TokenKind,
    two_char_kind: TokenKind,
) -> Token {
    let first = cursor.advance().expect("caller peeked a character");
    if cursor.peek() == Some(second) {
        cursor.advance();
        simple(two_char_kind, two_char_lexeme)
    } else {
        simple(one_char_kind, &first.to_string())
    }
}

/// `&` and `|` only have a meaning when doubled; a lone one is `Unknown`.
fn lex_doubled(cursor: &mut Cursor, ch: char, doubled_lexeme: &str) -> Token {
    cursor.advance();
    if cursor.peek() == Some(ch) {
        cursor.advance();
        simple(TokenKind::Operator, doubled_lexeme)
    } else {
        simple(TokenKind::Unknown, &ch.to_string())
    }
}

fn lex_number(cursor: &mut Cursor) -> Token {
    let mut digits = String::new();
    while matches!(cursor.peek(), Some(c) if c.is_ascii_digit()) {
        digits.push(cursor.advance().unwrap());
    }
    simple(TokenKind::Number, &digits)
}

fn lex_word(cursor: &mut Cursor) -> Token {
    let mut word = String::new();
    while matches!(cursor.peek(), Some(c) if c.is_alphanumeric()) {
        word.push(cursor.advance().unwrap());
    }
    let kind = if is_keyword(&word) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };
    simple(kind, &word)
}
