//! Pure-Rust PGQL parser with rich diagnostics and a typed statement/expression AST.
//!
//! # Parse
//!
//! ```
//! use pgql_parser::parse_str;
//!
//! let source = "SELECT n.name FROM MATCH (n:Person) WHERE n.age > 18;";
//! let result = parse_str(source);
//! assert!(result.is_ok());
//! ```

pub mod ast;
pub mod diag;
pub mod lexer;
mod parser;

pub use ast::Statements;
pub use diag::{Diag, DiagLabel, DiagSeverity, LabelRole, ParseError};
pub use lexer::{Scanner, Token, TokenKind, tokenize};

/// Parses PGQL source from a stream of Unicode code points (§6.1).
///
/// This is the recommended entry point when the source isn't already
/// materialized as a `&str` — e.g. when decoding from something other than
/// UTF-8 in memory. Lexical and syntax diagnostics are merged into a single
/// [`ParseError`] on failure.
pub fn parse(source: impl Iterator<Item = char>) -> Result<Statements, ParseError> {
    let (tokens, lex_diagnostics) = Scanner::new(source).tokenize();
    parse_tokens(&tokens, lex_diagnostics)
}

/// Parses PGQL source text end-to-end (lexing + parsing).
pub fn parse_str(source: &str) -> Result<Statements, ParseError> {
    let (tokens, lex_diagnostics) = tokenize(source);
    parse_tokens(&tokens, lex_diagnostics)
}

fn parse_tokens(
    tokens: &[Token],
    lex_diagnostics: Vec<Diag>,
) -> Result<Statements, ParseError> {
    match parser::parse_statements(tokens) {
        Ok(stmts) if lex_diagnostics.is_empty() => Ok(stmts),
        Ok(_) => Err(ParseError::from_diagnostics(
            lex_diagnostics,
            tokens.first().map(|t| t.pos).unwrap_or_default(),
        )),
        Err((pos, mut parse_diagnostics)) => {
            let mut diagnostics = lex_diagnostics;
            diagnostics.append(&mut parse_diagnostics);
            Err(ParseError::from_diagnostics(diagnostics, pos))
        }
    }
}
