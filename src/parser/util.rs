//! Small helpers shared across the statement, pattern, and expression
//! parsers: identifier parsing/unquoting and qualified-name chaining.

use crate::ast::{Ident, QIdent};
use crate::lexer::TokenKind;

use super::base::{ParseResult, TokenStream};

/// Unquotes a `QUOTED_IDENTIFIER` raw lexeme (§4.3 rule 3, §6.4).
///
/// # Panics
///
/// Panics if `raw` is not `"..."`-bounded — the scanner guarantees this
/// shape for every `QuotedIdentifier` token, so a violation here means the
/// scanner itself is broken, not that the input is malformed.
pub fn unquote_identifier(raw: &str) -> String {
    assert!(
        raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"'),
        "quoted identifier must be \"...\"-bounded: {raw:?}"
    );
    raw[1..raw.len() - 1].replace("\"\"", "\"")
}

/// Parses a single identifier, unquoting it if it was written as a
/// `QUOTED_IDENTIFIER`.
pub fn parse_ident(ts: &mut TokenStream) -> ParseResult<Ident> {
    let tok = ts.current();
    match tok.kind {
        TokenKind::UnquotedIdentifier => {
            let pos = tok.pos;
            let name = tok.text.clone().expect("unquoted identifier always carries text");
            ts.advance();
            Ok(Ident::new(name, pos))
        }
        TokenKind::QuotedIdentifier => {
            let pos = tok.pos;
            let raw = tok.text.clone().expect("quoted identifier always carries text");
            ts.advance();
            Ok(Ident::new(unquote_identifier(&raw), pos))
        }
        _ => Err(ts.error_here(format!("expected identifier, found {}", tok.kind))),
    }
}

/// Parses a dot-separated qualified name: `a`, `a.b`, `a.b.c`, ... (§4.2
/// "Qualified names use `.` as a primary-level postfix").
pub fn parse_qident(ts: &mut TokenStream) -> ParseResult<QIdent> {
    let mut names = vec![parse_ident(ts)?];
    while ts.consume(TokenKind::Dot) {
        names.push(parse_ident(ts)?);
    }
    Ok(QIdent::new(names))
}

/// Parses a parenthesized, comma-separated identifier list: `(a, b, c)`.
pub fn parse_ident_list(ts: &mut TokenStream) -> ParseResult<Vec<Ident>> {
    ts.expect(TokenKind::LParen)?;
    let mut idents = vec![parse_ident(ts)?];
    while ts.consume(TokenKind::Comma) {
        idents.push(parse_ident(ts)?);
    }
    ts.expect(TokenKind::RParen)?;
    Ok(idents)
}
