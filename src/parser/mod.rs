//! Turns a token slice into [`Statements`](crate::ast::Statements).
//!
//! Grammar is split across sibling modules by concern (expressions, path
//! patterns, statements); this module only sequences top-level statements
//! and dispatches each one to its parser (§4.2).

mod base;
mod expression;
mod pattern;
mod stmt;
mod util;

pub(crate) use base::{ParseResult, TokenStream};

use crate::ast::{Position, Stmt, Statements};
use crate::diag::Diag;
use crate::lexer::{Token, TokenKind};

fn parse_stmt(ts: &mut TokenStream) -> ParseResult<Stmt> {
    match ts.current().kind {
        TokenKind::Create => stmt::parse_create_stmt(ts).map(Stmt::Create),
        TokenKind::Drop => stmt::parse_drop_stmt(ts).map(Stmt::Drop),
        _ => {
            let macros = stmt::parse_path_macros(ts)?;
            if ts.check(TokenKind::Select) {
                let mut select = stmt::parse_select_stmt(ts)?;
                select.path_macros = macros;
                Ok(Stmt::Select(select))
            } else {
                let mut modify = stmt::parse_modify_stmt(ts)?;
                modify.path_macros = macros;
                stmt::validate_modify_shape(ts, &modify);
                Ok(Stmt::Modify(modify))
            }
        }
    }
}

/// Parses a full statement sequence: each statement must be terminated by a
/// `;` (§4.2 "Statement separation"). Lexical, syntax, and validation
/// diagnostics are all accumulated and returned together; parsing does not
/// attempt error recovery past the first unrecoverable statement (§7).
pub fn parse_statements(tokens: &[Token]) -> Result<Statements, (Position, Vec<Diag>)> {
    let mut ts = TokenStream::new(tokens);
    let mut stmts = Vec::new();
    let mut diagnostics = Vec::new();

    while !ts.check(TokenKind::Eof) {
        match parse_stmt(&mut ts) {
            Ok(stmt) => {
                diagnostics.extend(ts.take_errors());
                if let Err(err) = ts.expect(TokenKind::Semicolon) {
                    diagnostics.push(*err);
                    return Err((ts.current().pos, diagnostics));
                }
                stmts.push(stmt);
            }
            Err(err) => {
                let pos = err.primary_pos().unwrap_or(ts.current().pos);
                diagnostics.push(*err);
                diagnostics.extend(ts.take_errors());
                return Err((pos, diagnostics));
            }
        }
    }

    if diagnostics.is_empty() {
        Ok(Statements { stmts })
    } else {
        let pos = diagnostics.last().and_then(Diag::primary_pos).unwrap_or(Position::START);
        Err((pos, diagnostics))
    }
}
