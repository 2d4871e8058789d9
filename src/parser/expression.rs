//! Expression parsing: precedence climbing over the 9-level table in §4.2.

use crate::ast::{
    BasicLit, BindVar, CallExpr, CaseExpr, CaseWhen, CastExpr, CastType, Expr, InExpr, LiteralKind,
    Op, OpExpr, QIdent, SubqueryExpr,
};
use crate::lexer::TokenKind;

use super::base::{ParseResult, TokenStream};
use super::stmt::parse_select_stmt;
use super::util::{parse_ident, parse_qident};

/// Entry point: parses a full expression starting at the lowest precedence
/// level (`OR`).
pub fn parse_expr(ts: &mut TokenStream) -> ParseResult<Expr> {
    parse_or(ts)
}

fn parse_or(ts: &mut TokenStream) -> ParseResult<Expr> {
    let mut lhs = parse_and(ts)?;
    while ts.check(TokenKind::Or) {
        let pos = ts.current().pos;
        ts.advance();
        let rhs = parse_and(ts)?;
        lhs = Expr::Op(OpExpr { op: Op::Or, args: vec![lhs, rhs], pos });
    }
    Ok(lhs)
}

fn parse_and(ts: &mut TokenStream) -> ParseResult<Expr> {
    let mut lhs = parse_not(ts)?;
    while ts.check(TokenKind::And) {
        let pos = ts.current().pos;
        ts.advance();
        let rhs = parse_not(ts)?;
        lhs = Expr::Op(OpExpr { op: Op::And, args: vec![lhs, rhs], pos });
    }
    Ok(lhs)
}

/// Prefix `NOT`, right-associative (§4.2 level 3).
fn parse_not(ts: &mut TokenStream) -> ParseResult<Expr> {
    if ts.check(TokenKind::Not) {
        let pos = ts.current().pos;
        ts.advance();
        let operand = parse_not(ts)?;
        Ok(Expr::Op(OpExpr { op: Op::Not, args: vec![operand], pos }))
    } else {
        parse_comparison(ts)
    }
}

fn parse_comparison(ts: &mut TokenStream) -> ParseResult<Expr> {
    let mut lhs = parse_concat(ts)?;
    loop {
        let pos = ts.current().pos;
        let op = match ts.current().kind {
            TokenKind::Eq => Op::Eq,
            TokenKind::LtGt => Op::NotEq,
            TokenKind::Lt => Op::Lt,
            TokenKind::Gt => Op::Gt,
            TokenKind::LtEq => Op::LtEq,
            TokenKind::GtEq => Op::GtEq,
            TokenKind::In => {
                ts.advance();
                lhs = parse_in_rhs(ts, lhs, false, pos)?;
                continue;
            }
            TokenKind::Not if ts.peek().map(|t| t.kind) == Some(TokenKind::In) => {
                ts.advance();
                ts.advance();
                lhs = parse_in_rhs(ts, lhs, true, pos)?;
                continue;
            }
            TokenKind::Is => {
                ts.advance();
                let negated = ts.consume(TokenKind::Not);
                ts.expect(TokenKind::Null)?;
                let op = if negated { Op::IsNotNull } else { Op::IsNull };
                lhs = Expr::Op(OpExpr { op, args: vec![lhs], pos });
                continue;
            }
            _ => break,
        };
        ts.advance();
        let rhs = parse_concat(ts)?;
        lhs = Expr::Op(OpExpr { op, args: vec![lhs, rhs], pos });
    }
    Ok(lhs)
}

fn parse_in_rhs(ts: &mut TokenStream, subject: Expr, inv: bool, pos: crate::ast::Position) -> ParseResult<Expr> {
    if ts.consume(TokenKind::Question) {
        return Ok(Expr::In(InExpr {
            subject: Box::new(subject),
            objects: Vec::new(),
            inv,
            bind_var: true,
            pos,
        }));
    }
    ts.expect(TokenKind::LParen)?;
    let mut objects = vec![parse_expr(ts)?];
    while ts.consume(TokenKind::Comma) {
        objects.push(parse_expr(ts)?);
    }
    ts.expect(TokenKind::RParen)?;
    Ok(Expr::In(InExpr { subject: Box::new(subject), objects, inv, bind_var: false, pos }))
}

fn parse_concat(ts: &mut TokenStream) -> ParseResult<Expr> {
    let mut lhs = parse_additive(ts)?;
    while ts.check(TokenKind::DPipe) {
        let pos = ts.current().pos;
        ts.advance();
        let rhs = parse_additive(ts)?;
        lhs = Expr::Op(OpExpr { op: Op::Concat, args: vec![lhs, rhs], pos });
    }
    Ok(lhs)
}

fn parse_additive(ts: &mut TokenStream) -> ParseResult<Expr> {
    let mut lhs = parse_multiplicative(ts)?;
    loop {
        let pos = ts.current().pos;
        let op = match ts.current().kind {
            TokenKind::Plus => Op::Add,
            TokenKind::Minus => Op::Sub,
            _ => break,
        };
        ts.advance();
        let rhs = parse_multiplicative(ts)?;
        lhs = Expr::Op(OpExpr { op, args: vec![lhs, rhs], pos });
    }
    Ok(lhs)
}

fn parse_multiplicative(ts: &mut TokenStream) -> ParseResult<Expr> {
    let mut lhs = parse_unary(ts)?;
    loop {
        let pos = ts.current().pos;
        let op = match ts.current().kind {
            TokenKind::Star => Op::Mul,
            TokenKind::Slash => Op::Div,
            TokenKind::Percent => Op::Mod,
            _ => break,
        };
        ts.advance();
        let rhs = parse_unary(ts)?;
        lhs = Expr::Op(OpExpr { op, args: vec![lhs, rhs], pos });
    }
    Ok(lhs)
}

fn parse_unary(ts: &mut TokenStream) -> ParseResult<Expr> {
    if ts.check(TokenKind::Minus) {
        let pos = ts.current().pos;
        ts.advance();
        let operand = parse_unary(ts)?;
        Ok(Expr::Op(OpExpr { op: Op::Neg, args: vec![operand], pos }))
    } else {
        parse_primary(ts)
    }
}

fn parse_primary(ts: &mut TokenStream) -> ParseResult<Expr> {
    let tok = ts.current().clone();
    let pos = tok.pos;
    match tok.kind {
        TokenKind::UnsignedInteger => {
            ts.advance();
            Ok(Expr::BasicLit(BasicLit::new(
                tok.text.expect("literal carries text"),
                LiteralKind::UnsignedInteger,
                pos,
            )))
        }
        TokenKind::UnsignedDecimal => {
            ts.advance();
            Ok(Expr::BasicLit(BasicLit::new(
                tok.text.expect("literal carries text"),
                LiteralKind::UnsignedDecimal,
                pos,
            )))
        }
        TokenKind::StringLiteral => {
            ts.advance();
            Ok(Expr::BasicLit(BasicLit::new(
                tok.text.expect("literal carries text"),
                LiteralKind::String,
                pos,
            )))
        }
        TokenKind::True => {
            ts.advance();
            Ok(Expr::BasicLit(BasicLit::new("true", LiteralKind::Bool, pos)))
        }
        TokenKind::False => {
            ts.advance();
            Ok(Expr::BasicLit(BasicLit::new("false", LiteralKind::Bool, pos)))
        }
        TokenKind::Question => {
            ts.advance();
            Ok(Expr::BindVar(BindVar { pos }))
        }
        TokenKind::Date | TokenKind::Time | TokenKind::Timestamp => {
            ts.advance();
            let kind = match tok.kind {
                TokenKind::Date => LiteralKind::Date,
                TokenKind::Time => LiteralKind::Time,
                _ => LiteralKind::Timestamp,
            };
            let raw = ts.expect(TokenKind::StringLiteral).map(|_| {
                ts.tokens()[ts.position() - 1].text.clone().expect("string literal carries text")
            })?;
            Ok(Expr::BasicLit(BasicLit::new(raw, kind, pos)))
        }
        TokenKind::Interval => {
            ts.advance();
            ts.expect(TokenKind::StringLiteral)?;
            let quantity =
                ts.tokens()[ts.position() - 1].text.clone().expect("string literal carries text");
            let unit = parse_temporal_unit(ts)?;
            Ok(Expr::BasicLit(BasicLit::new(format!("{quantity} {unit}"), LiteralKind::Interval, pos)))
        }
        TokenKind::Cast => parse_cast(ts, pos),
        TokenKind::Case => parse_case(ts, pos),
        TokenKind::Substring => parse_simple_call(ts, pos, "SUBSTRING"),
        TokenKind::Extract => parse_extract(ts, pos),
        TokenKind::Label => parse_simple_call(ts, pos, "LABEL"),
        TokenKind::Labels => parse_simple_call(ts, pos, "LABELS"),
        TokenKind::Count => parse_aggregate(ts, pos, Op::Count),
        TokenKind::Min => parse_aggregate(ts, pos, Op::Min),
        TokenKind::Max => parse_aggregate(ts, pos, Op::Max),
        TokenKind::Avg => parse_aggregate(ts, pos, Op::Avg),
        TokenKind::Sum => parse_aggregate(ts, pos, Op::Sum),
        TokenKind::ArrayAgg => parse_aggregate(ts, pos, Op::ArrayAgg),
        TokenKind::Listagg => parse_listagg(ts, pos),
        TokenKind::Exists => {
            ts.advance();
            ts.expect(TokenKind::LParen)?;
            let query = parse_select_stmt(ts)?;
            ts.expect(TokenKind::RParen)?;
            Ok(Expr::Subquery(SubqueryExpr { query: Box::new(query), exists: true, pos }))
        }
        TokenKind::LParen => {
            ts.advance();
            if ts.check(TokenKind::Select) {
                let query = parse_select_stmt(ts)?;
                ts.expect(TokenKind::RParen)?;
                Ok(Expr::Subquery(SubqueryExpr { query: Box::new(query), exists: false, pos }))
            } else {
                let inner = parse_expr(ts)?;
                ts.expect(TokenKind::RParen)?;
                Ok(inner)
            }
        }
        TokenKind::UnquotedIdentifier | TokenKind::QuotedIdentifier => {
            let qident = parse_qident(ts)?;
            if ts.check(TokenKind::LParen) {
                parse_call(ts, qident)
            } else {
                Ok(Expr::QIdent(qident))
            }
        }
        _ => Err(ts.error_here(format!("unexpected token {} in expression", tok.kind))),
    }
}

fn parse_temporal_unit(ts: &mut TokenStream) -> ParseResult<&'static str> {
    let tok = ts.current().clone();
    let unit = match tok.kind {
        TokenKind::Year => "YEAR",
        TokenKind::Month => "MONTH",
        TokenKind::Day => "DAY",
        TokenKind::Hour => "HOUR",
        TokenKind::Minute => "MINUTE",
        TokenKind::Second => "SECOND",
        _ => return Err(ts.error_here(format!("expected interval unit, found {}", tok.kind))),
    };
    ts.advance();
    Ok(unit)
}

fn parse_cast(ts: &mut TokenStream, pos: crate::ast::Position) -> ParseResult<Expr> {
    ts.advance(); // CAST
    ts.expect(TokenKind::LParen)?;
    let arg = parse_expr(ts)?;
    ts.expect(TokenKind::As)?;
    let tok = ts.current().clone();
    let type_kind = match tok.kind {
        TokenKind::String => CastType::String,
        TokenKind::Boolean => CastType::Boolean,
        TokenKind::Integer => CastType::Integer,
        TokenKind::Int => CastType::Int,
        TokenKind::Long => CastType::Long,
        TokenKind::Float => CastType::Float,
        TokenKind::Double => CastType::Double,
        _ => return Err(ts.error_here(format!("expected a cast target type, found {}", tok.kind))),
    };
    ts.advance();
    ts.expect(TokenKind::RParen)?;
    Ok(Expr::Cast(CastExpr { arg: Box::new(arg), type_kind, pos }))
}

fn parse_case(ts: &mut TokenStream, pos: crate::ast::Position) -> ParseResult<Expr> {
    ts.advance(); // CASE
    let subject =
        if ts.check(TokenKind::When) { None } else { Some(Box::new(parse_expr(ts)?)) };
    let mut whens = Vec::new();
    ts.expect(TokenKind::When)?;
    loop {
        let cond = parse_expr(ts)?;
        ts.expect(TokenKind::Then)?;
        let then = parse_expr(ts)?;
        whens.push(CaseWhen { cond, then });
        if !ts.consume(TokenKind::When) {
            break;
        }
    }
    let els = if ts.consume(TokenKind::Else) { Some(Box::new(parse_expr(ts)?)) } else { None };
    ts.expect(TokenKind::End)?;
    Ok(Expr::Case(CaseExpr { subject, whens, els, pos }))
}

fn parse_extract(ts: &mut TokenStream, pos: crate::ast::Position) -> ParseResult<Expr> {
    ts.advance(); // EXTRACT
    ts.expect(TokenKind::LParen)?;
    let field_tok = ts.current().clone();
    let field_name = field_tok.kind.to_string();
    match field_tok.kind {
        TokenKind::Year
        | TokenKind::Month
        | TokenKind::Day
        | TokenKind::Hour
        | TokenKind::Minute
        | TokenKind::Second
        | TokenKind::TimezoneHour
        | TokenKind::TimezoneMinute => ts.advance(),
        _ => return Err(ts.error_here(format!("expected extract field, found {}", field_tok.kind))),
    }
    ts.expect(TokenKind::From)?;
    let arg = parse_expr(ts)?;
    ts.expect(TokenKind::RParen)?;
    let func = QIdent::single(crate::ast::Ident::new("EXTRACT", pos));
    let field = Expr::Ident(crate::ast::Ident::new(field_name, field_tok.pos));
    Ok(Expr::Call(CallExpr { func, args: vec![field, arg] }))
}

fn parse_simple_call(ts: &mut TokenStream, pos: crate::ast::Position, name: &str) -> ParseResult<Expr> {
    ts.advance();
    ts.expect(TokenKind::LParen)?;
    let mut args = vec![parse_expr(ts)?];
    while ts.consume(TokenKind::Comma) {
        args.push(parse_expr(ts)?);
    }
    ts.expect(TokenKind::RParen)?;
    let func = QIdent::single(crate::ast::Ident::new(name, pos));
    Ok(Expr::Call(CallExpr { func, args }))
}

fn parse_call(ts: &mut TokenStream, func: QIdent) -> ParseResult<Expr> {
    ts.expect(TokenKind::LParen)?;
    let mut args = Vec::new();
    if !ts.check(TokenKind::RParen) {
        args.push(parse_expr(ts)?);
        while ts.consume(TokenKind::Comma) {
            args.push(parse_expr(ts)?);
        }
    }
    ts.expect(TokenKind::RParen)?;
    Ok(Expr::Call(CallExpr { func, args }))
}

fn parse_aggregate(ts: &mut TokenStream, pos: crate::ast::Position, op: Op) -> ParseResult<Expr> {
    ts.advance();
    ts.expect(TokenKind::LParen)?;
    let distinct = ts.consume(TokenKind::Distinct);
    let mut args = vec![Expr::BasicLit(BasicLit::bool_flag(distinct, pos))];
    if !(op == Op::Count && ts.consume(TokenKind::Star)) {
        // COUNT(*) takes no further arguments (§3.2); every other aggregate
        // form takes exactly one.
        args.push(parse_expr(ts)?);
    }
    ts.expect(TokenKind::RParen)?;
    Ok(Expr::Op(OpExpr { op, args, pos }))
}

fn parse_listagg(ts: &mut TokenStream, pos: crate::ast::Position) -> ParseResult<Expr> {
    ts.advance();
    ts.expect(TokenKind::LParen)?;
    let distinct = ts.consume(TokenKind::Distinct);
    let mut args = vec![Expr::BasicLit(BasicLit::bool_flag(distinct, pos))];
    args.push(parse_expr(ts)?);
    if ts.consume(TokenKind::Comma) {
        args.push(parse_expr(ts)?);
    }
    ts.expect(TokenKind::RParen)?;
    Ok(Expr::Op(OpExpr { op: Op::ListAgg, args, pos }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse(src: &str) -> Expr {
        let (tokens, diags) = tokenize(src);
        assert!(diags.is_empty(), "{diags:?}");
        let mut ts = TokenStream::new(&tokens);
        parse_expr(&mut ts).unwrap()
    }

    #[test]
    fn additive_before_multiplicative_precedence() {
        // 2 + 3 * 4 => Add(2, Mul(3, 4))
        let expr = parse("2 + 3 * 4");
        match expr {
            Expr::Op(OpExpr { op: Op::Add, args, .. }) => {
                assert!(matches!(&args[0], Expr::BasicLit(_)));
                assert!(matches!(&args[1], Expr::Op(OpExpr { op: Op::Mul, .. })));
            }
            other => panic!("expected Add at top, got {other:?}"),
        }
    }

    #[test]
    fn multiplicative_before_additive_on_the_left() {
        // 2 * 3 + 4 => Add(Mul(2, 3), 4)
        let expr = parse("2 * 3 + 4");
        match expr {
            Expr::Op(OpExpr { op: Op::Add, args, .. }) => {
                assert!(matches!(&args[0], Expr::Op(OpExpr { op: Op::Mul, .. })));
                assert!(matches!(&args[1], Expr::BasicLit(_)));
            }
            other => panic!("expected Add at top, got {other:?}"),
        }
    }

    #[test]
    fn equality_uses_eq_operator() {
        let expr = parse("a = b");
        assert!(matches!(expr, Expr::Op(OpExpr { op: Op::Eq, .. })));
    }

    #[test]
    fn qualified_name_chains_three_parts() {
        let expr = parse("a.b.c");
        match expr {
            Expr::QIdent(q) => assert_eq!(q.names.len(), 3),
            other => panic!("expected QIdent, got {other:?}"),
        }
    }

    #[test]
    fn count_distinct_aggregate() {
        let expr = parse("COUNT(DISTINCT 2)");
        match expr {
            Expr::Op(OpExpr { op: Op::Count, args, .. }) => {
                assert_eq!(args.len(), 2);
                match &args[0] {
                    Expr::BasicLit(lit) => assert!(lit.as_bool()),
                    _ => panic!("expected DISTINCT flag literal"),
                }
            }
            other => panic!("expected Count OpExpr, got {other:?}"),
        }
    }

    #[test]
    fn count_star_has_only_distinct_flag() {
        let expr = parse("COUNT(*)");
        match expr {
            Expr::Op(OpExpr { op: Op::Count, args, .. }) => assert_eq!(args.len(), 1),
            other => panic!("expected Count OpExpr, got {other:?}"),
        }
    }

    #[test]
    fn bind_variable_is_recognized() {
        assert!(matches!(parse("?"), Expr::BindVar(_)));
    }

    #[test]
    fn in_bind_variable_form() {
        let expr = parse("a IN ?");
        match expr {
            Expr::In(InExpr { bind_var, objects, .. }) => {
                assert!(bind_var);
                assert!(objects.is_empty());
            }
            other => panic!("expected InExpr, got {other:?}"),
        }
    }

    #[test]
    fn not_in_sets_inv_flag() {
        let expr = parse("a NOT IN (1, 2)");
        match expr {
            Expr::In(InExpr { inv, objects, .. }) => {
                assert!(inv);
                assert_eq!(objects.len(), 2);
            }
            other => panic!("expected InExpr, got {other:?}"),
        }
    }

    #[test]
    fn is_not_null_predicate() {
        let expr = parse("a IS NOT NULL");
        assert!(matches!(expr, Expr::Op(OpExpr { op: Op::IsNotNull, .. })));
    }

    #[test]
    fn prefix_not_binds_looser_than_comparison() {
        // NOT a = b => Not(Eq(a, b))
        let expr = parse("NOT a = b");
        match expr {
            Expr::Op(OpExpr { op: Op::Not, args, .. }) => {
                assert!(matches!(&args[0], Expr::Op(OpExpr { op: Op::Eq, .. })));
            }
            other => panic!("expected Not at top, got {other:?}"),
        }
    }

    #[test]
    fn cast_parses_target_type() {
        let expr = parse("CAST(a AS INTEGER)");
        assert!(matches!(expr, Expr::Cast(CastExpr { type_kind: CastType::Integer, .. })));
    }

    #[test]
    fn searched_case_without_subject() {
        let expr = parse("CASE WHEN a = 1 THEN 2 ELSE 3 END");
        match expr {
            Expr::Case(CaseExpr { subject, whens, els, .. }) => {
                assert!(subject.is_none());
                assert_eq!(whens.len(), 1);
                assert!(els.is_some());
            }
            other => panic!("expected CaseExpr, got {other:?}"),
        }
    }

    #[test]
    fn function_call_with_args() {
        let expr = parse("myfunc(a, 1)");
        match expr {
            Expr::Call(CallExpr { func, args }) => {
                assert_eq!(func.first().name, "myfunc");
                assert_eq!(args.len(), 2);
            }
            other => panic!("expected CallExpr, got {other:?}"),
        }
    }

    #[test]
    fn parenthesized_expression_unwraps() {
        let expr = parse("(1 + 2) * 3");
        assert!(matches!(expr, Expr::Op(OpExpr { op: Op::Mul, .. })));
    }
}
