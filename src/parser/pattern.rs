//! Graph pattern parsing: `MATCH` clauses, path patterns, vertex/edge
//! primaries, quantifiers, and the cardinality/metric prefix (§4.2 "Pattern
//! grammar").

use crate::ast::{
    Cardinality, Dir, EdgePattern, Ident, MatchClause, MatchRows, MatchRowsKind, Metric,
    PathPattern, PathPatternPrimary, Quantifier, VertexPattern,
};
use crate::lexer::TokenKind;

use super::base::{ParseResult, TokenStream};
use super::expression::parse_expr;
use super::util::{parse_ident, parse_qident};

/// True for the tokens that can start an (unbracketed or bracketed) edge
/// primary (§4.1 operator table, §4.2 "Edge pattern").
fn is_edge_start(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::RArrow
            | TokenKind::LArrow
            | TokenKind::Minus
            | TokenKind::LDashBracket
            | TokenKind::LArrowBracket
            | TokenKind::LDashSlash
            | TokenKind::LArrowSlash
    )
}

/// One or more comma-separated `MATCH(...)` clauses making up a `FROM`
/// (or modify-statement `FROM`) clause.
///
/// A comma after a match clause's pattern list continues the *same* clause
/// with another pattern unless the next token is `MATCH`, in which case it
/// starts a new clause — both forms use `,` so the keyword is the only
/// disambiguator (§4.2).
pub fn parse_match_clause_list(ts: &mut TokenStream) -> ParseResult<Vec<MatchClause>> {
    let mut clauses = vec![parse_match_clause(ts)?];
    while ts.check(TokenKind::Comma) {
        let checkpoint = ts.position();
        ts.advance();
        if ts.check(TokenKind::Match) {
            clauses.push(parse_match_clause(ts)?);
        } else {
            ts.set_position(checkpoint);
            break;
        }
    }
    Ok(clauses)
}

fn parse_match_clause(ts: &mut TokenStream) -> ParseResult<MatchClause> {
    let pos = ts.expect(TokenKind::Match)?;
    let mut patterns = vec![parse_path_pattern(ts)?];
    loop {
        if !ts.check(TokenKind::Comma) {
            break;
        }
        let checkpoint = ts.position();
        ts.advance();
        if ts.check(TokenKind::Match) {
            ts.set_position(checkpoint);
            break;
        }
        patterns.push(parse_path_pattern(ts)?);
    }
    let on = if ts.consume(TokenKind::On) { Some(parse_qident(ts)?) } else { None };
    let rows = if ts.check(TokenKind::One) { Some(parse_match_rows(ts)?) } else { None };
    Ok(MatchClause { on, rows, patterns, pos })
}

fn parse_match_rows(ts: &mut TokenStream) -> ParseResult<MatchRows> {
    ts.expect(TokenKind::One)?;
    ts.expect(TokenKind::Row)?;
    ts.expect(TokenKind::Per)?;
    if ts.consume(TokenKind::Match) {
        return Ok(MatchRows { vars: Vec::new(), kind: MatchRowsKind::OneRowPerMatch });
    }
    if ts.consume(TokenKind::Vertex) {
        ts.expect(TokenKind::LParen)?;
        let var = parse_ident(ts)?;
        ts.expect(TokenKind::RParen)?;
        return Ok(MatchRows { vars: vec![var], kind: MatchRowsKind::OneRowPerVertex });
    }
    ts.expect(TokenKind::Step)?;
    ts.expect(TokenKind::LParen)?;
    let v1 = parse_ident(ts)?;
    ts.expect(TokenKind::Comma)?;
    let v2 = parse_ident(ts)?;
    ts.expect(TokenKind::Comma)?;
    let v3 = parse_ident(ts)?;
    ts.expect(TokenKind::RParen)?;
    Ok(MatchRows { vars: vec![v1, v2, v3], kind: MatchRowsKind::OneRowPerStep })
}

/// Parses one path pattern, including its cardinality/metric prefix and the
/// §4.3 rule-1 ALL-upper-bound validation.
pub fn parse_path_pattern(ts: &mut TokenStream) -> ParseResult<PathPattern> {
    let pos = ts.current().pos;
    let (cardinality, metric) = parse_cardinality_metric(ts)?;

    let checkpoint = ts.position();
    let (vs, es) = match parse_path_pattern_body(ts) {
        Ok(body) => body,
        Err(e) => {
            ts.set_position(checkpoint);
            if ts.check(TokenKind::LParen) {
                ts.advance();
                let body = parse_path_pattern_body(ts)?;
                ts.expect(TokenKind::RParen)?;
                body
            } else {
                return Err(e);
            }
        }
    };

    let pattern = PathPattern { vs, es, cardinality, metric, pos };
    validate_all_cardinality(ts, &pattern);
    Ok(pattern)
}

/// Validation rule 1 (§4.3): an `ALL` pattern with no metric requires every
/// primary's quantifier to carry an upper bound.
fn validate_all_cardinality(ts: &mut TokenStream, pattern: &PathPattern) {
    if !matches!(pattern.cardinality, Cardinality::All) || !matches!(pattern.metric, Metric::None)
    {
        return;
    }
    for primary in &pattern.es {
        let (has_upper_bound, pos) = if let Some(edge) = primary.es.first() {
            (edge.quantifier.is_some_and(|q| q.has_upper_bound()), edge.pos)
        } else {
            (primary.quantifier.is_some_and(|q| q.has_upper_bound()), pattern.pos)
        };
        if !has_upper_bound {
            ts.push_error(pos, "an ALL pattern must have an upper bound quantifier");
        }
    }
}

fn parse_cardinality_metric(ts: &mut TokenStream) -> ParseResult<(Cardinality, Metric)> {
    let cardinality = match ts.current().kind {
        TokenKind::Any => {
            ts.advance();
            Cardinality::Any
        }
        TokenKind::All => {
            ts.advance();
            Cardinality::All
        }
        TokenKind::Top => {
            ts.advance();
            Cardinality::Top(parse_uint(ts)?)
        }
        _ => Cardinality::None,
    };
    let metric = if matches!(cardinality, Cardinality::None) {
        Metric::None
    } else if ts.consume(TokenKind::Shortest) {
        Metric::Length
    } else if ts.consume(TokenKind::Cheapest) {
        Metric::Cost
    } else {
        Metric::None
    };
    Ok((cardinality, metric))
}

fn parse_uint(ts: &mut TokenStream) -> ParseResult<u64> {
    let tok = ts.current().clone();
    match tok.kind {
        TokenKind::UnsignedInteger => {
            ts.advance();
            tok.text
                .expect("integer literal carries text")
                .parse::<u64>()
                .map_err(|_| ts.error_here("integer literal out of range"))
        }
        other => Err(ts.error_here(format!("expected an unsigned integer, found {other}"))),
    }
}

/// A non-empty sequence of vertex patterns interleaved with path primaries
/// (§3.3: N vertices, N−1 primaries).
fn parse_path_pattern_body(
    ts: &mut TokenStream,
) -> ParseResult<(Vec<VertexPattern>, Vec<PathPatternPrimary>)> {
    let mut vs = vec![parse_vertex_pattern(ts)?];
    let mut es = Vec::new();
    loop {
        if is_edge_start(ts.current().kind) {
            es.push(parse_edge_primary(ts)?);
            vs.push(parse_vertex_pattern(ts)?);
        } else if ts.check(TokenKind::LParen) {
            es.push(parse_subpattern_primary(ts)?);
            vs.push(parse_vertex_pattern(ts)?);
        } else {
            break;
        }
    }
    Ok((vs, es))
}

fn parse_vertex_pattern(ts: &mut TokenStream) -> ParseResult<VertexPattern> {
    let pos = ts.expect(TokenKind::LParen)?;
    let name = parse_name_opt(ts)?;
    let labels = parse_labels_opt(ts)?;
    ts.expect(TokenKind::RParen)?;
    Ok(VertexPattern { name, labels, pos })
}

fn parse_name_opt(ts: &mut TokenStream) -> ParseResult<Option<Ident>> {
    if matches!(ts.current().kind, TokenKind::UnquotedIdentifier | TokenKind::QuotedIdentifier) {
        Ok(Some(parse_ident(ts)?))
    } else {
        Ok(None)
    }
}

/// `(':' | IS) label ('|' label)*`.
fn parse_labels_opt(ts: &mut TokenStream) -> ParseResult<Vec<Ident>> {
    if ts.consume(TokenKind::Colon) || ts.consume(TokenKind::Is) {
        let mut labels = vec![parse_ident(ts)?];
        while ts.consume(TokenKind::Pipe) {
            labels.push(parse_ident(ts)?);
        }
        Ok(labels)
    } else {
        Ok(Vec::new())
    }
}

/// A parenthesized sub-pattern in place of an edge primary: its own nested
/// vertices/primaries, optional `WHERE`/`COST`, and a trailing quantifier on
/// the group as a whole (§4.2 "parenthesized sub-pattern").
fn parse_subpattern_primary(ts: &mut TokenStream) -> ParseResult<PathPatternPrimary> {
    ts.expect(TokenKind::LParen)?;
    let (vs, es) = parse_path_pattern_body(ts)?;
    let where_clause = if ts.consume(TokenKind::Where) { Some(parse_expr(ts)?) } else { None };
    let cost = if ts.consume(TokenKind::Cost) { Some(parse_expr(ts)?) } else { None };
    ts.expect(TokenKind::RParen)?;
    let quantifier = parse_quantifier_opt(ts)?;
    Ok(PathPatternPrimary {
        quantifier,
        where_clause,
        cost,
        vs: vs.into_iter().map(Some).collect(),
        es,
    })
}

/// A single edge primary: `-`, `->`, `<-`, a bracketed or reachability form.
/// Always produces a `PathPatternPrimary` with exactly one `EdgePattern` and
/// no vertices of its own (§3.3).
fn parse_edge_primary(ts: &mut TokenStream) -> ParseResult<PathPatternPrimary> {
    let pos = ts.current().pos;
    match ts.current().kind {
        TokenKind::RArrow => {
            ts.advance();
            finish_edge(ts, pos, Dir::Outgoing, false, None, Vec::new(), None, None)
        }
        TokenKind::LArrow => {
            ts.advance();
            finish_edge(ts, pos, Dir::Incoming, false, None, Vec::new(), None, None)
        }
        TokenKind::Minus => {
            ts.advance();
            finish_edge(ts, pos, Dir::Any, false, None, Vec::new(), None, None)
        }
        TokenKind::LDashBracket => {
            ts.advance();
            let (name, labels, where_clause, cost) = parse_edge_details(ts)?;
            let dir = if ts.consume(TokenKind::RBracketArrow) {
                Dir::Outgoing
            } else {
                ts.expect(TokenKind::RBracketDash)?;
                Dir::Any
            };
            finish_edge(ts, pos, dir, false, name, labels, where_clause, cost)
        }
        TokenKind::LArrowBracket => {
            ts.advance();
            let (name, labels, where_clause, cost) = parse_edge_details(ts)?;
            ts.expect(TokenKind::RBracketDash)?;
            finish_edge(ts, pos, Dir::Incoming, false, name, labels, where_clause, cost)
        }
        TokenKind::LDashSlash => {
            ts.advance();
            let (name, labels, where_clause, cost) = parse_edge_details(ts)?;
            let dir = if ts.consume(TokenKind::RSlashArrow) {
                Dir::Outgoing
            } else {
                ts.expect(TokenKind::RSlashDash)?;
                Dir::Any
            };
            finish_edge(ts, pos, dir, true, name, labels, where_clause, cost)
        }
        TokenKind::LArrowSlash => {
            ts.advance();
            let (name, labels, where_clause, cost) = parse_edge_details(ts)?;
            ts.expect(TokenKind::RSlashDash)?;
            finish_edge(ts, pos, Dir::Incoming, true, name, labels, where_clause, cost)
        }
        other => Err(ts.error_here(format!("expected an edge pattern, found {other}"))),
    }
}

#[allow(clippy::too_many_arguments)]
fn finish_edge(
    ts: &mut TokenStream,
    pos: crate::ast::Position,
    dir: Dir,
    reachability: bool,
    name: Option<Ident>,
    labels: Vec<Ident>,
    where_clause: Option<crate::ast::Expr>,
    cost: Option<crate::ast::Expr>,
) -> ParseResult<PathPatternPrimary> {
    let quantifier = parse_quantifier_opt(ts)?;
    let edge = EdgePattern { name, labels, dir, reachability, quantifier, where_clause, cost, pos };
    Ok(PathPatternPrimary { quantifier: None, where_clause: None, cost: None, vs: Vec::new(), es: vec![edge] })
}

/// Edge details inside a bracketed or reachability form: optional name,
/// optional labels, optional `WHERE`, optional `COST` (§4.2).
type EdgeDetails = (Option<Ident>, Vec<Ident>, Option<crate::ast::Expr>, Option<crate::ast::Expr>);

fn parse_edge_details(ts: &mut TokenStream) -> ParseResult<EdgeDetails> {
    let name = parse_name_opt(ts)?;
    let labels = parse_labels_opt(ts)?;
    let where_clause = if ts.consume(TokenKind::Where) { Some(parse_expr(ts)?) } else { None };
    let cost = if ts.consume(TokenKind::Cost) { Some(parse_expr(ts)?) } else { None };
    Ok((name, labels, where_clause, cost))
}

/// `?` / `*` / `+` / `{n}` / `{n,}` / `{n,m}` / `{,m}` (§4.2 "Quantifiers").
fn parse_quantifier_opt(ts: &mut TokenStream) -> ParseResult<Option<Quantifier>> {
    match ts.current().kind {
        TokenKind::Question => {
            ts.advance();
            Ok(Some(Quantifier { min: None, max: Some(1), group: false }))
        }
        TokenKind::Star => {
            ts.advance();
            Ok(Some(Quantifier { min: None, max: None, group: true }))
        }
        TokenKind::Plus => {
            ts.advance();
            Ok(Some(Quantifier { min: Some(1), max: None, group: true }))
        }
        TokenKind::LBrace => {
            ts.advance();
            if ts.consume(TokenKind::Comma) {
                let max = parse_uint(ts)?;
                ts.expect(TokenKind::RBrace)?;
                return Ok(Some(Quantifier { min: None, max: Some(max), group: true }));
            }
            let min = parse_uint(ts)?;
            if ts.consume(TokenKind::Comma) {
                if ts.check(TokenKind::RBrace) {
                    ts.advance();
                    Ok(Some(Quantifier { min: Some(min), max: None, group: true }))
                } else {
                    let max = parse_uint(ts)?;
                    ts.expect(TokenKind::RBrace)?;
                    Ok(Some(Quantifier { min: Some(min), max: Some(max), group: true }))
                }
            } else {
                ts.expect(TokenKind::RBrace)?;
                Ok(Some(Quantifier { min: Some(min), max: Some(min), group: true }))
            }
        }
        _ => Ok(None),
    }
}
