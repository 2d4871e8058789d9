//! Graph pattern clauses: `MATCH`, path patterns, vertex/edge patterns,
//! quantifiers, and the row/order modifiers that sit alongside them.

use super::ident::{Ident, QIdent};
use super::Position;
use crate::ast::expr::Expr;

/// How many matches of a path pattern to retain (§4.2 "Cardinality prefix").
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cardinality {
    None,
    Any,
    All,
    /// `TOP k`.
    Top(u64),
}

/// Ranking criterion for a variable-length path pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    None,
    /// `SHORTEST`, ranked by number of edges.
    Length,
    /// `CHEAPEST`, ranked by accumulated `COST` expression.
    Cost,
}

/// Edge direction as written in the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Any,
    Outgoing,
    Incoming,
}

/// Repetition bounds on an edge or sub-pattern primary.
///
/// A lone `?` is `{max: Some(1), group: false}`, distinct from the written
/// bounded form `{0,1}` which sets `group = true` (§9 glossary).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantifier {
    pub min: Option<u64>,
    pub max: Option<u64>,
    pub group: bool,
}

impl Quantifier {
    /// True when an upper bound is present — the condition checked by the
    /// ALL-cardinality validation (§4.3 rule 1).
    pub fn has_upper_bound(&self) -> bool {
        self.max.is_some()
    }
}

/// `( name? (':' label ('|' label)*)? )`.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexPattern {
    pub name: Option<Ident>,
    pub labels: Vec<Ident>,
    pub pos: Position,
}

/// One edge primary: `-`, `->`, `<-[...]-`, a reachability form, etc.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgePattern {
    pub name: Option<Ident>,
    pub labels: Vec<Ident>,
    pub dir: Dir,
    /// True for the `-/.../->`-family reachability forms.
    pub reachability: bool,
    pub quantifier: Option<Quantifier>,
    pub where_clause: Option<Expr>,
    pub cost: Option<Expr>,
    pub pos: Position,
}

/// One step between two vertex patterns: either a single edge primary or a
/// parenthesized sub-pattern.
///
/// `es` always has exactly one element per the grammar (§3.3); `vs` is the
/// sub-pattern's own vertex list when this primary is a parenthesized
/// sub-pattern, with `None` entries where an outer vertex is shared instead
/// of restated (§3.3, §3.4).
#[derive(Debug, Clone, PartialEq)]
pub struct PathPatternPrimary {
    pub quantifier: Option<Quantifier>,
    pub where_clause: Option<Expr>,
    pub cost: Option<Expr>,
    pub vs: Vec<Option<VertexPattern>>,
    pub es: Vec<EdgePattern>,
}

/// A full path pattern: N vertex patterns interleaved with N-1 primaries
/// (§3.3), plus the cardinality/metric prefix that governs it.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPattern {
    pub vs: Vec<VertexPattern>,
    pub es: Vec<PathPatternPrimary>,
    pub cardinality: Cardinality,
    pub metric: Metric,
    pub pos: Position,
}

/// `ONE ROW PER ...` clause kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRowsKind {
    Default,
    OneRowPerMatch,
    /// Requires exactly one variable.
    OneRowPerVertex,
    /// Requires exactly three variables.
    OneRowPerStep,
}

/// `ONE ROW PER MATCH | VERTEX(v) | STEP(v1, v2, v3)`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRows {
    pub vars: Vec<Ident>,
    pub kind: MatchRowsKind,
}

/// `MATCH(...)` within a `FROM` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchClause {
    pub on: Option<QIdent>,
    pub rows: Option<MatchRows>,
    pub patterns: Vec<PathPattern>,
    pub pos: Position,
}

/// `PATH name AS (pattern) [WHERE cond]`, scoped to the enclosing statement.
#[derive(Debug, Clone, PartialEq)]
pub struct PathMacroClause {
    pub name: Ident,
    pub pattern: PathPattern,
    pub where_clause: Option<Expr>,
}

/// `ASC`/`DESC` on an `ORDER BY` term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Default,
    Asc,
    Desc,
}

/// One `ORDER BY` term.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTerm {
    pub expr: Expr,
    pub order: Order,
}
