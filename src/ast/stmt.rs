//! Statements: `CREATE`/`DROP PROPERTY GRAPH`, `SELECT`, and modification
//! statements, plus the clause types they're built from.

use super::expr::{CastType, Expr};
use super::ident::{Ident, QIdent};
use super::pattern::{MatchClause, OrderTerm, PathMacroClause};
use super::Position;

/// One item of a `SELECT` list.
///
/// The bare wildcard `*` is not represented here at all — it collapses to
/// an empty `SelectStmt::sels` (§8 S3). `ident.*` is `all_of`; everything
/// else is `expr` with an optional `AS alias`.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectElem {
    pub expr: Option<Expr>,
    pub alias: Option<Ident>,
    pub all_of: Option<QIdent>,
    pub prefix: Option<String>,
}

/// `SELECT ... FROM MATCH(...) [WHERE ...] [GROUP BY ...] [HAVING ...]
/// [ORDER BY ...] [LIMIT ...] [OFFSET ...]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStmt {
    pub path_macros: Vec<PathMacroClause>,
    pub sels: Vec<SelectElem>,
    pub from: Vec<MatchClause>,
    pub where_clause: Option<Expr>,
    pub group_by: Vec<Expr>,
    pub having: Option<Expr>,
    pub limit: Option<Expr>,
    pub offset: Option<Expr>,
    pub order_by: Vec<OrderTerm>,
    pub distinct: bool,
    pub pos: Position,
}

/// `prop_path = value`, used by both `INSERT ... PROPERTIES` and `UPDATE ...
/// SET`. `prop` is `None` for a bare value-only assignment slot (not
/// produced by the current grammar, but carried for parity with the
/// original's pointer-typed field).
#[derive(Debug, Clone, PartialEq)]
pub struct PropAssignment {
    pub prop: Option<QIdent>,
    pub value: Expr,
}

/// `VERTEX v [LABELS (...)] [PROPERTIES (...)]` inside an `INSERT` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexInsertion {
    pub var: Ident,
    pub labels: Vec<Ident>,
    pub props: Vec<PropAssignment>,
}

/// `EDGE e BETWEEN a AND b [LABELS (...)] [PROPERTIES (...)]`.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeInsertion {
    pub var: Option<Ident>,
    pub source: Ident,
    pub dest: Ident,
    pub labels: Vec<Ident>,
    pub props: Vec<PropAssignment>,
}

/// `INSERT [INTO graph] (vertex | edge insertions...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertClause {
    pub into: Option<QIdent>,
    pub vs: Vec<VertexInsertion>,
    pub es: Vec<EdgeInsertion>,
    pub pos: Position,
}

/// One `var SET (assignment, ...)` entry inside an `UPDATE` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub var: Ident,
    pub props: Vec<PropAssignment>,
}

/// `UPDATE v1 SET (...), v2 SET (...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateClause {
    pub updates: Vec<Update>,
    pub pos: Position,
}

/// `DELETE v1, v2, ...`.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteClause {
    pub vars: Vec<Ident>,
    pub pos: Position,
}

/// One modification clause; several may be juxtaposed in statement order
/// (§4.2 "Multiple Mod clauses may be juxtaposed").
#[derive(Debug, Clone, PartialEq)]
pub enum ModClause {
    Insert(InsertClause),
    Update(UpdateClause),
    Delete(DeleteClause),
}

/// `INSERT`/`UPDATE`/`DELETE` ... optionally `FROM MATCH(...)`.
///
/// When `from` is empty, §4.3 rule 2 requires exactly one `Insert` clause
/// in `mods` and forbids every other clause on this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct ModifyStmt {
    pub path_macros: Vec<PathMacroClause>,
    pub mods: Vec<ModClause>,
    pub from: Vec<MatchClause>,
    pub where_clause: Option<Expr>,
    pub group_by: Vec<Expr>,
    pub having: Option<Expr>,
    pub limit: Option<Expr>,
    pub offset: Option<Expr>,
    pub order_by: Vec<OrderTerm>,
    pub pos: Position,
}

/// One property in a `PROPERTIES (...)` list: a source column, optionally
/// renamed, optionally cast.
#[derive(Debug, Clone, PartialEq)]
pub struct PropExpr {
    pub name: Option<Ident>,
    pub column: Ident,
    pub cast_as: Option<CastType>,
}

/// `PROPERTIES` clause on a vertex/edge table declaration — one of three
/// forms (§A.6.2): `NO PROPERTIES`, `ALL COLUMNS [EXCEPT (...)]`, or an
/// explicit `(expr [AS name], ...)` list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropsClause {
    pub none: bool,
    pub except: Vec<Ident>,
    pub exprs: Vec<PropExpr>,
}

/// `SOURCE`/`DESTINATION [KEY (...)] tbl [REFERENCES tbl (...)]` reference
/// from an edge table to one of its endpoint vertex tables.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexTableRef {
    pub keys: Vec<Ident>,
    pub table_name: QIdent,
    pub columns: Vec<Ident>,
}

/// One entry of `VERTEX TABLES(...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexTableDecl {
    pub table_name: QIdent,
    pub table_alias: Option<Ident>,
    pub label: Option<Ident>,
    pub props: PropsClause,
    pub keys: Vec<Ident>,
}

/// One entry of `EDGE TABLES(...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeTableDecl {
    pub table_name: QIdent,
    pub table_alias: Option<Ident>,
    pub source: VertexTableRef,
    pub dest: VertexTableRef,
    pub label: Option<Ident>,
    pub props: PropsClause,
    pub keys: Vec<Ident>,
}

/// `CREATE PROPERTY GRAPH graph_name VERTEX TABLES(...) [EDGE TABLES(...)]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateStmt {
    pub graph_name: QIdent,
    pub vertex_tables: Vec<VertexTableDecl>,
    pub edge_tables: Vec<EdgeTableDecl>,
    pub pos: Position,
}

/// `DROP PROPERTY GRAPH graph_name`.
#[derive(Debug, Clone, PartialEq)]
pub struct DropStmt {
    pub graph_name: QIdent,
    pub pos: Position,
}

/// The statement sum type (§9: tagged variants, not virtual dispatch).
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Create(CreateStmt),
    Drop(DropStmt),
    Select(SelectStmt),
    Modify(ModifyStmt),
}

impl Stmt {
    pub fn pos(&self) -> Position {
        match self {
            Stmt::Create(s) => s.pos,
            Stmt::Drop(s) => s.pos,
            Stmt::Select(s) => s.pos,
            Stmt::Modify(s) => s.pos,
        }
    }
}

/// The top-level result of a successful parse: an owned, immutable list of
/// statements (§3.4, §4.4).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Statements {
    pub stmts: Vec<Stmt>,
}
