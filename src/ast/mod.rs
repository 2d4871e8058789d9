//! Abstract syntax tree: pure data, no behavior beyond constructors (§4.4).
//!
//! Two sum types — [`expr::Expr`] and [`stmt::Stmt`] — carry the bulk of the
//! tree; everything else is a plain record type owned by its parent.

mod expr;
mod ident;
mod literal;
mod pattern;
mod span;
mod stmt;

pub use expr::{
    BindVar, CallExpr, CaseExpr, CaseWhen, CastExpr, CastType, Expr, InExpr, Op, OpExpr,
    SubqueryExpr,
};
pub use ident::{Ident, QIdent};
pub use literal::{BasicLit, LiteralKind};
pub use pattern::{
    Cardinality, Dir, EdgePattern, MatchClause, MatchRows, MatchRowsKind, Metric, Order,
    OrderTerm, PathMacroClause, PathPattern, PathPatternPrimary, Quantifier, VertexPattern,
};
pub use span::Position;
pub use stmt::{
    CreateStmt, DeleteClause, DropStmt, EdgeInsertion, EdgeTableDecl, InsertClause, ModClause,
    ModifyStmt, PropAssignment, PropExpr, PropsClause, SelectElem, SelectStmt, Statements, Stmt,
    Update, UpdateClause, VertexInsertion, VertexTableDecl, VertexTableRef,
};
