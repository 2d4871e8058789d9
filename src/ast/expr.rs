//! Expressions.
//!
//! `Expr` is a sum type (§3.2, §9 "Polymorphism over statements and
//! expressions"): visitors pattern-match rather than dispatch through a
//! trait object, since PGQL's expression grammar is closed.

use super::ident::{Ident, QIdent};
use super::literal::BasicLit;
use super::stmt::SelectStmt;
use super::Position;

/// Operator tag for [`OpExpr`].
///
/// `IsNull`/`IsNotNull` are distinct tags from the comparison operators
/// (§3.2). Aggregate tags (`Count` … `ListAgg`) always carry a leading
/// `BoolKind` DISTINCT flag as `args[0]` (§3.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Or,
    And,
    Not,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    IsNull,
    IsNotNull,
    Concat,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Neg,
    Count,
    Min,
    Max,
    Avg,
    Sum,
    ArrayAgg,
    ListAgg,
}

impl Op {
    /// True for the aggregate operators that prepend a DISTINCT flag.
    pub fn is_aggregate(self) -> bool {
        matches!(
            self,
            Op::Count | Op::Min | Op::Max | Op::Avg | Op::Sum | Op::ArrayAgg | Op::ListAgg
        )
    }
}

/// Unary, binary, or n-ary operator application.
#[derive(Debug, Clone, PartialEq)]
pub struct OpExpr {
    pub op: Op,
    pub args: Vec<Expr>,
    pub pos: Position,
}

/// A user/built-in function invocation: `name(args...)`.
///
/// `SUBSTRING`, `EXTRACT`, `LABEL`, and `LABELS` all use this shape — their
/// surface syntax is function-call-like even though `EXTRACT`'s first
/// argument is a bare keyword spelling rather than an enum (§9 open
/// question), which is preserved by representing it as an `Ident`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub func: QIdent,
    pub args: Vec<Expr>,
}

/// Token tag for a `CAST(expr AS type)` target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastType {
    String,
    Boolean,
    Integer,
    Int,
    Long,
    Float,
    Double,
}

/// Explicit type conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct CastExpr {
    pub arg: Box<Expr>,
    pub type_kind: CastType,
    pub pos: Position,
}

/// One `WHEN cond THEN then` arm of a [`CaseExpr`].
#[derive(Debug, Clone, PartialEq)]
pub struct CaseWhen {
    pub cond: Expr,
    pub then: Expr,
}

/// `CASE [subject] WHEN ... THEN ... [ELSE ...] END`.
///
/// Simple when `subject` is present, searched otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseExpr {
    pub subject: Option<Box<Expr>>,
    pub whens: Vec<CaseWhen>,
    pub els: Option<Box<Expr>>,
    pub pos: Position,
}

/// `subject [NOT] IN (objects...)`.
///
/// An empty `objects` together with `bind_var = true` records the bind
/// variable form `subject IN ?` (§3.2).
#[derive(Debug, Clone, PartialEq)]
pub struct InExpr {
    pub subject: Box<Expr>,
    pub objects: Vec<Expr>,
    pub inv: bool,
    pub bind_var: bool,
    pub pos: Position,
}

/// A nested query used as a value or in `EXISTS (...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SubqueryExpr {
    pub query: Box<SelectStmt>,
    pub exists: bool,
    pub pos: Position,
}

/// `?`, a placeholder where a literal would otherwise appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindVar {
    pub pos: Position,
}

/// The expression sum type.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Op(OpExpr),
    Call(CallExpr),
    Cast(CastExpr),
    Case(CaseExpr),
    In(InExpr),
    Subquery(SubqueryExpr),
    QIdent(QIdent),
    Ident(Ident),
    BasicLit(BasicLit),
    BindVar(BindVar),
}

impl Expr {
    /// The position of the expression's defining token, used for
    /// diagnostics (§3.3: every position is within the input stream).
    pub fn pos(&self) -> Position {
        match self {
            Expr::Op(e) => e.pos,
            Expr::Call(e) => e.func.first().pos,
            Expr::Cast(e) => e.pos,
            Expr::Case(e) => e.pos,
            Expr::In(e) => e.pos,
            Expr::Subquery(e) => e.pos,
            Expr::QIdent(q) => q.first().pos,
            Expr::Ident(i) => i.pos,
            Expr::BasicLit(l) => l.pos,
            Expr::BindVar(b) => b.pos,
        }
    }
}
