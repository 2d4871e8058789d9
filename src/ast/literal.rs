//! Literal values.

use smol_str::SmolStr;

use super::Position;

/// The kind of a [`BasicLit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    String,
    UnsignedInteger,
    UnsignedDecimal,
    Bool,
    Date,
    Time,
    Timestamp,
    Interval,
}

/// A literal value, carried in its raw surface form.
///
/// `raw` preserves quoting for strings (including the surrounding quotes)
/// and the trailing unit for intervals, e.g. `'2' HOUR`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicLit {
    pub raw: SmolStr,
    pub kind: LiteralKind,
    pub pos: Position,
}

impl BasicLit {
    pub fn new(raw: impl Into<SmolStr>, kind: LiteralKind, pos: Position) -> Self {
        Self { raw: raw.into(), kind, pos }
    }

    /// Builds the `BoolKind` literal PGQL uses to encode an aggregate's
    /// leading `DISTINCT` flag (§3.2, §3.3).
    pub fn bool_flag(value: bool, pos: Position) -> Self {
        Self {
            raw: SmolStr::new(if value { "true" } else { "false" }),
            kind: LiteralKind::Bool,
            pos,
        }
    }

    /// Returns the boolean value of a `BoolKind` literal.
    ///
    /// # Panics
    ///
    /// Panics if this literal is not `LiteralKind::Bool` — only ever called
    /// on the parser's own synthesized DISTINCT-flag literals.
    pub fn as_bool(&self) -> bool {
        assert_eq!(self.kind, LiteralKind::Bool, "not a boolean literal");
        self.raw == "true"
    }
}
