//! Identifiers and qualified names.

use smol_str::SmolStr;

use super::Position;

/// A single identifier with the position of its first rune.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: SmolStr,
    pub pos: Position,
}

impl Ident {
    pub fn new(name: impl Into<SmolStr>, pos: Position) -> Self {
        Self { name: name.into(), pos }
    }
}

/// An ordered, non-empty sequence of identifiers: `schema.graph`,
/// `var.prop`, a table name, and so on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QIdent {
    pub names: Vec<Ident>,
}

impl QIdent {
    /// Builds a qualified identifier from a non-empty vec of parts.
    ///
    /// # Panics
    ///
    /// Panics if `names` is empty — every `QIdent` produced by the parser
    /// carries at least one name (§3.3).
    pub fn new(names: Vec<Ident>) -> Self {
        assert!(!names.is_empty(), "QIdent must have at least one name");
        Self { names }
    }

    /// Convenience constructor for a single unqualified identifier.
    pub fn single(ident: Ident) -> Self {
        Self { names: vec![ident] }
    }

    pub fn first(&self) -> &Ident {
        &self.names[0]
    }

    pub fn last(&self) -> &Ident {
        self.names.last().expect("QIdent is never empty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_ident() {
        let q = QIdent::single(Ident::new("mygraph", Position::START));
        assert_eq!(q.names.len(), 1);
        assert_eq!(q.first().name, "mygraph");
        assert_eq!(q.last().name, "mygraph");
    }

    #[test]
    fn qualified_ident() {
        let q = QIdent::new(vec![
            Ident::new("asch", Position::START),
            Ident::new("mygraph", Position { offset: 5, line: 0, column: 5 }),
        ]);
        assert_eq!(q.first().name, "asch");
        assert_eq!(q.last().name, "mygraph");
    }

    #[test]
    #[should_panic(expected = "QIdent must have at least one name")]
    fn empty_qident_panics() {
        QIdent::new(vec![]);
    }
}
