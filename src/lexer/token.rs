//! Token kinds and the token record produced by the scanner.

use smol_str::SmolStr;
use std::fmt;

use crate::ast::Position;

/// A lexical tag (§3.1 "Token: tag (integer kind) + lexical value").
///
/// Unlike a tag that also carries its payload, `TokenKind` here is a pure
/// enum of unit variants; the string payload for literals and identifiers
/// lives on [`Token::text`] instead, matching the spec's split between tag
/// and lexical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords (§6.2), alphabetical.
    All,
    And,
    Any,
    Are,
    ArrayAgg,
    As,
    Asc,
    Avg,
    Between,
    Boolean,
    By,
    Case,
    Cast,
    Cheapest,
    Columns,
    Cost,
    Count,
    Create,
    Date,
    Day,
    Delete,
    Desc,
    Destination,
    Distinct,
    Double,
    Drop,
    Edge,
    Else,
    End,
    Except,
    Exists,
    Extract,
    False,
    Float,
    For,
    From,
    Graph,
    Group,
    Having,
    Hour,
    In,
    Insert,
    Int,
    Integer,
    Interval,
    Into,
    Is,
    Key,
    Label,
    Labels,
    Limit,
    Listagg,
    Long,
    Match,
    Max,
    Min,
    Minute,
    Month,
    No,
    Not,
    Null,
    Offset,
    On,
    One,
    Or,
    Order,
    Path,
    Per,
    Prefix,
    Properties,
    Property,
    References,
    Row,
    Second,
    Select,
    Set,
    Shortest,
    Source,
    Step,
    String,
    Substring,
    Sum,
    Tables,
    Then,
    Time,
    Timestamp,
    TimezoneHour,
    TimezoneMinute,
    Top,
    True,
    Update,
    Vertex,
    When,
    Where,
    With,
    Year,
    Zone,

    // Single-rune punctuation (§4.1).
    Colon,
    Question,
    Semicolon,
    Comma,
    LBrace,
    RBrace,
    LParen,
    RParen,
    Eq,
    Plus,
    Minus,
    Star,
    Percent,
    Pipe,
    Lt,
    Gt,
    Slash,
    RBracket,
    Dot,

    // Multi-rune operators (§4.1 table).
    RArrow,         // ->
    LArrow,         // <-
    LDashBracket,   // -[
    LArrowBracket,  // <-[
    LDashSlash,     // -/
    LArrowSlash,    // <-/
    RSlashArrow,    // /->
    RSlashDash,     // /-
    RBracketArrow,  // ]->
    RBracketDash,   // ]-
    DPipe,          // ||
    LtEq,           // <=
    GtEq,           // >=
    LtGt,           // <>

    // Literals and identifiers (payload on `Token::text`).
    StringLiteral,
    QuotedIdentifier,
    UnsignedInteger,
    UnsignedDecimal,
    UnquotedIdentifier,

    Eof,
    /// Emitted when the scanner could not produce a valid token; the parser
    /// treats this as an immediate syntax error (§4.1 "Errors").
    Bad,
}

impl TokenKind {
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::All
                | TokenKind::And
                | TokenKind::Any
                | TokenKind::Are
                | TokenKind::ArrayAgg
                | TokenKind::As
                | TokenKind::Asc
                | TokenKind::Avg
                | TokenKind::Between
                | TokenKind::Boolean
                | TokenKind::By
                | TokenKind::Case
                | TokenKind::Cast
                | TokenKind::Cheapest
                | TokenKind::Columns
                | TokenKind::Cost
                | TokenKind::Count
                | TokenKind::Create
                | TokenKind::Date
                | TokenKind::Day
                | TokenKind::Delete
                | TokenKind::Desc
                | TokenKind::Destination
                | TokenKind::Distinct
                | TokenKind::Double
                | TokenKind::Drop
                | TokenKind::Edge
                | TokenKind::Else
                | TokenKind::End
                | TokenKind::Except
                | TokenKind::Exists
                | TokenKind::Extract
                | TokenKind::False
                | TokenKind::Float
                | TokenKind::For
                | TokenKind::From
                | TokenKind::Graph
                | TokenKind::Group
                | TokenKind::Having
                | TokenKind::Hour
                | TokenKind::In
                | TokenKind::Insert
                | TokenKind::Int
                | TokenKind::Integer
                | TokenKind::Interval
                | TokenKind::Into
                | TokenKind::Is
                | TokenKind::Key
                | TokenKind::Label
                | TokenKind::Labels
                | TokenKind::Limit
                | TokenKind::Listagg
                | TokenKind::Long
                | TokenKind::Match
                | TokenKind::Max
                | TokenKind::Min
                | TokenKind::Minute
                | TokenKind::Month
                | TokenKind::No
                | TokenKind::Not
                | TokenKind::Null
                | TokenKind::Offset
                | TokenKind::On
                | TokenKind::One
                | TokenKind::Or
                | TokenKind::Order
                | TokenKind::Path
                | TokenKind::Per
                | TokenKind::Prefix
                | TokenKind::Properties
                | TokenKind::Property
                | TokenKind::References
                | TokenKind::Row
                | TokenKind::Second
                | TokenKind::Select
                | TokenKind::Set
                | TokenKind::Shortest
                | TokenKind::Source
                | TokenKind::Step
                | TokenKind::String
                | TokenKind::Substring
                | TokenKind::Sum
                | TokenKind::Tables
                | TokenKind::Then
                | TokenKind::Time
                | TokenKind::Timestamp
                | TokenKind::TimezoneHour
                | TokenKind::TimezoneMinute
                | TokenKind::Top
                | TokenKind::True
                | TokenKind::Update
                | TokenKind::Vertex
                | TokenKind::When
                | TokenKind::Where
                | TokenKind::With
                | TokenKind::Year
                | TokenKind::Zone
        )
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::StringLiteral
                | TokenKind::UnsignedInteger
                | TokenKind::UnsignedDecimal
                | TokenKind::True
                | TokenKind::False
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TokenKind::*;
        let s = match self {
            All => "ALL",
            And => "AND",
            Any => "ANY",
            Are => "ARE",
            ArrayAgg => "ARRAY_AGG",
            As => "AS",
            Asc => "ASC",
            Avg => "AVG",
            Between => "BETWEEN",
            Boolean => "BOOLEAN",
            By => "BY",
            Case => "CASE",
            Cast => "CAST",
            Cheapest => "CHEAPEST",
            Columns => "COLUMNS",
            Cost => "COST",
            Count => "COUNT",
            Create => "CREATE",
            Date => "DATE",
            Day => "DAY",
            Delete => "DELETE",
            Desc => "DESC",
            Destination => "DESTINATION",
            Distinct => "DISTINCT",
            Double => "DOUBLE",
            Drop => "DROP",
            Edge => "EDGE",
            Else => "ELSE",
            End => "END",
            Except => "EXCEPT",
            Exists => "EXISTS",
            Extract => "EXTRACT",
            False => "FALSE",
            Float => "FLOAT",
            For => "FOR",
            From => "FROM",
            Graph => "GRAPH",
            Group => "GROUP",
            Having => "HAVING",
            Hour => "HOUR",
            In => "IN",
            Insert => "INSERT",
            Int => "INT",
            Integer => "INTEGER",
            Interval => "INTERVAL",
            Into => "INTO",
            Is => "IS",
            Key => "KEY",
            Label => "LABEL",
            Labels => "LABELS",
            Limit => "LIMIT",
            Listagg => "LISTAGG",
            Long => "LONG",
            Match => "MATCH",
            Max => "MAX",
            Min => "MIN",
            Minute => "MINUTE",
            Month => "MONTH",
            No => "NO",
            Not => "NOT",
            Null => "NULL",
            Offset => "OFFSET",
            On => "ON",
            One => "ONE",
            Or => "OR",
            Order => "ORDER",
            Path => "PATH",
            Per => "PER",
            Prefix => "PREFIX",
            Properties => "PROPERTIES",
            Property => "PROPERTY",
            References => "REFERENCES",
            Row => "ROW",
            Second => "SECOND",
            Select => "SELECT",
            Set => "SET",
            Shortest => "SHORTEST",
            Source => "SOURCE",
            Step => "STEP",
            String => "STRING",
            Substring => "SUBSTRING",
            Sum => "SUM",
            Tables => "TABLES",
            Then => "THEN",
            Time => "TIME",
            Timestamp => "TIMESTAMP",
            TimezoneHour => "TIMEZONE_HOUR",
            TimezoneMinute => "TIMEZONE_MINUTE",
            Top => "TOP",
            True => "TRUE",
            Update => "UPDATE",
            Vertex => "VERTEX",
            When => "WHEN",
            Where => "WHERE",
            With => "WITH",
            Year => "YEAR",
            Zone => "ZONE",
            Colon => ":",
            Question => "?",
            Semicolon => ";",
            Comma => ",",
            LBrace => "{",
            RBrace => "}",
            LParen => "(",
            RParen => ")",
            Eq => "=",
            Plus => "+",
            Minus => "-",
            Star => "*",
            Percent => "%",
            Pipe => "|",
            Lt => "<",
            Gt => ">",
            Slash => "/",
            RBracket => "]",
            Dot => ".",
            RArrow => "->",
            LArrow => "<-",
            LDashBracket => "-[",
            LArrowBracket => "<-[",
            LDashSlash => "-/",
            LArrowSlash => "<-/",
            RSlashArrow => "/->",
            RSlashDash => "/-",
            RBracketArrow => "]->",
            RBracketDash => "]-",
            DPipe => "||",
            LtEq => "<=",
            GtEq => ">=",
            LtGt => "<>",
            StringLiteral => "<string literal>",
            QuotedIdentifier => "<quoted identifier>",
            UnsignedInteger => "<integer literal>",
            UnsignedDecimal => "<decimal literal>",
            UnquotedIdentifier => "<identifier>",
            Eof => "<EOF>",
            Bad => "<bad>",
        };
        write!(f, "{s}")
    }
}

/// A single scanned token: its tag, its starting position, the trivia that
/// preceded it, and — for literals/identifiers — its raw text (§3.1).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Position,
    pub leading_trivia: String,
    pub text: Option<SmolStr>,
}

impl Token {
    pub fn new(kind: TokenKind, pos: Position) -> Self {
        Self { kind, pos, leading_trivia: String::new(), text: None }
    }

    pub fn with_text(mut self, text: impl Into<SmolStr>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_trivia(mut self, trivia: impl Into<String>) -> Self {
        self.leading_trivia = trivia.into();
        self
    }
}
