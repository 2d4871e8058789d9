//! Diagnostic model.
//!
//! Lexing and parsing accumulate [`Diag`] values internally; at the public
//! boundary they are folded into a single [`ParseError`] (§6.1, §7) whose
//! `Display` matches the rendering convention exactly, and which can also be
//! expanded into rich `miette::Report`s for fancy terminal output.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, Report, Severity};

use crate::ast::Position;

/// Severity of an accumulated diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagSeverity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for DiagSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagSeverity::Error => write!(f, "error"),
            DiagSeverity::Warning => write!(f, "warning"),
            DiagSeverity::Note => write!(f, "note"),
        }
    }
}

/// Role of a labeled position within a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRole {
    Primary,
    Secondary,
}

/// A labeled source position within a diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagLabel {
    pub pos: Position,
    pub message: String,
    pub role: LabelRole,
}

impl DiagLabel {
    pub fn primary(pos: Position, message: impl Into<String>) -> Self {
        Self { pos, message: message.into(), role: LabelRole::Primary }
    }

    pub fn secondary(pos: Position, message: impl Into<String>) -> Self {
        Self { pos, message: message.into(), role: LabelRole::Secondary }
    }
}

/// A single lexical, syntax, or semantic diagnostic (§7's error taxonomy).
#[derive(Debug, Clone, PartialEq)]
pub struct Diag {
    pub severity: DiagSeverity,
    pub message: String,
    pub labels: Vec<DiagLabel>,
    pub help: Option<String>,
    pub notes: Vec<String>,
    pub code: Option<String>,
}

impl Diag {
    pub fn new(severity: DiagSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            labels: Vec::new(),
            help: None,
            notes: Vec::new(),
            code: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagSeverity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagSeverity::Warning, message)
    }

    pub fn note(message: impl Into<String>) -> Self {
        Self::new(DiagSeverity::Note, message)
    }

    pub fn with_primary_label(mut self, pos: Position, message: impl Into<String>) -> Self {
        self.labels.push(DiagLabel::primary(pos, message));
        self
    }

    pub fn with_secondary_label(mut self, pos: Position, message: impl Into<String>) -> Self {
        self.labels.push(DiagLabel::secondary(pos, message));
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// The position of this diagnostic's primary label, if any, else its
    /// first label of any role.
    pub fn primary_pos(&self) -> Option<Position> {
        self.labels
            .iter()
            .find(|l| l.role == LabelRole::Primary)
            .or_else(|| self.labels.first())
            .map(|l| l.pos)
    }
}

/// A source string paired with a display name, used to expand [`Diag`]s
/// into `miette::Report`s.
#[derive(Debug, Clone)]
pub struct SourceFile {
    content: String,
    name: Option<String>,
}

impl SourceFile {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into(), name: None }
    }

    pub fn with_name(content: impl Into<String>, name: impl Into<String>) -> Self {
        Self { content: content.into(), name: Some(name.into()) }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Converts a code-point offset into the matching byte offset, clamped
    /// to the content length. `Position::offset` counts runes (§3.1); miette
    /// spans are byte-indexed, so this bridges the two.
    pub fn byte_offset(&self, pos: Position) -> usize {
        self.content
            .char_indices()
            .nth(pos.offset)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}

/// Converts accumulated diagnostics into rich, source-annotated reports.
pub fn to_reports(diagnostics: &[Diag], source: &SourceFile) -> Vec<Report> {
    diagnostics.iter().map(|d| to_report(d, source)).collect()
}

fn to_report(diag: &Diag, source: &SourceFile) -> Report {
    let labels = diag
        .labels
        .iter()
        .map(|label| {
            let offset = source.byte_offset(label.pos);
            match label.role {
                LabelRole::Primary => {
                    LabeledSpan::new_primary_with_span(Some(label.message.clone()), (offset, 0))
                }
                LabelRole::Secondary => {
                    LabeledSpan::new_with_span(Some(label.message.clone()), (offset, 0))
                }
            }
        })
        .collect();

    let built = BuiltDiagnostic {
        message: diag.message.clone(),
        severity: match diag.severity {
            DiagSeverity::Error => Severity::Error,
            DiagSeverity::Warning => Severity::Warning,
            DiagSeverity::Note => Severity::Advice,
        },
        code: diag.code.clone(),
        help: diag.help.clone(),
        labels,
        related: diag.notes.iter().cloned().map(NoteDiagnostic::new).collect(),
    };

    let mut report = Report::new(built);
    report = match source.name() {
        Some(name) => {
            report.with_source_code(miette::NamedSource::new(name, source.content().to_string()))
        }
        None => report.with_source_code(source.content().to_string()),
    };
    report
}

#[derive(Debug)]
struct BuiltDiagnostic {
    message: String,
    severity: Severity,
    code: Option<String>,
    help: Option<String>,
    labels: Vec<LabeledSpan>,
    related: Vec<NoteDiagnostic>,
}

#[derive(Debug)]
struct NoteDiagnostic {
    message: String,
}

impl NoteDiagnostic {
    fn new(message: String) -> Self {
        Self { message }
    }
}

impl fmt::Display for NoteDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for BuiltDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for BuiltDiagnostic {}
impl std::error::Error for NoteDiagnostic {}

impl Diagnostic for BuiltDiagnostic {
    fn severity(&self) -> Option<Severity> {
        Some(self.severity)
    }

    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.code.as_ref().map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help.as_ref().map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        if self.labels.is_empty() {
            None
        } else {
            Some(Box::new(self.labels.clone().into_iter()))
        }
    }

    fn related<'a>(&'a self) -> Option<Box<dyn Iterator<Item = &'a dyn Diagnostic> + 'a>> {
        if self.related.is_empty() {
            None
        } else {
            Some(Box::new(self.related.iter().map(|d| d as &dyn Diagnostic)))
        }
    }
}

impl Diagnostic for NoteDiagnostic {
    fn severity(&self) -> Option<Severity> {
        Some(Severity::Advice)
    }
}

/// The public error returned by [`crate::parse`] (§6.1).
///
/// `Display` renders exactly `at L:C: <msg>` for a single message, or
/// `at L:C: N errors; <msg1>; <msg2>; ...` for several, with the `at L:C:`
/// prefix dropped entirely when `pos` is the zero position (§7, §A.6.1).
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub pos: Position,
    pub messages: Vec<String>,
    diagnostics: Vec<Diag>,
}

impl ParseError {
    /// Builds a `ParseError` from accumulated diagnostics and the position
    /// of the token that triggered the terminal failure.
    ///
    /// If `diagnostics` is empty, synthesizes the generic message mandated
    /// by §7 so callers always see at least one message.
    pub fn from_diagnostics(diagnostics: Vec<Diag>, pos: Position) -> Self {
        let messages: Vec<String> = diagnostics.iter().map(|d| d.message.clone()).collect();
        let messages = if messages.is_empty() {
            vec!["parsing failed without further information".to_string()]
        } else {
            messages
        };
        Self { pos, messages, diagnostics }
    }

    /// Expands the accumulated diagnostics into rich `miette::Report`s
    /// against the given source text.
    pub fn reports(&self, source: &str) -> Vec<Report> {
        let source = SourceFile::new(source);
        to_reports(&self.diagnostics, &source)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.pos.is_zero() {
            String::new()
        } else {
            format!("at {}: ", self.pos)
        };
        if self.messages.len() == 1 {
            write!(f, "{}{}", prefix, self.messages[0])
        } else {
            write!(f, "{}{} errors; {}", prefix, self.messages.len(), self.messages.join("; "))
        }
    }
}

impl std::error::Error for ParseError {}

impl Diagnostic for ParseError {
    fn severity(&self) -> Option<Severity> {
        Some(Severity::Error)
    }
}
