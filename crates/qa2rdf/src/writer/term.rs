//! Object terms and literal formatting for the Turtle writer.

use chrono::{DateTime, Utc};

/// A reusable named blank node (`_:bN`).
///
/// Handles are only valid for the writer that created them; passing one to a
/// different writer is rejected with
/// [`WriterError::ForeignBlankNode`](super::WriterError::ForeignBlankNode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlankNode {
    pub(crate) owner: u64,
    pub(crate) id: u64,
}

impl BlankNode {
    pub(crate) fn turtle_repr(&self) -> String {
        format!("_:b{}", self.id)
    }
}

/// A typed literal value, one variant per supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Integer(i64),
    Decimal(f64),
    Double(f64),
    Boolean(bool),
    DateTime(DateTime<Utc>),
}

/// An object-position term: IRI, blank node, or literal.
///
/// Subjects and predicates are always IRIs and are passed as plain `&str`;
/// only objects need the full tagged union.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Iri(String),
    Blank(BlankNode),
    Literal(Literal),
}

impl Term {
    /// An object-position IRI.
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// A decimal literal (plain notation).
    pub fn decimal(value: f64) -> Self {
        Term::Literal(Literal::Decimal(value))
    }

    /// A double literal (scientific notation).
    pub fn double(value: f64) -> Self {
        Term::Literal(Literal::Double(value))
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}

impl From<&str> for Term {
    fn from(value: &str) -> Self {
        Term::Literal(Literal::String(value.to_string()))
    }
}

impl From<String> for Term {
    fn from(value: String) -> Self {
        Term::Literal(Literal::String(value))
    }
}

impl From<i64> for Term {
    fn from(value: i64) -> Self {
        Term::Literal(Literal::Integer(value))
    }
}

impl From<bool> for Term {
    fn from(value: bool) -> Self {
        Term::Literal(Literal::Boolean(value))
    }
}

impl From<DateTime<Utc>> for Term {
    fn from(value: DateTime<Utc>) -> Self {
        Term::Literal(Literal::DateTime(value))
    }
}

impl From<BlankNode> for Term {
    fn from(node: BlankNode) -> Self {
        Term::Blank(node)
    }
}

impl From<&BlankNode> for Term {
    fn from(node: &BlankNode) -> Self {
        Term::Blank(*node)
    }
}

/// Conversion into an optional object term.
///
/// `None` objects are silently skipped by the writer, which keeps converter
/// code for optional dump attributes free of branching.
pub trait IntoObject {
    fn into_object(self) -> Option<Term>;
}

impl IntoObject for Term {
    fn into_object(self) -> Option<Term> {
        Some(self)
    }
}

impl IntoObject for &Term {
    fn into_object(self) -> Option<Term> {
        Some(self.clone())
    }
}

impl IntoObject for &str {
    fn into_object(self) -> Option<Term> {
        Some(self.into())
    }
}

impl IntoObject for String {
    fn into_object(self) -> Option<Term> {
        Some(self.into())
    }
}

impl IntoObject for i64 {
    fn into_object(self) -> Option<Term> {
        Some(self.into())
    }
}

impl IntoObject for bool {
    fn into_object(self) -> Option<Term> {
        Some(self.into())
    }
}

impl IntoObject for DateTime<Utc> {
    fn into_object(self) -> Option<Term> {
        Some(self.into())
    }
}

impl IntoObject for BlankNode {
    fn into_object(self) -> Option<Term> {
        Some(self.into())
    }
}

impl IntoObject for &BlankNode {
    fn into_object(self) -> Option<Term> {
        Some(self.into())
    }
}

impl<T: IntoObject> IntoObject for Option<T> {
    fn into_object(self) -> Option<Term> {
        self.and_then(IntoObject::into_object)
    }
}

/// Escape a string for a Turtle double-quoted literal.
///
/// Tab, line break, carriage return, quotes, and backslash become two-character
/// escapes; any other control character becomes `\uXXXX`. Everything else
/// passes through unchanged.
pub fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Plain-notation decimal formatting, locale-invariant.
pub fn format_decimal(value: f64) -> String {
    format!("{value}")
}

/// Scientific-notation double formatting (`1.5E2` style).
pub fn format_double(value: f64) -> String {
    format!("{value:E}")
}

/// `YYYY-MM-DDTHH:MM:SSZ`, with the millisecond component included only when
/// it is non-zero. Always UTC.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    if value.timestamp_subsec_millis() != 0 {
        value.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    } else {
        value.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}
