//! Token kind definitions for the SQL tokenizer.
//!
//! `TokenKind` is a closed sum over the six lexical categories the scanner
//! produces. Each variant carries only its own payload; position lives on the
//! wrapping `Token`. Dispatch is by pattern match, with a few ergonomic
//! helpers (`is_keyword`, `name`, `bind_name`) to avoid verbose matches at
//! call sites.

use crate::bind::{BindName, DbValue};
use crate::name::SimpleName;
use crate::sql::{Keyword, Symbol, token::Spacing};

/// A comment carried through the token stream. Contributes no binds; a line
/// comment forces a following newline when the stream is rendered back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comment {
    /// `-- ...` to end of line, text trimmed.
    Line(String),
    /// `/* ... */`, text verbatim, no nesting.
    Block(String),
}

impl Comment {
    pub fn sql_text(&self) -> String {
        match self {
            Comment::Line(text) if text.is_empty() => "--".to_string(),
            Comment::Line(text) => format!("-- {text}"),
            Comment::Block(text) => format!("/*{text}*/"),
        }
    }
}

/// Classification for a token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Table / column / generic identifier, plain or delimited.
    Name(SimpleName),
    /// Recognized SQL keyword.
    Keyword(Keyword),
    /// Operator or punctuation from the fixed symbol set.
    Symbol(Symbol),
    /// Typed literal value (string, numeric, date).
    Literal(DbValue),
    /// Line or block comment.
    Comment(Comment),
    /// Bind placeholder (`:name`), name case-folded.
    Bind(BindName),
}

impl TokenKind {
    /// True if this token is the given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == kw)
    }

    /// Returns the name if this token is a `Name`.
    pub fn name(&self) -> Option<&SimpleName> {
        match self {
            TokenKind::Name(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the canonical bind name if this token is a bind placeholder.
    pub fn bind_name(&self) -> Option<&BindName> {
        match self {
            TokenKind::Bind(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::Comment(_))
    }

    /// Render the token back into SQL text. Bind placeholders render in their
    /// source form (`:name`); the normalizer substitutes `?` itself because it
    /// also has to count parameter positions.
    pub fn sql_text(&self) -> String {
        match self {
            TokenKind::Name(name) => name.to_string(),
            TokenKind::Keyword(kw) => kw.as_str().to_string(),
            TokenKind::Symbol(symbol) => symbol.as_str().to_string(),
            TokenKind::Literal(value) => value.sql_literal(),
            TokenKind::Comment(comment) => comment.sql_text(),
            TokenKind::Bind(name) => format!(":{name}"),
        }
    }

    pub fn space_before(&self) -> Spacing {
        match self {
            TokenKind::Symbol(symbol) => symbol.space_before(),
            _ => Spacing::Normal,
        }
    }

    pub fn space_after(&self) -> Spacing {
        match self {
            TokenKind::Symbol(symbol) => symbol.space_after(),
            TokenKind::Comment(Comment::Line(_)) => Spacing::Force,
            _ => Spacing::Normal,
        }
    }
}
