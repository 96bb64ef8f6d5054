//! Token model tying a `TokenKind` to its source position.
//!
//! A `Token` is intentionally minimal: its classification (`kind`) plus the
//! 1-based line and column of its first character in the original SQL text.
//! Tokens are immutable; manipulating them means constructing new ones.
//!
//! See sibling modules:
//! - `keyword.rs`    for the `Keyword` enum.
//! - `symbol.rs`     for the operator vocabulary.
//! - `token_kind.rs` for `TokenKind` classification.
//! - `tokenizer.rs`  for producing `Vec<Token>` from raw SQL input.

use crate::sql::token_kind::TokenKind;

/// Spacing preference a token declares toward an adjacent token.
///
/// Used when rendering a token stream back to text: `Force` demands a line
/// break, `Normal` accepts a single space, `None` asks for no separator but
/// yields to the other side, `ForceNone` suppresses any separator even
/// against `Force`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    Force,
    Normal,
    None,
    ForceNone,
}

/// A lexical token with the line/column (1-based) where it starts.
///
/// Invariants:
/// - `line >= 1`, `column >= 1`
/// - position refers to the *original* SQL string supplied to the tokenizer
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
    pub column: u32,
}

impl Token {
    /// Construct a new token.
    pub const fn new(kind: TokenKind, line: u32, column: u32) -> Self {
        Self { kind, line, column }
    }

    /// Returns the name if this token is a `Name`.
    pub fn name(&self) -> Option<&crate::name::SimpleName> {
        self.kind.name()
    }

    /// Returns true if this token represents a given keyword.
    pub fn is_keyword(&self, kw: crate::sql::Keyword) -> bool {
        self.kind.is_keyword(kw)
    }

    /// Returns the canonical bind name if this token is a bind placeholder.
    pub fn bind_name(&self) -> Option<&crate::bind::BindName> {
        self.kind.bind_name()
    }

    pub fn space_before(&self) -> Spacing {
        self.kind.space_before()
    }

    pub fn space_after(&self) -> Spacing {
        self.kind.space_after()
    }

    /// Convenience: `(line, column)` pair.
    pub const fn position(&self) -> (u32, u32) {
        (self.line, self.column)
    }
}
