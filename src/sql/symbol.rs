//! Fixed operator/punctuation vocabulary.
//!
//! Symbols are matched greedily: every two-character symbol is attempted at
//! the current scan position before falling back to its one-character prefix,
//! so `:=` never tokenizes as `:` `=` and `<=` never as `<` `=`.

use crate::sql::token::Spacing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `:=`
    Assign,
    /// `=>`
    ParamArrow,
    /// `!=`
    NotEqual,
    /// `<=`
    LessOrEqual,
    /// `>=`
    GreaterOrEqual,
    /// `<>`
    NotEqualBrackets,
    /// `||`
    Concat,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `,`
    Comma,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `/`
    Slash,
    /// `*`
    Star,
    /// `;`
    Semicolon,
    /// `.`
    Dot,
    /// `%`
    Percent,
    /// `=`
    Equal,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `?` — driver placeholder; appears when normalized text is re-scanned.
    Question,
}

impl Symbol {
    /// Two-character symbols, tried before any single-character match.
    pub const TWO_CHAR: [Symbol; 7] = [
        Symbol::Assign,
        Symbol::ParamArrow,
        Symbol::NotEqual,
        Symbol::LessOrEqual,
        Symbol::GreaterOrEqual,
        Symbol::NotEqualBrackets,
        Symbol::Concat,
    ];

    pub const SINGLE_CHAR: [Symbol; 14] = [
        Symbol::OpenParen,
        Symbol::CloseParen,
        Symbol::Comma,
        Symbol::Plus,
        Symbol::Minus,
        Symbol::Slash,
        Symbol::Star,
        Symbol::Semicolon,
        Symbol::Dot,
        Symbol::Percent,
        Symbol::Equal,
        Symbol::Greater,
        Symbol::Less,
        Symbol::Question,
    ];

    pub fn from_text(text: &str) -> Option<Self> {
        Self::TWO_CHAR
            .iter()
            .chain(Self::SINGLE_CHAR.iter())
            .copied()
            .find(|s| s.as_str() == text)
    }

    pub const fn as_str(self) -> &'static str {
        use Symbol::*;
        match self {
            Assign => ":=",
            ParamArrow => "=>",
            NotEqual => "!=",
            LessOrEqual => "<=",
            GreaterOrEqual => ">=",
            NotEqualBrackets => "<>",
            Concat => "||",
            OpenParen => "(",
            CloseParen => ")",
            Comma => ",",
            Plus => "+",
            Minus => "-",
            Slash => "/",
            Star => "*",
            Semicolon => ";",
            Dot => ".",
            Percent => "%",
            Equal => "=",
            Greater => ">",
            Less => "<",
            Question => "?",
        }
    }

    /// Spacing hint on the left side of the symbol.
    pub const fn space_before(self) -> Spacing {
        use Symbol::*;
        match self {
            Comma | CloseParen | Semicolon | Dot | OpenParen | Concat => Spacing::None,
            _ => Spacing::Normal,
        }
    }

    /// Spacing hint on the right side of the symbol.
    pub const fn space_after(self) -> Spacing {
        use Symbol::*;
        match self {
            OpenParen | Dot | Concat => Spacing::None,
            Semicolon => Spacing::Force,
            _ => Spacing::Normal,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
