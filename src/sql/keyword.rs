//! SQL keyword vocabulary used by the tokenizer.
//!
//! Unquoted identifiers are matched case-insensitively against this fixed set
//! during classification; everything else stays a plain name. The set covers
//! the reserved words that appear in statements the normalizer handles —
//! extend it only when a word must not be mistaken for an object name.
//!
//! Design notes:
//! - Keywords are matched via `from_lower` using a pre-lower-cased string
//!   slice, so classification allocates at most once per identifier lexeme.
//! - `as_str` is the canonical lowercase form, which is also how keywords are
//!   rendered into normalized statement text.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Select,
    From,
    Where,
    Group,
    By,
    Order,
    Having,
    And,
    Or,
    Not,
    Null,
    Is,
    In,
    Like,
    Between,
    Exists,
    Union,
    All,
    Distinct,
    Insert,
    Into,
    Values,
    Update,
    Set,
    Delete,
    Join,
    Inner,
    Outer,
    Left,
    Right,
    On,
    As,
    Case,
    When,
    Then,
    Else,
    End,
    Begin,
    Declare,
    Returning,
}

impl Keyword {
    /// Attempt to classify a *lower-cased* word slice into a `Keyword`.
    /// Returns `None` if the word is not a recognized keyword.
    pub fn from_lower(word: &str) -> Option<Self> {
        use Keyword::*;
        let kw = match word {
            "select" => Select,
            "from" => From,
            "where" => Where,
            "group" => Group,
            "by" => By,
            "order" => Order,
            "having" => Having,
            "and" => And,
            "or" => Or,
            "not" => Not,
            "null" => Null,
            "is" => Is,
            "in" => In,
            "like" => Like,
            "between" => Between,
            "exists" => Exists,
            "union" => Union,
            "all" => All,
            "distinct" => Distinct,
            "insert" => Insert,
            "into" => Into,
            "values" => Values,
            "update" => Update,
            "set" => Set,
            "delete" => Delete,
            "join" => Join,
            "inner" => Inner,
            "outer" => Outer,
            "left" => Left,
            "right" => Right,
            "on" => On,
            "as" => As,
            "case" => Case,
            "when" => When,
            "then" => Then,
            "else" => Else,
            "end" => End,
            "begin" => Begin,
            "declare" => Declare,
            "returning" => Returning,
            _ => return None,
        };
        Some(kw)
    }

    /// Canonical lowercase string form of the keyword.
    pub const fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Select => "select",
            From => "from",
            Where => "where",
            Group => "group",
            By => "by",
            Order => "order",
            Having => "having",
            And => "and",
            Or => "or",
            Not => "not",
            Null => "null",
            Is => "is",
            In => "in",
            Like => "like",
            Between => "between",
            Exists => "exists",
            Union => "union",
            All => "all",
            Distinct => "distinct",
            Insert => "insert",
            Into => "into",
            Values => "values",
            Update => "update",
            Set => "set",
            Delete => "delete",
            Join => "join",
            Inner => "inner",
            Outer => "outer",
            Left => "left",
            Right => "right",
            On => "on",
            As => "as",
            Case => "case",
            When => "when",
            Then => "then",
            Else => "else",
            End => "end",
            Begin => "begin",
            Declare => "declare",
            Returning => "returning",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_known_keywords() {
        for w in ["select", "from", "where", "begin", "returning", "values"] {
            assert!(Keyword::from_lower(w).is_some(), "{w} should be recognized");
        }
    }

    #[test]
    fn rejects_unknown_words() {
        for w in ["foo", "tbl", "date", "p_name", "arc"] {
            assert!(
                Keyword::from_lower(w).is_none(),
                "{w} should NOT be recognized"
            );
        }
    }

    #[test]
    fn display_matches_as_str() {
        for kw in [Keyword::Select, Keyword::From, Keyword::Begin, Keyword::End] {
            assert_eq!(kw.to_string(), kw.as_str());
        }
    }
}
