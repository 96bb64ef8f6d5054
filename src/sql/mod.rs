//! SQL tokenization and statement normalization.
//!
//! This module turns raw statement text into a positioned token stream and a
//! canonical, parameterized rendering. The components are intentionally
//! pragmatic — a token stream plus bind positions, not a grammar:
//!
//! Modules:
//! - `keyword`    : fixed vocabulary of reserved words.
//! - `symbol`     : operator/punctuation set with greedy matching.
//! - `token_kind` : classification of lexical atoms.
//! - `token`      : token struct pairing a `TokenKind` with line/column.
//! - `tokenizer`  : single pass O(n) scanner producing `Vec<Token>`.
//! - `normalizer` : bind collection and whitespace-minimized rendering.
//! - `cache`      : moka-backed memoization of normalization results.
//!
//! Design principles:
//! 1. Tokenization is a pure function of the text; a fresh scan of the same
//!    input always yields the same stream.
//! 2. Malformed input fails the whole call with a positioned lexical error;
//!    there is no partial recovery.
//! 3. Normalized output is itself valid input and normalizes to itself.
//!
//! Example:
//! ```rust
//! use provysdb::{normalize, tokenize, Keyword};
//!
//! let tokens = tokenize("SELECT a FROM my_table").unwrap();
//! assert!(tokens.iter().any(|t| t.is_keyword(Keyword::Select)));
//!
//! let result = normalize("select a from t where id = :id").unwrap();
//! assert_eq!(result.text, "select a from t where id = ?");
//! ```

pub mod cache;
pub mod keyword;
pub mod normalizer;
pub mod symbol;
pub mod token;
pub mod token_kind;
pub mod tokenizer;

pub use cache::{StatementCache, statement_cache};
pub use keyword::Keyword;
pub use normalizer::{BindPosition, NormalizedSql, normalize};
pub use symbol::Symbol;
pub use token::{Spacing, Token};
pub use token_kind::{Comment, TokenKind};
pub use tokenizer::tokenize;

/// Convenience prelude re-exporting the most commonly used items.
///
/// Import with:
/// `use provysdb::prelude::*;`
pub mod prelude {
    pub use super::{Keyword, NormalizedSql, Token, TokenKind, normalize, tokenize};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_and_normalize_agree_on_binds() {
        let sql = "update t set a = :a where id = :id";
        let tokens = tokenize(sql).unwrap();
        let normalized = normalize(sql).unwrap();
        let token_binds: Vec<_> = tokens.iter().filter_map(|t| t.bind_name()).collect();
        let normalized_binds: Vec<_> = normalized.bind_names().collect();
        assert_eq!(token_binds, normalized_binds);
    }

    #[test]
    fn concurrent_normalization_matches_sequential() {
        let statements = [
            "select a from t where id = :id",
            "arc.call(p_A => :a, p_B => :b2);",
            "insert into t (a, b) values (:a, :b)",
        ];
        let expected: Vec<_> = statements.iter().map(|s| normalize(s).unwrap()).collect();

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let actual = runtime.block_on(async {
            let tasks = statements
                .iter()
                .map(|s| {
                    let sql = s.to_string();
                    tokio::spawn(async move { normalize(&sql).unwrap() })
                })
                .collect::<Vec<_>>();
            futures::future::join_all(tasks).await
        });

        for (expected, actual) in expected.iter().zip(actual) {
            assert_eq!(expected, &actual.unwrap());
        }
    }
}
