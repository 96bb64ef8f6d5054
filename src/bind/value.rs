use chrono::NaiveDate;
use derive_more::Display;

/// Semantic type of a bind value.
///
/// The set mirrors the value types the backend understands rather than the
/// full range of SQL column types. Numeric types widen along
/// `Int -> BigInt -> Number`; everything else is only assignable to itself.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbType {
    VarChar,
    Int,
    BigInt,
    Number,
    Boolean,
    Date,
    Uid,
}

impl DbType {
    /// True when a value of `self` can be supplied where `target` is declared.
    pub fn assignable_to(self, target: DbType) -> bool {
        use DbType::*;
        self == target || matches!((self, target), (Int, BigInt | Number) | (BigInt, Number))
    }

    /// The narrower of two assignability-related types, `None` when unrelated.
    pub fn more_specific(self, other: DbType) -> Option<DbType> {
        if self.assignable_to(other) {
            Some(self)
        } else if other.assignable_to(self) {
            Some(other)
        } else {
            None
        }
    }
}

/// A concrete bind value, also used as the literal payload of the tokenizer.
///
/// `sql_literal` renders the value back into SQL literal syntax; the rendering
/// must survive re-tokenization so that statement normalization stays
/// idempotent.
#[derive(Debug, Clone, PartialEq)]
pub enum DbValue {
    VarChar(String),
    Int(i32),
    BigInt(i64),
    Number(f64),
    Boolean(bool),
    Date(NaiveDate),
    Uid(i64),
}

impl DbValue {
    pub fn db_type(&self) -> DbType {
        match self {
            DbValue::VarChar(_) => DbType::VarChar,
            DbValue::Int(_) => DbType::Int,
            DbValue::BigInt(_) => DbType::BigInt,
            DbValue::Number(_) => DbType::Number,
            DbValue::Boolean(_) => DbType::Boolean,
            DbValue::Date(_) => DbType::Date,
            DbValue::Uid(_) => DbType::Uid,
        }
    }

    /// Render the value as a SQL literal.
    pub fn sql_literal(&self) -> String {
        match self {
            DbValue::VarChar(s) => string_literal(s),
            DbValue::Int(v) => v.to_string(),
            DbValue::BigInt(v) => v.to_string(),
            DbValue::Number(v) => v.to_string(),
            DbValue::Boolean(v) => if *v { "'Y'" } else { "'N'" }.to_string(),
            DbValue::Date(d) => format!("DATE'{}'", d.format("%Y-%m-%d")),
            DbValue::Uid(v) => v.to_string(),
        }
    }
}

/// Single quotes are doubled; embedded newlines split the literal into pieces
/// concatenated through `chr(10)` so the rendered text stays on one line.
fn string_literal(text: &str) -> String {
    use itertools::Itertools as _;
    text.split('\n')
        .map(|part| format!("'{}'", part.replace('\'', "''")))
        .join("||chr(10)||")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_widening() {
        assert!(DbType::Int.assignable_to(DbType::BigInt));
        assert!(DbType::Int.assignable_to(DbType::Number));
        assert!(DbType::BigInt.assignable_to(DbType::Number));
        assert!(!DbType::Number.assignable_to(DbType::Int));
        assert!(!DbType::VarChar.assignable_to(DbType::Number));
    }

    #[test]
    fn more_specific_picks_narrower() {
        assert_eq!(
            DbType::Number.more_specific(DbType::Int),
            Some(DbType::Int)
        );
        assert_eq!(
            DbType::Int.more_specific(DbType::BigInt),
            Some(DbType::Int)
        );
        assert_eq!(DbType::VarChar.more_specific(DbType::Number), None);
    }

    #[test]
    fn literal_rendering() {
        assert_eq!(DbValue::Int(5).sql_literal(), "5");
        assert_eq!(DbValue::Uid(10_000_001).sql_literal(), "10000001");
        assert_eq!(DbValue::Boolean(true).sql_literal(), "'Y'");
        assert_eq!(DbValue::Boolean(false).sql_literal(), "'N'");
        assert_eq!(
            DbValue::Date(NaiveDate::from_ymd_opt(2018, 1, 12).unwrap()).sql_literal(),
            "DATE'2018-01-12'"
        );
    }

    #[test]
    fn string_literal_escaping() {
        assert_eq!(
            DbValue::VarChar(r#"Test "string" 'constant'"#.to_string()).sql_literal(),
            r#"'Test "string" ''constant'''"#
        );
    }

    #[test]
    fn string_literal_newline_split() {
        assert_eq!(
            DbValue::VarChar("first\nsecond".to_string()).sql_literal(),
            "'first'||chr(10)||'second'"
        );
    }
}
