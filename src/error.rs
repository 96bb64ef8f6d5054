use crate::bind::{BindName, DbType};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Lexical error at line {line}, column {column}: {message}")]
    Lexical {
        line: u32,
        column: u32,
        message: String,
    },

    #[error("Invalid name {0:?}")]
    InvalidName(String),

    #[error("Invalid connection label value {0:?}")]
    InvalidLabel(String),

    #[error("Bind variable {0} not found")]
    BindNotFound(BindName),

    #[error("Incompatible types for bind variable {name}: {first} vs {second}")]
    BindTypeConflict {
        name: BindName,
        first: DbType,
        second: DbType,
    },

    #[error("Conflicting values for bind variable {name}: {first} vs {second}")]
    BindValueConflict {
        name: BindName,
        first: String,
        second: String,
    },

    #[error("Value {value} is not assignable to type {db_type}")]
    TypeMismatch { db_type: DbType, value: String },
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl Error {
    /// Shorthand used by the tokenizer for positioned failures.
    pub(crate) fn lexical(line: u32, column: u32, message: impl Into<String>) -> Self {
        Error::Lexical {
            line,
            column,
            message: message.into(),
        }
    }
}
