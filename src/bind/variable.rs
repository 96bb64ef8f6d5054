use crate::bind::{BindName, DbType, DbValue};
use crate::error::{Error, Result};

/// One bind-variable declaration: canonical name, optionally a declared type,
/// optionally a concrete value.
///
/// Immutable once constructed. When both type and value are present the value
/// must be assignable to the type; an incompatible pair is rejected by the
/// constructor, never silently coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct BindVariable {
    name: BindName,
    db_type: Option<DbType>,
    value: Option<DbValue>,
}

impl BindVariable {
    pub fn new(name: BindName, db_type: Option<DbType>, value: Option<DbValue>) -> Result<Self> {
        if let (Some(db_type), Some(value)) = (&db_type, &value)
            && !value.db_type().assignable_to(*db_type)
        {
            return Err(Error::TypeMismatch {
                db_type: *db_type,
                value: value.sql_literal(),
            });
        }
        Ok(Self {
            name,
            db_type,
            value,
        })
    }

    /// Placeholder sighting: just the name, nothing declared yet.
    pub fn name_only(name: BindName) -> Self {
        Self {
            name,
            db_type: None,
            value: None,
        }
    }

    /// Typed declaration without a value.
    pub fn typed(name: BindName, db_type: DbType) -> Self {
        Self {
            name,
            db_type: Some(db_type),
            value: None,
        }
    }

    /// Valued declaration; the type is taken from the value.
    pub fn with_value(name: BindName, value: DbValue) -> Self {
        Self {
            name,
            db_type: Some(value.db_type()),
            value: Some(value),
        }
    }

    pub fn name(&self) -> &BindName {
        &self.name
    }

    pub fn db_type(&self) -> Option<DbType> {
        self.db_type
    }

    pub fn value(&self) -> Option<&DbValue> {
        self.value.as_ref()
    }
}
