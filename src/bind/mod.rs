//! Bind-variable model for parameterized statements.
//!
//! A statement carries named placeholders (`:name`). Each distinct name maps
//! to at most one [`BindVariable`] — a canonical [`BindName`] plus an optional
//! declared [`DbType`] and an optional concrete [`DbValue`]. Declarations of
//! the same name can arrive repeatedly while a statement is composed (a typed
//! declaration here, a plain placeholder there); [`BindVariableCombiner`]
//! reconciles them and [`BindMap`] is the frozen, name-unique result.
//!
//! Modules:
//! - `name`     : canonical, case-folded bind identifier.
//! - `value`    : `DbType` / `DbValue` and SQL literal rendering.
//! - `variable` : (name, type?, value?) triple with construction-time checks.
//! - `map`      : immutable ordered name-unique collection.
//! - `combiner` : incremental merge with conflict detection.

pub mod combiner;
pub mod map;
pub mod name;
pub mod value;
pub mod variable;

pub use combiner::BindVariableCombiner;
pub use map::BindMap;
pub use name::BindName;
pub use value::{DbType, DbValue};
pub use variable::BindVariable;
