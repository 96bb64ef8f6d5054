//! Identifier model for database object names.
//!
//! A [`SimpleName`] is one identifier segment, either ordinary (case-folded)
//! or delimited by double quotes (case preserved verbatim). A
//! [`SegmentedName`] is a dotted path of segments (`schema.table.column`).
//! Both implement [`NamePath`], whose `matches` compares a reference path as a
//! trailing suffix of this one — the usual way a partially qualified name is
//! resolved against a fully qualified one.

pub mod path;
pub mod simple;

pub use path::{NamePath, SegmentedName};
pub use simple::SimpleName;
