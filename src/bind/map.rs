use crate::bind::{BindName, BindVariable};
use crate::error::{Error, Result};

/// Immutable, ordered, name-unique collection of bind variables for one
/// statement.
///
/// Built by [`crate::bind::BindVariableCombiner`]; lookups use the canonical
/// bind name. Statements are small (rarely more than a handful of binds), so
/// storage is a plain vector scanned linearly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BindMap {
    variables: Vec<BindVariable>,
}

impl BindMap {
    /// Crate-internal: uniqueness is the combiner's invariant.
    pub(crate) fn from_variables(variables: Vec<BindVariable>) -> Self {
        Self { variables }
    }

    pub fn get(&self, name: &BindName) -> Result<&BindVariable> {
        self.variables
            .iter()
            .find(|v| v.name() == name)
            .ok_or_else(|| Error::BindNotFound(name.clone()))
    }

    pub fn contains(&self, name: &BindName) -> bool {
        self.variables.iter().any(|v| v.name() == name)
    }

    /// True when every supplied name is present in this map. Matching is by
    /// name only; types and values are not compared. Used to validate that a
    /// statement's required binds are all covered before execution.
    pub fn is_superset_of<'a>(&self, names: impl IntoIterator<Item = &'a BindName>) -> bool {
        names.into_iter().all(|name| self.contains(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &BindVariable> {
        self.variables.iter()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
