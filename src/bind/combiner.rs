use crate::bind::{BindMap, BindName, BindVariable, DbType};
use crate::error::{Error, Result};

/// Accumulates repeated sightings of a statement's bind variables and merges
/// them into a single [`BindMap`].
///
/// Per name, sightings only ever become more specific:
/// name-only -> typed -> typed with value. A typed sighting wins over a plain
/// placeholder, a valued sighting wins over a typeless or valueless one.
/// Non-assignable types or two different concrete values are reported as
/// conflicts immediately; there is no coercion and no last-writer-wins.
///
/// `build` consumes the combiner, so a frozen map can never be combined into
/// again.
#[derive(Debug, Default)]
pub struct BindVariableCombiner {
    variables: Vec<BindVariable>,
}

impl BindVariableCombiner {
    pub fn add(&mut self, variable: BindVariable) -> Result<()> {
        match self
            .variables
            .iter_mut()
            .find(|v| v.name() == variable.name())
        {
            Some(existing) => {
                *existing = merge(existing, &variable)?;
            }
            None => self.variables.push(variable),
        }
        Ok(())
    }

    /// Record a plain placeholder sighting of `name`.
    pub fn add_name(&mut self, name: BindName) -> Result<()> {
        self.add(BindVariable::name_only(name))
    }

    pub fn add_all(&mut self, variables: impl IntoIterator<Item = BindVariable>) -> Result<()> {
        for variable in variables {
            self.add(variable)?;
        }
        Ok(())
    }

    /// Freeze the accumulated state into an immutable map.
    pub fn build(self) -> BindMap {
        BindMap::from_variables(self.variables)
    }
}

fn merge(first: &BindVariable, second: &BindVariable) -> Result<BindVariable> {
    let name = first.name().clone();
    let db_type = match (first.db_type(), second.db_type()) {
        (Some(a), Some(b)) => Some(merged_type(&name, a, b)?),
        (a, b) => a.or(b),
    };
    let value = match (first.value(), second.value()) {
        (Some(a), Some(b)) if a != b => {
            return Err(Error::BindValueConflict {
                name,
                first: a.sql_literal(),
                second: b.sql_literal(),
            });
        }
        (a, b) => a.or(b).cloned(),
    };
    // new() re-checks that the retained value fits the merged type
    BindVariable::new(name, db_type, value)
}

fn merged_type(name: &BindName, first: DbType, second: DbType) -> Result<DbType> {
    first
        .more_specific(second)
        .ok_or_else(|| Error::BindTypeConflict {
            name: name.clone(),
            first,
            second,
        })
}
