use crate::error::{Error, Result};

/// Canonical bind-variable identifier.
///
/// Stored case-folded to lowercase; equality and hashing use the canonical
/// form, so `:NAME` and `:name` refer to the same variable.
///
/// Invariants:
/// - non-empty
/// - first character is an ASCII letter
/// - remaining characters are ASCII alphanumeric or `_`, `$`, `#`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindName(String);

impl BindName {
    pub fn new(name: &str) -> Result<Self> {
        let mut chars = name.chars();
        let valid = match chars.next() {
            Some(first) => {
                first.is_ascii_alphabetic()
                    && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '#'))
            }
            None => false,
        };
        if !valid {
            return Err(Error::InvalidName(name.to_string()));
        }
        Ok(Self(name.to_ascii_lowercase()))
    }

    /// Canonical (lowercase) form of the name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BindName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for BindName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_folds_to_lowercase() {
        let a = BindName::new("P_Name").unwrap();
        let b = BindName::new("p_name").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "p_name");
        assert_eq!(a.to_string(), "p_name");
    }

    #[test]
    fn accepts_oracle_style_characters() {
        for name in ["a", "a1", "p_value", "x$y", "v#2"] {
            assert!(BindName::new(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_invalid_names() {
        for name in ["", "1a", "_x", "a b", "a-b", "číslo"] {
            assert!(
                matches!(BindName::new(name), Err(Error::InvalidName(_))),
                "{name:?} should be rejected"
            );
        }
    }
}
