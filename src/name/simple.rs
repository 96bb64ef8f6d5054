use crate::error::{Error, Result};

/// One identifier segment.
///
/// Casing contract:
/// - ordinary names are case-insensitive: `db_name()` is the uppercase form
///   used for comparison against the data dictionary, `Display` renders the
///   lowercase form used in generated statement text;
/// - delimited names (`"Name"`) preserve their content verbatim for both,
///   with `""` escaping a quote inside the delimiters when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleName {
    name: String,
    delimited: bool,
}

impl SimpleName {
    /// Parse a single segment, either `ident` or `"Delimited"`.
    pub fn new(text: &str) -> Result<Self> {
        if let Some(inner) = text.strip_prefix('"') {
            let content = inner
                .strip_suffix('"')
                .map(|body| body.replace("\"\"", "\""))
                .ok_or_else(|| Error::InvalidName(text.to_string()))?;
            if content.is_empty() {
                return Err(Error::InvalidName(text.to_string()));
            }
            Ok(Self::delimited(content))
        } else {
            Self::ordinary(text)
        }
    }

    /// Ordinary (undelimited) identifier; validated and case-folded.
    pub fn ordinary(name: &str) -> Result<Self> {
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
        Ok(Self {
            name: name.to_ascii_lowercase(),
            delimited: false,
        })
    }

    /// Delimited identifier from already-unescaped content.
    pub(crate) fn delimited(content: String) -> Self {
        Self {
            name: content,
            delimited: true,
        }
    }

    /// Canonical form used for comparison against the database dictionary.
    pub fn db_name(&self) -> String {
        if self.delimited {
            self.name.clone()
        } else {
            self.name.to_ascii_uppercase()
        }
    }

    pub fn is_delimited(&self) -> bool {
        self.delimited
    }
}

impl std::fmt::Display for SimpleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.delimited {
            write!(f, "\"{}\"", self.name.replace('"', "\"\""))
        } else {
            f.write_str(&self.name)
        }
    }
}

impl std::str::FromStr for SimpleName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
