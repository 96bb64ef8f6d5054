use crate::error::{Error, Result};
use crate::name::SimpleName;
use itertools::Itertools as _;

/// A dotted identifier path, ordered outermost first.
pub trait NamePath {
    fn segments(&self) -> &[SimpleName];

    /// True when `other`'s segments form a trailing suffix of this path,
    /// compared on `db_name()`.
    ///
    /// Direction matters: a fully qualified path matches its own tail
    /// (`brc.brc_record_tb` matches `brc_record_tb`), but a bare name never
    /// matches a longer, more qualified reference.
    fn matches(&self, other: &impl NamePath) -> bool {
        let own = self.segments();
        let reference = other.segments();
        reference.len() <= own.len()
            && own[own.len() - reference.len()..]
                .iter()
                .zip(reference)
                .all(|(a, b)| a.db_name() == b.db_name())
    }
}

impl NamePath for SimpleName {
    fn segments(&self) -> &[SimpleName] {
        std::slice::from_ref(self)
    }
}

/// Multi-segment path (`schema.table.column`); always at least one segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SegmentedName {
    segments: Vec<SimpleName>,
}

impl SegmentedName {
    pub fn new(segments: Vec<SimpleName>) -> Result<Self> {
        if segments.is_empty() {
            return Err(Error::InvalidName(String::new()));
        }
        Ok(Self { segments })
    }

    /// Parse dotted text; dots inside delimited segments do not split.
    pub fn parse(text: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;
        for c in text.chars() {
            match c {
                '"' => {
                    in_quotes = !in_quotes;
                    current.push(c);
                }
                '.' if !in_quotes => {
                    segments.push(SimpleName::new(&current)?);
                    current.clear();
                }
                _ => current.push(c),
            }
        }
        if in_quotes {
            return Err(Error::InvalidName(text.to_string()));
        }
        segments.push(SimpleName::new(&current)?);
        Self::new(segments)
    }
}

impl NamePath for SegmentedName {
    fn segments(&self) -> &[SimpleName] {
        &self.segments
    }
}

impl From<SimpleName> for SegmentedName {
    fn from(name: SimpleName) -> Self {
        Self {
            segments: vec![name],
        }
    }
}

impl std::fmt::Display for SegmentedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.segments.iter().join("."))
    }
}

impl std::str::FromStr for SegmentedName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let path = SegmentedName::parse("Brc.BRC_RECORD_TB").unwrap();
        assert_eq!(path.segments().len(), 2);
        assert_eq!(path.to_string(), "brc.brc_record_tb");
    }

    #[test]
    fn parse_delimited_segment_with_dot() {
        let path = SegmentedName::parse("schema.\"Odd.Name\"").unwrap();
        assert_eq!(path.segments().len(), 2);
        assert_eq!(path.to_string(), "schema.\"Odd.Name\"");
    }

    #[test]
    fn suffix_matching_is_direction_sensitive() {
        let full = SegmentedName::parse("brc.brc_record_tb").unwrap();
        let tail = SimpleName::new("BRC_RECORD_TB").unwrap();
        assert!(full.matches(&tail));
        assert!(!tail.matches(&full));
    }

    #[test]
    fn equal_length_paths_match_on_content() {
        let a = SegmentedName::parse("brc.brc_record_tb").unwrap();
        let b = SegmentedName::parse("BRC.BRC_RECORD_TB").unwrap();
        assert!(a.matches(&b));
        assert!(b.matches(&a));
        let c = SegmentedName::parse("other.brc_record_tb").unwrap();
        assert!(!a.matches(&c));
    }

    #[test]
    fn delimited_segments_compare_verbatim() {
        let quoted = SegmentedName::parse("\"Brc_Record_Tb\"").unwrap();
        let plain = SimpleName::new("brc_record_tb").unwrap();
        // BRC_RECORD_TB (folded) vs Brc_Record_Tb (verbatim) differ
        assert!(!quoted.matches(&plain));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(SegmentedName::parse("").is_err());
        assert!(SegmentedName::parse("a..b").is_err());
        assert!(SegmentedName::new(Vec::new()).is_err());
    }
}
