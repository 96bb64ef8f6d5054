use crate::bind::BindName;
use crate::error::Result;
use crate::sql::{
    token::{Spacing, Token},
    token_kind::TokenKind,
    tokenizer::tokenize,
};

/// One distinct bind name of a statement together with every 1-based
/// parameter position at which it occurs. A name used twice yields one entry
/// with two positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindPosition {
    pub name: BindName,
    pub positions: Vec<usize>,
}

/// Result of [`normalize`]: canonical statement text with every bind
/// rewritten to the driver placeholder, plus the ordered bind list.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSql {
    pub text: String,
    pub binds: Vec<BindPosition>,
}

impl NormalizedSql {
    pub fn bind_names(&self) -> impl Iterator<Item = &BindName> {
        self.binds.iter().map(|b| &b.name)
    }
}

/// Rewrite raw SQL into its canonical, whitespace-minimized form.
///
/// Names and keywords render lowercase (delimited names verbatim), literals
/// through their SQL rendering, and each bind occurrence becomes `?` while
/// its parameter position is recorded. Comments are carried through; a line
/// comment forces the following token onto a new line.
///
/// The spacing between two adjacent tokens follows their declared hints:
/// `ForceNone` on either side suppresses any separator, otherwise `Force`
/// inserts a line break, otherwise `None` on either side joins the tokens
/// directly, otherwise a single space. The result is deterministic and
/// idempotent — normalizing already-normalized text is a fixpoint.
///
/// Whether every bind later receives a value is not this function's concern;
/// that check happens against the combined [`crate::bind::BindMap`] before
/// execution.
pub fn normalize(sql: &str) -> Result<NormalizedSql> {
    let tokens = tokenize(sql)?;
    let mut text = String::new();
    let mut binds: Vec<BindPosition> = Vec::new();
    let mut position = 0usize;
    let mut previous: Option<&Token> = None;

    for token in &tokens {
        if let Some(prev) = previous {
            text.push_str(separator(prev.space_after(), token.space_before()));
        }
        match &token.kind {
            TokenKind::Bind(name) => {
                position += 1;
                match binds.iter_mut().find(|b| &b.name == name) {
                    Some(existing) => existing.positions.push(position),
                    None => binds.push(BindPosition {
                        name: name.clone(),
                        positions: vec![position],
                    }),
                }
                text.push('?');
            }
            kind => text.push_str(&kind.sql_text()),
        }
        previous = Some(token);
    }

    Ok(NormalizedSql { text, binds })
}

fn separator(after: Spacing, before: Spacing) -> &'static str {
    use Spacing::*;
    if after == ForceNone || before == ForceNone {
        ""
    } else if after == Force || before == Force {
        "\n"
    } else if after == None || before == None {
        ""
    } else {
        " "
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bind(name: &str, positions: &[usize]) -> BindPosition {
        BindPosition {
            name: BindName::new(name).unwrap(),
            positions: positions.to_vec(),
        }
    }

    #[test]
    fn bind_position_completeness() {
        let result = normalize("arc.call(p_A => :a, p_B => :b2);").unwrap();
        assert_eq!(result.text, "arc.call(p_a => ?, p_b => ?);");
        assert_eq!(result.binds, [bind("a", &[1]), bind("b2", &[2])]);
    }

    #[test]
    fn repeated_bind_gets_one_entry_two_positions() {
        let result = normalize("select * from t where a = :x or b = :X").unwrap();
        assert_eq!(result.binds, [bind("x", &[1, 2])]);
        assert_eq!(result.text, "select * from t where a = ? or b = ?");
    }

    #[test]
    fn collapses_whitespace_and_folds_case() {
        let result = normalize("SELECT  a ,\n\tb FROM   Tbl").unwrap();
        assert_eq!(result.text, "select a, b from tbl");
        assert!(result.binds.is_empty());
    }

    #[test]
    fn delimited_names_survive_verbatim() {
        let result = normalize("select \"Name\" from t").unwrap();
        assert_eq!(result.text, "select \"Name\" from t");
    }

    #[test]
    fn line_comment_forces_newline() {
        let result = normalize("select a -- first column\nfrom t").unwrap();
        assert_eq!(result.text, "select a -- first column\nfrom t");
    }

    #[test]
    fn literals_render_canonically() {
        let result = normalize("select 'it''s', DATE'2018-01-12', 1.5 from d").unwrap();
        assert_eq!(
            result.text,
            "select 'it''s', DATE'2018-01-12', 1.5 from d"
        );
    }

    #[test]
    fn multiline_string_splits_on_chr10() {
        let result = normalize("select 'a\nb' from d").unwrap();
        assert_eq!(result.text, "select 'a'||chr(10)||'b' from d");
    }

    #[test]
    fn idempotence() {
        for sql in [
            "arc.call(p_A => :a, p_B => :b2);",
            "SELECT  a ,  b FROM Tbl WHERE x<=:y -- tail comment",
            "begin proc(:a); end;",
            "select 'a\nb', \"Mixed\" , 2e3 from d where c <> 5",
            "/* header */ update t set a = :a where id = :id",
        ] {
            let first = normalize(sql).unwrap();
            let second = normalize(&first.text).unwrap();
            assert_eq!(first.text, second.text, "not a fixpoint for {sql:?}");
            // binds were already rewritten to plain placeholders
            assert!(second.binds.is_empty());
        }
    }

    #[test]
    fn statement_separator_breaks_line() {
        let result = normalize("select 1 from dual; select 2 from dual;").unwrap();
        assert_eq!(result.text, "select 1 from dual;\nselect 2 from dual;");
    }

    #[test]
    fn lexical_error_propagates() {
        assert!(normalize("select 'unterminated").is_err());
    }
}
