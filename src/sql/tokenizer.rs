use crate::bind::{BindName, DbValue};
use crate::error::{Error, Result};
use crate::name::SimpleName;
use crate::sql::{
    keyword::Keyword,
    symbol::Symbol,
    token::Token,
    token_kind::{Comment, TokenKind},
};
use chrono::NaiveDate;

/// SQL tokenizer producing a flat stream of positioned `Token`s.
///
/// Behavior:
/// - Skips whitespace between tokens; whitespace is never a token.
/// - Tracks 1-based line/column of each token's first character (`\n`
///   increments the line and resets the column).
/// - Unquoted identifier runs classify against the keyword vocabulary once,
///   on a single lowered copy of the lexeme; everything else becomes a name.
/// - Delimited identifiers (`"..."`) and string literals (`'...'`) use quote
///   doubling as the escape; a string may span lines, a delimited identifier
///   may not.
/// - Symbols match greedily, two characters before one.
/// - `:ident` forms a bind placeholder; `DATE'...'` forms a date literal.
///
/// Failure: any malformed construct (unterminated quote/comment, unrecognized
/// character, malformed number or date) is a [`Error::Lexical`] carrying the
/// position; there is no partial recovery.
///
/// A fresh scan of the same text always produces identical output — the
/// tokenizer keeps no state across calls.
pub fn tokenize(sql: &str) -> Result<Vec<Token>> {
    Scanner::new(sql).scan_all()
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
}

impl Scanner {
    fn new(sql: &str) -> Self {
        Self {
            chars: sql.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn scan_all(mut self) -> Result<Vec<Token>> {
        let mut out = Vec::new();
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }
            let Some(c) = self.peek() else {
                break;
            };
            let (line, column) = (self.line, self.column);
            let kind = self.next_kind(c, line, column)?;
            out.push(Token::new(kind, line, column));
        }
        Ok(out)
    }

    fn next_kind(&mut self, c: char, line: u32, column: u32) -> Result<TokenKind> {
        match c {
            '-' if self.peek_next() == Some('-') => Ok(self.line_comment()),
            '/' if self.peek_next() == Some('*') => self.block_comment(line, column),
            '"' => self.delimited_name(line, column),
            '\'' => Ok(TokenKind::Literal(DbValue::VarChar(
                self.string_body(line, column)?,
            ))),
            ':' if self.peek_next().is_some_and(|n| n.is_ascii_alphabetic()) => {
                self.bind(line, column)
            }
            c if c.is_ascii_digit() => self.number(line, column),
            c if c.is_ascii_alphabetic() => self.word(line, column),
            _ => self.symbol(line, column),
        }
    }

    fn line_comment(&mut self) -> TokenKind {
        self.advance();
        self.advance();
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            text.push(c);
            self.advance();
        }
        TokenKind::Comment(Comment::Line(text.trim().to_string()))
    }

    fn block_comment(&mut self, line: u32, column: u32) -> Result<TokenKind> {
        self.advance();
        self.advance();
        let mut text = String::new();
        loop {
            match self.advance() {
                None => return Err(Error::lexical(line, column, "unterminated block comment")),
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    return Ok(TokenKind::Comment(Comment::Block(text)));
                }
                Some(c) => text.push(c),
            }
        }
    }

    fn delimited_name(&mut self, line: u32, column: u32) -> Result<TokenKind> {
        self.advance();
        let mut content = String::new();
        loop {
            match self.advance() {
                None => {
                    return Err(Error::lexical(
                        line,
                        column,
                        "unterminated delimited identifier",
                    ));
                }
                Some('"') => {
                    if self.peek() == Some('"') {
                        self.advance();
                        content.push('"');
                    } else {
                        break;
                    }
                }
                Some('\n') => {
                    return Err(Error::lexical(
                        line,
                        column,
                        "line break inside delimited identifier",
                    ));
                }
                Some(c) => content.push(c),
            }
        }
        if content.is_empty() {
            return Err(Error::lexical(line, column, "empty delimited identifier"));
        }
        Ok(TokenKind::Name(SimpleName::delimited(content)))
    }

    /// Body of a `'...'` literal, quotes consumed, `''` unescaped. Real line
    /// breaks are allowed inside a string.
    fn string_body(&mut self, line: u32, column: u32) -> Result<String> {
        self.advance();
        let mut content = String::new();
        loop {
            match self.advance() {
                None => return Err(Error::lexical(line, column, "unterminated string literal")),
                Some('\'') => {
                    if self.peek() == Some('\'') {
                        self.advance();
                        content.push('\'');
                    } else {
                        return Ok(content);
                    }
                }
                Some(c) => content.push(c),
            }
        }
    }

    fn bind(&mut self, line: u32, column: u32) -> Result<TokenKind> {
        self.advance();
        let lexeme = self.ident_run();
        let name = BindName::new(&lexeme)
            .map_err(|_| Error::lexical(line, column, format!("invalid bind name :{lexeme}")))?;
        Ok(TokenKind::Bind(name))
    }

    fn number(&mut self, line: u32, column: u32) -> Result<TokenKind> {
        let mut lexeme = String::new();
        let mut integral = true;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            lexeme.push(self.advance().unwrap());
        }
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            integral = false;
            lexeme.push(self.advance().unwrap());
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                lexeme.push(self.advance().unwrap());
            }
        }
        if self.peek().is_some_and(|c| matches!(c, 'e' | 'E')) {
            let exponent_digits = match self.peek_next() {
                Some(c) if c.is_ascii_digit() => true,
                Some('+' | '-') => self.chars.get(self.pos + 2).is_some_and(|c| c.is_ascii_digit()),
                _ => false,
            };
            if exponent_digits {
                integral = false;
                lexeme.push(self.advance().unwrap());
                if matches!(self.peek(), Some('+' | '-')) {
                    lexeme.push(self.advance().unwrap());
                }
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    lexeme.push(self.advance().unwrap());
                }
            }
        }
        let value = if integral {
            lexeme
                .parse::<i32>()
                .map(DbValue::Int)
                .or_else(|_| lexeme.parse::<i64>().map(DbValue::BigInt))
                .or_else(|_| lexeme.parse::<f64>().map(DbValue::Number))
        } else {
            lexeme.parse::<f64>().map(DbValue::Number)
        };
        match value {
            Ok(DbValue::Number(v)) if !v.is_finite() => {}
            Ok(value) => return Ok(TokenKind::Literal(value)),
            Err(_) => {}
        }
        Err(Error::lexical(
            line,
            column,
            format!("invalid numeric literal {lexeme}"),
        ))
    }

    fn word(&mut self, line: u32, column: u32) -> Result<TokenKind> {
        let lexeme = self.ident_run();
        if lexeme.eq_ignore_ascii_case("date") && self.peek() == Some('\'') {
            let text = self.string_body(line, column)?;
            let date = NaiveDate::parse_from_str(&text, "%Y-%m-%d").map_err(|_| {
                Error::lexical(line, column, format!("invalid date literal DATE'{text}'"))
            })?;
            return Ok(TokenKind::Literal(DbValue::Date(date)));
        }
        if let Some(keyword) = Keyword::from_lower(&lexeme.to_ascii_lowercase()) {
            return Ok(TokenKind::Keyword(keyword));
        }
        let name = SimpleName::ordinary(&lexeme)
            .map_err(|_| Error::lexical(line, column, format!("invalid identifier {lexeme}")))?;
        Ok(TokenKind::Name(name))
    }

    fn ident_run(&mut self) -> String {
        let mut lexeme = String::new();
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '#'))
        {
            lexeme.push(self.advance().unwrap());
        }
        lexeme
    }

    fn symbol(&mut self, line: u32, column: u32) -> Result<TokenKind> {
        if let Some(next) = self.peek_next() {
            let two: String = [self.chars[self.pos], next].iter().collect();
            if let Some(symbol) = Symbol::from_text(&two) {
                self.advance();
                self.advance();
                return Ok(TokenKind::Symbol(symbol));
            }
        }
        let c = self.chars[self.pos];
        if let Some(symbol) = Symbol::from_text(&c.to_string()) {
            self.advance();
            return Ok(TokenKind::Symbol(symbol));
        }
        Err(Error::lexical(
            line,
            column,
            format!("unrecognized character {c:?}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(sql: &str) -> Vec<TokenKind> {
        tokenize(sql).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn basic_select_sequence() {
        let toks = tokenize("SELECT a, b FROM t").unwrap();
        assert!(toks.iter().any(|t| t.is_keyword(Keyword::Select)));
        assert!(toks.iter().any(|t| t.is_keyword(Keyword::From)));
        assert!(
            toks.iter()
                .any(|t| t.name().is_some_and(|n| n.db_name() == "A"))
        );
        assert!(
            toks.iter()
                .any(|t| t.name().is_some_and(|n| n.db_name() == "T"))
        );
    }

    #[test]
    fn positions_are_one_based_lines_and_columns() {
        let toks = tokenize("select x\n  from t").unwrap();
        let positions: Vec<_> = toks.iter().map(Token::position).collect();
        assert_eq!(positions, [(1, 1), (1, 8), (2, 3), (2, 8)]);
    }

    #[test]
    fn repeated_scans_are_identical() {
        let sql = "select a /* c */ from t where x = :b1";
        assert_eq!(tokenize(sql).unwrap(), tokenize(sql).unwrap());
    }

    #[test]
    fn unquoted_name_case_contract() {
        let toks = tokenize("N$1ME").unwrap();
        let name = toks[0].name().unwrap();
        assert_eq!(name.db_name(), "N$1ME");
        assert_eq!(name.to_string(), "n$1me");
    }

    #[test]
    fn delimited_name_preserves_case() {
        let toks = tokenize("\"Name\"").unwrap();
        let name = toks[0].name().unwrap();
        assert_eq!(name.db_name(), "Name");
        assert_eq!(name.to_string(), "\"Name\"");
    }

    #[test]
    fn delimited_name_escaped_quote() {
        let toks = tokenize("\"a\"\"b\"").unwrap();
        assert_eq!(toks[0].name().unwrap().db_name(), "a\"b");
    }

    #[test]
    fn bind_markers_case_fold() {
        let toks = tokenize(":Name + :name").unwrap();
        assert_eq!(toks[0].bind_name().unwrap().as_str(), "name");
        assert_eq!(toks[2].bind_name().unwrap().as_str(), "name");
    }

    #[test]
    fn assign_symbol_beats_bind_marker() {
        assert_eq!(
            kinds("x := 1"),
            [
                TokenKind::Name(SimpleName::new("x").unwrap()),
                TokenKind::Symbol(Symbol::Assign),
                TokenKind::Literal(DbValue::Int(1)),
            ]
        );
    }

    #[test]
    fn longest_match_symbols() {
        assert_eq!(
            kinds("a<=b<>c||d"),
            [
                TokenKind::Name(SimpleName::new("a").unwrap()),
                TokenKind::Symbol(Symbol::LessOrEqual),
                TokenKind::Name(SimpleName::new("b").unwrap()),
                TokenKind::Symbol(Symbol::NotEqualBrackets),
                TokenKind::Name(SimpleName::new("c").unwrap()),
                TokenKind::Symbol(Symbol::Concat),
                TokenKind::Name(SimpleName::new("d").unwrap()),
            ]
        );
    }

    #[test]
    fn string_literal_with_escapes_and_newline() {
        assert_eq!(
            kinds("'it''s'"),
            [TokenKind::Literal(DbValue::VarChar("it's".into()))]
        );
        assert_eq!(
            kinds("'a\nb'"),
            [TokenKind::Literal(DbValue::VarChar("a\nb".into()))]
        );
    }

    #[test]
    fn date_literal() {
        assert_eq!(
            kinds("DATE'2018-01-12'"),
            [TokenKind::Literal(DbValue::Date(
                NaiveDate::from_ymd_opt(2018, 1, 12).unwrap()
            ))]
        );
    }

    #[test]
    fn malformed_date_literal_is_lexical_error() {
        assert!(matches!(
            tokenize("DATE'2018-13-40'"),
            Err(Error::Lexical { line: 1, column: 1, .. })
        ));
    }

    #[test]
    fn numbers_classify_by_width() {
        assert_eq!(kinds("5"), [TokenKind::Literal(DbValue::Int(5))]);
        assert_eq!(
            kinds("5000000000"),
            [TokenKind::Literal(DbValue::BigInt(5_000_000_000))]
        );
        assert_eq!(kinds("1.5"), [TokenKind::Literal(DbValue::Number(1.5))]);
        assert_eq!(kinds("2e3"), [TokenKind::Literal(DbValue::Number(2000.0))]);
    }

    #[test]
    fn dot_after_integer_is_a_symbol_when_no_fraction_follows() {
        assert_eq!(
            kinds("1.x"),
            [
                TokenKind::Literal(DbValue::Int(1)),
                TokenKind::Symbol(Symbol::Dot),
                TokenKind::Name(SimpleName::new("x").unwrap()),
            ]
        );
    }

    #[test]
    fn comments() {
        assert_eq!(
            kinds("-- note  \nx"),
            [
                TokenKind::Comment(Comment::Line("note".into())),
                TokenKind::Name(SimpleName::new("x").unwrap()),
            ]
        );
        assert_eq!(
            kinds("/* multi\nline */"),
            [TokenKind::Comment(Comment::Block(" multi\nline ".into()))]
        );
    }

    #[test]
    fn lexical_errors_carry_position() {
        for (sql, line, column) in [
            ("'open", 1, 1),
            ("\"open", 1, 1),
            ("/* open", 1, 1),
            ("x &", 1, 3),
            ("select\n \"a\nb\"", 2, 2),
        ] {
            match tokenize(sql) {
                Err(Error::Lexical {
                    line: l,
                    column: c,
                    ..
                }) => assert_eq!((l, c), (line, column), "position for {sql:?}"),
                other => panic!("expected lexical error for {sql:?}, got {other:?}"),
            }
        }
    }
}
