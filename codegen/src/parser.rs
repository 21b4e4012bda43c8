//! Line-oriented MySQL `CREATE TABLE` parser
//!
//! Parsing is strictly line-local, matching the layout `SHOW CREATE TABLE`
//! produces: one column per line, the `CREATE TABLE` header on its own line and
//! the table options (`ENGINE=... COMMENT='...'`) after the closing parenthesis.
//!
//! Lines are classified by how they start, keywords compared ASCII
//! case-insensitively, so text inside quoted comments never changes the layout:
//!
//! - `CREATE [TEMPORARY] TABLE` names the table;
//! - a backtick defines a column;
//! - `PRIMARY KEY` or `CONSTRAINT ... PRIMARY KEY` marks its listed columns;
//! - `)` closes the column list; it and any later line carry table options,
//!   of which only `COMMENT [=] '...'` is read.
//!
//! Everything else (indexes, constraints, blank lines, SQL comments) is skipped.

use crate::ddl::{Field, Table};
use crate::error::ParseError;
use crate::types::GoType;

/// Parse a single `CREATE TABLE` statement into a [`Table`].
///
/// A second `CREATE TABLE` header ends the statement; use [`split_statements`]
/// for multi-statement dumps.
pub fn parse_table(ddl: &str) -> Result<Table, ParseError> {
    let mut table: Option<Table> = None;
    let mut fields: Vec<Field> = Vec::new();
    let mut comment = None;
    let mut key_columns: Vec<String> = Vec::new();
    let mut in_options = false;

    for (idx, raw) in ddl.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(from) = create_table_header(line) {
            if table.is_some() {
                break;
            }
            table = Some(Table::new(create_table_name(line, from, line_no)?));
            continue;
        }

        if table.is_none() {
            continue;
        }

        if in_options || line.starts_with(')') {
            in_options = true;
            if let Some(text) = table_comment(line, line_no)? {
                comment = Some(text);
            }
            if line.ends_with(';') {
                break;
            }
            continue;
        }

        if line.starts_with('`') {
            fields.push(parse_column(line, line_no)?);
            continue;
        }

        if strip_keyword(line, "PRIMARY").is_some()
            || strip_keyword(line, "CONSTRAINT").is_some()
        {
            key_columns.extend(primary_key_columns(line, line_no)?);
        }
    }

    let mut table = table.ok_or(ParseError::MissingCreateTable)?;
    table.comment = comment;
    for field in fields {
        table.push_field(field);
    }

    for column in key_columns {
        match table.field_mut(&column) {
            Some(field) => field.is_primary_key = true,
            None => return Err(ParseError::UnknownKeyColumn { column }),
        }
    }

    tracing::debug!(
        table = %table.name,
        fields = table.fields.len(),
        has_time = table.has_time_field,
        "parsed table ddl"
    );

    Ok(table)
}

/// Extract only the table name from a `CREATE TABLE` statement
pub fn table_name(ddl: &str) -> Result<String, ParseError> {
    for (idx, raw) in ddl.lines().enumerate() {
        let line = raw.trim();
        if let Some(from) = create_table_header(line) {
            return create_table_name(line, from, idx + 1);
        }
    }
    Err(ParseError::MissingCreateTable)
}

/// Split a DDL dump into `CREATE TABLE` statements.
///
/// A statement starts at a line beginning with `CREATE TABLE` (any case) and
/// runs until a line ending in `;` or the next such line. Text outside statements is
/// dropped.
pub fn split_statements(text: &str) -> Vec<&str> {
    let mut statements = Vec::new();
    let mut start: Option<usize> = None;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        let trimmed = line.trim();

        if create_table_header(trimmed).is_some() {
            if let Some(s) = start.take() {
                statements.push(text[s..line_start].trim_end());
            }
            start = Some(line_start);
        }

        if start.is_some() && trimmed.ends_with(';') {
            if let Some(s) = start.take() {
                statements.push(text[s..offset].trim_end());
            }
        }
    }

    if let Some(s) = start {
        let rest = text[s..].trim_end();
        if !rest.is_empty() {
            statements.push(rest);
        }
    }

    statements
}

/// Offset just past `CREATE [TEMPORARY] TABLE` when `line` starts with it
fn create_table_header(line: &str) -> Option<usize> {
    let mut rest = strip_keyword(line, "CREATE")?;
    if let Some(after) = strip_keyword(rest, "TEMPORARY") {
        rest = after;
    }
    let after = strip_keyword(rest, "TABLE")?;
    Some(line.len() - after.len())
}

/// The rest of `text` after a leading keyword (ASCII case-insensitive) that
/// ends at whitespace, a backtick or the end of the text
fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let head = text.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }
    let rest = &text[keyword.len()..];
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_whitespace() || c == '`' => Some(rest.trim_start()),
        _ => None,
    }
}

fn create_table_name(line: &str, from: usize, line_no: usize) -> Result<String, ParseError> {
    let tokens = tokenize_from(line, from, line_no)?;
    let mut iter = tokens.into_iter().skip_while(|tok| {
        matches!(tok, Token::Word(w) if ["IF", "NOT", "EXISTS"].iter().any(|k| w.eq_ignore_ascii_case(k)))
    });

    let name = match iter.next() {
        Some(Token::Ident(first)) => {
            // `schema`.`table`
            match (iter.next(), iter.next()) {
                (Some(Token::Word(".")), Some(Token::Ident(second))) => second.to_string(),
                _ => first.to_string(),
            }
        }
        Some(Token::Word(word)) => word.rsplit('.').next().unwrap_or(word).to_string(),
        _ => String::new(),
    };

    if name.is_empty() {
        return Err(ParseError::MissingTableName { line: line_no });
    }
    Ok(name)
}

/// `COMMENT [=] '...'` among the table options
fn table_comment(line: &str, line_no: usize) -> Result<Option<String>, ParseError> {
    let tokens = tokenize(line, line_no)?;
    let mut iter = tokens.into_iter().peekable();
    while let Some(tok) = iter.next() {
        if !is_keyword(&tok, "COMMENT") {
            continue;
        }
        iter.next_if_eq(&Token::Punct('='));
        if let Some(Token::Str(text)) = iter.next() {
            return Ok(Some(text));
        }
    }
    Ok(None)
}

/// Columns listed after `PRIMARY KEY`; empty when the line declares another key
fn primary_key_columns(line: &str, line_no: usize) -> Result<Vec<String>, ParseError> {
    let tokens = tokenize(line, line_no)?;
    let Some(pos) = tokens
        .windows(2)
        .position(|pair| is_keyword(&pair[0], "PRIMARY") && is_keyword(&pair[1], "KEY"))
    else {
        return Ok(Vec::new());
    };
    Ok(tokens[pos + 2..]
        .iter()
        .filter_map(|tok| match tok {
            Token::Ident(name) => Some(name.to_string()),
            _ => None,
        })
        .collect())
}

fn parse_column(line: &str, line_no: usize) -> Result<Field, ParseError> {
    let tokens = tokenize(line, line_no)?;
    let mut iter = tokens.iter();

    let Some(Token::Ident(name)) = iter.next() else {
        return Err(ParseError::UnterminatedIdentifier {
            line: line_no,
            text: line.to_string(),
        });
    };

    let base = match iter.next() {
        Some(Token::Word(word)) => word
            .chars()
            .take_while(char::is_ascii_alphabetic)
            .collect::<String>()
            .to_ascii_lowercase(),
        _ => String::new(),
    };
    if base.is_empty() {
        return Err(ParseError::MissingColumnType {
            line: line_no,
            text: line.to_string(),
        });
    }

    let rest: Vec<&Token> = iter.collect();
    let mut unsigned = false;
    let mut comment = None;
    let mut default = None;
    let mut is_primary_key = false;

    let mut i = 0;
    while i < rest.len() {
        if let Token::Word(word) = rest[i] {
            if word.eq_ignore_ascii_case("unsigned") {
                unsigned = true;
            } else if word.eq_ignore_ascii_case("DEFAULT") {
                default = match rest.get(i + 1) {
                    Some(Token::Str(value)) => Some(value.clone()),
                    Some(Token::Word(value)) if !value.eq_ignore_ascii_case("NULL") => {
                        Some(value.to_string())
                    }
                    _ => None,
                };
                i += 1;
            } else if word.eq_ignore_ascii_case("COMMENT") {
                if let Some(Token::Str(text)) = rest.get(i + 1) {
                    comment = Some(text.clone());
                    i += 1;
                }
            } else if word.eq_ignore_ascii_case("PRIMARY")
                && matches!(rest.get(i + 1), Some(Token::Word(k)) if k.eq_ignore_ascii_case("KEY"))
            {
                is_primary_key = true;
                i += 1;
            }
        }
        i += 1;
    }

    let mut field = Field::new(*name, GoType::from_mysql(&base, unsigned));
    field.unsigned = unsigned;
    field.comment = comment;
    field.default = default;
    field.is_primary_key = is_primary_key;
    Ok(field)
}

// =============================================================================
// Tokenizer
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    /// `` `name` ``
    Ident(&'a str),
    /// `'text'` with escapes resolved
    Str(String),
    /// Any other run of non-separator characters
    Word(&'a str),
    /// `(` `)` `,` `=` `;`
    Punct(char),
}

fn is_keyword(tok: &Token<'_>, keyword: &str) -> bool {
    matches!(tok, Token::Word(w) if w.eq_ignore_ascii_case(keyword))
}

fn tokenize(line: &str, line_no: usize) -> Result<Vec<Token<'_>>, ParseError> {
    tokenize_from(line, 0, line_no)
}

/// Tokenize `line[from..]`; errors still quote the whole line.
fn tokenize_from(line: &str, from: usize, line_no: usize) -> Result<Vec<Token<'_>>, ParseError> {
    let mut tokens = Vec::new();
    let bytes = line.as_bytes();
    let mut i = from;

    while i < bytes.len() {
        let c = bytes[i];
        match c {
            b' ' | b'\t' | b'\r' | b'\n' => i += 1,
            b'`' => {
                let Some(len) = line[i + 1..].find('`') else {
                    return Err(ParseError::UnterminatedIdentifier {
                        line: line_no,
                        text: line.to_string(),
                    });
                };
                tokens.push(Token::Ident(&line[i + 1..i + 1 + len]));
                i += len + 2;
            }
            b'\'' => {
                let (text, next) = sql_string(line, i + 1).ok_or_else(|| {
                    ParseError::UnterminatedString {
                        line: line_no,
                        text: line.to_string(),
                    }
                })?;
                tokens.push(Token::Str(text));
                i = next;
            }
            b'(' | b')' | b',' | b'=' | b';' => {
                tokens.push(Token::Punct(c as char));
                i += 1;
            }
            _ => {
                let start = i;
                while i < bytes.len() && !is_separator(bytes[i]) {
                    i += 1;
                }
                tokens.push(Token::Word(&line[start..i]));
            }
        }
    }

    Ok(tokens)
}

fn is_separator(b: u8) -> bool {
    matches!(
        b,
        b' ' | b'\t' | b'\r' | b'\n' | b'`' | b'\'' | b'(' | b')' | b',' | b'=' | b';'
    )
}

/// Read a single-quoted SQL string body starting at `start` (just past the
/// opening quote). Returns the unescaped text and the index after the closing
/// quote, or `None` when the string never terminates.
fn sql_string(line: &str, start: usize) -> Option<(String, usize)> {
    let mut out = String::new();
    let mut chars = line[start..].char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '\'' => {
                if let Some((_, '\'')) = chars.peek() {
                    chars.next();
                    out.push('\'');
                } else {
                    return Some((out, start + offset + 1));
                }
            }
            '\\' => match chars.next() {
                Some((_, 'n' | 'r' | 't')) => out.push(' '),
                Some((_, escaped)) => out.push(escaped),
                None => return None,
            },
            other => out.push(other),
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDERS: &str = "CREATE TABLE `order_info` (
  `id` bigint(20) unsigned NOT NULL AUTO_INCREMENT COMMENT 'primary id',
  `amount` decimal(10,2) unsigned NOT NULL DEFAULT '0.00' COMMENT 'order amount',
  `state` tinyint(4) NOT NULL DEFAULT 1,
  `note` varchar(64) DEFAULT NULL COMMENT 'it''s a note, really',
  `created_at` datetime NOT NULL DEFAULT CURRENT_TIMESTAMP,
  `shape` geometry,
  PRIMARY KEY (`id`),
  KEY `idx_state` (`state`)
) ENGINE=InnoDB AUTO_INCREMENT=7 DEFAULT CHARSET=utf8mb4 COMMENT='orders'";

    #[test]
    fn parses_columns_in_order() {
        let table = parse_table(ORDERS).unwrap();
        assert_eq!(table.name, "order_info");
        assert_eq!(table.struct_name, "OrderInfo");
        assert_eq!(table.comment.as_deref(), Some("orders"));

        let names: Vec<_> = table.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["id", "amount", "state", "note", "created_at", "shape"]);
    }

    #[test]
    fn types_and_modifiers() {
        let table = parse_table(ORDERS).unwrap();

        let id = table.field("id").unwrap();
        assert!(id.unsigned);
        assert_eq!(id.ty, GoType::Uint64);
        assert!(id.is_primary_key);
        assert_eq!(id.comment.as_deref(), Some("primary id"));

        let amount = table.field("amount").unwrap();
        assert_eq!(amount.ty, GoType::String);
        assert_eq!(amount.default.as_deref(), Some("0.00"));

        assert_eq!(table.field("state").unwrap().ty, GoType::Uint8);
        assert_eq!(table.field("state").unwrap().default.as_deref(), Some("1"));

        let created = table.field("created_at").unwrap();
        assert!(created.ty.is_time());
        assert_eq!(created.default.as_deref(), Some("CURRENT_TIMESTAMP"));
        assert!(table.has_time_field);

        assert_eq!(table.field("shape").unwrap().ty, GoType::Unknown("geometry".into()));
    }

    #[test]
    fn default_null_is_absent_and_quotes_unescape() {
        let table = parse_table(ORDERS).unwrap();
        let note = table.field("note").unwrap();
        assert_eq!(note.default, None);
        assert_eq!(note.comment.as_deref(), Some("it's a note, really"));
    }

    #[test]
    fn inline_primary_key() {
        let table = parse_table("CREATE TABLE `t` (\n  `id` int NOT NULL PRIMARY KEY,\n  `v` int\n)").unwrap();
        assert!(table.field("id").unwrap().is_primary_key);
        assert!(!table.field("v").unwrap().is_primary_key);
    }

    #[test]
    fn composite_primary_key() {
        let ddl = "CREATE TABLE `t` (\n`a` int,\n`b` int,\n`c` int,\nPRIMARY KEY (`a`,`b`)\n)";
        let table = parse_table(ddl).unwrap();
        let keys: Vec<_> = table.fields.iter().map(|f| f.is_primary_key).collect();
        assert_eq!(keys, [true, true, false]);
    }

    #[test]
    fn key_on_missing_column() {
        let ddl = "CREATE TABLE `t` (\n`a` int,\nPRIMARY KEY (`z`)\n)";
        assert_eq!(
            parse_table(ddl),
            Err(ParseError::UnknownKeyColumn { column: "z".into() })
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        let table = parse_table("\n\nCREATE TABLE `t` (\n\n   \n`a` int\n)\n").unwrap();
        assert_eq!(table.fields.len(), 1);
    }

    #[test]
    fn comment_keyword_inside_string_is_data() {
        let ddl = "CREATE TABLE `t` (\n`a` varchar(8) DEFAULT 'PRIMARY KEY' COMMENT 'x'\n)";
        let table = parse_table(ddl).unwrap();
        let a = table.field("a").unwrap();
        assert!(!a.is_primary_key);
        assert_eq!(a.default.as_deref(), Some("PRIMARY KEY"));
        assert_eq!(a.comment.as_deref(), Some("x"));
    }

    #[test]
    fn qualified_and_bare_names() {
        assert_eq!(table_name("CREATE TABLE IF NOT EXISTS `shop`.`items` (").unwrap(), "items");
        assert_eq!(table_name("CREATE TABLE items (").unwrap(), "items");
        assert_eq!(table_name("CREATE TABLE shop.items (").unwrap(), "items");
    }

    #[test]
    fn errors() {
        assert_eq!(parse_table("`a` int"), Err(ParseError::MissingCreateTable));
        assert_eq!(
            parse_table("CREATE TABLE `users ("),
            Err(ParseError::UnterminatedIdentifier {
                line: 1,
                text: "CREATE TABLE `users (".into()
            })
        );
        assert_eq!(
            parse_table("CREATE TABLE ("),
            Err(ParseError::MissingTableName { line: 1 })
        );
        assert!(matches!(
            parse_table("CREATE TABLE `t` (\n`a`\n)"),
            Err(ParseError::MissingColumnType { line: 2, .. })
        ));
        assert!(matches!(
            parse_table("CREATE TABLE `t` (\n`a` int COMMENT 'oops\n)"),
            Err(ParseError::UnterminatedString { line: 2, .. })
        ));
    }

    #[test]
    fn splits_dump() {
        let dump = "-- dump\nCREATE TABLE `a` (\n`id` int\n);\n\nDROP TABLE x;\nCREATE TABLE `b` (\n`id` int\n)\nCREATE TABLE `c` (\n`id` int\n);";
        let statements = split_statements(dump);
        assert_eq!(statements.len(), 3);
        assert!(statements[0].starts_with("CREATE TABLE `a`"));
        assert!(statements[0].ends_with(");"));
        assert_eq!(statements[1], "CREATE TABLE `b` (\n`id` int\n)");
        assert_eq!(table_name(statements[2]).unwrap(), "c");
    }

    #[test]
    fn layout_keywords_inside_comments_are_data() {
        let ddl = "CREATE TABLE `t` (
  `id` int,
  `sql` text COMMENT 'the CREATE TABLE text',
  `engine_note` varchar(8) COMMENT 'ENGINE COMMENT=x',
  `after` int
) ENGINE=InnoDB COMMENT='real';";
        let table = parse_table(ddl).unwrap();
        let names: Vec<_> = table.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["id", "sql", "engine_note", "after"]);
        assert_eq!(table.comment.as_deref(), Some("real"));
        assert_eq!(
            table.field("sql").unwrap().comment.as_deref(),
            Some("the CREATE TABLE text")
        );

        let statements = split_statements(ddl);
        assert_eq!(statements, [ddl]);
    }

    #[test]
    fn keywords_are_case_insensitive() {
        let ddl = "create table if not exists `users` (
  `id` int not null comment 'key',
  `name` varchar(32) default 'x',
  primary key (`id`)
) engine=InnoDB comment='user table';";
        let statements = split_statements(ddl);
        assert_eq!(statements.len(), 1);
        assert_eq!(table_name(statements[0]).unwrap(), "users");

        let table = parse_table(ddl).unwrap();
        assert_eq!(table.comment.as_deref(), Some("user table"));
        assert!(table.field("id").unwrap().is_primary_key);
        assert_eq!(table.field("name").unwrap().default.as_deref(), Some("x"));
    }

    #[test]
    fn table_comment_spellings() {
        let spaced = parse_table("CREATE TABLE `t` (\n`a` int\n) ENGINE=InnoDB COMMENT = 'user table'").unwrap();
        assert_eq!(spaced.comment.as_deref(), Some("user table"));

        let bare = parse_table("CREATE TABLE `t` (\n`a` int\n) COMMENT 'no equals'").unwrap();
        assert_eq!(bare.comment.as_deref(), Some("no equals"));

        let next_line = parse_table("CREATE TABLE `t` (\n`a` int\n)\nENGINE=InnoDB\nCOMMENT='below';").unwrap();
        assert_eq!(next_line.comment.as_deref(), Some("below"));

        let none = parse_table("CREATE TABLE `t` (\n`a` int\n) ENGINE=InnoDB").unwrap();
        assert_eq!(none.comment, None);
    }

    #[test]
    fn constraint_primary_key_and_temporary_table() {
        let ddl = "CREATE TEMPORARY TABLE `tmp` (\n`a` int,\n`b` int,\nCONSTRAINT `pk_tmp` PRIMARY KEY (`b`),\nCONSTRAINT `fk` FOREIGN KEY (`a`) REFERENCES `x` (`id`)\n)";
        let table = parse_table(ddl).unwrap();
        assert_eq!(table.name, "tmp");
        assert!(!table.field("a").unwrap().is_primary_key);
        assert!(table.field("b").unwrap().is_primary_key);
    }

    #[test]
    fn header_must_start_the_line() {
        assert_eq!(parse_table("-- CREATE TABLE `x` (\n`a` int"), Err(ParseError::MissingCreateTable));
        assert!(split_statements("SELECT 'CREATE TABLE `x`';").is_empty());
        assert_eq!(create_table_header("CREATE TABLEAU"), None);
        assert_eq!(create_table_header("create  table `x`"), Some(14));
    }
}
