//! Go source generation
//!
//! Renders a [`Table`] into a Go file in a single pass: package header, an
//! optional `time` import, the struct with one tagged member per column, and a
//! `TableName` accessor. The output is deterministic; rendering the same table
//! twice yields identical bytes.
//!
//! Initialisms are normalized in the Go identifiers only. Column names in tags,
//! comments and the `TableName()` literal keep the database spelling.

use std::fmt::Write;

use crate::ddl::{Field, Table};
use crate::error::TemplateError;
use crate::initialisms::normalize_initialisms;

const HEADER: &str = "// Code generated by sql2struct. DO NOT EDIT.";

/// Options for code generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Go package name
    pub package: String,
    /// Struct tag key holding the column mapping (`gorm`, `db`, ...)
    pub tag_key: String,
    /// Add a `json:"<column>"` tag to every member
    pub with_json_tag: bool,
    /// Prefix prepended to the name returned by `TableName()`
    pub table_prefix: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            package: "model".to_string(),
            tag_key: "gorm".to_string(),
            with_json_tag: true,
            table_prefix: String::new(),
        }
    }
}

/// Result of code generation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedFile {
    /// The generated Go source code
    pub code: String,
    /// Non-fatal problems found while rendering
    pub warnings: Vec<String>,
}

impl Field {
    /// Struct tag for this column, backticks included.
    ///
    /// A default containing a backtick cannot live in a Go raw string and is
    /// left out; [`generate`] reports it as a warning.
    pub fn tag(&self, options: &GenerateOptions) -> String {
        let mut tag = format!("`{}:\"column:{}", options.tag_key, self.name);
        if self.is_primary_key {
            tag.push_str(";primary_key");
        }
        if let Some(default) = self.tag_default() {
            tag.push_str(";default:");
            tag.push_str(&escape_quoted(default));
        }
        tag.push('"');
        if options.with_json_tag {
            tag.push_str(" json:\"");
            tag.push_str(&self.name);
            tag.push('"');
        }
        tag.push('`');
        tag
    }

    fn tag_default(&self) -> Option<&str> {
        self.default
            .as_deref()
            .filter(|d| !d.is_empty() && !d.contains('`'))
    }
}

/// One struct member, ready to print
struct Member<'a> {
    name: String,
    ty: &'a str,
    tag: String,
    comment: Option<&'a str>,
}

/// Render a table as a Go source file
pub fn generate(table: &Table, options: &GenerateOptions) -> Result<GeneratedFile, TemplateError> {
    if !is_identifier(&options.package) {
        return Err(TemplateError::InvalidPackage(options.package.clone()));
    }
    if !is_identifier(&table.struct_name) {
        return Err(TemplateError::InvalidIdentifier {
            name: table.name.clone(),
        });
    }

    let struct_name = normalize_initialisms(&table.struct_name);
    let mut warnings = Vec::new();
    let mut members = Vec::with_capacity(table.fields.len());
    for field in &table.fields {
        if !is_identifier(&field.struct_name) {
            return Err(TemplateError::InvalidIdentifier {
                name: field.name.clone(),
            });
        }
        if !field.ty.is_known() {
            warnings.push(format!(
                "{}.{}: unmapped column type, generated as {}",
                table.name,
                field.name,
                field.ty.as_go()
            ));
        }
        if field.default.as_deref().is_some_and(|d| d.contains('`')) {
            warnings.push(format!(
                "{}.{}: default value contains a backtick, left out of the tag",
                table.name, field.name
            ));
        }
        members.push(Member {
            name: normalize_initialisms(&field.struct_name),
            ty: field.ty.as_go(),
            tag: field.tag(options),
            comment: field.comment.as_deref().filter(|c| !c.is_empty()),
        });
    }

    let name_width = members.iter().map(|m| width(&m.name)).max().unwrap_or(0);
    let ty_width = members.iter().map(|m| width(m.ty)).max().unwrap_or(0);
    let tag_width = members.iter().map(|m| width(&m.tag)).max().unwrap_or(0);

    let mut code = String::new();
    writeln!(code, "{HEADER}")?;
    writeln!(code)?;
    writeln!(code, "package {}", options.package)?;
    writeln!(code)?;

    if table.has_time_field {
        writeln!(code, "import \"time\"")?;
        writeln!(code)?;
    }

    match table.comment.as_deref().filter(|c| !c.is_empty()) {
        Some(comment) => writeln!(code, "// {struct_name} {comment}")?,
        None => writeln!(code, "// {struct_name}")?,
    }
    writeln!(code, "type {struct_name} struct {{")?;
    for member in &members {
        write!(
            code,
            "\t{:name_w$} {:ty_w$} ",
            member.name,
            member.ty,
            name_w = name_width,
            ty_w = ty_width
        )?;
        match member.comment {
            Some(comment) => writeln!(code, "{:tag_w$} // {}", member.tag, comment, tag_w = tag_width)?,
            None => writeln!(code, "{}", member.tag)?,
        }
    }
    writeln!(code, "}}")?;
    writeln!(code)?;

    writeln!(code, "// TableName the name of table in database")?;
    writeln!(code, "func (t *{struct_name}) TableName() string {{")?;
    writeln!(
        code,
        "\treturn \"{}{}\"",
        escape_quoted(&options.table_prefix),
        escape_quoted(&table.name)
    )?;
    writeln!(code, "}}")?;

    tracing::debug!(
        table = %table.name,
        members = members.len(),
        warnings = warnings.len(),
        "rendered go struct"
    );

    Ok(GeneratedFile {
        code,
        warnings,
    })
}

fn width(s: &str) -> usize {
    s.chars().count()
}

/// Go identifier check: a letter or `_` followed by letters, digits or `_`
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Escape for a double-quoted Go string or struct tag value
fn escape_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
