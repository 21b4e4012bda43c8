//! Table and field model extracted from a `CREATE TABLE` statement

use heck::ToPascalCase;

use crate::types::GoType;

/// A parsed table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Table name as declared in the DDL
    pub name: String,
    /// UpperCamelCase struct name derived from `name`
    pub struct_name: String,
    /// Table comment (`COMMENT='...'`)
    pub comment: Option<String>,
    /// Columns in declaration order
    pub fields: Vec<Field>,
    /// Set when any field maps to `time.Time`
    pub has_time_field: bool,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            struct_name: name.to_pascal_case(),
            name,
            comment: None,
            fields: Vec::new(),
            has_time_field: false,
        }
    }

    /// Append a field, keeping `has_time_field` in sync
    pub fn push_field(&mut self, field: Field) {
        if field.ty.is_time() {
            self.has_time_field = true;
        }
        self.fields.push(field);
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Columns whose source type had no Go mapping
    pub fn unknown_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.ty.is_known())
    }
}

/// A parsed column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub struct_name: String,
    pub ty: GoType,
    pub comment: Option<String>,
    pub default: Option<String>,
    pub is_primary_key: bool,
    pub unsigned: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: GoType) -> Self {
        let name = name.into();
        Self {
            struct_name: name.to_pascal_case(),
            name,
            ty,
            comment: None,
            default: None,
            is_primary_key: false,
            unsigned: false,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }
}
