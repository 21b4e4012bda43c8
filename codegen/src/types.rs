//! MySQL column type to Go type mapping

use std::fmt;

/// Go type a column resolves to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GoType {
    Int64,
    Uint64,
    Uint8,
    Bool,
    Float32,
    Float64,
    String,
    Bytes,
    Time,
    /// A source type with no entry in the mapping table, kept verbatim
    Unknown(Box<str>),
}

impl GoType {
    /// Resolve a lowercased MySQL base type name.
    ///
    /// `unsigned` only affects the wide integer family; `tinyint` is always `uint8`.
    pub fn from_mysql(base: &str, unsigned: bool) -> Self {
        match base {
            "int" | "integer" | "smallint" | "mediumint" | "bigint" => {
                if unsigned {
                    Self::Uint64
                } else {
                    Self::Int64
                }
            }
            "tinyint" => Self::Uint8,
            "bool" | "boolean" => Self::Bool,
            "float" => Self::Float32,
            "double" | "real" => Self::Float64,
            "decimal" | "numeric" => Self::String,
            "varchar" | "char" | "text" | "tinytext" | "mediumtext" | "longtext" | "enum"
            | "set" | "json" => Self::String,
            "blob" | "tinyblob" | "mediumblob" | "longblob" | "binary" | "varbinary" => {
                Self::Bytes
            }
            "date" | "time" | "datetime" | "timestamp" => Self::Time,
            other => Self::Unknown(other.into()),
        }
    }

    /// Go spelling of the type. Unknown types render as `interface{}`.
    pub fn as_go(&self) -> &str {
        match self {
            Self::Int64 => "int64",
            Self::Uint64 => "uint64",
            Self::Uint8 => "uint8",
            Self::Bool => "bool",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::String => "string",
            Self::Bytes => "[]byte",
            Self::Time => "time.Time",
            Self::Unknown(_) => "interface{}",
        }
    }

    #[inline]
    pub fn is_time(&self) -> bool {
        matches!(self, Self::Time)
    }

    #[inline]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for GoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(raw) => write!(f, "unknown({raw})"),
            other => f.write_str(other.as_go()),
        }
    }
}
