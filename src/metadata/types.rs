//! Normalized technical metadata types.
//!
//! These are the shapes a [`SchemaProvider`](super::SchemaProvider) hands to
//! the semantic mapper. Providers normalize whatever their engine's catalog
//! queries return into this form; the mapper never sees engine-specific
//! metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Database engines a provider can speak for.
///
/// Only the tag travels with the semantic schema; the mapper itself is
/// engine-agnostic and keys nothing off this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatabaseKind {
    #[serde(rename = "PostgreSQL")]
    Postgres,
    #[serde(rename = "MySQL")]
    MySql,
    #[serde(rename = "SQLServer")]
    SqlServer,
    #[serde(rename = "SQLite")]
    Sqlite,
    #[serde(rename = "MongoDB")]
    MongoDb,
}

/// Error for driver strings that name no known engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported database driver: {0}")]
pub struct UnsupportedDriver(pub String);

impl DatabaseKind {
    /// Canonical tag, as emitted in the semantic schema.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "PostgreSQL",
            Self::MySql => "MySQL",
            Self::SqlServer => "SQLServer",
            Self::Sqlite => "SQLite",
            Self::MongoDb => "MongoDB",
        }
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatabaseKind {
    type Err = UnsupportedDriver;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "mysql" | "mariadb" => Ok(Self::MySql),
            "sqlserver" | "mssql" | "sql_server" => Ok(Self::SqlServer),
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            "mongodb" | "mongo" => Ok(Self::MongoDb),
            other => Err(UnsupportedDriver(other.to_string())),
        }
    }
}

/// One column of a table, as reported by the engine catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnInfo {
    /// Column name.
    pub name: String,
    /// Raw storage type string (e.g. `character varying`, `timestamptz`).
    pub data_type: String,
    /// Whether NULL is permitted.
    pub is_nullable: bool,
    /// Literal default expression, if any.
    pub default_value: Option<String>,
    /// Declared maximum length for character types.
    pub max_length: Option<i32>,
    /// Numeric precision, if declared.
    pub precision: Option<i32>,
    /// Numeric scale, if declared.
    pub scale: Option<i32>,
    /// Whether the column is an identity/serial column.
    pub is_identity: bool,
    /// Whether the column is computed/generated.
    pub is_computed: bool,
    /// Stored column comment, if the schema carries one.
    pub description: Option<String>,
}

impl Default for ColumnInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            data_type: String::new(),
            is_nullable: false,
            default_value: None,
            max_length: None,
            precision: None,
            scale: None,
            is_identity: false,
            is_computed: false,
            description: None,
        }
    }
}

/// Referential action attached to a foreign key rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReferentialAction {
    #[default]
    #[serde(rename = "NO ACTION")]
    NoAction,
    #[serde(rename = "RESTRICT")]
    Restrict,
    #[serde(rename = "CASCADE")]
    Cascade,
    #[serde(rename = "SET NULL")]
    SetNull,
    #[serde(rename = "SET DEFAULT")]
    SetDefault,
}

/// A foreign key constraint on a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyInfo {
    /// Constraint name.
    pub name: String,
    /// Source column on the owning table.
    pub column_name: String,
    /// Referenced table name.
    pub referenced_table: String,
    /// Referenced column name.
    pub referenced_column: String,
    /// ON DELETE rule.
    #[serde(default)]
    pub on_delete: ReferentialAction,
    /// ON UPDATE rule.
    #[serde(default)]
    pub on_update: ReferentialAction,
}

/// Index access method / physical kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    #[default]
    BTree,
    Hash,
    Gist,
    Gin,
    Hnsw,
    IvfFlat,
    Clustered,
    NonClustered,
}

/// An index on a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexInfo {
    /// Index name.
    pub name: String,
    /// Owning table name.
    pub table_name: String,
    /// Indexed columns, in key order.
    pub columns: Vec<String>,
    /// Whether the index enforces uniqueness.
    pub is_unique: bool,
    /// Whether this index backs the primary key.
    pub is_primary_key: bool,
    /// Access method.
    #[serde(default)]
    pub kind: IndexKind,
    /// Engine-specific definition text, if available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    /// On-disk size in bytes, if available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<i64>,
}

/// Primary key constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryKeyInfo {
    /// Constraint name.
    pub name: String,
    /// Key columns, in key order.
    pub columns: Vec<String>,
}

/// Core shape of one table: columns and foreign keys.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableSchema {
    /// Table name.
    pub name: String,
    /// Schema namespace (e.g. `public`), if the engine has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Columns, in ordinal order.
    #[serde(default)]
    pub columns: Vec<ColumnInfo>,
    /// Foreign keys declared on this table.
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKeyInfo>,
}

/// Complete metadata for one table: the mapper's input unit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableSchemaDetails {
    #[serde(flatten)]
    pub table: TableSchema,
    /// Indexes on the table.
    #[serde(default)]
    pub indexes: Vec<IndexInfo>,
    /// Primary key, if declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<PrimaryKeyInfo>,
    /// Approximate row count from engine statistics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_count: Option<i64>,
    /// Stored table comment, if the schema carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TableSchemaDetails {
    /// Table name shorthand.
    pub fn name(&self) -> &str {
        &self.table.name
    }

    /// Look up a column by name, case-insensitively.
    pub fn column(&self, name: &str) -> Option<&ColumnInfo> {
        self.table
            .columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Whether some unique index covers exactly the given column.
    pub fn has_single_column_unique_index(&self, column: &str) -> bool {
        self.indexes.iter().any(|idx| {
            idx.is_unique
                && idx.columns.len() == 1
                && idx.columns[0].eq_ignore_ascii_case(column)
        })
    }
}
