//! Semantic output types.
//!
//! These shapes are what the LLM layer consumes. They are immutable once
//! produced: the mapper constructs one [`Entity`] per table per call and
//! holds no reference to it afterward.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::metadata::DatabaseKind;

/// Coarse domain category of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Identity,
    Authorization,
    Audit,
    Commerce,
    Content,
    Communication,
    Configuration,
    Location,
    Temporal,
    /// Fallback when no keyword group matches.
    Core,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Identity => "Identity",
            Self::Authorization => "Authorization",
            Self::Audit => "Audit",
            Self::Commerce => "Commerce",
            Self::Content => "Content",
            Self::Communication => "Communication",
            Self::Configuration => "Configuration",
            Self::Location => "Location",
            Self::Temporal => "Temporal",
            Self::Core => "Core",
        };
        f.write_str(s)
    }
}

/// Coarse value kind of a column, distinct from its raw storage type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    Id,
    Datetime,
    Boolean,
    Enum,
    Number,
    String,
    Json,
    Array,
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Id => "id",
            Self::Datetime => "datetime",
            Self::Boolean => "boolean",
            Self::Enum => "enum",
            Self::Number => "number",
            Self::String => "string",
            Self::Json => "json",
            Self::Array => "array",
        };
        f.write_str(s)
    }
}

/// Functional purpose of a column within its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldRole {
    Identifier,
    Audit,
    Status,
    Security,
    Metadata,
    Measurement,
    /// Fallback when no keyword group matches.
    Content,
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Identifier => "identifier",
            Self::Audit => "audit",
            Self::Status => "status",
            Self::Security => "security",
            Self::Metadata => "metadata",
            Self::Measurement => "measurement",
            Self::Content => "content",
        };
        f.write_str(s)
    }
}

/// Relationship multiplicity between two entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cardinality {
    OneToOne,
    ManyToOne,
    ManyToMany,
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::OneToOne => "one-to-one",
            Self::ManyToOne => "many-to-one",
            Self::ManyToMany => "many-to-many",
        };
        f.write_str(s)
    }
}

/// A semantically annotated column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Column name.
    pub name: String,
    /// Inferred value kind.
    #[serde(rename = "type")]
    pub semantic_type: SemanticType,
    /// Whether NULL is permitted.
    pub nullable: bool,
    /// What the column means, stored or inferred.
    pub description: String,
    /// Structural role within the table.
    pub role: FieldRole,
    /// Whether the name matched a sensitive keyword group.
    pub is_sensitive: bool,
    /// Guessed integer → label mapping for status/state columns.
    ///
    /// Ordered map so serialized output is deterministic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<BTreeMap<i32, String>>,
}

/// A semantically annotated foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// Inferred multiplicity.
    pub cardinality: Cardinality,
    /// Referenced table.
    pub target_entity: String,
    /// Source column on the owning table.
    pub source_column: String,
    /// Human-readable phrasing of the relationship.
    pub description: String,
}

/// The semantically annotated representation of one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Table name.
    pub name: String,
    /// What the table represents in the domain.
    pub description: String,
    /// Coarse domain category.
    pub category: Category,
    /// Surfaced columns; sensitive columns are withheld unless whitelisted.
    pub fields: Vec<Field>,
    /// One relation per foreign key.
    pub relations: Vec<Relation>,
    /// Candidate metrics an assistant could compute over this entity.
    pub common_metrics: Vec<String>,
    /// Candidate natural-language questions this entity can answer.
    pub common_questions: Vec<String>,
}

/// Whole-database semantic schema, assembled by the caller from per-table
/// entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSemanticSchema {
    /// Engine tag (e.g. `PostgreSQL`).
    pub database_type: DatabaseKind,
    /// Entities, sorted by table name at fan-in.
    pub entities: Vec<Entity>,
    /// When this schema was assembled.
    pub generated_at: DateTime<Utc>,
}

impl DatabaseSemanticSchema {
    /// Pretty-printed JSON, the form handed to the LLM layer.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Look up an entity by table name, case-insensitively.
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }
}
