//! Field classification.
//!
//! Three independent inferences per column, all pure string/metadata
//! predicates: a semantic type, a structural role, and a sensitivity flag,
//! plus an optional placeholder enum mapping for status/state columns.
//!
//! Nothing here fails: unknown inputs degrade to the safest defaults
//! (`string` type, `content` role, not sensitive, no enum).

use std::collections::BTreeMap;

use super::lexicon::Lexicon;
use super::types::{FieldRole, SemanticType};
use crate::metadata::ColumnInfo;

/// Outcome of classifying one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldClassification {
    pub semantic_type: SemanticType,
    pub role: FieldRole,
    pub is_sensitive: bool,
    pub enum_values: Option<BTreeMap<i32, String>>,
}

impl FieldClassification {
    /// Whether a sensitive column is still surfaced to the caller.
    ///
    /// Boolean status flags (`is_verified`, `is_active`) stay visible even
    /// when their name collides with a sensitive keyword; secrets and PII
    /// stay hidden.
    pub fn surfaces_when_sensitive(&self) -> bool {
        self.semantic_type == SemanticType::Boolean && self.role == FieldRole::Status
    }

    /// Whether the field appears in the assembled entity at all.
    pub fn is_visible(&self) -> bool {
        !self.is_sensitive || self.surfaces_when_sensitive()
    }
}

/// Classify one column against the lexicon.
pub fn classify(lexicon: &Lexicon, column: &ColumnInfo) -> FieldClassification {
    FieldClassification {
        semantic_type: semantic_type(lexicon, column),
        role: lexicon.role_for(&column.name),
        is_sensitive: lexicon.is_sensitive(&column.name),
        enum_values: placeholder_enum(&column.name),
    }
}

/// Infer the coarse value kind of a column.
///
/// Checks run in a fixed priority order and the first match wins: a column
/// literally named `id` with a numeric raw type still resolves to `id`
/// because the identifier check precedes the numeric check.
fn semantic_type(lexicon: &Lexicon, column: &ColumnInfo) -> SemanticType {
    let name = column.name.to_lowercase();
    let data_type = column.data_type.to_lowercase();

    if lexicon.is_id_like(&name) {
        return SemanticType::Id;
    }

    if data_type.contains("timestamp") || data_type.contains("date") || data_type.contains("time") {
        return SemanticType::Datetime;
    }

    if data_type == "boolean" || data_type == "bool" || name.starts_with("is_") || name.starts_with("has_") {
        return SemanticType::Boolean;
    }

    if name.contains("status") || name.contains("type") || name.contains("state") || name.contains("role") {
        return SemanticType::Enum;
    }

    if ["int", "numeric", "decimal", "float", "double", "money"]
        .iter()
        .any(|marker| data_type.contains(marker))
    {
        return SemanticType::Number;
    }

    if ["text", "char", "varchar", "string"]
        .iter()
        .any(|marker| data_type.contains(marker))
    {
        return SemanticType::String;
    }

    if data_type.contains("json") {
        return SemanticType::Json;
    }

    if data_type.contains("array") || data_type.contains("[]") {
        return SemanticType::Array;
    }

    if data_type.contains("uuid") {
        return SemanticType::Id;
    }

    SemanticType::String
}

/// Guess an integer → label mapping for status/state columns.
///
/// The labels are synthesized from the column name alone, not read from any
/// check constraint or enum type in the database.
// TODO: replace with real constraint/enum-label introspection via the provider.
fn placeholder_enum(column_name: &str) -> Option<BTreeMap<i32, String>> {
    let name = column_name.to_lowercase();

    if name.contains("status") {
        return Some(labels(&[(0, "Inactive"), (1, "Active"), (2, "Pending"), (3, "Suspended")]));
    }

    // "state" columns get lifecycle labels, but address-like columns
    // ("shipping_address_state") carry geography, not lifecycle
    if name.contains("state") && !name.contains("address") {
        return Some(labels(&[(0, "Draft"), (1, "Published"), (2, "Archived")]));
    }

    None
}

fn labels(pairs: &[(i32, &str)]) -> BTreeMap<i32, String> {
    pairs
        .iter()
        .map(|(value, label)| (*value, (*label).to_string()))
        .collect()
}
