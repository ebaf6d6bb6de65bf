//! Relation classification.
//!
//! Infers the cardinality of each foreign key from structural shape:
//! junction-table detection first (table-scoped, overrides per-column
//! tests), then a one-to-one test on the FK column, then the many-to-one
//! default.

use std::collections::HashSet;

use super::inflect::{humanize, singularize};
use super::lexicon::Lexicon;
use super::types::Cardinality;
use crate::metadata::{ForeignKeyInfo, TableSchemaDetails};

/// Infer the cardinality of one foreign key.
///
/// Decision order matters: once the owning table tests as a junction table,
/// every one of its foreign keys is many-to-many regardless of nullability
/// or unique indexes.
pub fn classify(lexicon: &Lexicon, table: &TableSchemaDetails, fk: &ForeignKeyInfo) -> Cardinality {
    if is_junction_table(lexicon, table) {
        return Cardinality::ManyToMany;
    }

    let source_non_nullable = table
        .column(&fk.column_name)
        .map(|c| !c.is_nullable)
        .unwrap_or(false);

    if source_non_nullable && table.has_single_column_unique_index(&fk.column_name) {
        return Cardinality::OneToOne;
    }

    Cardinality::ManyToOne
}

/// Whether a table is a pure many-to-many join table.
///
/// All of the following must hold:
/// - exactly two foreign keys;
/// - a compound name (separator, or an internal capital after the first
///   letter — a naming-convention proxy, so tables that merely follow one
///   convention consistently can misclassify);
/// - at most three columns besides the FK columns, primary-key columns, and
///   audit timestamps;
/// - no substantial text column outside that excluded set.
pub fn is_junction_table(lexicon: &Lexicon, table: &TableSchemaDetails) -> bool {
    if table.table.foreign_keys.len() != 2 {
        return false;
    }

    if !has_compound_name(table.name()) {
        return false;
    }

    let excluded = excluded_columns(lexicon, table);

    let additional = table
        .table
        .columns
        .iter()
        .filter(|c| !excluded.contains(&c.name.to_lowercase()))
        .count();
    if additional > 3 {
        return false;
    }

    let has_content_column = table.table.columns.iter().any(|c| {
        let data_type = c.data_type.to_lowercase();
        (data_type.contains("text") || data_type.contains("varchar"))
            && !excluded.contains(&c.name.to_lowercase())
    });

    !has_content_column
}

/// Columns that do not count as independent content when sizing up a
/// junction candidate: the FK columns, primary-key columns (and a column
/// literally named `id`), and audit timestamps.
fn excluded_columns(lexicon: &Lexicon, table: &TableSchemaDetails) -> HashSet<String> {
    let mut excluded: HashSet<String> = table
        .table
        .foreign_keys
        .iter()
        .map(|fk| fk.column_name.to_lowercase())
        .collect();

    if let Some(pk) = &table.primary_key {
        excluded.extend(pk.columns.iter().map(|c| c.to_lowercase()));
    }
    excluded.insert("id".to_string());

    for column in &table.table.columns {
        if lexicon.is_audit_column(&column.name) {
            excluded.insert(column.name.to_lowercase());
        }
    }

    excluded
}

/// Whether a table name looks like a compound of two entity names
/// (`user_roles`, `UserRoles`).
fn has_compound_name(name: &str) -> bool {
    if name.contains('_') {
        return true;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.is_uppercase() && chars.any(char::is_uppercase),
        None => false,
    }
}

/// Phrase a relationship for humans, keyed by cardinality.
pub fn describe(table_name: &str, fk: &ForeignKeyInfo, cardinality: Cardinality) -> String {
    let from = humanize(table_name);
    let to = humanize(&fk.referenced_table);
    let from_singular = singularize(&from);
    let to_singular = singularize(&to);

    match cardinality {
        Cardinality::OneToOne => format!("Each {from_singular} has exactly one {to_singular}"),
        Cardinality::ManyToOne => format!("Each {from_singular} belongs to one {to_singular}"),
        Cardinality::ManyToMany => format!("{from} are associated with multiple {to}"),
    }
}
