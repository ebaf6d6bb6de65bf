//! Entity assembly.
//!
//! `SemanticMapper` orchestrates the classifiers and the narrative
//! generator for one table at a time. It is a pure function of its input
//! and the lexicon: no I/O, no timestamps, no shared mutable state, so
//! identical input always yields an identical entity and concurrent calls
//! need no locking.

use thiserror::Error;
use tracing::debug;

use super::field;
use super::lexicon::Lexicon;
use super::narrative;
use super::relation;
use super::types::{Entity, Field, Relation};
use crate::metadata::{ColumnInfo, TableSchemaDetails};

/// Result type for fallible mapping.
pub type MapResult<T> = Result<T, MapError>;

/// Errors from entity mapping.
///
/// Classification is total today, so `try_map_entity` never returns one of
/// these. The type exists for fallible extensions (e.g. pulling live enum
/// labels from constraints); such a failure is scoped to its single table
/// and never aborts a whole-database mapping.
#[derive(Error, Debug)]
pub enum MapError {
    /// Mapping one table failed.
    #[error("table {table}: {reason}")]
    Table {
        /// Table the failure is scoped to.
        table: String,
        /// What went wrong.
        reason: String,
    },
}

/// Maps normalized table metadata to semantic entities.
///
/// Construct once and reuse freely; the mapper is `Send + Sync` and holds
/// only the immutable lexicon.
#[derive(Debug, Clone, Default)]
pub struct SemanticMapper {
    lexicon: Lexicon,
}

impl SemanticMapper {
    /// Mapper over the built-in lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mapper over a custom lexicon.
    pub const fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Map one table to a semantic entity.
    ///
    /// Sensitive fields are withheld unless they pass the boolean-status
    /// whitelist; every foreign key maps to exactly one relation.
    pub fn map_entity(&self, table: &TableSchemaDetails) -> Entity {
        let category = self.lexicon.category_for(table.name());

        let fields: Vec<Field> = table
            .table
            .columns
            .iter()
            .filter_map(|column| self.map_field(column))
            .collect();

        let relations: Vec<Relation> = table
            .table
            .foreign_keys
            .iter()
            .map(|fk| {
                let cardinality = relation::classify(&self.lexicon, table, fk);
                Relation {
                    cardinality,
                    target_entity: fk.referenced_table.clone(),
                    source_column: fk.column_name.clone(),
                    description: relation::describe(table.name(), fk, cardinality),
                }
            })
            .collect();

        debug!(
            table = table.name(),
            %category,
            fields = fields.len(),
            relations = relations.len(),
            "mapped table"
        );

        Entity {
            name: table.name().to_string(),
            description: narrative::entity_description(table, category),
            category,
            fields,
            relations,
            common_metrics: narrative::metrics(table),
            common_questions: narrative::questions(table),
        }
    }

    /// Fallible variant of [`map_entity`](Self::map_entity).
    ///
    /// Always `Ok` today; the seam callers should use where a future
    /// classification step can fail.
    pub fn try_map_entity(&self, table: &TableSchemaDetails) -> MapResult<Entity> {
        Ok(self.map_entity(table))
    }

    fn map_field(&self, column: &ColumnInfo) -> Option<Field> {
        let classification = field::classify(&self.lexicon, column);
        if !classification.is_visible() {
            return None;
        }

        Some(Field {
            name: column.name.clone(),
            semantic_type: classification.semantic_type,
            nullable: column.is_nullable,
            description: narrative::field_description(column),
            role: classification.role,
            is_sensitive: classification.is_sensitive,
            enum_values: classification.enum_values,
        })
    }
}
