//! SchemaProvider trait definition.
//!
//! The SchemaProvider trait abstracts over database engines. An
//! implementation runs whatever catalog queries its engine needs and
//! normalizes the result into [`TableSchemaDetails`]; everything downstream
//! of that shape is engine-agnostic.
//!
//! # Architecture Note
//!
//! Semantic mapping happens locally in Rust via [`SemanticMapper`], not
//! inside the provider. The provider supplies raw metadata; the extension
//! trait combines both into a whole-database semantic schema.

use async_trait::async_trait;
use chrono::Utc;
use futures::future::join_all;
use thiserror::Error;
use tracing::{debug, warn};

use super::types::{DatabaseKind, TableSchemaDetails};
use crate::semantic::{DatabaseSemanticSchema, Entity, MapError, SemanticMapper};

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors that can occur at the metadata boundary.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Database connection could not be established.
    #[error("database connection failed: {0}")]
    ConnectionFailed(String),

    /// The requested table does not exist.
    #[error("table not found: {0}")]
    TableNotFound(String),

    /// A catalog query failed.
    #[error("metadata query failed: {0}")]
    QueryFailed(String),

    /// No provider is registered under the requested name.
    #[error("database '{name}' not found; available: {available}")]
    UnknownDatabase {
        /// Requested database name.
        name: String,
        /// Comma-separated registered names.
        available: String,
    },

    /// Mapping one table to an entity failed.
    ///
    /// Scoped to the single table: the whole-database fan-out records it and
    /// continues with the remaining tables.
    #[error("failed to map table {table}")]
    Mapping {
        /// Table whose mapping failed.
        table: String,
        #[source]
        source: MapError,
    },
}

/// A mapping or extraction failure for one table during the fan-out.
#[derive(Debug)]
pub struct TableFailure {
    /// Table the failure is scoped to.
    pub table: String,
    /// What went wrong.
    pub error: ProviderError,
}

/// Result of whole-database introspection.
///
/// Failures are per table and never abort the fan-out; entities already
/// produced for other tables are unaffected.
#[derive(Debug)]
pub struct IntrospectionReport {
    /// The assembled semantic schema.
    pub schema: DatabaseSemanticSchema,
    /// Tables that could not be fetched or mapped.
    pub failures: Vec<TableFailure>,
}

/// Trait for fetching normalized database metadata.
///
/// Implementations own the engine-specific extraction queries. The mapper
/// treats their output as an already-resolved, fully materialized input.
///
/// # Example
///
/// ```ignore
/// use schemalens::metadata::{SchemaProvider, SchemaProviderExt};
/// use schemalens::semantic::SemanticMapper;
///
/// async fn example(provider: &impl SchemaProvider) {
///     let mapper = SemanticMapper::new();
///     let report = provider.semantic_schema(&mapper).await.unwrap();
///     println!("{} entities", report.schema.entities.len());
/// }
/// ```
#[async_trait]
pub trait SchemaProvider: Send + Sync {
    /// Configured name of this database.
    fn name(&self) -> &str;

    /// Engine this provider speaks for.
    fn kind(&self) -> DatabaseKind;

    /// List all table names, in the engine's catalog order.
    async fn list_tables(&self) -> ProviderResult<Vec<String>>;

    /// Fetch complete metadata for one table.
    async fn table_details(&self, table: &str) -> ProviderResult<TableSchemaDetails>;
}

/// Extension trait combining a provider with the semantic mapper.
#[async_trait]
pub trait SchemaProviderExt: SchemaProvider {
    /// Fetch one table and map it to a semantic entity.
    async fn table_entity(&self, mapper: &SemanticMapper, table: &str) -> ProviderResult<Entity> {
        let details = self.table_details(table).await?;
        mapper
            .try_map_entity(&details)
            .map_err(|source| ProviderError::Mapping {
                table: table.to_string(),
                source,
            })
    }

    /// Map every table of the database into one semantic schema.
    ///
    /// Tables are fetched and mapped as a parallel fan-out with no ordering
    /// requirement between them; the fan-in sorts entities by table name so
    /// the assembled schema is reproducible. A failure on one table is
    /// recorded in the report and leaves the other tables' entities intact.
    async fn semantic_schema(&self, mapper: &SemanticMapper) -> ProviderResult<IntrospectionReport> {
        let tables = self.list_tables().await?;
        debug!(database = self.name(), tables = tables.len(), "mapping database schema");

        let fetches: Vec<_> = tables.iter().map(|t| self.table_details(t)).collect();
        let results = join_all(fetches).await;

        let mut entities = Vec::with_capacity(tables.len());
        let mut failures = Vec::new();

        for (table, result) in tables.iter().zip(results) {
            let details = match result {
                Ok(details) => details,
                Err(error) => {
                    warn!(table = table.as_str(), %error, "table metadata fetch failed");
                    failures.push(TableFailure {
                        table: table.clone(),
                        error,
                    });
                    continue;
                }
            };

            match mapper.try_map_entity(&details) {
                Ok(entity) => entities.push(entity),
                Err(source) => {
                    warn!(table = table.as_str(), %source, "table mapping failed");
                    failures.push(TableFailure {
                        table: table.clone(),
                        error: ProviderError::Mapping {
                            table: table.clone(),
                            source,
                        },
                    });
                }
            }
        }

        entities.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(IntrospectionReport {
            schema: DatabaseSemanticSchema {
                database_type: self.kind(),
                entities,
                generated_at: Utc::now(),
            },
            failures,
        })
    }
}

// Blanket implementation for all SchemaProvider implementations
impl<T: SchemaProvider + ?Sized> SchemaProviderExt for T {}
