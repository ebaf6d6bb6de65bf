//! In-memory provider over pre-materialized metadata.
//!
//! Useful in tests and for embedders that extract metadata once and map it
//! repeatedly without holding a live connection.

use async_trait::async_trait;

use super::provider::{ProviderError, ProviderResult, SchemaProvider};
use super::types::{DatabaseKind, TableSchemaDetails};

/// A [`SchemaProvider`] backed by a fixed list of table metadata.
///
/// `list_tables` returns tables in insertion order; lookups are
/// case-insensitive like most engine catalogs.
#[derive(Debug, Clone)]
pub struct MemoryProvider {
    name: String,
    kind: DatabaseKind,
    tables: Vec<TableSchemaDetails>,
}

impl MemoryProvider {
    /// Create an empty provider.
    pub fn new(name: impl Into<String>, kind: DatabaseKind) -> Self {
        Self {
            name: name.into(),
            kind,
            tables: Vec::new(),
        }
    }

    /// Add one table.
    pub fn with_table(mut self, table: TableSchemaDetails) -> Self {
        self.tables.push(table);
        self
    }

    /// Add several tables.
    pub fn with_tables(mut self, tables: impl IntoIterator<Item = TableSchemaDetails>) -> Self {
        self.tables.extend(tables);
        self
    }

    /// Number of tables held.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the provider holds no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[async_trait]
impl SchemaProvider for MemoryProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> DatabaseKind {
        self.kind
    }

    async fn list_tables(&self) -> ProviderResult<Vec<String>> {
        Ok(self.tables.iter().map(|t| t.name().to_string()).collect())
    }

    async fn table_details(&self, table: &str) -> ProviderResult<TableSchemaDetails> {
        self.tables
            .iter()
            .find(|t| t.name().eq_ignore_ascii_case(table))
            .cloned()
            .ok_or_else(|| ProviderError::TableNotFound(table.to_string()))
    }
}
