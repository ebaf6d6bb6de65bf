//! Metadata provider module.
//!
//! Abstractions for fetching normalized database metadata and combining it
//! with the semantic mapper.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       SchemaProvider                            │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │  Engine extraction (async)  │  Semantic mapping (sync)    │  │
//! │  │  - list_tables()            │  - table_entity()           │  │
//! │  │  - table_details()          │  - semantic_schema()        │  │
//! │  │                             │    (uses SemanticMapper)    │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │        ProviderRegistry (name → Arc<dyn SchemaProvider>)        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The fan-out in `semantic_schema` is embarrassingly parallel: one
//! independent fetch-and-map per table, then a deterministic fan-in sorted
//! by table name.

mod memory;
mod provider;
mod registry;
mod types;

pub use memory::MemoryProvider;
pub use provider::{
    IntrospectionReport, ProviderError, ProviderResult, SchemaProvider, SchemaProviderExt,
    TableFailure,
};
pub use registry::ProviderRegistry;
pub use types::{
    ColumnInfo, DatabaseKind, ForeignKeyInfo, IndexInfo, IndexKind, PrimaryKeyInfo,
    ReferentialAction, TableSchema, TableSchemaDetails, UnsupportedDriver,
};
