//! # Schemalens
//!
//! Semantic schema mapping for LLM-driven database assistants.
//!
//! Schemalens turns raw technical database metadata (tables, columns,
//! indexes, foreign keys) into a semantically enriched model an LLM can
//! reason over: entity categories, field meanings, sensitivity flags,
//! relationship cardinalities, and candidate metrics and questions.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                SchemaProvider (async)                    │
//! │   engine-specific extraction, normalized to              │
//! │   TableSchemaDetails (columns, PK, FKs, indexes)         │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [one call per table]
//! ┌─────────────────────────────────────────────────────────┐
//! │                 SemanticMapper (pure)                    │
//! │   Lexicon ─► category / field / relation classifiers     │
//! │           ─► narrative (descriptions, metrics, Qs)       │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [parallel fan-out, sorted fan-in]
//! ┌─────────────────────────────────────────────────────────┐
//! │              DatabaseSemanticSchema (JSON)               │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The mapper is a pure function of its input plus fixed lookup tables:
//! identical `TableSchemaDetails` always yields an identical `Entity`.
//! Everything engine-specific lives behind the [`metadata::SchemaProvider`]
//! trait; the mapper never performs I/O.
//!
//! The inferred semantics are best-effort annotations derived from naming
//! conventions and structural shape. They are hints for an LLM, not ground
//! truth.

pub mod config;
pub mod metadata;
pub mod semantic;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::metadata::{
        ColumnInfo, DatabaseKind, ForeignKeyInfo, IndexInfo, IndexKind, MemoryProvider,
        PrimaryKeyInfo, ProviderError, ProviderRegistry, ProviderResult, SchemaProvider,
        SchemaProviderExt, TableSchema, TableSchemaDetails,
    };
    pub use crate::semantic::{
        Cardinality, Category, DatabaseSemanticSchema, Entity, Field, FieldRole, Lexicon,
        Relation, SemanticMapper, SemanticType,
    };
}

pub use metadata::{SchemaProvider, SchemaProviderExt, TableSchemaDetails};
pub use semantic::{DatabaseSemanticSchema, Entity, SemanticMapper};
