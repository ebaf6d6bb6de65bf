//! Semantic schema mapping.
//!
//! A deterministic pipeline that turns raw technical table metadata into a
//! semantically enriched entity: a domain category, per-field meanings and
//! sensitivity flags, relationship cardinalities, and candidate metrics and
//! questions.
//!
//! # Architecture
//!
//! Control flow is strictly top-down and synchronous:
//!
//! ```text
//! SemanticMapper::map_entity
//!     ├── Lexicon::category_for        (table → Category)
//!     ├── field::classify              (column → type/role/sensitivity/enum)
//!     ├── relation::classify           (FK → Cardinality, junction-aware)
//!     └── narrative::*                 (descriptions, metrics, questions)
//!              └── inflect::*          (humanize, singularize)
//! ```
//!
//! All annotations are best-effort inferences from naming conventions and
//! structural shape — hints for an LLM, not ground truth.

mod field;
mod inflect;
mod lexicon;
mod mapper;
mod narrative;
mod relation;
mod types;

pub use field::{classify as classify_field, FieldClassification};
pub use inflect::{humanize, singularize};
pub use lexicon::Lexicon;
pub use mapper::{MapError, MapResult, SemanticMapper};
pub use narrative::{entity_description, field_description, metrics, questions};
pub use relation::{classify as classify_relation, describe as describe_relation, is_junction_table};
pub use types::{
    Cardinality, Category, DatabaseSemanticSchema, Entity, Field, FieldRole, Relation,
    SemanticType,
};
