//! Keyword lexicon backing the classifiers.
//!
//! All classification in this crate is driven by fixed, ordered association
//! lists from categories/roles to keyword sets. The lists live in `static`
//! slices and are wrapped in a [`Lexicon`] that is constructed once and
//! passed into the mapper, so first-match priority is explicit in the slice
//! order rather than an artifact of map iteration.

use super::types::{Category, FieldRole};

/// Ordered category keyword table. First matching group wins, so a table
/// name hitting both the Commerce and Audit groups resolves by this order,
/// not by specificity.
static CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Identity, &["user", "account", "profile", "person", "customer", "client"]),
    (Category::Authorization, &["role", "permission", "policy", "access", "grant", "privilege"]),
    (Category::Audit, &["log", "audit", "history", "event", "track", "change"]),
    (Category::Commerce, &["order", "product", "cart", "payment", "invoice", "transaction", "sale"]),
    (Category::Content, &["post", "article", "comment", "media", "document", "file", "page"]),
    (Category::Communication, &["message", "notification", "email", "chat", "conversation"]),
    (Category::Configuration, &["setting", "config", "parameter", "option", "preference"]),
    (Category::Location, &["address", "location", "country", "city", "region", "zone"]),
    (Category::Temporal, &["schedule", "calendar", "appointment", "booking", "reservation"]),
];

/// Ordered role keyword table. Same first-match-wins discipline.
static ROLE_KEYWORDS: &[(FieldRole, &[&str])] = &[
    (FieldRole::Identifier, &["id", "_id", "uuid", "guid", "code", "number", "identifier"]),
    (FieldRole::Audit, &["created", "updated", "modified", "deleted", "changed", "timestamp"]),
    (FieldRole::Status, &["status", "state", "is_", "has_", "active", "enabled", "verified"]),
    (FieldRole::Security, &["permission", "access", "role", "grant", "scope"]),
    (FieldRole::Metadata, &["version", "revision", "sequence", "order", "priority", "rank"]),
    (FieldRole::Measurement, &["count", "total", "amount", "quantity", "price", "cost", "value"]),
];

/// Sensitive-name keyword groups. Unordered any-match: a hit in any group
/// marks the column sensitive.
static SENSITIVE_KEYWORDS: &[&[&str]] = &[
    // credentials
    &["password", "hash", "salt", "secret", "token", "key", "credential"],
    // personal
    &["ssn", "social_security", "ci", "dni", "passport", "tax_id", "cvv", "pin"],
    // financial
    &["card_number", "account_number", "routing", "iban", "swift"],
    // health
    &["medical", "diagnosis", "prescription", "health_record"],
];

/// Identifier-like column names; a column equal to or ending in one of these
/// is typed `id` regardless of its raw storage type.
static ID_SUFFIXES: &[&str] = &[
    "id", "userid", "accountid", "clientid", "customerid", "productid", "orderid",
];

/// Audit-timestamp markers used by junction-table detection when deciding
/// which columns count as independent content.
static AUDIT_MARKERS: &[&str] = &["created", "updated", "modified", "deleted"];

/// The fixed lookup tables the classifiers run against.
///
/// `Lexicon::default()` yields the built-in tables; a custom lexicon swaps
/// in different association lists while keeping the matching rules.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    categories: &'static [(Category, &'static [&'static str])],
    roles: &'static [(FieldRole, &'static [&'static str])],
    sensitive: &'static [&'static [&'static str]],
    id_suffixes: &'static [&'static str],
    audit_markers: &'static [&'static str],
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// The built-in keyword tables.
    pub fn builtin() -> Self {
        Self {
            categories: CATEGORY_KEYWORDS,
            roles: ROLE_KEYWORDS,
            sensitive: SENSITIVE_KEYWORDS,
            id_suffixes: ID_SUFFIXES,
            audit_markers: AUDIT_MARKERS,
        }
    }

    /// Classify a table name into a domain category.
    ///
    /// Total: unmatched names fall back to [`Category::Core`].
    pub fn category_for(&self, table_name: &str) -> Category {
        let lower = table_name.to_lowercase();
        self.categories
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Core)
    }

    /// Classify a column name into a structural role.
    ///
    /// Total: unmatched names fall back to [`FieldRole::Content`].
    pub fn role_for(&self, column_name: &str) -> FieldRole {
        let lower = column_name.to_lowercase();
        self.roles
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(role, _)| *role)
            .unwrap_or(FieldRole::Content)
    }

    /// Whether a column name hits any sensitive keyword group.
    pub fn is_sensitive(&self, column_name: &str) -> bool {
        let lower = column_name.to_lowercase();
        self.sensitive
            .iter()
            .any(|group| group.iter().any(|k| lower.contains(k)))
    }

    /// Whether a column name is identifier-like (equal to or ending in a
    /// known id suffix).
    pub fn is_id_like(&self, column_name: &str) -> bool {
        let lower = column_name.to_lowercase();
        self.id_suffixes
            .iter()
            .any(|suffix| lower == *suffix || lower.ends_with(suffix))
    }

    /// Whether a column name marks an audit timestamp.
    pub fn is_audit_column(&self, column_name: &str) -> bool {
        let lower = column_name.to_lowercase();
        self.audit_markers.iter().any(|m| lower.contains(m))
    }
}
