//! Narrative generation.
//!
//! Template-based descriptions, candidate metrics, and candidate questions.
//! Stored descriptions from the schema always win; templates fill the gaps.
//! Metrics and questions are gated by structural signals on the table (date
//! columns, a status column, amount columns, foreign keys, a name column).

use super::inflect::humanize;
use super::types::Category;
use crate::metadata::{ColumnInfo, TableSchemaDetails};

/// Describe what a table represents, from its stored comment or a
/// category-keyed template.
pub fn entity_description(table: &TableSchemaDetails, category: Category) -> String {
    if let Some(stored) = &table.description {
        return stored.clone();
    }

    let name = humanize(table.name()).to_lowercase();
    match category {
        Category::Identity => format!("Stores {name} information and credentials"),
        Category::Authorization => format!("Defines {name} and access control rules"),
        Category::Audit => format!("Tracks {name} for compliance and monitoring"),
        Category::Commerce => format!("Manages {name} and related transactions"),
        Category::Content => format!("Contains {name} and associated metadata"),
        Category::Communication => format!("Handles {name} between users"),
        Category::Configuration => format!("Stores application {name}"),
        _ => format!("Manages {name}"),
    }
}

/// Describe what a column means, from its stored comment or an ordered set
/// of name-pattern templates.
pub fn field_description(column: &ColumnInfo) -> String {
    if let Some(stored) = &column.description {
        return stored.clone();
    }

    let name = column.name.to_lowercase();
    let humanized = humanize(&column.name);

    if name.contains("created") {
        return "Timestamp when the record was created".to_string();
    }
    if name.contains("updated") || name.contains("modified") {
        return "Timestamp of the last modification".to_string();
    }
    if name.contains("deleted") {
        return "Timestamp when the record was soft-deleted".to_string();
    }
    if name == "id" {
        return "Unique identifier for this record".to_string();
    }
    if name.ends_with("_id") || name.ends_with("id") {
        let target = humanize(&name.replace("_id", "").replace("id", ""));
        return format!("Reference to related {target}");
    }
    if name.starts_with("is_") {
        let predicate = strip_humanized_prefix(&humanized, "Is ");
        return format!("Indicates whether the record {predicate}");
    }
    if name.starts_with("has_") {
        let predicate = strip_humanized_prefix(&humanized, "Has ");
        return format!("Indicates whether the record {predicate}");
    }
    if name.contains("count") {
        let subject = humanized.replace("Count", "");
        return format!("Number of {}", subject.trim().to_lowercase());
    }
    if name.contains("total") {
        let subject = humanized.replace("Total", "");
        return format!("Total {}", subject.trim().to_lowercase());
    }

    humanized
}

fn strip_humanized_prefix(humanized: &str, prefix: &str) -> String {
    humanized
        .strip_prefix(prefix)
        .unwrap_or(humanized)
        .to_lowercase()
}

/// Candidate metrics for a table, gated by structural signals.
///
/// Every table gets the base count metric; date, status, and amount columns
/// and the first foreign key each unlock a template set.
pub fn metrics(table: &TableSchemaDetails) -> Vec<String> {
    let entity = humanize(table.name());
    let entity_lower = entity.to_lowercase();
    let columns = &table.table.columns;

    let has_date_fields = columns.iter().any(|c| {
        let dt = c.data_type.to_lowercase();
        dt.contains("timestamp") || dt.contains("date")
    });
    let has_status_field = columns.iter().any(|c| c.name.to_lowercase().contains("status"));
    let has_amount_field = columns.iter().any(|c| {
        let n = c.name.to_lowercase();
        n.contains("amount") || n.contains("total")
    });

    let mut metrics = vec![format!("Total {entity_lower} count")];

    if has_date_fields {
        metrics.push(format!("{entity} created per day/week/month"));
        metrics.push(format!("{entity} growth trend"));
    }

    if has_status_field {
        metrics.push(format!("{entity} by status"));
        metrics.push(format!("Active vs inactive {entity_lower}"));
    }

    if has_amount_field {
        metrics.push("Total and average amounts".to_string());
        metrics.push("Amount distribution".to_string());
    }

    if let Some(fk) = table.table.foreign_keys.first() {
        let related = humanize(&fk.referenced_table).to_lowercase();
        metrics.push(format!("{entity} per {related}"));
    }

    metrics
}

/// Candidate natural-language questions for a table.
pub fn questions(table: &TableSchemaDetails) -> Vec<String> {
    let entity = humanize(table.name());
    let entity_lower = entity.to_lowercase();
    let columns = &table.table.columns;

    let mut questions = vec![
        format!("How many {entity_lower} exist?"),
        format!("Show me all {entity_lower}"),
    ];

    if columns.iter().any(|c| c.name.to_lowercase().contains("created")) {
        questions.push(format!("How many {entity_lower} were created in the last 30 days?"));
        questions.push(format!("Show me recent {entity_lower}"));
    }

    if columns.iter().any(|c| c.name.to_lowercase().contains("status")) {
        questions.push(format!("How many active {entity_lower}?"));
        questions.push(format!("What is the status distribution of {entity_lower}?"));
    }

    if let Some(fk) = table.table.foreign_keys.first() {
        let related = humanize(&fk.referenced_table).to_lowercase();
        questions.push(format!("How many {entity_lower} does each {related} have?"));
    }

    let has_name_field = columns.iter().any(|c| {
        let n = c.name.to_lowercase();
        n == "name" || n.contains("title")
    });
    if has_name_field {
        questions.push(format!("Find {entity_lower} by name"));
    }

    questions
}
