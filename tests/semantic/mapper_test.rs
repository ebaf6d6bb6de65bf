use schemalens::metadata::{
    ColumnInfo, ForeignKeyInfo, PrimaryKeyInfo, TableSchema, TableSchemaDetails,
};
use schemalens::semantic::{Cardinality, Category, FieldRole, SemanticMapper, SemanticType};

fn column(name: &str, data_type: &str, nullable: bool) -> ColumnInfo {
    ColumnInfo {
        name: name.to_string(),
        data_type: data_type.to_string(),
        is_nullable: nullable,
        ..Default::default()
    }
}

fn fk(column_name: &str, referenced_table: &str) -> ForeignKeyInfo {
    ForeignKeyInfo {
        name: format!("fk_{column_name}"),
        column_name: column_name.to_string(),
        referenced_table: referenced_table.to_string(),
        referenced_column: "id".to_string(),
        on_delete: Default::default(),
        on_update: Default::default(),
    }
}

fn users_table() -> TableSchemaDetails {
    TableSchemaDetails {
        table: TableSchema {
            name: "users".to_string(),
            schema: Some("public".to_string()),
            columns: vec![
                column("id", "integer", false),
                column("email", "character varying", false),
                column("password_hash", "text", false),
                column("is_verified", "boolean", false),
                column("status", "integer", false),
                column("tenant_id", "integer", false),
                column("created_at", "timestamptz", false),
            ],
            foreign_keys: vec![fk("tenant_id", "tenants")],
        },
        indexes: vec![],
        primary_key: Some(PrimaryKeyInfo {
            name: "pk_users".to_string(),
            columns: vec!["id".to_string()],
        }),
        row_count: Some(5000),
        description: None,
    }
}

#[test]
fn test_mapping_is_deterministic() {
    let mapper = SemanticMapper::new();
    let table = users_table();

    let first = mapper.map_entity(&table);
    let second = mapper.map_entity(&table);
    assert_eq!(first, second);

    // byte-identical once serialized, including enum value ordering
    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn test_sensitive_fields_are_withheld() {
    let mapper = SemanticMapper::new();
    let entity = mapper.map_entity(&users_table());

    assert!(entity.fields.iter().all(|f| f.name != "password_hash"));

    // boolean status flags stay visible
    let verified = entity
        .fields
        .iter()
        .find(|f| f.name == "is_verified")
        .expect("is_verified is surfaced");
    assert_eq!(verified.semantic_type, SemanticType::Boolean);
    assert_eq!(verified.role, FieldRole::Status);
}

#[test]
fn test_every_foreign_key_maps_to_one_relation() {
    let mapper = SemanticMapper::new();
    let table = users_table();
    let entity = mapper.map_entity(&table);

    assert_eq!(entity.relations.len(), table.table.foreign_keys.len());
    let relation = &entity.relations[0];
    assert_eq!(relation.target_entity, "tenants");
    assert_eq!(relation.source_column, "tenant_id");
    assert_eq!(relation.cardinality, Cardinality::ManyToOne);
    assert_eq!(relation.description, "Each User belongs to one Tenant");
}

#[test]
fn test_assembled_entity_shape() {
    let mapper = SemanticMapper::new();
    let entity = mapper.map_entity(&users_table());

    assert_eq!(entity.name, "users");
    assert_eq!(entity.category, Category::Identity);
    assert_eq!(entity.description, "Stores users information and credentials");

    // fields keep column order, minus the withheld one
    let names: Vec<&str> = entity.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["id", "email", "is_verified", "status", "tenant_id", "created_at"]
    );

    // status placeholder labels ride along
    let status = entity.fields.iter().find(|f| f.name == "status").unwrap();
    assert_eq!(status.semantic_type, SemanticType::Enum);
    let labels = status.enum_values.as_ref().unwrap();
    assert_eq!(labels.get(&1).unwrap(), "Active");

    assert!(!entity.common_metrics.is_empty());
    assert!(entity.common_questions.len() >= 2);
}

#[test]
fn test_try_map_entity_is_total_today() {
    let mapper = SemanticMapper::new();
    assert!(mapper.try_map_entity(&users_table()).is_ok());
}

#[test]
fn test_empty_input_degrades_to_defaults() {
    let mapper = SemanticMapper::new();
    let entity = mapper.map_entity(&TableSchemaDetails::default());

    assert_eq!(entity.name, "");
    assert_eq!(entity.category, Category::Core);
    assert!(entity.fields.is_empty());
    assert!(entity.relations.is_empty());
    // the base templates still apply
    assert_eq!(entity.common_metrics.len(), 1);
    assert_eq!(entity.common_questions.len(), 2);
}

#[test]
fn test_stored_table_description_passes_through() {
    let mapper = SemanticMapper::new();
    let mut table = users_table();
    table.description = Some("Registered users of the platform".to_string());

    let entity = mapper.map_entity(&table);
    assert_eq!(entity.description, "Registered users of the platform");
}
