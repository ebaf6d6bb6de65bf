use schemalens::metadata::{
    ColumnInfo, ForeignKeyInfo, IndexInfo, IndexKind, PrimaryKeyInfo, TableSchema,
    TableSchemaDetails,
};
use schemalens::semantic::{
    classify_relation, describe_relation, is_junction_table, Cardinality, Lexicon,
};

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

fn unique_index(table: &str, column: &str) -> IndexInfo {
    IndexInfo {
        name: format!("ux_{table}_{column}"),
        table_name: table.to_string(),
        columns: vec![column.to_string()],
        is_unique: true,
        is_primary_key: false,
        kind: IndexKind::BTree,
        definition: None,
        size_bytes: None,
    }
}

fn junction_table() -> TableSchemaDetails {
    TableSchemaDetails {
        table: TableSchema {
            name: "UserRoles".to_string(),
            schema: Some("public".to_string()),
            columns: vec![
                column("id", "integer", false),
                column("user_id", "integer", false),
                column("role_id", "integer", false),
                column("created_at", "timestamptz", false),
            ],
            foreign_keys: vec![fk("user_id", "Users"), fk("role_id", "Roles")],
        },
        indexes: vec![],
        primary_key: Some(PrimaryKeyInfo {
            name: "pk_user_roles".to_string(),
            columns: vec!["id".to_string()],
        }),
        row_count: Some(1200),
        description: None,
    }
}

#[test]
fn test_junction_table_classifies_both_fks_many_to_many() {
    let lexicon = Lexicon::builtin();
    let table = junction_table();

    assert!(is_junction_table(&lexicon, &table));
    for fk in &table.table.foreign_keys {
        assert_eq!(
            classify_relation(&lexicon, &table, fk),
            Cardinality::ManyToMany
        );
    }
}

#[test]
fn test_third_fk_disables_junction_detection() {
    let lexicon = Lexicon::builtin();
    let mut table = junction_table();
    table
        .table
        .columns
        .push(column("granted_by_id", "integer", true));
    table.table.foreign_keys.push(fk("granted_by_id", "Users"));

    assert!(!is_junction_table(&lexicon, &table));
    for fk in &table.table.foreign_keys {
        assert_eq!(
            classify_relation(&lexicon, &table, fk),
            Cardinality::ManyToOne
        );
    }
}

#[test]
fn test_content_column_disables_junction_detection() {
    let lexicon = Lexicon::builtin();
    let mut table = junction_table();
    table.table.columns.push(column("note", "varchar(255)", true));

    assert!(!is_junction_table(&lexicon, &table));
}

#[test]
fn test_simple_name_disables_junction_detection() {
    let lexicon = Lexicon::builtin();
    let mut table = junction_table();
    table.table.name = "memberships".to_string();

    assert!(!is_junction_table(&lexicon, &table));
}

#[test]
fn test_one_to_one_requires_unique_index_and_non_nullable() {
    let lexicon = Lexicon::builtin();
    let mut table = TableSchemaDetails {
        table: TableSchema {
            name: "profiles".to_string(),
            schema: None,
            columns: vec![
                column("id", "integer", false),
                column("user_id", "integer", false),
                column("bio", "text", true),
            ],
            foreign_keys: vec![fk("user_id", "users")],
        },
        indexes: vec![unique_index("profiles", "user_id")],
        primary_key: Some(PrimaryKeyInfo {
            name: "pk_profiles".to_string(),
            columns: vec!["id".to_string()],
        }),
        row_count: None,
        description: None,
    };

    let target = table.table.foreign_keys[0].clone();
    assert_eq!(
        classify_relation(&lexicon, &table, &target),
        Cardinality::OneToOne
    );

    // drop the uniqueness constraint: back to the many-to-one default
    table.indexes.clear();
    assert_eq!(
        classify_relation(&lexicon, &table, &target),
        Cardinality::ManyToOne
    );

    // unique again but nullable: still many-to-one
    table.indexes.push(unique_index("profiles", "user_id"));
    table.table.columns[1].is_nullable = true;
    assert_eq!(
        classify_relation(&lexicon, &table, &target),
        Cardinality::ManyToOne
    );
}

#[test]
fn test_descriptions_by_cardinality() {
    let one_to_one = describe_relation("profiles", &fk("user_id", "users"), Cardinality::OneToOne);
    assert_eq!(one_to_one, "Each Profile has exactly one User");

    let many_to_one = describe_relation("orders", &fk("user_id", "users"), Cardinality::ManyToOne);
    assert_eq!(many_to_one, "Each Order belongs to one User");

    let many_to_many =
        describe_relation("UserRoles", &fk("role_id", "Roles"), Cardinality::ManyToMany);
    assert_eq!(many_to_many, "User Roles are associated with multiple Roles");
}

#[test]
fn test_snake_case_junction_name_counts_as_compound() {
    let lexicon = Lexicon::builtin();
    let mut table = junction_table();
    table.table.name = "user_roles".to_string();

    assert!(is_junction_table(&lexicon, &table));
}
