use schemalens::metadata::ColumnInfo;
use schemalens::semantic::{classify_field, FieldRole, Lexicon, SemanticType};

fn column(name: &str, data_type: &str) -> ColumnInfo {
    ColumnInfo {
        name: name.to_string(),
        data_type: data_type.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_id_suffix_beats_numeric_type() {
    let lexicon = Lexicon::builtin();

    // identifier-suffix matching is evaluated before numeric-type matching
    let c = classify_field(&lexicon, &column("user_id", "integer"));
    assert_eq!(c.semantic_type, SemanticType::Id);

    let c = classify_field(&lexicon, &column("id", "bigint"));
    assert_eq!(c.semantic_type, SemanticType::Id);
}

#[test]
fn test_datetime_from_raw_type() {
    let lexicon = Lexicon::builtin();

    for raw in ["timestamp with time zone", "timestamptz", "date", "time"] {
        let c = classify_field(&lexicon, &column("col", raw));
        assert_eq!(c.semantic_type, SemanticType::Datetime, "raw type {raw}");
    }
}

#[test]
fn test_boolean_from_type_or_prefix() {
    let lexicon = Lexicon::builtin();

    assert_eq!(
        classify_field(&lexicon, &column("active", "boolean")).semantic_type,
        SemanticType::Boolean
    );
    assert_eq!(
        classify_field(&lexicon, &column("flag", "bool")).semantic_type,
        SemanticType::Boolean
    );
    // prefix wins even over a text raw type
    assert_eq!(
        classify_field(&lexicon, &column("is_archived", "text")).semantic_type,
        SemanticType::Boolean
    );
    assert_eq!(
        classify_field(&lexicon, &column("has_attachments", "text")).semantic_type,
        SemanticType::Boolean
    );
}

#[test]
fn test_enum_from_name() {
    let lexicon = Lexicon::builtin();

    for name in ["status", "order_status", "content_type", "workflow_state", "user_role"] {
        let c = classify_field(&lexicon, &column(name, "character varying"));
        assert_eq!(c.semantic_type, SemanticType::Enum, "column {name}");
    }
}

#[test]
fn test_number_string_json_array_uuid() {
    let lexicon = Lexicon::builtin();

    for raw in ["integer", "numeric(10,2)", "decimal", "double precision", "money"] {
        assert_eq!(
            classify_field(&lexicon, &column("col", raw)).semantic_type,
            SemanticType::Number,
            "raw type {raw}"
        );
    }
    for raw in ["text", "character varying", "varchar(255)", "string"] {
        assert_eq!(
            classify_field(&lexicon, &column("col", raw)).semantic_type,
            SemanticType::String,
            "raw type {raw}"
        );
    }
    assert_eq!(
        classify_field(&lexicon, &column("payload", "jsonb")).semantic_type,
        SemanticType::Json
    );
    assert_eq!(
        classify_field(&lexicon, &column("tags", "anyarray")).semantic_type,
        SemanticType::Array
    );
    assert_eq!(
        classify_field(&lexicon, &column("external_ref", "uuid")).semantic_type,
        SemanticType::Id
    );
}

#[test]
fn test_unknown_type_defaults_to_string() {
    let lexicon = Lexicon::builtin();
    let c = classify_field(&lexicon, &column("blob", "bytea"));
    assert_eq!(c.semantic_type, SemanticType::String);
}

#[test]
fn test_role_first_match_ordering() {
    let lexicon = Lexicon::builtin();

    assert_eq!(
        classify_field(&lexicon, &column("created_at", "timestamptz")).role,
        FieldRole::Audit
    );
    assert_eq!(
        classify_field(&lexicon, &column("is_active", "boolean")).role,
        FieldRole::Status
    );
    assert_eq!(
        classify_field(&lexicon, &column("role_name", "text")).role,
        FieldRole::Security
    );
    assert_eq!(
        classify_field(&lexicon, &column("priority", "integer")).role,
        FieldRole::Metadata
    );
    assert_eq!(
        classify_field(&lexicon, &column("quantity", "integer")).role,
        FieldRole::Measurement
    );
    assert_eq!(
        classify_field(&lexicon, &column("body", "text")).role,
        FieldRole::Content
    );
}

#[test]
fn test_sensitive_detection_and_whitelist() {
    let lexicon = Lexicon::builtin();

    let hidden = classify_field(&lexicon, &column("password_hash", "text"));
    assert!(hidden.is_sensitive);
    assert!(!hidden.is_visible());

    // not sensitive at all, and visible
    let plain = classify_field(&lexicon, &column("is_verified", "boolean"));
    assert!(!plain.is_sensitive);
    assert!(plain.is_visible());

    // sensitive keyword collision, but a boolean status flag stays visible
    let flag = classify_field(&lexicon, &column("is_token_active", "boolean"));
    assert!(flag.is_sensitive);
    assert_eq!(flag.semantic_type, SemanticType::Boolean);
    assert_eq!(flag.role, FieldRole::Status);
    assert!(flag.is_visible());

    // sensitive and not a boolean status flag: withheld
    let secret = classify_field(&lexicon, &column("api_secret", "text"));
    assert!(secret.is_sensitive);
    assert!(!secret.is_visible());
}

#[test]
fn test_status_enum_placeholder() {
    let lexicon = Lexicon::builtin();
    let c = classify_field(&lexicon, &column("status", "integer"));

    let values = c.enum_values.expect("status column gets placeholder labels");
    assert_eq!(values.len(), 4);
    assert_eq!(values.get(&0).unwrap(), "Inactive");
    assert_eq!(values.get(&1).unwrap(), "Active");
    assert_eq!(values.get(&2).unwrap(), "Pending");
    assert_eq!(values.get(&3).unwrap(), "Suspended");
}

#[test]
fn test_state_enum_placeholder() {
    let lexicon = Lexicon::builtin();
    let c = classify_field(&lexicon, &column("workflow_state", "integer"));

    let values = c.enum_values.expect("state column gets placeholder labels");
    assert_eq!(values.len(), 3);
    assert_eq!(values.get(&0).unwrap(), "Draft");
    assert_eq!(values.get(&1).unwrap(), "Published");
    assert_eq!(values.get(&2).unwrap(), "Archived");
}

#[test]
fn test_address_state_gets_no_enum() {
    let lexicon = Lexicon::builtin();
    let c = classify_field(&lexicon, &column("address_state", "text"));
    assert!(c.enum_values.is_none());
}
