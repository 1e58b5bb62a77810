use business_categories::ingestion::{read_table, read_table_from_str};
use business_categories::types::{DataType, Field, Schema, Value};
use business_categories::DataError;

#[test]
fn read_table_from_path_happy_path() {
    let t = read_table("tests/fixtures/business.json").unwrap();

    // Seven records; the blank line is skipped.
    assert_eq!(t.row_count(), 7);
    assert_eq!(t.get(0, "name"), Some(&Value::Utf8("Taco Spot".to_string())));
    assert_eq!(t.get(6, "business_id"), Some(&Value::Utf8("b7".to_string())));
    assert!(t.has_column("categories"));
}

#[test]
fn read_table_keeps_nested_lists() {
    let t = read_table("tests/fixtures/business.json").unwrap();
    let tags = t.get(1, "categories").and_then(Value::as_list).unwrap();
    assert_eq!(
        tags,
        &[Value::Utf8("Chinese".to_string()), Value::Utf8("Restaurants".to_string())]
    );
}

#[test]
fn k_lines_give_k_rows_in_order() {
    let lines: Vec<String> = (0..25).map(|i| format!("{{\"seq\":{i}}}")).collect();
    let t = read_table_from_str(&lines.join("\n")).unwrap();
    assert_eq!(t.row_count(), 25);
    for (i, v) in t.column("seq").enumerate() {
        assert_eq!(v, Some(&Value::Int64(i as i64)));
    }
}

#[test]
fn read_table_missing_file_is_not_found() {
    let err = read_table("tests/fixtures/does_not_exist.json").unwrap_err();
    match err {
        DataError::NotFound { path } => assert!(path.ends_with("does_not_exist.json")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn read_table_stops_at_first_malformed_line() {
    let err = read_table("tests/fixtures/malformed.json").unwrap_err();
    let msg = err.to_string();
    assert!(matches!(err, DataError::Json { line: 2, .. }));
    assert!(msg.contains("invalid json at line 2"));
}

#[test]
fn projection_gives_typed_columns() {
    let t = read_table("tests/fixtures/business.json").unwrap();
    let schema = Schema::new(vec![
        Field::new("business_id", DataType::Utf8),
        Field::new("stars", DataType::Float64),
        Field::new("review_count", DataType::Int64),
        Field::new("is_open", DataType::Bool),
    ]);
    let ds = t.project(&schema).unwrap();
    assert_eq!(ds.row_count(), 7);
    assert_eq!(
        ds.rows[2],
        vec![
            Value::Utf8("b3".to_string()),
            Value::Float64(3.5),
            Value::Int64(45),
            Value::Bool(false),
        ]
    );
}
