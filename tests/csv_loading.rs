use dataset_filter::ErrorKind;
use dataset_filter::ingestion::csv::{load_csv_from_path, load_csv_from_reader};
use dataset_filter::types::{DataType, Field, Schema, Value};

fn year_level_schema() -> Schema {
    Schema::new(vec![Field::new("yearLevelID", DataType::Number)])
}

#[test]
fn load_csv_from_path_happy_path() {
    let ds = load_csv_from_path("tests/fixtures/students.csv", &year_level_schema()).unwrap();

    assert_eq!(ds.row_count(), 4);
    assert_eq!(
        ds.schema.field_names().collect::<Vec<_>>(),
        vec!["id", "yearLevelID", "name"]
    );
    assert_eq!(
        ds.rows[0],
        vec![
            Value::Utf8("1".to_string()),
            Value::Int64(3),
            Value::Utf8("Ana".to_string()),
        ]
    );
}

#[test]
fn declared_column_can_be_anywhere_in_the_header() {
    let input = "name,id,yearLevelID\nAna,1,3\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let ds = load_csv_from_reader(&mut rdr, &year_level_schema()).unwrap();
    assert_eq!(ds.schema.index_of("yearLevelID"), Some(2));
    assert_eq!(ds.rows[0][2], Value::Int64(3));
}

#[test]
fn quoted_fields_are_unescaped() {
    let ds = load_csv_from_path("tests/fixtures/roster.csv", &year_level_schema()).unwrap();

    assert_eq!(ds.row_count(), 6);
    assert_eq!(ds.rows[0][1], Value::Utf8("Reyes, Jr.".to_string()));
    assert_eq!(ds.rows[1][5], Value::Utf8("said \"hi\"".to_string()));
    assert_eq!(ds.rows[2][5], Value::Utf8("line one\nline two".to_string()));
    assert_eq!(ds.rows[3][3], Value::Null);
}

#[test]
fn missing_file_is_file_not_found() {
    let err = load_csv_from_path("tests/fixtures/does_not_exist.csv", &year_level_schema())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileNotFound);
}

#[test]
fn missing_required_column() {
    let err =
        load_csv_from_path("tests/fixtures/missing_column.csv", &year_level_schema()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingColumn);
    assert!(err.to_string().contains("missing required column 'yearLevelID'"));
}

#[test]
fn non_numeric_value_fails_at_load() {
    let err =
        load_csv_from_path("tests/fixtures/non_numeric.csv", &year_level_schema()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SchemaValidation);
    let msg = err.to_string();
    assert!(msg.contains("failed to parse value at row 3"));
    assert!(msg.contains("column 'yearLevelID'"));
    assert!(msg.contains("raw='N/A'"));
}

#[test]
fn field_count_mismatch_is_a_parse_error() {
    for fixture in ["tests/fixtures/uneven.csv", "tests/fixtures/malformed.csv"] {
        let err = load_csv_from_path(fixture, &year_level_schema()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse, "{fixture}: {err}");
    }
}

#[test]
fn decimal_values_load_as_floats() {
    let input = "id,yearLevelID\n1,4.0\n2,3.5\n3,5.0\n4,2\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let ds = load_csv_from_reader(&mut rdr, &year_level_schema()).unwrap();
    let year_levels: Vec<&Value> = ds.rows.iter().map(|r| &r[1]).collect();
    assert_eq!(
        year_levels,
        vec![
            &Value::Float64(4.0),
            &Value::Float64(3.5),
            &Value::Float64(5.0),
            &Value::Int64(2),
        ]
    );
}
