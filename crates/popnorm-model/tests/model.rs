//! Tests for popnorm-model types.

use std::io::Write;

use popnorm_model::{
    CanonicalRecord, CanonicalTable, CellValue, CoercionReason, KeywordSets, ModelError,
    RawColumn, RawTable, TableShape,
};

#[test]
fn canonical_table_serializes_as_record_list() {
    let table = CanonicalTable::new(vec![CanonicalRecord::new("강남구", 23, 1500)]);
    let json = serde_json::to_string(&table).expect("serialize table");
    assert_eq!(
        json,
        r#"[{"region":"강남구","age":23,"population":1500}]"#
    );
    let round: CanonicalTable = serde_json::from_str(&json).expect("deserialize table");
    assert_eq!(round, table);
}

#[test]
fn shape_and_reason_serialize_tagged() {
    assert_eq!(
        serde_json::to_string(&TableShape::Wide).expect("serialize shape"),
        "\"wide\""
    );
    let reason = CoercionReason::Unparseable {
        value: "N/A".to_string(),
    };
    assert_eq!(
        serde_json::to_string(&reason).expect("serialize reason"),
        r#"{"kind":"unparseable","value":"N/A"}"#
    );
}

#[test]
fn raw_table_exposes_cells_by_row_and_column() {
    let table = RawTable::new(vec![
        RawColumn::new("구", vec![CellValue::from("강남구"), CellValue::from("서초구")]),
        RawColumn::new("인구수", vec![CellValue::Int(10), CellValue::Null]),
    ])
    .expect("table");
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["구", "인구수"]);
    assert_eq!(table.cell(1, 0), Some(&CellValue::from("서초구")));
    assert!(table.cell(1, 1).is_some_and(CellValue::is_null));
}

#[test]
fn empty_raw_table_has_no_rows() {
    let table = RawTable::new(Vec::new()).expect("table");
    assert_eq!(table.column_count(), 0);
    assert!(table.is_empty());
}

#[test]
fn keyword_sets_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "region = [\"district\"]").expect("write");
    writeln!(file, "population = [\"count\"]").expect("write");
    let sets = KeywordSets::load(file.path()).expect("load keywords");
    assert_eq!(sets.region, vec!["district"]);
    assert_eq!(sets.population, vec!["count"]);
    assert_eq!(sets.age, KeywordSets::default().age);
}

#[test]
fn missing_keyword_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = KeywordSets::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ModelError::KeywordIo { .. }));
}
