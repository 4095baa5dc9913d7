//! Integration tests for the format normalizer.

use popnorm_model::{
    CanonicalRecord, CellValue, CoercionReason, KeywordSets, NormalizeOptions, RawColumn,
    RawTable, TableShape,
};
use popnorm_normalize::{Normalizer, normalize};

fn column(name: &str, values: Vec<CellValue>) -> RawColumn {
    RawColumn::new(name, values)
}

fn texts(values: &[&str]) -> Vec<CellValue> {
    values.iter().map(|value| CellValue::from(*value)).collect()
}

#[test]
fn monthly_statistics_export_is_read_as_wide() {
    // Layout of the monthly age-by-district statistics export.
    let table = RawTable::new(vec![
        column(
            "행정구역",
            texts(&["서울특별시 종로구 (1111000000)", "서울특별시 중구 (1114000000)"]),
        ),
        column("2025년10월_계_총인구수", texts(&["139,417", "121,312"])),
        column("2025년10월_계_0세", texts(&["412", "455"])),
        column("2025년10월_계_1세", texts(&["470", "498"])),
        column("2025년10월_계_100세 이상", texts(&["61", "40"])),
    ])
    .expect("table");

    let outcome = Normalizer::default()
        .normalize_with_report(&table)
        .expect("normalize");
    let detection = &outcome.report.detection;
    assert_eq!(detection.shape, TableShape::Wide);
    assert_eq!(detection.roles.region, 0);
    assert_eq!(detection.roles.age, None);
    assert_eq!(detection.roles.population, Some(1));
    assert_eq!(outcome.report.ignored_columns.len(), 1);
    assert_eq!(outcome.report.ignored_columns[0].column, 1);

    let ages: Vec<u32> = outcome.table.iter().map(|record| record.age).collect();
    assert_eq!(ages, vec![0, 1, 100, 0, 1, 100]);
    assert_eq!(
        outcome.table.records[2],
        CanonicalRecord::new("서울특별시 종로구 (1111000000)", 100, 61)
    );
    assert!(outcome.report.is_clean());
}

#[test]
fn age_and_population_keywords_force_long_shape() {
    // The interval column matches "연령" and the total column matches "인구",
    // so the table counts as long even though per-age columns exist.
    let table = RawTable::from_rows(
        ["행정구역", "총인구수", "연령구간인구수", "0세"],
        vec![texts(&["종로구", "139,417", "139,417", "412"])],
    );
    let outcome = Normalizer::default()
        .normalize_with_report(&table)
        .expect("normalize");
    assert_eq!(outcome.report.detection.shape, TableShape::Long);
    assert_eq!(outcome.report.detection.roles.age, Some(2));
    assert_eq!(outcome.report.detection.roles.population, Some(1));
    assert_eq!(
        outcome.table.records,
        vec![CanonicalRecord::new("종로구", 139, 0)]
    );
}

#[test]
fn long_shape_accepts_mixed_cell_types() {
    let table = RawTable::new(vec![
        column("region", texts(&["A", "A", "B"])),
        column(
            "age",
            vec![CellValue::Int(0), CellValue::Float(1.0), CellValue::from("2 years")],
        ),
        column(
            "population",
            vec![CellValue::Float(10.7), CellValue::Null, CellValue::from("30")],
        ),
    ])
    .expect("table");
    let outcome = Normalizer::default()
        .normalize_with_report(&table)
        .expect("normalize");
    assert_eq!(
        outcome.table.records,
        vec![
            CanonicalRecord::new("A", 0, 10),
            CanonicalRecord::new("A", 1, 0),
            CanonicalRecord::new("B", 2, 30),
        ]
    );
    assert_eq!(outcome.report.coerced_cells.len(), 1);
    assert_eq!(outcome.report.coerced_cells[0].row, 1);
    assert_eq!(
        outcome.report.coerced_cells[0].reason,
        CoercionReason::Missing
    );
}

#[test]
fn long_shape_without_region_keyword_uses_first_column() {
    let table = RawTable::from_rows(
        ["시도", "나이", "population"],
        vec![texts(&["서울", "5", "100"]), texts(&["부산", "6", "200"])],
    );
    let out = normalize(&table).expect("normalize");
    assert_eq!(
        out.records,
        vec![
            CanonicalRecord::new("서울", 5, 100),
            CanonicalRecord::new("부산", 6, 200),
        ]
    );
}

#[test]
fn wide_age_bands_use_lower_bound() {
    let table = RawTable::from_rows(
        ["행정구", "0~4세", "5~9세"],
        vec![texts(&["종로구", "10", "20"])],
    );
    let wide = normalize(&table).expect("normalize");
    assert_eq!(
        wide.records,
        vec![
            CanonicalRecord::new("종로구", 0, 10),
            CanonicalRecord::new("종로구", 5, 20),
        ]
    );

    let long = RawTable::from_rows(
        ["행정구", "연령", "인구수"],
        vec![
            texts(&["종로구", "0~4세", "10"]),
            texts(&["종로구", "5~9세", "20"]),
        ],
    );
    assert_eq!(normalize(&long).expect("normalize"), wide);
}

#[test]
fn duplicate_pairs_are_preserved() {
    let table = RawTable::from_rows(
        ["지역", "연령", "인구"],
        vec![texts(&["중구", "3", "1"]), texts(&["중구", "3세", "2"])],
    );
    let out = normalize(&table).expect("normalize");
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|record| record.age == 3));
}

#[test]
fn input_table_is_left_untouched() {
    let table = RawTable::from_rows(
        ["행정구", "0세"],
        vec![texts(&["종로구", "N/A"])],
    );
    let before = table.clone();
    let out = normalize(&table).expect("normalize");
    assert_eq!(out.records, vec![CanonicalRecord::new("종로구", 0, 0)]);
    assert_eq!(table, before);
}

#[test]
fn zero_rows_yield_empty_table() {
    let table = RawTable::from_rows(["구", "연령", "인구수"], Vec::<Vec<CellValue>>::new());
    assert!(normalize(&table).expect("normalize").is_empty());
}

#[test]
fn custom_keywords_and_grouped_numbers() {
    let keywords = KeywordSets::default()
        .with_region(vec!["district".to_string()])
        .with_population(vec!["headcount".to_string()]);
    let options = NormalizeOptions::default().with_thousands_separators(true);
    let normalizer = Normalizer::new(keywords, options).expect("normalizer");
    let table = RawTable::from_rows(
        ["Code", "District", "Age Band", "Headcount"],
        vec![texts(&["11", "Jongno", "20-24", "1,204"])],
    );
    let detection = normalizer.detect(&table).expect("detect");
    assert_eq!(detection.shape, TableShape::Long);
    assert_eq!(detection.roles.region, 1);
    let out = normalizer.normalize(&table).expect("normalize");
    assert_eq!(out.records, vec![CanonicalRecord::new("Jongno", 20, 1204)]);
}
