//! Column role resolution and shape detection.

use popnorm_model::{
    ColumnRole, ColumnRoles, Detection, IgnoredColumn, KeywordSets, RawTable, TableShape,
    WideAgeColumn,
};

use crate::digits::column_age;
use crate::error::{NormalizeError, Result};

/// Finds the first column matching the role's keywords.
///
/// Keywords are tried in priority order; for each keyword, columns are
/// scanned in table order. Columns listed in `exclude` are skipped.
pub fn find_role_column(
    lowered: &[String],
    keywords: &KeywordSets,
    role: ColumnRole,
    exclude: &[usize],
) -> Option<usize> {
    for keyword in keywords.for_role(role) {
        let needle = keyword.to_lowercase();
        let found = lowered
            .iter()
            .enumerate()
            .find(|(idx, name)| !exclude.contains(idx) && name.contains(needle.as_str()));
        if let Some((idx, _)) = found {
            return Some(idx);
        }
    }
    None
}

pub fn resolve_roles(table: &RawTable, keywords: &KeywordSets) -> Result<ColumnRoles> {
    if table.column_count() == 0 {
        return Err(NormalizeError::NoColumns);
    }
    let lowered: Vec<String> = table.column_names().map(str::to_lowercase).collect();
    let matched = find_role_column(&lowered, keywords, ColumnRole::Region, &[]);
    let region = matched.unwrap_or(0);
    let age = find_role_column(&lowered, keywords, ColumnRole::Age, &[region]);
    let mut taken = vec![region];
    taken.extend(age);
    let population = find_role_column(&lowered, keywords, ColumnRole::Population, &taken);
    Ok(ColumnRoles {
        region,
        region_matched: matched.is_some(),
        age,
        population,
    })
}

/// Splits the non-region columns of a wide table into age-bearing and
/// ignored ones.
pub fn wide_age_columns(
    table: &RawTable,
    region: usize,
) -> (Vec<WideAgeColumn>, Vec<IgnoredColumn>) {
    let mut ages = Vec::new();
    let mut ignored = Vec::new();
    for (idx, name) in table.column_names().enumerate() {
        if idx == region {
            continue;
        }
        match column_age(name) {
            Some(age) => ages.push(WideAgeColumn {
                column: idx,
                name: name.to_string(),
                age,
            }),
            None => ignored.push(IgnoredColumn {
                column: idx,
                name: name.to_string(),
            }),
        }
    }
    (ages, ignored)
}

pub fn detect(
    table: &RawTable,
    keywords: &KeywordSets,
) -> Result<(Detection, Vec<IgnoredColumn>)> {
    let roles = resolve_roles(table, keywords)?;
    if roles.age.is_some() && roles.population.is_some() {
        let detection = Detection {
            roles,
            shape: TableShape::Long,
            age_columns: Vec::new(),
        };
        return Ok((detection, Vec::new()));
    }
    let (age_columns, ignored) = wide_age_columns(table, roles.region);
    let detection = Detection {
        roles,
        shape: TableShape::Wide,
        age_columns,
    };
    Ok((detection, ignored))
}

#[cfg(test)]
mod tests {
    use popnorm_model::{CellValue, RawColumn};

    use super::*;

    fn headers(names: &[&str]) -> RawTable {
        let columns = names
            .iter()
            .map(|name| RawColumn::new(*name, vec![CellValue::Null]))
            .collect();
        RawTable::new(columns).expect("table")
    }

    #[test]
    fn earliest_keyword_beats_column_order() {
        // "지역" ranks above "구", so the later column wins.
        let table = headers(&["구분", "지역명", "연령"]);
        let roles = resolve_roles(&table, &KeywordSets::default()).expect("roles");
        assert_eq!(roles.region, 1);
        assert!(roles.region_matched);
    }

    #[test]
    fn matching_ignores_case() {
        let table = headers(&["Region", "AGE", "Population"]);
        let roles = resolve_roles(&table, &KeywordSets::default()).expect("roles");
        assert_eq!(roles.region, 0);
        assert_eq!(roles.age, Some(1));
        assert_eq!(roles.population, Some(2));
    }

    #[test]
    fn region_falls_back_to_first_column() {
        let table = headers(&["name", "0세", "1세"]);
        let roles = resolve_roles(&table, &KeywordSets::default()).expect("roles");
        assert_eq!(roles.region, 0);
        assert!(!roles.region_matched);
        assert_eq!(roles.age, None);
    }

    #[test]
    fn region_column_is_not_reused_for_population() {
        // "구" matches "인구수" first when no better region column exists.
        let table = headers(&["시도", "연령", "인구수"]);
        let roles = resolve_roles(&table, &KeywordSets::default()).expect("roles");
        assert_eq!(roles.region, 2);
        assert_eq!(roles.age, Some(1));
        assert_eq!(roles.population, None);
    }

    #[test]
    fn no_columns_is_structural_error() {
        let table = RawTable::default();
        assert!(matches!(
            resolve_roles(&table, &KeywordSets::default()),
            Err(NormalizeError::NoColumns)
        ));
    }

    #[test]
    fn wide_detection_lists_age_columns() {
        let table = headers(&["행정구", "총인구수", "0세", "1세"]);
        let (detection, ignored) = detect(&table, &KeywordSets::default()).expect("detect");
        assert_eq!(detection.shape, TableShape::Wide);
        let ages: Vec<(usize, u32)> = detection
            .age_columns
            .iter()
            .map(|column| (column.column, column.age))
            .collect();
        assert_eq!(ages, vec![(2, 0), (3, 1)]);
        assert_eq!(ignored.len(), 1);
        assert_eq!(ignored[0].name, "총인구수");
    }
}
