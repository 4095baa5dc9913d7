//! Canonical long-shape output.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::table::{CellValue, RawColumn, RawTable};

/// One (region, age, population) triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub region: String,
    pub age: u32,
    pub population: u64,
}

impl CanonicalRecord {
    pub fn new(region: impl Into<String>, age: u32, population: u64) -> Self {
        Self {
            region: region.into(),
            age,
            population,
        }
    }
}

/// Records in emission order. Not sorted and not deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalTable {
    pub records: Vec<CanonicalRecord>,
}

impl CanonicalTable {
    pub fn new(records: Vec<CanonicalRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CanonicalRecord> {
        self.records.iter()
    }

    pub fn push(&mut self, record: CanonicalRecord) {
        self.records.push(record);
    }

    /// Distinct regions in first-seen order.
    pub fn regions(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.records
            .iter()
            .map(|record| record.region.as_str())
            .filter(|region| seen.insert(*region))
            .collect()
    }

    /// Reinterprets the records as a long-shape raw table with the given
    /// column names. Ages and populations become integer cells.
    pub fn to_raw_table(&self, region: &str, age: &str, population: &str) -> RawTable {
        let regions = self
            .records
            .iter()
            .map(|record| CellValue::Text(record.region.clone()))
            .collect();
        let ages = self
            .records
            .iter()
            .map(|record| CellValue::Int(i64::from(record.age)))
            .collect();
        let populations = self
            .records
            .iter()
            .map(|record| CellValue::Int(i64::try_from(record.population).unwrap_or(i64::MAX)))
            .collect();
        let columns = vec![
            RawColumn::new(region, regions),
            RawColumn::new(age, ages),
            RawColumn::new(population, populations),
        ];
        // All three columns are built from the same record slice.
        RawTable::new(columns).unwrap_or_default()
    }
}

impl IntoIterator for CanonicalTable {
    type Item = CanonicalRecord;
    type IntoIter = std::vec::IntoIter<CanonicalRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a CanonicalTable {
    type Item = &'a CanonicalRecord;
    type IntoIter = std::slice::Iter<'a, CanonicalRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<CanonicalRecord> for CanonicalTable {
    fn from_iter<I: IntoIterator<Item = CanonicalRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
