//! Population-by-age table normalization.
//!
//! A raw table is either already in long shape (separate age and
//! population columns) or in wide shape (one population column per age).
//! [`Normalizer`] detects which, then reshapes it into a
//! [`CanonicalTable`] of `(region, age, population)` records.
//!
//! Malformed cells never abort a call: unparseable populations become zero
//! and rows without an age are dropped. Use
//! [`Normalizer::normalize_with_report`] to see what was degraded.
//!
//! ```ignore
//! use popnorm_normalize::normalize;
//!
//! let canonical = normalize(&raw)?;
//! for record in &canonical {
//!     println!("{} {} {}", record.region, record.age, record.population);
//! }
//! ```

#![deny(unsafe_code)]

pub mod coerce;
pub mod detect;
pub mod digits;
pub mod error;
pub mod reshape;

use popnorm_model::{
    CanonicalTable, Detection, KeywordSets, NormalizeOptions, NormalizeReport, RawTable,
    TableShape,
};
use tracing::{debug, info_span};

pub use coerce::{Coerced, coerce_population};
pub use digits::{column_age, extract_age};
pub use error::{NormalizeError, Result};

/// Canonical table plus the diagnostics gathered while building it.
#[derive(Debug, Clone)]
pub struct NormalizeOutcome {
    pub table: CanonicalTable,
    pub report: NormalizeReport,
}

#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    keywords: KeywordSets,
    options: NormalizeOptions,
}

impl Normalizer {
    pub fn new(keywords: KeywordSets, options: NormalizeOptions) -> Result<Self> {
        keywords.validate()?;
        Ok(Self { keywords, options })
    }

    pub fn keywords(&self) -> &KeywordSets {
        &self.keywords
    }

    pub fn options(&self) -> NormalizeOptions {
        self.options
    }

    /// Resolves column roles and the table shape without reshaping.
    pub fn detect(&self, table: &RawTable) -> Result<Detection> {
        detect::detect(table, &self.keywords).map(|(detection, _)| detection)
    }

    pub fn normalize(&self, table: &RawTable) -> Result<CanonicalTable> {
        self.normalize_with_report(table).map(|outcome| outcome.table)
    }

    pub fn normalize_with_report(&self, table: &RawTable) -> Result<NormalizeOutcome> {
        let span = info_span!(
            "normalize",
            rows = table.row_count(),
            columns = table.column_count()
        );
        let _guard = span.enter();

        let (detection, ignored) = detect::detect(table, &self.keywords)?;
        let roles = detection.roles;
        debug!(
            shape = %detection.shape,
            region = roles.region,
            region_matched = roles.region_matched,
            age = ?roles.age,
            population = ?roles.population,
            "detected table layout"
        );

        let mut report = NormalizeReport::new(detection.clone());
        report.ignored_columns = ignored;
        let canonical = match (detection.shape, roles.age, roles.population) {
            (TableShape::Long, Some(age), Some(population)) => reshape::reshape_long(
                table,
                roles.region,
                age,
                population,
                self.options,
                &mut report,
            ),
            _ => {
                if detection.age_columns.is_empty() {
                    debug!("wide table has no age columns");
                }
                reshape::reshape_wide(
                    table,
                    roles.region,
                    &detection.age_columns,
                    self.options,
                    &mut report,
                )
            }
        };
        debug!(
            records = canonical.len(),
            skipped_rows = report.skipped_rows.len(),
            coerced_cells = report.coerced_cells.len(),
            "normalized table"
        );
        Ok(NormalizeOutcome {
            table: canonical,
            report,
        })
    }
}

/// Normalizes with the default keyword sets and options.
pub fn normalize(table: &RawTable) -> Result<CanonicalTable> {
    Normalizer::default().normalize(table)
}
