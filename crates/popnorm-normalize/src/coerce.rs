//! Population coercion. Never fails: bad cells become zero with a reason.

use popnorm_model::{CellValue, CoercionReason, NormalizeOptions};

/// Result of coercing one population cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coerced {
    Value(u64),
    Zeroed(CoercionReason),
}

impl Coerced {
    pub fn value(&self) -> u64 {
        match self {
            Self::Value(v) => *v,
            Self::Zeroed(_) => 0,
        }
    }
}

/// Coerces a cell to a non-negative integer population.
///
/// Floats truncate toward zero. Missing, unparseable, negative and
/// non-finite values become zero.
pub fn coerce_population(cell: &CellValue, options: NormalizeOptions) -> Coerced {
    match cell {
        CellValue::Null => Coerced::Zeroed(CoercionReason::Missing),
        CellValue::Int(v) => match u64::try_from(*v) {
            Ok(value) => Coerced::Value(value),
            Err(_) => Coerced::Zeroed(CoercionReason::Negative {
                value: v.to_string(),
            }),
        },
        CellValue::Float(v) => coerce_float(*v),
        CellValue::Text(text) => coerce_text(text, options),
    }
}

fn coerce_text(text: &str, options: NormalizeOptions) -> Coerced {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Coerced::Zeroed(CoercionReason::Missing);
    }
    let parsed = if options.accept_thousands_separators && trimmed.contains(',') {
        parse_grouped(trimmed)
    } else {
        trimmed.parse::<f64>().ok()
    };
    match parsed {
        Some(value) => coerce_float(value),
        None => Coerced::Zeroed(CoercionReason::Unparseable {
            value: trimmed.to_string(),
        }),
    }
}

/// Parses `1,234,567` style numbers. Groups after the first must have
/// exactly three digits, so `1,5` stays unparseable.
fn parse_grouped(text: &str) -> Option<f64> {
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text, None),
    };
    let unsigned = integer.strip_prefix(['-', '+']).unwrap_or(integer);
    let mut groups = unsigned.split(',');
    let head = groups.next()?;
    if head.is_empty() || head.len() > 3 || !head.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    for group in groups {
        if group.len() != 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }
    let mut plain = integer.replace(',', "");
    if let Some(fraction) = fraction {
        plain.push('.');
        plain.push_str(fraction);
    }
    plain.parse().ok()
}

fn coerce_float(value: f64) -> Coerced {
    if !value.is_finite() {
        return Coerced::Zeroed(CoercionReason::NonFinite);
    }
    if value < 0.0 {
        return Coerced::Zeroed(CoercionReason::Negative {
            value: value.to_string(),
        });
    }
    // Saturating cast; finite non-negative input truncates toward zero.
    Coerced::Value(value.trunc() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(cell: CellValue) -> u64 {
        coerce_population(&cell, NormalizeOptions::default()).value()
    }

    #[test]
    fn numeric_strings_match_numbers() {
        assert_eq!(plain(CellValue::text("123")), plain(CellValue::Int(123)));
        assert_eq!(plain(CellValue::text(" 1500 ")), 1500);
        assert_eq!(plain(CellValue::text("12.9")), 12);
        assert_eq!(plain(CellValue::Float(12.9)), 12);
    }

    #[test]
    fn bad_values_become_zero_with_reason() {
        let options = NormalizeOptions::default();
        assert_eq!(
            coerce_population(&CellValue::text("N/A"), options),
            Coerced::Zeroed(CoercionReason::Unparseable {
                value: "N/A".to_string()
            })
        );
        assert_eq!(
            coerce_population(&CellValue::Null, options),
            Coerced::Zeroed(CoercionReason::Missing)
        );
        assert_eq!(
            coerce_population(&CellValue::Int(-4), options),
            Coerced::Zeroed(CoercionReason::Negative {
                value: "-4".to_string()
            })
        );
        assert_eq!(
            coerce_population(&CellValue::Float(f64::NAN), options),
            Coerced::Zeroed(CoercionReason::NonFinite)
        );
    }

    #[test]
    fn grouped_digits_need_opt_in() {
        assert_eq!(plain(CellValue::text("1,500")), 0);
        let options = NormalizeOptions::default().with_thousands_separators(true);
        let value = |text: &str| coerce_population(&CellValue::text(text), options).value();
        assert_eq!(value("1,500"), 1500);
        assert_eq!(value("12,345,678"), 12_345_678);
        assert_eq!(value("1,234.5"), 1234);
        assert_eq!(value("1,5"), 0);
        assert_eq!(value("1500"), 1500);
    }
}
