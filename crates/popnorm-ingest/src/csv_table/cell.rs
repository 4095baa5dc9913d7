//! Header cleanup and per-cell typing.

use popnorm_model::CellValue;

/// Trims a header and collapses internal whitespace runs to one space.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Types a CSV cell: empty is null, numeric literals become numbers and
/// everything else stays text.
///
/// A number is kept only when it prints back as the same text, so codes
/// like `0110`, `1.10` or `+5` stay text and region values survive verbatim.
pub fn infer_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Null;
    }
    if has_leading_zero(trimmed) {
        return CellValue::Text(trimmed.to_string());
    }
    if let Ok(value) = trimmed.parse::<i64>()
        && value.to_string() == trimmed
    {
        return CellValue::Int(value);
    }
    // f64 parsing also accepts "inf" and "NaN"; require an actual digit.
    if trimmed.bytes().any(|b| b.is_ascii_digit())
        && let Ok(value) = trimmed.parse::<f64>()
        && value.to_string() == trimmed
    {
        return CellValue::Float(value);
    }
    CellValue::Text(trimmed.to_string())
}

fn has_leading_zero(value: &str) -> bool {
    let digits = value.strip_prefix(['-', '+']).unwrap_or(value);
    let mut bytes = digits.bytes();
    matches!(
        (bytes.next(), bytes.next()),
        (Some(b'0'), Some(b'0'..=b'9'))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_cells() {
        assert_eq!(infer_cell(""), CellValue::Null);
        assert_eq!(infer_cell("  "), CellValue::Null);
        assert_eq!(infer_cell("1500"), CellValue::Int(1500));
        assert_eq!(infer_cell("-3"), CellValue::Int(-3));
        assert_eq!(infer_cell("0"), CellValue::Int(0));
        assert_eq!(infer_cell("12.5"), CellValue::Float(12.5));
        assert_eq!(infer_cell("0.5"), CellValue::Float(0.5));
        assert_eq!(infer_cell("23세"), CellValue::text("23세"));
        assert_eq!(infer_cell("1,500"), CellValue::text("1,500"));
        assert_eq!(infer_cell("NaN"), CellValue::text("NaN"));
        assert_eq!(infer_cell("0110"), CellValue::text("0110"));
    }

    #[test]
    fn numbers_that_do_not_print_back_stay_text() {
        assert_eq!(infer_cell("1.10"), CellValue::text("1.10"));
        assert_eq!(infer_cell("+5"), CellValue::text("+5"));
        assert_eq!(infer_cell("1e3"), CellValue::text("1e3"));
        assert_eq!(infer_cell("-0.25"), CellValue::Float(-0.25));
    }

    #[test]
    fn normalizes_headers() {
        assert_eq!(normalize_header("\u{feff} 행정  구 "), "행정 구");
        assert_eq!(normalize_header("0세"), "0세");
    }
}
