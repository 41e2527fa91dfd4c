//! Locale-invariant numeric cell grammar

use lazy_regex::regex_is_match;

/// Parse a raw cell as a number
///
/// Accepts an optional sign, digits and at most one decimal point, with
/// surrounding ASCII whitespace ignored. Exponents, thousands separators and
/// spelled-out values (`inf`, `NaN`) are rejected, as are values too large to
/// be finite.
///
/// # Examples
/// ```
/// use sheet_charter_core::parse_number;
///
/// assert_eq!(parse_number("-2.5"), Some(-2.5));
/// assert_eq!(parse_number(" 1000 "), Some(1000.0));
/// assert_eq!(parse_number("1e3"), None);
/// assert_eq!(parse_number("1,000"), None);
/// ```
pub fn parse_number(cell: &str) -> Option<f64> {
    let cell = cell.trim_matches(|c: char| c.is_ascii_whitespace());
    if !regex_is_match!(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$", cell) {
        return None;
    }
    cell.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Check whether a cell is empty for type inference purposes
pub fn is_blank(cell: &str) -> bool {
    cell.trim().is_empty()
}
