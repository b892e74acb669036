//! Text-to-number coercion for raw dataset fields.
//!
//! Numeric columns in the movie dataset are stored as free text ("152 min",
//! "534,858,444", "8.5"). Every helper here is pure and signals failure with
//! `None`; callers decide whether `None` excludes a record or counts as zero.

/// Parses an integer after stripping `,` thousands separators.
///
/// Returns `None` for empty input or any residue that is not part of the number.
pub fn parse_int(text: &str) -> Option<i64> {
    let cleaned: String = text.trim().chars().filter(|&c| c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<i64>().ok()
}

/// Parses a release year: ASCII digits only, surrounding whitespace ignored.
///
/// Signs and separators are rejected, so `+2008` and `2,008` are not years.
pub fn parse_year(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Parses a float after lower-casing and stripping `,` thousands separators.
///
/// `nan` and infinities are rejected so every `Some` value orders totally.
pub fn parse_float(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .to_lowercase()
        .chars()
        .filter(|&c| c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Extracts every ASCII digit from `text` and parses the concatenation as minutes.
///
/// `"152 min"` becomes `152`. Returns `None` when there are no digits or the
/// digits overflow.
pub fn parse_runtime_minutes(text: &str) -> Option<i64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok()
}
