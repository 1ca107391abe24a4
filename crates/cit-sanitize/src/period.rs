use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static SPACE_BEFORE_PERIOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\.").expect("Invalid space-before-period regex"));

static PERIOD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{2,}").expect("Invalid period-run regex"));

/// Remove leading, trailing and stray periods from `text`.
///
/// Abbreviation periods inside the text are kept (`"Rev. Saúde"`). Returns an
/// empty string when nothing alphanumeric is left.
///
/// ```
/// use cit_sanitize::remove_period;
///
/// assert_eq!(remove_period("Silva, J."), "Silva, J");
/// assert_eq!(remove_period("Rev. Saúde"), "Rev. Saúde");
/// assert_eq!(remove_period(" . . "), "");
/// ```
pub fn remove_period(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text.trim(), " ");
    let collapsed = SPACE_BEFORE_PERIOD.replace_all(&collapsed, ".");
    let collapsed = PERIOD_RUN.replace_all(&collapsed, ".");
    let cleaned = collapsed.trim_matches(|c: char| c == '.' || c.is_whitespace());

    if !cleaned.chars().any(char::is_alphanumeric) {
        return String::new();
    }
    cleaned.to_string()
}
