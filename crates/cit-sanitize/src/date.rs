//! Publication date quality classification.

use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static DASHED_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("Invalid dashed date regex")
});

static COMPACT_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})(\d{2})(\d{2})$").expect("Invalid compact date regex"));

static YEAR_MONTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-?(\d{2})$").expect("Invalid year-month regex"));

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{4})$").expect("Invalid year regex"));

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("Invalid digit-run regex"));

const MIN_YEAR: i32 = 1000;
const MAX_YEAR: i32 = 2099;

/// How complete a publication date is. Lower levels are more complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DateQuality {
    /// A valid calendar date (`YYYY-MM-DD`, `YYYYMMDD`).
    Complete = 1,
    /// Year and month (`YYYY-MM`, `YYYYMM`, `YYYYMM00`).
    YearMonth = 2,
    /// Year only (`YYYY`, `YYYY0000`).
    Year = 3,
    /// A plausible year surrounded by other text (`"jan. 1998"`).
    EmbeddedYear = 4,
}

impl DateQuality {
    pub fn level(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for DateQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

/// Classify a loosely formatted date string.
///
/// Returns `None` when no plausible year can be found.
pub fn date_quality(date: &str) -> Option<DateQuality> {
    let date = date.trim();
    if date.is_empty() {
        return None;
    }
    classify_exact(date).or_else(|| embedded_year(date).map(|_| DateQuality::EmbeddedYear))
}

fn classify_exact(date: &str) -> Option<DateQuality> {
    if let Some(caps) = DASHED_DATE
        .captures(date)
        .or_else(|| COMPACT_DATE.captures(date))
    {
        let year = plausible_year(&caps[1])?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        return match (month, day) {
            (0, 0) => Some(DateQuality::Year),
            (1..=12, 0) => Some(DateQuality::YearMonth),
            _ => NaiveDate::from_ymd_opt(year, month, day).map(|_| DateQuality::Complete),
        };
    }

    if let Some(caps) = YEAR_MONTH.captures(date) {
        plausible_year(&caps[1])?;
        let month: u32 = caps[2].parse().ok()?;
        return match month {
            0 => Some(DateQuality::Year),
            1..=12 => Some(DateQuality::YearMonth),
            _ => None,
        };
    }

    if let Some(caps) = YEAR.captures(date) {
        plausible_year(&caps[1])?;
        return Some(DateQuality::Year);
    }

    None
}

/// First run of exactly four digits that reads as a plausible year.
fn embedded_year(date: &str) -> Option<i32> {
    DIGIT_RUN
        .find_iter(date)
        .filter(|run| run.as_str().len() == 4)
        .find_map(|run| plausible_year(run.as_str()))
}

fn plausible_year(digits: &str) -> Option<i32> {
    digits
        .parse::<i32>()
        .ok()
        .filter(|year| (MIN_YEAR..=MAX_YEAR).contains(year))
}
