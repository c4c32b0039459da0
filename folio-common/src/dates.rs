//! Project date parsing
//!
//! Project documents carry dates in two shapes, depending on the year group
//! they were authored in:
//! - `YYYY-MM-DD` (ISO-like, hyphen separated)
//! - `DD/MM/YYYY` (slash separated)
//!
//! Anything else is treated as "no date". Unparseable dates never fail a
//! document; they only change where the record sorts.

use chrono::NaiveDate;

/// Parse a project date string into a comparable calendar date
///
/// Hyphenated input is tried first as year-month-day; if that does not split
/// into exactly three parts, slashed input is tried as day/month/year.
///
/// # Examples
/// ```
/// use folio_common::dates::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_date(Some("2025-02-10")), NaiveDate::from_ymd_opt(2025, 2, 10));
/// assert_eq!(parse_date(Some("01/03/2024")), NaiveDate::from_ymd_opt(2024, 3, 1));
/// assert_eq!(parse_date(Some("March 2024")), None);
/// assert_eq!(parse_date(None), None);
/// ```
pub fn parse_date(input: Option<&str>) -> Option<NaiveDate> {
    let input = input?.trim();
    if input.is_empty() {
        return None;
    }

    if input.contains('-') {
        if let Some([year, month, day]) = split_three(input, '-') {
            return build_date(year, month, day);
        }
    }

    if input.contains('/') {
        if let Some([day, month, year]) = split_three(input, '/') {
            return build_date(year, month, day);
        }
    }

    None
}

/// Split on `delimiter`, returning the pieces only when there are exactly three
fn split_three(input: &str, delimiter: char) -> Option<[&str; 3]> {
    let mut parts = input.split(delimiter);
    let first = parts.next()?;
    let second = parts.next()?;
    let third = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some([first, second, third])
}

fn build_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year = year.trim().parse::<i32>().ok()?;
    let month = month.trim().parse::<u32>().ok()?;
    let day = day.trim().parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
