use chrono::NaiveDate;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a strict `YYYY-MM-DD` calendar date
///
/// Rejects short forms like `2024-1-5` and dates that do not exist (`2023-02-29`).
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    // chrono alone would accept signed years and single-digit months and days
    if !has_iso_date_shape(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, ISO_DATE_FORMAT).ok()
}

/// `dddd-dd-dd` with ASCII digits
fn has_iso_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Parse a `start,end` date range
///
/// Returns `None` when the comma is missing, there are more than two parts, or
/// either side is not a valid date. Ranges with `start > end` pass through unchanged.
pub fn parse_date_range(s: &str) -> Option<(NaiveDate, NaiveDate)> {
    let mut parts = s.split(',');
    let (start, end) = (parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    Some((parse_iso_date(start.trim())?, parse_iso_date(end.trim())?))
}
