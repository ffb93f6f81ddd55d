use chrono::NaiveDate;

/// Truncates a timestamp string to its `YYYY-MM-DD` prefix. Empty input
/// stays empty.
pub fn normalize_iso_date(s: &str) -> &str {
    let trimmed = s.trim();
    trimmed.get(..10).unwrap_or(trimmed)
}

/// Parses a `YYYY-MM-DD`-prefixed string as a calendar date. Longer
/// timestamps are truncated first so `2024-03-10T09:30:00Z` and
/// `2024-03-10` name the same day regardless of the runtime timezone.
pub fn parse_local_date(s: &str) -> Option<NaiveDate> {
    let normalized = normalize_iso_date(s);
    if normalized.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(normalized, "%Y-%m-%d").ok()
}

pub fn to_local_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
