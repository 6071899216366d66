/// All database primary keys are SQLite INTEGER PRIMARY KEY.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Domain dates (cost dates, due dates, scenario starts) travel as
/// `YYYY-MM-DD` strings and are parsed with this format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a domain date. Empty or malformed strings yield `None`.
pub fn parse_date(value: &str) -> Option<chrono::NaiveDate> {
    if value.is_empty() {
        return None;
    }
    chrono::NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date("2024-02-29"),
            chrono::NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[test]
    fn rejects_empty_and_malformed() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("02/03/2024"), None);
        assert_eq!(parse_date("2023-02-29"), None);
    }
}
