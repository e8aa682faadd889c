//! Date formatting for tables and forms
use chrono::{DateTime, Utc};

/// "2024-03-15T14:02:26Z" -> "15 Mar 2024"
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let at = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_date(&at), "15 Mar 2024");
    }
}
