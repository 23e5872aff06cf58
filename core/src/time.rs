//! Time related utils.

use chrono::NaiveDateTime;
use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into http date: `Sun, 06 Nov 1994 08:49:37 GMT`
///
/// ## Note
///
/// HTTP date is slightly different from RFC2822.
///
/// - Timezone is fixed to GMT.
/// - Day must be 2 digit.
pub fn format_http_date(t: DateTime) -> String {
    t.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Format used by the admin API for time range parameters.
pub const ADMIN_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format time as admin API parameter: `2022-03-13 07:20:04`
pub fn format_admin_datetime(t: NaiveDateTime) -> String {
    t.format(ADMIN_DATETIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_format_http_date() {
        let t = Utc.with_ymd_and_hms(2022, 3, 1, 8, 12, 34).unwrap();
        assert_eq!(format_http_date(t), "Tue, 01 Mar 2022 08:12:34 GMT");
    }

    #[test]
    fn test_format_admin_datetime() {
        let t = Utc
            .with_ymd_and_hms(2022, 3, 13, 7, 20, 4)
            .unwrap()
            .naive_utc();
        assert_eq!(format_admin_datetime(t), "2022-03-13 07:20:04");
    }
}
