use chrono::{DateTime, Local, TimeZone, Utc};

/// `YYYY-MM-DD HH:MM:SS` in the given zone.
pub fn format_timestamp_in<Tz: TimeZone>(timestamp: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp
        .with_timezone(zone)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Generation time as shown on the page, in the browser's local zone.
pub fn format_generated_at(timestamp: &DateTime<Utc>) -> String {
    format_timestamp_in(timestamp, &Local)
}

/// Dollar amount with two decimals, e.g. `$1234.50`.
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn formats_in_requested_zone() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 23, 30, 5).unwrap();
        assert_eq!(format_timestamp_in(&ts, &Utc), "2024-05-01 23:30:05");
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_timestamp_in(&ts, &plus_two), "2024-05-02 01:30:05");
    }

    #[test]
    fn money_has_two_decimals() {
        assert_eq!(format_money(100.0), "$100.00");
        assert_eq!(format_money(1234.5), "$1234.50");
        assert_eq!(format_money(0.126), "$0.13");
    }
}
