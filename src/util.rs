//! Formatting helpers for generated pages

use chrono::{DateTime, Local, NaiveDate};

/// Formats a date for report footers, e.g. "October 16, 2026"
pub fn format_report_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// Formats a local time as "YYYY-MM-DD HH:MM:SS"
pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Formats byte count as human readable file size
///
/// Uses binary prefixes with one decimal place. Sizes under a megabyte are
/// always shown in kilobytes, so small reports read as "0.4 KB".
///
/// # Arguments
///
/// * `bytes`: File size in bytes
///
/// # Returns
///
/// Formatted string like "0.5 KB", "12.0 KB" or "2.0 MB"
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_report_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 6).expect("Valid date");
        assert_eq!(format_report_date(date), "October 06, 2026");
    }

    #[test]
    fn test_format_timestamp() {
        let time = Local
            .with_ymd_and_hms(2025, 1, 2, 13, 4, 5)
            .single()
            .expect("Valid local time");
        assert_eq!(format_timestamp(&time), "2025-01-02 13:04:05");
    }

    #[test]
    fn test_format_file_size_kilobytes() {
        assert_eq!(format_file_size(0), "0.0 KB");
        assert_eq!(format_file_size(512), "0.5 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1024 * 1023), "1023.0 KB");
    }

    #[test]
    fn test_format_file_size_megabytes() {
        assert_eq!(format_file_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 / 2), "2.5 MB");
    }
}
