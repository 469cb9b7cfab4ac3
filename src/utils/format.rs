//! Format - Formatting Utilities

use chrono::{DateTime, Local};

/// Format just the time portion with milliseconds (`HH:MM:SS.mmm`, zero-padded)
pub fn format_time_ms(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S%.3f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_time_label_is_zero_padded_with_millis() {
        let dt = Local
            .with_ymd_and_hms(2026, 8, 4, 9, 5, 7)
            .single()
            .expect("local datetime")
            + Duration::milliseconds(42);

        assert_eq!(format_time_ms(&dt), "09:05:07.042");
    }
}
