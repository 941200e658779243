//! `MM:SS` race time strings.

use crate::errors::AppError;

/// Parses an `MM:SS` string into whole seconds.
///
/// Exactly two colon-separated unsigned integers are accepted. Seconds are
/// not capped at 59, so `4:75` is 315 seconds.
pub fn parse_race_time(input: &str) -> Result<u32, AppError> {
    let invalid = || AppError::InvalidTime(input.to_string());

    let (minutes, seconds) = input.trim().split_once(':').ok_or_else(invalid)?;
    if seconds.contains(':') {
        return Err(invalid());
    }

    let minutes: u32 = minutes.trim().parse().map_err(|_| invalid())?;
    let seconds: u32 = seconds.trim().parse().map_err(|_| invalid())?;

    minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .ok_or_else(invalid)
}

/// Formats whole seconds as `MM:SS`.
pub fn format_race_time(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_times() {
        assert_eq!(parse_race_time("05:00").unwrap(), 300);
        assert_eq!(parse_race_time("4:30").unwrap(), 270);
        assert_eq!(parse_race_time("0:12").unwrap(), 12);
        assert_eq!(parse_race_time(" 12:05 ").unwrap(), 725);
        assert_eq!(parse_race_time("4:75").unwrap(), 315);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "5", "5:", ":30", "1:02:03", "a:10", "5:3.5", "-1:00"] {
            assert!(
                matches!(parse_race_time(input), Err(AppError::InvalidTime(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_format() {
        assert_eq!(format_race_time(300), "05:00");
        assert_eq!(format_race_time(725), "12:05");
        assert_eq!(format_race_time(59), "00:59");
    }
}
