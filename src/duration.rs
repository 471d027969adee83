use chrono::NaiveDateTime;

use crate::error::TicketStatsError;

/// `dd.mm.yy HH:MM`, date and time joined by a single space.
pub const DATE_TIME_PATTERN: &str = "%d.%m.%y %H:%M";

/// parses `text` with the given chrono pattern. calendar values are checked,
/// so a month of 13 or an hour of 24 is an error.
pub fn parse_instant(text: &str, pattern: &str) -> Result<NaiveDateTime, TicketStatsError> {
    NaiveDateTime::parse_from_str(text, pattern).map_err(|source| TicketStatsError::Format {
        value: String::from(text),
        source,
    })
}

/// whole minutes elapsed between departure and arrival, truncated toward zero.
/// negative durations are not rejected.
pub fn flight_minutes(departure: &str, arrival: &str) -> Result<i64, TicketStatsError> {
    let departure = parse_instant(departure, DATE_TIME_PATTERN)?;
    let arrival = parse_instant(arrival, DATE_TIME_PATTERN)?;
    Ok(arrival.signed_duration_since(departure).num_minutes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_day() {
        assert_eq!(flight_minutes("01.03.24 10:00", "01.03.24 12:30").unwrap(), 150);
    }

    #[test]
    fn test_overnight() {
        assert_eq!(flight_minutes("12.05.18 16:50", "13.05.18 4:35").unwrap(), 705);
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(flight_minutes("28.02.24 23:00", "01.03.24 01:00").unwrap(), 26 * 60);
    }

    #[test]
    fn test_single_digit_hour() {
        let instant = parse_instant("12.05.18 9:40", DATE_TIME_PATTERN).unwrap();
        assert_eq!(instant.format("%Y-%m-%d %H:%M").to_string(), "2018-05-12 09:40");
    }

    #[test]
    fn test_invalid_month() {
        let err = flight_minutes("31.13.24 10:00", "01.01.25 10:00").unwrap_err();
        match err {
            TicketStatsError::Format { value, .. } => assert_eq!(value, "31.13.24 10:00"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_invalid_day_for_month() {
        assert!(parse_instant("31.04.24 10:00", DATE_TIME_PATTERN).is_err());
    }

    #[test]
    fn test_wrong_separator() {
        assert!(parse_instant("01/03/24 10:00", DATE_TIME_PATTERN).is_err());
        assert!(parse_instant("01.03.24T10:00", DATE_TIME_PATTERN).is_err());
    }

    #[test]
    fn test_empty_fields() {
        assert!(parse_instant(" ", DATE_TIME_PATTERN).is_err());
    }
}
