//! CF-convention time axis decoding.
//!
//! NetCDF time variables carry a `units` attribute of the form
//! `"<unit> since <epoch>"`, e.g. `"hours since 2005-10-01 00:00:00"`.
//! Values on the axis are offsets from the epoch in that unit.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{ForcingError, ForcingResult};

/// Time unit of a CF time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    fn parse(s: &str) -> Option<Self> {
        match s.trim_end_matches('s') {
            "second" | "sec" => Some(TimeUnit::Seconds),
            "minute" | "min" => Some(TimeUnit::Minutes),
            "hour" | "hr" => Some(TimeUnit::Hours),
            "day" => Some(TimeUnit::Days),
            _ => None,
        }
    }

    fn seconds(&self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Minutes => 60.0,
            TimeUnit::Hours => 3600.0,
            TimeUnit::Days => 86400.0,
        }
    }
}

/// Parse a CF `units` attribute into (unit, epoch).
pub fn parse_units(units: &str) -> ForcingResult<(TimeUnit, DateTime<Utc>)> {
    let (unit_str, epoch_str) = units
        .split_once(" since ")
        .ok_or_else(|| ForcingError::InvalidTimeUnits(units.to_string()))?;

    let unit = TimeUnit::parse(unit_str.trim())
        .ok_or_else(|| ForcingError::InvalidTimeUnits(units.to_string()))?;

    let epoch = parse_epoch(epoch_str.trim())
        .ok_or_else(|| ForcingError::InvalidTimeUnits(units.to_string()))?;

    Ok((unit, epoch))
}

/// Parse the epoch part of a CF units string (assumed UTC when untagged).
fn parse_epoch(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim_end_matches('Z').trim_end_matches(" UTC").trim();

    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&ndt));
        }
    }

    // Date-only epochs
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap()));
    }

    None
}

/// Decode raw axis values into UTC datetimes.
pub fn decode_times(values: &[f64], units: &str) -> ForcingResult<Vec<DateTime<Utc>>> {
    let (unit, epoch) = parse_units(units)?;
    let factor = unit.seconds();
    Ok(values
        .iter()
        .map(|v| epoch + Duration::seconds((v * factor).round() as i64))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_hours_since() {
        let (unit, epoch) = parse_units("hours since 2005-10-01 00:00:00").unwrap();
        assert_eq!(unit, TimeUnit::Hours);
        assert_eq!(epoch, Utc.with_ymd_and_hms(2005, 10, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_seconds_since_date_only() {
        let (unit, epoch) = parse_units("seconds since 1990-01-01").unwrap();
        assert_eq!(unit, TimeUnit::Seconds);
        assert_eq!(epoch, Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_days_since_iso() {
        let (unit, _) = parse_units("days since 2000-01-01T00:00:00Z").unwrap();
        assert_eq!(unit, TimeUnit::Days);
    }

    #[test]
    fn test_decode_hourly_axis() {
        let times = decode_times(&[0.0, 1.0, 25.0], "hours since 2005-10-01 00:00:00").unwrap();
        assert_eq!(times[0], Utc.with_ymd_and_hms(2005, 10, 1, 0, 0, 0).unwrap());
        assert_eq!(times[1].hour(), 1);
        assert_eq!(times[2], Utc.with_ymd_and_hms(2005, 10, 2, 1, 0, 0).unwrap());
    }

    #[test]
    fn test_rejects_units_without_since() {
        assert!(matches!(
            parse_units("fortnights"),
            Err(ForcingError::InvalidTimeUnits(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_unit() {
        assert!(parse_units("fortnights since 2000-01-01").is_err());
    }
}
