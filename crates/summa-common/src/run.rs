//! Run descriptors: which site, which label, which time span.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{SummaError, SummaResult};
use crate::ident::{RunLabel, SiteId};

/// Datetime format used throughout the model's settings files.
pub const SUMMA_DATETIME_FMT: &str = "%Y-%m-%d %H:%M";

/// The simulated time span of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunPeriod {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl RunPeriod {
    /// Create a period from explicit datetimes. Fails if start > end.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> SummaResult<Self> {
        if start > end {
            return Err(SummaError::InvalidPeriod {
                start: start.format(SUMMA_DATETIME_FMT).to_string(),
                end: end.format(SUMMA_DATETIME_FMT).to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Create a period from calendar dates.
    ///
    /// The start day begins at 00:00 and the end day runs through 23:00,
    /// the last step of a day of hourly forcing.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> SummaResult<Self> {
        let start = start.and_time(NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        let end = end.and_time(NaiveTime::from_hms_opt(23, 0, 0).unwrap());
        Self::new(start, end)
    }

    /// Parse a period from ISO 8601 dates ("2005-10-01", "2006-09-30").
    pub fn from_date_strs(start: &str, end: &str) -> SummaResult<Self> {
        let parse = |s: &str| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| SummaError::InvalidDate {
                value: s.to_string(),
                message: e.to_string(),
            })
        };
        Self::from_dates(parse(start)?, parse(end)?)
    }

    /// Start of the period in the model's settings-file format.
    pub fn start_formatted(&self) -> String {
        self.start.format(SUMMA_DATETIME_FMT).to_string()
    }

    /// End of the period in the model's settings-file format.
    pub fn end_formatted(&self) -> String {
        self.end.format(SUMMA_DATETIME_FMT).to_string()
    }
}

/// Everything identifying a single model execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunDescriptor {
    pub site: SiteId,
    pub label: RunLabel,
    pub period: RunPeriod,
}

impl RunDescriptor {
    pub fn new(site: SiteId, label: RunLabel, period: RunPeriod) -> Self {
        Self { site, label, period }
    }

    /// Prefix for output files produced by this run, `<site>_<label>`.
    ///
    /// Both parts are validated identifiers, so the prefix is safe to
    /// embed in file names.
    pub fn output_prefix(&self) -> String {
        format!("{}_{}", self.site, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_from_dates_spans_water_year() {
        let period = RunPeriod::from_date_strs("2005-10-01", "2006-09-30").unwrap();
        assert_eq!(period.start_formatted(), "2005-10-01 00:00");
        assert_eq!(period.end_formatted(), "2006-09-30 23:00");
    }

    #[test]
    fn test_period_rejects_reversed_dates() {
        let err = RunPeriod::from_date_strs("2006-09-30", "2005-10-01").unwrap_err();
        assert!(matches!(err, SummaError::InvalidPeriod { .. }));
    }

    #[test]
    fn test_single_day_period_is_valid() {
        let period = RunPeriod::from_date_strs("2005-10-01", "2005-10-01").unwrap();
        assert!(period.start < period.end);
    }

    #[test]
    fn test_output_prefix() {
        let desc = RunDescriptor::new(
            SiteId::new("CDP").unwrap(),
            RunLabel::new("test").unwrap(),
            RunPeriod::from_date_strs("2005-10-01", "2006-09-30").unwrap(),
        );
        assert_eq!(desc.output_prefix(), "CDP_test");
    }
}
