//! Loading forcing NetCDF files with the native netcdf library.

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::cf_time;
use crate::error::{ForcingError, ForcingResult};

/// Meteorological variables the model accepts as forcing. Files may
/// carry any subset; anything else in the file is ignored.
const FORCING_VARIABLES: &[&str] = &[
    "airtemp", "pptrate", "SWRadAtm", "LWRadAtm", "airpres", "spechum", "windspd",
];

/// One forcing series, already unpacked to f64 with fills as NaN.
#[derive(Debug, Clone)]
pub struct ForcingVariable {
    pub name: String,
    pub units: Option<String>,
    pub values: Vec<f64>,
}

/// An in-memory forcing dataset for one site.
#[derive(Debug, Clone)]
pub struct ForcingDataset {
    pub times: Vec<DateTime<Utc>>,
    pub variables: Vec<ForcingVariable>,
}

/// Per-variable summary statistics (NaN-aware).
#[derive(Debug, Clone)]
pub struct VariableSummary {
    pub name: String,
    pub units: Option<String>,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub missing: usize,
}

/// Whole-dataset summary for run sanity checks.
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub steps: usize,
    pub variables: Vec<VariableSummary>,
}

/// Load a forcing file from disk.
///
/// Requires a `time` variable with a CF `units` attribute; reads every
/// recognized forcing variable present in the file.
pub fn load_forcing(path: &Path) -> ForcingResult<ForcingDataset> {
    let nc_file = netcdf::open(path)
        .map_err(|e| ForcingError::InvalidFormat(format!("Failed to open NetCDF: {}", e)))?;

    let time_var = nc_file
        .variable("time")
        .ok_or_else(|| ForcingError::MissingData("time variable".to_string()))?;
    let raw_times: Vec<f64> = time_var
        .get_values(..)
        .map_err(|e| ForcingError::InvalidFormat(format!("Failed to read time axis: {}", e)))?;
    let units = get_str_attr(&time_var, "units")
        .ok_or_else(|| ForcingError::MissingData("time units attribute".to_string()))?;
    let times = cf_time::decode_times(&raw_times, &units)?;

    let mut variables = Vec::new();
    for &name in FORCING_VARIABLES {
        let Some(var) = nc_file.variable(name) else {
            continue;
        };
        let raw: Vec<f64> = var
            .get_values(..)
            .map_err(|e| ForcingError::InvalidFormat(format!("Failed to read {}: {}", name, e)))?;
        if raw.len() != times.len() {
            warn!(
                variable = name,
                values = raw.len(),
                steps = times.len(),
                "variable length does not match time axis, skipping"
            );
            continue;
        }
        let fill = get_f64_attr(&var, "_FillValue");
        let values = match fill {
            Some(fill) => raw
                .into_iter()
                .map(|v| if v == fill { f64::NAN } else { v })
                .collect(),
            None => raw,
        };
        variables.push(ForcingVariable {
            name: name.to_string(),
            units: get_str_attr(&var, "units"),
            values,
        });
    }

    debug!(
        path = %path.display(),
        steps = times.len(),
        variables = variables.len(),
        "loaded forcing dataset"
    );
    Ok(ForcingDataset { times, variables })
}

impl ForcingDataset {
    /// Compute summary statistics over every loaded variable.
    pub fn summary(&self) -> ForcingResult<DatasetSummary> {
        let (&start, &end) = match (self.times.first(), self.times.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(ForcingError::MissingData("empty time axis".to_string())),
        };
        let variables = self.variables.iter().map(summarize).collect();
        Ok(DatasetSummary {
            start,
            end,
            steps: self.times.len(),
            variables,
        })
    }
}

fn summarize(var: &ForcingVariable) -> VariableSummary {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    let mut count = 0usize;
    let mut missing = 0usize;
    for &v in &var.values {
        if v.is_nan() {
            missing += 1;
            continue;
        }
        min = min.min(v);
        max = max.max(v);
        sum += v;
        count += 1;
    }
    let mean = if count > 0 { sum / count as f64 } else { f64::NAN };
    if count == 0 {
        min = f64::NAN;
        max = f64::NAN;
    }
    VariableSummary {
        name: var.name.clone(),
        units: var.units.clone(),
        min,
        max,
        mean,
        missing,
    }
}

// =============================================================================
// Attribute helpers
// =============================================================================

fn has_attr(var: &netcdf::Variable, name: &str) -> bool {
    var.attributes().any(|attr| attr.name() == name)
}

fn get_str_attr(var: &netcdf::Variable, name: &str) -> Option<String> {
    if !has_attr(var, name) {
        return None;
    }
    match var.attribute_value(name)?.ok()? {
        netcdf::AttributeValue::Str(s) => Some(s),
        _ => None,
    }
}

fn get_f64_attr(var: &netcdf::Variable, name: &str) -> Option<f64> {
    if !has_attr(var, name) {
        return None;
    }
    let attr_value = var.attribute_value(name)?.ok()?;
    f64::try_from(attr_value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn var(values: Vec<f64>) -> ForcingVariable {
        ForcingVariable {
            name: "airtemp".to_string(),
            units: Some("K".to_string()),
            values,
        }
    }

    #[test]
    fn test_summarize_skips_nans() {
        let s = summarize(&var(vec![270.0, f64::NAN, 280.0]));
        assert_eq!(s.min, 270.0);
        assert_eq!(s.max, 280.0);
        assert_eq!(s.mean, 275.0);
        assert_eq!(s.missing, 1);
    }

    #[test]
    fn test_summarize_all_missing() {
        let s = summarize(&var(vec![f64::NAN, f64::NAN]));
        assert!(s.min.is_nan());
        assert!(s.mean.is_nan());
        assert_eq!(s.missing, 2);
    }

    #[test]
    fn test_summary_reports_time_range() {
        let t0 = Utc.with_ymd_and_hms(2005, 10, 1, 0, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2005, 10, 1, 1, 0, 0).unwrap();
        let ds = ForcingDataset {
            times: vec![t0, t1],
            variables: vec![var(vec![270.0, 271.0])],
        };
        let summary = ds.summary().unwrap();
        assert_eq!(summary.start, t0);
        assert_eq!(summary.end, t1);
        assert_eq!(summary.steps, 2);
    }

    #[test]
    fn test_summary_empty_axis_is_an_error() {
        let ds = ForcingDataset {
            times: vec![],
            variables: vec![],
        };
        assert!(matches!(
            ds.summary(),
            Err(ForcingError::MissingData(_))
        ));
    }
}
