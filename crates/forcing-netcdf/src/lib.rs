//! Forcing-dataset loader for site runs.
//!
//! Model forcing lives in NetCDF files, one per site and water year
//! (e.g. `CDP.ModTsfc.ModelForcing_wy2006.nc`), with a CF time axis and
//! one series per meteorological variable. This crate loads such a file
//! into memory and computes per-variable summaries so a run's time span
//! can be sanity-checked against the forcing before the model launches.

pub mod cf_time;
pub mod error;
pub mod forcing;

pub use error::{ForcingError, ForcingResult};
pub use forcing::{load_forcing, DatasetSummary, ForcingDataset, ForcingVariable, VariableSummary};
