//! Settings-file generation for SUMMA runs.
//!
//! A run needs two generated text files under its settings directory:
//!
//! - the **decisions file** (`summa_zDecisions_<label>.txt`), carrying the
//!   simulation start/end datetimes and one line per model decision,
//! - the **file manager** (`summa_fileManager_<label>.txt`), the model's
//!   top-level configuration naming every other settings/input/output
//!   location plus the output prefix for the run.
//!
//! All writes are atomic (temp file in the target directory, then rename)
//! so a failed run never leaves a half-written settings file behind.

pub mod decisions_file;
pub mod file_manager;
pub mod layout;

use std::path::PathBuf;

use summa_common::{DecisionSet, RunDescriptor, SummaResult};

pub use file_manager::ContainerPaths;
pub use layout::SettingsLayout;

/// Paths of the files produced for one run.
#[derive(Debug, Clone)]
pub struct RunSettingsFiles {
    pub decisions_file: PathBuf,
    pub file_manager: PathBuf,
}

/// Write the full settings set for one run: decisions file, then the
/// file manager referencing it.
pub fn write_run_settings(
    layout: &SettingsLayout,
    descriptor: &RunDescriptor,
    decisions: &DecisionSet,
    paths: &ContainerPaths,
) -> SummaResult<RunSettingsFiles> {
    let decisions_file = decisions_file::write(layout, descriptor, decisions)?;
    let file_manager = file_manager::write(layout, descriptor, paths)?;
    Ok(RunSettingsFiles {
        decisions_file,
        file_manager,
    })
}
