//! Settings-directory layout and atomic file writes.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use summa_common::{RunLabel, SummaError, SummaResult};
use tracing::debug;

/// The on-disk settings directory for a site, with the naming scheme for
/// generated files.
///
/// The directory is injected by the caller and must already exist; this
/// crate never creates it, so a typo'd path fails loudly instead of
/// scattering settings trees around the filesystem.
#[derive(Debug, Clone)]
pub struct SettingsLayout {
    settings_dir: PathBuf,
}

impl SettingsLayout {
    pub fn new(settings_dir: impl Into<PathBuf>) -> Self {
        Self {
            settings_dir: settings_dir.into(),
        }
    }

    pub fn settings_dir(&self) -> &Path {
        &self.settings_dir
    }

    /// File name of the decisions file for a run label.
    pub fn decisions_file_name(label: &RunLabel) -> String {
        format!("summa_zDecisions_{}.txt", label)
    }

    /// File name of the file manager for a run label.
    pub fn file_manager_name(label: &RunLabel) -> String {
        format!("summa_fileManager_{}.txt", label)
    }

    pub fn decisions_file_path(&self, label: &RunLabel) -> PathBuf {
        self.settings_dir.join(Self::decisions_file_name(label))
    }

    pub fn file_manager_path(&self, label: &RunLabel) -> PathBuf {
        self.settings_dir.join(Self::file_manager_name(label))
    }

    /// Atomically write `contents` to `file_name` under the settings dir.
    ///
    /// The contents land in a temp file in the same directory first and
    /// are renamed into place, so readers either see the old file or the
    /// complete new one, never a partial write.
    pub fn write_atomic(&self, file_name: &str, contents: &str) -> SummaResult<PathBuf> {
        if !self.settings_dir.is_dir() {
            return Err(SummaError::MissingSettingsDir(
                self.settings_dir.display().to_string(),
            ));
        }

        let target = self.settings_dir.join(file_name);
        let temp = self.settings_dir.join(format!(".{}.tmp", file_name));

        let mut file = fs::File::create(&temp)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&temp, &target)?;
        debug!(path = %target.display(), bytes = contents.len(), "wrote settings file");
        Ok(target)
    }
}
