//! Launch configuration loading.
//!
//! A launch file is a YAML document describing one site's project layout
//! and the runs to perform against it:
//!
//! ```yaml
//! project:
//!   summa_dir: /home/lapok/proj/ModTsfc/summa
//!   container_name: summaTestCases
//! docker:
//!   image: bartnijssen/summa:docker
//! site: CDP
//! forcing_file: CDP.ModTsfc.ModelForcing_wy2006.nc
//! defaults:
//!   astability: louisinv
//! runs:
//!   - label: test
//!     start: 2005-10-01
//!     end: 2006-09-30
//! ```
//!
//! The summa directory is taken from the file, never guessed from the
//! host platform; the same launch file works on any machine that mounts
//! the project at the configured path.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use summa_common::{DecisionSet, RunDescriptor, RunLabel, RunPeriod, SiteId};
use summa_settings::ContainerPaths;

/// Root configuration loaded from a launch YAML file.
#[derive(Debug, Clone, Deserialize)]
pub struct LaunchConfig {
    pub project: ProjectConfig,
    #[serde(default)]
    pub docker: DockerConfig,
    pub site: String,
    /// Forcing file name under `<summa_dir>/input`, for `--forcing-summary`.
    #[serde(default)]
    pub forcing_file: Option<String>,
    /// Decisions applied to every run, overridable per run.
    #[serde(default)]
    pub defaults: BTreeMap<String, String>,
    pub runs: Vec<RunSpec>,
}

/// Project directory layout on the host.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// Base summa directory containing `settings/`, `input/`, `output/`.
    pub summa_dir: PathBuf,
    /// Mount point name inside the container.
    #[serde(default = "default_container_name")]
    pub container_name: String,
}

fn default_container_name() -> String {
    "summaTestCases".to_string()
}

/// Container image settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DockerConfig {
    #[serde(default = "default_image")]
    pub image: String,
}

fn default_image() -> String {
    "bartnijssen/summa:docker".to_string()
}

impl Default for DockerConfig {
    fn default() -> Self {
        Self {
            image: default_image(),
        }
    }
}

/// One run to perform: label, period, decision overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct RunSpec {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default)]
    pub decisions: BTreeMap<String, String>,
}

impl LaunchConfig {
    /// Load and parse a launch file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read launch config {}", path.display()))?;
        let config: LaunchConfig = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse launch config {}", path.display()))?;
        debug!(
            site = %config.site,
            runs = config.runs.len(),
            "loaded launch config"
        );
        Ok(config)
    }

    pub fn settings_dir(&self) -> PathBuf {
        self.project.summa_dir.join("settings")
    }

    pub fn input_dir(&self) -> PathBuf {
        self.project.summa_dir.join("input")
    }

    /// Paths as the model sees them inside the container.
    pub fn container_paths(&self) -> ContainerPaths {
        let base = &self.project.container_name;
        ContainerPaths::new(
            format!("/{}/settings/", base),
            format!("/{}/input/", base),
            format!("/{}/output/", base),
        )
    }

    /// Build the validated descriptor for one run.
    pub fn descriptor(&self, run: &RunSpec) -> Result<RunDescriptor> {
        let site = SiteId::new(self.site.as_str())
            .with_context(|| format!("Invalid site name '{}'", self.site))?;
        let label = RunLabel::new(run.label.as_str())
            .with_context(|| format!("Invalid run label '{}'", run.label))?;
        let period = RunPeriod::from_dates(run.start, run.end)
            .with_context(|| format!("Invalid period for run '{}'", run.label))?;
        Ok(RunDescriptor::new(site, label, period))
    }

    /// Build the validated decision set for one run: defaults first, then
    /// the run's overrides.
    pub fn decisions(&self, run: &RunSpec) -> Result<DecisionSet> {
        let mut set = DecisionSet::new();
        for (keyword, choice) in self.defaults.iter().chain(run.decisions.iter()) {
            set.insert(keyword, choice)
                .with_context(|| format!("Bad decision in run '{}'", run.label))?;
        }
        Ok(set)
    }
}
