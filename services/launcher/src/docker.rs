//! Docker invocation for the containerized model binary.
//!
//! The model runs as `docker run -v <summa_dir>:/<container_name> <image>
//! <file_manager>` where the file-manager path is container-side. The
//! container's entrypoint hands that path to the model executable.

use std::path::PathBuf;
use std::process::Stdio;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use summa_common::RunLabel;
use summa_settings::SettingsLayout;

use crate::config::LaunchConfig;

/// A fully-resolved `docker run` invocation for one model run.
#[derive(Debug, Clone)]
pub struct DockerInvocation {
    image: String,
    host_dir: PathBuf,
    container_name: String,
    file_manager: String,
}

impl DockerInvocation {
    /// Build the invocation for a run label from the launch config.
    pub fn for_run(config: &LaunchConfig, label: &RunLabel) -> Self {
        Self {
            image: config.docker.image.clone(),
            host_dir: config.project.summa_dir.clone(),
            container_name: config.project.container_name.clone(),
            file_manager: format!(
                "/{}/settings/{}",
                config.project.container_name,
                SettingsLayout::file_manager_name(label)
            ),
        }
    }

    /// The argument vector, `docker` first.
    pub fn argv(&self) -> Vec<String> {
        vec![
            "docker".to_string(),
            "run".to_string(),
            "--rm".to_string(),
            "-v".to_string(),
            format!("{}:/{}", self.host_dir.display(), self.container_name),
            self.image.clone(),
            self.file_manager.clone(),
        ]
    }

    /// Shell-style rendering for logs and `--dry-run` output.
    pub fn command_line(&self) -> String {
        self.argv().join(" ")
    }

    /// Run the container to completion, streaming its output through.
    pub async fn execute(&self) -> Result<()> {
        let argv = self.argv();
        info!(command = %self.command_line(), "launching model container");

        let status = tokio::process::Command::new(&argv[0])
            .args(&argv[1..])
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .context("Failed to spawn docker")?;

        if !status.success() {
            warn!(code = ?status.code(), "model container exited with failure");
            bail!("model run failed with status {}", status);
        }
        info!("model container finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LaunchConfig;

    fn config() -> LaunchConfig {
        serde_yaml::from_str(
            r#"
project:
  summa_dir: /proj/ModTsfc/summa
site: CDP
runs:
  - label: test
    start: 2005-10-01
    end: 2006-09-30
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_command_line_shape() {
        let label = RunLabel::new("test").unwrap();
        let invocation = DockerInvocation::for_run(&config(), &label);
        assert_eq!(
            invocation.command_line(),
            "docker run --rm -v /proj/ModTsfc/summa:/summaTestCases \
             bartnijssen/summa:docker \
             /summaTestCases/settings/summa_fileManager_test.txt"
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        );
    }

    #[test]
    fn test_argv_mount_pair() {
        let label = RunLabel::new("test").unwrap();
        let argv = DockerInvocation::for_run(&config(), &label).argv();
        let mount_idx = argv.iter().position(|a| a == "-v").unwrap();
        assert_eq!(argv[mount_idx + 1], "/proj/ModTsfc/summa:/summaTestCases");
    }
}
