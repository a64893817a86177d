//! Rendering and writing of the SUMMA file manager.
//!
//! The file manager is the model's entry-point configuration: a fixed
//! sequence of quoted values, one per line, each tagged with the key the
//! model expects (`SETNGS_PATH`, `M_DECISIONS`, ..., `OUTPUT_PREFIX`).
//! Line order is significant to the model's parser, so the sequence here
//! must not be reordered.

use std::path::PathBuf;

use summa_common::{RunDescriptor, SummaResult};
use tracing::info;

use crate::layout::SettingsLayout;

/// Model-visible paths written into the file manager.
///
/// When the model runs inside a container these are container-side paths
/// (e.g. `/summaTestCases/settings/`), not host paths; the caller decides.
#[derive(Debug, Clone)]
pub struct ContainerPaths {
    settings: String,
    input: String,
    output: String,
}

impl ContainerPaths {
    pub fn new(
        settings: impl Into<String>,
        input: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            settings: with_trailing_slash(settings.into()),
            input: with_trailing_slash(input.into()),
            output: with_trailing_slash(output.into()),
        }
    }
}

/// The model requires directory entries to end in '/'.
fn with_trailing_slash(mut path: String) -> String {
    if !path.ends_with('/') {
        path.push('/');
    }
    path
}

const VALUE_WIDTH: usize = 48;

fn line(value: &str, key: &str) -> String {
    // Pad outside the quotes; the model reads everything between them.
    format!("{:<width$} ! {}\n", format!("'{}'", value), key, width = VALUE_WIDTH)
}

/// Render the file manager for a run.
pub fn render(descriptor: &RunDescriptor, paths: &ContainerPaths) -> String {
    let site = descriptor.site.as_str();
    let mut out = String::new();
    out.push_str("SUMMA_FILE_MANAGER_V1.1\n");
    out.push_str(&format!(
        "! fileManager for site {}, run '{}'\n",
        site, descriptor.label
    ));
    out.push_str("! *** paths (must end with '/') ***\n");
    out.push_str(&line(&paths.settings, "SETNGS_PATH"));
    out.push_str(&line(&paths.input, "INPUT_PATH"));
    out.push_str(&line(&paths.output, "OUTPUT_PATH"));
    out.push_str("! *** settings files, relative to SETNGS_PATH ***\n");
    out.push_str(&line(
        &SettingsLayout::decisions_file_name(&descriptor.label),
        "M_DECISIONS",
    ));
    out.push_str(&line("meta/summa_zTimeMeta.txt", "META_TIME"));
    out.push_str(&line("meta/summa_zLocalAttributeMeta.txt", "META_ATTR"));
    out.push_str(&line("meta/summa_zCategoryMeta.txt", "META_TYPE"));
    out.push_str(&line("meta/summa_zForceMeta.txt", "META_FORCE"));
    out.push_str(&line("meta/summa_zLocalParamMeta.txt", "META_LOCALPARAM"));
    out.push_str(&line("meta/summa_zLocalModelVarMeta.txt", "OUTPUT_CONTROL"));
    out.push_str(&line("meta/summa_zLocalModelIndexMeta.txt", "META_LOCALINDEX"));
    out.push_str(&line("meta/summa_zBasinParamMeta.txt", "META_BASINPARAM"));
    out.push_str(&line("meta/summa_zBasinModelVarMeta.txt", "META_BASINMVAR"));
    out.push_str(&line(
        &format!("{}/summa_zLocalAttributes.txt", site),
        "LOCAL_ATTRIBUTES",
    ));
    out.push_str(&line(
        &format!("{}/summa_zLocalParamInfo.txt", site),
        "LOCALPARAM_INFO",
    ));
    out.push_str(&line(
        &format!("{}/summa_zBasinParamInfo.txt", site),
        "BASINPARAM_INFO",
    ));
    out.push_str(&line(
        &format!("{}/summa_zForcingFileList.txt", site),
        "FORCING_FILELIST",
    ));
    out.push_str(&line(
        &format!("{}/summa_zInitialCond.txt", site),
        "MODEL_INITCOND",
    ));
    out.push_str(&line(
        &format!("{}/summa_zParamTrial.txt", site),
        "PARAMETER_TRIAL",
    ));
    out.push_str(&line(&descriptor.output_prefix(), "OUTPUT_PREFIX"));
    out
}

/// Write the file manager for a run under the settings directory.
pub fn write(
    layout: &SettingsLayout,
    descriptor: &RunDescriptor,
    paths: &ContainerPaths,
) -> SummaResult<PathBuf> {
    let contents = render(descriptor, paths);
    let path = layout.write_atomic(&SettingsLayout::file_manager_name(&descriptor.label), &contents)?;
    info!(
        site = %descriptor.site,
        label = %descriptor.label,
        "wrote file manager"
    );
    Ok(path)
}
