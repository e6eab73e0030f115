use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use derive_more::Display;
use snafu::prelude::*;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::config::RenderPipeline;
use crate::ext::{PathExt, format_timestamp};
use crate::host::ProjectHost;

use super::Template;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ReadmeOutcome {
    #[display("created")]
    Created,
    #[display("updated")]
    Updated,
}

/// Graphics tier line: the short pipeline name, followed for scriptable
/// pipelines by the installed package version.
pub fn graphics_tier(host: &impl ProjectHost) -> String {
    let pipeline: RenderPipeline = host.project_info().render_pipeline;
    match pipeline.package_id() {
        None => pipeline.to_string(),
        Some(package_id) => {
            let version = host.package_version(package_id).unwrap_or_default();
            format!("{pipeline}\n<i>{} Version:</i> {version}", pipeline.full_name())
        }
    }
}

/// Placeholder values for the README template.
pub fn readme_values(host: &impl ProjectHost, generated_at: OffsetDateTime) -> BTreeMap<&'static str, String> {
    let project = host.project_info();
    BTreeMap::from([
        ("project_name", project.name.clone()),
        ("project_version", project.version.clone()),
        ("company", project.company.clone()),
        ("engine_version", project.engine_version.clone()),
        ("graphics_tier", graphics_tier(host)),
        ("last_updated", format_timestamp(generated_at)),
    ])
}

/// Renders `template` and overwrites the README at `relative_path` below the
/// host's base directory.
///
/// The host is refreshed only when the file did not exist before.
pub fn write_readme(
    host: &impl ProjectHost,
    template: &Template,
    relative_path: &Path,
    generated_at: OffsetDateTime,
) -> Result<ReadmeOutcome, ReadmeError> {
    let path = host.base_dir().join(relative_path);
    let outcome = if path.is_file() {
        ReadmeOutcome::Updated
    } else {
        ReadmeOutcome::Created
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context(CreateParentSnafu { path: parent })?;
    }

    let contents = template.render(&readme_values(host, generated_at));
    fs::write(&path, contents).context(WriteSnafu { path: &path })?;
    debug!("Wrote README to {}", path.best_effort_path_display());

    if outcome == ReadmeOutcome::Created {
        host.refresh(&[relative_path.to_string_lossy().into_owned()]);
    }
    info!("README {} at {}", outcome, path.best_effort_path_display());

    Ok(outcome)
}

#[derive(Debug, Snafu)]
pub enum ReadmeError {
    #[snafu(display("Failed to create folder {} for the README", path.best_effort_path_display()))]
    CreateParentError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to write README {}", path.best_effort_path_display()))]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}
