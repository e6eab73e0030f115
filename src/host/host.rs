use std::path::Path;

use snafu::Snafu;

use crate::config::ProjectInfo;

/// What the scaffolding commands need from the environment they run in.
pub trait ProjectHost {
    /// Directory every layout path is resolved against.
    fn base_dir(&self) -> &Path;
    fn project_info(&self) -> &ProjectInfo;
    /// Installed version of `package_id`, or `None` when it is not installed.
    fn package_version(&self, package_id: &str) -> Option<String>;
    /// Called after paths below the base directory were created.
    fn refresh(&self, changed: &[String]);
}

pub trait ConfirmationPrompt {
    /// Asks whether the listed folders should be created.
    fn confirm_creation(&self, missing: &[String]) -> Result<bool, HostError>;
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum HostError {
    #[snafu(display("Failed to get user input"))]
    PromptError { source: dialoguer::Error },
}
