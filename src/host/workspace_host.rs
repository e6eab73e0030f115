use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use colored::Colorize;
use dialoguer::Confirm;
use snafu::ResultExt;
use tracing::{debug, info};

use crate::config::{ProjectInfo, ScaffoldConfig};

use super::host::{ConfirmationPrompt, HostError, ProjectHost, PromptSnafu};

/// Host backed by a project directory and its `scaffold.yaml`.
#[derive(Debug, Clone)]
pub struct WorkspaceHost {
    base_dir: PathBuf,
    project: ProjectInfo,
    packages: HashMap<String, String>,
}

impl WorkspaceHost {
    pub fn new(root: &Path, config: &ScaffoldConfig) -> Self {
        let mut project = config.project.clone();
        if project.name.is_empty() {
            project.name = root
                .canonicalize()
                .ok()
                .and_then(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
                .unwrap_or_default();
            debug!("No project name configured, using '{}'", project.name);
        }

        Self {
            base_dir: root.join(&config.base_dir),
            project,
            packages: config.packages.clone(),
        }
    }
}

impl ProjectHost for WorkspaceHost {
    fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn project_info(&self) -> &ProjectInfo {
        &self.project
    }

    fn package_version(&self, package_id: &str) -> Option<String> {
        let version = self.packages.get(package_id).cloned();
        if version.is_none() {
            info!("Package '{}' is not listed in the config", package_id);
        }
        version
    }

    fn refresh(&self, changed: &[String]) {
        for path in changed {
            println!("{} {}", "created".green().bold(), path);
        }
    }
}

/// Asks on the terminal before anything is created.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl ConfirmationPrompt for TerminalPrompt {
    fn confirm_creation(&self, missing: &[String]) -> Result<bool, HostError> {
        println!("The following folders are missing:");
        for path in missing {
            println!("  {}", path.yellow());
        }

        Confirm::new()
            .with_prompt(format!("Create {} folders?", missing.len()))
            .default(true)
            .interact()
            .context(PromptSnafu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn base_dir_is_resolved_against_root() {
        let config = ScaffoldConfig {
            base_dir: PathBuf::from("Assets"),
            ..ScaffoldConfig::default()
        };
        let host = WorkspaceHost::new(Path::new("/project"), &config);
        assert_eq!(host.base_dir(), Path::new("/project/Assets"));
    }

    #[test]
    fn project_name_defaults_to_root_folder_name() {
        let parent = TempDir::new().unwrap();
        let root = parent.path().join("Space Lanes");
        std::fs::create_dir(&root).unwrap();

        let host = WorkspaceHost::new(&root, &ScaffoldConfig::default());
        assert_eq!(host.project_info().name, "Space Lanes");
    }

    #[test]
    fn package_versions_come_from_config() {
        let mut config = ScaffoldConfig::default();
        config
            .packages
            .insert("com.unity.render-pipelines.universal".into(), "14.0.8".into());
        let host = WorkspaceHost::new(Path::new("."), &config);

        assert_eq!(
            host.package_version("com.unity.render-pipelines.universal"),
            Some("14.0.8".to_string())
        );
        assert_eq!(host.package_version("com.unity.textmeshpro"), None);
    }
}
