use std::io::{self, Write};
use std::path::Path;
use std::time::SystemTime;

use colored::Colorize;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::cli::Command;
use crate::config::{ConfigCreationError, ScaffoldConfig};
use crate::ext::{PathExt, SystemTimeExt};
use crate::filesystem::{FolderNode, FolderSyncError, create_missing, find_missing, sync};
use crate::host::{ConfirmationPrompt, HostError, ProjectHost, TerminalPrompt, WorkspaceHost};
use crate::readme::{ReadmeError, Template, TemplateError, write_readme};

/// Result of a folder command, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoldersOutcome {
    UpToDate,
    Planned(Vec<String>),
    Declined(Vec<String>),
    Created(Vec<String>),
}

pub struct Application;

impl Application {
    pub fn run(runtime_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let runtime_config: RuntimeConfig = runtime_config.into();
        let config = ScaffoldConfig::read(&runtime_config.root).context(ConfigSnafu)?;
        debug!("Loaded config: {:?}", config);

        let host = WorkspaceHost::new(&runtime_config.root, &config);
        debug!("Base directory: {}", host.base_dir().best_effort_path_display());

        match runtime_config.command {
            Command::Folders {
                yes: true,
                dry_run: false,
            } => {
                let outcome = Self::sync_default_folders(&config.folders, &host)?;
                Self::report_folders(&outcome);
            }
            Command::Folders { dry_run, .. } => {
                let outcome =
                    Self::create_default_folders(&config.folders, &host, &TerminalPrompt, dry_run)?;
                Self::report_folders(&outcome);
            }
            Command::Readme => {
                let template = match &config.readme.template {
                    Some(path) => Template::from_path(&runtime_config.root.join(path))
                        .context(ReadmeTemplateSnafu)?,
                    None => Template::default(),
                };
                let outcome = write_readme(
                    &host,
                    &template,
                    &config.readme.path,
                    SystemTime::now().to_local_datetime(),
                )
                .context(ReadmeWriteSnafu)?;
                println!("README {}", outcome.to_string().green());
            }
            Command::Status => {
                Self::print_status(&mut io::stdout().lock(), &config.folders, host.base_dir())
                    .context(StatusOutputSnafu)?
            }
        }

        Ok(())
    }

    /// Lists the missing folders, asks for confirmation, then creates them.
    pub fn create_default_folders(
        tree: &FolderNode,
        host: &impl ProjectHost,
        prompt: &impl ConfirmationPrompt,
        dry_run: bool,
    ) -> Result<FoldersOutcome, ApplicationError> {
        let missing = find_missing(tree, host.base_dir());
        if missing.is_empty() {
            info!("No new folders have to be created");
            return Ok(FoldersOutcome::UpToDate);
        }
        debug!("Missing folders: {:?}", missing);

        if dry_run {
            return Ok(FoldersOutcome::Planned(missing));
        }

        if !prompt
            .confirm_creation(&missing)
            .context(ConfirmationSnafu)?
        {
            info!("Folder creation cancelled");
            return Ok(FoldersOutcome::Declined(missing));
        }

        // One entry per call, so entries that appeared since the listing are left out
        let mut created = Vec::with_capacity(missing.len());
        for path in &missing {
            if create_missing(&[path], host.base_dir()).context(FolderCreationSnafu)? > 0 {
                created.push(path.clone());
            }
        }
        info!("Created {} of {} missing folders", created.len(), missing.len());

        if created.is_empty() {
            return Ok(FoldersOutcome::UpToDate);
        }
        host.refresh(&created);
        Ok(FoldersOutcome::Created(created))
    }

    /// Creates every missing folder without asking.
    pub fn sync_default_folders(
        tree: &FolderNode,
        host: &impl ProjectHost,
    ) -> Result<FoldersOutcome, ApplicationError> {
        let created = sync(tree, host.base_dir()).context(FolderCreationSnafu)?;
        if created.is_empty() {
            info!("No new folders have to be created");
            return Ok(FoldersOutcome::UpToDate);
        }

        info!("Created {} folders", created.len());
        host.refresh(&created);
        Ok(FoldersOutcome::Created(created))
    }

    fn report_folders(outcome: &FoldersOutcome) {
        match outcome {
            FoldersOutcome::UpToDate => println!("No new folders have to be created."),
            FoldersOutcome::Planned(missing) => {
                println!("Would create {} folders:", missing.len());
                for path in missing {
                    println!("  {}", path.yellow());
                }
            }
            FoldersOutcome::Declined(_) => println!("Cancelled, no folders were created."),
            FoldersOutcome::Created(created) => {
                println!("{} folders created.", created.len().to_string().green())
            }
        }
    }

    /// Writes every folder of `tree` with an ok/missing marker, then a summary.
    fn print_status(out: &mut impl Write, tree: &FolderNode, base_dir: &Path) -> io::Result<()> {
        let mut missing = 0;
        let mut total = 0;

        for (node, path) in tree.walk() {
            let depth = path.matches('/').count();
            let exists = base_dir
                .resolve_folder_path(&path)
                .is_some_and(|absolute| absolute.is_dir());

            let marker = if exists {
                "ok".green()
            } else {
                missing += 1;
                "missing".red()
            };
            writeln!(out, "{:indent$}{} {}", "", node.name(), marker, indent = depth * 2)?;
            total += 1;
        }

        writeln!(out, "{missing} of {total} folders missing")
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered during configuration stage"))]
    ConfigError { source: ConfigCreationError },
    #[snafu(display("Could not confirm folder creation"))]
    ConfirmationError { source: HostError },
    #[snafu(display("Failed to create the missing folders"))]
    FolderCreationError { source: FolderSyncError },
    #[snafu(display("Failed to write the folder status"))]
    StatusOutputError { source: io::Error },
    #[snafu(display("Failed to load the README template"))]
    ReadmeTemplateError { source: TemplateError },
    #[snafu(display("Failed to write the README"))]
    ReadmeWriteError { source: ReadmeError },
}
