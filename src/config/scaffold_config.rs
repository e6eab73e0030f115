use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Yaml};
use snafu::prelude::*;
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

use crate::{
    ext::PathExt,
    filesystem::{FolderNode, InvalidSpecError, build_default_tree},
};

use super::folder_yaml::parse_folder_tree;
use super::project_info::{ProjectInfo, RenderPipeline};
use super::yaml_value::{is_float, is_null, key, scalar_string};

const CONFIG_FILE_NAME: &str = "scaffold.yaml";
const DEFAULT_README_PATH: &str = "README.md";
const KNOWN_SECTIONS: &[&str] = &["base_dir", "folders", "project", "packages", "readme"];

type Mapping<'y> = LinkedHashMap<Yaml<'y>, Yaml<'y>>;

pub fn get_config_file_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeSettings {
    /// Location of the README, relative to the base directory.
    pub path: PathBuf,
    /// Optional template file, relative to the project root.
    pub template: Option<PathBuf>,
}

impl Default for ReadmeSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_README_PATH),
            template: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    /// Folder the layout is created in, relative to the project root.
    pub base_dir: PathBuf,
    pub folders: FolderNode,
    pub project: ProjectInfo,
    /// Installed package versions keyed by package id.
    pub packages: HashMap<String, String>,
    pub readme: ReadmeSettings,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            folders: build_default_tree(),
            project: ProjectInfo::default(),
            packages: HashMap::new(),
            readme: ReadmeSettings::default(),
        }
    }
}

impl ScaffoldConfig {
    /// Reads `scaffold.yaml` from `root`, falling back to the built-in
    /// defaults when the file does not exist.
    pub fn read(root: &Path) -> Result<Self, ConfigCreationError> {
        let path = get_config_file_path(root);
        if !path.exists() {
            info!(
                "No {} found in {}, using the built-in layout",
                CONFIG_FILE_NAME,
                root.best_effort_path_display()
            );
            return Ok(Self::default());
        }
        Self::from_path(&path)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigCreationError> {
        debug!("Opening config file: {}", path.best_effort_path_display());
        let contents = fs::read_to_string(path).context(ReadSnafu {
            file_path: path.best_effort_path_display(),
        })?;
        debug!("Successfully read config file: {} bytes", contents.len());
        contents.as_str().try_into()
    }

    fn parse_base_dir(top_level: &Mapping) -> Result<PathBuf, ConfigCreationError> {
        Ok(string_field(top_level, "base_dir", "base_dir")?
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".")))
    }

    fn parse_folders(top_level: &Mapping) -> Result<FolderNode, ConfigCreationError> {
        match top_level.get(&key("folders")) {
            Some(folders) => parse_folder_tree(folders),
            None => {
                debug!("No folders section, using the built-in layout");
                Ok(build_default_tree())
            }
        }
    }

    fn parse_project(top_level: &Mapping) -> Result<ProjectInfo, ConfigCreationError> {
        let Some(project) = section(top_level, "project")? else {
            return Ok(ProjectInfo::default());
        };

        let field = |name: &'static str| -> Result<String, ConfigCreationError> {
            Ok(string_field(project, name, &format!("project.{name}"))?.unwrap_or_default())
        };

        let render_pipeline = match string_field(project, "render_pipeline", "project.render_pipeline")? {
            Some(value) => RenderPipeline::from_config_str(&value).context(InvalidValueSnafu {
                key: "project.render_pipeline",
                expected: "one of standard, urp, hdrp",
            })?,
            None => RenderPipeline::default(),
        };

        Ok(ProjectInfo {
            name: field("name")?,
            version: field("version")?,
            company: field("company")?,
            engine_version: field("engine_version")?,
            render_pipeline,
        })
    }

    fn parse_packages(top_level: &Mapping) -> Result<HashMap<String, String>, ConfigCreationError> {
        let Some(packages) = section(top_level, "packages")? else {
            return Ok(HashMap::new());
        };

        packages
            .iter()
            .map(|(id, version)| {
                let id = scalar_string(id).context(InvalidValueSnafu {
                    key: "packages",
                    expected: "package ids as keys",
                })?;
                let key = format!("packages.{id}");
                ensure!(!is_float(version), UnquotedFloatSnafu { key: &key });
                let version = scalar_string(version).context(InvalidValueSnafu {
                    key,
                    expected: "a version string",
                })?;
                Ok((id, version))
            })
            .collect()
    }

    fn parse_readme(top_level: &Mapping) -> Result<ReadmeSettings, ConfigCreationError> {
        let Some(readme) = section(top_level, "readme")? else {
            return Ok(ReadmeSettings::default());
        };

        let path = string_field(readme, "path", "readme.path")?
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_README_PATH));
        let template = string_field(readme, "template", "readme.template")?.map(PathBuf::from);

        Ok(ReadmeSettings { path, template })
    }
}

impl TryFrom<&str> for ScaffoldConfig {
    type Error = ConfigCreationError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let contents_vec = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let contents = contents_vec.first().context(MalformedConfigSnafu)?;

        let top_level = contents.as_mapping().context(TopLevelNotMapSnafu)?;

        for name in top_level.keys().filter_map(scalar_string) {
            if !KNOWN_SECTIONS.contains(&name.as_str()) {
                warn!("Ignoring unknown config section '{}'", name);
            }
        }

        Ok(ScaffoldConfig {
            base_dir: Self::parse_base_dir(top_level)?,
            folders: Self::parse_folders(top_level)?,
            project: Self::parse_project(top_level)?,
            packages: Self::parse_packages(top_level)?,
            readme: Self::parse_readme(top_level)?,
        })
    }
}

/// Returns the named sub-map; absent and null sections are both `None`.
fn section<'a, 'y>(
    mapping: &'a Mapping<'y>,
    name: &'static str,
) -> Result<Option<&'a Mapping<'y>>, ConfigCreationError> {
    match mapping.get(&key(name)) {
        None => Ok(None),
        Some(value) if is_null(value) => Ok(None),
        Some(value) => value
            .as_mapping()
            .map(Some)
            .context(SectionNotMapSnafu { section: name }),
    }
}

/// Text value of `name`, reported as `label` in errors.
fn string_field(
    mapping: &Mapping,
    name: &'static str,
    label: &str,
) -> Result<Option<String>, ConfigCreationError> {
    match mapping.get(&key(name)) {
        None => Ok(None),
        Some(value) if is_null(value) => Ok(None),
        Some(value) if is_float(value) => UnquotedFloatSnafu { key: label }.fail(),
        Some(value) => scalar_string(value)
            .map(Some)
            .context(InvalidValueSnafu {
                key: label,
                expected: "a string",
            }),
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum ConfigCreationError {
    #[snafu(display("Failed to read the config file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Failed to parse the config file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted config file"))]
    MalformedConfig,
    #[snafu(display("Top level of config should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Section '{}' should be a map", section))]
    SectionNotMap { section: String },
    #[snafu(display("Value of '{}' should be {}", key, expected))]
    InvalidValueError { key: String, expected: String },
    #[snafu(display("Value of '{}' reads as a number and would lose its spelling, quote it", key))]
    UnquotedFloatError { key: String },
    #[snafu(display("Folder entry under '{}' should be a name, a list or a map", path))]
    InvalidFolderEntryError { path: String },
    #[snafu(display("Invalid folder layout at '{}'", path))]
    FolderLayoutError {
        path: String,
        source: InvalidSpecError,
    },
}
