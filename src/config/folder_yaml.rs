use saphyr::Yaml;
use snafu::prelude::*;

use crate::filesystem::FolderNode;

use super::scaffold_config::{
    ConfigCreationError, FolderLayoutSnafu, InvalidFolderEntrySnafu, UnquotedFloatSnafu,
};
use super::yaml_value::{is_float, is_null, scalar_string};

const ROOT_LABEL: &str = "<root>";

/// Builds a folder layout from the `folders` section.
///
/// A null value is a leaf, a map names children in declaration order, and a
/// list holds plain names or single-entry maps.
pub(super) fn parse_folder_tree(value: &Yaml) -> Result<FolderNode, ConfigCreationError> {
    let children = parse_children(value, "")?;
    FolderNode::root(children).context(FolderLayoutSnafu { path: ROOT_LABEL })
}

fn parse_children(value: &Yaml, parent_path: &str) -> Result<Vec<FolderNode>, ConfigCreationError> {
    if is_null(value) {
        return Ok(Vec::new());
    }

    if let Some(mapping) = value.as_mapping() {
        return mapping
            .iter()
            .map(|(name, children)| parse_entry(name, children, parent_path))
            .collect();
    }

    let items = value.as_sequence().context(InvalidFolderEntrySnafu {
        path: label(parent_path),
    })?;

    let mut children = Vec::with_capacity(items.len());
    for item in items {
        match item.as_mapping() {
            Some(mapping) => {
                for (name, grandchildren) in mapping {
                    children.push(parse_entry(name, grandchildren, parent_path)?);
                }
            }
            None => {
                ensure!(
                    !is_float(item),
                    UnquotedFloatSnafu {
                        key: label(parent_path)
                    }
                );
                let name = scalar_string(item).context(InvalidFolderEntrySnafu {
                    path: label(parent_path),
                })?;
                let path = join(parent_path, &name);
                children.push(FolderNode::leaf(name).context(FolderLayoutSnafu { path })?);
            }
        }
    }
    Ok(children)
}

fn parse_entry(
    name: &Yaml,
    children: &Yaml,
    parent_path: &str,
) -> Result<FolderNode, ConfigCreationError> {
    ensure!(
        !is_float(name),
        UnquotedFloatSnafu {
            key: label(parent_path)
        }
    );
    let name = scalar_string(name).context(InvalidFolderEntrySnafu {
        path: label(parent_path),
    })?;
    let path = join(parent_path, &name);
    let children = parse_children(children, &path)?;
    FolderNode::new(name, children).context(FolderLayoutSnafu { path })
}

fn join(parent_path: &str, name: &str) -> String {
    if parent_path.is_empty() {
        name.to_string()
    } else {
        format!("{parent_path}/{name}")
    }
}

fn label(path: &str) -> &str {
    if path.is_empty() { ROOT_LABEL } else { path }
}
