use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use snafu::prelude::*;
use tracing::{debug, warn};

use crate::ext::PathExt;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

const DEFAULT_TEMPLATE: &str = "# <b>{{project_name}}</b>

<i>Version:</i> {{project_version}}

<i>by:</i> {{company}}

<i>This project was created with Unity:</i> {{engine_version}}

<i>Graphics Tier:</i> {{graphics_tier}}

<i>Last updated:</i> {{last_updated}}

## <b>Description</b>

<i>Project description here:</i>

## <b>Credits & Acknowledgments</b>

<i>Add any additional information or instructions here.</i>";

/// Text with `{{name}}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Default for Template {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, TemplateError> {
        debug!("Reading README template: {}", path.best_effort_path_display());
        fs::read_to_string(path)
            .map(Self::new)
            .context(ReadTemplateSnafu { path })
    }

    /// Substitutes every known placeholder. Unknown ones are kept verbatim.
    pub fn render(&self, values: &BTreeMap<&str, String>) -> String {
        let mut rendered = String::with_capacity(self.source.len());
        let mut rest = self.source.as_str();

        while let Some(start) = rest.find(OPEN) {
            let after_open = &rest[start + OPEN.len()..];
            let Some(end) = after_open.find(CLOSE) else {
                break;
            };

            rendered.push_str(&rest[..start]);
            let name = after_open[..end].trim();
            match values.get(name) {
                Some(value) => rendered.push_str(value),
                None => {
                    warn!("Unknown README placeholder '{}'", name);
                    rendered.push_str(&rest[start..start + OPEN.len() + end + CLOSE.len()]);
                }
            }
            rest = &after_open[end + CLOSE.len()..];
        }

        rendered.push_str(rest);
        rendered
    }
}

#[derive(Debug, Snafu)]
pub enum TemplateError {
    #[snafu(display("Failed to read README template {}", path.best_effort_path_display()))]
    ReadTemplateError {
        path: PathBuf,
        source: std::io::Error,
    },
}
