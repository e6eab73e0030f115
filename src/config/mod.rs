//! Loading of the optional `scaffold.yaml` layout file.

mod folder_yaml;
mod project_info;
mod scaffold_config;
mod yaml_value;

pub use project_info::{ProjectInfo, RenderPipeline};
pub use scaffold_config::{ConfigCreationError, ScaffoldConfig};
