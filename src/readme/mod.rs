//! README generation for the host project.

mod readme;
mod template;

pub use readme::{ReadmeError, write_readme};
pub use template::{Template, TemplateError};
