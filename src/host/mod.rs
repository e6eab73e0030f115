//! Collaborators the scaffolding commands rely on, and their terminal
//! implementations.

mod host;
mod workspace_host;

pub use host::{ConfirmationPrompt, HostError, ProjectHost};
pub use workspace_host::{TerminalPrompt, WorkspaceHost};
