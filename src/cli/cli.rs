use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::data::LogLevel;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Creates a project's default folder layout and README")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(long, short, default_value = "warn", value_enum, global = true)]
    pub log_level: LogLevel,

    /// The root directory of the project
    #[clap(long, short, default_value = ".", global = true)]
    pub root: PathBuf,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create the folders of the layout that do not exist yet
    Folders {
        /// Create the folders without asking for confirmation
        #[clap(long, short)]
        yes: bool,
        /// Only list the folders that would be created
        #[clap(long)]
        dry_run: bool,
    },
    /// Create or update the project README
    Readme,
    /// Show every folder of the layout and whether it exists
    Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_folders_flags() {
        let cli = Cli::try_parse_from(["groundwork", "folders", "--yes"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Folders {
                yes: true,
                dry_run: false
            }
        );
        assert_eq!(cli.root, PathBuf::from("."));
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli =
            Cli::try_parse_from(["groundwork", "readme", "--root", "game", "-l", "debug"]).unwrap();
        assert_eq!(cli.command, Command::Readme);
        assert_eq!(cli.root, PathBuf::from("game"));
        assert!(matches!(cli.log_level, LogLevel::Debug));
    }

    #[test]
    fn a_command_is_required() {
        assert!(Cli::try_parse_from(["groundwork"]).is_err());
    }
}
