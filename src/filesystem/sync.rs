//! Reconciliation of a [`FolderNode`] layout against a directory on disk.
//!
//! Both steps are stateless. Another process creating folders between
//! [`find_missing`] and [`create_missing`] is harmless: an entry that already
//! exists when its turn comes is skipped.

use std::fs;
use std::path::Path;

use snafu::{OptionExt, ResultExt, Snafu};

use crate::ext::PathExt;

use super::FolderNode;

/// Relative paths of every folder in `tree` that is not a directory under
/// `base_dir`, in pre-order.
///
/// Children of a missing folder are reported individually. A nonexistent
/// `base_dir` is not an error here; everything is simply reported missing.
pub fn find_missing(tree: &FolderNode, base_dir: &Path) -> Vec<String> {
    tree.walk()
        .filter(|(_, relative)| {
            base_dir
                .resolve_folder_path(relative)
                .is_none_or(|absolute| !absolute.is_dir())
        })
        .map(|(_, relative)| relative)
        .collect()
}

/// Creates every listed folder under `base_dir`, including any missing
/// ancestors, and returns how many entries were created by their own step.
///
/// Stops at the first failure; folders created before it are kept.
pub fn create_missing<S: AsRef<str>>(paths: &[S], base_dir: &Path) -> Result<usize, FolderSyncError> {
    create_each(paths, base_dir).map(|created| created.len())
}

/// [`find_missing`] followed by [`create_missing`], returning the paths
/// that were created.
pub fn sync(tree: &FolderNode, base_dir: &Path) -> Result<Vec<String>, FolderSyncError> {
    create_each(&find_missing(tree, base_dir), base_dir)
}

fn create_each<S: AsRef<str>>(paths: &[S], base_dir: &Path) -> Result<Vec<String>, FolderSyncError> {
    let mut created = Vec::new();

    for relative in paths.iter().map(AsRef::as_ref) {
        let absolute = base_dir
            .resolve_folder_path(relative)
            .context(InvalidPathSnafu { path: relative })?;

        if absolute.is_dir() {
            continue;
        }

        fs::create_dir_all(&absolute).context(CreateDirSnafu { path: relative })?;
        created.push(relative.to_string());
    }

    Ok(created)
}

#[derive(Debug, Snafu)]
pub enum FolderSyncError {
    #[snafu(display("Folder path '{}' is not a plain relative path", path))]
    InvalidPathError { path: String },
    #[snafu(display("Failed to create folder '{}'", path))]
    CreateDirError {
        path: String,
        source: std::io::Error,
    },
}

impl FolderSyncError {
    /// The relative path the failure is about.
    pub fn path(&self) -> &str {
        match self {
            FolderSyncError::InvalidPathError { path } => path,
            FolderSyncError::CreateDirError { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::build_default_tree;
    use rstest::*;
    use tempfile::TempDir;

    #[fixture]
    fn base() -> TempDir {
        TempDir::new().expect("Failed to create temp dir")
    }

    #[fixture]
    fn art_and_audio() -> FolderNode {
        FolderNode::root(vec![
            FolderNode::new(
                "Art",
                vec![
                    FolderNode::leaf("Textures").unwrap(),
                    FolderNode::leaf("Materials").unwrap(),
                ],
            )
            .unwrap(),
            FolderNode::leaf("Audio").unwrap(),
        ])
        .unwrap()
    }

    #[rstest]
    fn empty_base_reports_everything_in_pre_order(base: TempDir, art_and_audio: FolderNode) {
        let missing = find_missing(&art_and_audio, base.path());
        assert_eq!(missing, vec!["Art", "Art/Textures", "Art/Materials", "Audio"]);

        assert_eq!(create_missing(&missing, base.path()).unwrap(), 4);
        for relative in &missing {
            assert!(base.path().join(relative).is_dir());
        }
    }

    #[rstest]
    fn existing_parent_is_not_reported(base: TempDir) {
        fs::create_dir(base.path().join("Art")).unwrap();
        let tree = FolderNode::root(vec![
            FolderNode::new("Art", vec![FolderNode::leaf("Textures").unwrap()]).unwrap(),
        ])
        .unwrap();

        assert_eq!(find_missing(&tree, base.path()), vec!["Art/Textures"]);
        assert_eq!(sync(&tree, base.path()).unwrap(), vec!["Art/Textures"]);
    }

    #[rstest]
    fn complete_base_needs_nothing(base: TempDir, art_and_audio: FolderNode) {
        sync(&art_and_audio, base.path()).unwrap();

        assert!(find_missing(&art_and_audio, base.path()).is_empty());
        assert_eq!(create_missing::<String>(&[], base.path()).unwrap(), 0);
    }

    #[rstest]
    fn creates_unlisted_intermediate_folders(base: TempDir) {
        let created = create_missing(&["Art/References/Documents"], base.path()).unwrap();

        assert_eq!(created, 1);
        assert!(base.path().join("Art").join("References").is_dir());
        assert!(base.path().join("Art/References/Documents").is_dir());
    }

    #[rstest]
    fn tolerates_children_listed_before_parents(base: TempDir) {
        let created = create_missing(&["Art/Textures", "Art"], base.path()).unwrap();

        // "Art" already exists by the time it is visited
        assert_eq!(created, 1);
        assert!(base.path().join("Art/Textures").is_dir());
    }

    #[rstest]
    fn created_list_skips_existing_entries(base: TempDir) {
        fs::create_dir(base.path().join("Audio")).unwrap();

        let created = create_each(&["Art/Textures", "Art", "Audio", "Scenes"], base.path()).unwrap();

        assert_eq!(created, vec!["Art/Textures", "Scenes"]);
    }

    #[rstest]
    fn sync_is_idempotent(base: TempDir) {
        let tree = build_default_tree();

        let first = sync(&tree, base.path()).unwrap();
        let second = sync(&tree, base.path()).unwrap();

        assert_eq!(first.len(), tree.walk().count());
        assert!(second.is_empty());
        assert!(find_missing(&tree, base.path()).is_empty());
    }

    #[rstest]
    fn ancestors_precede_descendants(base: TempDir) {
        fs::create_dir_all(base.path().join("Art/Textures")).unwrap();
        let missing = find_missing(&build_default_tree(), base.path());

        assert!(!missing.contains(&"Art".to_string()));
        assert!(!missing.contains(&"Art/Textures".to_string()));
        for (index, path) in missing.iter().enumerate() {
            let prefix = format!("{path}/");
            assert!(
                missing[..index].iter().all(|earlier| !earlier.starts_with(&prefix)),
                "descendant of '{path}' listed before it"
            );
        }
    }

    #[rstest]
    fn nonexistent_base_reports_everything(art_and_audio: FolderNode) {
        let missing = find_missing(&art_and_audio, Path::new("/definitely/not/a/real/base"));
        assert_eq!(missing.len(), 4);
    }

    #[rstest]
    fn existing_contents_are_left_alone(base: TempDir, art_and_audio: FolderNode) {
        fs::create_dir(base.path().join("Art")).unwrap();
        fs::write(base.path().join("Art/notes.txt"), "keep me").unwrap();

        sync(&art_and_audio, base.path()).unwrap();

        assert_eq!(
            fs::read_to_string(base.path().join("Art/notes.txt")).unwrap(),
            "keep me"
        );
    }

    #[rstest]
    fn file_in_the_way_fails_with_its_path(base: TempDir, art_and_audio: FolderNode) {
        fs::write(base.path().join("Audio"), "not a folder").unwrap();

        let missing = find_missing(&art_and_audio, base.path());
        assert!(missing.contains(&"Audio".to_string()));

        let error = create_missing(&missing, base.path()).unwrap_err();
        assert!(matches!(error, FolderSyncError::CreateDirError { .. }));
        assert_eq!(error.path(), "Audio");

        // Folders before the failing one stay created
        assert!(base.path().join("Art/Materials").is_dir());
    }

    #[rstest]
    #[case("../escape")]
    #[case("/absolute")]
    #[case("Art//Textures")]
    fn rejects_paths_outside_base(base: TempDir, #[case] relative: &str) {
        let error = create_missing(&[relative], base.path()).unwrap_err();
        assert!(matches!(error, FolderSyncError::InvalidPathError { .. }));
        assert_eq!(error.path(), relative);
    }
}
