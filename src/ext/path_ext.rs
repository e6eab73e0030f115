use std::path::{Component, Path, PathBuf};

/// Canonical form of `path` when it exists, otherwise its absolute form.
pub fn best_effort_path_display(path: &Path) -> String {
    path.canonicalize()
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

/// Resolves a `/`-separated folder path below `base`.
///
/// Returns `None` unless every segment is a plain name, so the result can
/// never escape `base`.
pub fn resolve_folder_path(base: &Path, relative: &str) -> Option<PathBuf> {
    if relative.is_empty() || relative.contains('\\') {
        return None;
    }

    let mut resolved = base.to_path_buf();
    for segment in relative.split('/') {
        let mut components = Path::new(segment).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) if name == segment => resolved.push(name),
            _ => return None,
        }
    }
    Some(resolved)
}

pub trait PathExt {
    fn best_effort_path_display(&self) -> String;
    fn resolve_folder_path(&self, relative: &str) -> Option<PathBuf>;
}

impl PathExt for Path {
    fn best_effort_path_display(&self) -> String {
        best_effort_path_display(self)
    }

    fn resolve_folder_path(&self, relative: &str) -> Option<PathBuf> {
        resolve_folder_path(self, relative)
    }
}

impl PathExt for PathBuf {
    fn best_effort_path_display(&self) -> String {
        best_effort_path_display(self)
    }

    fn resolve_folder_path(&self, relative: &str) -> Option<PathBuf> {
        resolve_folder_path(self, relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("Art", &["Art"])]
    #[case("Art/Textures/Skybox", &["Art", "Textures", "Skybox"])]
    #[case("Streaming Assets", &["Streaming Assets"])]
    fn resolves_plain_segments(#[case] relative: &str, #[case] segments: &[&str]) {
        let base = Path::new("/project");
        let expected = segments.iter().fold(base.to_path_buf(), |acc, s| acc.join(s));
        assert_eq!(base.resolve_folder_path(relative), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("/Art")]
    #[case("Art/")]
    #[case("Art//Textures")]
    #[case("../Art")]
    #[case("Art/./Textures")]
    #[case("Art\\Textures")]
    fn rejects_non_plain_paths(#[case] relative: &str) {
        assert_eq!(Path::new("/project").resolve_folder_path(relative), None);
    }

    #[test]
    fn display_of_missing_path_is_absolute() {
        let shown = Path::new("does/not/exist").best_effort_path_display();
        assert!(Path::new(&shown).is_absolute());
    }
}
