use super::FolderNode;

struct FolderDef {
    name: &'static str,
    children: &'static [FolderDef],
}

macro_rules! folder {
    ($name:literal) => {
        FolderDef {
            name: $name,
            children: &[],
        }
    };
    ($name:literal, [$($child:expr),* $(,)?]) => {
        FolderDef {
            name: $name,
            children: &[$($child),*],
        }
    };
}

const DEFAULT_LAYOUT: &[FolderDef] = &[
    folder!(
        "Art",
        [
            folder!("3D Models"),
            folder!("Animation"),
            folder!("Font"),
            folder!("Materials"),
            folder!(
                "References",
                [
                    folder!("Images"),
                    folder!("Videos"),
                    folder!("Documents", [folder!("Pdf"), folder!("Text")]),
                ]
            ),
            folder!("Textures", [folder!("Skybox")]),
            folder!("UI"),
        ]
    ),
    folder!("Audio", [folder!("Music"), folder!("SFX")]),
    folder!("Documentation"),
    folder!(
        "Code",
        [
            folder!("Logics", [folder!("AI"), folder!("Navigation")]),
            folder!("Shaders"),
        ]
    ),
    folder!("Plugins"),
    folder!("Prefabs"),
    folder!("Streaming Assets"),
    folder!("Scenes"),
    folder!("Settings"),
];

/// The built-in project layout used when no layout file overrides it.
pub fn build_default_tree() -> FolderNode {
    FolderNode::trusted("", DEFAULT_LAYOUT.iter().map(to_node).collect())
}

fn to_node(def: &FolderDef) -> FolderNode {
    FolderNode::trusted(def.name, def.children.iter().map(to_node).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn default_tree_is_valid() {
        assert!(build_default_tree().validate().is_ok());
    }

    #[test]
    fn default_tree_is_deterministic() {
        assert_eq!(build_default_tree(), build_default_tree());
    }

    #[test]
    fn default_tree_top_level_order() {
        let tree = build_default_tree();
        let names: Vec<&str> = tree.children().iter().map(FolderNode::name).collect();
        assert_eq!(
            names,
            vec![
                "Art",
                "Audio",
                "Documentation",
                "Code",
                "Plugins",
                "Prefabs",
                "Streaming Assets",
                "Scenes",
                "Settings",
            ]
        );
    }

    #[rstest]
    #[case("Art/Textures/Skybox")]
    #[case("Art/References/Documents/Pdf")]
    #[case("Art/References/Documents/Text")]
    #[case("Code/Logics/AI")]
    #[case("Code/Logics/Navigation")]
    #[case("Audio/SFX")]
    fn default_tree_contains_nested_folders(#[case] expected: &str) {
        assert!(build_default_tree().walk().any(|(_, path)| path == expected));
    }

    #[test]
    fn default_tree_size() {
        assert_eq!(build_default_tree().walk().count(), 28);
    }
}
