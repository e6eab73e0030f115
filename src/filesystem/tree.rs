use std::collections::HashSet;

use snafu::{Snafu, ensure};

const PATH_SEPARATOR: char = '/';

/// One directory level of a declarative folder layout.
///
/// Children are owned by value, so a layout is always a rooted tree and
/// never a graph. The synthetic root carries an empty name and can only be
/// created through [`FolderNode::root`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderNode {
    name: String,
    children: Vec<FolderNode>,
}

impl FolderNode {
    pub fn new(
        name: impl Into<String>,
        children: Vec<FolderNode>,
    ) -> Result<Self, InvalidSpecError> {
        let name = name.into();
        validate_name(&name)?;
        ensure_unique_siblings(&name, &children)?;
        Ok(Self { name, children })
    }

    pub fn leaf(name: impl Into<String>) -> Result<Self, InvalidSpecError> {
        Self::new(name, Vec::new())
    }

    pub fn root(children: Vec<FolderNode>) -> Result<Self, InvalidSpecError> {
        ensure_unique_siblings("", &children)?;
        Ok(Self {
            name: String::new(),
            children,
        })
    }

    /// Builds a node without checking it. Only for layouts whose validity is
    /// covered by tests, such as the built-in default.
    pub(super) fn trusted(name: &str, children: Vec<FolderNode>) -> Self {
        Self {
            name: name.to_string(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[FolderNode] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }

    /// Re-checks every naming and sibling invariant below this node.
    pub fn validate(&self) -> Result<(), InvalidSpecError> {
        if !self.is_root() {
            validate_name(&self.name)?;
        }
        ensure_unique_siblings(&self.name, &self.children)?;
        self.children.iter().try_for_each(FolderNode::validate)
    }

    /// Pre-order traversal pairing every node with its `/`-joined path.
    ///
    /// The synthetic root is skipped; a named node is yielded first with its
    /// own name as the path.
    pub fn walk(&self) -> Walk<'_> {
        let stack = if self.is_root() {
            self.children
                .iter()
                .rev()
                .map(|child| (child, String::new()))
                .collect()
        } else {
            vec![(self, String::new())]
        };
        Walk { stack }
    }
}

/// Lazy pre-order iterator returned by [`FolderNode::walk`].
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<(&'a FolderNode, String)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (&'a FolderNode, String);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, parent_path) = self.stack.pop()?;
        let path = if parent_path.is_empty() {
            node.name.clone()
        } else {
            format!("{parent_path}{PATH_SEPARATOR}{}", node.name)
        };

        // Reversed so the first declared child is popped first
        self.stack.extend(
            node.children
                .iter()
                .rev()
                .map(|child| (child, path.clone())),
        );

        Some((node, path))
    }
}

fn validate_name(name: &str) -> Result<(), InvalidSpecError> {
    ensure!(!name.is_empty(), EmptyNameSnafu);
    ensure!(
        !name.contains(['/', '\\']),
        SeparatorInNameSnafu { name }
    );
    ensure!(name != "." && name != "..", ReservedNameSnafu { name });
    Ok(())
}

fn ensure_unique_siblings(parent: &str, children: &[FolderNode]) -> Result<(), InvalidSpecError> {
    let mut seen = HashSet::with_capacity(children.len());
    for child in children {
        ensure!(
            seen.insert(child.name.as_str()),
            DuplicateSiblingSnafu {
                parent: if parent.is_empty() { "<root>" } else { parent },
                name: child.name.as_str(),
            }
        );
    }
    Ok(())
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum InvalidSpecError {
    #[snafu(display("Folder names must not be empty"))]
    EmptyNameError,
    #[snafu(display("Folder name '{}' must not contain path separators", name))]
    SeparatorInNameError { name: String },
    #[snafu(display("Folder name '{}' is reserved", name))]
    ReservedNameError { name: String },
    #[snafu(display("Folder '{}' is declared more than once under '{}'", name, parent))]
    DuplicateSiblingError { parent: String, name: String },
}
