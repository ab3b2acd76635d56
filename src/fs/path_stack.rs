use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

use crate::error::{AppError, Result};

/// The working path, held as a stack of directory segments over an absolute
/// root.
///
/// Navigation only ever pushes one segment (`descend`) or pops one
/// (`ascend`), so the joined path always names a real location the browser
/// has visited. Popping at the root is a no-op; the stack can never point
/// above the filesystem root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStack {
    root: PathBuf,
    segments: Vec<String>,
}

impl PathStack {
    /// Decompose a canonical absolute path into root + segments.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_absolute() {
            return Err(AppError::InvalidPath(path.display().to_string()));
        }

        let mut root = PathBuf::new();
        let mut segments = Vec::new();
        for component in path.components() {
            match component {
                Component::Prefix(prefix) => root.push(prefix.as_os_str()),
                Component::RootDir => root.push(MAIN_SEPARATOR_STR),
                Component::Normal(segment) => {
                    segments.push(segment.to_string_lossy().to_string())
                }
                Component::CurDir => {}
                Component::ParentDir => {
                    segments.pop();
                }
            }
        }

        Ok(Self { root, segments })
    }

    /// Push one segment. The sentinel `"."` is a no-op.
    pub fn descend(&mut self, segment: &str) {
        if segment == "." {
            return;
        }
        self.segments.push(segment.to_string());
    }

    /// Pop one segment; a no-op when only the root remains.
    pub fn ascend(&mut self) {
        if self.is_root() {
            return;
        }
        self.segments.pop();
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The joined absolute path of the working directory.
    pub fn current(&self) -> PathBuf {
        let mut path = self.root.clone();
        for segment in &self.segments {
            path.push(segment);
        }
        path
    }

    /// Display form of the working directory: the absolute path with exactly
    /// one trailing separator.
    pub fn display(&self) -> String {
        let mut text = self.current().to_string_lossy().into_owned();
        if !text.ends_with(MAIN_SEPARATOR) {
            text.push(MAIN_SEPARATOR);
        }
        text
    }
}
