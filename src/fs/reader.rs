use std::fs;
use std::path::Path;

use crate::error::{AppError, Result};

/// Kind of a directory entry, as shown in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A single entry of the working directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// List the entries of `path` for display.
///
/// `read_dir` never yields `"."` or `".."`, so both are prepended (the
/// browser navigates upward by selecting `".."`). The remaining entries keep
/// the order the filesystem returns them in; no sort is applied. Entries
/// that error mid-iteration are silently skipped.
pub fn list(path: &Path) -> Result<Vec<Entry>> {
    let read = fs::read_dir(path).map_err(|source| AppError::DirectoryUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries = vec![
        Entry {
            name: ".".to_string(),
            kind: EntryKind::Directory,
        },
        Entry {
            name: "..".to_string(),
            kind: EntryKind::Directory,
        },
    ];

    for entry in read {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        let name = entry.file_name().to_string_lossy().to_string();
        let kind = classify(&entry.path());
        entries.push(Entry { name, kind });
    }

    Ok(entries)
}

/// Classify a path, following symlinks.
///
/// Only a regular file counts as `File`; everything else, including paths
/// whose metadata cannot be read (broken symlinks), is treated as
/// `Directory` so it stays selectable.
pub fn classify(path: &Path) -> EntryKind {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => EntryKind::File,
        _ => EntryKind::Directory,
    }
}
