//! Preview content builders: bounded line sequences for the preview pane.
//!
//! A file previews as a raw lossy byte view with fixed-width wrapping; a
//! directory previews as its immediate children. Both are hard-capped at the
//! pane's line budget and neither touches navigation state.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::error::{AppError, Result};
use crate::fs::reader::{self, Entry, EntryKind};
use crate::theme::ThemeColors;

/// Rows a bordered pane spends on chrome instead of content.
const PANE_BORDER_ROWS: usize = 2;

/// Content-line budget for a pane of `pane_rows` total rows.
pub fn line_budget(pane_rows: usize) -> usize {
    pane_rows.saturating_sub(PANE_BORDER_ROWS)
}

/// Build the preview lines for the selected entry.
///
/// `parent` is the directory the entry was listed in; `pane_rows` is the
/// full pane height including its border; `wrap_cols` is the inner width
/// files are wrapped at.
pub fn build_preview(
    entry: &Entry,
    parent: &Path,
    pane_rows: usize,
    wrap_cols: usize,
    theme: &ThemeColors,
) -> Result<Vec<Line<'static>>> {
    let target = parent.join(&entry.name);
    match entry.kind {
        EntryKind::File => file_preview(&target, line_budget(pane_rows), wrap_cols),
        EntryKind::Directory => directory_preview(&target, line_budget(pane_rows), theme),
    }
}

/// Presentation for a contained failure: the message shown in place of
/// preview content.
pub fn error_lines(message: &str, theme: &ThemeColors) -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(theme.error_fg),
    ))]
}

/// Read just enough of the file to fill the budget and wrap it.
///
/// The handle is scoped to this call. The read is capped at the most bytes
/// the budget could possibly display (worst case of 4 bytes per char plus a
/// newline per row), so a huge file costs one bounded read.
fn file_preview(path: &Path, budget: usize, wrap_cols: usize) -> Result<Vec<Line<'static>>> {
    if budget == 0 || wrap_cols == 0 {
        return Ok(Vec::new());
    }

    let file = File::open(path).map_err(|source| AppError::PreviewUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let cap = (budget * (wrap_cols + 1) * 4) as u64;
    let mut bytes = Vec::new();
    file.take(cap)
        .read_to_end(&mut bytes)
        .map_err(|source| AppError::PreviewUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

    // Lossy decode: binary content passes through as replacement chars.
    let text = String::from_utf8_lossy(&bytes);
    Ok(wrap_fixed(&text, budget, wrap_cols)
        .into_iter()
        .map(Line::from)
        .collect())
}

/// List the immediate children of a directory, dirs styled distinctly.
///
/// The dot entries are navigation aids in the listing pane and carry no
/// information here, so they are excluded.
fn directory_preview(path: &Path, budget: usize, theme: &ThemeColors) -> Result<Vec<Line<'static>>> {
    if budget == 0 {
        return Ok(Vec::new());
    }

    let dir_style = Style::default()
        .fg(theme.preview_dir_fg)
        .add_modifier(Modifier::BOLD);
    let file_style = Style::default().fg(theme.preview_fg);

    let children = reader::list(path)?;
    Ok(children
        .into_iter()
        .filter(|child| child.name != "." && child.name != "..")
        .take(budget)
        .map(|child| {
            let style = if child.is_dir() { dir_style } else { file_style };
            Line::from(Span::styled(child.name, style))
        })
        .collect())
}

/// Fixed-width wrap: rows break exactly at `cols` characters, never at word
/// boundaries, and production stops at `max_lines`.
fn wrap_fixed(text: &str, max_lines: usize, cols: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if max_lines == 0 || cols == 0 {
        return lines;
    }

    for raw in text.lines() {
        let mut row = String::new();
        let mut width = 0;
        for ch in raw.chars() {
            if width == cols {
                lines.push(std::mem::take(&mut row));
                if lines.len() == max_lines {
                    return lines;
                }
                width = 0;
            }
            row.push(ch);
            width += 1;
        }
        lines.push(row);
        if lines.len() == max_lines {
            return lines;
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::dark_theme;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn file_entry(name: &str) -> Entry {
        Entry {
            name: name.to_string(),
            kind: EntryKind::File,
        }
    }

    fn dir_entry(name: &str) -> Entry {
        Entry {
            name: name.to_string(),
            kind: EntryKind::Directory,
        }
    }

    #[test]
    fn line_budget_reserves_border_rows() {
        assert_eq!(line_budget(10), 8);
        assert_eq!(line_budget(2), 0);
        assert_eq!(line_budget(0), 0);
    }

    #[test]
    fn wrap_fixed_breaks_exactly_at_cols() {
        let rows = wrap_fixed("abcdefghij", 10, 4);
        assert_eq!(rows, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_fixed_is_not_word_aware() {
        let rows = wrap_fixed("aa bb", 10, 3);
        assert_eq!(rows, vec!["aa ", "bb"]);
    }

    #[test]
    fn wrap_fixed_stops_at_max_lines() {
        let rows = wrap_fixed("abcdefghij", 2, 3);
        assert_eq!(rows, vec!["abc", "def"]);
    }

    #[test]
    fn wrap_fixed_keeps_blank_lines() {
        let rows = wrap_fixed("a\n\nb", 10, 80);
        assert_eq!(rows, vec!["a", "", "b"]);
    }

    #[test]
    fn wrap_fixed_counts_chars_not_bytes() {
        let rows = wrap_fixed("ééééé", 10, 2);
        assert_eq!(rows, vec!["éé", "éé", "é"]);
    }

    #[test]
    fn file_preview_truncates_to_the_budget() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("long.txt");
        let mut f = fs::File::create(&path).unwrap();
        for i in 0..30 {
            writeln!(f, "line {i}").unwrap();
        }

        let theme = dark_theme();
        // pane of 12 rows -> 10 content lines
        let lines = build_preview(&file_entry("long.txt"), dir.path(), 12, 80, &theme).unwrap();
        assert_eq!(lines.len(), 10);
        assert_eq!(line_text(&lines[0]), "line 0");
        assert_eq!(line_text(&lines[9]), "line 9");
    }

    #[test]
    fn file_preview_wraps_long_lines_at_pane_width() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wide.txt");
        fs::write(&path, "x".repeat(25)).unwrap();

        let theme = dark_theme();
        let lines = build_preview(&file_entry("wide.txt"), dir.path(), 20, 10, &theme).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(line_text(&lines[0]).len(), 10);
        assert_eq!(line_text(&lines[2]).len(), 5);
    }

    #[test]
    fn file_preview_empty_file_has_no_lines() {
        let dir = TempDir::new().unwrap();
        fs::File::create(dir.path().join("empty.txt")).unwrap();

        let theme = dark_theme();
        let lines = build_preview(&file_entry("empty.txt"), dir.path(), 10, 80, &theme).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn file_preview_missing_file_is_preview_unavailable() {
        let dir = TempDir::new().unwrap();
        let theme = dark_theme();
        let err = build_preview(&file_entry("gone.txt"), dir.path(), 10, 80, &theme).unwrap_err();
        assert!(matches!(err, AppError::PreviewUnavailable { .. }));
    }

    #[test]
    fn file_preview_decodes_invalid_utf8_lossily() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blob.bin");
        fs::write(&path, [0xff, 0xfe, b'o', b'k']).unwrap();

        let theme = dark_theme();
        let lines = build_preview(&file_entry("blob.bin"), dir.path(), 10, 80, &theme).unwrap();
        assert_eq!(lines.len(), 1);
        let text = line_text(&lines[0]);
        assert!(text.contains('\u{FFFD}'));
        assert!(text.contains("ok"));
    }

    #[test]
    fn directory_preview_lists_children_without_dot_entries() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::create_dir(dir.path().join("sub").join("inner")).unwrap();
        fs::File::create(dir.path().join("sub").join("notes.txt")).unwrap();

        let theme = dark_theme();
        let lines = build_preview(&dir_entry("sub"), dir.path(), 10, 80, &theme).unwrap();
        let names: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"inner".to_string()));
        assert!(names.contains(&"notes.txt".to_string()));
        assert!(!names.contains(&".".to_string()));
        assert!(!names.contains(&"..".to_string()));
    }

    #[test]
    fn directory_preview_styles_directories_distinctly() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::create_dir(dir.path().join("sub").join("inner")).unwrap();
        fs::File::create(dir.path().join("sub").join("notes.txt")).unwrap();

        let theme = dark_theme();
        let lines = build_preview(&dir_entry("sub"), dir.path(), 10, 80, &theme).unwrap();
        let inner = lines.iter().find(|l| line_text(l) == "inner").unwrap();
        let notes = lines.iter().find(|l| line_text(l) == "notes.txt").unwrap();
        assert_eq!(inner.spans[0].style.fg, Some(theme.preview_dir_fg));
        assert_eq!(notes.spans[0].style.fg, Some(theme.preview_fg));
    }

    #[test]
    fn directory_preview_truncates_to_the_budget() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        for i in 0..10 {
            fs::File::create(sub.join(format!("f{i}"))).unwrap();
        }

        let theme = dark_theme();
        // pane of 5 rows -> 3 content lines
        let lines = build_preview(&dir_entry("sub"), dir.path(), 5, 80, &theme).unwrap();
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn directory_preview_unreadable_propagates() {
        let dir = TempDir::new().unwrap();
        let theme = dark_theme();
        let err = build_preview(&dir_entry("missing"), dir.path(), 10, 80, &theme).unwrap_err();
        assert!(matches!(err, AppError::DirectoryUnreadable { .. }));
    }

    #[test]
    fn tiny_pane_produces_no_lines() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "content").unwrap();

        let theme = dark_theme();
        let lines = build_preview(&file_entry("a.txt"), dir.path(), 2, 80, &theme).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn error_lines_use_the_error_color() {
        let theme = dark_theme();
        let lines = error_lines("cannot read directory /gone", &theme);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "cannot read directory /gone");
        assert_eq!(lines[0].spans[0].style.fg, Some(theme.error_fg));
    }
}
