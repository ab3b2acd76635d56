use std::path::Path;

use crate::error::Result;
use crate::fs::path_stack::PathStack;
use crate::fs::reader;
use crate::nav::NavState;
use crate::theme::ThemeColors;

/// Mutable state for one browsing session.
pub struct App {
    pub path: PathStack,
    pub nav: NavState,
    pub theme: ThemeColors,
    /// Listing rows per page, recomputed from the pane height each frame.
    pub page: usize,
    pub show_controls: bool,
    pub should_quit: bool,
    /// Contained-failure message, shown in the preview pane until the next
    /// key press.
    pub status_message: Option<String>,
}

impl App {
    /// Open a session at `start` with its listing already loaded.
    ///
    /// The initial listing must succeed; there is nothing to browse
    /// otherwise.
    pub fn new(start: &Path, theme: ThemeColors, show_controls: bool) -> Result<Self> {
        let path = PathStack::from_path(start)?;
        let entries = reader::list(&path.current())?;
        Ok(Self {
            path,
            nav: NavState::new(entries),
            theme,
            page: 1,
            show_controls,
            should_quit: false,
            status_message: None,
        })
    }

    /// Flag the event loop to exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Move the cursor up one entry (wraps at the top).
    pub fn move_up(&mut self) {
        self.nav.move_up(self.page);
    }

    /// Move the cursor down one entry (wraps at the bottom).
    pub fn move_down(&mut self) {
        self.nav.move_down(self.page);
    }

    /// Forget the last contained-failure message.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Activate the entry under the cursor.
    ///
    /// `".."` ascends, any other directory descends (`"."` re-lists the
    /// working directory in place), and a file changes nothing here since
    /// the preview pane already shows it. A directory change whose listing
    /// fails is contained: path and cursor stay where they were and the
    /// failure surfaces as an in-pane message.
    pub fn activate_selected(&mut self) {
        let Some(entry) = self.nav.selected() else {
            return;
        };
        if !entry.is_dir() {
            return;
        }
        let name = entry.name.clone();

        let mut target = self.path.clone();
        if name == ".." {
            target.ascend();
        } else {
            target.descend(&name);
        }

        match reader::list(&target.current()) {
            Ok(entries) => {
                self.path = target;
                self.nav.replace(entries);
            }
            Err(err) => {
                self.status_message = Some(err.to_string());
            }
        }
    }
}
