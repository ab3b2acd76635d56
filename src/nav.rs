use crate::fs::reader::Entry;

/// Cursor and viewport state over the working directory's entry list.
///
/// The cursor is 1-indexed; `top_index` is the 0-indexed offset of the first
/// visible row. The viewport moves a whole page at a time, so for a page of
/// `page` rows every transition preserves:
///
/// - `top_index % page == 0`
/// - `top_index <= cursor - 1 < top_index + page`
///
/// Fields are private; all mutation goes through the transitions below.
#[derive(Debug)]
pub struct NavState {
    entries: Vec<Entry>,
    cursor: usize,
    top_index: usize,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl NavState {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            cursor: 1,
            top_index: 0,
        }
    }

    /// Replace the entry list wholesale; cursor and viewport reset to the
    /// first entry of the first page.
    pub fn replace(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
        self.cursor = 1;
        self.top_index = 0;
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 1-indexed cursor position. Meaningful only while the list is
    /// non-empty.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 0-indexed offset of the first visible row.
    pub fn top_index(&self) -> usize {
        self.top_index
    }

    /// The entry under the cursor, if any.
    pub fn selected(&self) -> Option<&Entry> {
        self.entries.get(self.cursor.wrapping_sub(1))
    }

    /// Move the cursor one entry down, scrolling a full page when it leaves
    /// the bottom of the current page and wrapping to the first entry past
    /// the end of the list.
    pub fn move_down(&mut self, page: usize) {
        if self.is_empty() || page == 0 {
            return;
        }
        if self.cursor == self.len() {
            self.cursor = 1;
            self.top_index = 0;
        } else if self.cursor % page == 0 {
            self.cursor += 1;
            self.top_index += page;
        } else {
            self.cursor += 1;
        }
    }

    /// Move the cursor one entry up, scrolling a full page when it leaves
    /// the top of the current page and wrapping to the last entry past the
    /// start of the list.
    pub fn move_up(&mut self, page: usize) {
        if self.is_empty() || page == 0 {
            return;
        }
        if self.cursor == 1 {
            // Wrap to the last entry; the viewport lands on the page that
            // contains it, including when `page` divides the length exactly.
            self.cursor = self.len();
            self.top_index = page * ((self.len() - 1) / page);
        } else if (self.cursor - 1) % page == 0 {
            self.cursor -= 1;
            self.top_index -= page;
        } else {
            self.cursor -= 1;
        }
    }

    /// Realign the viewport to the page containing the cursor.
    ///
    /// The page size is derived from the pane height each frame, so a
    /// terminal resize changes it between transitions; this restores the
    /// alignment invariants before anything is drawn.
    pub fn sync_viewport(&mut self, page: usize) {
        if page == 0 {
            return;
        }
        self.top_index = page * (self.cursor.saturating_sub(1) / page);
    }
}
