use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::nav::NavState;
use crate::theme::ThemeColors;

/// Listing widget: the visible page of the working directory's entries.
///
/// Rows are drawn from the navigation state's `top_index`; the cursor row is
/// rendered in the selection style. The widget never scrolls by itself; the
/// page to show is entirely determined by the navigation state.
pub struct ListingWidget<'a> {
    nav: &'a NavState,
    theme: &'a ThemeColors,
    block: Option<Block<'a>>,
}

impl<'a> ListingWidget<'a> {
    pub fn new(nav: &'a NavState, theme: &'a ThemeColors) -> Self {
        Self {
            nav,
            theme,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl<'a> Widget for ListingWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let entries = self.nav.entries();
        let start = self.nav.top_index();
        let end = (start + inner.height as usize).min(entries.len());
        if start >= end {
            return;
        }

        let selected_style = Style::default()
            .fg(self.theme.listing_selected_fg)
            .bg(self.theme.listing_selected_bg)
            .add_modifier(Modifier::BOLD);
        let dir_style = Style::default().fg(self.theme.listing_dir_fg);
        let file_style = Style::default().fg(self.theme.listing_fg);

        for (row, entry) in entries[start..end].iter().enumerate() {
            let index = start + row;
            let style = if index + 1 == self.nav.cursor() {
                selected_style
            } else if entry.is_dir() {
                dir_style
            } else {
                file_style
            };
            let line = Line::from(Span::styled(entry.name.clone(), style));
            buf.set_line(inner.x, inner.y + row as u16, &line, inner.width);
        }
    }
}
