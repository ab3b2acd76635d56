use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::theme::ThemeColors;

/// A single keybinding entry for display.
struct KeyEntry {
    key: &'static str,
    description: &'static str,
}

/// Every binding shown here has a real handler; nothing is advertised that
/// is not wired up.
const CONTROL_KEYS: &[KeyEntry] = &[
    KeyEntry {
        key: "↑ / k",
        description: "Move up",
    },
    KeyEntry {
        key: "↓ / j",
        description: "Move down",
    },
    KeyEntry {
        key: "Enter",
        description: "Open selection",
    },
    KeyEntry {
        key: "q / F1",
        description: "Quit",
    },
];

/// Controls widget: the static key reference under the preview pane.
pub struct ControlsWidget<'a> {
    theme: &'a ThemeColors,
    block: Option<Block<'a>>,
}

impl<'a> ControlsWidget<'a> {
    pub fn new(theme: &'a ThemeColors) -> Self {
        Self { theme, block: None }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Pane height that fits every binding plus the border.
    pub fn height() -> u16 {
        CONTROL_KEYS.len() as u16 + 2
    }
}

impl<'a> Widget for ControlsWidget<'a> {
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

        let key_style = Style::default()
            .fg(self.theme.controls_key_fg)
            .add_modifier(Modifier::BOLD);
        let desc_style = Style::default().fg(self.theme.controls_desc_fg);

        for (i, entry) in CONTROL_KEYS
            .iter()
            .take(inner.height as usize)
            .enumerate()
        {
            let line = Line::from(vec![
                Span::styled(format!(" {:<7}", entry.key), key_style),
                Span::styled(entry.description, desc_style),
            ]);
            buf.set_line(inner.x, inner.y + i as u16, &line, inner.width);
        }
    }
}
