use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Widget},
};

/// Preview widget: renders pre-built content lines into the preview pane.
///
/// The lines are already capped at the pane's budget by the preview builder,
/// so there is no scrolling here; an empty slice renders an empty pane.
pub struct PreviewWidget<'a> {
    lines: &'a [Line<'static>],
    block: Option<Block<'a>>,
}

impl<'a> PreviewWidget<'a> {
    pub fn new(lines: &'a [Line<'static>]) -> Self {
        Self { lines, block: None }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl<'a> Widget for PreviewWidget<'a> {
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

        for (i, line) in self.lines.iter().take(inner.height as usize).enumerate() {
            buf.set_line(inner.x, inner.y + i as u16, line, inner.width);
        }
    }
}
