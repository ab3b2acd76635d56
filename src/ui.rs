use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders},
    Frame,
};

use crate::app::App;
use crate::components::controls::ControlsWidget;
use crate::components::listing::ListingWidget;
use crate::components::preview::PreviewWidget;
use crate::fs::reader::EntryKind;
use crate::preview_content;

/// Draw one frame.
///
/// Layout: listing pane on the left half, preview pane top-right, controls
/// pane bottom-right. The page size is derived from the listing pane's inner
/// height on every frame, so a resize realigns the viewport before anything
/// is drawn.
pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Listing rows visible at once; never zero so the page arithmetic stays
    // meaningful on tiny terminals.
    let page = (columns[0].height.saturating_sub(2) as usize).max(1);
    app.page = page;
    app.nav.sync_viewport(page);

    render_listing(app, frame, columns[0]);

    if app.show_controls {
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(ControlsWidget::height()),
            ])
            .split(columns[1]);
        render_preview(app, frame, right[0]);
        render_controls(app, frame, right[1]);
    } else {
        render_preview(app, frame, columns[1]);
    }
}

fn render_listing(app: &App, frame: &mut Frame, area: Rect) {
    let title = Span::styled(
        format!(" {} ", app.path.display()),
        Style::default()
            .fg(app.theme.path_fg)
            .add_modifier(Modifier::BOLD),
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_fg));

    frame.render_widget(ListingWidget::new(&app.nav, &app.theme).block(block), area);
}

/// The preview pane shows, in priority order: the last contained-failure
/// message, the selected entry's content, or nothing at all.
fn render_preview(app: &App, frame: &mut Frame, area: Rect) {
    let theme = &app.theme;
    let selected = app.nav.selected();

    let title = match selected {
        Some(entry) => {
            let title_style = match entry.kind {
                EntryKind::File => Style::default()
                    .fg(theme.preview_file_title_fg)
                    .add_modifier(Modifier::BOLD),
                EntryKind::Directory => Style::default()
                    .fg(theme.preview_dir_title_fg)
                    .add_modifier(Modifier::BOLD),
            };
            Span::styled(format!(" {} ", entry.name), title_style)
        }
        None => Span::styled(" Preview ", Style::default().fg(theme.dim_fg)),
    };

    let lines = if let Some(message) = &app.status_message {
        preview_content::error_lines(message, theme)
    } else if let Some(entry) = selected {
        let parent = app.path.current();
        let wrap_cols = area.width.saturating_sub(2) as usize;
        preview_content::build_preview(entry, &parent, area.height as usize, wrap_cols, theme)
            .unwrap_or_else(|err| preview_content::error_lines(&err.to_string(), theme))
    } else {
        Vec::new()
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_fg));

    frame.render_widget(PreviewWidget::new(&lines).block(block), area);
}

fn render_controls(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_fg));

    frame.render_widget(ControlsWidget::new(&app.theme).block(block), area);
}
