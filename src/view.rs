use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line as TextLine,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{
    model::{Model, Row},
    view::{
        render::render_popup,
        status_bar::render_status_bar,
        util::{highlight_line, selection_style},
    },
};

mod item_row;
mod render;
mod section_header;
mod status_bar;
mod util;

/// Screen line of the first list row (just below the top border).
pub const LIST_TOP: u16 = 1;

/// Lines taken by everything but the list rows: two borders and the
/// status bar.
pub const CHROME_HEIGHT: u16 = 3;

/// The view functions draws the UI using the application
/// state (Model).
///
/// ┌Products────────────────────────────────────────┐
/// |∨Mac (8)                                        |
/// | MacBook                                        |
/// | Apple's ultraportable laptop, trading portab…  |
/// | ...                                            |
/// |>iPad (4)                                       |
/// |∨iPhone (4)                                     |
/// | iPhone 6s                                      |
/// | The iPhone 6S has a similar design to the 6 …  |
/// └────────────────────────────────────────────────┘
///  Mac                          1/15  ? help  q quit
///
/// Only rows inside the viewport are turned into lines.
pub fn view(model: &Model, frame: &mut Frame) {
    let [list_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    render_list(model, frame, list_area);

    let section = model.cursor_row().and_then(|row| {
        let section = row.section();
        let name = model.sections.section_name(section).ok()?;
        let collapsed = model.sections.is_collapsed(section).ok()?;
        Some((name, collapsed))
    });
    let position = (
        model.ui_model.cursor_position + 1,
        model.ui_model.rows.len(),
    );
    render_status_bar(frame, status_area, section, position, &model.theme);

    // Render popup overlay if present
    if let Some(popup) = &model.popup {
        render_popup(popup, frame, list_area, &model.theme);
    }
}

fn render_list(model: &Model, frame: &mut Frame, area: Rect) {
    let theme = &model.theme;
    let ui_model = &model.ui_model;
    // Content width and height are the area minus the borders
    let content_width = area.width.saturating_sub(2) as usize;
    let content_height = area.height.saturating_sub(2) as usize;
    let sel_style = selection_style(theme.selection_bg);

    let mut text: Vec<TextLine> = Vec::new();
    for index in ui_model.scroll_offset..ui_model.rows.len() {
        if text.len() >= content_height {
            break;
        }
        let Some(mut line_texts) = row_lines(model, index, content_width) else {
            continue;
        };

        if index == ui_model.cursor_position {
            for line in &mut line_texts {
                highlight_line(line, content_width, sel_style);
            }
        }
        text.extend(line_texts);
    }

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Products"));
    frame.render_widget(paragraph, area);
}

/// Lines for one row of the row table, pulled from the section model.
fn row_lines(model: &Model, index: usize, width: usize) -> Option<Vec<TextLine<'static>>> {
    let sections = &model.sections;
    match model.ui_model.rows.get(index)? {
        Row::Header { section } => Some(section_header::get_lines(
            sections.section_name(section).ok()?,
            sections.item_count(section).ok()?,
            sections.is_collapsed(section).ok()?,
            &model.theme,
        )),
        Row::Item { section, row } => Some(item_row::get_lines(
            sections.item(section, row).ok()?,
            width,
            &model.theme,
        )),
    }
}
